//! Scripted in-memory port for protocol tests.

use std::collections::VecDeque;
use std::io::{Read, Write};
use std::time::Duration;

use crate::error::Result;
use crate::port::Port;

/// A port whose receive side is fed by the test and whose transmit side is
/// recorded, one `write` call per entry.
///
/// An empty receive queue behaves like a quiet line: reads fail with
/// `TimedOut`, which the protocol layer treats as "no data yet".
pub struct MockPort {
    rx: VecDeque<u8>,
    /// Each `write` call, in order.
    pub writes: Vec<Vec<u8>>,
    /// RTS transitions, in order.
    pub rts: Vec<bool>,
    /// Number of `clear_buffers` calls.
    pub clears: usize,
    /// Whether `close` has been called.
    pub closed: bool,
    timeout: Duration,
}

impl MockPort {
    pub fn new() -> Self {
        Self {
            rx: VecDeque::new(),
            writes: Vec::new(),
            rts: Vec::new(),
            clears: 0,
            closed: false,
            timeout: Duration::from_millis(1),
        }
    }

    /// Queue bytes for the protocol layer to receive.
    pub fn push_rx(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes.iter().copied());
    }

    /// All bytes written so far, flattened.
    pub fn written(&self) -> Vec<u8> {
        self.writes.concat()
    }
}

impl Read for MockPort {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if self.rx.is_empty() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::TimedOut,
                "no data",
            ));
        }
        let n = buf.len().min(self.rx.len());
        for slot in buf.iter_mut().take(n) {
            *slot = self.rx.pop_front().unwrap();
        }
        Ok(n)
    }
}

impl Write for MockPort {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writes.push(buf.to_vec());
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Port for MockPort {
    fn set_timeout(&mut self, timeout: Duration) -> Result<()> {
        self.timeout = timeout;
        Ok(())
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }

    fn clear_buffers(&mut self) -> Result<()> {
        // Scripted responses must survive the protocol's post-handshake
        // flush, so only count the call.
        self.clears += 1;
        Ok(())
    }

    fn name(&self) -> &str {
        "mock"
    }

    fn set_rts(&mut self, level: bool) -> Result<()> {
        self.rts.push(level);
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.closed = true;
        Ok(())
    }
}
