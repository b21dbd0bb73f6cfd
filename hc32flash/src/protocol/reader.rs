//! Deadline-bounded byte collection.
//!
//! The bootloader link is half-duplex and unreliable, so every receive step
//! is a poll loop against a wall-clock deadline. The port is configured
//! with a short blocking-read timeout; a read that yields nothing counts as
//! "no data yet" and the deadline is re-checked before polling again.
//!
//! Four stop conditions are built on the single-byte poll, matching the
//! shapes the protocol produces: one expected byte, an ack byte, a raw byte
//! count, and a checksummed response frame.

use std::time::{Duration, Instant};

use log::trace;

use crate::error::{Error, Result};
use crate::port::Port;
use crate::protocol::checksum::sum8;
use crate::protocol::frame::{ACK_RESP_LEN, FRAME_MARKER, MAX_CHUNK, RESP_HEADER_LEN, STATUS_OK, SUCCESS_ACK};

/// Shape of the response frame being collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// Fixed 9-byte ack (write/erase responses).
    Ack,
    /// 8-byte header with embedded payload length, payload, trailer
    /// (read responses).
    ReadData,
}

/// Poll the port for a single byte.
///
/// Returns `Ok(None)` when no data is available yet; only genuine transport
/// failures surface as errors.
pub fn poll_byte<P: Port>(port: &mut P) -> Result<Option<u8>> {
    let mut buf = [0u8; 1];
    match port.read(&mut buf) {
        Ok(0) => Ok(None),
        Ok(_) => Ok(Some(buf[0])),
        Err(e)
            if e.kind() == std::io::ErrorKind::TimedOut
                || e.kind() == std::io::ErrorKind::WouldBlock =>
        {
            Ok(None)
        }
        Err(e) => Err(Error::Io(e)),
    }
}

/// Wait for exactly `expected`; any other byte is an immediate mismatch.
pub fn await_byte_equal<P: Port>(
    port: &mut P,
    expected: u8,
    timeout: Duration,
    what: &'static str,
) -> Result<()> {
    let start = Instant::now();
    loop {
        if let Some(b) = poll_byte(port)? {
            trace!("<- {b:#04x} (awaiting {what})");
            if b == expected {
                return Ok(());
            }
            return Err(Error::UnexpectedByte {
                expected,
                actual: b,
            });
        }
        if start.elapsed() >= timeout {
            return Err(Error::Timeout {
                what,
                after: timeout,
            });
        }
    }
}

/// Wait for the generic success ack; any other byte is an explicit NACK.
pub fn await_ack<P: Port>(port: &mut P, timeout: Duration, what: &'static str) -> Result<()> {
    let start = Instant::now();
    loop {
        if let Some(b) = poll_byte(port)? {
            trace!("<- {b:#04x} (awaiting {what})");
            if b == SUCCESS_ACK {
                return Ok(());
            }
            return Err(Error::Nack { actual: b });
        }
        if start.elapsed() >= timeout {
            return Err(Error::Timeout {
                what,
                after: timeout,
            });
        }
    }
}

/// Absorb `count` bytes, ignoring their content.
///
/// The freshly booted loader streams a short burst instead of a structured
/// frame; this is the only place that burst is consumed.
pub fn await_byte_count<P: Port>(
    port: &mut P,
    count: usize,
    timeout: Duration,
    what: &'static str,
) -> Result<()> {
    let start = Instant::now();
    let mut received = 0usize;
    loop {
        if poll_byte(port)?.is_some() {
            received += 1;
            if received == count {
                trace!("<- {count} bytes absorbed ({what})");
                return Ok(());
            }
        }
        if start.elapsed() >= timeout {
            return Err(Error::Timeout {
                what,
                after: timeout,
            });
        }
    }
}

/// Collect a complete checksummed response frame.
///
/// The marker and status bytes are validated as soon as they arrive; for
/// `ReadData` shapes the embedded length is validated as soon as the field
/// is complete. The frame only completes once every byte has arrived and
/// the trailer matches the modular sum of the rest. Checksum failure is a
/// hard error, never a retried partial read.
pub fn await_response<P: Port>(
    port: &mut P,
    shape: ResponseShape,
    timeout: Duration,
    what: &'static str,
) -> Result<Vec<u8>> {
    let start = Instant::now();
    let mut buf: Vec<u8> = Vec::with_capacity(RESP_HEADER_LEN + MAX_CHUNK + 1);
    let mut total = match shape {
        ResponseShape::Ack => Some(ACK_RESP_LEN),
        ResponseShape::ReadData => None,
    };

    loop {
        if let Some(b) = poll_byte(port)? {
            buf.push(b);
            match buf.len() - 1 {
                0 => {
                    if b != FRAME_MARKER {
                        return Err(Error::UnexpectedByte {
                            expected: FRAME_MARKER,
                            actual: b,
                        });
                    }
                }
                1 => {
                    if b != STATUS_OK {
                        return Err(Error::Status { status: b });
                    }
                }
                7 if shape == ResponseShape::ReadData => {
                    let len = usize::from(u16::from_le_bytes([buf[6], buf[7]]));
                    if len == 0 || len > MAX_CHUNK {
                        return Err(Error::Protocol(format!(
                            "response payload length {len:#x} out of range"
                        )));
                    }
                    total = Some(RESP_HEADER_LEN + len + 1);
                }
                _ => {}
            }

            if Some(buf.len()) == total {
                let trailer = buf.len() - 1;
                let expected = sum8(&buf[..trailer]);
                let actual = buf[trailer];
                if expected != actual {
                    return Err(Error::ChecksumMismatch { expected, actual });
                }
                trace!("<- {} byte response ({what})", buf.len());
                return Ok(buf);
            }
        }
        if start.elapsed() >= timeout {
            return Err(Error::Timeout {
                what,
                after: timeout,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::mock::MockPort;

    const FAST: Duration = Duration::from_millis(10);

    fn ack_response() -> Vec<u8> {
        let mut resp = vec![FRAME_MARKER, 0, 0, 0, 0, 0, 0, 0];
        resp.push(sum8(&resp));
        resp
    }

    fn read_response(addr: u32, payload: &[u8]) -> Vec<u8> {
        let mut resp = vec![FRAME_MARKER, 0];
        resp.extend_from_slice(&addr.to_le_bytes());
        resp.extend_from_slice(&(payload.len() as u16).to_le_bytes());
        resp.extend_from_slice(payload);
        resp.push(sum8(&resp));
        resp
    }

    #[test]
    fn test_await_byte_equal_match() {
        let mut port = MockPort::new();
        port.push_rx(&[0x11]);
        assert!(await_byte_equal(&mut port, 0x11, FAST, "ack").is_ok());
    }

    #[test]
    fn test_await_byte_equal_mismatch_is_hard_failure() {
        let mut port = MockPort::new();
        port.push_rx(&[0x12]);
        let err = await_byte_equal(&mut port, 0x11, FAST, "ack").unwrap_err();
        assert!(matches!(
            err,
            Error::UnexpectedByte {
                expected: 0x11,
                actual: 0x12
            }
        ));
    }

    #[test]
    fn test_await_byte_equal_times_out() {
        let mut port = MockPort::new();
        let err = await_byte_equal(&mut port, 0x11, FAST, "ack").unwrap_err();
        assert!(matches!(err, Error::Timeout { .. }));
    }

    #[test]
    fn test_await_ack_success() {
        let mut port = MockPort::new();
        port.push_rx(&[SUCCESS_ACK]);
        assert!(await_ack(&mut port, FAST, "upload ack").is_ok());
    }

    #[test]
    fn test_await_ack_nack_not_retried() {
        let mut port = MockPort::new();
        port.push_rx(&[0x05, SUCCESS_ACK]);
        let err = await_ack(&mut port, FAST, "upload ack").unwrap_err();
        assert!(matches!(err, Error::Nack { actual: 0x05 }));
    }

    #[test]
    fn test_await_byte_count_absorbs_exactly_n() {
        let mut port = MockPort::new();
        port.push_rx(&[0xAA; 11]);
        assert!(await_byte_count(&mut port, 11, FAST, "execute ack").is_ok());
    }

    #[test]
    fn test_await_byte_count_short_stream_times_out() {
        let mut port = MockPort::new();
        port.push_rx(&[0xAA; 5]);
        let err = await_byte_count(&mut port, 11, FAST, "execute ack").unwrap_err();
        assert!(matches!(err, Error::Timeout { .. }));
    }

    #[test]
    fn test_await_response_ack_shape() {
        let mut port = MockPort::new();
        port.push_rx(&ack_response());
        let resp = await_response(&mut port, ResponseShape::Ack, FAST, "ack").unwrap();
        assert_eq!(resp.len(), ACK_RESP_LEN);
    }

    #[test]
    fn test_await_response_bad_marker() {
        let mut port = MockPort::new();
        port.push_rx(&[0x48]);
        let err = await_response(&mut port, ResponseShape::Ack, FAST, "ack").unwrap_err();
        assert!(matches!(err, Error::UnexpectedByte { .. }));
    }

    #[test]
    fn test_await_response_bad_status() {
        let mut port = MockPort::new();
        port.push_rx(&[FRAME_MARKER, 0x05]);
        let err = await_response(&mut port, ResponseShape::Ack, FAST, "ack").unwrap_err();
        assert!(matches!(err, Error::Status { status: 0x05 }));
    }

    #[test]
    fn test_await_response_read_shape() {
        let payload: Vec<u8> = (0..=0xFF).map(|b| b as u8).collect();
        let mut port = MockPort::new();
        port.push_rx(&read_response(0x100, &payload));
        let resp =
            await_response(&mut port, ResponseShape::ReadData, FAST, "read chunk").unwrap();
        assert_eq!(&resp[RESP_HEADER_LEN..resp.len() - 1], &payload[..]);
    }

    #[test]
    fn test_await_response_oversized_length_rejected() {
        let mut port = MockPort::new();
        // Length field = 0x201, one over the chunk cap.
        port.push_rx(&[FRAME_MARKER, 0, 0, 0, 0, 0, 0x01, 0x02]);
        let err =
            await_response(&mut port, ResponseShape::ReadData, FAST, "read chunk").unwrap_err();
        assert!(matches!(err, Error::Protocol(_)));
    }

    #[test]
    fn test_await_response_single_bit_flip_fails_checksum() {
        let payload = [0x5A; 32];
        let base = read_response(0x40, &payload);
        // Flip one bit of each byte that cannot trip an earlier structural
        // check, and make sure the trailer catches it.
        for idx in 2..base.len() - 1 {
            let mut corrupted = base.clone();
            corrupted[idx] ^= 0x80;
            if idx == 6 || idx == 7 {
                // Corrupting the length field trips the length check or
                // shifts the frame; either way it must not validate.
                let mut port = MockPort::new();
                port.push_rx(&corrupted);
                assert!(
                    await_response(&mut port, ResponseShape::ReadData, FAST, "read chunk")
                        .is_err()
                );
                continue;
            }
            let mut port = MockPort::new();
            port.push_rx(&corrupted);
            let err = await_response(&mut port, ResponseShape::ReadData, FAST, "read chunk")
                .unwrap_err();
            assert!(
                matches!(err, Error::ChecksumMismatch { .. }),
                "byte {idx}: {err}"
            );
        }
    }

    #[test]
    fn test_await_response_partial_frame_times_out() {
        let payload = [0x33; 8];
        let resp = read_response(0, &payload);
        let mut port = MockPort::new();
        port.push_rx(&resp[..resp.len() - 3]);
        let err =
            await_response(&mut port, ResponseShape::ReadData, FAST, "read chunk").unwrap_err();
        assert!(matches!(err, Error::Timeout { .. }));
    }
}
