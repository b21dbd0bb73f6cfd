//! Bootloader session lifecycle.
//!
//! A session owns a flasher for exactly one operation: it connects,
//! installs the RAM loader, runs the requested flash operation, and closes
//! the port. Teardown happens on every exit path, success or failure, so a
//! crashed transfer never leaves the port held open or the device powered
//! down.

use std::io::Write;

use log::warn;

use crate::error::Result;
use crate::target::{EraseTarget, Flasher};

/// Where a session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No contact with the device yet.
    Disconnected,
    /// ROM handshake complete.
    Connected,
    /// RAM loader uploaded but not yet started.
    LoaderInstalled,
    /// Loader running, ready for flash commands.
    Ready,
    /// A read transfer is in progress.
    Reading,
    /// A write transfer is in progress.
    Writing,
    /// An erase is in progress.
    Erasing,
    /// Port released; the session is over.
    Closed,
}

/// A single flash operation to run against the device.
pub enum Operation<'a> {
    /// Connect and stop: handshake with the ROM but leave the loader
    /// uninstalled, so another tool can drive the ROM directly.
    Bypass,
    /// Read `len` bytes starting at `addr` into `dest`.
    Read {
        /// Flash start address.
        addr: u32,
        /// Number of bytes to read.
        len: u32,
        /// Where verified chunks are delivered.
        dest: &'a mut dyn Write,
    },
    /// Program `data` into flash starting at `addr`.
    Write {
        /// Flash start address.
        addr: u32,
        /// Image to program.
        data: &'a [u8],
    },
    /// Erase the chip or one sector.
    Erase {
        /// Erase scope.
        target: EraseTarget,
    },
}

/// One-shot bootloader session.
pub struct Session {
    flasher: Box<dyn Flasher>,
}

impl Session {
    /// Wrap a flasher in a session.
    pub fn new(flasher: Box<dyn Flasher>) -> Self {
        Self { flasher }
    }

    /// Run one operation end to end, then release the port.
    ///
    /// `progress` is called with (bytes done, bytes total) during read and
    /// write transfers. Close failures are logged rather than escalated;
    /// the operation's own result is what matters.
    pub fn run(
        mut self,
        op: Operation<'_>,
        progress: &mut dyn FnMut(usize, usize),
    ) -> Result<()> {
        let result = self.drive(op, progress);
        if let Err(e) = self.flasher.close() {
            warn!("Failed to close port cleanly: {e}");
        }
        result
    }

    fn drive(
        &mut self,
        op: Operation<'_>,
        progress: &mut dyn FnMut(usize, usize),
    ) -> Result<()> {
        self.flasher.connect()?;

        if matches!(op, Operation::Bypass) {
            return Ok(());
        }

        self.flasher.install_loader()?;

        match op {
            Operation::Bypass => unreachable!(),
            Operation::Read { addr, len, dest } => {
                self.flasher.read_flash(addr, len, dest, progress)
            }
            Operation::Write { addr, data } => self.flasher.write_flash(addr, data, progress),
            Operation::Erase { target } => self.flasher.erase(target),
        }
    }
}
