//! # hc32flash
//!
//! A library for flashing HC32L110 microcontrollers over the ROM serial
//! bootloader.
//!
//! This crate provides the core functionality for talking to the chip's
//! factory bootloader via a UART link, including:
//!
//! - Wake/auto-baud handshake (RTS power cycle + training pattern)
//! - Upload and execution of the in-RAM flash loader
//! - Checksummed read/write/erase commands in 512-byte chunks
//! - Deadline-bounded byte collection over an unreliable half-duplex link
//!
//! ## Supported Chips
//!
//! - HC32L110 (16 KiB flash)
//!
//! ## Example
//!
//! ```rust,no_run
//! use hc32flash::{ChipFamily, Operation, Session};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let flasher = ChipFamily::Hc32l110.create_flasher("/dev/ttyUSB0")?;
//!     let image = std::fs::read("firmware.bin")?;
//!
//!     let session = Session::new(flasher);
//!     session.run(
//!         Operation::Write { addr: 0, data: &image },
//!         &mut |done, total| println!("{done}/{total}"),
//!     )?;
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod port;
pub mod protocol;
pub mod session;
pub mod target;

// Re-exports for convenience
// Hc32l110Flasher is not exported directly; use the Flasher trait.
pub use {
    error::{Error, Result},
    port::{NativePort, NativePortEnumerator, Port, PortEnumerator, PortInfo, SerialConfig},
    protocol::frame::{FLASH_SIZE, MAX_CHUNK},
    session::{Operation, Session, SessionState},
    target::{ChipConfig, ChipFamily, EraseTarget, Flasher},
};
