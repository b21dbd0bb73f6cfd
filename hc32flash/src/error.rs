//! Error types for hc32flash.

use std::io;
use std::time::Duration;
use thiserror::Error;

/// Result type for hc32flash operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for hc32flash operations.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (serial port, file operations).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serial port error.
    #[error("Serial port error: {0}")]
    Serial(#[from] serialport::Error),

    /// Expected byte or frame did not arrive within its budget.
    #[error("Timeout waiting for {what} after {after:?}")]
    Timeout {
        /// What was being waited for.
        what: &'static str,
        /// The timeout budget that elapsed.
        after: Duration,
    },

    /// A single expected byte arrived with the wrong value.
    #[error("Unexpected byte: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedByte {
        /// The byte that was expected.
        expected: u8,
        /// The byte that arrived.
        actual: u8,
    },

    /// Device answered with something other than the success ack.
    #[error("Device rejected the command (got {actual:#04x} instead of ack)")]
    Nack {
        /// The byte received in place of the ack.
        actual: u8,
    },

    /// Frame trailer checksum mismatch.
    #[error("Checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch {
        /// Checksum recomputed over the received frame.
        expected: u8,
        /// Checksum byte carried by the frame.
        actual: u8,
    },

    /// Response frame carried a non-zero status byte.
    #[error("Device reported error status {status:#04x}")]
    Status {
        /// The status byte from the response.
        status: u8,
    },

    /// Structural protocol violation.
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Requested flash region falls outside the device capacity.
    #[error(
        "Region {addr:#06x}+{len:#x} exceeds flash capacity {capacity:#06x}"
    )]
    Range {
        /// Start address of the rejected region.
        addr: u32,
        /// Length of the rejected region.
        len: u32,
        /// Total device capacity.
        capacity: u32,
    },
}
