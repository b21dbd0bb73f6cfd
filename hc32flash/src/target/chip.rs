//! Chip/target abstraction.
//!
//! This module provides a trait-based abstraction over chip families so the
//! CLI can drive any supported part through one interface. Only the HC32L110
//! is implemented today; the shape leaves room for siblings with larger
//! flash or different loader blobs.

use std::fmt;
use std::io::Write;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::protocol::frame::FLASH_SIZE;

/// Supported chip families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChipFamily {
    /// HC32L110 series (Cortex-M0+, 16 KiB flash).
    #[default]
    Hc32l110,
}

impl ChipFamily {
    /// Get the flash capacity for this chip family in bytes.
    #[must_use]
    pub fn flash_size(&self) -> u32 {
        match self {
            Self::Hc32l110 => FLASH_SIZE,
        }
    }

    /// Get the chip family from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "hc32l110" | "hc32" => Some(Self::Hc32l110),
            _ => None,
        }
    }

    /// Create a flasher instance for this chip family.
    ///
    /// This is the main entry point for creating chip-specific flashers.
    ///
    /// # Arguments
    ///
    /// * `port_name` - Serial port name (e.g., "/dev/ttyUSB0" or "COM3")
    ///
    /// # Returns
    ///
    /// A boxed flasher instance implementing the [`Flasher`] trait
    pub fn create_flasher(&self, port_name: &str) -> Result<Box<dyn Flasher>> {
        match self {
            Self::Hc32l110 => {
                let flasher = super::hc32l110::flasher::Hc32l110Flasher::open(port_name)?;
                Ok(Box::new(flasher))
            }
        }
    }

    /// Create a flasher with an existing port (generic, works for any Port type).
    ///
    /// This is useful for testing or custom port implementations.
    pub fn create_flasher_with_port<P: crate::port::Port + 'static>(
        &self,
        port: P,
        config: ChipConfig,
    ) -> Result<Box<dyn Flasher>> {
        match self {
            Self::Hc32l110 => Ok(Box::new(
                super::hc32l110::flasher::Hc32l110Flasher::new(port, config),
            )),
        }
    }
}

impl fmt::Display for ChipFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hc32l110 => write!(f, "HC32L110"),
        }
    }
}

/// Erase scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EraseTarget {
    /// Erase the entire flash.
    Chip,
    /// Erase the sector containing the given address.
    Sector(u32),
}

/// Chip timing parameters.
///
/// Every delay and response budget the protocol needs lives here, so tests
/// can collapse them to zero and drive a scripted port without real sleeps.
#[derive(Debug, Clone)]
pub struct ChipConfig {
    /// Chip family.
    pub family: ChipFamily,
    /// RTS-held power-off interval before the boot window opens.
    pub power_cycle_delay: Duration,
    /// Budget for the ROM's handshake ack after the training pattern.
    pub handshake_timeout: Duration,
    /// Settle interval after a successful handshake.
    pub post_connect_delay: Duration,
    /// Budget for the upload-announce ack.
    pub ack_timeout: Duration,
    /// Budget for the loader-blob ack.
    pub ramcode_timeout: Duration,
    /// Budget for the post-execute byte stream.
    pub execute_timeout: Duration,
    /// Settle interval between loader install steps.
    pub step_delay: Duration,
    /// Settle interval after the loader starts, before commands.
    pub ready_delay: Duration,
    /// Settle interval before each read/write chunk.
    pub chunk_settle: Duration,
    /// Budget for a command response.
    pub response_timeout: Duration,
    /// Blocking-read timeout used as the poll interval.
    pub poll_interval: Duration,
}

impl ChipConfig {
    /// Create the configuration for the given family.
    pub fn new(family: ChipFamily) -> Self {
        match family {
            ChipFamily::Hc32l110 => Self {
                family,
                power_cycle_delay: Duration::from_secs(5),
                handshake_timeout: Duration::from_millis(20),
                post_connect_delay: Duration::from_millis(200),
                ack_timeout: Duration::from_secs(2),
                ramcode_timeout: Duration::from_secs(5),
                execute_timeout: Duration::from_secs(2),
                step_delay: Duration::from_millis(5),
                ready_delay: Duration::from_millis(10),
                chunk_settle: Duration::from_millis(1),
                response_timeout: Duration::from_millis(1000),
                poll_interval: Duration::from_millis(2),
            },
        }
    }

    /// Configuration with all delays and budgets collapsed, for scripted
    /// ports that answer instantly.
    #[cfg(test)]
    pub(crate) fn immediate() -> Self {
        let zero = Duration::ZERO;
        let fast = Duration::from_millis(10);
        Self {
            family: ChipFamily::Hc32l110,
            power_cycle_delay: zero,
            handshake_timeout: fast,
            post_connect_delay: zero,
            ack_timeout: fast,
            ramcode_timeout: fast,
            execute_timeout: fast,
            step_delay: zero,
            ready_delay: zero,
            chunk_settle: zero,
            response_timeout: fast,
            poll_interval: Duration::from_millis(1),
        }
    }
}

impl Default for ChipConfig {
    fn default() -> Self {
        Self::new(ChipFamily::default())
    }
}

/// Trait for flashing operations across all chip families.
///
/// This trait provides a unified interface for bootloader sessions,
/// allowing the CLI to work with any chip family through a common API.
pub trait Flasher {
    /// Power-cycle the device and perform the serial handshake.
    fn connect(&mut self) -> Result<()>;

    /// Upload the RAM loader and start it.
    ///
    /// Requires a prior successful [`connect`](Flasher::connect).
    fn install_loader(&mut self) -> Result<()>;

    /// Read `len` bytes of flash starting at `addr` into `dest`.
    ///
    /// Each verified chunk is written to `dest` as it arrives; `progress`
    /// is called with (bytes done, bytes total) after every chunk.
    fn read_flash(
        &mut self,
        addr: u32,
        len: u32,
        dest: &mut dyn Write,
        progress: &mut dyn FnMut(usize, usize),
    ) -> Result<()>;

    /// Program `data` into flash starting at `addr`.
    fn write_flash(
        &mut self,
        addr: u32,
        data: &[u8],
        progress: &mut dyn FnMut(usize, usize),
    ) -> Result<()>;

    /// Erase the whole chip or a single sector.
    fn erase(&mut self, target: EraseTarget) -> Result<()>;

    /// Current session state.
    fn state(&self) -> crate::session::SessionState;

    /// Close the flasher and release the port.
    ///
    /// Safe to call at any point; after it returns the flasher cannot be
    /// used for further operations.
    fn close(&mut self) -> Result<()>;
}

/// Check a flash address range before any wire traffic.
pub(crate) fn check_region(addr: u32, len: u32, capacity: u32) -> Result<()> {
    let end = u64::from(addr) + u64::from(len);
    if addr >= capacity || end > u64::from(capacity) {
        return Err(Error::Range {
            addr,
            len,
            capacity,
        });
    }
    Ok(())
}
