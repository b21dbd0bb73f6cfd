//! Chip targets.

pub mod chip;
mod hc32l110;

pub use chip::{ChipConfig, ChipFamily, EraseTarget, Flasher};
