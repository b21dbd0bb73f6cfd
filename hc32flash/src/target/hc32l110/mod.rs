//! HC32L110 target support.

mod assets;
pub(super) mod flasher;
