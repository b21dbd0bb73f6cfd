//! HC32L110 bootloader protocol implementation.

pub mod checksum;
pub mod frame;
pub mod reader;

// Re-export common types
pub use frame::{CommandFrame, SubOp};
pub use reader::ResponseShape;
