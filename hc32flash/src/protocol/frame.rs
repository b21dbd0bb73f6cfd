//! Flash-loader command frames.
//!
//! Once the RAM loader is running, every exchange uses the same checksummed
//! layout:
//!
//! ```text
//! +--------+--------+--------------+------------+-----------+-----+
//! | Marker | Sub-op | Address LE32 | Length LE16|  Payload  | Sum |
//! +--------+--------+--------------+------------+-----------+-----+
//! |  0x49  | 1 byte |   4 bytes    |  2 bytes   | 0..0x200  |  1  |
//! +--------+--------+--------------+------------+-----------+-----+
//! ```
//!
//! The trailer is the 8-bit modular sum of every preceding byte. Only write
//! commands carry a payload; erase commands zero the fields they do not use.

use {
    crate::protocol::checksum::sum8,
    byteorder::{LittleEndian, WriteBytesExt},
};

/// Total flash capacity of the HC32L110.
pub const FLASH_SIZE: u32 = 0x4000;

/// Maximum payload per read/write transfer.
pub const MAX_CHUNK: usize = 0x200;

/// First byte of every command and response frame.
pub const FRAME_MARKER: u8 = 0x49;

/// Single-byte ack emitted by the ROM after auto-baud training.
pub const HANDSHAKE_ACK: u8 = 0x11;

/// Single-byte ack for the loader upload steps.
pub const SUCCESS_ACK: u8 = 0x01;

/// Status byte value for a successful response.
pub const STATUS_OK: u8 = 0x00;

/// Length of a command frame without payload (header + trailer).
pub const CMD_LEN: usize = 9;

/// Length of the read-response header (marker through length field).
pub const RESP_HEADER_LEN: usize = 8;

/// Total length of a write/erase ack response.
pub const ACK_RESP_LEN: usize = 9;

/// Flash-loader sub-operation codes (second byte of a command frame).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SubOp {
    /// Erase the entire flash.
    ChipErase = 0x02,
    /// Erase the sector containing the given address.
    SectorErase = 0x03,
    /// Program a chunk of flash.
    Write = 0x04,
    /// Read a chunk of flash.
    Read = 0x05,
}

/// Command frame builder.
#[derive(Debug)]
pub struct CommandFrame {
    op: SubOp,
    data: Vec<u8>,
}

impl CommandFrame {
    fn new(op: SubOp) -> Self {
        Self {
            op,
            data: Vec::new(),
        }
    }

    /// Build a read command for `len` bytes starting at `addr`.
    #[allow(clippy::unwrap_used)] // Writing to Vec<u8> cannot fail
    pub fn read(addr: u32, len: u16) -> Self {
        let mut frame = Self::new(SubOp::Read);
        frame.data.write_u32::<LittleEndian>(addr).unwrap();
        frame.data.write_u16::<LittleEndian>(len).unwrap();
        frame
    }

    /// Build a write command carrying `payload` for flash address `addr`.
    ///
    /// The length field carries the payload length; the loader uses it to
    /// locate the trailer.
    #[allow(clippy::unwrap_used)] // Writing to Vec<u8> cannot fail
    #[allow(clippy::cast_possible_truncation)] // payload is capped at MAX_CHUNK
    pub fn write(addr: u32, payload: &[u8]) -> Self {
        debug_assert!(payload.len() <= MAX_CHUNK);
        let mut frame = Self::new(SubOp::Write);
        frame.data.write_u32::<LittleEndian>(addr).unwrap();
        frame
            .data
            .write_u16::<LittleEndian>(payload.len() as u16)
            .unwrap();
        frame.data.extend_from_slice(payload);
        frame
    }

    /// Build a whole-chip erase command.
    pub fn chip_erase() -> Self {
        let mut frame = Self::new(SubOp::ChipErase);
        frame.data.extend_from_slice(&[0u8; 6]);
        frame
    }

    /// Build a sector erase command for the sector containing `addr`.
    #[allow(clippy::unwrap_used)] // Writing to Vec<u8> cannot fail
    pub fn sector_erase(addr: u32) -> Self {
        let mut frame = Self::new(SubOp::SectorErase);
        frame.data.write_u32::<LittleEndian>(addr).unwrap();
        frame.data.extend_from_slice(&[0u8; 2]);
        frame
    }

    /// Build the complete frame, appending the checksum trailer.
    pub fn build(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(2 + self.data.len() + 1);
        buf.push(FRAME_MARKER);
        buf.push(self.op as u8);
        buf.extend_from_slice(&self.data);
        buf.push(sum8(&buf));
        buf
    }

    /// Get the sub-operation code.
    pub fn sub_op(&self) -> SubOp {
        self.op
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_frame_layout() {
        let data = CommandFrame::read(0x1000, 0x200).build();
        assert_eq!(data.len(), CMD_LEN);
        assert_eq!(data[0], FRAME_MARKER);
        assert_eq!(data[1], SubOp::Read as u8);
        // Address, little-endian
        assert_eq!(&data[2..6], &[0x00, 0x10, 0x00, 0x00]);
        // Length, little-endian
        assert_eq!(&data[6..8], &[0x00, 0x02]);
        assert_eq!(data[8], sum8(&data[..8]));
    }

    #[test]
    fn test_write_frame_layout() {
        let payload = [0xAA, 0xBB, 0xCC];
        let data = CommandFrame::write(0x0123, &payload).build();
        assert_eq!(data.len(), 8 + payload.len() + 1);
        assert_eq!(data[1], SubOp::Write as u8);
        assert_eq!(&data[2..6], &[0x23, 0x01, 0x00, 0x00]);
        assert_eq!(&data[6..8], &[0x03, 0x00]);
        assert_eq!(&data[8..11], &payload);
        assert_eq!(data[11], sum8(&data[..11]));
    }

    #[test]
    fn test_chip_erase_frame() {
        let data = CommandFrame::chip_erase().build();
        assert_eq!(data.len(), CMD_LEN);
        assert_eq!(data[1], SubOp::ChipErase as u8);
        // No address or length fields
        assert_eq!(&data[2..8], &[0u8; 6]);
        assert_eq!(data[8], sum8(&data[..8]));
    }

    #[test]
    fn test_sector_erase_frame_carries_address() {
        let data = CommandFrame::sector_erase(0x1000).build();
        assert_eq!(data.len(), CMD_LEN);
        assert_eq!(data[1], SubOp::SectorErase as u8);
        assert_eq!(&data[2..6], &[0x00, 0x10, 0x00, 0x00]);
        assert_eq!(&data[6..8], &[0x00, 0x00]);
    }

    #[test]
    fn test_trailer_is_modular_sum() {
        let data = CommandFrame::write(0xFFFF_FFFF, &[0xFF; 16]).build();
        let last = data.len() - 1;
        assert_eq!(data[last], sum8(&data[..last]));
    }

    #[test]
    fn test_sub_op_getter() {
        assert_eq!(CommandFrame::read(0, 1).sub_op(), SubOp::Read);
        assert_eq!(CommandFrame::chip_erase().sub_op(), SubOp::ChipErase);
    }
}
