//! Fixed byte sequences the ROM bootloader and RAM loader expect.

/// Auto-baud training pattern sent while the ROM boot window is open.
///
/// 48 repetitions of the {0x18, 0xFF} pair; the ROM measures the bit
/// timing of these bytes to lock its UART to the host's rate.
pub const TRAINING_PATTERN: [u8; 96] = {
    let mut buf = [0u8; 96];
    let mut i = 0;
    while i < 96 {
        buf[i] = 0x18;
        buf[i + 1] = 0xff;
        i += 2;
    }
    buf
};

/// Upload announcement: tells the ROM where the loader goes and how big
/// it is. Fixed bytes, checksum included.
pub const UPLOAD: [u8; 10] = [0x00, 0x00, 0x00, 0x00, 0x20, 0xa4, 0x07, 0x00, 0x00, 0xcb];

/// Execute trigger: tells the ROM to jump into the uploaded loader.
pub const EXECUTE: [u8; 10] = [0xc0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xc0];

/// Number of bytes the loader streams out right after it starts.
pub const EXECUTE_ACK_COUNT: usize = 11;

/// The RAM loader image, a Cortex-M0+ binary linked for SRAM.
///
/// The ROM can only talk; this program is what actually erases, programs
/// and reads the flash array.
pub const RAMCODE: [u8; 1957] = [
    0xb8, 0x0a, 0x00, 0x20, 0x09, 0x00, 0x00, 0x20, 0x72, 0xb6, 0x03, 0x48, 0x01, 0x68, 0x81, 0xf3,
    0x08, 0x88, 0x02, 0x48, 0x00, 0x47, 0x00, 0x00, 0x00, 0x00, 0x00, 0x20, 0x95, 0x07, 0x00, 0x20,
    0xc0, 0x68, 0x01, 0x68, 0x6e, 0x48, 0x01, 0x62, 0x6e, 0x4a, 0x89, 0x18, 0x6e, 0x4a, 0x91, 0x42,
    0x01, 0xd3, 0x06, 0x21, 0x81, 0x71, 0x70, 0x47, 0x80, 0xb5, 0x00, 0xf0, 0xe7, 0xf8, 0x6b, 0x48,
    0x01, 0x68, 0x03, 0x22, 0x0a, 0x43, 0x02, 0x60, 0x00, 0x21, 0x09, 0x60, 0x01, 0x68, 0xca, 0x06,
    0xd2, 0x0f, 0xfb, 0xd1, 0x01, 0xbd, 0x10, 0xb5, 0x04, 0x00, 0x60, 0x68, 0x80, 0x21, 0x09, 0x02,
    0x88, 0x42, 0x05, 0xd3, 0x62, 0x49, 0x40, 0x18, 0x80, 0x21, 0x89, 0x00, 0x88, 0x42, 0x10, 0xd2,
    0x00, 0xf0, 0xcc, 0xf8, 0x5d, 0x48, 0x01, 0x68, 0x03, 0x22, 0x91, 0x43, 0x02, 0x22, 0x0a, 0x43,
    0x02, 0x60, 0x00, 0x21, 0x62, 0x68, 0x11, 0x60, 0x01, 0x68, 0xca, 0x06, 0xd2, 0x0f, 0x03, 0xd0,
    0xfa, 0xe7, 0x05, 0x20, 0x52, 0x49, 0x88, 0x71, 0x10, 0xbd, 0x80, 0xb5, 0x01, 0x00, 0x4a, 0x69,
    0x48, 0x68, 0x80, 0x23, 0x1b, 0x02, 0x9a, 0x42, 0x05, 0xd3, 0x52, 0x4b, 0x98, 0x42, 0x07, 0xd3,
    0x51, 0x4b, 0x9a, 0x42, 0x04, 0xd2, 0x0a, 0x89, 0xc9, 0x68, 0x00, 0xf0, 0x01, 0xf9, 0x01, 0xbd,
    0x05, 0x20, 0x47, 0x49, 0x88, 0x71, 0x01, 0xbd, 0x80, 0xb5, 0x01, 0x89, 0x44, 0x4a, 0x91, 0x80,
    0x02, 0x89, 0xc1, 0x68, 0x40, 0x68, 0x00, 0xf0, 0x28, 0xf9, 0x01, 0xbd, 0x1c, 0xb5, 0x00, 0x21,
    0x6a, 0x46, 0x11, 0x80, 0xc1, 0x68, 0x09, 0x68, 0x40, 0x68, 0x3d, 0x4c, 0x42, 0x18, 0x52, 0x1e,
    0x80, 0x23, 0x1b, 0x02, 0x9a, 0x42, 0x02, 0xd3, 0x05, 0x20, 0xa0, 0x71, 0x02, 0xe0, 0x6a, 0x46,
    0x00, 0xf0, 0xbf, 0xf8, 0x3d, 0x48, 0x69, 0x46, 0x09, 0x88, 0x01, 0x72, 0x69, 0x46, 0x09, 0x88,
    0x09, 0x0a, 0x41, 0x72, 0x02, 0x20, 0xa0, 0x80, 0x13, 0xbd, 0x7c, 0xb5, 0x00, 0x22, 0x00, 0x92,
    0xc1, 0x68, 0x09, 0x68, 0x2e, 0x4e, 0x01, 0x25, 0xb5, 0x80, 0x34, 0x4c, 0x22, 0x72, 0x6a, 0x46,
    0x40, 0x68, 0x00, 0xf0, 0xb3, 0xf8, 0x00, 0x28, 0x02, 0xd0, 0x00, 0x98, 0x30, 0x60, 0x73, 0xbd,
    0x25, 0x72, 0x73, 0xbd, 0x01, 0x20, 0x26, 0x49, 0x88, 0x80, 0x2c, 0x49, 0x2c, 0x4a, 0x12, 0x78,
    0xff, 0x2a, 0x00, 0xd1, 0x00, 0x20, 0x08, 0x72, 0x70, 0x47, 0x80, 0xb5, 0xee, 0x20, 0x69, 0x46,
    0x08, 0x70, 0x01, 0x22, 0x26, 0x48, 0x00, 0xf0, 0xab, 0xf8, 0x01, 0x22, 0x69, 0x46, 0x25, 0x48,
    0x00, 0xf0, 0xa6, 0xf8, 0x01, 0xbd, 0x70, 0x47, 0x10, 0xb5, 0x19, 0x4c, 0x10, 0xe0, 0x02, 0x20,
    0xa0, 0x71, 0x20, 0x00, 0x00, 0xf0, 0x52, 0xf9, 0xa0, 0x88, 0x00, 0xf0, 0x6e, 0xf9, 0x60, 0x7a,
    0x01, 0x28, 0x05, 0xd1, 0xa0, 0x79, 0x00, 0x28, 0x02, 0xd1, 0x20, 0x6a, 0x00, 0xf0, 0x8a, 0xf9,
    0x00, 0xf0, 0x6b, 0xf9, 0x00, 0xf0, 0xee, 0xf8, 0x01, 0x28, 0xf9, 0xd1, 0x18, 0x21, 0x20, 0x00,
    0x08, 0x30, 0x00, 0xf0, 0xc5, 0xf9, 0x20, 0x00, 0x08, 0x30, 0x00, 0xf0, 0xfa, 0xf8, 0xa0, 0x71,
    0xe1, 0x68, 0x21, 0x60, 0x00, 0x21, 0xa1, 0x80, 0x00, 0x28, 0xda, 0xd1, 0x0e, 0x48, 0x61, 0x7a,
    0x89, 0x00, 0x41, 0x58, 0x00, 0x29, 0xd2, 0xd0, 0x20, 0x00, 0x08, 0x30, 0x88, 0x47, 0xd0, 0xe7,
    0x10, 0x0a, 0x00, 0x20, 0x80, 0xda, 0xff, 0xff, 0xc1, 0x1c, 0x0f, 0x00, 0x20, 0x00, 0x02, 0x40,
    0x00, 0xf6, 0xef, 0xff, 0x00, 0x0a, 0x10, 0x00, 0x00, 0x0c, 0x10, 0x00, 0x04, 0x08, 0x00, 0x20,
    0xfc, 0x0b, 0x10, 0x00, 0xf6, 0x0b, 0x10, 0x00, 0xd4, 0x06, 0x00, 0x20, 0x4d, 0x48, 0x4e, 0x49,
    0x01, 0x60, 0x4e, 0x49, 0x01, 0x60, 0x70, 0x47, 0x10, 0xb5, 0x4d, 0x49, 0x4a, 0x4a, 0xca, 0x62,
    0x4a, 0x4b, 0xcb, 0x62, 0x44, 0x01, 0x0c, 0x60, 0xca, 0x62, 0xcb, 0x62, 0x17, 0x24, 0x44, 0x43,
    0x4c, 0x60, 0xca, 0x62, 0xcb, 0x62, 0x1b, 0x24, 0x44, 0x43, 0x8c, 0x60, 0xca, 0x62, 0xcb, 0x62,
    0x44, 0x4c, 0x44, 0x43, 0xcc, 0x60, 0xca, 0x62, 0xcb, 0x62, 0x43, 0x4c, 0x44, 0x43, 0x0c, 0x61,
    0xca, 0x62, 0xcb, 0x62, 0x18, 0x24, 0x44, 0x43, 0x4c, 0x61, 0xca, 0x62, 0xcb, 0x62, 0xf0, 0x24,
    0x44, 0x43, 0x8c, 0x61, 0xca, 0x62, 0xcb, 0x62, 0xfa, 0x24, 0xa4, 0x00, 0x60, 0x43, 0xc8, 0x61,
    0xca, 0x62, 0xcb, 0x62, 0x00, 0x20, 0x08, 0x62, 0xca, 0x62, 0xcb, 0x62, 0x37, 0x48, 0x08, 0x63,
    0x10, 0xbd, 0x30, 0xb5, 0x00, 0x23, 0x00, 0x24, 0x03, 0xe0, 0x05, 0x78, 0x5b, 0x19, 0x40, 0x1c,
    0x64, 0x1c, 0x8c, 0x42, 0xf9, 0xd3, 0x13, 0x80, 0x00, 0x20, 0x30, 0xbd, 0x30, 0xb5, 0x03, 0x00,
    0x00, 0x24, 0x00, 0xe0, 0x64, 0x1c, 0x8c, 0x42, 0x08, 0xd2, 0x1d, 0x00, 0x6b, 0x1c, 0x2d, 0x78,
    0xff, 0x2d, 0xf7, 0xd0, 0x00, 0x19, 0x10, 0x60, 0x01, 0x20, 0x30, 0xbd, 0x00, 0x20, 0x30, 0xbd,
    0x70, 0xb4, 0x27, 0x4b, 0x20, 0x4c, 0xdc, 0x60, 0x20, 0x4c, 0xdc, 0x60, 0x01, 0x24, 0x1d, 0x68,
    0x03, 0x26, 0xb5, 0x43, 0x25, 0x43, 0x1d, 0x60, 0x00, 0x26, 0xb6, 0x18, 0xb6, 0x08, 0xb6, 0x00,
    0x95, 0x1b, 0x10, 0xd1, 0x85, 0x07, 0x0e, 0xd1, 0x15, 0x00, 0x18, 0xd0, 0x1d, 0x4d, 0x1e, 0x68,
    0x36, 0x09, 0x26, 0x40, 0xfb, 0xd1, 0x0e, 0x68, 0x06, 0x60, 0x09, 0x1d, 0x00, 0x1d, 0x52, 0x19,
    0x16, 0x04, 0xf4, 0xd1, 0x0b, 0xe0, 0x15, 0x00, 0x09, 0xd0, 0x1d, 0x68, 0x2d, 0x09, 0x25, 0x40,
    0xfb, 0xd1, 0x0d, 0x78, 0x05, 0x70, 0x49, 0x1c, 0x40, 0x1c, 0x52, 0x1e, 0xf5, 0xd1, 0x18, 0x68,
    0x00, 0x09, 0x20, 0x40, 0xfb, 0xd1, 0x70, 0xbc, 0x70, 0x47, 0x10, 0xb5, 0x00, 0x23, 0x04, 0xe0,
    0x04, 0x78, 0x0c, 0x70, 0x40, 0x1c, 0x49, 0x1c, 0x5b, 0x1c, 0x9c, 0xb2, 0x94, 0x42, 0xf7, 0xd3,
    0x00, 0x20, 0x10, 0xbd, 0x2c, 0x00, 0x02, 0x40, 0x5a, 0x5a, 0x00, 0x00, 0xa5, 0xa5, 0x00, 0x00,
    0x00, 0x00, 0x02, 0x40, 0x50, 0x46, 0x00, 0x00, 0xe0, 0x22, 0x02, 0x00, 0xff, 0xff, 0x00, 0x00,
    0x20, 0x00, 0x02, 0x40, 0xfc, 0xff, 0x00, 0x00, 0x10, 0xb5, 0x0a, 0x00, 0x00, 0x21, 0x00, 0x23,
    0x03, 0xe0, 0x04, 0x78, 0x09, 0x19, 0x40, 0x1c, 0x5b, 0x1c, 0x9c, 0xb2, 0x94, 0x42, 0xf8, 0xd3,
    0xc8, 0xb2, 0x10, 0xbd, 0x48, 0x48, 0x01, 0x88, 0x09, 0x29, 0x0b, 0xdb, 0x47, 0x49, 0x4a, 0x78,
    0x05, 0x2a, 0x09, 0xd0, 0x8a, 0x79, 0xc9, 0x79, 0x09, 0x02, 0x11, 0x43, 0x09, 0x31, 0x00, 0x88,
    0x81, 0x42, 0x04, 0xd0, 0x00, 0x20, 0x70, 0x47, 0x00, 0x88, 0x09, 0x28, 0xfa, 0xd1, 0x01, 0x20,
    0x70, 0x47, 0x38, 0xb5, 0x04, 0x00, 0x00, 0x20, 0x00, 0x25, 0x3b, 0x4a, 0x11, 0x88, 0x10, 0x80,
    0x3a, 0x48, 0x02, 0x78, 0x22, 0x70, 0x42, 0x78, 0x62, 0x70, 0x82, 0x78, 0xc3, 0x78, 0x1b, 0x02,
    0x13, 0x43, 0x02, 0x79, 0x12, 0x04, 0x1a, 0x43, 0x43, 0x79, 0x1b, 0x06, 0x13, 0x43, 0x63, 0x60,
    0x83, 0x79, 0xc2, 0x79, 0x12, 0x02, 0x1a, 0x43, 0x22, 0x81, 0x63, 0x68, 0x9b, 0x18, 0x5b, 0x1e,
    0x63, 0x61, 0x23, 0x78, 0x49, 0x2b, 0x16, 0xd1, 0x63, 0x78, 0x0b, 0x2b, 0x01, 0xda, 0x00, 0x2b,
    0x01, 0xd1, 0x02, 0x25, 0x10, 0xe0, 0x00, 0x2a, 0x02, 0xd0, 0x02, 0x00, 0x08, 0x32, 0xe2, 0x60,
    0x42, 0x18, 0x52, 0x1e, 0x12, 0x78, 0x22, 0x74, 0x49, 0x1e, 0x89, 0xb2, 0xff, 0xf7, 0xa4, 0xff,
    0x21, 0x7c, 0x88, 0x42, 0x00, 0xd0, 0x01, 0x25, 0x28, 0x00, 0x32, 0xbd, 0x38, 0xb5, 0x04, 0x00,
    0x1e, 0x4d, 0xa0, 0x79, 0x68, 0x70, 0x20, 0x68, 0xa8, 0x70, 0x20, 0x68, 0x00, 0x0a, 0xe8, 0x70,
    0x20, 0x68, 0x00, 0x0c, 0x28, 0x71, 0x20, 0x68, 0x00, 0x0e, 0x68, 0x71, 0xa0, 0x88, 0xa8, 0x71,
    0xa0, 0x88, 0x00, 0x0a, 0xe8, 0x71, 0xa1, 0x88, 0x08, 0x31, 0x89, 0xb2, 0x28, 0x00, 0xff, 0xf7,
    0x83, 0xff, 0xa1, 0x88, 0x69, 0x18, 0x08, 0x72, 0x31, 0xbd, 0x80, 0xb5, 0x01, 0x00, 0x09, 0x31,
    0x89, 0xb2, 0x0e, 0x48, 0x00, 0xf0, 0x38, 0xf8, 0x01, 0xbd, 0x38, 0xb5, 0x00, 0xf0, 0x48, 0xf8,
    0x00, 0x23, 0x09, 0x49, 0x0a, 0x88, 0x00, 0x2a, 0x01, 0xd1, 0x49, 0x28, 0x0a, 0xd1, 0x07, 0x4a,
    0x0c, 0x88, 0x07, 0x4d, 0xac, 0x42, 0x04, 0xda, 0x0b, 0x88, 0x5c, 0x1c, 0x0c, 0x80, 0xd0, 0x54,
    0x31, 0xbd, 0x13, 0x70, 0x0b, 0x80, 0x31, 0xbd, 0x34, 0x0a, 0x00, 0x20, 0x04, 0x08, 0x00, 0x20,
    0x09, 0x02, 0x00, 0x00, 0x30, 0xb5, 0x00, 0x21, 0x00, 0x22, 0x09, 0x4b, 0xd4, 0xb2, 0xa5, 0x00,
    0x5d, 0x59, 0xa8, 0x42, 0x0a, 0xd0, 0x52, 0x1c, 0xd4, 0xb2, 0x0c, 0x2c, 0xf6, 0xdb, 0x00, 0xbf,
    0x15, 0xa0, 0x40, 0x5a, 0x03, 0x49, 0x08, 0x60, 0x48, 0x60, 0x30, 0xbd, 0x61, 0x00, 0xf6, 0xe7,
    0x74, 0x06, 0x00, 0x20, 0x00, 0x0c, 0x00, 0x40, 0x30, 0xb5, 0x00, 0x22, 0x80, 0x23, 0xdb, 0x05,
    0x0a, 0xe0, 0x04, 0x5d, 0x1c, 0x60, 0x1c, 0x69, 0xa5, 0x07, 0xed, 0x0f, 0xfb, 0xd0, 0x5c, 0x69,
    0x02, 0x25, 0xac, 0x43, 0x5c, 0x61, 0x52, 0x1c, 0x94, 0xb2, 0x8c, 0x42, 0xf1, 0xd3, 0x30, 0xbd,
    0x80, 0x20, 0xc0, 0x05, 0x01, 0x69, 0xc9, 0x07, 0xfc, 0xd5, 0x41, 0x69, 0x01, 0x22, 0x91, 0x43,
    0x41, 0x61, 0x00, 0x68, 0xc0, 0xb2, 0x70, 0x47, 0x70, 0xff, 0xa0, 0xff, 0xb8, 0xff, 0xdc, 0xff,
    0xe8, 0xff, 0xf4, 0xff, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xfa, 0xff, 0xfd, 0xff, 0xfe, 0xff,
    0x00, 0x22, 0x00, 0xbf, 0x09, 0x42, 0x02, 0xd0, 0x49, 0x1e, 0x42, 0x54, 0xfc, 0xd1, 0x70, 0x47,
    0xf8, 0xb5, 0x2d, 0x4c, 0x2d, 0x48, 0xa0, 0x60, 0x2d, 0x4d, 0xa5, 0x60, 0x20, 0x68, 0xe0, 0x21,
    0x49, 0x00, 0x01, 0x43, 0x21, 0x60, 0x2b, 0x48, 0x2b, 0x49, 0x82, 0x88, 0x0a, 0x40, 0xe2, 0x60,
    0x42, 0x88, 0x0a, 0x40, 0xe2, 0x60, 0x00, 0x88, 0x01, 0x40, 0xe1, 0x60, 0x23, 0x48, 0xa0, 0x60,
    0xa5, 0x60, 0x20, 0x68, 0x25, 0x49, 0x01, 0x40, 0x21, 0x60, 0x06, 0x20, 0xff, 0xf7, 0x44, 0xfe,
    0x00, 0x21, 0x23, 0x48, 0x01, 0x60, 0x03, 0x20, 0x22, 0x4a, 0x23, 0x4b, 0x23, 0x4e, 0x27, 0x6a,
    0xff, 0x07, 0x26, 0x62, 0x13, 0xd5, 0x19, 0x4e, 0xa6, 0x60, 0xa5, 0x60, 0x65, 0x68, 0x96, 0x0d,
    0x2e, 0x43, 0x66, 0x60, 0x05, 0x24, 0x1c, 0x60, 0x15, 0x68, 0x80, 0x26, 0x2e, 0x43, 0x16, 0x60,
    0xd1, 0x64, 0x9c, 0x62, 0x11, 0x6c, 0x02, 0x23, 0x99, 0x43, 0x11, 0x64, 0x0a, 0xe0, 0x98, 0x63,
    0x14, 0x6c, 0x20, 0x25, 0xac, 0x43, 0x14, 0x64, 0xd1, 0x64, 0xd8, 0x63, 0x11, 0x6c, 0x40, 0x23,
    0x0b, 0x43, 0x13, 0x64, 0x12, 0x49, 0x13, 0x4a, 0x0a, 0x60, 0x4a, 0x60, 0xc8, 0x60, 0x0c, 0x48,
    0x90, 0x21, 0x89, 0x00, 0x01, 0x60, 0x01, 0x68, 0x10, 0x22, 0x0a, 0x43, 0x02, 0x60, 0xff, 0xf7,
    0xbb, 0xfd, 0x00, 0x20, 0xf2, 0xbd, 0x00, 0xbf, 0x00, 0x20, 0x00, 0x40, 0x5a, 0x5a, 0x00, 0x00,
    0xa5, 0xa5, 0x00, 0x00, 0x02, 0x0c, 0x10, 0x00, 0xff, 0x07, 0x00, 0x00, 0x3f, 0xfe, 0xff, 0xff,
    0x04, 0x00, 0x00, 0x40, 0x80, 0x0d, 0x02, 0x40, 0x9c, 0x0c, 0x02, 0x40, 0x01, 0x01, 0x00, 0xf0,
    0x00, 0x0c, 0x00, 0x40, 0x70, 0xff, 0x00, 0x00, 0x70, 0xb4, 0x01, 0x23, 0x00, 0x24, 0x13, 0xe0,
    0x01, 0x68, 0x00, 0x1d, 0x19, 0x42, 0x02, 0xd0, 0x4d, 0x46, 0x6d, 0x1e, 0x49, 0x19, 0x0c, 0x60,
    0x09, 0x1d, 0x12, 0x1f, 0x04, 0x2a, 0xfa, 0xd2, 0x0d, 0x00, 0x96, 0x07, 0x01, 0xd5, 0x0c, 0x80,
    0xad, 0x1c, 0x1a, 0x40, 0x00, 0xd0, 0x2c, 0x70, 0x02, 0x68, 0x00, 0x1d, 0x00, 0x2a, 0xe7, 0xd1,
    0x70, 0xbc, 0x70, 0x47, 0x80, 0x25, 0x00, 0x00, 0x40, 0x38, 0x00, 0x00, 0x00, 0x4b, 0x00, 0x00,
    0x00, 0x96, 0x00, 0x00, 0x00, 0xe1, 0x00, 0x00, 0x00, 0xc2, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x84, 0x03, 0x00, 0x00, 0x08, 0x07, 0x00,
    0x00, 0x8c, 0x0a, 0x00, 0x30, 0xb4, 0x01, 0x22, 0x01, 0x68, 0x00, 0x1d, 0x00, 0x29, 0x0f, 0xd0,
    0x03, 0x68, 0xc3, 0x18, 0x44, 0x68, 0x08, 0x30, 0x14, 0x42, 0x02, 0xd0, 0x4d, 0x46, 0x6d, 0x1e,
    0x64, 0x19, 0x1d, 0x68, 0x25, 0x60, 0x1b, 0x1d, 0x24, 0x1d, 0x09, 0x1f, 0xec, 0xd0, 0xf8, 0xe7,
    0x30, 0xbc, 0x70, 0x47, 0x00, 0x00, 0x00, 0x00, 0x21, 0x00, 0x00, 0x20, 0x39, 0x00, 0x00, 0x20,
    0x57, 0x00, 0x00, 0x20, 0x9b, 0x00, 0x00, 0x20, 0xc9, 0x00, 0x00, 0x20, 0xdd, 0x00, 0x00, 0x20,
    0x1b, 0x01, 0x00, 0x20, 0x45, 0x01, 0x00, 0x20, 0x5b, 0x01, 0x00, 0x20, 0x77, 0x01, 0x00, 0x20,
    0x10, 0xb5, 0x07, 0x49, 0x79, 0x44, 0x18, 0x31, 0x06, 0x4c, 0x7c, 0x44, 0x16, 0x34, 0x04, 0xe0,
    0x08, 0x1d, 0x0a, 0x68, 0x89, 0x18, 0x88, 0x47, 0x01, 0x00, 0xa1, 0x42, 0xf8, 0xd1, 0x10, 0xbd,
    0x08, 0x00, 0x00, 0x00, 0x28, 0x00, 0x00, 0x00, 0x11, 0xff, 0xff, 0xff, 0x34, 0x02, 0x00, 0x00,
    0x04, 0x08, 0x00, 0x20, 0x00, 0x00, 0x00, 0x00, 0x6d, 0xff, 0xff, 0xff, 0x04, 0x00, 0x00, 0x00,
    0x60, 0x00, 0x00, 0x00, 0x00, 0x08, 0x00, 0x20, 0x00, 0x00, 0x00, 0x00, 0x01, 0x20, 0xc0, 0x46,
    0x00, 0x28, 0x01, 0xd0, 0xff, 0xf7, 0xd4, 0xff, 0x00, 0xbf, 0x00, 0xbf, 0x00, 0x20, 0x00, 0xbf,
    0x00, 0xbf, 0xff, 0xf7, 0xf5, 0xfe, 0x00, 0xf0, 0x00, 0xf8, 0x80, 0xb5, 0x00, 0xf0, 0x02, 0xf8,
    0x01, 0xbd, 0x00, 0x00, 0x07, 0x46, 0x38, 0x46, 0x00, 0xf0, 0x02, 0xf8, 0xfb, 0xe7, 0x00, 0x00,
    0x80, 0xb5, 0x00, 0xbf, 0x00, 0xbf, 0x02, 0x4a, 0x11, 0x00, 0x18, 0x20, 0xab, 0xbe, 0xfb, 0xe7,
    0x26, 0x00, 0x02, 0x00, 0x00, 0xbf, 0x00, 0xbf, 0x00, 0xbf, 0x00, 0xbf, 0xff, 0xf7, 0xd6, 0xff,
    0x00, 0x00, 0x00, 0x00, 0x9f,
];
