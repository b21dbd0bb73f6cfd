//! 8-bit modular checksum used by every command and response frame.

/// Compute the 8-bit wraparound sum of all bytes.
///
/// Command frames carry this over every byte preceding the trailer, and
/// responses are validated the same way.
pub fn sum8(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |sum, b| sum.wrapping_add(*b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum8_empty() {
        assert_eq!(sum8(&[]), 0);
    }

    #[test]
    fn test_sum8_wraps() {
        assert_eq!(sum8(&[0xFF, 0x01]), 0x00);
        assert_eq!(sum8(&[0x80, 0x80, 0x01]), 0x01);
    }

    #[test]
    fn test_sum8_matches_arithmetic_sum() {
        // Low 8 bits of the arithmetic sum, for arbitrary sequences.
        let cases: &[&[u8]] = &[
            &[0x49, 0x05, 0x00, 0x10, 0x00, 0x00, 0x00, 0x02],
            &[0xDE, 0xAD, 0xBE, 0xEF],
            &[0xFF; 300],
        ];
        for bytes in cases {
            let wide: u64 = bytes.iter().map(|b| u64::from(*b)).sum();
            assert_eq!(u64::from(sum8(bytes)), wide & 0xFF);
        }
    }
}
