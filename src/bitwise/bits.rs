// Bit-group helpers for packed status bytes
// A group is described by its mask within a single byte

/// Extract the bits selected by `mask` and shift them down to bit 0
/// Example: extract(0b1000_0000, 0xC0) -> 0b10
pub const fn extract(byte: u8, mask: u8) -> u8 {
    if mask == 0 {
        return 0;
    }
    (byte & mask) >> mask.trailing_zeros()
}

/// Number of bits a mask selects
pub const fn width(mask: u8) -> u32 {
    mask.count_ones()
}

/// True if any bit selected by `mask` is set
pub const fn is_set(byte: u8, mask: u8) -> bool {
    byte & mask != 0
}

/// Assemble a value from bit groups, least significant group first
///
/// Each `(byte, mask)` pair contributes `width(mask)` bits on top of the
/// groups before it.
pub fn assemble(groups: &[(u8, u8)]) -> u8 {
    let mut value: u8 = 0;
    let mut shift: u32 = 0;

    for &(byte, mask) in groups {
        value |= extract(byte, mask) << shift;
        shift += width(mask);
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract() {
        assert_eq!(extract(0xC0, 0xC0), 0b11);
        assert_eq!(extract(0x80, 0xC0), 0b10);
        assert_eq!(extract(0x40, 0xC0), 0b01);
        assert_eq!(extract(0x3F, 0xC0), 0);
        assert_eq!(extract(0x40, 0x40), 1);
        assert_eq!(extract(0xFF, 0x00), 0);
    }

    #[test]
    fn test_is_set() {
        assert!(is_set(0x80, 0x80));
        assert!(!is_set(0x7F, 0x80));
        assert!(is_set(0xC0, 0x40));
    }

    #[test]
    fn test_assemble() {
        // low pair from first byte, high pair from second
        assert_eq!(assemble(&[(0x40, 0xC0), (0x80, 0xC0)]), 0b1001);
        assert_eq!(assemble(&[(0xC0, 0xC0), (0x40, 0x40)]), 0b111);
        assert_eq!(assemble(&[]), 0);
    }

    #[test]
    fn test_assemble_matches_shift_formula() {
        for b0 in [0x00u8, 0x40, 0x80, 0xC0, 0x3F] {
            for b1 in [0x00u8, 0x40, 0x80, 0xC0, 0x3F] {
                let expected = ((b0 & 0xC0) >> 6) | ((b1 & 0xC0) >> 4);
                assert_eq!(assemble(&[(b0, 0xC0), (b1, 0xC0)]), expected);
            }
        }
    }
}
