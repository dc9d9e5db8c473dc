pub mod factory;
pub mod kinds;
pub mod maps;

/// Packs alpha and the three 8-bit channels into `0xAARRGGBB`.
#[must_use]
pub fn pack_argb(alpha: u8, r: u8, g: u8, b: u8) -> u32 {
    u32::from_be_bytes([alpha, r, g, b])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_argb_offsets() {
        assert_eq!(pack_argb(0xff, 0x12, 0x34, 0x56), 0xff12_3456);
        assert_eq!(pack_argb(0, 0, 0, 0), 0);
    }
}
