use bytemuck::{Pod, Zeroable};

/// Packed ARGB value used for points inside the set.
pub const INTERIOR_COLOUR: u32 = 0x0000_0000;

/// One raster cell. `column` and `row` never change after the buffer is built;
/// `colour` is packed ARGB (alpha in the top byte).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct Pixel {
    pub column: u32,
    pub row: u32,
    pub colour: u32,
}

impl Pixel {
    #[must_use]
    pub const fn new(column: u32, row: u32, colour: u32) -> Self {
        Self {
            column,
            row,
            colour,
        }
    }

    /// Splits the packed colour into `[a, r, g, b]`.
    #[must_use]
    pub fn argb(&self) -> [u8; 4] {
        self.colour.to_be_bytes()
    }

    /// Byte-swaps every field to little-endian. A no-op on little-endian hosts.
    #[must_use]
    pub fn to_le(self) -> Self {
        Self {
            column: self.column.to_le(),
            row: self.row.to_le(),
            colour: self.colour.to_le(),
        }
    }

    #[must_use]
    pub fn from_le(self) -> Self {
        Self {
            column: u32::from_le(self.column),
            row: u32::from_le(self.row),
            colour: u32::from_le(self.colour),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argb_splits_channels() {
        let pixel = Pixel::new(0, 0, 0xff12_3456);

        assert_eq!(pixel.argb(), [0xff, 0x12, 0x34, 0x56]);
    }

    #[test]
    fn test_pixel_is_twelve_bytes_without_padding() {
        assert_eq!(std::mem::size_of::<Pixel>(), 12);
        assert_eq!(
            bytemuck::bytes_of(&Pixel::new(1, 2, 3).to_le()),
            &[1, 0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0]
        );
    }

    #[test]
    fn test_le_conversion_round_trips() {
        let pixel = Pixel::new(799, 599, 0xff80_4020);

        assert_eq!(pixel.to_le().from_le(), pixel);
    }
}
