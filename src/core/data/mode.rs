use crate::core::fractals::fractal_kinds::FractalKinds;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw mode bits, kept at the values the animation has always used on disk
/// and on the command line.
pub struct ModeFlags;

impl ModeFlags {
    pub const JULIA: u8 = 0b0001;
    pub const MANDELBROT: u8 = 0b0010;
    pub const HSV: u8 = 0b0100;
    pub const RGB: u8 = 0b1000;

    const FAMILY_MASK: u8 = Self::JULIA | Self::MANDELBROT;
    const COLOUR_MASK: u8 = Self::HSV | Self::RGB;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ModeError {
    #[error("mode {bits:#06b} must select exactly one of julia or mandelbrot")]
    AmbiguousFamily { bits: u8 },
    #[error("mode {bits:#06b} must select exactly one of hsv or rgb")]
    AmbiguousColour { bits: u8 },
    #[error("mode {bits:#06b} contains unknown bits")]
    UnknownBits { bits: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColourPolicy {
    #[default]
    Rgb,
    Hsv,
}

/// Fractal family and colour policy; any pairing is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Mode {
    pub family: FractalKinds,
    pub colour: ColourPolicy,
}

impl Mode {
    #[must_use]
    pub const fn new(family: FractalKinds, colour: ColourPolicy) -> Self {
        Self { family, colour }
    }

    pub fn from_bits(bits: u8) -> Result<Self, ModeError> {
        if bits & !(ModeFlags::FAMILY_MASK | ModeFlags::COLOUR_MASK) != 0 {
            return Err(ModeError::UnknownBits { bits });
        }

        let family = match bits & ModeFlags::FAMILY_MASK {
            ModeFlags::JULIA => FractalKinds::Julia,
            ModeFlags::MANDELBROT => FractalKinds::Mandelbrot,
            _ => return Err(ModeError::AmbiguousFamily { bits }),
        };

        let colour = match bits & ModeFlags::COLOUR_MASK {
            ModeFlags::HSV => ColourPolicy::Hsv,
            ModeFlags::RGB => ColourPolicy::Rgb,
            _ => return Err(ModeError::AmbiguousColour { bits }),
        };

        Ok(Self { family, colour })
    }

    #[must_use]
    pub const fn bits(self) -> u8 {
        let family = match self.family {
            FractalKinds::Julia => ModeFlags::JULIA,
            FractalKinds::Mandelbrot => ModeFlags::MANDELBROT,
        };

        let colour = match self.colour {
            ColourPolicy::Hsv => ModeFlags::HSV,
            ColourPolicy::Rgb => ModeFlags::RGB,
        };

        family | colour
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_mandelbrot_rgb() {
        let mode = Mode::default();

        assert_eq!(mode.bits(), ModeFlags::MANDELBROT | ModeFlags::RGB);
    }

    #[test]
    fn test_all_combinations_round_trip() {
        for &family in FractalKinds::ALL {
            for colour in [ColourPolicy::Rgb, ColourPolicy::Hsv] {
                let mode = Mode::new(family, colour);

                assert_eq!(Mode::from_bits(mode.bits()), Ok(mode));
            }
        }
    }

    #[test]
    fn test_from_bits_requires_one_family() {
        assert_eq!(
            Mode::from_bits(ModeFlags::RGB),
            Err(ModeError::AmbiguousFamily {
                bits: ModeFlags::RGB
            })
        );

        let both = ModeFlags::JULIA | ModeFlags::MANDELBROT | ModeFlags::HSV;
        assert_eq!(
            Mode::from_bits(both),
            Err(ModeError::AmbiguousFamily { bits: both })
        );
    }

    #[test]
    fn test_from_bits_requires_one_colour_policy() {
        let bits = ModeFlags::JULIA | ModeFlags::HSV | ModeFlags::RGB;

        assert_eq!(
            Mode::from_bits(bits),
            Err(ModeError::AmbiguousColour { bits })
        );
        assert_eq!(
            Mode::from_bits(ModeFlags::JULIA),
            Err(ModeError::AmbiguousColour {
                bits: ModeFlags::JULIA
            })
        );
    }

    #[test]
    fn test_from_bits_rejects_unknown_bits() {
        let bits = 0b1_0000 | ModeFlags::JULIA | ModeFlags::RGB;

        assert_eq!(Mode::from_bits(bits), Err(ModeError::UnknownBits { bits }));
    }

    #[test]
    fn test_mode_deserializes_from_names() {
        let mode: Mode = serde_json::from_str(r#"{"family":"julia","colour":"hsv"}"#).unwrap();

        assert_eq!(mode, Mode::new(FractalKinds::Julia, ColourPolicy::Hsv));
    }
}
