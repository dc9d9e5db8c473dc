use crate::core::actions::compose_frame::ports::colour_map::ColourMap;
use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::colour_mapping::pack_argb;
use crate::core::data::escape::Escape;
use crate::core::data::pixel::INTERIOR_COLOUR;

const RED_EXPONENT: f64 = 0.86;
const GREEN_EXPONENT: f64 = 0.73;
const BLUE_EXPONENT: f64 = 0.68;

/// `channel = floor((t^e · 255)^1.5 mod 255)` with `t = iteration / cap`.
///
/// The modulo folds the curve back on itself, so colours cycle as the
/// escape count climbs instead of ramping to white.
#[derive(Debug)]
pub struct PowerLawGradient {
    max_iterations: u32,
}

impl PowerLawGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self {
            max_iterations: max_iterations.max(1),
        }
    }

    fn channel(t: f64, exponent: f64) -> u8 {
        ((t.powf(exponent) * 255.0).powf(1.5) % 255.0).floor() as u8
    }
}

impl ColourMap for PowerLawGradient {
    fn map(&self, alpha: u8, escape: Escape) -> u32 {
        if !escape.diverged {
            return INTERIOR_COLOUR;
        }

        let t = f64::from(escape.iterations) / f64::from(self.max_iterations);

        pack_argb(
            alpha,
            Self::channel(t, RED_EXPONENT),
            Self::channel(t, GREEN_EXPONENT),
            Self::channel(t, BLUE_EXPONENT),
        )
    }

    fn kind(&self) -> ColourMapKinds {
        ColourMapKinds::PowerLawRgb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colour(iterations: u32, max_iterations: u32) -> u32 {
        PowerLawGradient::new(max_iterations).map(0xff, Escape::diverged_at(iterations))
    }

    #[test]
    fn test_zero_iterations_is_opaque_black() {
        assert_eq!(colour(0, 50), 0xff00_0000);
    }

    #[test]
    fn test_known_values() {
        assert_eq!(colour(100, 200), 0xff87_79de);
        assert_eq!(colour(1, 200), 0xff04_0c12);
        assert_eq!(colour(37, 50), 0xffd3_7bbe);
        assert_eq!(colour(199, 200), 0xffdc_e0e2);
    }

    #[test]
    fn test_alpha_is_placed_in_top_byte() {
        let map = PowerLawGradient::new(200);

        assert_eq!(map.map(0x80, Escape::diverged_at(100)), 0x8087_79de);
    }

    #[test]
    fn test_interior_ignores_iteration_count() {
        let map = PowerLawGradient::new(200);

        assert_eq!(map.map(0xff, Escape::interior(200)), INTERIOR_COLOUR);
        assert_eq!(map.map(0xff, Escape { diverged: false, iterations: 3 }), INTERIOR_COLOUR);
    }

    #[test]
    fn test_channels_never_reach_255() {
        let map = PowerLawGradient::new(500);

        for iterations in 0..500 {
            let [_, r, g, b] = map.map(0xff, Escape::diverged_at(iterations)).to_be_bytes();

            assert!(r < 255 && g < 255 && b < 255);
        }
    }
}
