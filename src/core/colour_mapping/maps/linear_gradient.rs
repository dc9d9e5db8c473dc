use crate::core::actions::compose_frame::ports::colour_map::ColourMap;
use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::colour_mapping::pack_argb;
use crate::core::data::escape::Escape;
use crate::core::data::pixel::INTERIOR_COLOUR;

/// Grey ramp: every channel is `floor(255 / cap · iteration)`.
#[derive(Debug)]
pub struct LinearGradient {
    ratio: f64,
}

impl LinearGradient {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self {
            ratio: 255.0 / f64::from(max_iterations.max(1)),
        }
    }
}

impl ColourMap for LinearGradient {
    fn map(&self, alpha: u8, escape: Escape) -> u32 {
        if !escape.diverged {
            return INTERIOR_COLOUR;
        }

        let level = (self.ratio * f64::from(escape.iterations)).floor().min(255.0) as u8;

        pack_argb(alpha, level, level, level)
    }

    fn kind(&self) -> ColourMapKinds {
        ColourMapKinds::LinearRgb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_values() {
        let map = LinearGradient::new(200);

        assert_eq!(map.map(0xff, Escape::diverged_at(0)), 0xff00_0000);
        assert_eq!(map.map(0xff, Escape::diverged_at(1)), 0xff01_0101);
        assert_eq!(map.map(0xff, Escape::diverged_at(100)), 0xff7f_7f7f);
        assert_eq!(map.map(0xff, Escape::diverged_at(199)), 0xfffd_fdfd);
    }

    #[test]
    fn test_ramp_is_monotonic() {
        let map = LinearGradient::new(64);
        let levels: Vec<u32> = (0..64)
            .map(|i| map.map(0xff, Escape::diverged_at(i)) & 0xff)
            .collect();

        assert!(levels.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_interior_is_transparent_black() {
        assert_eq!(LinearGradient::new(50).map(0xff, Escape::interior(50)), INTERIOR_COLOUR);
    }
}
