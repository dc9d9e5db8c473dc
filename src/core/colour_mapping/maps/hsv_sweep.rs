use crate::core::actions::compose_frame::ports::colour_map::ColourMap;
use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::colour_mapping::pack_argb;
use crate::core::data::escape::Escape;
use crate::core::data::pixel::INTERIOR_COLOUR;

/// Hue sweeps the full circle while saturation and value ramp from 0 to 1.
///
/// Iteration 0 has zero value and so comes out black whatever its hue.
#[derive(Debug)]
pub struct HsvSweep {
    max_iterations: u32,
}

impl HsvSweep {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self {
            max_iterations: max_iterations.max(1),
        }
    }
}

fn to_channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0) as u8
}

/// Converts hue in degrees plus saturation and value in `[0, 1]` to `(r, g, b)`.
#[must_use]
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> (u8, u8, u8) {
    let value = value.clamp(0.0, 1.0);

    if saturation <= 0.0 {
        let grey = to_channel(value);
        return (grey, grey, grey);
    }

    let saturation = saturation.min(1.0);
    let hue = hue.rem_euclid(360.0) / 60.0;
    let sector = hue.floor();
    let remainder = hue - sector;

    let p = value * (1.0 - saturation);
    let q = value * (1.0 - saturation * remainder);
    let t = value * (1.0 - saturation * (1.0 - remainder));

    let (r, g, b) = match sector as u8 {
        0 => (value, t, p),
        1 => (q, value, p),
        2 => (p, value, t),
        3 => (p, q, value),
        4 => (t, p, value),
        _ => (value, p, q),
    };

    (to_channel(r), to_channel(g), to_channel(b))
}

impl ColourMap for HsvSweep {
    fn map(&self, alpha: u8, escape: Escape) -> u32 {
        if !escape.diverged {
            return INTERIOR_COLOUR;
        }

        let cap = f64::from(self.max_iterations);
        let iterations = f64::from(escape.iterations);
        let ratio = iterations / cap;

        let (r, g, b) = hsv_to_rgb((360.0 / cap) * iterations, ratio, ratio);

        pack_argb(alpha, r, g, b)
    }

    fn kind(&self) -> ColourMapKinds {
        ColourMapKinds::HsvSweep
    }
}
