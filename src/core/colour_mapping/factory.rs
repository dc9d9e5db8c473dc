use crate::core::actions::compose_frame::ports::colour_map::ColourMap;
use crate::core::colour_mapping::kinds::ColourMapKinds;
use crate::core::colour_mapping::maps::{
    hsv_sweep::HsvSweep, linear_gradient::LinearGradient, power_law_gradient::PowerLawGradient,
};
use crate::core::data::escape::Escape;

#[must_use]
pub fn colour_map_factory(
    kind: ColourMapKinds,
    max_iterations: u32,
) -> Box<dyn ColourMap + Send + Sync> {
    match kind {
        ColourMapKinds::PowerLawRgb => Box::new(PowerLawGradient::new(max_iterations)),
        ColourMapKinds::LinearRgb => Box::new(LinearGradient::new(max_iterations)),
        ColourMapKinds::HsvSweep => Box::new(HsvSweep::new(max_iterations)),
    }
}

/// One-off colour lookup for a single iteration result.
#[must_use]
pub fn compute_colour(
    kind: ColourMapKinds,
    alpha: u8,
    iteration: u32,
    max_iterations: u32,
    diverged: bool,
) -> u32 {
    colour_map_factory(kind, max_iterations).map(alpha, Escape { diverged, iterations: iteration })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::mode::ColourPolicy;
    use crate::core::colour_mapping::kinds::RgbGradient;
    use crate::core::data::pixel::INTERIOR_COLOUR;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(ColourMapKinds::ALL.first(), Some(&ColourMapKinds::default()));
    }

    #[test]
    fn factory_round_trip_for_all_kinds() {
        for &kind in ColourMapKinds::ALL {
            let map = colour_map_factory(kind, 200);

            assert_eq!(map.kind(), kind);
            assert_eq!(map.display_name(), kind.display_name());
        }
    }

    #[test]
    fn select_ignores_gradient_for_hsv() {
        for gradient in [RgbGradient::PowerLaw, RgbGradient::Linear] {
            assert_eq!(
                ColourMapKinds::select(ColourPolicy::Hsv, gradient),
                ColourMapKinds::HsvSweep
            );
        }

        assert_eq!(
            ColourMapKinds::select(ColourPolicy::Rgb, RgbGradient::Linear),
            ColourMapKinds::LinearRgb
        );
    }

    #[test]
    fn interior_is_transparent_black_for_every_kind() {
        for &kind in ColourMapKinds::ALL {
            for iteration in [0, 1, 17, 199, 200, 5000] {
                assert_eq!(
                    compute_colour(kind, 0xff, iteration, 200, false),
                    INTERIOR_COLOUR,
                    "{} at {}",
                    kind,
                    iteration
                );
            }
        }
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = ColourMapKinds::ALL.iter().map(|k| k.display_name()).collect();

        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }
}
