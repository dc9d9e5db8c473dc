use crate::core::data::mode::ColourPolicy;
use serde::{Deserialize, Serialize};

/// Which RGB formula the `rgb` colour policy uses.
///
/// Both have been used to render this animation; `PowerLaw` is the richer default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RgbGradient {
    #[default]
    PowerLaw,
    Linear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourMapKinds {
    #[default]
    PowerLawRgb,
    LinearRgb,
    HsvSweep,
}

impl ColourMapKinds {
    pub const ALL: &'static [Self] = &[Self::PowerLawRgb, Self::LinearRgb, Self::HsvSweep];

    #[must_use]
    pub const fn select(policy: ColourPolicy, gradient: RgbGradient) -> Self {
        match (policy, gradient) {
            (ColourPolicy::Hsv, _) => Self::HsvSweep,
            (ColourPolicy::Rgb, RgbGradient::PowerLaw) => Self::PowerLawRgb,
            (ColourPolicy::Rgb, RgbGradient::Linear) => Self::LinearRgb,
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::PowerLawRgb => "Power-law RGB",
            Self::LinearRgb => "Linear RGB",
            Self::HsvSweep => "HSV sweep",
        }
    }
}

impl std::fmt::Display for ColourMapKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
