//! Engine configuration, read from an optional JSON file.
//!
//! Every field has a default, so `{}` is a complete configuration that
//! reproduces the classic zoom into the seahorse valley at `-1.748 + 0i`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::controllers::animation::engine_state::EngineState;
use crate::core::colour_mapping::kinds::RgbGradient;
use crate::core::data::complex::Complex;
use crate::core::data::mode::Mode;
use crate::core::data::raster::{Raster, RasterError};
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::errors::EscapeTimeError;
use crate::core::fractals::julia::algorithm::DEFAULT_JULIA_CONSTANT;
use crate::storage::frame_cache::cache::FrameCache;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Raster(#[from] RasterError),
    #[error(transparent)]
    Viewport(#[from] ViewportError),
    #[error(transparent)]
    EscapeTime(#[from] EscapeTimeError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    /// Fraction of the distance to the target each bound covers per tick.
    pub zoom_factor: f64,
    /// Half the initial real extent.
    pub view_radius: f64,
    pub zoom_target: Complex,
    pub mode: Mode,
    pub rgb_gradient: RgbGradient,
    pub julia_constant: Complex,
    pub alpha: u8,
    pub cache_dir: PathBuf,
    pub record_frames: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            max_iterations: 200,
            zoom_factor: 0.1,
            view_radius: 0.01,
            zoom_target: Complex::new(-1.748, 0.0),
            mode: Mode::default(),
            rgb_gradient: RgbGradient::default(),
            julia_constant: DEFAULT_JULIA_CONSTANT,
            alpha: 0xff,
            cache_dir: PathBuf::from("dumps"),
            record_frames: 3000,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;

        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == 0 {
            return Err(EscapeTimeError::ZeroMaxIterations.into());
        }

        self.initial_viewport()?;

        Ok(())
    }

    pub fn raster(&self) -> Result<Raster, RasterError> {
        Raster::new(self.width, self.height)
    }

    pub fn initial_viewport(&self) -> Result<Viewport, ConfigError> {
        Ok(Viewport::centered(
            self.zoom_target,
            self.view_radius,
            self.raster()?,
            self.zoom_factor,
        )?)
    }

    pub fn engine_state(&self) -> Result<EngineState, ConfigError> {
        self.validate()?;

        Ok(
            EngineState::new(self.initial_viewport()?, self.raster()?, self.max_iterations)
                .with_mode(self.mode)
                .with_julia_constant(self.julia_constant)
                .with_rgb_gradient(self.rgb_gradient)
                .with_alpha(self.alpha),
        )
    }

    #[must_use]
    pub fn frame_cache(&self) -> FrameCache {
        FrameCache::new(&self.cache_dir)
    }
}
