// Overlay tuning knobs. Every field has a default matching the viewer's
// reference look, so the host may pass a partial JSON object (or nothing).

use serde::{Deserialize, Serialize};

use crate::error::{OverlayError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Number of particles built by `initialize`.
    pub particle_count: usize,
    /// Range for each velocity component, in pixels per frame.
    pub velocity_range: (f64, f64),
    /// Range for the particle radius, in pixels.
    pub size_range: (f64, f64),
    /// Range for the per-frame life decrement.
    pub decay_range: (f64, f64),
    /// Opacity is `life * alpha_scale`.
    pub alpha_scale: f64,
    pub saturation: u8,
    pub lightness: u8,
    /// Degrees added to the shared hue on each interval tick.
    pub hue_step: u16,
    pub hue_interval_ms: u32,
    /// Rotation applied to the structure per throttled spin frame.
    pub spin_step_degrees: f64,
    pub spin_min_frame_ms: f64,
    /// Wrap each overlay frame in a `console.time` label.
    pub profile_frames: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        OverlayConfig {
            particle_count: 80,
            velocity_range: (-2.0, 2.0),
            size_range: (1.0, 4.0),
            decay_range: (0.005, 0.015),
            alpha_scale: 0.8,
            saturation: 70,
            lightness: 50,
            hue_step: 2,
            hue_interval_ms: 50,
            spin_step_degrees: 0.5,
            spin_min_frame_ms: 16.0,
            profile_frames: false,
        }
    }
}

impl OverlayConfig {
    pub const MAX_PARTICLES: usize = 10_000;

    /// Parse a (possibly partial) JSON object and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: OverlayConfig =
            serde_json::from_str(json).map_err(OverlayError::ConfigParse)?;
        config.validate()?;
        log::debug!("loaded overlay config: {:?}", config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.particle_count > OverlayConfig::MAX_PARTICLES {
            return Err(OverlayError::invalid_config(
                "particle_count",
                format!(
                    "must be at most {}, got {}",
                    OverlayConfig::MAX_PARTICLES,
                    self.particle_count
                ),
            ));
        }
        check_range("velocity_range", self.velocity_range)?;
        check_range("size_range", self.size_range)?;
        check_range("decay_range", self.decay_range)?;
        if self.size_range.0 <= 0.0 {
            return Err(OverlayError::invalid_config("size_range", "must start above 0"));
        }
        if self.decay_range.0 <= 0.0 {
            return Err(OverlayError::invalid_config("decay_range", "must start above 0"));
        }
        if !(0.0..=1.0).contains(&self.alpha_scale) {
            return Err(OverlayError::invalid_config(
                "alpha_scale",
                format!("must be within [0, 1], got {}", self.alpha_scale),
            ));
        }
        if self.saturation > 100 {
            return Err(OverlayError::invalid_config("saturation", "must be at most 100"));
        }
        if self.lightness > 100 {
            return Err(OverlayError::invalid_config("lightness", "must be at most 100"));
        }
        if self.hue_step >= 360 {
            return Err(OverlayError::invalid_config("hue_step", "must be below 360"));
        }
        if self.hue_interval_ms == 0 {
            return Err(OverlayError::invalid_config("hue_interval_ms", "must be positive"));
        }
        if !(self.spin_min_frame_ms >= 0.0) {
            return Err(OverlayError::invalid_config(
                "spin_min_frame_ms",
                "must not be negative",
            ));
        }
        Ok(())
    }
}

fn check_range(field: &'static str, (min, max): (f64, f64)) -> Result<()> {
    if min.is_finite() && max.is_finite() && min < max {
        Ok(())
    } else {
        Err(OverlayError::invalid_config(
            field,
            format!("must be a non-empty finite range, got [{}, {})", min, max),
        ))
    }
}
