//! Slider configuration and the step-grid math every other module leans on.
//!
//! A config is validated once, at slider construction. After that the
//! quantize/clamp helpers are total functions: any raw f64, finite or not,
//! maps to a value inside the bounds.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Track axis along which thumbs move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Rejected construction-time configuration. Always a caller bug, never a
/// runtime condition.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("min must be strictly less than max (min={min}, max={max})")]
    BoundsOutOfOrder { min: f64, max: f64 },

    #[error("bounds must be finite (min={min}, max={max})")]
    NonFiniteBounds { min: f64, max: f64 },

    #[error("step must be positive and finite (step={0})")]
    BadStep(f64),
}

/// Immutable per-instance slider parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub orientation: Orientation,
    /// Reverses the mapping direction between spatial position and value.
    pub inverted: bool,
    /// Initial interactivity. The live flag sits on the slider itself so a
    /// host can disable mid-drag.
    pub disabled: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
            orientation: Orientation::Horizontal,
            inverted: false,
            disabled: false,
        }
    }
}

impl SliderConfig {
    /// Check the construction invariants: finite bounds, `min < max`,
    /// positive finite `step`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ConfigError::NonFiniteBounds {
                min: self.min,
                max: self.max,
            });
        }
        if self.min >= self.max {
            return Err(ConfigError::BoundsOutOfOrder {
                min: self.min,
                max: self.max,
            });
        }
        if !self.step.is_finite() || self.step <= 0.0 {
            return Err(ConfigError::BadStep(self.step));
        }
        Ok(())
    }

    /// Width of the value domain.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Increment applied by PageUp / PageDown: one tenth of the span.
    pub fn page(&self) -> f64 {
        self.span() / 10.0
    }

    /// Snap a raw value to the nearest multiple of `step` relative to `min`,
    /// then clamp to the bounds.
    ///
    /// Total over all of f64: NaN and -inf pin to `min`, +inf pins to `max`.
    pub fn quantize(&self, raw: f64) -> f64 {
        if raw.is_nan() || raw == f64::NEG_INFINITY {
            return self.min;
        }
        if raw == f64::INFINITY {
            return self.max;
        }
        let snapped = self.min + ((raw - self.min) / self.step).round() * self.step;
        snapped.clamp(self.min, self.max)
    }

    /// Clamp without snapping. Home and End go through this path so the
    /// exact bounds stay reachable when `step` does not divide the span.
    pub fn clamp_only(&self, raw: f64) -> f64 {
        if raw.is_nan() || raw == f64::NEG_INFINITY {
            return self.min;
        }
        raw.clamp(self.min, self.max)
    }
}
