//! Ordered thumb values: clamped, quantized, positionally identified.
//!
//! Index is identity. Thumbs may cross in value and a write never reorders
//! them; range queries account for that.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SliderConfig;

/// Rejected whole-set write. Per-thumb runtime writes clamp instead of
/// failing, so this only surfaces at the construction/rewrite boundary.
#[derive(Debug, Error)]
pub enum ValueError {
    #[error("a slider needs at least one thumb value")]
    Empty,
}

/// The ordered set of thumb values.
///
/// Every stored value satisfies `clamp(quantize(v), min, max)` except where
/// a clamp-only write (Home/End) deliberately lands off the step grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThumbSet {
    values: Vec<f64>,
}

impl ThumbSet {
    /// Build from an initial write. A single-thumb slider is the one-element
    /// slice case; an empty slice fails fast.
    pub fn new(initial: &[f64], config: &SliderConfig) -> Result<Self, ValueError> {
        let mut set = Self { values: Vec::new() };
        set.set_all(initial, config)?;
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Replace the whole set; no partial merge. Each entry is clamped and
    /// quantized independently, order preserved as given.
    pub fn set_all(&mut self, values: &[f64], config: &SliderConfig) -> Result<(), ValueError> {
        if values.is_empty() {
            return Err(ValueError::Empty);
        }
        self.values.clear();
        self.values.extend(values.iter().map(|&v| config.quantize(v)));
        Ok(())
    }

    /// Write one thumb, snapping to the step grid. Other thumbs are never
    /// touched or reordered; crossing is allowed. Returns the stored value,
    /// or `None` when the index names no thumb.
    pub fn set_at(&mut self, index: usize, raw: f64, config: &SliderConfig) -> Option<f64> {
        let slot = self.values.get_mut(index)?;
        *slot = config.quantize(raw);
        Some(*slot)
    }

    /// Clamp-only write for Home/End, keeping the exact bounds reachable
    /// when `step` does not divide the span.
    pub fn set_at_exact(&mut self, index: usize, raw: f64, config: &SliderConfig) -> Option<f64> {
        let slot = self.values.get_mut(index)?;
        *slot = config.clamp_only(raw);
        Some(*slot)
    }

    /// Index of the thumb closest to `value` by absolute distance; ties
    /// resolve to the lowest index.
    pub fn nearest(&self, value: f64) -> usize {
        let mut best = 0;
        let mut best_dist = (self.values[0] - value).abs();
        for (i, &v) in self.values.iter().enumerate().skip(1) {
            let dist = (v - value).abs();
            if dist < best_dist {
                best = i;
                best_dist = dist;
            }
        }
        best
    }

    /// Smallest and largest thumb values, independent of index order. Used
    /// to render the filled sub-range.
    pub fn range_extent(&self) -> (f64, f64) {
        let mut lo = self.values[0];
        let mut hi = self.values[0];
        for &v in &self.values[1..] {
            if v < lo {
                lo = v;
            }
            if v > hi {
                hi = v;
            }
        }
        (lo, hi)
    }
}
