//! Pointer-to-value projection and its rendering inverse.
//!
//! Pure coordinate math, no state. Projection: pointer coordinate ->
//! normalized fraction -> domain value. The inverse (`fraction_of`,
//! `percent_of`) feeds rendering and is exact before quantization, so a
//! value already on the step grid survives a full round trip.

use crate::config::{Orientation, SliderConfig};

/// Track bounding box in host coordinates.
///
/// Hosts hand this out fresh on every pointer move; it is never cached here
/// because layout can shift mid-drag.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl TrackRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Pointer location in the same coordinate space as [`TrackRect`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Project a pointer onto the track's primary axis and map it to a raw
/// (pre-quantization) domain value.
///
/// The fraction is clamped to `[0, 1]`, so a pointer outside the track pins
/// to the nearest bound instead of extrapolating. Vertical tracks read top
/// as max before `inverted` flips the direction again. A track with zero
/// extent maps everything to `min`.
///
/// Nearest-thumb resolution works on this raw value; quantization happens
/// at the write.
pub fn raw_value_at(pointer: PointerPosition, track: TrackRect, config: &SliderConfig) -> f64 {
    let (coord, origin, extent) = match config.orientation {
        Orientation::Horizontal => (pointer.x, track.x, track.width),
        Orientation::Vertical => (pointer.y, track.y, track.height),
    };
    let mut fraction = if extent > 0.0 {
        ((coord - origin) / extent).clamp(0.0, 1.0)
    } else {
        0.0
    };
    if config.orientation == Orientation::Vertical {
        fraction = 1.0 - fraction;
    }
    if config.inverted {
        fraction = 1.0 - fraction;
    }
    config.min + fraction * config.span()
}

/// [`raw_value_at`] snapped to the step grid and clamped.
pub fn value_at(pointer: PointerPosition, track: TrackRect, config: &SliderConfig) -> f64 {
    config.quantize(raw_value_at(pointer, track, config))
}

/// Normalized position of `value` between the bounds, before quantization.
pub fn fraction_of(value: f64, config: &SliderConfig) -> f64 {
    (value - config.min) / config.span()
}

/// Render percentage: the exact algebraic inverse of the value formula.
pub fn percent_of(value: f64, config: &SliderConfig) -> f64 {
    fraction_of(value, config) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> TrackRect {
        TrackRect::new(10.0, 20.0, 200.0, 8.0)
    }

    #[test]
    fn horizontal_endpoints_map_to_bounds() {
        let config = SliderConfig::default();
        let left = PointerPosition::new(10.0, 24.0);
        let right = PointerPosition::new(210.0, 24.0);
        assert_eq!(value_at(left, track(), &config), 0.0);
        assert_eq!(value_at(right, track(), &config), 100.0);
    }

    #[test]
    fn pointer_outside_track_clamps_without_extrapolating() {
        let config = SliderConfig::default();
        let far_left = PointerPosition::new(-500.0, 24.0);
        let far_right = PointerPosition::new(5_000.0, 24.0);
        assert_eq!(value_at(far_left, track(), &config), 0.0);
        assert_eq!(value_at(far_right, track(), &config), 100.0);
    }

    #[test]
    fn vertical_top_is_max_bottom_is_min() {
        let config = SliderConfig {
            orientation: Orientation::Vertical,
            ..SliderConfig::default()
        };
        let vtrack = TrackRect::new(5.0, 100.0, 8.0, 300.0);
        let top = PointerPosition::new(9.0, 100.0);
        let bottom = PointerPosition::new(9.0, 400.0);
        assert_eq!(value_at(top, vtrack, &config), 100.0);
        assert_eq!(value_at(bottom, vtrack, &config), 0.0);
    }

    #[test]
    fn inverted_flips_horizontal_direction() {
        let config = SliderConfig {
            inverted: true,
            ..SliderConfig::default()
        };
        let left = PointerPosition::new(10.0, 24.0);
        let right = PointerPosition::new(210.0, 24.0);
        assert_eq!(value_at(left, track(), &config), 100.0);
        assert_eq!(value_at(right, track(), &config), 0.0);
    }

    #[test]
    fn inverted_vertical_reads_top_as_min() {
        // Vertical flip and inversion cancel: top maps to min again.
        let config = SliderConfig {
            orientation: Orientation::Vertical,
            inverted: true,
            ..SliderConfig::default()
        };
        let vtrack = TrackRect::new(5.0, 100.0, 8.0, 300.0);
        let top = PointerPosition::new(9.0, 100.0);
        assert_eq!(value_at(top, vtrack, &config), 0.0);
    }

    #[test]
    fn projection_quantizes_to_step_grid() {
        let config = SliderConfig {
            step: 10.0,
            ..SliderConfig::default()
        };
        // 53% of the way along the track -> raw 53 -> snapped to 50.
        let pointer = PointerPosition::new(10.0 + 0.53 * 200.0, 24.0);
        assert_eq!(value_at(pointer, track(), &config), 50.0);
    }

    #[test]
    fn zero_extent_track_maps_to_min() {
        let config = SliderConfig::default();
        let degenerate = TrackRect::new(10.0, 20.0, 0.0, 8.0);
        let pointer = PointerPosition::new(10.0, 20.0);
        assert_eq!(value_at(pointer, degenerate, &config), 0.0);
    }

    #[test]
    fn percent_is_algebraic_inverse() {
        let config = SliderConfig {
            min: -40.0,
            max: 60.0,
            ..SliderConfig::default()
        };
        assert_eq!(percent_of(-40.0, &config), 0.0);
        assert_eq!(percent_of(60.0, &config), 100.0);
        assert_eq!(percent_of(10.0, &config), 50.0);
    }

    #[test]
    fn round_trip_recovers_on_grid_values() {
        let config = SliderConfig {
            step: 10.0,
            ..SliderConfig::default()
        };
        let t = track();
        for value in [0.0, 10.0, 50.0, 90.0, 100.0] {
            let pointer =
                PointerPosition::new(t.x + fraction_of(value, &config) * t.width, t.y);
            assert_eq!(value_at(pointer, t, &config), value);
        }
    }
}
