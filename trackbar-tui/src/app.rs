//! Application state - single-owner, main-thread only.
//!
//! Each control pairs a core `Slider` with its `WidgetHost`: the host half
//! holds the frame's track rect (refreshed by every render pass), the live
//! pointer captures, and the latest change notification.

use std::path::PathBuf;

use trackbar_core::{
    Orientation, PointerId, Slider, SliderConfig, SliderHost, TrackRect,
};

/// The single terminal mouse pointer.
pub const MOUSE: PointerId = PointerId(0);

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Host side of one slider control.
#[derive(Debug, Default)]
pub struct WidgetHost {
    /// Track bounding box from the most recent render pass. Serving the
    /// latest layout is what keeps mid-drag reflows honest.
    pub track: TrackRect,
    pub captured: Vec<PointerId>,
    pub last_values: Vec<f64>,
    pub last_percents: Vec<f64>,
    pub change_count: u64,
}

impl SliderHost for WidgetHost {
    fn track_rect(&self) -> TrackRect {
        self.track
    }

    fn values_changed(&mut self, values: &[f64], percents: &[f64]) {
        self.last_values = values.to_vec();
        self.last_percents = percents.to_vec();
        self.change_count += 1;
    }

    fn capture_pointer(&mut self, pointer: PointerId) {
        self.captured.push(pointer);
    }

    fn release_pointer(&mut self, pointer: PointerId) {
        self.captured.retain(|&p| p != pointer);
    }
}

/// One labeled control in the filter panel.
pub struct SliderEntry {
    pub label: &'static str,
    pub unit: &'static str,
    pub slider: Slider,
    pub host: WidgetHost,
    /// Thumb addressed by keyboard input.
    pub focused_thumb: usize,
}

impl SliderEntry {
    fn new(label: &'static str, unit: &'static str, config: SliderConfig, initial: &[f64]) -> Self {
        let slider = Slider::new(config, initial).expect("demo slider config is valid");
        Self {
            label,
            unit,
            slider,
            host: WidgetHost::default(),
            focused_thumb: 0,
        }
    }

    /// Human-readable value list, e.g. `120-320 $` or `3.5 *`.
    pub fn describe(&self) -> String {
        let values: Vec<String> = self
            .slider
            .values()
            .iter()
            .map(|v| format_value(*v))
            .collect();
        if self.unit.is_empty() {
            values.join("-")
        } else {
            format!("{} {}", values.join("-"), self.unit)
        }
    }
}

/// Trim trailing zeros so `3.50` reads as `3.5` and `120.00` as `120`.
pub fn format_value(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    s.to_string()
}

pub struct AppState {
    pub sliders: Vec<SliderEntry>,
    /// Index of the keyboard-focused control.
    pub focused: usize,
    /// Control that currently owns the mouse pointer, while a drag is live.
    pub mouse_owner: Option<usize>,
    pub status: String,
    pub status_level: StatusLevel,
    pub running: bool,
    pub state_path: PathBuf,
}

impl AppState {
    pub fn new(state_path: PathBuf) -> Self {
        let sliders = vec![
            SliderEntry::new(
                "Nightly price",
                "$",
                SliderConfig {
                    min: 0.0,
                    max: 500.0,
                    step: 10.0,
                    ..SliderConfig::default()
                },
                &[120.0, 320.0],
            ),
            SliderEntry::new(
                "Min rating",
                "*",
                SliderConfig {
                    min: 1.0,
                    max: 5.0,
                    step: 0.5,
                    ..SliderConfig::default()
                },
                &[3.5],
            ),
            SliderEntry::new(
                "Guests",
                "",
                SliderConfig {
                    min: 1.0,
                    max: 16.0,
                    step: 1.0,
                    ..SliderConfig::default()
                },
                &[2.0],
            ),
            SliderEntry::new(
                "Map zoom",
                "x",
                SliderConfig {
                    min: 1.0,
                    max: 20.0,
                    step: 1.0,
                    orientation: Orientation::Vertical,
                    inverted: true,
                    ..SliderConfig::default()
                },
                &[8.0],
            ),
        ];

        Self {
            sliders,
            focused: 0,
            mouse_owner: None,
            status: String::from("Ready"),
            status_level: StatusLevel::Info,
            running: true,
            state_path,
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = msg.into();
        self.status_level = StatusLevel::Info;
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status = msg.into();
        self.status_level = StatusLevel::Warning;
    }

    pub fn focused_entry_mut(&mut self) -> &mut SliderEntry {
        let idx = self.focused;
        &mut self.sliders[idx]
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.sliders.len();
        self.clamp_focused_thumb();
    }

    pub fn focus_prev(&mut self) {
        let len = self.sliders.len();
        self.focused = (self.focused + len - 1) % len;
        self.clamp_focused_thumb();
    }

    /// Cycle the keyboard-addressed thumb within the focused control.
    pub fn cycle_thumb(&mut self) {
        let entry = self.focused_entry_mut();
        entry.focused_thumb = (entry.focused_thumb + 1) % entry.slider.thumb_count();
    }

    /// Index of the control whose track contains the given cell, if any.
    pub fn slider_at(&self, column: u16, row: u16) -> Option<usize> {
        let (x, y) = (f64::from(column), f64::from(row));
        self.sliders.iter().position(|entry| {
            let t = entry.host.track;
            t.width > 0.0
                && t.height > 0.0
                && x >= t.x
                && x < t.x + t.width
                && y >= t.y
                && y < t.y + t.height
        })
    }

    fn clamp_focused_thumb(&mut self) {
        let entry = self.focused_entry_mut();
        if entry.focused_thumb >= entry.slider.thumb_count() {
            entry.focused_thumb = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> AppState {
        AppState::new(PathBuf::from("/tmp/trackbar-test-state.json"))
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut app = app();
        let n = app.sliders.len();
        app.focus_prev();
        assert_eq!(app.focused, n - 1);
        app.focus_next();
        assert_eq!(app.focused, 0);
    }

    #[test]
    fn cycle_thumb_wraps_within_entry() {
        let mut app = app();
        assert_eq!(app.sliders[0].slider.thumb_count(), 2);
        app.cycle_thumb();
        assert_eq!(app.sliders[0].focused_thumb, 1);
        app.cycle_thumb();
        assert_eq!(app.sliders[0].focused_thumb, 0);
    }

    #[test]
    fn slider_at_requires_a_laid_out_track() {
        let mut app = app();
        // Nothing rendered yet: every track is zero-sized.
        assert_eq!(app.slider_at(10, 10), None);

        app.sliders[1].host.track = TrackRect::new(4.0, 7.0, 30.0, 1.0);
        assert_eq!(app.slider_at(4, 7), Some(1));
        assert_eq!(app.slider_at(33, 7), Some(1));
        assert_eq!(app.slider_at(34, 7), None);
        assert_eq!(app.slider_at(10, 8), None);
    }

    #[test]
    fn describe_joins_values_and_unit() {
        let app = app();
        assert_eq!(app.sliders[0].describe(), "120-320 $");
        assert_eq!(app.sliders[1].describe(), "3.5 *");
        assert_eq!(app.sliders[2].describe(), "2");
    }

    #[test]
    fn format_value_trims_trailing_zeros() {
        assert_eq!(format_value(120.0), "120");
        assert_eq!(format_value(3.5), "3.5");
        assert_eq!(format_value(0.25), "0.25");
    }
}
