//! Drag, track-click, and keyboard interaction driving the thumb set.
//!
//! Sessions are keyed by thumb index, one per thumb, so concurrent touches
//! on distinct thumbs stay independent; there is no global dragging flag.
//! A pointer capture acquired when a session starts is released exactly
//! once, on every exit path: pointer up, pointer cancel, or a disable
//! observed mid-drag. All handlers run synchronously to completion.

use std::collections::HashMap;

use thiserror::Error;

use crate::access::ThumbAccess;
use crate::config::{ConfigError, SliderConfig};
use crate::geometry::{self, PointerPosition, TrackRect};
use crate::model::{ThumbSet, ValueError};

/// Host-assigned identity of a pointer or touch contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub u32);

/// Keys a focused thumb responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliderKey {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    PageUp,
    PageDown,
    Home,
    End,
}

/// The rendering side of a slider: live track geometry in, change
/// notifications out.
///
/// `capture_pointer` / `release_pointer` bracket a drag session. Whatever
/// document-global move/up listeners the host wires up for a capture must
/// stay scoped to it; the controller guarantees one release per capture on
/// every exit path. Failing to honor the pair leaks one listener set per
/// drag.
pub trait SliderHost {
    /// Current track bounding box. Queried on every pointer move, never
    /// cached, so hosts must not serve a stale rect across reflows.
    fn track_rect(&self) -> TrackRect;

    /// Full ordered thumb values plus refreshed render percentages, emitted
    /// on every value mutation, unthrottled.
    fn values_changed(&mut self, values: &[f64], percents: &[f64]);

    fn capture_pointer(&mut self, pointer: PointerId);

    fn release_pointer(&mut self, pointer: PointerId);
}

/// One live drag. At most one session per thumb, and a pointer drives at
/// most one thumb at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    pointer: PointerId,
    origin: PointerPosition,
}

/// Rejected slider construction.
#[derive(Debug, Error)]
pub enum SliderError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Values(#[from] ValueError),
}

/// A multi-thumb slider: configuration, ordered thumb values, and the
/// interaction state machine, with rendering behind [`SliderHost`].
#[derive(Debug)]
pub struct Slider {
    config: SliderConfig,
    thumbs: ThumbSet,
    sessions: HashMap<usize, DragSession>,
    disabled: bool,
}

impl Slider {
    /// Validate configuration and initial values up front; both are caller
    /// bugs when wrong, not runtime conditions.
    pub fn new(config: SliderConfig, initial: &[f64]) -> Result<Self, SliderError> {
        config.validate()?;
        let thumbs = ThumbSet::new(initial, &config)?;
        Ok(Self {
            disabled: config.disabled,
            config,
            thumbs,
            sessions: HashMap::new(),
        })
    }

    /// Single-thumb convenience over [`Slider::new`].
    pub fn single(config: SliderConfig, initial: f64) -> Result<Self, SliderError> {
        Self::new(config, &[initial])
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// The full ordered thumb set. Index is thumb identity.
    pub fn values(&self) -> &[f64] {
        self.thumbs.values()
    }

    pub fn thumb_count(&self) -> usize {
        self.thumbs.len()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_dragging(&self, thumb: usize) -> bool {
        self.sessions.contains_key(&thumb)
    }

    /// Pointer position where the thumb's live drag started, if any.
    pub fn drag_origin(&self, thumb: usize) -> Option<PointerPosition> {
        self.sessions.get(&thumb).map(|s| s.origin)
    }

    /// Smallest and largest thumb values, for the filled sub-range.
    pub fn range_extent(&self) -> (f64, f64) {
        self.thumbs.range_extent()
    }

    /// Render percentages for every thumb, in thumb order.
    pub fn percents(&self) -> Vec<f64> {
        self.thumbs
            .values()
            .iter()
            .map(|&v| geometry::percent_of(v, &self.config))
            .collect()
    }

    /// Range-input semantics for every thumb, in thumb order.
    pub fn access_state(&self) -> Vec<ThumbAccess> {
        self.thumbs
            .values()
            .iter()
            .map(|&value| ThumbAccess {
                value,
                min: self.config.min,
                max: self.config.max,
                orientation: self.config.orientation,
                disabled: self.disabled,
            })
            .collect()
    }

    /// External rewrite: the new values fully replace the set, no partial
    /// merge. Emits like every other mutation.
    pub fn set_values(
        &mut self,
        host: &mut dyn SliderHost,
        values: &[f64],
    ) -> Result<(), ValueError> {
        self.thumbs.set_all(values, &self.config)?;
        self.emit(host);
        Ok(())
    }

    /// Start a drag session on `thumb`. Captures the pointer for the
    /// session's lifetime.
    ///
    /// No-ops: slider disabled, index names no thumb, thumb already in a
    /// session, or the pointer already driving another thumb.
    pub fn pointer_down_on_thumb(
        &mut self,
        host: &mut dyn SliderHost,
        thumb: usize,
        pointer: PointerId,
        position: PointerPosition,
    ) {
        if self.disabled || thumb >= self.thumbs.len() {
            return;
        }
        if self.sessions.contains_key(&thumb) || self.session_for(pointer).is_some() {
            return;
        }
        host.capture_pointer(pointer);
        self.sessions.insert(
            thumb,
            DragSession {
                pointer,
                origin: position,
            },
        );
    }

    /// Route a move to the pointer's session: re-query the live track rect,
    /// project, write the thumb, emit. Strays are silent no-ops.
    pub fn pointer_move(
        &mut self,
        host: &mut dyn SliderHost,
        pointer: PointerId,
        position: PointerPosition,
    ) {
        let Some(thumb) = self.session_for(pointer) else {
            return;
        };
        // Layout may have shifted since the last move; never reuse a rect.
        let track = host.track_rect();
        let raw = geometry::raw_value_at(position, track, &self.config);
        if self.thumbs.set_at(thumb, raw, &self.config).is_some() {
            self.emit(host);
        }
    }

    /// End the pointer's session and release its capture. No emission, and
    /// a stray up is a silent no-op.
    pub fn pointer_up(&mut self, host: &mut dyn SliderHost, pointer: PointerId) {
        self.end_session(host, pointer);
    }

    /// Cancellation takes the same exit path as an ordinary release.
    pub fn pointer_cancel(&mut self, host: &mut dyn SliderHost, pointer: PointerId) {
        self.end_session(host, pointer);
    }

    /// A press on the track away from any thumb: move the nearest thumb to
    /// the pressed position. Never starts a drag, and is ignored while any
    /// drag session is live.
    pub fn track_click(&mut self, host: &mut dyn SliderHost, position: PointerPosition) {
        if self.disabled || !self.sessions.is_empty() {
            return;
        }
        let track = host.track_rect();
        // Nearest is resolved on the raw projection; snapping first could
        // flip a tie toward the wrong thumb.
        let raw = geometry::raw_value_at(position, track, &self.config);
        let thumb = self.thumbs.nearest(raw);
        if self.thumbs.set_at(thumb, raw, &self.config).is_some() {
            self.emit(host);
        }
    }

    /// Keyboard nudge on a focused thumb. Arrow keys move one step, page
    /// keys a tenth of the span, Home/End jump to the exact bounds even off
    /// the step grid.
    ///
    /// Returns `true` when the key was consumed so the host can suppress
    /// its default behavior (e.g. scrolling).
    pub fn key(&mut self, host: &mut dyn SliderHost, thumb: usize, key: SliderKey) -> bool {
        if self.disabled {
            return false;
        }
        let Some(current) = self.thumbs.get(thumb) else {
            return false;
        };
        let stored = match key {
            SliderKey::ArrowLeft | SliderKey::ArrowDown => {
                self.thumbs.set_at(thumb, current - self.config.step, &self.config)
            }
            SliderKey::ArrowRight | SliderKey::ArrowUp => {
                self.thumbs.set_at(thumb, current + self.config.step, &self.config)
            }
            SliderKey::PageDown => {
                self.thumbs.set_at(thumb, current - self.config.page(), &self.config)
            }
            SliderKey::PageUp => {
                self.thumbs.set_at(thumb, current + self.config.page(), &self.config)
            }
            SliderKey::Home => self.thumbs.set_at_exact(thumb, self.config.min, &self.config),
            SliderKey::End => self.thumbs.set_at_exact(thumb, self.config.max, &self.config),
        };
        if stored.is_some() {
            self.emit(host);
            true
        } else {
            false
        }
    }

    /// Toggle interactivity. Disabling forcibly ends every live session the
    /// moment it is observed, releasing each capture exactly once, without
    /// emitting.
    pub fn set_disabled(&mut self, host: &mut dyn SliderHost, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            for (_, session) in self.sessions.drain() {
                host.release_pointer(session.pointer);
            }
        }
    }

    fn session_for(&self, pointer: PointerId) -> Option<usize> {
        self.sessions
            .iter()
            .find(|(_, s)| s.pointer == pointer)
            .map(|(&thumb, _)| thumb)
    }

    fn end_session(&mut self, host: &mut dyn SliderHost, pointer: PointerId) {
        let Some(thumb) = self.session_for(pointer) else {
            return;
        };
        // Removal before release keeps the release unrepeatable even if the
        // host re-enters the controller from release_pointer.
        self.sessions.remove(&thumb);
        host.release_pointer(pointer);
    }

    fn emit(&self, host: &mut dyn SliderHost) {
        let percents = self.percents();
        host.values_changed(self.thumbs.values(), &percents);
    }
}
