//! Trackbar Core - headless multi-thumb slider engine.
//!
//! This crate contains the interaction logic of a range slider with no
//! rendering attached:
//! - Pointer-to-value projection across orientation and axis inversion
//! - Ordered thumb set with step-grid quantization (thumbs may cross)
//! - Drag / track-click / keyboard state machine with per-thumb sessions
//! - Host boundary trait supplying live track geometry and receiving
//!   change notifications and per-thumb range-input state

pub mod access;
pub mod config;
pub mod controller;
pub mod geometry;
pub mod model;

pub use access::ThumbAccess;
pub use config::{ConfigError, Orientation, SliderConfig};
pub use controller::{PointerId, Slider, SliderError, SliderHost, SliderKey};
pub use geometry::{PointerPosition, TrackRect};
pub use model::{ThumbSet, ValueError};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: the public types are Send + Sync so hosts can
    /// hand sliders across threads (e.g. a render thread handing input to a
    /// state thread).
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<SliderConfig>();
        require_sync::<SliderConfig>();
        require_send::<Orientation>();
        require_sync::<Orientation>();
        require_send::<ThumbSet>();
        require_sync::<ThumbSet>();
        require_send::<Slider>();
        require_sync::<Slider>();
        require_send::<TrackRect>();
        require_sync::<TrackRect>();
        require_send::<PointerPosition>();
        require_sync::<PointerPosition>();
        require_send::<PointerId>();
        require_sync::<PointerId>();
        require_send::<SliderKey>();
        require_sync::<SliderKey>();
        require_send::<ThumbAccess>();
        require_sync::<ThumbAccess>();
        require_send::<ConfigError>();
        require_sync::<ConfigError>();
        require_send::<SliderError>();
        require_sync::<SliderError>();
        require_send::<ValueError>();
        require_sync::<ValueError>();
    }
}
