//! Per-thumb state surface for assistive hosts.

use crate::config::Orientation;

/// Everything a host needs to express one thumb as a standard range input,
/// with no markup knowledge in the core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbAccess {
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub orientation: Orientation,
    pub disabled: bool,
}
