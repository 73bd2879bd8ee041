//! Filter persistence - JSON save/load across restarts.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::app::AppState;

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PersistedState {
    /// Thumb values keyed by control label.
    pub slider_values: HashMap<String, Vec<f64>>,
    pub focused: usize,
}

/// Load persisted state from disk. Returns defaults if the file is missing
/// or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from the app.
pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        slider_values: app
            .sliders
            .iter()
            .map(|entry| (entry.label.to_string(), entry.slider.values().to_vec()))
            .collect(),
        focused: app.focused,
    }
}

/// Apply persisted state to the app. Values go through the normal rewrite
/// path, so anything stale or out of range clamps instead of breaking.
pub fn apply(app: &mut AppState, state: PersistedState) {
    for entry in &mut app.sliders {
        let Some(values) = state.slider_values.get(entry.label) else {
            continue;
        };
        // A saved set from an older layout may have the wrong thumb count;
        // keep the defaults in that case.
        if values.len() != entry.slider.thumb_count() {
            continue;
        }
        let _ = entry.slider.set_values(&mut entry.host, values);
    }
    if state.focused < app.sliders.len() {
        app.focused = state.focused;
    }
}
