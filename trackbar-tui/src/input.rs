//! Keyboard and mouse dispatch into the slider cores.
//!
//! Keyboard goes to the focused control's focused thumb. Mouse presses
//! hit-test thumbs on the pressed control: a press on a thumb starts a
//! drag, a press elsewhere on the track is a track click. Drags route to
//! whichever control captured the pointer, not to whatever sits under the
//! cursor now.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use trackbar_core::{PointerPosition, SliderKey};

use crate::app::{AppState, MOUSE};
use crate::persistence;
use crate::ui::slider_panel;

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Tab => {
            app.focus_next();
            return;
        }
        KeyCode::BackTab => {
            app.focus_prev();
            return;
        }
        KeyCode::Char('t') => {
            app.cycle_thumb();
            return;
        }
        KeyCode::Char('d') => {
            let entry = app.focused_entry_mut();
            let disabled = !entry.slider.is_disabled();
            entry.slider.set_disabled(&mut entry.host, disabled);
            let label = entry.label;
            if disabled {
                app.set_warning(format!("{label} disabled"));
            } else {
                app.set_status(format!("{label} enabled"));
            }
            return;
        }
        KeyCode::Char('s') => {
            let state = persistence::extract(app);
            match persistence::save(&app.state_path, &state) {
                Ok(()) => app.set_status("Filters saved"),
                Err(err) => app.set_warning(format!("Save failed: {err}")),
            }
            return;
        }
        _ => {}
    }

    if let Some(slider_key) = slider_key(key.code) {
        let entry = app.focused_entry_mut();
        let thumb = entry.focused_thumb;
        let handled = entry.slider.key(&mut entry.host, thumb, slider_key);
        if handled {
            let label = entry.label;
            let desc = entry.describe();
            app.set_status(format!("{label}: {desc}"));
        }
    }
}

fn slider_key(code: KeyCode) -> Option<SliderKey> {
    match code {
        KeyCode::Left => Some(SliderKey::ArrowLeft),
        KeyCode::Right => Some(SliderKey::ArrowRight),
        KeyCode::Up => Some(SliderKey::ArrowUp),
        KeyCode::Down => Some(SliderKey::ArrowDown),
        KeyCode::PageUp => Some(SliderKey::PageUp),
        KeyCode::PageDown => Some(SliderKey::PageDown),
        KeyCode::Home => Some(SliderKey::Home),
        KeyCode::End => Some(SliderKey::End),
        _ => None,
    }
}

pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) {
    // Cell centers: the core projection divides the track into equal value
    // bands per cell.
    let pos = PointerPosition::new(
        f64::from(mouse.column) + 0.5,
        f64::from(mouse.row) + 0.5,
    );

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let Some(idx) = app.slider_at(mouse.column, mouse.row) else {
                return;
            };
            app.focused = idx;
            let entry = &mut app.sliders[idx];
            let label = entry.label;
            match slider_panel::thumb_at(&entry.slider, entry.host.track, pos) {
                Some(thumb) => {
                    entry.focused_thumb = thumb;
                    entry
                        .slider
                        .pointer_down_on_thumb(&mut entry.host, thumb, MOUSE, pos);
                    if entry.slider.is_dragging(thumb) {
                        app.mouse_owner = Some(idx);
                        app.set_status(format!("{label}: dragging"));
                    }
                }
                None => {
                    entry.slider.track_click(&mut entry.host, pos);
                    let desc = entry.describe();
                    app.set_status(format!("{label}: {desc}"));
                }
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            let Some(idx) = app.mouse_owner else {
                return;
            };
            let entry = &mut app.sliders[idx];
            entry.slider.pointer_move(&mut entry.host, MOUSE, pos);
            let label = entry.label;
            let desc = entry.describe();
            app.set_status(format!("{label}: {desc}"));
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if let Some(idx) = app.mouse_owner.take() {
                let entry = &mut app.sliders[idx];
                entry.slider.pointer_up(&mut entry.host, MOUSE);
            }
        }
        _ => {}
    }
}
