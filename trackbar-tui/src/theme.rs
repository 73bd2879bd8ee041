//! Dark neon theme tokens for the slider panel.
//!
//! One palette struct, queried by the render code. Styles derive from the
//! interaction state (focused, dragging, disabled), never the other way
//! around.

use ratatui::style::{Color, Modifier, Style};

use crate::app::StatusLevel;

/// Color palette for the filter panel.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Electric cyan (focus, highlights)
    pub accent: Color,
    /// Neon green (filled sub-range)
    pub fill: Color,
    /// Neon orange (warnings, disabled drags)
    pub warning: Color,
    /// Steel blue (idle tracks, secondary text)
    pub muted: Color,
    /// White (primary text)
    pub text_primary: Color,
    /// Light gray (secondary text)
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(0, 255, 255),
            fill: Color::Rgb(0, 255, 128),
            warning: Color::Rgb(255, 140, 0),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }
}

impl Theme {
    pub fn label_style(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(self.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text_secondary)
        }
    }

    pub fn track_style(&self, disabled: bool) -> Style {
        if disabled {
            Style::default().fg(self.text_secondary)
        } else {
            Style::default().fg(self.muted)
        }
    }

    pub fn fill_style(&self, disabled: bool) -> Style {
        if disabled {
            Style::default().fg(self.text_secondary)
        } else {
            Style::default().fg(self.fill)
        }
    }

    pub fn thumb_style(&self, focused: bool, dragging: bool, disabled: bool) -> Style {
        if disabled {
            return Style::default().fg(self.text_secondary);
        }
        if dragging {
            return Style::default()
                .fg(self.accent)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        if focused {
            return Style::default()
                .fg(self.accent)
                .add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.text_primary)
    }

    pub fn status_style(&self, level: StatusLevel) -> Style {
        match level {
            StatusLevel::Info => Style::default().fg(self.text_primary),
            StatusLevel::Warning => Style::default().fg(self.warning),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumb_style_precedence() {
        let theme = Theme::default();
        // Disabled wins over everything.
        assert_eq!(
            theme.thumb_style(true, true, true),
            Style::default().fg(theme.text_secondary)
        );
        // Dragging wins over plain focus.
        assert!(theme
            .thumb_style(true, true, false)
            .add_modifier
            .contains(Modifier::REVERSED));
    }

    #[test]
    fn status_style_tracks_level() {
        let theme = Theme::default();
        assert_eq!(
            theme.status_style(StatusLevel::Warning),
            Style::default().fg(theme.warning)
        );
        assert_eq!(
            theme.status_style(StatusLevel::Info),
            Style::default().fg(theme.text_primary)
        );
    }
}
