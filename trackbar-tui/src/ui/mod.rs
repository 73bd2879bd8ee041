//! Frame layout: title, slider stack, vertical slider column, status bar,
//! key hints.

pub mod slider_panel;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use trackbar_core::Orientation;

use crate::app::AppState;
use crate::theme::Theme;

pub fn draw(f: &mut Frame, app: &mut AppState) {
    let theme = Theme::default();

    let outer = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(8),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(f.area());

    draw_title(f, outer[0], &theme);
    draw_body(f, outer[1], app, &theme);
    draw_status(f, outer[2], app, &theme);
    draw_hints(f, outer[3], &theme);
}

fn draw_title(f: &mut Frame, area: Rect, theme: &Theme) {
    let title = Line::from(vec![
        Span::styled(" trackbar ", theme.label_style(true)),
        Span::styled("rental search filters", theme.label_style(false)),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

fn draw_body(f: &mut Frame, area: Rect, app: &mut AppState, theme: &Theme) {
    let columns =
        Layout::horizontal([Constraint::Min(30), Constraint::Length(18)]).split(area);

    // Horizontal sliders stack on the left; vertical ones get the right
    // column.
    let horizontal: Vec<usize> = (0..app.sliders.len())
        .filter(|&i| app.sliders[i].slider.config().orientation == Orientation::Horizontal)
        .collect();
    let rows = Layout::vertical(
        horizontal
            .iter()
            .map(|_| Constraint::Length(3))
            .collect::<Vec<_>>(),
    )
    .split(columns[0]);
    for (slot, &idx) in horizontal.iter().enumerate() {
        let focused = app.focused == idx;
        slider_panel::render_horizontal(f, rows[slot], &mut app.sliders[idx], focused, theme);
    }

    let vertical: Vec<usize> = (0..app.sliders.len())
        .filter(|&i| app.sliders[i].slider.config().orientation == Orientation::Vertical)
        .collect();
    if let Some(&idx) = vertical.first() {
        let focused = app.focused == idx;
        slider_panel::render_vertical(f, columns[1], &mut app.sliders[idx], focused, theme);
    }
}

fn draw_status(f: &mut Frame, area: Rect, app: &AppState, theme: &Theme) {
    let line = Line::from(Span::styled(
        format!(" {}", app.status),
        theme.status_style(app.status_level),
    ));
    f.render_widget(Paragraph::new(line), area);
}

fn draw_hints(f: &mut Frame, area: Rect, theme: &Theme) {
    let hints =
        " [Tab]slider [t]thumb [arrows]step [PgUp/PgDn]page [Home/End]bounds [d]disable [s]save [q]quit";
    let line = Line::from(Span::styled(hints, theme.label_style(false)));
    f.render_widget(Paragraph::new(line), area);
}
