//! One slider control: label, track, filled sub-range, thumbs, readout.
//!
//! The render pass records the track's cell rectangle into the entry's
//! host, which is what the core re-queries on every pointer move. Cell
//! math here mirrors the core projection: a pointer at `col + 0.5` inside
//! cell `i` projects to the value band that `cell_for` assigns to `i`.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use trackbar_core::{geometry, Orientation, PointerPosition, Slider, SliderConfig, TrackRect};

use crate::app::SliderEntry;
use crate::theme::Theme;

const TRACK_H: &str = "─";
const FILL_H: &str = "━";
const TRACK_V: &str = "│";
const FILL_V: &str = "┃";
const THUMB: &str = "●";

/// Screen cell along the track axis for a value, accounting for
/// orientation and inversion. Exact inverse of the core's projection at
/// cell granularity.
pub fn cell_for(value: f64, cells: u16, config: &SliderConfig) -> u16 {
    if cells == 0 {
        return 0;
    }
    let mut f = geometry::fraction_of(value, config).clamp(0.0, 1.0);
    if config.inverted {
        f = 1.0 - f;
    }
    if config.orientation == Orientation::Vertical {
        f = 1.0 - f;
    }
    ((f * f64::from(cells)) as u16).min(cells - 1)
}

/// Thumb under the pointer, within one cell of tolerance on the track
/// axis. Ties pick the lowest index, matching nearest-thumb semantics.
pub fn thumb_at(slider: &Slider, track: TrackRect, pos: PointerPosition) -> Option<usize> {
    let config = slider.config();
    let (coord, origin, extent) = match config.orientation {
        Orientation::Horizontal => (pos.x, track.x, track.width),
        Orientation::Vertical => (pos.y, track.y, track.height),
    };
    if extent <= 0.0 {
        return None;
    }
    let pointer_cell = (coord - origin).floor() as i64;
    let cells = extent as u16;

    let mut best: Option<(usize, i64)> = None;
    for (i, &value) in slider.values().iter().enumerate() {
        let dist = (i64::from(cell_for(value, cells, config)) - pointer_cell).abs();
        if dist <= 1 && best.map_or(true, |(_, d)| dist < d) {
            best = Some((i, dist));
        }
    }
    best.map(|(i, _)| i)
}

/// Fill band endpoints in cells: single thumb fills from `min`, multiple
/// thumbs fill the range extent.
fn fill_cells(slider: &Slider, cells: u16) -> (u16, u16) {
    let config = slider.config();
    let (lo, hi) = if slider.thumb_count() == 1 {
        (config.min, slider.values()[0])
    } else {
        slider.range_extent()
    };
    let a = cell_for(lo, cells, config);
    let b = cell_for(hi, cells, config);
    (a.min(b), a.max(b))
}

pub fn render_horizontal(
    f: &mut Frame,
    area: Rect,
    entry: &mut SliderEntry,
    focused: bool,
    theme: &Theme,
) {
    if area.width < 4 || area.height < 2 {
        return;
    }
    let cells = area.width - 2;
    let track_x = area.x + 1;
    let track_y = area.y + 1;

    let header = header_line(entry, focused, theme);

    let config = *entry.slider.config();
    let (fill_lo, fill_hi) = fill_cells(&entry.slider, cells);
    let mut spans: Vec<Span> = (0..cells)
        .map(|c| {
            if c >= fill_lo && c <= fill_hi {
                Span::styled(FILL_H, theme.fill_style(entry.slider.is_disabled()))
            } else {
                Span::styled(TRACK_H, theme.track_style(entry.slider.is_disabled()))
            }
        })
        .collect();
    for (i, &value) in entry.slider.values().iter().enumerate() {
        let cell = cell_for(value, cells, &config) as usize;
        spans[cell] = Span::styled(
            THUMB,
            theme.thumb_style(
                focused && i == entry.focused_thumb,
                entry.slider.is_dragging(i),
                entry.slider.is_disabled(),
            ),
        );
    }

    let mut track_line = vec![Span::raw(" ")];
    track_line.extend(spans);

    // The rect the core will re-query on the next pointer move.
    entry.host.track = TrackRect::new(
        f64::from(track_x),
        f64::from(track_y),
        f64::from(cells),
        1.0,
    );

    let para = Paragraph::new(vec![header, Line::from(track_line)]);
    f.render_widget(para, area);
}

pub fn render_vertical(
    f: &mut Frame,
    area: Rect,
    entry: &mut SliderEntry,
    focused: bool,
    theme: &Theme,
) {
    if area.width < 3 || area.height < 4 {
        return;
    }
    // Header, track rows, readout.
    let cells = area.height - 2;
    let track_x = area.x + 1;
    let track_y = area.y + 1;

    let mut lines = vec![header_line(entry, focused, theme)];

    let config = *entry.slider.config();
    let (fill_lo, fill_hi) = fill_cells(&entry.slider, cells);
    let mut rows: Vec<Span> = (0..cells)
        .map(|c| {
            if c >= fill_lo && c <= fill_hi {
                Span::styled(FILL_V, theme.fill_style(entry.slider.is_disabled()))
            } else {
                Span::styled(TRACK_V, theme.track_style(entry.slider.is_disabled()))
            }
        })
        .collect();
    for (i, &value) in entry.slider.values().iter().enumerate() {
        let cell = cell_for(value, cells, &config) as usize;
        rows[cell] = Span::styled(
            THUMB,
            theme.thumb_style(
                focused && i == entry.focused_thumb,
                entry.slider.is_dragging(i),
                entry.slider.is_disabled(),
            ),
        );
    }
    for row in rows {
        lines.push(Line::from(vec![Span::raw(" "), row]));
    }
    lines.push(Line::from(Span::styled(
        format!(" {}", entry.describe()),
        theme.label_style(focused),
    )));

    entry.host.track = TrackRect::new(
        f64::from(track_x),
        f64::from(track_y),
        1.0,
        f64::from(cells),
    );

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}

fn header_line<'a>(entry: &SliderEntry, focused: bool, theme: &Theme) -> Line<'a> {
    let mut spans = vec![
        Span::styled(entry.label.to_string(), theme.label_style(focused)),
        Span::raw("  "),
        Span::styled(
            entry.describe(),
            theme.label_style(false),
        ),
    ];
    if entry.slider.is_disabled() {
        spans.push(Span::styled(
            "  [disabled]".to_string(),
            theme.status_style(crate::app::StatusLevel::Warning),
        ));
    }
    Line::from(spans)
}
