//! Backdrop renderer
//!
//! Paints the page background and the seeded icon field. While the
//! page is scrolling the icons drift a few cells in the scroll
//! direction and settle back shortly after scrolling stops, which
//! gives the page a faint sense of depth without ever animating on
//! its own.

use std::time::Duration;

use folio_core::IconField;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::theme::{lerp_color, Palette};

/// How long after the last scroll event the drift holds.
pub const SETTLE_AFTER: Duration = Duration::from_millis(300);

/// Which way the page content just moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Tracks whether the page is "scrolling" for drift purposes.
#[derive(Debug, Default)]
pub struct ScrollActivity {
    direction: Option<ScrollDirection>,
    since_last: Duration,
}

impl ScrollActivity {
    /// Record a scroll event.
    pub fn bump(&mut self, direction: ScrollDirection) {
        self.direction = Some(direction);
        self.since_last = Duration::ZERO;
    }

    /// Advance the settle timer.
    pub fn tick(&mut self, delta: Duration) {
        if self.direction.is_some() {
            self.since_last += delta;
            if self.since_last >= SETTLE_AFTER {
                self.direction = None;
            }
        }
    }

    #[must_use]
    pub fn drifting(&self) -> Option<ScrollDirection> {
        self.direction
    }
}

/// Paint the page background and the icon field into `area`.
pub fn render(
    buf: &mut Buffer,
    area: Rect,
    field: &IconField,
    activity: &ScrollActivity,
    palette: &Palette,
) {
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(' ');
                cell.set_bg(palette.bg);
            }
        }
    }

    for spec in field.specs() {
        let x = area.x + ((spec.x_pct / 100.0) * f32::from(area.width)) as u16;
        let mut y = i32::from(area.y) + ((spec.y_pct / 100.0) * f32::from(area.height)) as i32;

        match activity.drifting() {
            Some(ScrollDirection::Down) => y += i32::from(spec.drift_cells),
            Some(ScrollDirection::Up) => y -= i32::from(spec.drift_cells),
            None => {}
        }

        if y < i32::from(area.y) || y >= i32::from(area.y + area.height) || x >= area.x + area.width
        {
            continue;
        }

        let color = if spec.large {
            lerp_color(palette.bg, palette.faint, 0.9)
        } else {
            lerp_color(palette.bg, palette.faint, 0.6)
        };
        buf.set_string(
            x,
            y as u16,
            spec.glyph.to_string(),
            Style::default().fg(color).bg(palette.bg),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::backdrop::DEFAULT_COUNT;
    use folio_core::ThemeMode;
    use pretty_assertions::assert_eq;

    #[test]
    fn settle_timer_clears_the_drift() {
        let mut activity = ScrollActivity::default();
        activity.bump(ScrollDirection::Down);
        assert_eq!(activity.drifting(), Some(ScrollDirection::Down));

        activity.tick(Duration::from_millis(100));
        assert!(activity.drifting().is_some());

        activity.tick(Duration::from_millis(250));
        assert_eq!(activity.drifting(), None);
    }

    #[test]
    fn another_scroll_restarts_the_window() {
        let mut activity = ScrollActivity::default();
        activity.bump(ScrollDirection::Down);
        activity.tick(Duration::from_millis(250));
        activity.bump(ScrollDirection::Up);
        activity.tick(Duration::from_millis(250));
        // 250ms after the second bump: still drifting, new direction
        assert_eq!(activity.drifting(), Some(ScrollDirection::Up));
    }

    #[test]
    fn render_covers_the_page_and_scatters_icons() {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        let field = IconField::from_seed(7, DEFAULT_COUNT);
        let palette = Palette::for_mode(ThemeMode::Dark);

        render(&mut buf, area, &field, &ScrollActivity::default(), &palette);

        assert!(buf.content.iter().all(|cell| cell.bg == palette.bg));
        let glyphs = buf.content.iter().filter(|c| c.symbol() != " ").count();
        assert!(glyphs > 0 && glyphs <= DEFAULT_COUNT);
    }

    #[test]
    fn drift_moves_icons_between_frames() {
        let area = Rect::new(0, 0, 80, 24);
        let field = IconField::from_seed(11, DEFAULT_COUNT);
        let palette = Palette::for_mode(ThemeMode::Light);

        let mut still = Buffer::empty(area);
        render(&mut still, area, &field, &ScrollActivity::default(), &palette);

        let mut drifting = ScrollActivity::default();
        drifting.bump(ScrollDirection::Down);
        let mut moved = Buffer::empty(area);
        render(&mut moved, area, &field, &drifting, &palette);

        assert_ne!(
            still.content.iter().map(|c| c.symbol()).collect::<Vec<_>>(),
            moved.content.iter().map(|c| c.symbol()).collect::<Vec<_>>()
        );
    }
}
