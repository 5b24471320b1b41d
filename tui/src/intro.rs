//! Splash screen
//!
//! Renders the intro overlay: the wide block-letter name, subtitle,
//! spinner and expanding rule while the splash holds, then the
//! traveling title once the coordinator starts the merge. The same
//! layout math that paints the title also answers the coordinator's
//! measurement queries, so the two can never disagree about where the
//! splash title is.

use std::time::Duration;

use folio_core::content::Profile;
use folio_core::{EasingFunction, IntroCoordinator, IntroPhase, IntroStage, RectF};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use unicode_width::UnicodeWidthStr;

use crate::glyphs;
use crate::icons;
use crate::theme::{lerp_color, SPLASH_BG, SPLASH_FG, SPLASH_SUBTLE};

/// Name fade-in window at the start of the splash.
const NAME_FADE: Duration = Duration::from_millis(800);
/// Subtitle and spinner fade in after the name.
const DETAIL_DELAY: Duration = Duration::from_millis(800);
const DETAIL_FADE: Duration = Duration::from_millis(800);
/// The rule line's expansion window.
const RULE_GROW: Duration = Duration::from_millis(1200);
/// Below this scale the traveling title drops to the normal-width font.
const WIDE_CUTOFF: f32 = 0.72;

/// Measurement for the intro coordinator: the splash title from this
/// module's own layout, the hero title from the built document.
pub struct StageLayout<'a> {
    pub area: Rect,
    pub name: &'a str,
    pub hero: Option<RectF>,
}

impl IntroStage for StageLayout<'_> {
    fn splash_rect(&self) -> RectF {
        let (x, y) = title_origin(self.area, self.name);
        RectF::new(x, y, f32::from(glyphs::text_width(self.name, true)), 3.0)
    }

    fn hero_rect(&self) -> Option<RectF> {
        self.hero
    }
}

/// Top-left of the wide splash title. May be fractional or negative on
/// narrow terminals; the glyph painter clips.
fn title_origin(area: Rect, name: &str) -> (f32, f32) {
    let w = f32::from(glyphs::text_width(name, true));
    let x = (f32::from(area.width) - w) / 2.0;
    let y = (f32::from(area.height) / 2.0 - 5.0).max(0.0);
    (x, y)
}

/// Paint the overlay for the coordinator's current state.
pub fn render(buf: &mut Buffer, area: Rect, intro: &IntroCoordinator, profile: &Profile) {
    // Opaque ink backdrop, both themes
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(' ');
                cell.set_bg(SPLASH_BG);
            }
        }
    }

    match intro.phase() {
        IntroPhase::Idle | IntroPhase::Displaying => render_holding(buf, area, intro, profile),
        IntroPhase::Transitioning => render_travel(buf, area, intro, profile),
        IntroPhase::Complete => {}
    }
}

fn render_holding(buf: &mut Buffer, area: Rect, intro: &IntroCoordinator, profile: &Profile) {
    let elapsed = intro.elapsed();
    let (x0, y0) = title_origin(area, &profile.name);

    let name_t = EasingFunction::EaseOut.apply(fraction(elapsed, Duration::ZERO, NAME_FADE));
    let name_style = Style::default()
        .fg(lerp_color(SPLASH_BG, SPLASH_FG, name_t))
        .bg(SPLASH_BG)
        .add_modifier(Modifier::BOLD);
    glyphs::draw_text(
        buf,
        x0.round() as i32,
        y0.round() as i32,
        &profile.name,
        name_style,
        true,
    );

    let detail_t = EasingFunction::EaseOut.apply(fraction(elapsed, DETAIL_DELAY, DETAIL_FADE));
    if detail_t > 0.0 {
        let detail_style = Style::default()
            .fg(lerp_color(SPLASH_BG, SPLASH_SUBTLE, detail_t))
            .bg(SPLASH_BG);

        // Letter-spaced subtitle, the original's tracking-widest
        let spaced: String = profile
            .subtitle
            .chars()
            .flat_map(|c| [c, ' '])
            .collect::<String>()
            .trim_end()
            .to_string();
        draw_centered(buf, area, y0 as u16 + 4, &spaced, detail_style);

        let frame = (elapsed.as_millis() / 120) as usize % icons::SPINNER.len();
        draw_centered(buf, area, y0 as u16 + 6, icons::SPINNER[frame], detail_style);
    }

    let rule_t =
        EasingFunction::EaseInOutCubic.apply(fraction(elapsed, Duration::ZERO, RULE_GROW));
    let rule_max = area.width.saturating_sub(4).min(38);
    let rule_w = (f32::from(rule_max) * rule_t).round() as usize;
    if rule_w > 0 {
        draw_centered(
            buf,
            area,
            y0 as u16 + 8,
            &icons::sep::RULE.repeat(rule_w),
            Style::default().fg(SPLASH_FG).bg(SPLASH_BG),
        );
    }
}

fn render_travel(buf: &mut Buffer, area: Rect, intro: &IntroCoordinator, profile: &Profile) {
    let Some(transform) = intro.transform() else {
        return;
    };

    let (x0, y0) = title_origin(area, &profile.name);
    let wide_w = f32::from(glyphs::text_width(&profile.name, true));
    let center_x = x0 + wide_w / 2.0 + transform.dx;
    let center_y = y0 + 1.5 + transform.dy;

    // The terminal has no fractional scale; the wide font stands in for
    // the large title and drops to normal width partway through.
    let wide = transform.scale > WIDE_CUTOFF;
    let w = f32::from(glyphs::text_width(&profile.name, wide));

    let style = Style::default()
        .fg(SPLASH_FG)
        .bg(SPLASH_BG)
        .add_modifier(Modifier::BOLD);
    glyphs::draw_text(
        buf,
        (center_x - w / 2.0).round() as i32,
        (center_y - 1.5).round() as i32,
        &profile.name,
        style,
        wide,
    );
}

fn draw_centered(buf: &mut Buffer, area: Rect, y: u16, text: &str, style: Style) {
    if y >= area.y + area.height {
        return;
    }
    let w = text.width() as u16;
    let x = area.x + area.width.saturating_sub(w) / 2;
    let max = (area.x + area.width).saturating_sub(x) as usize;
    buf.set_stringn(x, y, text, max, style);
}

/// Progress of `elapsed` through a window starting at `delay`.
fn fraction(elapsed: Duration, delay: Duration, window: Duration) -> f32 {
    if window.is_zero() {
        return 1.0;
    }
    let into = elapsed.saturating_sub(delay);
    (into.as_secs_f32() / window.as_secs_f32()).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::IntroTiming;
    use pretty_assertions::assert_eq;

    fn profile() -> Profile {
        Profile::default()
    }

    fn area() -> Rect {
        Rect::new(0, 0, 160, 40)
    }

    fn hero() -> RectF {
        // Normal-width title centered on the same 160-wide screen
        let w = f32::from(glyphs::text_width(&profile().name, false));
        RectF::new((160.0 - w) / 2.0, 8.0, w, 3.0)
    }

    fn stage<'a>(name: &'a str) -> StageLayout<'a> {
        StageLayout {
            area: area(),
            name,
            hero: Some(hero()),
        }
    }

    #[test]
    fn measurement_matches_wide_font_metrics() {
        let profile = profile();
        let layout = stage(&profile.name);
        let rect = layout.splash_rect();

        assert_eq!(rect.width, f32::from(glyphs::text_width(&profile.name, true)));
        assert_eq!(rect.height, 3.0);
        // Centered: symmetric margins
        assert!((rect.x - (160.0 - rect.width) / 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn splash_fills_its_backdrop() {
        let profile = profile();
        let mut intro = IntroCoordinator::new(IntroTiming::default());
        intro.update(Duration::from_millis(100), &stage(&profile.name));

        let mut buf = Buffer::empty(area());
        render(&mut buf, area(), &intro, &profile);

        assert!(buf.content.iter().all(|cell| cell.bg == SPLASH_BG));
    }

    #[test]
    fn traveling_title_lands_on_the_hero_slot() {
        let profile = profile();
        let layout = stage(&profile.name);
        let mut intro = IntroCoordinator::new(IntroTiming::default());
        intro.update(Duration::from_millis(3500), &layout);
        intro.update(Duration::from_millis(1000), &layout);

        let mut buf = Buffer::empty(area());
        render(&mut buf, area(), &intro, &profile);

        // At travel end the normal-width title sits in the hero rows:
        // some glyph ink must be inside the hero rect rows, none in the
        // original splash rows.
        let hero = hero();
        let ink_in = |y: u16| {
            (0..160).any(|x| {
                buf.cell((x, y))
                    .is_some_and(|cell| cell.symbol() != " ")
            })
        };
        assert!(ink_in(hero.y as u16 + 1));
        let (_, splash_y) = title_origin(area(), &profile.name);
        assert!(!ink_in(splash_y as u16 + 1));
    }

    #[test]
    fn holding_phase_shows_name_and_rule() {
        let profile = profile();
        let layout = stage(&profile.name);
        let mut intro = IntroCoordinator::new(IntroTiming::default());
        intro.update(Duration::from_millis(2000), &layout);
        assert_eq!(intro.phase(), IntroPhase::Displaying);

        let mut buf = Buffer::empty(area());
        render(&mut buf, area(), &intro, &profile);
        let ink = buf.content.iter().filter(|c| c.symbol() != " ").count();
        assert!(ink > 50, "splash drew only {ink} cells");
    }
}
