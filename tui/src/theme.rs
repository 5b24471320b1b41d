//! Theme and colors
//!
//! The page ships a light and a dark palette built around warm zinc
//! grays, with an accent gradient for headings and one strong color per
//! cube face. The splash always runs on the dark ink background
//! regardless of theme, like the original overlay.

use folio_core::ThemeMode;
use ratatui::style::Color;

/// Splash overlay ink, both themes.
pub const SPLASH_BG: Color = Color::Rgb(17, 17, 17);
pub const SPLASH_FG: Color = Color::Rgb(250, 250, 250);
pub const SPLASH_SUBTLE: Color = Color::Rgb(113, 113, 122);

/// Everything the renderers need to paint one theme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Page background
    pub bg: Color,
    /// Body text
    pub fg: Color,
    /// Secondary text
    pub dim: Color,
    /// Faintest text (backdrop glyphs, separators)
    pub faint: Color,
    /// Section headings
    pub heading: Color,
    /// Heading accent (the gradient's blue midpoint)
    pub accent: Color,
    /// Tagline pill
    pub pill_bg: Color,
    pub pill_fg: Color,
    /// Skill bar fill and trough
    pub bar_fill: Color,
    pub bar_empty: Color,
    /// Links
    pub link: Color,
    /// Cube face colors: front, back, right, left, top, bottom
    pub cube_faces: [Color; 6],
}

impl Palette {
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    #[must_use]
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(250, 250, 250),
            fg: Color::Rgb(39, 39, 42),
            dim: Color::Rgb(113, 113, 122),
            faint: Color::Rgb(180, 180, 186),
            heading: Color::Rgb(24, 24, 27),
            accent: Color::Rgb(30, 64, 175),
            pill_bg: Color::Rgb(39, 39, 42),
            pill_fg: Color::Rgb(244, 244, 245),
            bar_fill: Color::Rgb(39, 39, 42),
            bar_empty: Color::Rgb(212, 212, 216),
            link: Color::Rgb(37, 99, 235),
            cube_faces: CUBE_FACES,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(24, 24, 27),
            fg: Color::Rgb(228, 228, 231),
            dim: Color::Rgb(161, 161, 170),
            faint: Color::Rgb(82, 82, 91),
            heading: Color::Rgb(244, 244, 245),
            accent: Color::Rgb(147, 197, 253),
            pill_bg: Color::Rgb(244, 244, 245),
            pill_fg: Color::Rgb(24, 24, 27),
            bar_fill: Color::Rgb(228, 228, 231),
            bar_empty: Color::Rgb(63, 63, 70),
            link: Color::Rgb(96, 165, 250),
            cube_faces: CUBE_FACES,
        }
    }
}

/// Face colors, front/back/right/left/top/bottom: blue, purple, green,
/// red, yellow, pink. Same in both themes.
const CUBE_FACES: [Color; 6] = [
    Color::Rgb(96, 165, 250),
    Color::Rgb(167, 139, 250),
    Color::Rgb(52, 211, 153),
    Color::Rgb(248, 113, 113),
    Color::Rgb(251, 191, 36),
    Color::Rgb(244, 114, 182),
];

/// Linear blend between two colors. Non-RGB colors pass through
/// untouched (terminal-indexed colors have no meaningful midpoint).
#[must_use]
pub fn lerp_color(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| -> u8 {
                (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
            };
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ => {
            if t < 0.5 {
                from
            } else {
                to
            }
        }
    }
}

/// Fade a foreground toward the page background; `opacity` 1.0 leaves
/// the color untouched, 0.0 makes it vanish into the page.
#[must_use]
pub fn fade_toward(bg: Color, fg: Color, opacity: f32) -> Color {
    lerp_color(bg, fg, opacity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lerp_endpoints_are_exact() {
        let a = Color::Rgb(0, 0, 0);
        let b = Color::Rgb(200, 100, 50);
        assert_eq!(lerp_color(a, b, 0.0), a);
        assert_eq!(lerp_color(a, b, 1.0), b);
    }

    #[test]
    fn lerp_midpoint_rounds() {
        let mid = lerp_color(Color::Rgb(0, 0, 0), Color::Rgb(100, 50, 25), 0.5);
        assert_eq!(mid, Color::Rgb(50, 25, 13));
    }

    #[test]
    fn full_opacity_is_identity() {
        let fg = Color::Rgb(1, 2, 3);
        assert_eq!(fade_toward(Color::Rgb(9, 9, 9), fg, 1.0), fg);
    }

    #[test]
    fn palettes_differ_per_mode() {
        assert_ne!(
            Palette::for_mode(ThemeMode::Light).bg,
            Palette::for_mode(ThemeMode::Dark).bg
        );
    }
}
