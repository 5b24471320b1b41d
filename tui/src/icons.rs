//! Block glyph vocabulary
//!
//! Minimalist glyphs from the block-drawing and geometric-shape ranges.
//! They survive most terminal fonts and keep the page free of bright
//! emoji.
//!
//! Blocks: ▀ ▄ █ ░ ▒ ▓   Triangles: ▲ ▴ ▾ ▸ ◂   Shapes: ■ ◆ ◇ ● ○ ◈

/// Skill level bars
pub mod level {
    /// Filled portion
    pub const FULL: &str = "▓";
    /// Empty trough
    pub const EMPTY: &str = "░";
}

/// Navigation and affordances
pub mod nav {
    /// Scroll down indicator
    pub const DOWN: &str = "▾";
    /// Scroll position marker
    pub const UP: &str = "▴";
    /// List bullet
    pub const ITEM: &str = "▸";
    /// External link
    pub const LINK: &str = "↗";
}

/// Status line glyphs
pub mod status {
    /// Location pin
    pub const PIN: &str = "◈";
    /// Auto-rotate active
    pub const SPIN: &str = "◆";
    /// Auto-rotate suspended (manual drag / settle window)
    pub const HELD: &str = "◇";
}

/// Separators
pub mod sep {
    pub const DOT: &str = "·";
    pub const DIAMOND: &str = "◇";
    pub const RULE: &str = "─";
}

/// Splash spinner frames (quarter-shaded circle)
pub const SPINNER: &[&str] = &["◐", "◓", "◑", "◒"];

/// Render a skill level (0..=100) as a bar of block characters.
#[must_use]
pub fn level_bar(level: u8, width: usize) -> String {
    let level = level.min(100) as usize;
    let filled = (level * width) / 100;
    let empty = width.saturating_sub(filled);

    format!("{}{}", level::FULL.repeat(filled), level::EMPTY.repeat(empty))
}

/// Join items with the diamond separator used in the roles line.
#[must_use]
pub fn diamond_list(items: &[String]) -> String {
    items.join(&format!(" {} ", sep::DIAMOND))
}
