//! Decorative backdrop
//!
//! A field of faint glyphs scattered behind the page. The field is a
//! pure function of a seed: every instance's glyph, position, size and
//! scroll-drift parameters are drawn once at construction and held
//! immutable, so render code never touches an RNG and two fields built
//! from the same seed are identical.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Glyph vocabulary for the field. Geometric shapes that read as faint
/// texture in most terminal fonts without stealing attention.
pub const FIELD_GLYPHS: &[char] = &[
    '◇', '○', '□', '△', '◈', '▢', '✦', '◌', '⌘', '∷', '•', '◦',
];

/// Default number of instances, matching the original field density.
pub const DEFAULT_COUNT: usize = 15;

/// One scattered glyph. Positions are percentages of the containing
/// area so the field survives resizes without recomputation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconSpec {
    pub glyph: char,
    /// Horizontal position, 0..95 (% of width)
    pub x_pct: f32,
    /// Vertical position, 0..95 (% of height)
    pub y_pct: f32,
    /// Larger instances render brighter
    pub large: bool,
    /// Cells of vertical drift while the page is scrolling (1..=3)
    pub drift_cells: u16,
}

/// The immutable field.
#[derive(Clone, Debug)]
pub struct IconField {
    seed: u64,
    specs: Vec<IconSpec>,
}

impl IconField {
    /// Build a field of `count` instances from a seed.
    #[must_use]
    pub fn from_seed(seed: u64, count: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let specs = (0..count)
            .map(|_| IconSpec {
                glyph: FIELD_GLYPHS[rng.gen_range(0..FIELD_GLYPHS.len())],
                x_pct: rng.gen_range(0.0..95.0),
                y_pct: rng.gen_range(0.0..95.0),
                large: rng.gen_bool(0.5),
                drift_cells: rng.gen_range(1..=3),
            })
            .collect();

        Self { seed, specs }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn specs(&self) -> &[IconSpec] {
        &self.specs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn same_seed_same_field() {
        let a = IconField::from_seed(42, DEFAULT_COUNT);
        let b = IconField::from_seed(42, DEFAULT_COUNT);
        assert_eq!(a.specs(), b.specs());
    }

    #[test]
    fn different_seeds_differ() {
        let a = IconField::from_seed(1, DEFAULT_COUNT);
        let b = IconField::from_seed(2, DEFAULT_COUNT);
        assert_ne!(a.specs(), b.specs());
    }

    #[test]
    fn parameters_stay_in_range() {
        let field = IconField::from_seed(7, 200);
        for spec in field.specs() {
            assert!((0.0..95.0).contains(&spec.x_pct));
            assert!((0.0..95.0).contains(&spec.y_pct));
            assert!((1..=3).contains(&spec.drift_cells));
            assert!(FIELD_GLYPHS.contains(&spec.glyph));
        }
    }

    #[test]
    fn count_is_respected() {
        assert_eq!(IconField::from_seed(0, 15).specs().len(), 15);
        assert_eq!(IconField::from_seed(0, 0).specs().len(), 0);
    }
}
