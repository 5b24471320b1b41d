//! Easing curves
//!
//! Frame-rate independent easing applied to normalized progress values.
//! The splash travel uses a cubic bezier rather than one of the named
//! curves; both forms live here so every consumer shares one vocabulary.

use serde::{Deserialize, Serialize};

/// Named easing functions for simple fades and slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum EasingFunction {
    /// No easing (constant speed)
    #[default]
    Linear,

    /// Slow start, fast end
    EaseIn,

    /// Fast start, slow end
    EaseOut,

    /// Slow start and end
    EaseInOut,

    /// Cubic ease out
    EaseOutCubic,

    /// Cubic ease in and out
    EaseInOutCubic,
}

impl EasingFunction {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t).powi(2),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// A cubic bezier easing curve with endpoints pinned at (0,0) and (1,1).
///
/// Evaluation solves the parametric x(s) = u for s (Newton with a
/// bisection fallback), then returns y(s). Control x values must lie in
/// [0, 1], which keeps x(s) monotonic and the solve well-defined.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

/// The splash title's travel curve: ease-in-out, slightly front-loaded.
pub const SPLASH_TRAVEL: CubicBezier = CubicBezier::new(0.83, 0.0, 0.17, 1.0);

impl CubicBezier {
    #[must_use]
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample_axis(s: f32, c1: f32, c2: f32) -> f32 {
        // Bernstein form with p0 = 0, p3 = 1
        let inv = 1.0 - s;
        3.0 * inv * inv * s * c1 + 3.0 * inv * s * s * c2 + s * s * s
    }

    fn sample_axis_derivative(s: f32, c1: f32, c2: f32) -> f32 {
        let inv = 1.0 - s;
        3.0 * inv * inv * c1 + 6.0 * inv * s * (c2 - c1) + 3.0 * s * s * (1.0 - c2)
    }

    /// Find the curve parameter whose x equals `u`.
    fn solve_s(&self, u: f32) -> f32 {
        let mut s = u;
        for _ in 0..8 {
            let x = Self::sample_axis(s, self.x1, self.x2) - u;
            if x.abs() < 1e-5 {
                return s;
            }
            let dx = Self::sample_axis_derivative(s, self.x1, self.x2);
            if dx.abs() < 1e-6 {
                break;
            }
            s = (s - x / dx).clamp(0.0, 1.0);
        }

        // Newton stalled (flat derivative near the endpoints); bisect.
        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        for _ in 0..32 {
            s = (lo + hi) / 2.0;
            if Self::sample_axis(s, self.x1, self.x2) < u {
                lo = s;
            } else {
                hi = s;
            }
        }
        s
    }

    /// Evaluate the curve at progress `u` in [0, 1].
    #[must_use]
    pub fn eval(&self, u: f32) -> f32 {
        if u <= 0.0 {
            return 0.0;
        }
        if u >= 1.0 {
            return 1.0;
        }
        let s = self.solve_s(u);
        Self::sample_axis(s, self.y1, self.y2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints_fixed() {
        for easing in [
            EasingFunction::Linear,
            EasingFunction::EaseIn,
            EasingFunction::EaseOut,
            EasingFunction::EaseInOut,
            EasingFunction::EaseOutCubic,
            EasingFunction::EaseInOutCubic,
        ] {
            assert!(easing.apply(0.0).abs() < 0.001, "{easing:?} at 0.0");
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{easing:?} at 1.0");
        }
    }

    #[test]
    fn bezier_endpoints_fixed() {
        assert_eq!(SPLASH_TRAVEL.eval(0.0), 0.0);
        assert_eq!(SPLASH_TRAVEL.eval(1.0), 1.0);
    }

    #[test]
    fn bezier_midpoint_symmetric_curve() {
        // (0.83, 0, 0.17, 1) is symmetric about (0.5, 0.5)
        let mid = SPLASH_TRAVEL.eval(0.5);
        assert!((mid - 0.5).abs() < 0.01, "midpoint {mid}");
    }

    #[test]
    fn bezier_front_loaded_shape() {
        // Slow start: barely moved at 20% time; nearly arrived at 80%
        assert!(SPLASH_TRAVEL.eval(0.2) < 0.1);
        assert!(SPLASH_TRAVEL.eval(0.8) > 0.9);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Easing output stays within [0, 1] for [0, 1] input
        #[test]
        fn easing_bounded(t in 0.0f32..=1.0) {
            for easing in [
                EasingFunction::Linear,
                EasingFunction::EaseIn,
                EasingFunction::EaseOut,
                EasingFunction::EaseInOut,
                EasingFunction::EaseOutCubic,
                EasingFunction::EaseInOutCubic,
            ] {
                let v = easing.apply(t);
                prop_assert!((0.0..=1.0).contains(&v), "{:?}({}) = {}", easing, t, v);
            }
        }

        /// The travel bezier is bounded and monotonic
        #[test]
        fn bezier_bounded_monotonic(t1 in 0.0f32..=1.0, t2 in 0.0f32..=1.0) {
            let (lo, hi) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
            let (a, b) = (SPLASH_TRAVEL.eval(lo), SPLASH_TRAVEL.eval(hi));
            prop_assert!((0.0..=1.0).contains(&a));
            prop_assert!(a <= b + 0.001, "not monotonic: f({lo}) = {a} > f({hi}) = {b}");
        }
    }
}
