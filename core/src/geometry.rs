//! Rectangle geometry for the splash-to-hero merge
//!
//! The merge maps one on-screen rectangle onto another with a uniform
//! scale and a center-to-center translation. Everything here is pure
//! math over pixel-equivalent units; the surface decides what a unit is.

/// An axis-aligned rectangle in pixel-equivalent units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RectF {
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center point of the rectangle.
    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Smallest dimension used for the scale ratio. Guards the division when
/// the source has not been laid out yet (zero width or height).
const MIN_DIMENSION: f32 = 1.0;

/// The transform that maps a source rectangle onto a destination:
/// translate the center by `(dx, dy)` while scaling uniformly by
/// `scale`. Computed once when the travel starts, discarded after.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometrySnapshot {
    pub dx: f32,
    pub dy: f32,
    pub scale: f32,
}

impl GeometrySnapshot {
    /// Identity transform (no movement, no scaling).
    pub const IDENTITY: Self = Self {
        dx: 0.0,
        dy: 0.0,
        scale: 1.0,
    };

    /// Compute the snapshot taking `src` onto `dst`.
    ///
    /// The scale is uniform, `min(dst_w / src_w, dst_h / src_h)`, so the
    /// title never distorts; the translation is the vector between the
    /// two centers. Degenerate source dimensions are clamped before
    /// dividing, so the result is always finite.
    #[must_use]
    pub fn between(src: &RectF, dst: &RectF) -> Self {
        let src_w = src.width.max(MIN_DIMENSION);
        let src_h = src.height.max(MIN_DIMENSION);

        let scale = (dst.width / src_w).min(dst.height / src_h);

        let (src_cx, src_cy) = src.center();
        let (dst_cx, dst_cy) = dst.center();

        Self {
            dx: dst_cx - src_cx,
            dy: dst_cy - src_cy,
            scale,
        }
    }

    /// Sample the transform at eased progress `t` in [0, 1]: the
    /// translation is applied proportionally and the scale interpolates
    /// from 1 toward its final value.
    #[must_use]
    pub fn at(&self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            dx: self.dx * t,
            dy: self.dy * t,
            scale: 1.0 + (self.scale - 1.0) * t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn snapshot_known_geometry() {
        // 400x100 splash onto a 200x50 hero slot
        let src = RectF::new(0.0, 0.0, 400.0, 100.0);
        let dst = RectF::new(700.0, 50.0, 200.0, 50.0);

        let snap = GeometrySnapshot::between(&src, &dst);
        assert_eq!(snap.scale, 0.5);
        assert_eq!((snap.dx, snap.dy), (600.0, 25.0));
    }

    #[test]
    fn snapshot_uniform_scale_takes_smaller_ratio() {
        let src = RectF::new(0.0, 0.0, 100.0, 100.0);
        let dst = RectF::new(0.0, 0.0, 80.0, 40.0);

        let snap = GeometrySnapshot::between(&src, &dst);
        assert_eq!(snap.scale, 0.4);
    }

    #[test]
    fn snapshot_degenerate_source_is_finite() {
        let src = RectF::new(10.0, 10.0, 0.0, 0.0);
        let dst = RectF::new(0.0, 0.0, 200.0, 50.0);

        let snap = GeometrySnapshot::between(&src, &dst);
        assert!(snap.scale.is_finite());
        assert!(snap.dx.is_finite() && snap.dy.is_finite());
    }

    #[test]
    fn sample_interpolates_translation_and_scale() {
        let snap = GeometrySnapshot {
            dx: 100.0,
            dy: -40.0,
            scale: 0.5,
        };

        let start = snap.at(0.0);
        assert_eq!(start, GeometrySnapshot::IDENTITY);

        let mid = snap.at(0.5);
        assert_eq!((mid.dx, mid.dy), (50.0, -20.0));
        assert_eq!(mid.scale, 0.75);

        let end = snap.at(1.0);
        assert_eq!((end.dx, end.dy, end.scale), (100.0, -40.0, 0.5));
    }
}
