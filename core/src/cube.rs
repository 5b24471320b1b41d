//! Cube geometry
//!
//! Pure math for the decorative cube: six faces offset from the center
//! along the axes, rotated by pitch (about x) then yaw (about y),
//! culled when their outward normal turns away from the viewer, and
//! depth-sorted for painter's-algorithm rendering.
//!
//! Coordinates are right-handed: x right, y up, z toward the viewer.
//! The surface maps projected units onto terminal cells (including the
//! cell aspect correction); nothing here knows about cells.

use serde::{Deserialize, Serialize};

/// A point or direction in cube space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub fn rotate_x(self, deg: f32) -> Self {
        let (sin, cos) = deg.to_radians().sin_cos();
        Self {
            x: self.x,
            y: self.y * cos - self.z * sin,
            z: self.y * sin + self.z * cos,
        }
    }

    #[must_use]
    pub fn rotate_y(self, deg: f32) -> Self {
        let (sin, cos) = deg.to_radians().sin_cos();
        Self {
            x: self.x * cos + self.z * sin,
            y: self.y,
            z: -self.x * sin + self.z * cos,
        }
    }

    /// The assembly rotation: yaw about y first, then pitch about x.
    #[must_use]
    pub fn rotated(self, pitch_deg: f32, yaw_deg: f32) -> Self {
        self.rotate_y(yaw_deg).rotate_x(pitch_deg)
    }
}

/// The six faces, named from the untransformed viewer's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    Front,
    Back,
    Right,
    Left,
    Top,
    Bottom,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Right,
        Face::Left,
        Face::Top,
        Face::Bottom,
    ];

    /// Index into per-face content tables (labels, colors).
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Face::Front => 0,
            Face::Back => 1,
            Face::Right => 2,
            Face::Left => 3,
            Face::Top => 4,
            Face::Bottom => 5,
        }
    }

    /// Outward unit normal before rotation.
    #[must_use]
    pub fn normal(self) -> Vec3 {
        match self {
            Face::Front => Vec3::new(0.0, 0.0, 1.0),
            Face::Back => Vec3::new(0.0, 0.0, -1.0),
            Face::Right => Vec3::new(1.0, 0.0, 0.0),
            Face::Left => Vec3::new(-1.0, 0.0, 0.0),
            Face::Top => Vec3::new(0.0, 1.0, 0.0),
            Face::Bottom => Vec3::new(0.0, -1.0, 0.0),
        }
    }

    /// The face's four corners, counter-clockwise seen from outside,
    /// for a cube of the given half-extent.
    #[must_use]
    pub fn corners(self, half: f32) -> [Vec3; 4] {
        let h = half;
        match self {
            Face::Front => [
                Vec3::new(-h, -h, h),
                Vec3::new(h, -h, h),
                Vec3::new(h, h, h),
                Vec3::new(-h, h, h),
            ],
            Face::Back => [
                Vec3::new(h, -h, -h),
                Vec3::new(-h, -h, -h),
                Vec3::new(-h, h, -h),
                Vec3::new(h, h, -h),
            ],
            Face::Right => [
                Vec3::new(h, -h, h),
                Vec3::new(h, -h, -h),
                Vec3::new(h, h, -h),
                Vec3::new(h, h, h),
            ],
            Face::Left => [
                Vec3::new(-h, -h, -h),
                Vec3::new(-h, -h, h),
                Vec3::new(-h, h, h),
                Vec3::new(-h, h, -h),
            ],
            Face::Top => [
                Vec3::new(-h, h, h),
                Vec3::new(h, h, h),
                Vec3::new(h, h, -h),
                Vec3::new(-h, h, -h),
            ],
            Face::Bottom => [
                Vec3::new(-h, -h, -h),
                Vec3::new(h, -h, -h),
                Vec3::new(h, -h, h),
                Vec3::new(-h, -h, h),
            ],
        }
    }
}

/// Cube rendering tuning. `half` is the half-extent in projection
/// units; `distance` is the viewer distance for the weak perspective.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeTuning {
    pub half: f32,
    pub distance: f32,
}

impl Default for CubeTuning {
    fn default() -> Self {
        Self {
            half: 4.5,
            distance: 28.0,
        }
    }
}

/// A face that survived culling, with its rotated geometry.
#[derive(Clone, Copy, Debug)]
pub struct VisibleFace {
    pub face: Face,
    /// Rotated corners, same winding as [`Face::corners`]
    pub corners: [Vec3; 4],
    /// Depth of the face center (larger z = closer to the viewer)
    pub depth: f32,
}

/// Rotate all faces, cull the ones facing away, and return the rest
/// sorted far-to-near so a painter can just draw in order.
#[must_use]
pub fn visible_faces(pitch_deg: f32, yaw_deg: f32, half: f32) -> Vec<VisibleFace> {
    let mut faces: Vec<VisibleFace> = Face::ALL
        .iter()
        .filter_map(|&face| {
            let normal = face.normal().rotated(pitch_deg, yaw_deg);
            if normal.z <= 0.0 {
                return None;
            }
            let corners = face
                .corners(half)
                .map(|corner| corner.rotated(pitch_deg, yaw_deg));
            let depth = corners.iter().map(|c| c.z).sum::<f32>() / 4.0;
            Some(VisibleFace {
                face,
                corners,
                depth,
            })
        })
        .collect();

    faces.sort_by(|a, b| a.depth.total_cmp(&b.depth));
    faces
}

/// Weak-perspective projection onto the viewing plane. The viewer sits
/// at `(0, 0, distance)` looking down -z; y is flipped so the result is
/// screen-oriented (y grows downward).
#[must_use]
pub fn project(point: Vec3, distance: f32) -> (f32, f32) {
    // Points never get near the viewer plane for sane tunings, but a
    // drag under PitchPolicy::Free can in principle swing a corner out;
    // keep the divisor away from zero.
    let w = (distance - point.z).max(1e-3);
    let s = distance / w;
    (point.x * s, -point.y * s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn unrotated_cube_shows_only_the_front() {
        let faces = visible_faces(0.0, 0.0, 1.0);
        assert_eq!(faces.len(), 1);
        assert_eq!(faces[0].face, Face::Front);
    }

    #[test]
    fn default_view_shows_three_faces() {
        let faces = visible_faces(15.0, 45.0, 1.0);
        let names: Vec<Face> = faces.iter().map(|f| f.face).collect();
        assert_eq!(names.len(), 3);
        assert!(names.contains(&Face::Front));
        assert!(names.contains(&Face::Left));
        assert!(names.contains(&Face::Top));
    }

    #[test]
    fn yaw_half_turn_swaps_front_for_back() {
        let faces = visible_faces(0.0, 180.0, 1.0);
        assert_eq!(faces.len(), 1);
        assert_eq!(faces[0].face, Face::Back);
    }

    #[test]
    fn opposite_faces_never_both_visible() {
        for (pitch, yaw) in [(15.0, 45.0), (-20.0, 123.0), (30.0, 300.0), (5.0, 89.9)] {
            let faces = visible_faces(pitch, yaw, 1.0);
            let has = |f: Face| faces.iter().any(|v| v.face == f);
            assert!(!(has(Face::Front) && has(Face::Back)), "at {pitch}/{yaw}");
            assert!(!(has(Face::Left) && has(Face::Right)), "at {pitch}/{yaw}");
            assert!(!(has(Face::Top) && has(Face::Bottom)), "at {pitch}/{yaw}");
        }
    }

    #[test]
    fn faces_come_back_sorted_far_to_near() {
        let faces = visible_faces(25.0, 60.0, 1.0);
        for pair in faces.windows(2) {
            assert!(pair[0].depth <= pair[1].depth);
        }
    }

    #[test]
    fn rotation_preserves_length() {
        let v = Vec3::new(1.0, 2.0, 3.0).rotated(33.0, 71.0);
        let len = (v.x * v.x + v.y * v.y + v.z * v.z).sqrt();
        assert!(close(len, 14.0_f32.sqrt()));
    }

    #[test]
    fn yaw_rotation_turns_front_normal_toward_x() {
        let n = Face::Front.normal().rotate_y(90.0);
        assert!(close(n.x, 1.0) && close(n.z, 0.0));
    }

    #[test]
    fn projection_is_centered_and_flips_y() {
        let (x, y) = project(Vec3::new(0.0, 0.0, 0.0), 20.0);
        assert!(close(x, 0.0) && close(y, 0.0));

        let (_, y) = project(Vec3::new(0.0, 2.0, 0.0), 20.0);
        assert!(y < 0.0);
    }

    #[test]
    fn nearer_points_project_larger() {
        let near = project(Vec3::new(2.0, 0.0, 4.0), 20.0).0;
        let far = project(Vec3::new(2.0, 0.0, -4.0), 20.0).0;
        assert!(near > far);
    }
}
