//! Cube rasterizer
//!
//! Turns the core's rotated face geometry into cells: project each
//! visible face's corners, correct for the ~2:1 cell aspect, and fill
//! the projected quads far-to-near so nearer faces paint over farther
//! ones. Culling already happened in the core; a convex solid's
//! surviving faces barely overlap, but painter order keeps the edges
//! honest.

use folio_core::cube::{project, visible_faces, CubeTuning, VisibleFace};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use unicode_width::UnicodeWidthStr;

use crate::theme::{lerp_color, Palette};

/// Horizontal stretch applied to projected x so the cube looks square
/// in ~2:1 terminal cells.
const CELL_ASPECT: f32 = 2.0;

/// How much the far faces are dimmed toward the page background.
const DEPTH_DIM: f32 = 0.45;

/// Paint the cube centered in `area` at the given orientation.
pub fn render(
    buf: &mut Buffer,
    area: Rect,
    pitch: f32,
    yaw: f32,
    tuning: &CubeTuning,
    labels: &[String; 6],
    palette: &Palette,
) {
    if area.width < 8 || area.height < 5 {
        return;
    }

    let cx = f32::from(area.x) + f32::from(area.width) / 2.0;
    let cy = f32::from(area.y) + f32::from(area.height) / 2.0;

    for face in visible_faces(pitch, yaw, tuning.half) {
        paint_face(buf, area, &face, cx, cy, tuning, labels, palette);
    }
}

fn paint_face(
    buf: &mut Buffer,
    area: Rect,
    face: &VisibleFace,
    cx: f32,
    cy: f32,
    tuning: &CubeTuning,
    labels: &[String; 6],
    palette: &Palette,
) {
    let quad: Vec<(f32, f32)> = face
        .corners
        .iter()
        .map(|&corner| {
            let (px, py) = project(corner, tuning.distance);
            (cx + px * CELL_ASPECT, cy + py)
        })
        .collect();

    // Facing the viewer head-on, depth runs from -half to half; dim the
    // faces that sit deeper in the scene.
    let depth_t = ((face.depth / tuning.half) + 1.0) / 2.0;
    let base = palette.cube_faces[face.face.index()];
    let fill = lerp_color(lerp_color(palette.bg, base, 1.0 - DEPTH_DIM), base, depth_t);

    let min_x = quad.iter().map(|p| p.0).fold(f32::MAX, f32::min).floor() as i32;
    let max_x = quad.iter().map(|p| p.0).fold(f32::MIN, f32::max).ceil() as i32;
    let min_y = quad.iter().map(|p| p.1).fold(f32::MAX, f32::min).floor() as i32;
    let max_y = quad.iter().map(|p| p.1).fold(f32::MIN, f32::max).ceil() as i32;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            if x < i32::from(area.x)
                || x >= i32::from(area.x + area.width)
                || y < i32::from(area.y)
                || y >= i32::from(area.y + area.height)
            {
                continue;
            }
            // Sample the cell center
            if !point_in_quad(x as f32 + 0.5, y as f32 + 0.5, &quad) {
                continue;
            }
            if let Some(cell) = buf.cell_mut((x as u16, y as u16)) {
                cell.set_char(' ');
                cell.set_bg(fill);
            }
        }
    }

    // Label at the projected face center
    let label = &labels[face.face.index()];
    let label_w = label.width() as f32;
    let (lcx, lcy) = quad_center(&quad);
    let lx = (lcx - label_w / 2.0).round() as i32;
    let ly = lcy.round() as i32;
    if ly >= i32::from(area.y) && ly < i32::from(area.y + area.height) {
        for (i, ch) in label.chars().enumerate() {
            let x = lx + i as i32;
            if x < i32::from(area.x) || x >= i32::from(area.x + area.width) {
                continue;
            }
            // Only letter cells that landed on this face get inked
            if !point_in_quad(x as f32 + 0.5, lcy, &quad) {
                continue;
            }
            if let Some(cell) = buf.cell_mut((x as u16, ly as u16)) {
                cell.set_char(ch);
                cell.set_style(
                    Style::default()
                        .fg(Color::Rgb(255, 255, 255))
                        .bg(fill)
                        .add_modifier(Modifier::BOLD),
                );
            }
        }
    }
}

fn quad_center(quad: &[(f32, f32)]) -> (f32, f32) {
    let n = quad.len() as f32;
    let sx: f32 = quad.iter().map(|p| p.0).sum();
    let sy: f32 = quad.iter().map(|p| p.1).sum();
    (sx / n, sy / n)
}

/// Point-in-convex-quad via consistent cross-product signs. Works for
/// either winding; points on an edge count as inside.
fn point_in_quad(px: f32, py: f32, quad: &[(f32, f32)]) -> bool {
    let mut sign = 0.0_f32;
    for i in 0..quad.len() {
        let (x1, y1) = quad[i];
        let (x2, y2) = quad[(i + 1) % quad.len()];
        let cross = (x2 - x1) * (py - y1) - (y2 - y1) * (px - x1);
        if cross.abs() < 1e-6 {
            continue;
        }
        if sign == 0.0 {
            sign = cross.signum();
        } else if cross.signum() != sign {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::ThemeMode;

    fn labels() -> [String; 6] {
        [
            "3D".to_string(),
            "Web".to_string(),
            "Design".to_string(),
            "UX".to_string(),
            "UI".to_string(),
            "Creative".to_string(),
        ]
    }

    #[test]
    fn point_in_quad_square() {
        let quad = vec![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)];
        assert!(point_in_quad(2.0, 2.0, &quad));
        assert!(point_in_quad(0.0, 0.0, &quad));
        assert!(!point_in_quad(5.0, 2.0, &quad));
        assert!(!point_in_quad(-0.1, 2.0, &quad));
    }

    #[test]
    fn point_in_quad_either_winding() {
        let cw = vec![(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0)];
        assert!(point_in_quad(2.0, 2.0, &cw));
        assert!(!point_in_quad(9.0, 9.0, &cw));
    }

    #[test]
    fn render_fills_cells_within_the_viewport() {
        let area = Rect::new(0, 0, 30, 14);
        let mut buf = Buffer::empty(area);
        let palette = Palette::for_mode(ThemeMode::Dark);

        render(
            &mut buf,
            area,
            15.0,
            45.0,
            &CubeTuning::default(),
            &labels(),
            &palette,
        );

        let painted = buf
            .content
            .iter()
            .filter(|cell| cell.bg != Color::Reset)
            .count();
        assert!(painted > 20, "cube painted only {painted} cells");
    }

    #[test]
    fn render_in_tiny_area_is_a_noop() {
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        let palette = Palette::for_mode(ThemeMode::Light);

        render(
            &mut buf,
            area,
            0.0,
            0.0,
            &CubeTuning::default(),
            &labels(),
            &palette,
        );
        assert!(buf.content.iter().all(|cell| cell.symbol() == " "));
    }

    #[test]
    fn render_never_paints_outside_the_area() {
        let screen = Rect::new(0, 0, 40, 20);
        let viewport = Rect::new(10, 5, 20, 10);
        let mut buf = Buffer::empty(screen);
        let palette = Palette::for_mode(ThemeMode::Dark);

        render(
            &mut buf,
            viewport,
            25.0,
            60.0,
            &CubeTuning::default(),
            &labels(),
            &palette,
        );

        for y in 0..screen.height {
            for x in 0..screen.width {
                let inside = x >= viewport.x
                    && x < viewport.x + viewport.width
                    && y >= viewport.y
                    && y < viewport.y + viewport.height;
                if !inside {
                    let cell = buf.cell((x, y)).unwrap();
                    assert_eq!(cell.bg, Color::Reset, "painted outside at {x},{y}");
                }
            }
        }
    }
}
