//! Layered compositor
//!
//! Z-ordered layers, each with its own buffer, composited back-to-front
//! into one output buffer. The page uses four: backdrop, content,
//! status and the splash overlay.
//!
//! Cells whose symbol is a space with no background of their own are
//! transparent, so the backdrop shows through the gaps in the content.
//! A layer with opacity below 1.0 has its colors blended toward the
//! page background while it is blitted; that single mechanism is the
//! whole content fade-in after the intro.

mod layer;

use std::collections::HashMap;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

pub use layer::Layer;

use crate::theme::lerp_color;

/// Unique identifier for a layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayerId(u32);

/// The compositor owns all layers and produces the final buffer.
pub struct Compositor {
    layers: HashMap<LayerId, Layer>,
    /// Layer ids sorted by z-index, back to front
    render_order: Vec<LayerId>,
    next_id: u32,
    output: Buffer,
    area: Rect,
}

impl Compositor {
    pub fn new(area: Rect) -> Self {
        Self {
            layers: HashMap::new(),
            render_order: Vec::new(),
            next_id: 0,
            output: Buffer::empty(area),
            area,
        }
    }

    /// Create a new layer and return its id.
    pub fn create_layer(&mut self, bounds: Rect, z_index: i32) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;

        self.layers.insert(id, Layer::new(id, bounds, z_index));
        self.update_render_order();
        id
    }

    /// Mutable access to a layer's buffer for painting.
    pub fn layer_buffer_mut(&mut self, id: LayerId) -> Option<&mut Buffer> {
        self.layers.get_mut(&id).map(|l| &mut l.buffer)
    }

    pub fn set_visible(&mut self, id: LayerId, visible: bool) {
        if let Some(layer) = self.layers.get_mut(&id) {
            layer.visible = visible;
        }
    }

    /// Set a layer's blend toward the page background (clamped 0..=1).
    pub fn set_opacity(&mut self, id: LayerId, opacity: f32) {
        if let Some(layer) = self.layers.get_mut(&id) {
            layer.opacity = opacity.clamp(0.0, 1.0);
        }
    }

    pub fn move_layer(&mut self, id: LayerId, x: u16, y: u16) {
        if let Some(layer) = self.layers.get_mut(&id) {
            layer.bounds.x = x;
            layer.bounds.y = y;
        }
    }

    pub fn resize_layer(&mut self, id: LayerId, width: u16, height: u16) {
        if let Some(layer) = self.layers.get_mut(&id) {
            layer.bounds.width = width;
            layer.bounds.height = height;
            layer.buffer = Buffer::empty(Rect::new(0, 0, width, height));
        }
    }

    /// Resize the whole compositor (terminal resize).
    pub fn resize(&mut self, area: Rect) {
        self.area = area;
        self.output = Buffer::empty(area);
    }

    /// Composite all visible layers. `page_bg` is the color faded
    /// layers blend toward.
    pub fn composite(&mut self, page_bg: Color) -> &Buffer {
        self.output.reset();

        for &id in &self.render_order.clone() {
            if let Some(layer) = self.layers.get(&id) {
                if layer.visible && layer.opacity > 0.0 {
                    Self::blit_layer(&mut self.output, &self.area, layer, page_bg);
                }
            }
        }

        &self.output
    }

    fn blit_layer(output: &mut Buffer, area: &Rect, layer: &Layer, page_bg: Color) {
        let lb = &layer.bounds;
        let faded = layer.opacity < 1.0;

        for ly in 0..lb.height.min(layer.buffer.area.height) {
            for lx in 0..lb.width.min(layer.buffer.area.width) {
                let dst_x = lb.x + lx;
                let dst_y = lb.y + ly;
                if dst_x >= area.width || dst_y >= area.height {
                    continue;
                }

                let Some(src_cell) = layer.buffer.cell((lx, ly)) else {
                    continue;
                };

                // A bare space with no background is a hole
                if src_cell.symbol() == " " && src_cell.bg == Color::Reset {
                    continue;
                }

                if let Some(dst_cell) = output.cell_mut((dst_x, dst_y)) {
                    *dst_cell = src_cell.clone();
                    if faded {
                        dst_cell.set_fg(lerp_color(page_bg, src_cell.fg, layer.opacity));
                        if src_cell.bg != Color::Reset {
                            dst_cell.set_bg(lerp_color(page_bg, src_cell.bg, layer.opacity));
                        }
                    }
                }
            }
        }
    }

    /// Topmost visible layer under a screen point, for routing pointer
    /// events (a drag only reaches the cube when no overlay covers it).
    pub fn layer_at(&self, x: u16, y: u16) -> Option<LayerId> {
        self.render_order
            .iter()
            .rev()
            .find(|&&id| {
                self.layers
                    .get(&id)
                    .is_some_and(|l| l.visible && l.opacity > 0.0 && l.contains(x, y))
            })
            .copied()
    }

    fn update_render_order(&mut self) {
        self.render_order = self.layers.keys().copied().collect();
        self.render_order
            .sort_by_key(|id| self.layers.get(id).map(|l| l.z_index).unwrap_or(0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Style;

    fn area() -> Rect {
        Rect::new(0, 0, 20, 10)
    }

    #[test]
    fn higher_z_wins() {
        let mut comp = Compositor::new(area());
        let back = comp.create_layer(area(), 0);
        let front = comp.create_layer(area(), 10);

        comp.layer_buffer_mut(back)
            .unwrap()
            .set_string(0, 0, "b", Style::default());
        comp.layer_buffer_mut(front)
            .unwrap()
            .set_string(0, 0, "f", Style::default());

        let out = comp.composite(Color::Black);
        assert_eq!(out.cell((0, 0)).unwrap().symbol(), "f");
    }

    #[test]
    fn bare_spaces_are_transparent() {
        let mut comp = Compositor::new(area());
        let back = comp.create_layer(area(), 0);
        let front = comp.create_layer(area(), 10);

        comp.layer_buffer_mut(back)
            .unwrap()
            .set_string(0, 0, "under", Style::default());
        // Front stays empty: everything below shows through
        let _ = front;

        let out = comp.composite(Color::Black);
        assert_eq!(out.cell((0, 0)).unwrap().symbol(), "u");
    }

    #[test]
    fn spaces_with_background_occlude() {
        let mut comp = Compositor::new(area());
        let back = comp.create_layer(area(), 0);
        let front = comp.create_layer(area(), 10);

        comp.layer_buffer_mut(back)
            .unwrap()
            .set_string(0, 0, "under", Style::default());
        comp.layer_buffer_mut(front)
            .unwrap()
            .set_string(0, 0, " ", Style::default().bg(Color::Rgb(1, 1, 1)));

        let out = comp.composite(Color::Black);
        assert_eq!(out.cell((0, 0)).unwrap().symbol(), " ");
    }

    #[test]
    fn hidden_layers_are_skipped() {
        let mut comp = Compositor::new(area());
        let layer = comp.create_layer(area(), 0);
        comp.layer_buffer_mut(layer)
            .unwrap()
            .set_string(0, 0, "x", Style::default());
        comp.set_visible(layer, false);

        let out = comp.composite(Color::Black);
        assert_eq!(out.cell((0, 0)).unwrap().symbol(), " ");
    }

    #[test]
    fn opacity_blends_toward_page_background() {
        let mut comp = Compositor::new(area());
        let layer = comp.create_layer(area(), 0);
        comp.layer_buffer_mut(layer).unwrap().set_string(
            0,
            0,
            "x",
            Style::default().fg(Color::Rgb(200, 200, 200)),
        );
        comp.set_opacity(layer, 0.5);

        let out = comp.composite(Color::Rgb(0, 0, 0));
        assert_eq!(out.cell((0, 0)).unwrap().fg, Color::Rgb(100, 100, 100));
    }

    #[test]
    fn zero_opacity_is_invisible() {
        let mut comp = Compositor::new(area());
        let layer = comp.create_layer(area(), 0);
        comp.layer_buffer_mut(layer)
            .unwrap()
            .set_string(0, 0, "x", Style::default());
        comp.set_opacity(layer, 0.0);

        let out = comp.composite(Color::Black);
        assert_eq!(out.cell((0, 0)).unwrap().symbol(), " ");
    }

    #[test]
    fn layer_at_respects_z_and_visibility() {
        let mut comp = Compositor::new(area());
        let back = comp.create_layer(area(), 0);
        let front = comp.create_layer(Rect::new(5, 5, 5, 2), 10);

        assert_eq!(comp.layer_at(6, 6), Some(front));
        assert_eq!(comp.layer_at(0, 0), Some(back));

        comp.set_visible(front, false);
        assert_eq!(comp.layer_at(6, 6), Some(back));
    }

    #[test]
    fn moved_layer_blits_at_new_position() {
        let mut comp = Compositor::new(area());
        let layer = comp.create_layer(Rect::new(0, 0, 5, 2), 0);
        comp.layer_buffer_mut(layer)
            .unwrap()
            .set_string(0, 0, "m", Style::default());

        comp.move_layer(layer, 3, 1);
        let out = comp.composite(Color::Black);
        assert_eq!(out.cell((3, 1)).unwrap().symbol(), "m");
        assert_eq!(out.cell((0, 0)).unwrap().symbol(), " ");
    }
}
