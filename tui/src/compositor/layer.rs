//! A single compositable layer

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use super::LayerId;

/// One layer: its own buffer, screen position, z-order and opacity.
pub struct Layer {
    /// Unique identifier
    pub id: LayerId,
    /// Z-order (higher = in front)
    pub z_index: i32,
    /// Position and size on screen
    pub bounds: Rect,
    /// Whether the layer is composited at all
    pub visible: bool,
    /// 0.0 = fully faded into the page background, 1.0 = solid.
    /// The content layer animates this during the post-intro reveal.
    pub opacity: f32,
    /// The layer's render buffer (origin coordinates)
    pub buffer: Buffer,
}

impl Layer {
    pub fn new(id: LayerId, bounds: Rect, z_index: i32) -> Self {
        // The buffer lives at the origin; bounds carry the screen offset
        let buffer_area = Rect::new(0, 0, bounds.width, bounds.height);
        Self {
            id,
            z_index,
            bounds,
            visible: true,
            opacity: 1.0,
            buffer: Buffer::empty(buffer_area),
        }
    }

    /// Whether a screen point falls inside this layer.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.bounds.x
            && x < self.bounds.x + self.bounds.width
            && y >= self.bounds.y
            && y < self.bounds.y + self.bounds.height
    }
}
