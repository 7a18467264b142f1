//! Canvas transform state: zoom scale plus scroll offsets.
//!
//! Screen coordinates are relative to the viewport surface's top-left
//! corner. Chart coordinates are `(screen + scroll) / scale`.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Uniform zoom factor.
    pub scale: f32,
    /// Horizontal scroll offset in screen pixels.
    pub scroll_x: f32,
    /// Vertical scroll offset in screen pixels.
    pub scroll_y: f32,
    /// Visible surface width in screen pixels.
    pub width: f32,
    /// Visible surface height in screen pixels.
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scale: 1.0,
            scroll_x: 0.0,
            scroll_y: 0.0,
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn screen_to_chart(&self, p: Point) -> Point {
        Point::new(
            (p.x + self.scroll_x) / self.scale,
            (p.y + self.scroll_y) / self.scale,
        )
    }

    pub fn chart_to_screen(&self, p: Point) -> Point {
        Point::new(
            p.x * self.scale - self.scroll_x,
            p.y * self.scale - self.scroll_y,
        )
    }

    /// Convert a screen-space delta to chart space.
    pub fn delta_to_chart(&self, dx: f32, dy: f32) -> (f32, f32) {
        (dx / self.scale, dy / self.scale)
    }

    /// Inverse drag: content follows the hand.
    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        self.scroll_x -= dx;
        self.scroll_y -= dy;
    }

    pub fn scroll_by(&mut self, dx: f32, dy: f32) {
        self.scroll_x += dx;
        self.scroll_y += dy;
    }

    /// Change scale while keeping the chart point under `cursor` (screen
    /// space) fixed on screen. `new_scale` must already be clamped.
    pub fn zoom_around(&mut self, new_scale: f32, cursor: Point) {
        let ratio = new_scale / self.scale;
        self.scroll_x = (cursor.x + self.scroll_x) * ratio - cursor.x;
        self.scroll_y = (cursor.y + self.scroll_y) * ratio - cursor.y;
        self.scale = new_scale;
    }

    /// Chart-space point at the centre of the visible surface.
    pub fn visible_center(&self) -> Point {
        self.screen_to_chart(Point::new(self.width / 2.0, self.height / 2.0))
    }

    /// Zoom label value, e.g. `150` for a scale of 1.5.
    pub fn zoom_percent(&self) -> u32 {
        (self.scale * 100.0).round().max(0.0) as u32
    }

    pub fn reset(&mut self) {
        self.scale = 1.0;
        self.scroll_x = 0.0;
        self.scroll_y = 0.0;
    }
}
