//! Viewport transforms: wheel zoom to cursor, zoom buttons, scrolling.

use crate::editor::Editor;
use crate::host::Host;
use crate::input::WheelEvent;

impl<H: Host> Editor<H> {
    /// One wheel notch: zoom by a fixed fraction, keeping the chart point
    /// under the cursor in place. Always handled.
    pub fn wheel(&mut self, ev: &WheelEvent) -> bool {
        let direction = if ev.delta_y > 0.0 {
            1.0
        } else if ev.delta_y < 0.0 {
            -1.0
        } else {
            0.0
        };
        let old = self.viewport.scale;
        let new = self
            .config
            .clamp_scale(old * (1.0 - direction * self.config.wheel_zoom_intensity));
        if new != old {
            self.viewport.zoom_around(new, ev.position());
            log::trace!("wheel zoom {old} -> {new}");
            self.notify_viewport();
        }
        true
    }

    pub fn zoom_in(&mut self) -> f32 {
        self.set_scale(self.viewport.scale + self.config.zoom_step)
    }

    pub fn zoom_out(&mut self) -> f32 {
        self.set_scale(self.viewport.scale - self.config.zoom_step)
    }

    /// Scale 1, scroll at the origin.
    pub fn reset_view(&mut self) {
        self.viewport.reset();
        self.notify_viewport();
    }

    /// Set the scale (clamped) without moving the scroll offsets.
    pub fn set_scale(&mut self, scale: f32) -> f32 {
        let scale = self.config.clamp_scale(scale);
        if scale != self.viewport.scale {
            self.viewport.scale = scale;
            log::debug!("zoom {}%", self.viewport.zoom_percent());
            self.notify_viewport();
        }
        scale
    }

    /// Scroll by a screen-pixel offset.
    pub fn scroll_by(&mut self, dx: f32, dy: f32) {
        self.viewport.scroll_by(dx, dy);
        self.notify_viewport();
    }
}
