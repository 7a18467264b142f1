//! Input abstraction layer.
//!
//! Pointer, wheel and keyboard events as plain values, decoupled from any
//! windowing toolkit. Hosts translate their native events into these and
//! resolve the [`Target`] (usually via [`kriter_render::hit_test`] plus their
//! own knowledge of action buttons and interactive sub-elements).

use kriter_core::Point;

pub use kriter_render::hit::{NodePart, Target};

/// Modifier keys held during an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ..Modifiers::NONE
    };

    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        ..Modifiers::NONE
    };

    /// Selection-extending modifier.
    pub fn extend(&self) -> bool {
        self.shift
    }

    /// Platform command key: ⌘ on macOS, Ctrl elsewhere.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Which button pressed the pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PointerButton {
    /// Left mouse button, touch contact, pen tip.
    #[default]
    Primary,
    /// Middle mouse button.
    Auxiliary,
    /// Right mouse button.
    Secondary,
}

impl PointerButton {
    /// Map a DOM-style button index (`0` left, `1` middle, `2` right).
    pub fn from_index(index: i16) -> Self {
        match index {
            1 => PointerButton::Auxiliary,
            2 => PointerButton::Secondary,
            _ => PointerButton::Primary,
        }
    }
}

/// A pointer down/move/up/cancel event in viewport screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pointer_id: u32,
    pub x: f32,
    pub y: f32,
    pub button: PointerButton,
    pub modifiers: Modifiers,
    pub target: Target,
}

impl PointerEvent {
    pub fn new(pointer_id: u32, x: f32, y: f32) -> Self {
        Self {
            pointer_id,
            x,
            y,
            button: PointerButton::Primary,
            modifiers: Modifiers::NONE,
            target: Target::Canvas,
        }
    }

    pub fn on(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A wheel notch (or trackpad scroll) over the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    pub x: f32,
    pub y: f32,
    /// Positive scrolls down (zooms out), negative scrolls up (zooms in).
    pub delta_y: f32,
}

impl WheelEvent {
    pub fn new(x: f32, y: f32, delta_y: f32) -> Self {
        Self { x, y, delta_y }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A key press. `key` follows `KeyboardEvent.key` naming (`"a"`, `"ArrowUp"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: String,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
        }
    }

    pub fn plain(key: impl Into<String>) -> Self {
        Self::new(key, Modifiers::NONE)
    }
}
