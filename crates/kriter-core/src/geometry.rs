//! Chart-space geometry: points, rectangles, and connection anchor sides.
//!
//! Everything here is in untransformed chart units. Conversion to and from
//! screen space lives on [`Viewport`](crate::viewport::Viewport).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A point in chart space (or screen space, depending on the caller).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned rectangle with a top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Normalize a drag rectangle from two corners. Drag direction doesn't matter.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// AABB overlap. Edges are inclusive: rectangles that merely touch intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.right() < other.x
            || self.x > other.right()
            || self.bottom() < other.y
            || self.y > other.bottom())
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// One of the four cardinal attachment points on a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorSide {
    Top,
    Bottom,
    Left,
    Right,
}

impl AnchorSide {
    pub const ALL: [AnchorSide; 4] = [
        AnchorSide::Top,
        AnchorSide::Bottom,
        AnchorSide::Left,
        AnchorSide::Right,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnchorSide::Top => "top",
            AnchorSide::Bottom => "bottom",
            AnchorSide::Left => "left",
            AnchorSide::Right => "right",
        }
    }

    /// Anchor coordinate on the given bounds.
    pub fn point_on(&self, bounds: &Rect) -> Point {
        let Rect {
            x,
            y,
            width: w,
            height: h,
        } = *bounds;
        match self {
            AnchorSide::Top => Point::new(x + w / 2.0, y),
            AnchorSide::Bottom => Point::new(x + w / 2.0, y + h),
            AnchorSide::Left => Point::new(x, y + h / 2.0),
            AnchorSide::Right => Point::new(x + w, y + h / 2.0),
        }
    }
}

impl fmt::Display for AnchorSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {what}: '{value}'")]
pub struct ParseKindError {
    pub what: &'static str,
    pub value: String,
}

impl FromStr for AnchorSide {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(AnchorSide::Top),
            "bottom" => Ok(AnchorSide::Bottom),
            "left" => Ok(AnchorSide::Left),
            "right" => Ok(AnchorSide::Right),
            _ => Err(ParseKindError {
                what: "anchor side",
                value: s.to_string(),
            }),
        }
    }
}
