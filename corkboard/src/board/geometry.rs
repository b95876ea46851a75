//! Connection geometry
//!
//! Connections attach to note centers and are drawn as quadratic Bezier
//! curves whose control point sags below the midpoint in proportion to the
//! horizontal span:
//!
//! ```text
//! A = (ax, ay), B = (bx, by)
//! C = ((ax + bx) / 2, (ay + by) / 2 + |bx - ax| * 0.1)
//! path = "M ax ay Q cx cy bx by"
//! ```

use crate::config::{CONNECTION_SAG_FACTOR, NOTE_HEIGHT, NOTE_WIDTH};
use crate::database::Note;
use serde::{Deserialize, Serialize};

/// A point in board or client coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned bounding rectangle in client coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }
}

/// Connection anchor of a note: the center of its card
pub fn anchor(note: &Note) -> Point {
    Point::new(note.x + NOTE_WIDTH / 2.0, note.y + NOTE_HEIGHT / 2.0)
}

/// Quadratic Bezier between two anchors
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Curve {
    pub from: Point,
    pub control: Point,
    pub to: Point,
}

impl Curve {
    pub fn between(from: Point, to: Point) -> Self {
        let control = Point::new(
            (from.x + to.x) / 2.0,
            (from.y + to.y) / 2.0 + (to.x - from.x).abs() * CONNECTION_SAG_FACTOR,
        );
        Self { from, control, to }
    }

    /// SVG path data for the curve
    pub fn path_data(&self) -> String {
        format!(
            "M {} {} Q {} {} {} {}",
            self.from.x, self.from.y, self.control.x, self.control.y, self.to.x, self.to.y
        )
    }

    /// Point on the curve at parameter `t` in [0, 1]
    pub fn point_at(&self, t: f64) -> Point {
        let t = t.clamp(0.0, 1.0);
        let u = 1.0 - t;
        Point::new(
            u * u * self.from.x + 2.0 * u * t * self.control.x + t * t * self.to.x,
            u * u * self.from.y + 2.0 * u * t * self.control.y + t * t * self.to.y,
        )
    }
}

/// Straight connector between two anchors, described as a rotated bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub from: Point,
    pub length: f64,
    /// Rotation in degrees, clockwise from the positive x axis
    pub angle: f64,
}

impl Segment {
    pub fn between(from: Point, to: Point) -> Self {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        Self {
            from,
            length: dx.hypot(dy),
            angle: dy.atan2(dx).to_degrees(),
        }
    }
}
