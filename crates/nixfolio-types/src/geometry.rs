//! Window geometry in screen pixels.

use serde::{Deserialize, Serialize};

/// Top-left corner of a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// This position moved by a pointer delta.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Width and height of a window or viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Component-wise maximum with `min`.
    pub fn at_least(self, min: Size) -> Self {
        Self {
            width: self.width.max(min.width),
            height: self.height.max(min.height),
        }
    }
}

/// A positioned rectangle: what a renderer needs to draw window chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Frame {
    pub position: Position,
    pub size: Size,
}

impl Frame {
    pub const fn new(position: Position, size: Size) -> Self {
        Self { position, size }
    }

    /// Whether the point lies inside this frame (right/bottom edges exclusive).
    pub fn contains(&self, x: i32, y: i32) -> bool {
        let right = i64::from(self.position.x) + i64::from(self.size.width);
        let bottom = i64::from(self.position.y) + i64::from(self.size.height);
        x >= self.position.x && y >= self.position.y && i64::from(x) < right && i64::from(y) < bottom
    }
}
