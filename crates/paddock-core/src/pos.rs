//! Grid cell positions.

use std::fmt;

/// A cell coordinate on the simulation grid.
///
/// Positions are plain `(x, y)` pairs; torus wrapping is the grid's
/// responsibility, so a `Pos` by itself carries no bounds guarantee.
/// Negative components are meaningful as *unwrapped* neighbor offsets
/// and resolve to in-bounds cells once wrapped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    /// Column, wraps modulo grid width.
    pub x: i32,
    /// Row, wraps modulo grid height.
    pub y: i32,
}

impl Pos {
    /// Construct a position from its components.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise offset, without wrapping.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Pos {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}
