//! Coordinate space markers.
//!
//! Uninhabited types used only as type parameters, so a box measured in
//! image fractions can never be drawn as if it were measured in pixels.

use std::fmt;

/// Absolute pixel positions, origin at the top-left corner of the image.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pixel {}

/// Positions expressed as a fraction of image width or height.
///
/// Values are nominally in `[0, 1]` but nothing enforces that; a box centered
/// at `1.2` is simply drawn off the right edge.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum Normalized {}

impl fmt::Debug for Pixel {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}

impl fmt::Debug for Normalized {
    fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {}
    }
}
