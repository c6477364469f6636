//! Plain 2D value types shared by the engine.

use crate::constants::DEFAULT_METRIC;
use serde::{Deserialize, Serialize};

/// A 2D point or offset in pixels.
///
/// Used for screen positions, pan/base offsets and image-local pin coordinates;
/// the owning field documents which space the value lives in.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// The origin / zero offset.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Multiply both components by `factor`.
    #[inline]
    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

impl std::ops::Add for Point {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Point {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Neg for Point {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// Pixel dimensions of an image or a container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether `self` fits inside `other` on both axes.
    #[inline]
    pub fn fits_within(&self, other: &Size) -> bool {
        self.width <= other.width && self.height <= other.height
    }

    /// Half extents, i.e. the centre of a rectangle of this size at the origin.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(DEFAULT_METRIC, DEFAULT_METRIC)
    }
}

impl From<(f32, f32)> for Size {
    fn from((width, height): (f32, f32)) -> Self {
        Self::new(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_size_is_unit() {
        let size = Size::default();
        assert_eq!(size.width, 1.0);
        assert_eq!(size.height, 1.0);
    }

    #[test]
    fn test_fits_within() {
        let container = Size::new(500.0, 500.0);
        assert!(Size::new(300.0, 200.0).fits_within(&container));
        assert!(Size::new(500.0, 500.0).fits_within(&container));
        assert!(!Size::new(501.0, 10.0).fits_within(&container));
        assert!(!Size::new(10.0, 700.0).fits_within(&container));
    }

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(10.0, 20.0);
        let b = Point::new(4.0, -6.0);
        assert_eq!(a + b, Point::new(14.0, 14.0));
        assert_eq!(a - b, Point::new(6.0, 26.0));
        assert_eq!(-a, Point::new(-10.0, -20.0));
        assert_eq!(a.scale(0.5), Point::new(5.0, 10.0));
    }
}
