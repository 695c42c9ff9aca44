//! Window-space geometry.
//!
//! All coordinates are window pixels with the origin at the top-left corner
//! and `y` growing downward. Rectangles are anchored at their top-left corner.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Inclusive on the top/left edge, exclusive on the bottom/right edge, so
    /// two touching rows never both claim the same point.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Grows the rectangle about its centre so that the result is `scale`
    /// times the original size.
    pub fn expanded_by_scale(&self, scale: f32) -> Self {
        let pad_w = self.width * (scale - 1.0) / 2.0;
        let pad_h = self.height * (scale - 1.0) / 2.0;
        Self::new(
            self.x - pad_w,
            self.y - pad_h,
            self.width * scale,
            self.height * scale,
        )
    }

    /// Clamps negative extents to zero.
    pub fn non_negative(self) -> Self {
        Self::new(self.x, self.y, self.width.max(0.0), self.height.max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges() {
        let rect = Rect::new(0.0, 30.0, 40.0, 20.0);
        assert!(rect.contains(Point::new(0.0, 30.0)));
        assert!(rect.contains(Point::new(39.9, 49.9)));
        assert!(!rect.contains(Point::new(40.0, 35.0)));
        assert!(!rect.contains(Point::new(10.0, 50.0)));
    }

    #[test]
    fn test_expanded_by_scale_keeps_center() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        let grown = rect.expanded_by_scale(1.2);
        assert_eq!(grown.center(), rect.center());
        assert!((grown.width - 120.0).abs() < 1e-4);
        assert!((grown.height - 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_zero_area_rect_expands_to_zero_area() {
        let rect = Rect::new(5.0, 5.0, 0.0, 0.0);
        let grown = rect.expanded_by_scale(1.5);
        assert_eq!(grown, Rect::new(5.0, 5.0, 0.0, 0.0));
    }

    #[test]
    fn test_non_negative() {
        let rect = Rect::new(1.0, 2.0, -3.0, 4.0).non_negative();
        assert_eq!(rect.width, 0.0);
        assert_eq!(rect.height, 4.0);
    }
}
