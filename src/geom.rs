//! Geometric primitives in screen space.
//!
//! All coordinates are logical pixels. Chart-local coordinates have their
//! origin at the top-left corner of the chart surface; plot-local coordinates
//! are relative to the plot area inside the paddings.

/// A point in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    /// X value in screen pixels.
    pub x: f64,
    /// Y value in screen pixels.
    pub y: f64,
}

impl ScreenPoint {
    /// Create a new screen point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate the point by the given offsets.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Check whether both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A rectangle in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    /// Top-left corner.
    pub min: ScreenPoint,
    /// Bottom-right corner.
    pub max: ScreenPoint,
}

impl ScreenRect {
    /// Create a new screen rectangle from corners.
    pub fn new(min: ScreenPoint, max: ScreenPoint) -> Self {
        Self { min, max }
    }

    /// Create a rectangle from its origin and size.
    pub fn from_origin_size(origin: ScreenPoint, width: f64, height: f64) -> Self {
        Self::new(origin, origin.offset(width, height))
    }

    /// Rectangle width in pixels.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Rectangle height in pixels.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Check whether the rectangle has positive area.
    pub fn is_valid(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }

    /// Check whether the point lies inside the rectangle (edges included).
    pub fn contains(&self, point: ScreenPoint) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Convert a point into coordinates relative to the rectangle origin.
    pub fn to_local(&self, point: ScreenPoint) -> ScreenPoint {
        point.offset(-self.min.x, -self.min.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_includes_edges() {
        let rect = ScreenRect::from_origin_size(ScreenPoint::new(10.0, 5.0), 100.0, 50.0);
        assert!(rect.contains(ScreenPoint::new(10.0, 5.0)));
        assert!(rect.contains(ScreenPoint::new(110.0, 55.0)));
        assert!(!rect.contains(ScreenPoint::new(9.9, 20.0)));
        assert_eq!(rect.to_local(ScreenPoint::new(20.0, 15.0)), ScreenPoint::new(10.0, 10.0));
    }

    #[test]
    fn zero_area_is_invalid() {
        let rect = ScreenRect::from_origin_size(ScreenPoint::new(0.0, 0.0), 0.0, 10.0);
        assert!(!rect.is_valid());
    }
}
