// src/image/geom.rs

//! Pixel coordinates and inclusive bounding boxes.

/// A pixel coordinate. Signed so that neighbor offsets can step off the canvas.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }

    /// Returns this point shifted by `(dx, dy)`.
    #[inline]
    pub fn offset(&self, dx: i64, dy: i64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Converts a row-major linear index into a point.
    #[inline]
    pub fn from_linear(index: usize, width: u32) -> Point {
        let w = width as usize;
        Point::new((index % w) as i64, (index / w) as i64)
    }

    /// Converts the point into a row-major linear index.
    ///
    /// The caller must ensure the point lies on the canvas.
    #[inline]
    pub fn to_linear(&self, width: u32) -> usize {
        self.y as usize * width as usize + self.x as usize
    }

    /// Checks whether the point lies inside a `width` x `height` canvas.
    #[inline]
    pub fn is_within(&self, width: u32, height: u32) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < width as i64 && self.y < height as i64
    }
}

/// Bounding box with both corners inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BBox {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl BBox {
    /// A box around a single pixel.
    pub fn around(p: Point) -> Self {
        BBox {
            top_left: p,
            bottom_right: p,
        }
    }

    /// Grows the box so that it covers `p`.
    pub fn include(&mut self, p: Point) {
        self.top_left.x = self.top_left.x.min(p.x);
        self.top_left.y = self.top_left.y.min(p.y);
        self.bottom_right.x = self.bottom_right.x.max(p.x);
        self.bottom_right.y = self.bottom_right.y.max(p.y);
    }

    /// Width in pixels (both edges counted).
    pub fn width(&self) -> u32 {
        (self.bottom_right.x - self.top_left.x + 1) as u32
    }

    /// Height in pixels (both edges counted).
    pub fn height(&self) -> u32 {
        (self.bottom_right.y - self.top_left.y + 1) as u32
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.top_left.x
            && p.x <= self.bottom_right.x
            && p.y >= self.top_left.y
            && p.y <= self.bottom_right.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_conversion() {
        let p = Point::from_linear(13, 5);
        assert_eq!(p, Point::new(3, 2));
        assert_eq!(p.to_linear(5), 13);
    }

    #[test]
    fn bounds_check() {
        assert!(Point::new(0, 0).is_within(3, 3));
        assert!(Point::new(2, 2).is_within(3, 3));
        assert!(!Point::new(3, 0).is_within(3, 3));
        assert!(!Point::new(0, -1).is_within(3, 3));
    }

    #[test]
    fn bbox_grows_inclusively() {
        let mut bb = BBox::around(Point::new(4, 4));
        assert_eq!((bb.width(), bb.height()), (1, 1));
        bb.include(Point::new(2, 6));
        assert_eq!(bb.top_left, Point::new(2, 4));
        assert_eq!(bb.bottom_right, Point::new(4, 6));
        assert_eq!((bb.width(), bb.height()), (3, 3));
        assert!(bb.contains(Point::new(3, 5)));
        assert!(!bb.contains(Point::new(5, 5)));
    }
}
