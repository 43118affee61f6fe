//! Integer screen geometry: points, rectangles and polygons.
//!
//! Coordinates are frame pixels with the origin at the top-left corner.
//! Rectangles are half-open: `x..x + width`, `y..y + height`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A pixel position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this point moved by `(dx, dy)`, saturating at the `i32`
    /// range.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Returns this point moved by `(dx, dy)`, or `None` when a coordinate
    /// leaves the `i32` range.
    pub const fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(self, other: Point) -> f64 {
        let dx = f64::from(other.x) - f64::from(self.x);
        let dy = f64::from(other.y) - f64::from(self.y);
        dx.hypot(dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An axis-aligned rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge, saturating at `i32::MAX`.
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge, saturating at `i32::MAX`.
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.y >= self.y && p.x < self.right() && p.y < self.bottom()
    }

    /// True if `other` lies entirely inside this rectangle.
    pub const fn contains_rect(&self, other: &Rect) -> bool {
        !other.is_empty()
            && other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Overlapping part of two rectangles, `None` if they do not overlap.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Rect::new(x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0)))
    }

    pub const fn center(&self) -> Point {
        Point::new(
            self.x.saturating_add(self.width / 2),
            self.y.saturating_add(self.height / 2),
        )
    }

    /// Iterates every point in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let Rect {
            x,
            y,
            width,
            height,
        } = *self;
        let (right, bottom) = (x.saturating_add(width.max(0)), y.saturating_add(height.max(0)));
        (y..bottom).flat_map(move |py| (x..right).map(move |px| Point::new(px, py)))
    }
}

/// A closed polygon given by its vertices in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// Smallest rectangle containing every vertex.
    ///
    /// The rectangle is inclusive of the right/bottom-most vertices.
    pub fn bounds(&self) -> Rect {
        let Some(first) = self.vertices.first() else {
            return Rect::default();
        };
        let (mut x0, mut y0, mut x1, mut y1) = (first.x, first.y, first.x, first.y);
        for p in &self.vertices[1..] {
            x0 = x0.min(p.x);
            y0 = y0.min(p.y);
            x1 = x1.max(p.x);
            y1 = y1.max(p.y);
        }
        Rect::new(
            x0,
            y0,
            x1.saturating_sub(x0).saturating_add(1),
            y1.saturating_sub(y0).saturating_add(1),
        )
    }

    /// Even-odd containment test.
    pub fn contains(&self, p: Point) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }
        let (px, py) = (f64::from(p.x), f64::from(p.y));
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let (xi, yi) = (f64::from(self.vertices[i].x), f64::from(self.vertices[i].y));
            let (xj, yj) = (f64::from(self.vertices[j].x), f64::from(self.vertices[j].y));
            if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}

impl From<Rect> for Polygon {
    fn from(rect: Rect) -> Self {
        Polygon::new(vec![
            Point::new(rect.x, rect.y),
            Point::new(rect.right(), rect.y),
            Point::new(rect.right(), rect.bottom()),
            Point::new(rect.x, rect.bottom()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = Rect::new(10, 10, 5, 5);
        assert!(rect.contains(Point::new(10, 10)));
        assert!(rect.contains(Point::new(14, 14)));
        assert!(!rect.contains(Point::new(15, 14)));
        assert!(!rect.contains(Point::new(9, 12)));
    }

    #[test]
    fn test_rect_intersect() {
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(-10, 90, 30, 30);
        assert_eq!(a.intersect(&b), Some(Rect::new(0, 90, 20, 10)));
        assert_eq!(a.intersect(&Rect::new(200, 200, 5, 5)), None);
    }

    #[test]
    fn test_rect_points_row_major() {
        let pts: Vec<Point> = Rect::new(1, 2, 2, 2).points().collect();
        assert_eq!(
            pts,
            vec![
                Point::new(1, 2),
                Point::new(2, 2),
                Point::new(1, 3),
                Point::new(2, 3)
            ]
        );
    }

    #[test]
    fn test_polygon_contains() {
        let triangle = Polygon::new(vec![Point::new(0, 0), Point::new(10, 0), Point::new(0, 10)]);
        assert!(triangle.contains(Point::new(2, 2)));
        assert!(!triangle.contains(Point::new(8, 8)));
        assert!(!triangle.contains(Point::new(-1, 2)));
    }

    #[test]
    fn test_polygon_bounds() {
        let poly = Polygon::new(vec![Point::new(3, 4), Point::new(-2, 9), Point::new(5, 1)]);
        assert_eq!(poly.bounds(), Rect::new(-2, 1, 8, 9));
    }

    #[test]
    fn test_huge_rects_do_not_overflow() {
        let frame = Rect::new(0, 0, 3, 3);
        let wide = Rect::new(1, 0, i32::MAX, 3);
        assert_eq!(wide.right(), i32::MAX);
        assert_eq!(frame.intersect(&wide), Some(Rect::new(1, 0, 2, 3)));
        assert_eq!(wide.intersect(&frame), Some(Rect::new(1, 0, 2, 3)));
        assert!(!frame.contains_rect(&wide));
        assert!(wide.contains(Point::new(i32::MAX - 1, 2)));

        let everything = Rect::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
        assert_eq!(everything.intersect(&frame), None);
        let far = Rect::new(i32::MAX - 1, i32::MAX - 1, i32::MAX, i32::MAX);
        assert_eq!(far.center(), Point::new(i32::MAX, i32::MAX));
        assert_eq!(far.points().count(), 1);
    }

    #[test]
    fn test_point_offsets_at_range_limits() {
        let edge = Point::new(i32::MAX, 0);
        assert_eq!(edge.checked_offset(1, 0), None);
        assert_eq!(edge.checked_offset(-1, 5), Some(Point::new(i32::MAX - 1, 5)));
        assert_eq!(edge.offset(1, 0), Point::new(i32::MAX, 0));
        assert_eq!(Point::new(i32::MIN, 0).distance_to(Point::new(i32::MAX, 0)), u32::MAX as f64);
    }

    #[test]
    fn test_degenerate_polygon_contains_nothing() {
        let line = Polygon::new(vec![Point::new(0, 0), Point::new(5, 5)]);
        assert!(!line.contains(Point::new(2, 2)));
    }
}
