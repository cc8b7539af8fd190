//! Geometry kernel for hotspot hit-testing.
//!
//! All functions are pure. Coordinates are either in a dataset's authored
//! reference resolution or in live surface pixels; scaling converts between
//! the two.

use serde::{Deserialize, Serialize};

/// A 2D coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// Width and height of a surface or reference resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Per-axis factors that map `reference` coordinates onto `self`.
    pub fn scale_from(self, reference: Size) -> (f64, f64) {
        (self.width / reference.width, self.height / reference.height)
    }

    /// Region content of this size occupies inside `container` when scaled
    /// uniformly to fit and centred (CSS `object-fit: contain`).
    ///
    /// Content with no intrinsic size fills the container.
    pub fn contained_in(self, container: Size) -> Rect {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Rect::new(Point::new(0.0, 0.0), container.width, container.height);
        }
        let scale = (container.width / self.width).min(container.height / self.height);
        let width = self.width * scale;
        let height = self.height * scale;
        Rect::new(
            Point::new(
                (container.width - width) / 2.0,
                (container.height - height) / 2.0,
            ),
            width,
            height,
        )
    }
}

/// Axis-aligned rectangle with an optional rotation about its centre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Point,
    pub width: f64,
    pub height: f64,
    /// Radians, positive is clockwise on screen.
    #[serde(default)]
    pub rotation: f64,
}

impl Rect {
    /// Unrotated rectangle.
    pub const fn new(min: Point, width: f64, height: f64) -> Self {
        Self {
            min,
            width,
            height,
            rotation: 0.0,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.min.x + self.width / 2.0, self.min.y + self.height / 2.0)
    }

    /// Inclusive bounds test, ignoring rotation.
    pub fn contains_unrotated(&self, p: Point) -> bool {
        p.x >= self.min.x
            && p.x <= self.min.x + self.width
            && p.y >= self.min.y
            && p.y <= self.min.y + self.height
    }

    /// Bounds test in the rectangle's local frame.
    ///
    /// The point is rotated about the centre by `-rotation` first, so the
    /// tested region matches what is drawn.
    pub fn contains(&self, p: Point) -> bool {
        if self.rotation == 0.0 {
            return self.contains_unrotated(p);
        }
        let c = self.center();
        let (sin, cos) = (-self.rotation).sin_cos();
        let dx = p.x - c.x;
        let dy = p.y - c.y;
        let local = Point::new(c.x + dx * cos - dy * sin, c.y + dx * sin + dy * cos);
        self.contains_unrotated(local)
    }
}

/// Hotspot shape in a single coordinate space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Rect(Rect),
    Polygon { points: Vec<Point> },
}

impl Shape {
    pub fn rect(min_x: f64, min_y: f64, width: f64, height: f64) -> Self {
        Self::Rect(Rect {
            min: Point::new(min_x, min_y),
            width,
            height,
            rotation: 0.0,
        })
    }

    pub fn polygon(points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        Self::Polygon {
            points: points.into_iter().map(|(x, y)| Point::new(x, y)).collect(),
        }
    }

    /// Returns a copy with every coordinate multiplied through `scale_point`.
    #[must_use]
    pub fn scaled(&self, scale_x: f64, scale_y: f64) -> Self {
        match self {
            Self::Rect(rect) => Self::Rect(Rect {
                min: scale_point(rect.min, scale_x, scale_y),
                width: rect.width * scale_x,
                height: rect.height * scale_y,
                rotation: rect.rotation,
            }),
            Self::Polygon { points } => Self::Polygon {
                points: points
                    .iter()
                    .map(|&p| scale_point(p, scale_x, scale_y))
                    .collect(),
            },
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        is_point_in_shape(p, self)
    }
}

/// Linear scale, no rounding.
pub fn scale_point(p: Point, scale_x: f64, scale_y: f64) -> Point {
    Point::new(p.x * scale_x, p.y * scale_y)
}

pub fn is_point_in_shape(p: Point, shape: &Shape) -> bool {
    match shape {
        Shape::Rect(rect) => rect.contains(p),
        Shape::Polygon { points } => is_point_in_polygon(p, points),
    }
}

/// Ray-casting parity test. The polygon is implicitly closed.
///
/// An edge counts as crossed only when exactly one endpoint lies strictly
/// below the point's y, so shared vertices and horizontal edges are never
/// counted twice.
pub fn is_point_in_polygon(p: Point, polygon: &[Point]) -> bool {
    let mut inside = false;
    let Some(mut prev) = polygon.last().copied() else {
        return false;
    };
    for &curr in polygon {
        if (curr.y > p.y) != (prev.y > p.y) {
            let x_cross = (prev.x - curr.x) * (p.y - curr.y) / (prev.y - curr.y) + curr.x;
            if p.x < x_cross {
                inside = !inside;
            }
        }
        prev = curr;
    }
    inside
}

/// Index of the first shape containing `p`; earlier shapes win.
pub fn hit_test(shapes: &[Shape], p: Point) -> Option<usize> {
    shapes.iter().position(|shape| shape.contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_polygon(min_x: f64, min_y: f64, size: f64) -> Shape {
        Shape::polygon([
            (min_x, min_y),
            (min_x + size, min_y),
            (min_x + size, min_y + size),
            (min_x, min_y + size),
        ])
    }

    #[test]
    fn test_scale_point_is_exact() {
        let p = scale_point(Point::new(800.0, 569.5), 0.5, 2.0);
        assert_eq!(p, Point::new(400.0, 1139.0));
    }

    #[test]
    fn test_rect_matches_bounding_box() {
        let rect = Shape::rect(10.0, 20.0, 30.0, 40.0);
        for x in 0..60 {
            for y in 0..80 {
                let (x, y) = (f64::from(x), f64::from(y));
                let expected = (10.0..=40.0).contains(&x) && (20.0..=60.0).contains(&y);
                assert_eq!(rect.contains(Point::new(x, y)), expected, "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_rect_boundary_is_inside() {
        let rect = Shape::rect(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains(Point::new(0.0, 0.0)));
        assert!(rect.contains(Point::new(10.0, 10.0)));
        assert!(rect.contains(Point::new(10.0, 5.0)));
        assert!(!rect.contains(Point::new(10.001, 5.0)));
    }

    #[test]
    fn test_square_polygon_agrees_with_rect() {
        let rect = Shape::rect(100.0, 100.0, 50.0, 50.0);
        let poly = square_polygon(100.0, 100.0, 50.0);
        for x in (80..=170).step_by(3) {
            for y in (80..=170).step_by(3) {
                let (x, y) = (f64::from(x) + 0.5, f64::from(y) + 0.5);
                let p = Point::new(x, y);
                assert_eq!(rect.contains(p), poly.contains(p), "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_polygon_vertex_not_double_counted() {
        // Ray from (0, 5) passes exactly through the vertex (10, 5).
        let diamond = Shape::polygon([(10.0, 0.0), (15.0, 5.0), (10.0, 10.0), (5.0, 5.0)]);
        assert!(diamond.contains(Point::new(10.0, 5.0)));
        assert!(!diamond.contains(Point::new(0.0, 5.0)));
        assert!(!diamond.contains(Point::new(20.0, 5.0)));
    }

    #[test]
    fn test_concave_polygon() {
        // U shape: notch between x 4..6 above y 4.
        let u = Shape::polygon([
            (0.0, 0.0),
            (10.0, 0.0),
            (10.0, 10.0),
            (6.0, 10.0),
            (6.0, 4.0),
            (4.0, 4.0),
            (4.0, 10.0),
            (0.0, 10.0),
        ]);
        assert!(u.contains(Point::new(2.0, 8.0)));
        assert!(u.contains(Point::new(5.0, 2.0)));
        assert!(!u.contains(Point::new(5.0, 8.0)));
    }

    #[test]
    fn test_empty_polygon_contains_nothing() {
        assert!(!is_point_in_polygon(Point::new(0.0, 0.0), &[]));
    }

    #[test]
    fn test_rotated_rect_uses_local_space() {
        let rect = Rect {
            min: Point::new(0.0, 0.0),
            width: 100.0,
            height: 10.0,
            rotation: std::f64::consts::FRAC_PI_2,
        };
        // Rotated a quarter turn about (50, 5), the rect spans x 45..55, y -45..55.
        assert!(rect.contains(Point::new(50.0, -40.0)));
        assert!(!rect.contains(Point::new(90.0, 5.0)));
        assert!(rect.contains_unrotated(Point::new(90.0, 5.0)));
    }

    #[test]
    fn test_contained_in_letterboxes() {
        let frame = Size::new(1600.0, 1139.0);

        // Portrait box: full width, centred vertically.
        let content = frame.contained_in(Size::new(800.0, 800.0));
        assert_eq!(content.min, Point::new(0.0, 115.25));
        assert_eq!((content.width, content.height), (800.0, 569.5));

        // Wide box: full height, centred horizontally.
        let content = frame.contained_in(Size::new(2000.0, 1139.0));
        assert_eq!(content.min, Point::new(200.0, 0.0));
        assert_eq!((content.width, content.height), (1600.0, 1139.0));

        // Matching aspect ratio fills the box.
        let content = frame.contained_in(Size::new(800.0, 569.5));
        assert_eq!(content, Rect::new(Point::new(0.0, 0.0), 800.0, 569.5));
    }

    #[test]
    fn test_contained_in_without_intrinsic_size() {
        let container = Size::new(640.0, 480.0);
        let content = Size::new(0.0, 0.0).contained_in(container);
        assert_eq!(content, Rect::new(Point::new(0.0, 0.0), 640.0, 480.0));
    }

    #[test]
    fn test_scaled_shapes() {
        let rect = Shape::rect(10.0, 10.0, 20.0, 20.0).scaled(0.5, 2.0);
        assert_eq!(rect, Shape::rect(5.0, 20.0, 10.0, 40.0));

        let poly = Shape::polygon([(2.0, 2.0), (4.0, 2.0), (4.0, 4.0)]).scaled(3.0, 1.0);
        assert_eq!(poly, Shape::polygon([(6.0, 2.0), (12.0, 2.0), (12.0, 4.0)]));
    }

    #[test]
    fn test_hit_test_first_match_wins() {
        let shapes = vec![Shape::rect(0.0, 0.0, 10.0, 10.0), Shape::rect(5.0, 5.0, 10.0, 10.0)];
        assert_eq!(hit_test(&shapes, Point::new(7.0, 7.0)), Some(0));
        assert_eq!(hit_test(&shapes, Point::new(12.0, 12.0)), Some(1));
        assert_eq!(hit_test(&shapes, Point::new(20.0, 20.0)), None);
    }

    #[test]
    fn test_shape_json() {
        let json = r#"[
            {"type": "rect", "min": [515, 239], "width": 565, "height": 47},
            {"type": "polygon", "points": [[0, 0], [1, 0], [1, 1]]}
        ]"#;
        let shapes: Vec<Shape> = serde_json::from_str(json).unwrap();
        assert_eq!(shapes[0], Shape::rect(515.0, 239.0, 565.0, 47.0));
        assert!(matches!(&shapes[1], Shape::Polygon { points } if points.len() == 3));
    }
}
