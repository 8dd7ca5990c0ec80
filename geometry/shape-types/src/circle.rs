//! Circle shape.

use crate::{Point, Shape};

/// Four-digit approximation of π used for disk areas.
///
/// Kept coarse so areas are stable, easily checked values rather than
/// machine-precision π multiples.
const PI_APPROX: f64 = 3.1415;

/// A circle on the 2D plane, described by a center and an integer radius.
///
/// # Example
///
/// ```
/// use shape_types::{Circle, Point, Shape};
///
/// let circle = Circle::new(2, 4, 5);
/// assert_eq!(circle.radius(), 2);
/// assert_eq!(circle.center(), Point::new(4, 5));
/// assert!((circle.area() - 12.566).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Circle {
    /// Center of the circle.
    center: Point,
    /// Radius of the circle.
    radius: i32,
}

impl Circle {
    /// Creates a circle from a radius and the center coordinates.
    #[must_use]
    pub const fn new(radius: i32, x: i32, y: i32) -> Self {
        Self::with_center(radius, Point::new(x, y))
    }

    /// Creates a circle from a radius and a center point.
    #[must_use]
    pub const fn with_center(radius: i32, center: Point) -> Self {
        Self { center, radius }
    }

    /// Returns the radius.
    #[must_use]
    pub const fn radius(self) -> i32 {
        self.radius
    }
}

impl Shape for Circle {
    fn type_name(&self) -> &'static str {
        "Circle"
    }

    fn area(&self) -> f64 {
        PI_APPROX * f64::from(self.radius) * f64::from(self.radius)
    }

    fn center(&self) -> Point {
        self.center
    }

    fn set_center(&mut self, center: Point) {
        self.center = center;
    }
}
