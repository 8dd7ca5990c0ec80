//! The shape capability trait.

use std::fmt::Debug;

use crate::Point;

/// A closed 2D shape with a center point.
///
/// This trait is the seam everything downstream of the factory works
/// through: callers hold `Box<dyn Shape>` and only ever ask for the type
/// name, the area, and the center. Both queries are pure and never mutate
/// the shape.
///
/// # Implementors
///
/// - [`Circle`](crate::Circle)
/// - [`Rectangle`](crate::Rectangle)
/// - [`Triangle`](crate::Triangle)
///
/// # Example
///
/// ```
/// use shape_types::{Circle, Shape};
///
/// let circle = Circle::new(10, 0, 0);
/// assert_eq!(circle.type_name(), "Circle");
/// assert!((circle.area() - 314.15).abs() < 1e-9);
/// ```
pub trait Shape: Debug {
    /// Returns a stable name identifying the shape variant.
    ///
    /// Names are unique per implementor and never empty.
    fn type_name(&self) -> &'static str;

    /// Computes the area of the shape.
    ///
    /// The area is computed purely from the shape's own dimensions, so
    /// repeated calls return identical values. Dimensions are not
    /// validated; zero or negative dimensions produce a non-meaningful
    /// area.
    fn area(&self) -> f64;

    /// Returns the center point of the shape.
    fn center(&self) -> Point;

    /// Moves the shape to a new center point.
    fn set_center(&mut self, center: Point);
}
