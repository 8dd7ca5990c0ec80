//! Shape primitives for the shape factory workspace.
//!
//! This crate provides the value types and the polymorphism seam used by the
//! randomized shape factory:
//!
//! - [`Point`] - Integer 2D coordinate with value semantics
//! - [`Shape`] - Capability trait over a type name, an area, and a center
//! - [`Circle`], [`Rectangle`], [`Triangle`] - The closed set of implementors
//! - [`ParsePointError`] - Failure cases when reading a [`Point`] from text
//!
//! # Example
//!
//! ```
//! use shape_types::{Point, Rectangle, Shape};
//!
//! let mut rect = Rectangle::new(3, 4, 0, 0);
//! assert_eq!(rect.type_name(), "Rectangle");
//! assert!((rect.area() - 12.0).abs() < 1e-12);
//!
//! // Shapes can be repositioned after creation
//! rect.set_center(Point::new(5, 5));
//! assert_eq!(rect.center(), Point::new(5, 5));
//! ```
//!
//! # Dimensions
//!
//! Dimensions are plain `i32` values and deliberately unvalidated: a zero or
//! negative dimension produces a non-meaningful area rather than an error.
//! Callers that need guaranteed-sensible dimensions should generate them
//! through the factory crate, which only draws positive sizes.

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]

mod circle;
mod error;
mod point;
mod rectangle;
mod traits;
mod triangle;

pub use circle::Circle;
pub use error::ParsePointError;
pub use point::Point;
pub use rectangle::Rectangle;
pub use traits::Shape;
pub use triangle::Triangle;
