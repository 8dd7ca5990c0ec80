//! Randomized shape creation.
//!
//! This crate maps shape names to freshly constructed, randomly dimensioned
//! shapes, returned through the [`Shape`] trait:
//!
//! - [`ShapeFactory`] - The creation service itself
//! - [`FactoryConfig`] - Size range and seeding for the randomness source
//! - [`FactoryError`] - The one way creation can fail
//!
//! # Example
//!
//! ```
//! use shape_factory::{FactoryConfig, ShapeFactory};
//! use shape_types::Point;
//!
//! // Seeded factories are fully reproducible
//! let mut factory = ShapeFactory::with_config(&FactoryConfig::new().with_seed(42));
//!
//! let shape = factory.create_shape("circle")?;
//! assert_eq!(shape.type_name(), "Circle");
//! assert_eq!(shape.center(), Point::origin());
//!
//! // Names are case-sensitive; anything unrecognized is a typed error
//! assert!(factory.create_shape("Circle").is_err());
//! # Ok::<(), shape_factory::FactoryError>(())
//! ```
//!
//! # Randomness
//!
//! The generator is owned by the factory and injected through
//! [`FactoryConfig`], never taken from process-wide state. An unseeded
//! factory draws from the thread-local generator; a seeded one replays the
//! same sequence of shapes on every run.

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]

mod config;
mod error;
mod factory;

pub use config::FactoryConfig;
pub use error::{FactoryError, FactoryResult};
pub use factory::ShapeFactory;

// Re-export the types the factory hands back, for convenience
pub use shape_types::{Point, Shape};
