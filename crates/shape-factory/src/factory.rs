//! The shape creation service.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use shape_types::{Circle, Rectangle, Shape, Triangle};
use tracing::debug;

use crate::config::FactoryConfig;
use crate::error::{FactoryError, FactoryResult};

/// A factory producing randomly sized shapes from their names.
///
/// The factory maps the case-sensitive names `"circle"`, `"rectangle"`, and
/// `"triangle"` to freshly constructed shapes centered at the origin, with
/// every dimension drawn independently and uniformly from the configured
/// size range. The caller owns the returned shape outright.
///
/// The factory holds no state beyond its generator and size bounds, so one
/// instance can serve an entire session.
///
/// # Example
///
/// ```
/// use shape_factory::{FactoryConfig, ShapeFactory};
///
/// let mut factory = ShapeFactory::with_config(&FactoryConfig::new().with_seed(7));
///
/// let shape = factory.create_shape("triangle")?;
/// assert_eq!(shape.type_name(), "Triangle");
/// # Ok::<(), shape_factory::FactoryError>(())
/// ```
pub struct ShapeFactory {
    /// Source of dimension draws. Boxed so seeded and entropy-based
    /// generators share one field.
    rng: Box<dyn RngCore>,
    /// Smallest dimension generated (inclusive).
    min_size: i32,
    /// Largest dimension generated (inclusive).
    max_size: i32,
}

impl ShapeFactory {
    /// Creates a factory with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&FactoryConfig::default())
    }

    /// Creates a factory from a configuration.
    ///
    /// With a seed configured the factory replays the same sequence of
    /// shapes on every run; without one, draws come from the thread-local
    /// generator.
    #[must_use]
    pub fn with_config(config: &FactoryConfig) -> Self {
        let rng: Box<dyn RngCore> = if let Some(seed) = config.seed {
            Box::new(StdRng::seed_from_u64(seed))
        } else {
            Box::new(rand::thread_rng())
        };

        Self {
            rng,
            min_size: config.min_size,
            max_size: config.max_size,
        }
    }

    /// Creates the shape named by `name` with randomly drawn dimensions.
    ///
    /// Recognized names are the exact, case-sensitive strings `"circle"`,
    /// `"rectangle"`, and `"triangle"`. The returned shape is centered at
    /// the origin.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::UnrecognizedShape`] for any other input,
    /// including the empty string, wrong-case names, and names with
    /// surrounding whitespace.
    pub fn create_shape(&mut self, name: &str) -> FactoryResult<Box<dyn Shape>> {
        let shape: Box<dyn Shape> = match name {
            "circle" => Box::new(Circle::new(self.random_size(), 0, 0)),
            "rectangle" => Box::new(Rectangle::new(
                self.random_size(),
                self.random_size(),
                0,
                0,
            )),
            "triangle" => Box::new(Triangle::new(self.random_size(), self.random_size(), 0, 0)),
            _ => return Err(FactoryError::unrecognized(name)),
        };

        debug!(
            type_name = shape.type_name(),
            area = shape.area(),
            "created shape"
        );
        Ok(shape)
    }

    /// Draws one dimension from the configured size range.
    fn random_size(&mut self) -> i32 {
        self.rng.gen_range(self.min_size..=self.max_size)
    }
}

impl Default for ShapeFactory {
    fn default() -> Self {
        Self::new()
    }
}
