use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;

/// The seam between the pass renderer and whatever produces a colour for a
/// point of the complex plane.
pub trait PointSampler: Send + Sync {
    fn sample(&self, c: Complex) -> Colour;
}
