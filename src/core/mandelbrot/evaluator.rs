use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

/// Iteration cap used by the interactive explorer.
pub const DEFAULT_MAX_ITERATIONS: u32 = 1000;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EvaluatorError {
    ZeroMaxIterations,
}

impl fmt::Display for EvaluatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
        }
    }
}

impl Error for EvaluatorError {}

/// Escape-time iteration of `z ← z² + c`.
///
/// This runs once per sample point per pass and dominates render cost, so
/// the loop body is a multiply, an add and one magnitude compare.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EscapeTimeEvaluator {
    max_iterations: u32,
}

impl EscapeTimeEvaluator {
    pub fn new(max_iterations: u32) -> Result<Self, EvaluatorError> {
        if max_iterations == 0 {
            return Err(EvaluatorError::ZeroMaxIterations);
        }

        Ok(Self { max_iterations })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Returns the iteration at which the orbit of `c` escaped `|z| > 2`,
    /// or `max_iterations` if it never did (the point is inside the set).
    #[must_use]
    pub fn evaluate(&self, c: Complex) -> u32 {
        let mut z = Complex::ZERO;

        for iteration in 0..self.max_iterations {
            if z.magnitude_squared() > 4.0 {
                return iteration;
            }
            z = z * z + c;
        }

        self.max_iterations
    }
}
