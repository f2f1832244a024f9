use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::mandelbrot::evaluator::EscapeTimeEvaluator;
use crate::core::mandelbrot::palette::ColourMap;
use crate::core::render::ports::PointSampler;

/// Escape-time evaluation composed with a colour map; what the pass
/// renderer samples, one call per block.
pub struct MandelbrotSampler<M: ColourMap> {
    evaluator: EscapeTimeEvaluator,
    colour_map: M,
}

impl<M: ColourMap> MandelbrotSampler<M> {
    pub fn new(evaluator: EscapeTimeEvaluator, colour_map: M) -> Self {
        Self {
            evaluator,
            colour_map,
        }
    }

    #[must_use]
    pub fn evaluator(&self) -> &EscapeTimeEvaluator {
        &self.evaluator
    }
}

impl<M: ColourMap> PointSampler for MandelbrotSampler<M> {
    fn sample(&self, c: Complex) -> Colour {
        self.colour_map.colour_for(self.evaluator.evaluate(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::mandelbrot::palette::PolynomialPalette;

    fn sampler(max_iterations: u32) -> MandelbrotSampler<PolynomialPalette> {
        MandelbrotSampler::new(
            EscapeTimeEvaluator::new(max_iterations).unwrap(),
            PolynomialPalette::new(max_iterations),
        )
    }

    #[test]
    fn test_interior_point_samples_black() {
        let colour = sampler(200).sample(Complex::ZERO);

        assert_eq!(colour, Colour::BLACK);
    }

    #[test]
    fn test_exterior_point_samples_palette_colour() {
        let colour = sampler(200).sample(Complex {
            real: 1.5,
            imag: 1.5,
        });

        assert_ne!(colour, Colour::BLACK);
    }

    #[test]
    fn test_sample_matches_evaluate_then_map() {
        let evaluator = EscapeTimeEvaluator::new(300).unwrap();
        let palette = PolynomialPalette::new(300);
        let sampler = MandelbrotSampler::new(evaluator, palette);
        let c = Complex {
            real: -0.5,
            imag: 0.58,
        };

        let expected = palette.colour_for(evaluator.evaluate(c));

        assert_eq!(sampler.sample(c), expected);
    }
}
