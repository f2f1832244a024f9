use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

/// Canonical framing of the full set, matching the classic -2.5..1.0 view.
pub const DEFAULT_REAL_MIN: f64 = -2.5;
pub const DEFAULT_REAL_MAX: f64 = 1.0;
pub const DEFAULT_IMAG_MIN: f64 = -1.5;
pub const DEFAULT_IMAG_MAX: f64 = 1.5;

/// Smallest real-axis range a zoom-in may produce. Below this a 1080p-wide
/// pixel step drops under f64 resolution and the image degenerates into
/// banding, so further zoom-in is refused instead.
pub const MIN_REAL_RANGE: f64 = 1e-13;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViewportError {
    InvalidDimensions { width: u32, height: u32 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "viewport dimensions must be non-zero: {}x{}", width, height)
            }
        }
    }
}

impl Error for ViewportError {}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ZoomError {
    InvalidFactor { factor: f64 },
    PrecisionExhausted { range: f64 },
}

impl fmt::Display for ZoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFactor { factor } => {
                write!(f, "zoom factor must be finite and positive: {}", factor)
            }
            Self::PrecisionExhausted { range } => {
                write!(
                    f,
                    "zoom refused: real range {:e} is below the f64 precision floor",
                    range
                )
            }
        }
    }
}

impl Error for ZoomError {}

/// The rectangle of the complex plane mapped onto a fixed-size pixel target.
///
/// The pixel-to-plane mapping is the single source of truth for both render
/// sampling and click translation; using the same formula for both is what
/// keeps repeated zooms from drifting.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    real_min: f64,
    real_max: f64,
    imag_min: f64,
    imag_max: f64,
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Result<Self, ViewportError> {
        if width == 0 || height == 0 {
            return Err(ViewportError::InvalidDimensions { width, height });
        }

        Ok(Self {
            real_min: DEFAULT_REAL_MIN,
            real_max: DEFAULT_REAL_MAX,
            imag_min: DEFAULT_IMAG_MIN,
            imag_max: DEFAULT_IMAG_MAX,
            width,
            height,
        })
    }

    #[must_use]
    pub fn real_min(&self) -> f64 {
        self.real_min
    }

    #[must_use]
    pub fn real_max(&self) -> f64 {
        self.real_max
    }

    #[must_use]
    pub fn imag_min(&self) -> f64 {
        self.imag_min
    }

    #[must_use]
    pub fn imag_max(&self) -> f64 {
        self.imag_max
    }

    #[must_use]
    pub fn real_range(&self) -> f64 {
        self.real_max - self.real_min
    }

    #[must_use]
    pub fn imag_range(&self) -> f64 {
        self.imag_max - self.imag_min
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Maps a sample position in pixel space onto the complex plane.
    ///
    /// Positions are `f64` so callers can address block centres
    /// (`x + block/2`) with the same formula used for whole-pixel clicks.
    #[must_use]
    pub fn pixel_to_complex(&self, px: f64, py: f64) -> Complex {
        Complex {
            real: self.real_min + self.real_range() * px / f64::from(self.width),
            imag: self.imag_min + self.imag_range() * py / f64::from(self.height),
        }
    }

    /// Scales both ranges by `factor`, keeping the complex point under pixel
    /// `(x, y)` at the same screen fraction it occupied before the zoom.
    ///
    /// A zoom-in that would shrink the real range below [`MIN_REAL_RANGE`]
    /// is refused and the viewport is left untouched.
    pub fn zoom_at(&mut self, x: u32, y: u32, factor: f64) -> Result<(), ZoomError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ZoomError::InvalidFactor { factor });
        }

        let new_real_range = self.real_range() * factor;
        let new_imag_range = self.imag_range() * factor;

        if new_real_range < MIN_REAL_RANGE {
            return Err(ZoomError::PrecisionExhausted {
                range: new_real_range,
            });
        }

        let anchor = self.pixel_to_complex(f64::from(x), f64::from(y));
        let fraction_x = f64::from(x) / f64::from(self.width);
        let fraction_y = f64::from(y) / f64::from(self.height);

        self.real_min = anchor.real - fraction_x * new_real_range;
        self.real_max = self.real_min + new_real_range;
        self.imag_min = anchor.imag - fraction_y * new_imag_range;
        self.imag_max = self.imag_min + new_imag_range;

        Ok(())
    }

    /// Restores the canonical default bounds, discarding all zoom history.
    pub fn reset(&mut self) {
        self.real_min = DEFAULT_REAL_MIN;
        self.real_max = DEFAULT_REAL_MAX;
        self.imag_min = DEFAULT_IMAG_MIN;
        self.imag_max = DEFAULT_IMAG_MAX;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected {} to be within {} of {}",
            actual,
            TOLERANCE,
            expected
        );
    }

    fn viewport_1080p() -> Viewport {
        Viewport::new(1920, 1080).unwrap()
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert_eq!(
            Viewport::new(0, 1080),
            Err(ViewportError::InvalidDimensions {
                width: 0,
                height: 1080
            })
        );
        assert_eq!(
            Viewport::new(1920, 0),
            Err(ViewportError::InvalidDimensions {
                width: 1920,
                height: 0
            })
        );
    }

    #[test]
    fn test_new_starts_at_default_bounds() {
        let viewport = viewport_1080p();

        assert_eq!(viewport.real_min(), -2.5);
        assert_eq!(viewport.real_max(), 1.0);
        assert_eq!(viewport.imag_min(), -1.5);
        assert_eq!(viewport.imag_max(), 1.5);
        assert_eq!(viewport.real_range(), 3.5);
        assert_eq!(viewport.imag_range(), 3.0);
    }

    #[test]
    fn test_pixel_to_complex_origin_maps_to_minimum_corner() {
        let c = viewport_1080p().pixel_to_complex(0.0, 0.0);

        assert_eq!(c.real, -2.5);
        assert_eq!(c.imag, -1.5);
    }

    #[test]
    fn test_pixel_to_complex_full_extent_maps_to_maximum_corner() {
        let c = viewport_1080p().pixel_to_complex(1920.0, 1080.0);

        assert_close(c.real, 1.0);
        assert_close(c.imag, 1.5);
    }

    #[test]
    fn test_pixel_to_complex_centre() {
        let c = viewport_1080p().pixel_to_complex(960.0, 540.0);

        assert_close(c.real, -0.75);
        assert_close(c.imag, 0.0);
    }

    #[test]
    fn test_zoom_at_scales_both_ranges_by_factor() {
        let mut viewport = viewport_1080p();

        viewport.zoom_at(700, 200, 0.5).unwrap();

        assert_close(viewport.real_range(), 1.75);
        assert_close(viewport.imag_range(), 1.5);
    }

    #[test]
    fn test_zoom_at_centre_click_halves_symmetrically() {
        let mut viewport = viewport_1080p();

        viewport.zoom_at(960, 540, 0.5).unwrap();

        assert_close(viewport.real_min(), -1.625);
        assert_close(viewport.real_max(), 0.125);
        assert_close(viewport.imag_min(), -0.75);
        assert_close(viewport.imag_max(), 0.75);
    }

    #[test]
    fn test_zoom_at_preserves_anchor_point() {
        let mut viewport = viewport_1080p();
        let before = viewport.pixel_to_complex(317.0, 911.0);

        viewport.zoom_at(317, 911, 0.5).unwrap();
        let after = viewport.pixel_to_complex(317.0, 911.0);

        assert_close(after.real, before.real);
        assert_close(after.imag, before.imag);
    }

    #[test]
    fn test_repeated_off_centre_zooms_do_not_drift() {
        let mut viewport = viewport_1080p();
        let before = viewport.pixel_to_complex(100.0, 1000.0);

        for _ in 0..10 {
            viewport.zoom_at(100, 1000, 0.5).unwrap();
        }
        let after = viewport.pixel_to_complex(100.0, 1000.0);

        assert_close(after.real, before.real);
        assert_close(after.imag, before.imag);
    }

    #[test]
    fn test_zoom_out_preserves_anchor_point() {
        let mut viewport = viewport_1080p();
        let before = viewport.pixel_to_complex(1500.0, 300.0);

        viewport.zoom_at(1500, 300, 2.0).unwrap();
        let after = viewport.pixel_to_complex(1500.0, 300.0);

        assert_close(after.real, before.real);
        assert_close(after.imag, before.imag);
        assert_close(viewport.real_range(), 7.0);
    }

    #[test]
    fn test_reset_restores_defaults_regardless_of_history() {
        let mut viewport = viewport_1080p();
        viewport.zoom_at(31, 42, 0.5).unwrap();
        viewport.zoom_at(1234, 567, 2.0).unwrap();
        viewport.zoom_at(960, 540, 0.5).unwrap();

        viewport.reset();

        assert_eq!(viewport, viewport_1080p());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut viewport = viewport_1080p();
        viewport.reset();
        viewport.reset();

        assert_eq!(viewport, viewport_1080p());
    }

    #[test]
    fn test_zoom_rejects_degenerate_factors() {
        let mut viewport = viewport_1080p();

        assert_eq!(
            viewport.zoom_at(960, 540, 0.0),
            Err(ZoomError::InvalidFactor { factor: 0.0 })
        );
        assert_eq!(
            viewport.zoom_at(960, 540, -0.5),
            Err(ZoomError::InvalidFactor { factor: -0.5 })
        );
        assert!(matches!(
            viewport.zoom_at(960, 540, f64::NAN),
            Err(ZoomError::InvalidFactor { .. })
        ));
        assert_eq!(viewport, viewport_1080p());
    }

    #[test]
    fn test_zoom_refuses_past_precision_floor() {
        let mut viewport = viewport_1080p();

        // 3.5 * 0.5^n < 1e-13 once n > 44; zoom until refused.
        let mut refusals = 0;
        for _ in 0..60 {
            if viewport.zoom_at(960, 540, 0.5).is_err() {
                refusals += 1;
            }
        }

        assert!(refusals > 0);
        assert!(viewport.real_range() >= MIN_REAL_RANGE);
        assert!(viewport.real_range().is_finite());
        assert!(viewport.real_range() > 0.0);
    }

    #[test]
    fn test_zoom_out_still_allowed_at_precision_floor() {
        let mut viewport = viewport_1080p();
        while viewport.zoom_at(960, 540, 0.5).is_ok() {}

        let range_at_floor = viewport.real_range();

        assert!(viewport.zoom_at(960, 540, 2.0).is_ok());
        assert_close(viewport.real_range() / range_at_floor, 2.0);
    }
}
