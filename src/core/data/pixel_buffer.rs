use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelBufferError {
    InvalidDimensions { width: u32, height: u32 },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "pixel buffer dimensions must be non-zero: {}x{}", width, height)
            }
        }
    }
}

impl Error for PixelBufferError {}

/// Fixed-size render target of packed ARGB words, one per pixel.
///
/// Starts out opaque black so every intermediate state the presenter can
/// observe is a valid colouring. Blocks are painted as a unit; a block that
/// overhangs the right or bottom edge is clipped.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelBufferError> {
        if width == 0 || height == 0 {
            return Err(PixelBufferError::InvalidDimensions { width, height });
        }

        Ok(Self {
            width,
            height,
            pixels: vec![Colour::BLACK.to_argb(); (width as usize) * (height as usize)],
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel(&self, point: Point) -> Option<u32> {
        if point.x >= self.width || point.y >= self.height {
            return None;
        }

        Some(self.pixels[(point.y as usize) * (self.width as usize) + (point.x as usize)])
    }

    /// The packed pixels in raster order, for presentation and export.
    #[must_use]
    pub fn as_argb(&self) -> &[u32] {
        &self.pixels
    }

    /// Paints a `block_size`-sided square with its top-left corner at
    /// `(x, y)` in one colour, clipping at the buffer edges.
    pub fn fill_block(&mut self, x: u32, y: u32, block_size: u32, colour: Colour) {
        if x >= self.width || y >= self.height {
            return;
        }

        let packed = colour.to_argb();
        let x_end = (x.saturating_add(block_size)).min(self.width);
        let y_end = (y.saturating_add(block_size)).min(self.height);

        for row in y..y_end {
            let start = (row as usize) * (self.width as usize) + (x as usize);
            let end = start + ((x_end - x) as usize);
            self.pixels[start..end].fill(packed);
        }
    }
}
