use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::render::cancellation::CancelToken;
use crate::core::render::ports::PointSampler;
use std::sync::Mutex;

/// Paints the whole buffer at one block resolution.
///
/// The grid is walked in raster order; each block is sampled once at its
/// centre and painted as a unit, so a coarse pass is a faithful
/// low-resolution preview rather than a corner-biased one. The cancel token
/// is polled before every block: on cancellation the function returns
/// `false` immediately and whatever was already painted stays in the
/// buffer as the last known good frame.
///
/// The buffer lock is taken once per block row, keeping block writes atomic
/// relative to the cancel check while letting the presenter copy the buffer
/// between rows of a running pass.
///
/// Returns `true` only if every block in the grid was painted.
pub fn render_pass<C: CancelToken>(
    buffer: &Mutex<PixelBuffer>,
    viewport: &Viewport,
    block_size: u32,
    sampler: &dyn PointSampler,
    cancel: &C,
) -> bool {
    let width = viewport.width();
    let height = viewport.height();
    let half_block = f64::from(block_size) / 2.0;

    let mut y = 0;
    while y < height {
        let mut guard = buffer.lock().unwrap();

        let mut x = 0;
        while x < width {
            if cancel.is_cancelled() {
                return false;
            }

            let centre = viewport.pixel_to_complex(
                f64::from(x) + half_block,
                f64::from(y) + half_block,
            );
            let colour = sampler.sample(centre);
            guard.fill_block(x, y, block_size, colour);

            x += block_size;
        }

        drop(guard);
        y += block_size;
    }

    true
}
