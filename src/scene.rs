//! Scenes: fully determined buffer contents
//!
//! Every scene starts from [`paint_clear`], so there is exactly one place
//! that resets the buffer and no highlighted pixel can outlive a scene switch.

use crate::buffer::PixelBuffer;
use crate::color::Rgb;
use crate::config::IndicatorConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    /// Every LED at the baseline color
    Clear,
    /// Baseline everywhere except the indicator LED
    Highlight,
}

impl Scene {
    /// Paint this scene into the buffer
    pub fn paint<const N: usize>(self, buffer: &mut PixelBuffer<N>, config: &IndicatorConfig) {
        match self {
            Self::Clear => paint_clear(buffer, config.baseline),
            Self::Highlight => paint_highlight(
                buffer,
                config.baseline,
                config.indicator_index,
                config.highlight,
            ),
        }
    }
}

/// Set every pixel to the baseline color
pub fn paint_clear<const N: usize>(buffer: &mut PixelBuffer<N>, baseline: Rgb) {
    buffer.fill(baseline);
}

/// Clear the buffer, then light a single pixel.
///
/// `index` must be inside the strip, see [`IndicatorConfig::validate`].
/// Debug builds panic on an out of range index instead of silently
/// dropping the highlight.
pub fn paint_highlight<const N: usize>(
    buffer: &mut PixelBuffer<N>,
    baseline: Rgb,
    index: usize,
    color: Rgb,
) {
    paint_clear(buffer, baseline);
    let lit = buffer.set(index, color);
    debug_assert!(lit, "indicator index {index} out of range for {N} LEDs");
}
