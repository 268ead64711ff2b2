//! Strip synchronization: push the pixel buffer to the hardware.

use log::{debug, error};
use smart_leds::SmartLedsWrite;

use crate::StripDriver;
use crate::buffer::PixelBuffer;
use crate::color::Rgb;
use crate::error::{EIO, Error};

/// Write the buffer to the strip.
///
/// Readiness is checked right before every write, never cached. On failure
/// nothing is written and the error is logged; the buffer keeps its
/// contents so the next successful write reconciles the strip. Callers are
/// free to ignore the result.
pub fn sync_strip<D: StripDriver, const N: usize>(
    device: &mut D,
    buffer: &PixelBuffer<N>,
) -> Result<(), Error> {
    if !device.is_ready() {
        error!("LED strip device not ready");
        return Err(Error::DeviceNotReady);
    }

    match device.write(buffer.as_slice()) {
        Ok(()) => {
            debug!("Updated {} LEDs", N);
            Ok(())
        }
        Err(code) => {
            error!("Failed to update LEDs: {}", code);
            Err(Error::WriteFailed(code))
        }
    }
}

/// [`StripDriver`] on top of any `smart-leds` writer.
///
/// Most `smart-leds` drivers have no notion of readiness, so by default the
/// strip is always ready. Use [`SmartLedsStrip::with_ready`] to gate writes
/// on a platform check (power rail enabled, peripheral initialized, ...).
pub struct SmartLedsStrip<W> {
    writer: W,
    ready: fn() -> bool,
}

impl<W> SmartLedsStrip<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    pub fn new(writer: W) -> Self {
        Self::with_ready(writer, || true)
    }

    pub fn with_ready(writer: W, ready: fn() -> bool) -> Self {
        Self { writer, ready }
    }

    /// Release the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> StripDriver for SmartLedsStrip<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    fn is_ready(&self) -> bool {
        (self.ready)()
    }

    fn write(&mut self, pixels: &[Rgb]) -> Result<(), i32> {
        self.writer
            .write(pixels.iter().copied())
            .map_err(|_| -EIO)
    }
}
