#![no_std]

pub mod boot;
pub mod buffer;
pub mod bus;
pub mod color;
pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod reducer;
pub mod scene;
pub mod strip;

pub use boot::{IndicatorTask, start};
pub use buffer::PixelBuffer;
pub use bus::{BusFull, EventBus, EventPublisher, Subscription};
pub use config::{IndicatorConfig, SelfTestConfig};
pub use controller::LayerIndicator;
pub use error::{Error, status};
pub use event::{Event, LayerStateChanged};
pub use reducer::{LayerReducer, LayerState, Listener};
pub use scene::Scene;
pub use strip::{SmartLedsStrip, sync_strip};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED strip trait
///
/// Implement this trait to support different hardware platforms.
/// The indicator is generic over this trait.
pub trait StripDriver {
    /// Whether the strip can accept a write right now
    fn is_ready(&self) -> bool;

    /// Write colors to the LED strip
    ///
    /// Errors are reported as the driver's negative status code.
    fn write(&mut self, pixels: &[Rgb]) -> Result<(), i32>;
}

/// Route `log` output to the ESP console
#[cfg(feature = "esp32-log")]
pub fn init_logger() {
    esp_println::logger::init_logger_from_env();
}
