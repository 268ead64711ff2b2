//! Startup sequence and the running indicator task.
//!
//! ```ignore
//! static EVENTS: EventBus<8> = EventBus::new();
//!
//! let mut task = boot::start::<_, 36, 8>(Some(strip), IndicatorConfig::DEFAULT, &EVENTS, Instant::now())?;
//! loop {
//!     task.tick(Instant::now());
//!     // Platform-specific wait for the next event or timer
//! }
//! ```

use embassy_time::Instant;
use log::{error, info};

use crate::StripDriver;
use crate::bus::{EventBus, Subscription};
use crate::config::IndicatorConfig;
use crate::controller::LayerIndicator;
use crate::error::Error;
use crate::scene::Scene;

/// Bring the indicator up and subscribe it to layer events.
///
/// Steps run in order and each one needs the previous to succeed:
/// 1. the strip handle must be present,
/// 2. the configuration must fit the strip,
/// 3. the strip must be ready,
/// 4. `bus` must not have a listener yet,
/// 5. the buffer is cleared and written,
/// 6. the optional self-test is started,
/// 7. the indicator subscribes to `bus`.
///
/// On error nothing is painted and nothing is subscribed.
pub fn start<'a, D: StripDriver, const N: usize, const SIZE: usize>(
    device: Option<D>,
    config: IndicatorConfig,
    bus: &'a EventBus<SIZE>,
    now: Instant,
) -> Result<IndicatorTask<'a, D, N, SIZE>, Error> {
    info!("Initializing layer indicator");

    let Some(device) = device else {
        error!("LED strip device pointer is missing");
        return Err(Error::DeviceAbsent);
    };

    let mut indicator = LayerIndicator::<D, N>::new(device, config).inspect_err(|err| {
        error!("Invalid indicator configuration: {}", err);
    })?;

    if !indicator.device().is_ready() {
        error!("LED strip device not ready at init");
        return Err(Error::DeviceNotReady);
    }
    info!("LED strip device ready, {} pixels", N);

    if bus.is_subscribed() {
        error!("Event bus already has a listener");
        return Err(Error::AlreadySubscribed);
    }

    // Write failures past this point are transient and already logged
    let _ = indicator.show(Scene::Clear);
    let _ = indicator.start_self_test(now);

    let Some(subscription) = bus.subscribe() else {
        return Err(Error::AlreadySubscribed);
    };
    info!("Layer indicator initialization complete");

    Ok(IndicatorTask {
        indicator,
        subscription,
    })
}

/// A started indicator bound to its event subscription
pub struct IndicatorTask<'a, D: StripDriver, const N: usize, const SIZE: usize> {
    indicator: LayerIndicator<D, N>,
    subscription: Subscription<'a, SIZE>,
}

impl<D: StripDriver, const N: usize, const SIZE: usize> IndicatorTask<'_, D, N, SIZE> {
    /// Deliver all pending events, then run the self-test timer.
    ///
    /// Returns the number of events delivered. Invalid events are logged
    /// and skipped.
    pub fn tick(&mut self, now: Instant) -> usize {
        let mut delivered = 0;
        while let Some(event) = self.subscription.next_event() {
            let _ = self.indicator.handle_event(&event);
            delivered += 1;
        }

        self.indicator.poll(now);
        delivered
    }

    pub fn indicator(&self) -> &LayerIndicator<D, N> {
        &self.indicator
    }

    pub fn indicator_mut(&mut self) -> &mut LayerIndicator<D, N> {
        &mut self.indicator
    }
}
