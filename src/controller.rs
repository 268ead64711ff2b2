use embassy_time::Instant;
use log::{debug, info};

use crate::StripDriver;
use crate::buffer::PixelBuffer;
use crate::config::IndicatorConfig;
use crate::error::Error;
use crate::event::Event;
use crate::reducer::{LayerReducer, LayerState, Listener};
use crate::scene::{Scene, paint_highlight};
use crate::self_test::SelfTest;
use crate::strip::sync_strip;

/// Layer indicator - owns the pixel buffer and the strip
///
/// All mutation goes through `&mut self`, so as long as events and timer
/// polls come from one context there is nothing to lock.
pub struct LayerIndicator<D: StripDriver, const N: usize> {
    // External dependencies and configuration
    device: D,
    config: IndicatorConfig,

    // Internal state
    buffer: PixelBuffer<N>,
    reducer: LayerReducer,
    self_test: SelfTest,
}

impl<D: StripDriver, const N: usize> LayerIndicator<D, N> {
    /// Create an indicator for a strip of `N` LEDs
    ///
    /// Fails if a configured pixel index does not exist on the strip.
    /// Nothing is written to the hardware yet.
    pub fn new(device: D, config: IndicatorConfig) -> Result<Self, Error> {
        config.validate::<N>()?;

        Ok(Self {
            device,
            config,
            buffer: PixelBuffer::new(),
            reducer: LayerReducer::new(config.monitored_layer, config.follow_peripheral_layers),
            self_test: SelfTest::idle(),
        })
    }

    /// Paint a scene and push it to the strip
    ///
    /// The buffer is updated even if the write fails.
    pub fn show(&mut self, scene: Scene) -> Result<(), Error> {
        debug!("Showing {:?} scene", scene);
        scene.paint(&mut self.buffer, &self.config);
        self.sync()
    }

    /// Push the current buffer to the strip
    pub fn sync(&mut self) -> Result<(), Error> {
        sync_strip(&mut self.device, &self.buffer)
    }

    /// Handle one firmware event
    ///
    /// Only invalid events are reported. Write failures are logged by
    /// [`sync_strip`] and otherwise ignored, the next event retries.
    pub fn handle_event(&mut self, event: &Event) -> Result<(), Error> {
        if let Some(scene) = self.reducer.reduce(event)? {
            let _ = self.show(scene);
        }
        Ok(())
    }

    /// Light the self-test pixel and arm the reversion timer
    ///
    /// When the timer fires, [`poll`](Self::poll) restores the scene of the
    /// current layer state rather than always clearing, so a layer that
    /// became active during the test stays lit.
    /// Does nothing if the self-test is disabled.
    pub fn start_self_test(&mut self, now: Instant) -> Result<(), Error> {
        let Some(self_test) = self.config.self_test else {
            return Ok(());
        };

        info!("Testing LED {} with {:?}", self_test.index, self.config.highlight);
        paint_highlight(
            &mut self.buffer,
            self.config.baseline,
            self_test.index,
            self.config.highlight,
        );
        self.self_test = SelfTest::armed(now, self_test.duration);
        self.sync()
    }

    /// Run the self-test reversion if it is due
    ///
    /// Restores the scene of the current layer state, so a layer change
    /// that arrived during the self-test is kept.
    pub fn poll(&mut self, now: Instant) {
        if self.self_test.poll(now) {
            info!("Clearing test LED");
            let _ = self.show(self.reducer.state().scene());
        }
    }

    pub fn buffer(&self) -> &PixelBuffer<N> {
        &self.buffer
    }

    pub fn state(&self) -> LayerState {
        self.reducer.state()
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    pub fn self_test(&self) -> &SelfTest {
        &self.self_test
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }
}

impl<D: StripDriver, const N: usize> Listener for LayerIndicator<D, N> {
    fn on_event(&mut self, event: &Event) -> Result<(), Error> {
        self.handle_event(event)
    }
}
