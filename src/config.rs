use embassy_time::Duration;

use crate::color::{DIM_GRAY, OFF, RED, Rgb};
use crate::error::Error;

/// Default delay before the boot self-test pixel is reverted
pub const DEFAULT_SELF_TEST_DURATION: Duration = Duration::from_millis(1000);

/// Boot self-test: light one pixel, then revert after `duration`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelfTestConfig {
    pub index: usize,
    pub duration: Duration,
}

/// Static configuration of the layer indicator
///
/// The strip length is not part of this struct, it is the const `N` of
/// the components that use it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorConfig {
    /// Layer whose activation lights the indicator
    pub monitored_layer: u8,
    /// LED lit while the monitored layer is active
    pub indicator_index: usize,
    /// Color of every other LED
    pub baseline: Rgb,
    /// Color of the indicator LED
    pub highlight: Rgb,
    /// React to layer changes relayed from the other half of a split keyboard
    pub follow_peripheral_layers: bool,
    pub self_test: Option<SelfTestConfig>,
}

impl IndicatorConfig {
    /// Escape key (LED 0) turns red on layer 1, everything else off.
    /// Runs the boot self-test on LED 0.
    pub const DEFAULT: Self = Self {
        monitored_layer: 1,
        indicator_index: 0,
        baseline: OFF,
        highlight: RED,
        follow_peripheral_layers: true,
        self_test: Some(SelfTestConfig {
            index: 0,
            duration: DEFAULT_SELF_TEST_DURATION,
        }),
    };

    /// LED 10 turns red on layer 1 over a dim gray backlight, no self-test
    pub const DIM_BASELINE: Self = Self {
        monitored_layer: 1,
        indicator_index: 10,
        baseline: DIM_GRAY,
        highlight: RED,
        follow_peripheral_layers: true,
        self_test: None,
    };

    pub const fn with_monitored_layer(mut self, layer: u8) -> Self {
        self.monitored_layer = layer;
        self
    }

    pub const fn with_indicator_index(mut self, index: usize) -> Self {
        self.indicator_index = index;
        self
    }

    pub const fn with_baseline(mut self, color: Rgb) -> Self {
        self.baseline = color;
        self
    }

    pub const fn with_highlight(mut self, color: Rgb) -> Self {
        self.highlight = color;
        self
    }

    pub const fn with_follow_peripheral_layers(mut self, follow: bool) -> Self {
        self.follow_peripheral_layers = follow;
        self
    }

    pub const fn with_self_test(mut self, self_test: Option<SelfTestConfig>) -> Self {
        self.self_test = self_test;
        self
    }

    /// Check that every configured pixel exists on a strip of `N` LEDs
    pub const fn validate<const N: usize>(&self) -> Result<(), Error> {
        if self.indicator_index >= N {
            return Err(Error::ConfigurationOutOfRange {
                index: self.indicator_index,
                len: N,
            });
        }
        if let Some(self_test) = self.self_test {
            if self_test.index >= N {
                return Err(Error::ConfigurationOutOfRange {
                    index: self_test.index,
                    len: N,
                });
            }
        }
        Ok(())
    }
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
