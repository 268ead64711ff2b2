//! Events delivered by the keyboard firmware

use crate::error::Error;

/// A layer was activated or deactivated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerStateChanged {
    pub layer: u8,
    /// `true` when the layer became active
    pub state: bool,
}

impl LayerStateChanged {
    pub const fn new(layer: u8, state: bool) -> Self {
        Self { layer, state }
    }
}

/// Firmware event envelope
///
/// Listeners receive every event the firmware publishes and have to pick
/// out the ones they understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Layer change on this half
    LayerStateChanged(LayerStateChanged),
    /// Layer change relayed from the central half of a split keyboard
    SplitPeripheralLayerChanged(LayerStateChanged),
    /// Any other firmware event, by numeric id
    Other(u16),
}

impl Event {
    /// Extract the layer change payload
    ///
    /// Returns `None` for events that do not carry one.
    pub const fn as_layer_state_changed(&self) -> Option<LayerStateChanged> {
        match self {
            Self::LayerStateChanged(ev) | Self::SplitPeripheralLayerChanged(ev) => Some(*ev),
            Self::Other(_) => None,
        }
    }

    pub const fn is_from_peripheral(&self) -> bool {
        matches!(self, Self::SplitPeripheralLayerChanged(_))
    }
}

impl From<LayerStateChanged> for Event {
    fn from(ev: LayerStateChanged) -> Self {
        Self::LayerStateChanged(ev)
    }
}

impl TryFrom<&Event> for LayerStateChanged {
    type Error = Error;

    fn try_from(event: &Event) -> Result<Self, Error> {
        event.as_layer_state_changed().ok_or(Error::InvalidEvent)
    }
}
