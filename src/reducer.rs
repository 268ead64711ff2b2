//! Layer event reducer
//!
//! Filters firmware events down to the one layer we care about and decides
//! which scene should be shown.

use log::{debug, error};

use crate::error::Error;
use crate::event::Event;
use crate::scene::Scene;

/// Something that handles firmware events as they are dispatched
///
/// Implementors must not keep the event past the call.
pub trait Listener {
    fn on_event(&mut self, event: &Event) -> Result<(), Error>;
}

/// State of the monitored layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LayerState {
    #[default]
    Inactive,
    Active,
}

impl LayerState {
    /// Scene that represents this state
    pub const fn scene(self) -> Scene {
        match self {
            Self::Active => Scene::Highlight,
            Self::Inactive => Scene::Clear,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayerReducer {
    monitored_layer: u8,
    follow_peripheral_layers: bool,
    state: LayerState,
}

impl LayerReducer {
    pub const fn new(monitored_layer: u8, follow_peripheral_layers: bool) -> Self {
        Self {
            monitored_layer,
            follow_peripheral_layers,
            state: LayerState::Inactive,
        }
    }

    pub const fn state(&self) -> LayerState {
        self.state
    }

    pub const fn monitored_layer(&self) -> u8 {
        self.monitored_layer
    }

    /// Feed one event through the reducer
    ///
    /// Returns the scene to show, or `None` if the event is about another
    /// layer. Events that carry no layer change are rejected with
    /// [`Error::InvalidEvent`] and leave the state untouched.
    pub fn reduce(&mut self, event: &Event) -> Result<Option<Scene>, Error> {
        let Some(ev) = event.as_layer_state_changed() else {
            error!("Invalid layer state changed event");
            return Err(Error::InvalidEvent);
        };

        debug!("Layer state changed: layer={}, state={}", ev.layer, ev.state);

        if event.is_from_peripheral() && !self.follow_peripheral_layers {
            return Ok(None);
        }
        if ev.layer != self.monitored_layer {
            return Ok(None);
        }

        self.state = if ev.state {
            LayerState::Active
        } else {
            LayerState::Inactive
        };
        debug!("Layer {} is now {:?}", self.monitored_layer, self.state);

        Ok(Some(self.state.scene()))
    }
}
