mod common;

mod tests {
    use layer_led_indicator::color::{DIM_GRAY, OFF, RED};
    use layer_led_indicator::event::Event;
    use layer_led_indicator::{
        Error, IndicatorConfig, LayerIndicator, LayerReducer, LayerState, LayerStateChanged,
        Listener, Scene, status,
    };

    use crate::common::MockStrip;

    const LEDS: usize = 12;

    fn indicator(config: IndicatorConfig) -> LayerIndicator<MockStrip, LEDS> {
        let config = config.with_self_test(None);
        match LayerIndicator::new(MockStrip::ready(), config) {
            Ok(indicator) => indicator,
            Err(err) => panic!("valid config rejected: {err}"),
        }
    }

    fn layer(layer: u8, state: bool) -> Event {
        LayerStateChanged::new(layer, state).into()
    }

    #[test]
    fn test_reducer_transitions() {
        let mut reducer = LayerReducer::new(1, true);
        assert_eq!(reducer.state(), LayerState::Inactive);

        assert_eq!(reducer.reduce(&layer(1, true)), Ok(Some(Scene::Highlight)));
        assert_eq!(reducer.state(), LayerState::Active);

        assert_eq!(reducer.reduce(&layer(1, false)), Ok(Some(Scene::Clear)));
        assert_eq!(reducer.state(), LayerState::Inactive);
    }

    #[test]
    fn test_reducer_ignores_other_layers() {
        let mut reducer = LayerReducer::new(1, true);
        assert_eq!(reducer.reduce(&layer(2, true)), Ok(None));
        assert_eq!(reducer.reduce(&layer(0, false)), Ok(None));
        assert_eq!(reducer.state(), LayerState::Inactive);
    }

    #[test]
    fn test_reducer_rejects_foreign_event() {
        let mut reducer = LayerReducer::new(1, true);
        reducer.reduce(&layer(1, true)).ok();
        assert_eq!(reducer.reduce(&Event::Other(42)), Err(Error::InvalidEvent));
        assert_eq!(reducer.state(), LayerState::Active);
    }

    #[test]
    fn test_peripheral_layers_can_be_ignored() {
        let relayed = Event::SplitPeripheralLayerChanged(LayerStateChanged::new(1, true));

        let mut follower = LayerReducer::new(1, true);
        assert_eq!(follower.reduce(&relayed), Ok(Some(Scene::Highlight)));

        let mut local_only = LayerReducer::new(1, false);
        assert_eq!(local_only.reduce(&relayed), Ok(None));
        assert_eq!(local_only.state(), LayerState::Inactive);
    }

    #[test]
    fn test_activation_highlights_indicator() {
        let mut indicator = indicator(IndicatorConfig::DEFAULT);
        assert_eq!(indicator.handle_event(&layer(1, true)), Ok(()));

        assert_eq!(indicator.state(), LayerState::Active);
        assert_eq!(indicator.buffer()[0], RED);
        assert!(indicator.buffer().iter().skip(1).all(|pixel| pixel == OFF));
        assert_eq!(indicator.device().last_write().as_deref(), Some(indicator.buffer().as_slice()));
    }

    #[test]
    fn test_deactivation_clears() {
        let mut indicator = indicator(IndicatorConfig::DIM_BASELINE);
        indicator.handle_event(&layer(1, true)).ok();
        assert_eq!(indicator.buffer()[10], RED);

        indicator.handle_event(&layer(1, false)).ok();
        assert_eq!(indicator.state(), LayerState::Inactive);
        assert!(indicator.buffer().iter().all(|pixel| pixel == DIM_GRAY));
        assert_eq!(indicator.device().write_count(), 2);
    }

    #[test]
    fn test_other_layer_does_not_write() {
        let mut indicator = indicator(IndicatorConfig::DEFAULT);
        let before = indicator.buffer().clone();

        assert_eq!(indicator.handle_event(&layer(2, true)), Ok(()));
        assert_eq!(indicator.buffer(), &before);
        assert_eq!(indicator.device().write_count(), 0);
    }

    #[test]
    fn test_invalid_event_keeps_buffer() {
        let mut indicator = indicator(IndicatorConfig::DEFAULT);
        indicator.handle_event(&layer(1, true)).ok();
        let before = indicator.buffer().clone();

        let result = indicator.on_event(&Event::Other(7));
        assert_eq!(result, Err(Error::InvalidEvent));
        assert_eq!(status(&result), -22);
        assert_eq!(indicator.buffer(), &before);
        assert_eq!(indicator.device().write_count(), 1);
    }

    #[test]
    fn test_repeated_event_rewrites_same_frame() {
        let mut indicator = indicator(IndicatorConfig::DEFAULT);
        indicator.handle_event(&layer(1, true)).ok();
        indicator.handle_event(&layer(1, true)).ok();

        let writes = indicator.device().writes();
        assert_eq!(writes.len(), 2);
        assert_eq!(writes[0], writes[1]);
        assert_eq!(writes[1].iter().filter(|pixel| **pixel == RED).count(), 1);
        assert_eq!(indicator.state(), LayerState::Active);
    }

    #[test]
    fn test_not_ready_still_updates_buffer() {
        let mut indicator = indicator(IndicatorConfig::DEFAULT);
        indicator.device_mut().ready = false;

        assert_eq!(indicator.show(Scene::Highlight), Err(Error::DeviceNotReady));
        assert_eq!(indicator.buffer()[0], RED);
        assert_eq!(indicator.device().write_count(), 0);

        // Listener contract: transient write failures are not reported
        assert_eq!(indicator.on_event(&layer(1, false)), Ok(()));
        assert_eq!(indicator.buffer()[0], OFF);

        indicator.device_mut().ready = true;
        indicator.handle_event(&layer(1, true)).ok();
        assert_eq!(indicator.device().last_write().as_deref(), Some(indicator.buffer().as_slice()));
    }

    #[test]
    fn test_driver_failure_is_reported_by_show() {
        let mut indicator = indicator(IndicatorConfig::DEFAULT);
        indicator.device_mut().fail_with = Some(-5);

        assert_eq!(indicator.show(Scene::Highlight), Err(Error::WriteFailed(-5)));
        assert_eq!(indicator.buffer()[0], RED);
    }
}
