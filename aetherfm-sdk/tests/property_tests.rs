//! Property-based tests for volume handling through the gateway

use std::sync::{Arc, Mutex};

use aetherfm_sdk::{CallGateway, LocalBus};
use proptest::prelude::*;
use serde_json::json;

/// Bus whose volume gates behave like a real mixer: whatever is set is read back
fn mixer_bus() -> Arc<LocalBus> {
    let bus = Arc::new(LocalBus::new());
    let level = Arc::new(Mutex::new(json!(0.0)));

    let stored = Arc::clone(&level);
    bus.provide("AetherFM.SetVolume", move |args| {
        *stored.lock().unwrap() = args[0].clone();
        Ok(json!(true))
    });
    let stored = Arc::clone(&level);
    bus.provide("AetherFM.GetVolume", move |_| Ok(stored.lock().unwrap().clone()));

    bus
}

fn any_volume() -> impl Strategy<Value = f32> {
    prop_oneof![
        any::<f32>(),
        -2.0f32..3.0f32,
        Just(f32::NAN),
        Just(f32::INFINITY),
        Just(f32::NEG_INFINITY),
    ]
}

proptest! {
    #[test]
    fn prop_set_then_get_stays_in_range(value in any_volume()) {
        let gateway = CallGateway::new(mixer_bus());

        prop_assert!(gateway.set_volume(value));
        let read = gateway.volume().value();
        prop_assert!((0.0..=1.0).contains(&read));
    }

    #[test]
    fn prop_in_range_values_survive_round_trip(value in 0.0f32..=1.0f32) {
        let gateway = CallGateway::new(mixer_bus());

        gateway.set_volume(value);
        prop_assert_eq!(gateway.volume().value(), value);
    }

    #[test]
    fn prop_stepping_never_leaves_range(start in 0.0f32..=1.0f32, delta in -2.0f32..2.0f32) {
        let gateway = CallGateway::new(mixer_bus());
        gateway.set_volume(start);

        prop_assert!(gateway.step_volume(delta));
        let read = gateway.volume().value();
        prop_assert!((0.0..=1.0).contains(&read));
    }
}
