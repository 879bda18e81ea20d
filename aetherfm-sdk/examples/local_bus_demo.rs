//! Drive an in-process AetherFM stand-in through the gateway
//!
//! Shows the never-failing call surface, snapshot rendering and status
//! events emitted from another thread but delivered on this one.
//!
//! Run with: cargo run -p aetherfm-sdk --example local_bus_demo
//! Set AETHERFM_LOG_MODE=debug to see every call.

use std::sync::{Arc, Mutex};
use std::thread;

use aetherfm_sdk::logging::init_logging_from_env;
use aetherfm_sdk::{CallGateway, LocalBus, SdkError, StationTracker, StatusCallback, TransportError};
use serde_json::{json, Value};

fn fake_player() -> Arc<LocalBus> {
    let bus = Arc::new(LocalBus::new());
    let station = Arc::new(Mutex::new(String::new()));

    bus.provide_value("AetherFM.IsReady", json!(true));
    bus.provide_value("AetherFM.IpcVersion", json!(1));
    bus.provide_value("AetherFM.GetStatus", json!("Playing"));
    bus.provide_value("AetherFM.GetVolume", json!(0.42));
    bus.provide_value("AetherFM.GetFavoriteNames", json!(["Jazz FM", "Lo-Fi Beats"]));

    let current = Arc::clone(&station);
    bus.provide("AetherFM.PlayByName", move |args| {
        let name = args.first().and_then(Value::as_str).unwrap_or_default();
        let mut station = current
            .lock()
            .map_err(|e| TransportError::Remote(e.to_string()))?;
        *station = name.to_string();
        Ok(json!(!name.is_empty()))
    });
    let current = Arc::clone(&station);
    bus.provide("AetherFM.GetCurrentStation", move |_| {
        let station = current
            .lock()
            .map_err(|e| TransportError::Remote(e.to_string()))?;
        Ok(json!(*station))
    });

    bus
}

fn main() -> Result<(), SdkError> {
    init_logging_from_env()?;

    println!("AetherFM Gateway - Local Bus Demo");
    println!("=================================");

    let bus = fake_player();
    let mut gateway = CallGateway::new(bus.clone());

    let capability = gateway.query_capability();
    println!("Remote version {} (ready: {})", capability.version, capability.ready);

    let names = gateway.favorite_names();
    println!("Favorites: {}", names.join(", "));

    if let Some(first) = names.first() {
        println!("Playing {first}: {}", gateway.play_by_name(first));
    }

    // Gates the stand-in does not serve answer with fallbacks
    println!("Toggle mini player: {}", gateway.toggle_mini_player());

    let snapshot = gateway.capture();
    println!("\nToolbar: {}", snapshot.display_label());
    println!("Volume:  {}%", snapshot.volume_percentage());

    let on_status = StatusCallback::new(|status| println!("  status callback: {status}"));
    gateway.subscribe_status_changed(Some(&on_status));

    let remote = Arc::clone(&bus);
    thread::spawn(move || {
        remote.emit("AetherFM.SubscribeStatusChanged", "Playing");
        remote.emit("AetherFM.SubscribeStatusChanged", "Stopped");
    })
    .join()
    .ok();

    println!("\nDispatching status events:");
    let mut tracker = StationTracker::new();
    for event in gateway.dispatch_status_events() {
        let status = tracker.observe(&gateway, &event.status);
        println!("  tracked {:?}, last station: {}", status, tracker.last_name().unwrap_or("-"));
    }

    gateway.dispose();
    println!("\nDisposed; subscriptions left: {}", gateway.subscription_count());

    Ok(())
}
