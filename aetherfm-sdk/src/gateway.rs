//! The never-failing call surface
//!
//! Every operation performs exactly one remote call (compositions perform a
//! fixed sequence of them) and collapses the internal `Result` into a plain
//! value: the decoded reply on success, a documented fallback otherwise.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;

use aetherfm_api::operations::*;
use aetherfm_api::{ApiError, Gate, GateOperation, IpcClient};
use aetherfm_state::{PlaybackStatus, RemoteCapability, VolumeLevel};
use ipc_transport::{StatusHandler, Transport};

use crate::config::GatewayConfig;
use crate::favorites::{resolve_first_non_empty, FavoritesCollection};
use crate::registry::SubscriptionRegistry;
use crate::status::{StatusCallback, StatusEvent};
use crate::SdkError;

/// What `toggle_or_resume` managed to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackToggle {
    /// `TogglePlayStop` succeeded
    Toggled,
    /// The toggle failed and `ResumeLast` succeeded
    Resumed,
    /// Nothing succeeded; playback is as it was
    Unchanged,
}

impl PlaybackToggle {
    /// Whether playback is now expected to be running
    pub fn now_playing(&self, was_playing: bool) -> bool {
        match self {
            PlaybackToggle::Toggled => !was_playing,
            PlaybackToggle::Resumed => true,
            PlaybackToggle::Unchanged => was_playing,
        }
    }
}

/// Resilient adapter over an AetherFM transport
///
/// Read operations take `&self`. Operations that change the subscription
/// set take `&mut self`, which keeps the registry on one control thread.
/// The gateway is `Send` but not `Sync`.
///
/// # Example
/// ```rust,ignore
/// let mut gateway = CallGateway::new(transport);
/// if gateway.is_available() {
///     gateway.play_by_name("Jazz FM");
/// }
/// let snapshot = gateway.capture();
/// println!("{}", snapshot.display_label());
/// ```
pub struct CallGateway {
    client: IpcClient,
    config: GatewayConfig,
    registry: SubscriptionRegistry,
    events_tx: Sender<StatusEvent>,
    events_rx: Receiver<StatusEvent>,
    disposed: bool,
}

impl CallGateway {
    /// Create a gateway with the default configuration
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self::build(transport, GatewayConfig::default())
    }

    /// Create a gateway with a custom configuration
    pub fn with_config(transport: Arc<dyn Transport>, config: GatewayConfig) -> Result<Self, SdkError> {
        config.validate()?;
        Ok(Self::build(transport, config))
    }

    fn build(transport: Arc<dyn Transport>, config: GatewayConfig) -> Self {
        let (events_tx, events_rx) = mpsc::channel();
        tracing::debug!(namespace = %config.namespace, "creating AetherFM gateway");

        Self {
            client: IpcClient::with_namespace(transport, config.namespace.clone()),
            config,
            registry: SubscriptionRegistry::new(),
            events_tx,
            events_rx,
            disposed: false,
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    fn invoke<Op: GateOperation>(&self, op: &'static str, args: Op::Args, fallback: Op::Output) -> Op::Output {
        safe_invoke(op, Op::GATE, fallback, || self.client.execute::<Op>(&args))
    }

    // Versioning & health

    /// Remote IPC protocol version, 0 when unknown
    pub fn query_version(&self) -> i32 {
        self.invoke::<IpcVersionOperation>("query_version", (), 0)
    }

    /// Remote feature bit set, 0 when unknown
    pub fn query_feature_flags(&self) -> i32 {
        self.invoke::<FeatureFlagsOperation>("query_feature_flags", (), 0)
    }

    pub fn query_ready(&self) -> bool {
        self.invoke::<IsReadyOperation>("query_ready", (), false)
    }

    /// Ready and speaking a supported protocol version
    ///
    /// The version is only queried once the remote side reports ready.
    pub fn is_available(&self) -> bool {
        self.query_ready() && self.query_version() >= aetherfm_state::MIN_SUPPORTED_VERSION
    }

    /// Version, feature flags and readiness, each falling back on its own
    pub fn query_capability(&self) -> RemoteCapability {
        RemoteCapability {
            version: self.query_version(),
            feature_flags: self.query_feature_flags(),
            ready: self.query_ready(),
        }
    }

    // State & info

    pub fn current_station(&self) -> String {
        self.invoke::<GetCurrentStationOperation>("current_station", (), None)
            .unwrap_or_default()
    }

    pub fn current_station_url(&self) -> String {
        self.invoke::<GetCurrentStationUrlOperation>("current_station_url", (), None)
            .unwrap_or_default()
    }

    /// Raw status string ("Playing", "Paused", "Stopped", or anything else)
    pub fn status(&self) -> String {
        self.invoke::<GetStatusOperation>("status", (), None)
            .unwrap_or_default()
    }

    pub fn playback_status(&self) -> PlaybackStatus {
        PlaybackStatus::from_status(&self.status())
    }

    // Controls & UI

    pub fn play(&self) -> bool {
        self.invoke::<PlayOperation>("play", (), false)
    }

    pub fn pause(&self) -> bool {
        self.invoke::<PauseOperation>("pause", (), false)
    }

    pub fn stop(&self) -> bool {
        self.invoke::<StopOperation>("stop", (), false)
    }

    pub fn resume_last(&self) -> bool {
        self.invoke::<ResumeLastOperation>("resume_last", (), false)
    }

    pub fn toggle_play_pause(&self) -> bool {
        self.invoke::<TogglePlayStopOperation>("toggle_play_pause", (), false)
    }

    pub fn open_window(&self) -> bool {
        self.invoke::<OpenWindowOperation>("open_window", (), false)
    }

    pub fn toggle_window(&self) -> bool {
        self.invoke::<ToggleWindowOperation>("toggle_window", (), false)
    }

    pub fn open_mini_player(&self) -> bool {
        self.invoke::<OpenMiniPlayerOperation>("open_mini_player", (), false)
    }

    pub fn toggle_mini_player(&self) -> bool {
        self.invoke::<ToggleMiniPlayerOperation>("toggle_mini_player", (), false)
    }

    /// Toggle playback, resuming the last station if that fails while stopped
    ///
    /// `ResumeLast` is only tried when `was_playing` is false and the toggle
    /// did not succeed.
    pub fn toggle_or_resume(&self, was_playing: bool) -> PlaybackToggle {
        if self.toggle_play_pause() {
            return PlaybackToggle::Toggled;
        }
        if !was_playing && self.resume_last() {
            return PlaybackToggle::Resumed;
        }
        tracing::debug!(was_playing, "no playback toggle available");
        PlaybackToggle::Unchanged
    }

    // Direct play

    pub fn play_by_url(&self, url: &str) -> bool {
        self.invoke::<PlayByUrlOperation>("play_by_url", (url.to_string(),), false)
    }

    pub fn play_by_name(&self, name: &str) -> bool {
        self.invoke::<PlayByNameOperation>("play_by_name", (name.to_string(),), false)
    }

    // Favorites

    /// Favorite station URLs
    pub fn favorites(&self) -> Vec<String> {
        self.invoke::<GetFavoritesOperation>("favorites", (), None)
            .unwrap_or_default()
    }

    /// Favorite display names from the first configured source that has any
    pub fn favorite_names(&self) -> Vec<String> {
        resolve_first_non_empty(&self.config.favorite_name_sources, |gate| {
            let names: Option<Vec<String>> = safe_invoke("favorite_names", gate, None, || {
                self.client.call(gate, Vec::new())
            });
            names.unwrap_or_default()
        })
    }

    /// URLs and names together; the two lists are not aligned by position
    pub fn favorites_collection(&self) -> FavoritesCollection {
        FavoritesCollection::new(self.favorites(), self.favorite_names())
    }

    pub fn add_favorite(&self, url: &str) -> bool {
        self.invoke::<AddFavoriteOperation>("add_favorite", (url.to_string(),), false)
    }

    pub fn remove_favorite(&self, url: &str) -> bool {
        self.invoke::<RemoveFavoriteOperation>("remove_favorite", (url.to_string(),), false)
    }

    // Volume

    /// Current volume, clamped; 0 when unknown
    pub fn volume(&self) -> VolumeLevel {
        VolumeLevel::new(self.invoke::<GetVolumeOperation>("volume", (), 0.0))
    }

    /// Set the volume; `value` is clamped into `[0, 1]` before the call
    pub fn set_volume(&self, value: f32) -> bool {
        let level = VolumeLevel::new(value);
        self.invoke::<SetVolumeOperation>("set_volume", (level.value(),), false)
    }

    /// Read the volume, then write it back moved by `delta`
    pub fn step_volume(&self, delta: f32) -> bool {
        let target = self.volume().step(delta);
        self.set_volume(target.value())
    }

    pub fn volume_up(&self) -> bool {
        self.step_volume(self.config.volume_step)
    }

    pub fn volume_down(&self) -> bool {
        self.step_volume(-self.config.volume_step)
    }

    // Status events

    /// Register `callback` for status changes
    ///
    /// Absent callbacks, and any callback after [`dispose`](Self::dispose),
    /// are refused without a remote call. The callback is tracked only once
    /// the remote side accepts it; tracking an identity twice is a no-op.
    pub fn subscribe_status_changed(&mut self, callback: Option<&StatusCallback>) -> bool {
        let Some(callback) = callback else {
            return false;
        };
        if self.disposed {
            tracing::warn!(callback = %callback.id(), "gateway disposed, refusing subscription");
            return false;
        }

        let id = callback.id();
        let sender = self.events_tx.clone();
        let handler: StatusHandler = Arc::new(move |status: String| {
            // receiver is gone once the gateway is dropped
            let _ = sender.send(StatusEvent::new(id, status));
        });

        let accepted = safe_invoke("subscribe_status_changed", Gate::SubscribeStatusChanged, false, || {
            self.client.register_status_handler(id, handler)
        });
        if accepted {
            self.registry.insert(callback);
        }
        accepted
    }

    /// Unregister `callback`
    ///
    /// The callback stops being tracked only when the remote side confirms
    /// the removal. A refusal or a failed call leaves it tracked, so
    /// [`dispose`](Self::dispose) still offers it a teardown.
    pub fn unsubscribe_status_changed(&mut self, callback: Option<&StatusCallback>) -> bool {
        let Some(callback) = callback else {
            return false;
        };
        let id = callback.id();

        let removed = safe_invoke("unsubscribe_status_changed", Gate::UnsubscribeStatusChanged, false, || {
            self.client.unregister_status_handler(id)
        });
        if removed {
            self.registry.remove(id);
        }
        removed
    }

    pub fn is_subscribed(&self, callback: &StatusCallback) -> bool {
        self.registry.contains(callback.id())
    }

    pub fn subscription_count(&self) -> usize {
        self.registry.len()
    }

    /// Deliver queued status events to their callbacks on this thread
    ///
    /// Never blocks. Events addressed to callbacks no longer tracked are
    /// dropped; a panicking callback is logged and does not stop delivery.
    /// Returns the events that reached a callback.
    pub fn dispatch_status_events(&self) -> Vec<StatusEvent> {
        let pending: Vec<StatusEvent> = self.events_rx.try_iter().collect();
        let mut delivered = Vec::with_capacity(pending.len());

        for event in pending {
            let Some(callback) = self.registry.get(event.callback) else {
                tracing::debug!(callback = %event.callback, "dropping status event for untracked callback");
                continue;
            };

            let outcome = panic::catch_unwind(AssertUnwindSafe(|| callback.call(&event.status)));
            if let Err(payload) = outcome {
                tracing::warn!(
                    callback = %event.callback,
                    error = %panic_message(payload.as_ref()),
                    "status callback panicked"
                );
                continue;
            }
            delivered.push(event);
        }

        delivered
    }

    // Lifecycle

    /// Unregister every tracked callback and clear the registry
    ///
    /// Runs its teardown once; later calls do nothing. Never fails.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;

        let client = &self.client;
        let report = self.registry.teardown_all(|callback| {
            let id = callback.id();
            safe_invoke("dispose", Gate::UnsubscribeStatusChanged, false, || {
                client.unregister_status_handler(id)
            })
        });

        tracing::info!(
            attempted = report.attempted,
            failed = report.failed,
            "AetherFM gateway disposed"
        );
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl std::fmt::Debug for CallGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallGateway")
            .field("client", &self.client)
            .field("subscriptions", &self.registry.len())
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}

impl Drop for CallGateway {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Run `call` once and collapse its outcome into a value
///
/// Errors and panics from the transport both yield `fallback`.
pub(crate) fn safe_invoke<T, F>(op: &'static str, gate: Gate, fallback: T, call: F) -> T
where
    F: FnOnce() -> aetherfm_api::Result<T>,
{
    let outcome = panic::catch_unwind(AssertUnwindSafe(call)).unwrap_or_else(|payload| {
        Err(ApiError::Panicked {
            gate,
            message: panic_message(payload.as_ref()),
        })
    });

    match outcome {
        Ok(value) => {
            tracing::debug!(op, gate = gate.name(), "call succeeded");
            value
        }
        Err(err) => {
            tracing::warn!(
                op,
                gate = gate.name(),
                category = ?gate.category(),
                error = %err,
                "call failed, using fallback"
            );
            fallback
        }
    }
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipc_transport::{LocalBus, Route, TransportError};
    use serde_json::json;

    fn gateway() -> (Arc<LocalBus>, CallGateway) {
        let bus = Arc::new(LocalBus::new());
        let gateway = CallGateway::new(bus.clone());
        (bus, gateway)
    }

    #[test]
    fn test_safe_invoke_returns_value() {
        let value = safe_invoke("test", Gate::IpcVersion, 0, || Ok(3));
        assert_eq!(value, 3);
    }

    #[test]
    fn test_safe_invoke_falls_back_on_error() {
        let value = safe_invoke("test", Gate::IpcVersion, 0, || {
            Err(TransportError::Disconnected.into())
        });
        assert_eq!(value, 0);
    }

    #[test]
    fn test_safe_invoke_falls_back_on_panic() {
        let value: bool = safe_invoke("test", Gate::Play, false, || panic!("transport blew up"));
        assert!(!value);
    }

    #[test]
    fn test_panic_message() {
        let payload = panic::catch_unwind(|| panic!("boom")).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "boom");

        let payload = panic::catch_unwind(|| panic!("{} {}", "formatted", 1)).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "formatted 1");
    }

    #[test]
    fn test_null_string_reads_as_empty() {
        let (bus, gateway) = gateway();
        bus.provide_value("AetherFM.GetCurrentStation", serde_json::Value::Null);
        assert_eq!(gateway.current_station(), "");
    }

    #[test]
    fn test_set_volume_clamps_before_call() {
        let (bus, gateway) = gateway();
        bus.provide("AetherFM.SetVolume", |args| Ok(json!(args == [json!(1.0)])));

        assert!(gateway.set_volume(7.5));
    }

    #[test]
    fn test_step_volume_reads_then_writes() {
        let (bus, gateway) = gateway();
        bus.provide_value("AetherFM.GetVolume", json!(0.5));
        bus.provide("AetherFM.SetVolume", |args| Ok(json!(args == [json!(0.75)])));

        assert!(gateway.step_volume(0.25));
        assert_eq!(bus.attempts(&Route::call("AetherFM.GetVolume")), 1);
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let bus = Arc::new(LocalBus::new());
        let config = GatewayConfig::new().with_volume_step(2.0);
        assert!(matches!(
            CallGateway::with_config(bus, config),
            Err(SdkError::Config(_))
        ));
    }

    #[test]
    fn test_custom_namespace_routes_calls() {
        let bus = Arc::new(LocalBus::new());
        bus.provide_value("AetherFM.Beta.IsReady", json!(true));
        let gateway =
            CallGateway::with_config(bus.clone(), GatewayConfig::new().with_namespace("AetherFM.Beta"))
                .unwrap();

        assert!(gateway.query_ready());
    }

    #[test]
    fn test_playback_toggle_now_playing() {
        assert!(PlaybackToggle::Toggled.now_playing(false));
        assert!(!PlaybackToggle::Toggled.now_playing(true));
        assert!(PlaybackToggle::Resumed.now_playing(false));
        assert!(PlaybackToggle::Unchanged.now_playing(true));
        assert!(!PlaybackToggle::Unchanged.now_playing(false));
    }

    #[test]
    fn test_dispose_is_idempotent() {
        let (bus, mut gateway) = gateway();
        let cb = StatusCallback::new(|_| {});
        assert!(gateway.subscribe_status_changed(Some(&cb)));

        gateway.dispose();
        gateway.dispose();
        drop(gateway);

        assert_eq!(bus.attempts(&Route::unregister("AetherFM.UnsubscribeStatusChanged")), 1);
    }
}
