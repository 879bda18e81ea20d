//! Assembling a [`StateSnapshot`] from live reads

use std::panic::{self, AssertUnwindSafe};

use aetherfm_state::StateSnapshot;
use chrono::Utc;

use crate::gateway::{panic_message, CallGateway};

impl CallGateway {
    /// Read the remote state into an immutable snapshot
    ///
    /// Performs availability, status, station name, station URL and volume
    /// reads in that order, then stamps the completion time. A remote that
    /// is not available yields the Unavailable snapshot, as does any failure
    /// of the aggregation itself.
    pub fn capture(&self) -> StateSnapshot {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            let ready = self.is_available();
            let status = self.status();
            let station_name = self.current_station();
            let station_url = self.current_station_url();
            let volume = self.volume();
            let captured_at = Utc::now();

            if !ready {
                return StateSnapshot::unavailable(captured_at);
            }
            StateSnapshot::new(ready, status, station_name, station_url, volume.value(), captured_at)
        }));

        outcome.unwrap_or_else(|payload| {
            tracing::warn!(error = %panic_message(payload.as_ref()), "snapshot aggregation failed");
            StateSnapshot::unavailable(Utc::now())
        })
    }
}
