//! Typed API for the AetherFM IPC gates
//!
//! This crate describes every gate the AetherFM service publishes and
//! provides [`IpcClient`] to execute them over any
//! [`ipc_transport::Transport`]. Calls here fail loudly with [`ApiError`];
//! the never-failing surface lives in `aetherfm-sdk`.
//!
//! ```rust,ignore
//! use aetherfm_api::{IpcClient, operations::{PlayByNameOperation, GetVolumeOperation}};
//!
//! let client = IpcClient::new(transport);
//! client.execute::<PlayByNameOperation>(&("Jazz FM".to_string(),))?;
//! let volume = client.execute::<GetVolumeOperation>(&())?;
//! ```

pub mod client;
pub mod error;
pub mod gate;
pub mod operation;
pub mod operations;

pub use client::IpcClient;
pub use error::{ApiError, Result};
pub use gate::{Gate, GateCategory, DEFAULT_NAMESPACE};
pub use operation::GateOperation;
