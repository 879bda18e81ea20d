//! Typed gate operations
//!
//! Each remote call is described by a zero-sized type implementing
//! [`GateOperation`]: the gate it targets, the argument tuple it sends and
//! the type its reply must decode into. [`define_gate_operation!`] removes
//! the boilerplate for the common case.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::gate::Gate;

/// Base trait for all AetherFM gate operations
pub trait GateOperation {
    /// Argument tuple, `()` for gates without parameters
    type Args: Serialize;

    /// Reply type; use `Option<T>` where the remote side may answer null
    type Output: DeserializeOwned;

    /// The gate this operation calls
    const GATE: Gate;

    /// Turn the argument tuple into the transport's positional list
    fn encode_args(args: &Self::Args) -> Result<Vec<Value>> {
        let value = serde_json::to_value(args).map_err(|e| ApiError::Encode {
            gate: Self::GATE,
            message: e.to_string(),
        })?;

        Ok(match value {
            Value::Null => Vec::new(),
            Value::Array(items) => items,
            other => vec![other],
        })
    }

    /// Decode the transport reply into the declared output type
    fn decode_output(reply: Value) -> Result<Self::Output> {
        serde_json::from_value(reply).map_err(|e| ApiError::Decode {
            gate: Self::GATE,
            message: e.to_string(),
        })
    }
}

/// Declare a gate operation type
///
/// # Example
/// ```rust,ignore
/// define_gate_operation! {
///     /// Start playback
///     PlayOperation => Play() -> bool
/// }
///
/// define_gate_operation! {
///     PlayByUrlOperation => PlayByUrl(String) -> bool
/// }
/// ```
#[macro_export]
macro_rules! define_gate_operation {
    ($(#[$meta:meta])* $op:ident => $gate:ident ( $($arg:ty),* $(,)? ) -> $out:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $op;

        impl $crate::operation::GateOperation for $op {
            type Args = ($($arg,)*);
            type Output = $out;

            const GATE: $crate::gate::Gate = $crate::gate::Gate::$gate;
        }
    };
}
