//! Adapters for emitting masked JSON through `tracing`.
//!
//! The masked document is logged as a display string, which works with any
//! tracing subscriber. As with the slog adapter, logging is infallible:
//! mapping failures degrade to a placeholder string.
//!
//! # Example
//! ```ignore
//! use jsonmask::tracing::TracingMaskedExt;
//!
//! tracing::info!(payload = %payment.tracing_masked(&config));
//! ```

use serde::Serialize;
use tracing::field::{DisplayValue, display};

use crate::{config::MaskingConfig, engine, json};

/// Extension trait for logging masked values as tracing field values.
pub trait TracingMaskedExt: Serialize + Sized {
    /// Masks `self` under `config` and wraps the serialized result for use
    /// as a `tracing` field value.
    fn tracing_masked(&self, config: &MaskingConfig) -> DisplayValue<String> {
        let text = json::to_value(self)
            .and_then(|tree| json::to_string(&engine::mask(&tree, config)))
            .unwrap_or_else(|err| format!("Failed to serialize value for masking: {err}"));
        display(text)
    }
}

impl<T> TracingMaskedExt for T where T: Serialize {}
