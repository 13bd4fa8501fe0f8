//! Adapters for emitting masked JSON through `slog`.
//!
//! This module connects the masking engine with `slog` by providing a
//! `slog::Value` implementation that serializes the masked document as
//! structured JSON via `slog`'s nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation is derived from the masked tree,
//!   never from the original value.
//! - Avoiding fallible logging APIs: mapping failures are represented as
//!   placeholder strings rather than propagated as errors.
//!
//! It does not configure `slog` or define masking policy.
//!
//! # Example
//! ```ignore
//! use jsonmask::slog::SlogMaskedExt;
//!
//! info!(logger, "payment received"; "payload" => payment.slog_masked(&config));
//! ```

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{config::MaskingConfig, engine, json};

/// An already-masked JSON document, ready to be logged as a nested value.
#[derive(Clone, Debug)]
pub struct MaskedJson {
    value: JsonValue,
}

impl MaskedJson {
    /// Wraps a masked `serde_json::Value`.
    #[must_use]
    pub fn new(value: JsonValue) -> Self {
        Self { value }
    }

    /// Returns the masked JSON value.
    #[must_use]
    pub fn value(&self) -> &JsonValue {
        &self.value
    }
}

impl SlogValue for MaskedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Extension trait for ergonomic slog logging of masked values.
///
/// Calling `slog_masked` maps the value into the JSON value model, runs the
/// masking engine, and stores the masked result. The original (unmasked)
/// value is not serialized into the log record.
pub trait SlogMaskedExt: Serialize + Sized {
    /// Masks `self` under `config` and returns a `slog::Value` that
    /// serializes as structured JSON.
    ///
    /// If mapping `self` into the JSON value model fails, the returned value
    /// stores a JSON string describing the failure instead.
    fn slog_masked(&self, config: &MaskingConfig) -> MaskedJson {
        let masked = match json::to_value(self) {
            Ok(tree) => JsonValue::from(engine::mask(&tree, config)),
            Err(err) => JsonValue::String(format!("Failed to serialize value for masking: {err}")),
        };
        MaskedJson::new(masked)
    }
}

impl<T> SlogMaskedExt for T where T: Serialize {}
