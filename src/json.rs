//! The `serde_json` binding: parsing, serialization and object mapping.
//!
//! The engine itself is library-agnostic; this module is the one place a
//! concrete JSON library appears. It is responsible for:
//!
//! - turning JSON text into a [`Value`] tree ([`parse`]) and back
//!   ([`to_string`]), preserving member order and the exact numeric literals
//!   (`serde_json` is built with `preserve_order` and `arbitrary_precision`);
//! - mapping any `Serialize` type into a [`Value`] tree ([`to_value`]);
//! - the [`MaskError`] taxonomy for the failures that can occur at this
//!   boundary;
//! - [`JsonMasker`], the text-in/text-out convenience wrapper around the
//!   engine.
//!
//! It does not make masking decisions; those live in the engine and the
//! configuration.

use serde::Serialize;

use crate::{
    config::MaskingConfig,
    engine,
    value::{Number, Value},
};

// =============================================================================
// MaskError
// =============================================================================

/// Failures at the parsing/mapping/serialization boundary.
///
/// Masking an already well-formed tree never fails; these errors originate
/// from the collaborators around the engine and are never retried.
#[derive(Debug, thiserror::Error)]
pub enum MaskError {
    /// The input text is not syntactically valid JSON.
    #[error("invalid JSON")]
    InvalidJson(#[source] serde_json::Error),
    /// A value could not be mapped to or from the JSON value model.
    #[error("failed to mask value")]
    Masking(#[source] serde_json::Error),
}

// =============================================================================
// Parser / serializer / object mapper
// =============================================================================

/// Parses JSON text into a [`Value`] tree.
///
/// Fails with [`MaskError::InvalidJson`] on malformed input, carrying the
/// underlying parse failure as its source.
pub fn parse(json: &str) -> Result<Value, MaskError> {
    let raw: serde_json::Value = serde_json::from_str(json).map_err(MaskError::InvalidJson)?;
    Ok(raw.into())
}

/// Serializes a [`Value`] tree to JSON text.
///
/// Deterministic for a given tree: member order and numeric literals are
/// emitted exactly as the tree carries them.
pub fn to_string(value: &Value) -> Result<String, MaskError> {
    serde_json::to_string(&serde_json::Value::from(value)).map_err(MaskError::Masking)
}

/// Maps any `Serialize` type into a [`Value`] tree.
///
/// Dates, arbitrary-precision numbers and other domain types arrive however
/// their `Serialize` implementations encode them (typically strings or
/// decimal-shaped numbers). Values without a JSON representation (e.g. maps
/// with non-string keys) fail with [`MaskError::Masking`].
pub fn to_value<T: Serialize>(value: &T) -> Result<Value, MaskError> {
    let raw = serde_json::to_value(value).map_err(MaskError::Masking)?;
    Ok(raw.into())
}

// =============================================================================
// Conversions
// =============================================================================

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(value) => Value::Bool(value),
            // With arbitrary_precision the Display output is the exact
            // literal the number was parsed or serialized with.
            serde_json::Value::Number(number) => {
                Value::Number(Number::from_trusted_literal(number.to_string()))
            }
            serde_json::Value::String(text) => Value::String(text),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(members) => Value::Object(
                members
                    .into_iter()
                    .map(|(key, child)| (key, child.into()))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(value) => serde_json::Value::Bool(value),
            Value::Number(number) => serde_json::Value::Number(
                serde_json::Number::from_string_unchecked(number.as_str().to_owned()),
            ),
            Value::String(text) => serde_json::Value::String(text),
            Value::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            Value::Object(members) => serde_json::Value::Object(
                members
                    .into_iter()
                    .map(|(key, child)| (key, child.into()))
                    .collect(),
            ),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        value.clone().into()
    }
}

// =============================================================================
// JsonMasker
// =============================================================================

/// Text-in/text-out masking: parse or map, run the engine, serialize.
///
/// The configuration is taken once at construction; a `JsonMasker` is
/// immutable and can be shared across threads.
///
/// # Example
///
/// ```rust
/// use jsonmask::{json::JsonMasker, MaskingConfig};
///
/// let masker = JsonMasker::new(MaskingConfig::blacklist().add_field("cvv").build());
/// let masked = masker.mask_str(r#"{"pan":"4111111111111111","cvv":"123"}"#).unwrap();
/// assert_eq!(masked, r#"{"pan":"4111111111111111","cvv":"*****"}"#);
/// ```
#[derive(Clone, Debug)]
pub struct JsonMasker {
    config: MaskingConfig,
}

impl JsonMasker {
    /// Creates a masker with the given configuration.
    #[must_use]
    pub fn new(config: MaskingConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this masker applies.
    #[must_use]
    pub fn config(&self) -> &MaskingConfig {
        &self.config
    }

    /// Masks a JSON document given as text.
    ///
    /// Fails with [`MaskError::InvalidJson`] if `json` is malformed; masking
    /// a well-formed document cannot fail.
    pub fn mask_str(&self, json: &str) -> Result<String, MaskError> {
        let tree = parse(json)?;
        to_string(&engine::mask(&tree, &self.config))
    }

    /// Masks the JSON representation of any `Serialize` value.
    pub fn mask_serializable<T: Serialize>(&self, value: &T) -> Result<String, MaskError> {
        let tree = to_value(value)?;
        to_string(&engine::mask(&tree, &self.config))
    }
}
