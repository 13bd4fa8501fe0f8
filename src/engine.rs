//! The masking traversal.
//!
//! [`mask`] walks a [`Value`] tree depth-first and produces a fresh tree with
//! exactly the same shape: same object keys in the same order, same array
//! lengths, same nesting. Only scalar contents change, and only where the
//! configuration says they should.
//!
//! Decisions are context-dependent:
//!
//! - an object member is judged by its own key;
//! - an array element inherits the field name of the enclosing container,
//!   through arbitrarily nested arrays;
//! - an object nested inside an array or another object starts a fresh
//!   context, so its members are judged by their own keys;
//! - a bare scalar document has no field name and is governed by
//!   [`MaskingConfig::should_mask_scalar_root`].
//!
//! The traversal is a pure function of `(value, config)`: no side effects, no
//! I/O, no shared state. Concurrent calls on independent inputs need no
//! coordination. Recursion depth is bounded by input depth; documents that
//! arrive as text are already depth-limited at the parse boundary.

use crate::{
    config::MaskingConfig,
    value::{Map, Value},
};

/// Masks `value` according to `config`, returning a fresh tree.
///
/// The input is never mutated. Total over all well-formed trees: masking
/// itself cannot fail.
///
/// # Example
///
/// ```rust
/// use jsonmask::{mask, MaskingConfig};
///
/// let config = MaskingConfig::whitelist().add_field("id").build();
/// let document = jsonmask::json::parse(r#"{"id":7,"name":"Ada"}"#).unwrap();
///
/// let masked = mask(&document, &config);
/// assert_eq!(masked.get("id").unwrap().as_number().unwrap().as_str(), "7");
/// assert_eq!(masked.get("name").unwrap().as_str(), Some("*****"));
/// ```
#[must_use]
pub fn mask(value: &Value, config: &MaskingConfig) -> Value {
    mask_node(value, "", config)
}

/// Transforms one node. `enclosing_field` is the field name of the container
/// this node sits in, or `""` at the document root.
fn mask_node(value: &Value, enclosing_field: &str, config: &MaskingConfig) -> Value {
    match value {
        // Masking never hides the absence of a value.
        Value::Null => Value::Null,
        // Each member is governed by its own key; the object's enclosing
        // context is irrelevant here.
        Value::Object(members) => Value::Object(
            members
                .iter()
                .map(|(key, child)| (key.clone(), mask_member(child, key, config)))
                .collect::<Map>(),
        ),
        // Every element inherits the enclosing field name unchanged, nested
        // arrays included.
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| mask_member(item, enclosing_field, config))
                .collect(),
        ),
        // Only reachable for a bare scalar document: members and elements are
        // intercepted by mask_member below.
        scalar => {
            if config.should_mask_scalar_root() {
                mask_scalar(scalar, config)
            } else {
                scalar.clone()
            }
        }
    }
}

/// Decides the fate of an object member or array element. `field_name` is the
/// member's own key, or the propagated name of the enclosing array.
fn mask_member(value: &Value, field_name: &str, config: &MaskingConfig) -> Value {
    match value {
        Value::Null => Value::Null,
        // The array keeps the field name it was reached under.
        Value::Array(_) => mask_node(value, field_name, config),
        // Nested objects start a fresh context; their members are judged on
        // their own keys, not the parent's.
        Value::Object(_) => mask_node(value, "", config),
        scalar => {
            if config.should_mask(field_name) {
                mask_scalar(scalar, config)
            } else {
                scalar.clone()
            }
        }
    }
}

/// Replaces a scalar with the configured mask for its kind, or JSON null when
/// no replacement is configured for that kind.
///
/// Numbers dispatch on literal shape, never on magnitude: a 128-bit integer
/// literal takes the integer mask, `42.0` takes the decimal mask.
fn mask_scalar(value: &Value, config: &MaskingConfig) -> Value {
    match value {
        Value::Bool(_) => config.boolean_mask().map_or(Value::Null, Value::Bool),
        Value::String(_) => config
            .string_mask()
            .map_or(Value::Null, |mask| Value::String(mask.to_owned())),
        Value::Number(number) => {
            let mask = if number.is_decimal_shaped() {
                config.decimal_mask()
            } else {
                config.number_mask()
            };
            mask.map_or(Value::Null, |mask| Value::Number(mask.clone()))
        }
        // Null, arrays and objects never reach scalar masking.
        other => other.clone(),
    }
}
