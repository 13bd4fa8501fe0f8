//! Shape-preserving masking of sensitive values in JSON documents.
//!
//! This crate separates:
//! - **Value model**: a closed, library-agnostic JSON tree ([`Value`],
//!   [`Number`]).
//! - **Configuration**: a whitelist or blacklist of field names plus
//!   per-kind replacement values ([`MaskingConfig`]).
//! - **Engine**: the traversal that replaces scalars with type-appropriate
//!   masks while keeping the document's shape intact ([`mask`]).
//!
//! What this crate does:
//! - masks strings, numbers and booleans by unqualified field name, at any
//!   nesting depth
//! - preserves object key order, array lengths and numeric literal shape
//!   (integer vs. decimal form, at any magnitude)
//! - provides a `serde_json` binding and slog/tracing adapters behind
//!   feature flags
//!
//! What it does not do:
//! - validate documents against a schema
//! - restore masked values
//! - partially redact strings or select fields by path
//!
//! # Example
//!
//! ```rust
//! use jsonmask::{json::JsonMasker, MaskingConfig};
//!
//! let masker = JsonMasker::new(
//!     MaskingConfig::whitelist().add_fields(["id", "status"]).build(),
//! );
//!
//! let masked = masker
//!     .mask_str(r#"{"id":"o-17","status":"paid","card":"4111111111111111","total":99.5}"#)
//!     .unwrap();
//! assert_eq!(
//!     masked,
//!     r#"{"id":"o-17","status":"paid","card":"*****","total":0.0}"#
//! );
//! ```

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::cargo_common_metadata
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::unwrap_used))]

// Module declarations
mod config;
mod engine;
#[cfg(feature = "json")]
pub mod json;
#[cfg(feature = "slog")]
pub mod slog;
#[cfg(feature = "tracing")]
pub mod tracing;
mod value;

// Re-exports from the configuration module
pub use config::{
    DEFAULT_BOOLEAN_MASK, DEFAULT_DECIMAL_MASK, DEFAULT_NUMBER_MASK, DEFAULT_STRING_MASK,
    MaskingConfig, MaskingConfigBuilder, Strategy,
};
// Re-exports from the engine
pub use engine::mask;
#[cfg(feature = "json")]
pub use json::{JsonMasker, MaskError};
// Re-exports from the value model
pub use value::{Map, Number, Value};
