//! Masking strategy, field selection and replacement values.
//!
//! A [`MaskingConfig`] is built once through [`MaskingConfigBuilder`] and is
//! immutable afterwards, so one configuration can be shared freely across
//! threads and reused for any number of masking calls.
//!
//! The configuration exposes exactly two predicates to the engine:
//! [`MaskingConfig::should_mask`] for named fields and
//! [`MaskingConfig::should_mask_scalar_root`] for bare scalar documents. The
//! engine never inspects the strategy itself.
//!
//! # Example
//!
//! ```rust
//! use jsonmask::MaskingConfig;
//!
//! let config = MaskingConfig::blacklist()
//!     .add_fields(["password", "token"])
//!     .with_string_mask("<hidden>".to_owned())
//!     .build();
//!
//! assert!(config.should_mask("password"));
//! assert!(!config.should_mask("username"));
//! ```

use std::collections::HashSet;

use crate::value::Number;

/// Replacement for masked strings unless overridden.
pub const DEFAULT_STRING_MASK: &str = "*****";

/// Replacement for masked integer-shaped numbers unless overridden.
pub const DEFAULT_NUMBER_MASK: i64 = 0;

/// Replacement for masked decimal-shaped numbers unless overridden.
pub const DEFAULT_DECIMAL_MASK: f64 = 0.0;

/// Replacement for masked booleans unless overridden.
pub const DEFAULT_BOOLEAN_MASK: bool = false;

// =============================================================================
// Strategy
// =============================================================================

/// Field selection policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Only fields in the configured set are shown unmasked; everything else,
    /// including bare scalar documents, is masked.
    Whitelist,
    /// Only fields in the configured set are masked; everything else,
    /// including bare scalar documents, is left visible.
    Blacklist,
}

// =============================================================================
// MaskingConfig
// =============================================================================

/// Immutable masking configuration: strategy, field set and per-kind
/// replacement values.
///
/// An absent replacement (`None`) masks that scalar kind to JSON null instead
/// of a typed value.
#[derive(Clone, Debug)]
pub struct MaskingConfig {
    strategy: Strategy,
    fields: HashSet<String>,
    string_mask: Option<String>,
    number_mask: Option<Number>,
    decimal_mask: Option<Number>,
    boolean_mask: Option<bool>,
}

impl MaskingConfig {
    /// Starts a whitelist configuration: mask everything not explicitly named.
    #[must_use]
    pub fn whitelist() -> MaskingConfigBuilder {
        MaskingConfigBuilder::new(Strategy::Whitelist)
    }

    /// Starts a blacklist configuration: mask only the named fields.
    #[must_use]
    pub fn blacklist() -> MaskingConfigBuilder {
        MaskingConfigBuilder::new(Strategy::Blacklist)
    }

    /// Returns the configured strategy.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Decides whether a field's value must be masked.
    ///
    /// Whitelist masks unless the field is in the set; blacklist masks iff the
    /// field is in the set. This predicate is the single source of truth for
    /// field-level decisions.
    #[must_use]
    pub fn should_mask(&self, field_name: &str) -> bool {
        (self.strategy == Strategy::Whitelist) != self.fields.contains(field_name)
    }

    /// Decides whether a bare scalar document is masked.
    ///
    /// A scalar root has no field name to test membership against. Whitelist
    /// semantics ("show only what I explicitly allow") conservatively mask it;
    /// blacklist semantics ("hide only what I name") leave it visible since it
    /// cannot be named.
    #[must_use]
    pub fn should_mask_scalar_root(&self) -> bool {
        self.strategy == Strategy::Whitelist
    }

    /// Replacement for masked strings, if one is configured.
    #[must_use]
    pub fn string_mask(&self) -> Option<&str> {
        self.string_mask.as_deref()
    }

    /// Replacement for masked integer-shaped numbers, if one is configured.
    #[must_use]
    pub fn number_mask(&self) -> Option<&Number> {
        self.number_mask.as_ref()
    }

    /// Replacement for masked decimal-shaped numbers, if one is configured.
    #[must_use]
    pub fn decimal_mask(&self) -> Option<&Number> {
        self.decimal_mask.as_ref()
    }

    /// Replacement for masked booleans, if one is configured.
    #[must_use]
    pub fn boolean_mask(&self) -> Option<bool> {
        self.boolean_mask
    }
}

// =============================================================================
// MaskingConfigBuilder
// =============================================================================

/// Builder for [`MaskingConfig`].
///
/// Created through [`MaskingConfig::whitelist`] or
/// [`MaskingConfig::blacklist`]. Building is pure value construction and
/// cannot fail.
#[derive(Clone, Debug)]
pub struct MaskingConfigBuilder {
    strategy: Strategy,
    fields: HashSet<String>,
    string_mask: Option<String>,
    number_mask: Option<Number>,
    decimal_mask: Option<Number>,
    boolean_mask: Option<bool>,
}

impl MaskingConfigBuilder {
    fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            fields: HashSet::new(),
            string_mask: Some(DEFAULT_STRING_MASK.to_owned()),
            number_mask: Some(Number::from(DEFAULT_NUMBER_MASK)),
            decimal_mask: Number::from_f64(DEFAULT_DECIMAL_MASK),
            boolean_mask: Some(DEFAULT_BOOLEAN_MASK),
        }
    }

    /// Adds one field name to the configured set.
    #[must_use]
    pub fn add_field(mut self, field_name: impl Into<String>) -> Self {
        self.fields.insert(field_name.into());
        self
    }

    /// Adds several field names to the configured set.
    #[must_use]
    pub fn add_fields<I>(mut self, field_names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.fields.extend(field_names.into_iter().map(Into::into));
        self
    }

    /// Sets the replacement for masked strings.
    ///
    /// Pass `None` to mask strings to JSON null.
    #[must_use]
    pub fn with_string_mask(mut self, mask: impl Into<Option<String>>) -> Self {
        self.string_mask = mask.into();
        self
    }

    /// Sets the replacement for masked integer-shaped numbers.
    ///
    /// Pass `None` to mask them to JSON null.
    #[must_use]
    pub fn with_number_mask(mut self, mask: impl Into<Option<i64>>) -> Self {
        self.number_mask = mask.into().map(Number::from);
        self
    }

    /// Sets the replacement for masked decimal-shaped numbers.
    ///
    /// Pass `None` to mask them to JSON null. NaN and infinities have no JSON
    /// representation and behave like `None`.
    #[must_use]
    pub fn with_decimal_mask(mut self, mask: impl Into<Option<f64>>) -> Self {
        self.decimal_mask = mask.into().and_then(Number::from_f64);
        self
    }

    /// Sets the replacement for masked booleans.
    ///
    /// Pass `None` to mask them to JSON null.
    #[must_use]
    pub fn with_boolean_mask(mut self, mask: impl Into<Option<bool>>) -> Self {
        self.boolean_mask = mask.into();
        self
    }

    /// Creates the immutable configuration from the current builder state.
    #[must_use]
    pub fn build(self) -> MaskingConfig {
        MaskingConfig {
            strategy: self.strategy,
            fields: self.fields,
            string_mask: self.string_mask,
            number_mask: self.number_mask,
            decimal_mask: self.decimal_mask,
            boolean_mask: self.boolean_mask,
        }
    }
}
