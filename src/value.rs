//! The generic JSON value tree the masking engine operates on.
//!
//! This module provides:
//!
//! - [`Value`]: a closed representation of a JSON document, independent of any
//!   particular JSON library.
//! - [`Number`]: a JSON number kept as its exact literal text, classified as
//!   integer- or decimal-shaped by lexical form rather than magnitude.
//!
//! Objects preserve insertion order so a masked document serializes with the
//! same field order it was parsed with.

use indexmap::IndexMap;

/// Ordered map used for JSON objects.
///
/// Keys are unique within one object; insertion order is preserved for output
/// fidelity.
pub type Map = IndexMap<String, Value>;

// =============================================================================
// Number - lexical JSON number
// =============================================================================

/// A JSON number, stored as the exact literal it was written as.
///
/// Keeping the literal instead of a parsed machine value preserves two things
/// the masking rules depend on:
///
/// - **Shape**: whether the number was written in integer form (`42`) or in
///   decimal/exponent form (`42.0`, `4e2`). The masking engine picks the
///   integer or decimal replacement mask based on this classification alone.
/// - **Magnitude fidelity**: a 128-bit integer literal stays intact even
///   though it overflows `i64`/`u64`.
///
/// Equality is lexical: `1e2` and `100` denote the same magnitude but are not
/// equal as [`Number`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Number {
    text: Box<str>,
}

impl Number {
    /// Parses a JSON number literal.
    ///
    /// Returns `None` if `literal` is not a valid JSON number (leading zeros,
    /// trailing garbage, bare signs and the like are rejected).
    ///
    /// # Example
    /// ```
    /// use jsonmask::Number;
    ///
    /// assert!(Number::parse("-12.5e3").is_some());
    /// assert!(Number::parse("01").is_none());
    /// ```
    #[must_use]
    pub fn parse(literal: &str) -> Option<Self> {
        is_json_number(literal).then(|| Self {
            text: literal.into(),
        })
    }

    /// Converts a finite `f64` into a decimal-shaped number.
    ///
    /// Returns `None` for NaN and infinities, which have no JSON
    /// representation. The produced literal always carries a fraction point or
    /// exponent marker, so the result is decimal-shaped even for integral
    /// values (`0.0`, not `0`).
    #[must_use]
    pub fn from_f64(value: f64) -> Option<Self> {
        value.is_finite().then(|| Self {
            // `{:?}` keeps the `.0` suffix on integral values.
            text: format!("{value:?}").into(),
        })
    }

    /// Wraps a literal that is already known to be a valid JSON number.
    #[cfg(feature = "json")]
    pub(crate) fn from_trusted_literal(text: String) -> Self {
        Self { text: text.into() }
    }

    /// Returns the exact literal text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns `true` if the literal carries a fraction point or an exponent
    /// marker (`.`, `e`, `E`).
    ///
    /// The classification is independent of magnitude: `4e2` is
    /// decimal-shaped, `340282366920938463463374607431768211455` is
    /// integer-shaped.
    #[must_use]
    pub fn is_decimal_shaped(&self) -> bool {
        self.text.bytes().any(|b| matches!(b, b'.' | b'e' | b'E'))
    }

    /// Returns `true` if the literal is a plain integer form.
    #[must_use]
    pub fn is_integer_shaped(&self) -> bool {
        !self.is_decimal_shaped()
    }

    /// Interprets the literal as an `i64`, if it fits and is integer-shaped.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.text.parse().ok()
    }

    /// Interprets the literal as a `u64`, if it fits and is integer-shaped.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        self.text.parse().ok()
    }

    /// Interprets the literal as an `f64`, possibly losing precision.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.text.parse().ok()
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

macro_rules! impl_number_from_integer {
    ($($ty:ty),* $(,)?) => {$(
        impl From<$ty> for Number {
            fn from(value: $ty) -> Self {
                Self {
                    text: value.to_string().into(),
                }
            }
        }

        impl From<$ty> for Value {
            fn from(value: $ty) -> Self {
                Value::Number(Number::from(value))
            }
        }
    )*};
}

impl_number_from_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

/// Validates the JSON number grammar:
/// `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`
fn is_json_number(s: &str) -> bool {
    fn digits(bytes: &[u8]) -> usize {
        bytes.iter().take_while(|b| b.is_ascii_digit()).count()
    }

    let mut bytes = s.as_bytes();
    if let [b'-', rest @ ..] = bytes {
        bytes = rest;
    }
    match bytes {
        [b'0', rest @ ..] => bytes = rest,
        [b'1'..=b'9', ..] => bytes = &bytes[digits(bytes)..],
        _ => return false,
    }
    if let [b'.', rest @ ..] = bytes {
        let count = digits(rest);
        if count == 0 {
            return false;
        }
        bytes = &rest[count..];
    }
    if let [b'e' | b'E', rest @ ..] = bytes {
        let rest = match rest {
            [b'+' | b'-', tail @ ..] => tail,
            tail => tail,
        };
        let count = digits(rest);
        if count == 0 {
            return false;
        }
        bytes = &rest[count..];
    }
    bytes.is_empty()
}

// =============================================================================
// Value - closed JSON document representation
// =============================================================================

/// A JSON document node.
///
/// The masking engine consumes and produces [`Value`] trees; parsing,
/// serialization and object mapping live behind the `json` feature and are the
/// only places a concrete JSON library appears.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// The JSON `null`.
    Null,
    /// A JSON boolean.
    Bool(bool),
    /// A JSON number. See [`Number`] for the integer/decimal distinction.
    Number(Number),
    /// A JSON string.
    String(String),
    /// A JSON array; element order is significant and preserved.
    Array(Vec<Value>),
    /// A JSON object; member order is preserved.
    Object(Map),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the boolean if this is a [`Value::Bool`].
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the number if this is a [`Value::Number`].
    #[must_use]
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(number) => Some(number),
            _ => None,
        }
    }

    /// Returns the string contents if this is a [`Value::String`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the elements if this is a [`Value::Array`].
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the members if this is a [`Value::Object`].
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Looks up a member by key if this is a [`Value::Object`].
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|members| members.get(key))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Object(value)
    }
}
