use crate::symbolic::{canonical_names, Symbolic};
use brewlog_error::symbolic::SymbolicError;

/// Raw external representation of a symbolic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeInput<'a> {
    /// A name; the empty string means "no value"
    Text(&'a str),
    /// A legacy ordinal
    Ordinal(i128),
    /// Any other shape, named for the error message (`"boolean"`, `"array"`...)
    Unsupported(&'static str),
}

impl<'a> From<&'a str> for DecodeInput<'a> {
    fn from(value: &'a str) -> Self {
        DecodeInput::Text(value)
    }
}

impl From<i64> for DecodeInput<'_> {
    fn from(value: i64) -> Self {
        DecodeInput::Ordinal(value.into())
    }
}

/// Decodes raw input into `T`.
///
/// Returns `Ok(None)` for an empty string. Whether that is acceptable depends
/// on the destination and is left to the caller.
pub fn decode<T: Symbolic>(input: DecodeInput<'_>) -> Result<Option<T>, SymbolicError> {
    match input {
        DecodeInput::Text(text) => decode_name(text),
        DecodeInput::Ordinal(ordinal) => decode_ordinal(ordinal).map(Some),
        DecodeInput::Unsupported(shape) => Err(unsupported_shape::<T>(shape)),
    }
}

/// Case-insensitive match against the canonical names of `T`.
pub fn decode_name<T: Symbolic>(text: &str) -> Result<Option<T>, SymbolicError> {
    if text.is_empty() {
        return Ok(None);
    }
    T::VARIANTS
        .iter()
        .find(|v| v.name.eq_ignore_ascii_case(text))
        .and_then(|v| T::from_ordinal(v.ordinal))
        .map(Some)
        .ok_or_else(|| unknown_name::<T>(text))
}

/// Exact match against the ordinals of `T`.
pub fn decode_ordinal<T: Symbolic>(ordinal: i128) -> Result<T, SymbolicError> {
    i64::try_from(ordinal)
        .ok()
        .and_then(T::from_ordinal)
        .ok_or_else(|| unknown_ordinal::<T>(ordinal))
}

/// Parses a name where a value is mandatory; the empty string is rejected.
pub fn parse<T: Symbolic>(text: &str) -> Result<T, SymbolicError> {
    decode_name(text)?.ok_or_else(|| unknown_name::<T>(text))
}

/// Canonical name of `value`.
#[inline]
pub fn encode<T: Symbolic>(value: T) -> &'static str {
    value.name()
}

pub(crate) fn unknown_name<T: Symbolic>(text: &str) -> SymbolicError {
    SymbolicError::UnknownName {
        type_name: T::TYPE_NAME,
        value: text.to_string(),
        valid: canonical_names(T::VARIANTS),
    }
}

pub(crate) fn unknown_ordinal<T: Symbolic>(ordinal: i128) -> SymbolicError {
    SymbolicError::UnknownOrdinal {
        type_name: T::TYPE_NAME,
        value: ordinal,
        valid: canonical_names(T::VARIANTS),
    }
}

pub(crate) fn unsupported_shape<T: Symbolic>(shape: &'static str) -> SymbolicError {
    SymbolicError::UnsupportedShape {
        type_name: T::TYPE_NAME,
        shape,
        valid: canonical_names(T::VARIANTS),
    }
}
