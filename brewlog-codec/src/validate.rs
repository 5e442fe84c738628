use crate::{
    codec::decode_ordinal,
    symbolic::{display_names, Symbolic},
};
use brewlog_error::symbolic::SymbolicError;
use serde::{Serialize, Serializer};
use std::{borrow::Cow, marker::PhantomData};
use validator::ValidationError;

/// Validation code attached to `validator` errors raised for symbolic fields.
pub const SYMBOLIC_VALIDATION_CODE: &str = "symbolic";

/// Anything that claims to hold a value of a symbolic type.
pub trait SymbolicValue {
    type Symbol: Symbolic;

    fn ordinal(&self) -> i64;
}

impl<T: Symbolic> SymbolicValue for T {
    type Symbol = T;

    #[inline]
    fn ordinal(&self) -> i64 {
        Symbolic::ordinal(*self)
    }
}

/// An unchecked ordinal of `T`, as read from storage or a legacy source.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct RawOrdinal<T> {
    ordinal: i64,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for RawOrdinal<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RawOrdinal<T> {}

impl<T> Serialize for RawOrdinal<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.ordinal)
    }
}

impl<T: Symbolic> RawOrdinal<T> {
    pub const fn new(ordinal: i64) -> Self {
        Self {
            ordinal,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn get(&self) -> i64 {
        self.ordinal
    }

    /// Validates and converts into `T`.
    pub fn resolve(self) -> Result<T, SymbolicError> {
        validate_with_details(&self)?;
        decode_ordinal(self.ordinal.into()).map_err(|_| out_of_range::<T>(self.ordinal))
    }
}

impl<T: Symbolic> From<T> for RawOrdinal<T> {
    fn from(value: T) -> Self {
        Self::new(value.ordinal())
    }
}

impl<T: Symbolic> SymbolicValue for RawOrdinal<T> {
    type Symbol = T;

    #[inline]
    fn ordinal(&self) -> i64 {
        self.ordinal
    }
}

/// Succeeds iff the value's ordinal is defined by its symbolic type.
pub fn validate_with_details<V: SymbolicValue>(value: &V) -> Result<(), SymbolicError> {
    let ordinal = value.ordinal();
    if V::Symbol::VARIANTS.iter().any(|v| v.ordinal == ordinal) {
        Ok(())
    } else {
        Err(out_of_range::<V::Symbol>(ordinal))
    }
}

/// Like [`validate_with_details`], but an absent value is valid.
pub fn validate_optional<V: SymbolicValue>(value: Option<&V>) -> Result<(), SymbolicError> {
    value.map_or(Ok(()), validate_with_details)
}

/// `validator` adapter, usable as `#[validate(custom(function = "validate_symbolic"))]`
/// on `Option<T>` fields.
///
/// `validator` skips absent values and hands present ones over as `&&T`.
pub fn validate_symbolic<V: SymbolicValue>(value: &&V) -> Result<(), ValidationError> {
    let value: &V = value;
    validate_with_details(value).map_err(|err| {
        let mut error = ValidationError::new(SYMBOLIC_VALIDATION_CODE);
        error.add_param(Cow::Borrowed("value"), &value.ordinal());
        error.add_param(Cow::Borrowed("accepted"), &err.accepted_values());
        error.message = Some(Cow::Owned(err.to_string()));
        error
    })
}

fn out_of_range<T: Symbolic>(ordinal: i64) -> SymbolicError {
    SymbolicError::OutOfRange {
        type_name: T::TYPE_NAME,
        ordinal,
        accepted: display_names(T::VARIANTS),
    }
}
