//! serde glue for symbolic values.
//!
//! Output is always the canonical name. Input accepts a name in any ASCII
//! casing or a legacy integer ordinal. Derived `Serialize`/`Deserialize`
//! impls forward here; optional fields use [`option`] so that an empty string
//! reads as "no value":
//!
//! ```ignore
//! #[serde(default, with = "brewlog_codec::wire::option")]
//! pub roast_level: Option<RoastLevel>,
//! ```
//!
//! serde flattens every error into a message. The last [`SymbolicError`] raised
//! on the current thread is kept aside so that whoever receives that message
//! can get the structured error back with [`take_failure`].

use crate::{
    codec::{decode, DecodeInput},
    symbolic::Symbolic,
};
use brewlog_error::symbolic::SymbolicError;
use serde::{
    de::{self, MapAccess, SeqAccess, Visitor},
    Deserializer, Serializer,
};
use std::{cell::RefCell, fmt, marker::PhantomData};

thread_local! {
    static LAST_FAILURE: RefCell<Option<SymbolicError>> = const { RefCell::new(None) };
}

/// Takes the decode failure behind `message`, a serde error rendered as text.
///
/// Returns `None` when the last failure recorded on this thread is not the
/// one the message reports. The slot is cleared either way.
pub fn take_failure(message: &str) -> Option<SymbolicError> {
    LAST_FAILURE
        .with(|slot| slot.borrow_mut().take())
        .filter(|err| message.contains(&err.to_string()))
}

fn record_failure(err: &SymbolicError) {
    LAST_FAILURE.with(|slot| *slot.borrow_mut() = Some(err.clone()));
}

/// Visitor yielding `None` for the empty string, `null` and unit.
struct SymbolicVisitor<T>(PhantomData<T>);

impl<T: Symbolic> SymbolicVisitor<T> {
    fn decode<E: de::Error>(input: DecodeInput<'_>) -> Result<Option<T>, E> {
        decode::<T>(input).map_err(|err| {
            record_failure(&err);
            E::custom(err)
        })
    }
}

impl<'de, T: Symbolic> Visitor<'de> for SymbolicVisitor<T> {
    type Value = Option<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a {} name or ordinal", T::TYPE_NAME)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Self::decode(DecodeInput::Text(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Self::decode(DecodeInput::Ordinal(v.into()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Self::decode(DecodeInput::Ordinal(v.into()))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Self::Value, E> {
        Self::decode(DecodeInput::Ordinal(v))
    }

    fn visit_f64<E: de::Error>(self, _v: f64) -> Result<Self::Value, E> {
        Self::decode(DecodeInput::Unsupported("floating point number"))
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Self::Value, E> {
        Self::decode(DecodeInput::Unsupported("boolean"))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, _seq: A) -> Result<Self::Value, A::Error> {
        Self::decode(DecodeInput::Unsupported("array"))
    }

    fn visit_map<A: MapAccess<'de>>(self, _map: A) -> Result<Self::Value, A::Error> {
        Self::decode(DecodeInput::Unsupported("object"))
    }
}

/// Writes the canonical name.
pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Symbolic,
    S: Serializer,
{
    serializer.serialize_str(value.name())
}

/// Reads a required value; an empty string or `null` is rejected here.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Symbolic,
    D: Deserializer<'de>,
{
    deserializer
        .deserialize_any(SymbolicVisitor::<T>(PhantomData))?
        .ok_or_else(|| de::Error::custom(format_args!("{} requires a value", T::TYPE_NAME)))
}

/// `with` module for `Option<T>` fields.
pub mod option {
    use super::*;

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Symbolic,
        S: Serializer,
    {
        match value {
            Some(v) => super::serialize(v, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: Symbolic,
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(SymbolicVisitor::<T>(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Symbolic, SymbolicError};
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Symbolic)]
    enum Filter {
        Paper = 0,
        Metal = 1,
        Cloth = 2,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Recipe {
        filter: Filter,
        #[serde(
            default,
            skip_serializing_if = "Option::is_none",
            with = "crate::wire::option"
        )]
        backup_filter: Option<Filter>,
    }

    #[test]
    fn test_serializes_canonical_name_and_omits_absent() {
        let recipe = Recipe {
            filter: Filter::Metal,
            backup_filter: None,
        };
        assert_eq!(serde_json::to_value(&recipe).unwrap(), json!({"filter": "Metal"}));
    }

    #[test]
    fn test_accepts_names_and_ordinals() {
        let recipe: Recipe =
            serde_json::from_value(json!({"filter": "cloth", "backupFilter": 0})).unwrap();
        assert_eq!(recipe.filter, Filter::Cloth);
        assert_eq!(recipe.backup_filter, Some(Filter::Paper));
    }

    #[test]
    fn test_optional_empty_string_and_null_are_absent() {
        let recipe: Recipe =
            serde_json::from_value(json!({"filter": 1, "backupFilter": ""})).unwrap();
        assert_eq!(recipe.backup_filter, None);

        let recipe: Recipe =
            serde_json::from_value(json!({"filter": 1, "backupFilter": null})).unwrap();
        assert_eq!(recipe.backup_filter, None);

        let recipe: Recipe = serde_json::from_value(json!({"filter": 1})).unwrap();
        assert_eq!(recipe.backup_filter, None);
    }

    #[test]
    fn test_required_empty_string_is_rejected() {
        let err = serde_json::from_value::<Recipe>(json!({"filter": ""})).unwrap_err();
        assert!(err.to_string().contains("Filter requires a value"));
    }

    #[test]
    fn test_errors_carry_valid_values() {
        let err = serde_json::from_str::<Recipe>(r#"{"filter": "Nylon"}"#).unwrap_err();
        assert!(err
            .to_string()
            .contains("Unable to convert \"Nylon\" to Filter. Valid values are: Paper, Metal, Cloth"));

        let err = serde_json::from_str::<Recipe>(r#"{"filter": 42}"#).unwrap_err();
        assert!(err.to_string().contains("Unable to convert 42 to Filter"));

        let err = serde_json::from_str::<Recipe>(r#"{"filter": true}"#).unwrap_err();
        assert!(err.to_string().contains("Unexpected boolean when parsing Filter"));

        let err = serde_json::from_str::<Recipe>(r#"{"filter": [1]}"#).unwrap_err();
        assert!(err.to_string().contains("Unexpected array"));
    }

    #[test]
    fn test_failure_is_recoverable_from_message() {
        let err = serde_json::from_str::<Recipe>(r#"{"filter": "Nylon"}"#).unwrap_err();
        match super::take_failure(&err.to_string()) {
            Some(SymbolicError::UnknownName { type_name, value, valid }) => {
                assert_eq!(type_name, "Filter");
                assert_eq!(value, "Nylon");
                assert_eq!(valid, vec!["Paper", "Metal", "Cloth"]);
            }
            other => panic!("unexpected failure: {other:?}"),
        }
        assert!(super::take_failure(&err.to_string()).is_none());
    }

    #[test]
    fn test_unrelated_message_does_not_take_failure() {
        serde_json::from_str::<Recipe>(r#"{"filter": 7}"#).unwrap_err();
        assert!(super::take_failure("missing field `filter`").is_none());
    }
}
