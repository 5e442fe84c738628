use thiserror::Error;

/// Failures produced while decoding or validating a symbolic (enum) value.
///
/// The first three variants are wire-shape problems raised by the decoder and
/// always surface as a malformed request. `OutOfRange` is raised by business
/// rule validation when a well-formed ordinal is not part of the type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolicError {
    #[error("Unable to convert \"{value}\" to {type_name}. Valid values are: {}", .valid.join(", "))]
    UnknownName {
        type_name: &'static str,
        value: String,
        valid: Vec<&'static str>,
    },
    #[error("Unable to convert {value} to {type_name}. Valid values are: {}", .valid.join(", "))]
    UnknownOrdinal {
        type_name: &'static str,
        value: i128,
        valid: Vec<&'static str>,
    },
    #[error("Unexpected {shape} when parsing {type_name}. Expected a string or an integer")]
    UnsupportedShape {
        type_name: &'static str,
        shape: &'static str,
        valid: Vec<&'static str>,
    },
    #[error("Invalid {type_name}. Accepted values: {}", .accepted.join(", "))]
    OutOfRange {
        type_name: &'static str,
        ordinal: i64,
        accepted: Vec<&'static str>,
    },
}

impl SymbolicError {
    /// Name of the symbolic type the failure refers to.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::UnknownName { type_name, .. }
            | Self::UnknownOrdinal { type_name, .. }
            | Self::UnsupportedShape { type_name, .. }
            | Self::OutOfRange { type_name, .. } => type_name,
        }
    }

    /// True for failures raised while reading wire input.
    #[inline]
    pub fn is_decode(&self) -> bool {
        !matches!(self, Self::OutOfRange { .. })
    }

    /// The rejected input rendered as text, when there was one.
    pub fn attempted_value(&self) -> Option<String> {
        match self {
            Self::UnknownName { value, .. } => Some(value.clone()),
            Self::UnknownOrdinal { value, .. } => Some(value.to_string()),
            Self::OutOfRange { ordinal, .. } => Some(ordinal.to_string()),
            Self::UnsupportedShape { .. } => None,
        }
    }

    /// Values the caller may send instead.
    ///
    /// Decode failures list canonical names, validation failures list display names.
    pub fn accepted_values(&self) -> &[&'static str] {
        match self {
            Self::UnknownName { valid, .. }
            | Self::UnknownOrdinal { valid, .. }
            | Self::UnsupportedShape { valid, .. } => valid,
            Self::OutOfRange { accepted, .. } => accepted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> Vec<&'static str> {
        vec!["Light", "Medium", "Dark"]
    }

    #[test]
    fn test_unknown_name_message() {
        let err = SymbolicError::UnknownName {
            type_name: "RoastLevel",
            value: "Burnt".into(),
            valid: names(),
        };
        assert_eq!(
            err.to_string(),
            "Unable to convert \"Burnt\" to RoastLevel. Valid values are: Light, Medium, Dark"
        );
        assert!(err.is_decode());
        assert_eq!(err.attempted_value().as_deref(), Some("Burnt"));
    }

    #[test]
    fn test_unknown_ordinal_message() {
        let err = SymbolicError::UnknownOrdinal {
            type_name: "RoastLevel",
            value: 99,
            valid: names(),
        };
        assert!(err.to_string().starts_with("Unable to convert 99 to RoastLevel"));
        assert_eq!(err.accepted_values(), names().as_slice());
    }

    #[test]
    fn test_out_of_range_is_not_decode() {
        let err = SymbolicError::OutOfRange {
            type_name: "RoastLevel",
            ordinal: 7,
            accepted: names(),
        };
        assert!(!err.is_decode());
        assert_eq!(
            err.to_string(),
            "Invalid RoastLevel. Accepted values: Light, Medium, Dark"
        );
        assert_eq!(err.type_name(), "RoastLevel");
    }
}
