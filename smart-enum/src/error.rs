use thiserror::Error;

/// Failures signalled by the strict lookups.
///
/// Build-time failures (duplicate values or symbols, an ordinal past the end
/// of the table) never show up here. They stop compilation instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The underlying integer does not match any declared element.
    #[error("invalid {enum_name} value {value}")]
    InvalidEnumValue {
        enum_name: &'static str,
        value: String,
    },
    /// No element has this display name.
    #[error("unknown {enum_name} name '{name}'")]
    UnknownName { enum_name: &'static str, name: String },
}

impl Error {
    pub fn invalid_value<V: std::fmt::Display>(enum_name: &'static str, value: V) -> Self {
        Error::InvalidEnumValue {
            enum_name,
            value: value.to_string(),
        }
    }

    pub fn unknown_name<N: Into<String>>(enum_name: &'static str, name: N) -> Self {
        Error::UnknownName {
            enum_name,
            name: name.into(),
        }
    }

    /// Name of the enumeration the failed lookup was made against.
    pub fn enum_name(&self) -> &'static str {
        match self {
            Error::InvalidEnumValue { enum_name, .. } | Error::UnknownName { enum_name, .. } => {
                enum_name
            }
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
