use crate::ModelBuildError;
use std::str::FromStr;

/// Selects the representation of an integer-like built-in scalar.
///
/// The same set of choices is offered independently for `Int` and for `ID`
/// (see [`ModelConfig::int_representation`](crate::config::ModelConfig) and
/// [`ModelConfig::id_representation`](crate::config::ModelConfig)).
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum IntRepresentation {
    BigInteger,
    Int32,
    Int64,
    String,
}
impl IntRepresentation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::BigInteger => "big-integer",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::String => "string",
        }
    }

    fn parse_for_setting(
        setting: &str,
        value: &str,
    ) -> Result<Self, ModelBuildError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "big-integer" | "biginteger" => Ok(Self::BigInteger),
            "int32" | "int" => Ok(Self::Int32),
            "int64" | "long" => Ok(Self::Int64),
            "string" => Ok(Self::String),
            _ => Err(ModelBuildError::UnsupportedConfigurationValue {
                setting: setting.to_string(),
                value: value.to_string(),
            }),
        }
    }

    /// Parses a value for the `id-representation` setting. Identical to
    /// [`FromStr`] except for the setting named in the error.
    pub fn parse_id_representation(value: &str) -> Result<Self, ModelBuildError> {
        Self::parse_for_setting("id-representation", value)
    }
}
impl FromStr for IntRepresentation {
    type Err = ModelBuildError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse_for_setting("int-representation", value)
    }
}
impl std::fmt::Display for IntRepresentation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
