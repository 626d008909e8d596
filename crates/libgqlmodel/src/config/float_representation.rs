use crate::ModelBuildError;
use std::str::FromStr;

/// Selects the representation of the built-in `Float` scalar.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum FloatRepresentation {
    BigDecimal,
    #[default]
    Double,
    Float,
    String,
}
impl FloatRepresentation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::BigDecimal => "big-decimal",
            Self::Double => "double",
            Self::Float => "float",
            Self::String => "string",
        }
    }
}
impl FromStr for FloatRepresentation {
    type Err = ModelBuildError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "big-decimal" | "bigdecimal" => Ok(Self::BigDecimal),
            "double" => Ok(Self::Double),
            "float" => Ok(Self::Float),
            "string" => Ok(Self::String),
            _ => Err(ModelBuildError::UnsupportedConfigurationValue {
                setting: "float-representation".to_string(),
                value: value.to_string(),
            }),
        }
    }
}
impl std::fmt::Display for FloatRepresentation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
