use crate::ModelBuildError;
use convert_case::Case;
use convert_case::Casing;
use std::str::FromStr;

/// Casing transform applied to field names when normalizing them.
///
/// The raw schema name of a field is always kept alongside the normalized
/// one, so a transform never loses the name needed to address the field in a
/// GraphQL request.
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
pub enum FieldNaming {
    Camel,
    #[default]
    Preserve,
    Snake,
}
impl FieldNaming {
    pub fn apply(&self, raw_name: &str) -> String {
        match self {
            Self::Camel => raw_name.to_case(Case::Camel),
            Self::Preserve => raw_name.to_string(),
            Self::Snake => raw_name.to_case(Case::Snake),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Camel => "camel",
            Self::Preserve => "preserve",
            Self::Snake => "snake",
        }
    }
}
impl FromStr for FieldNaming {
    type Err = ModelBuildError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "camel" | "camel-case" => Ok(Self::Camel),
            "preserve" => Ok(Self::Preserve),
            "snake" | "snake-case" => Ok(Self::Snake),
            _ => Err(ModelBuildError::UnsupportedConfigurationValue {
                setting: "field-naming".to_string(),
                value: value.to_string(),
            }),
        }
    }
}
impl std::fmt::Display for FieldNaming {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
