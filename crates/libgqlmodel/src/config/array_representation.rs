use crate::ModelBuildError;
use std::str::FromStr;

/// Selects the sequence wrapper used for every list-typed field in the model.
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
pub enum ArrayRepresentation {
    Array,
    Collection,
    Iterable,
    #[default]
    List,
    Set,
}
impl ArrayRepresentation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Collection => "collection",
            Self::Iterable => "iterable",
            Self::List => "list",
            Self::Set => "set",
        }
    }

    /// The name of the wrapper as it appears in rendered type descriptions
    /// (e.g. `List<Pet>`).
    pub fn wrapper_name(&self) -> &'static str {
        match self {
            Self::Array => "Array",
            Self::Collection => "Collection",
            Self::Iterable => "Iterable",
            Self::List => "List",
            Self::Set => "Set",
        }
    }
}
impl FromStr for ArrayRepresentation {
    type Err = ModelBuildError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "array" => Ok(Self::Array),
            "collection" => Ok(Self::Collection),
            "iterable" => Ok(Self::Iterable),
            "list" => Ok(Self::List),
            "set" => Ok(Self::Set),
            _ => Err(ModelBuildError::UnsupportedConfigurationValue {
                setting: "array-representation".to_string(),
                value: value.to_string(),
            }),
        }
    }
}
impl std::fmt::Display for ArrayRepresentation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
