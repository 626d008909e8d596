use crate::config::ArrayRepresentation;
use crate::config::FieldNaming;
use crate::config::FloatRepresentation;
use crate::config::IntRepresentation;
use indexmap::IndexMap;

/// The full set of type-mapping decisions for one model build.
///
/// Every axis is independent: changing one setting never influences how any
/// other built-in scalar (or list, or enum) is represented.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ModelConfig {
    pub array_representation: ArrayRepresentation,
    pub field_naming: FieldNaming,
    pub float_representation: FloatRepresentation,
    pub id_representation: IntRepresentation,
    pub int_representation: IntRepresentation,
    pub namespace: String,
    pub reserved_words: Vec<String>,
    pub scalar_mappings: IndexMap<String, String>,
    pub use_primitives_for_scalars: bool,
    pub use_strings_for_enums: bool,
}
impl ModelConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the normalized name for a field given its raw schema name.
    pub fn normalize_field_name(&self, raw_name: &str) -> String {
        let mut name = self.field_naming.apply(raw_name);
        if self.reserved_words.iter().any(|word| *word == name) {
            name.push('_');
        }
        name
    }

    pub fn with_array_representation(mut self, value: ArrayRepresentation) -> Self {
        self.array_representation = value;
        self
    }

    pub fn with_field_naming(mut self, value: FieldNaming) -> Self {
        self.field_naming = value;
        self
    }

    pub fn with_float_representation(mut self, value: FloatRepresentation) -> Self {
        self.float_representation = value;
        self
    }

    pub fn with_id_representation(mut self, value: IntRepresentation) -> Self {
        self.id_representation = value;
        self
    }

    pub fn with_int_representation(mut self, value: IntRepresentation) -> Self {
        self.int_representation = value;
        self
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn with_reserved_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Maps a custom scalar (declared with `scalar Name`) onto a named target
    /// representation.
    pub fn with_scalar_mapping(
        mut self,
        scalar_name: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        self.scalar_mappings.insert(scalar_name.into(), target.into());
        self
    }

    pub fn with_primitives_for_scalars(mut self, value: bool) -> Self {
        self.use_primitives_for_scalars = value;
        self
    }

    pub fn with_strings_for_enums(mut self, value: bool) -> Self {
        self.use_strings_for_enums = value;
        self
    }
}
impl std::default::Default for ModelConfig {
    fn default() -> Self {
        Self {
            array_representation: ArrayRepresentation::default(),
            field_naming: FieldNaming::default(),
            float_representation: FloatRepresentation::default(),
            id_representation: IntRepresentation::String,
            int_representation: IntRepresentation::Int32,
            namespace: String::new(),
            reserved_words: vec![],
            scalar_mappings: IndexMap::new(),
            use_primitives_for_scalars: false,
            use_strings_for_enums: false,
        }
    }
}
