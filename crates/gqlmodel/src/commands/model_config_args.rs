use libgqlmodel::ModelBuildError;
use libgqlmodel::config::ArrayRepresentation;
use libgqlmodel::config::FieldNaming;
use libgqlmodel::config::FloatRepresentation;
use libgqlmodel::config::IntRepresentation;
use libgqlmodel::config::ModelConfig;

/// Command-line overrides for every [`ModelConfig`] setting. Omitted flags
/// keep the library defaults.
#[derive(Debug, clap::Args)]
pub(crate) struct ModelConfigArgs {
    #[arg(
        help="Sequence wrapper for list-typed fields \
             (array, list, set, collection, iterable).",
        long,
    )]
    array_representation: Option<ArrayRepresentation>,

    #[arg(
        help="Casing applied to field names (preserve, camel, snake).",
        long,
    )]
    field_naming: Option<FieldNaming>,

    #[arg(
        help="Representation of `Float` (big-decimal, double, float, string).",
        long,
    )]
    float_representation: Option<FloatRepresentation>,

    #[arg(
        help="Representation of `ID` (big-integer, int32, int64, string).",
        long,
        value_parser=IntRepresentation::parse_id_representation,
    )]
    id_representation: Option<IntRepresentation>,

    #[arg(
        help="Representation of `Int` (big-integer, int32, int64, string).",
        long,
    )]
    int_representation: Option<IntRepresentation>,

    #[arg(
        help="Namespace stamped on every entity.",
        long,
    )]
    namespace: Option<String>,

    #[arg(
        help="Field names that get a trailing `_` after normalization.",
        long,
        value_delimiter=',',
    )]
    reserved_words: Vec<String>,

    #[arg(
        help="Maps a custom scalar onto a target representation \
             (e.g. `DateTime=Instant`). May be repeated.",
        long="scalar-mapping",
        value_parser=parse_scalar_mapping,
    )]
    scalar_mappings: Vec<(String, String)>,

    #[arg(
        help="Represent non-list scalar fields as primitives.",
        long,
    )]
    use_primitives: bool,

    #[arg(
        help="Represent enum-typed fields as strings.",
        long,
    )]
    use_strings_for_enums: bool,
}
impl ModelConfigArgs {
    pub(crate) fn to_model_config(&self) -> ModelConfig {
        let mut config = ModelConfig::default()
            .with_primitives_for_scalars(self.use_primitives)
            .with_reserved_words(self.reserved_words.iter().cloned())
            .with_strings_for_enums(self.use_strings_for_enums);
        if let Some(value) = self.array_representation {
            config = config.with_array_representation(value);
        }
        if let Some(value) = self.field_naming {
            config = config.with_field_naming(value);
        }
        if let Some(value) = self.float_representation {
            config = config.with_float_representation(value);
        }
        if let Some(value) = self.id_representation {
            config = config.with_id_representation(value);
        }
        if let Some(value) = self.int_representation {
            config = config.with_int_representation(value);
        }
        if let Some(namespace) = &self.namespace {
            config = config.with_namespace(namespace);
        }
        for (scalar_name, target) in &self.scalar_mappings {
            config = config.with_scalar_mapping(scalar_name, target);
        }
        config
    }
}

fn parse_scalar_mapping(value: &str) -> Result<(String, String), ModelBuildError> {
    match value.split_once('=') {
        Some((scalar_name, target))
            if !scalar_name.trim().is_empty() && !target.trim().is_empty() =>
            Ok((scalar_name.trim().to_string(), target.trim().to_string())),
        _ => Err(ModelBuildError::UnsupportedConfigurationValue {
            setting: "scalar-mapping".to_string(),
            value: value.to_string(),
        }),
    }
}
