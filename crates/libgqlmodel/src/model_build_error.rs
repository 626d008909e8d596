use thiserror::Error;

/// Every failure a model build can surface.
///
/// Missing or unreadable schema files are absent from this list:
/// the tokenizer reports those as "no entities" (see
/// [`EntityTokenizer::from_path()`](crate::tokenizer::EntityTokenizer::from_path)).
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ModelBuildError {
    #[error("Multiple declarations of the `{entity_name}` entity were found")]
    DuplicateEntityDefinition {
        entity_name: String,
    },

    #[error(
        "Type extension targets `{entity_name}`, but no entity with that name \
        is declared anywhere in the schema"
    )]
    ExtensionOfUndefinedEntity {
        entity_name: String,
    },

    #[error(
        "A `{extension_kind}` extension can not be applied to `{entity_name}` \
        because it was declared as a different kind of entity"
    )]
    InvalidExtensionKind {
        entity_name: String,
        extension_kind: String,
    },

    #[error("Unable to parse the body of `{entity_name}`: {detail}")]
    MalformedEntityBody {
        entity_name: String,
        detail: String,
    },

    #[error("Tokenized block is not a recognized declaration: `{text}`")]
    UnrecognizedDeclaration {
        text: String,
    },

    #[error(
        "`{referenced_by}` references `{type_name}`, which is not declared \
        anywhere in the schema"
    )]
    UnresolvedTypeReference {
        type_name: String,
        referenced_by: String,
    },

    #[error("`{value}` is not a supported value for the `{setting}` setting")]
    UnsupportedConfigurationValue {
        setting: String,
        value: String,
    },
}
