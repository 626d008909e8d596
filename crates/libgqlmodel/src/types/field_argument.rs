use crate::ModelBuildError;
use crate::SchemaModel;
use crate::types::TypeAnnotation;
use crate::types::TypeRepr;

type Result<T> = std::result::Result<T, ModelBuildError>;

/// An argument declared on a field, e.g. `limit` in `pets(limit: Int): [Pet]`.
/// Default values are not retained.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldArgument {
    pub(crate) name: String,
    pub(crate) owner: String,
    pub(crate) type_annotation: TypeAnnotation,
}
impl FieldArgument {
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Resolves the argument's declared type with the model's configuration.
    pub fn representation(&self, model: &SchemaModel) -> Result<TypeRepr> {
        model.resolver().resolve_annotation(
            &self.type_annotation,
            &format!("{}({})", self.owner, self.name),
        )
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
