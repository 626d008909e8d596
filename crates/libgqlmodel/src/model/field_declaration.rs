use crate::model::ArgumentDeclaration;
use crate::types::TypeAnnotation;

/// A parsed field, before any configuration has been applied to its name.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct FieldDeclaration {
    pub(crate) arguments: Vec<ArgumentDeclaration>,
    pub(crate) raw_name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
