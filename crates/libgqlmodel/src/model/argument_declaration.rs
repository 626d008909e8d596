use crate::types::TypeAnnotation;

/// A parsed `name: Type` argument of a field. Default values are dropped.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ArgumentDeclaration {
    pub(crate) name: String,
    pub(crate) type_annotation: TypeAnnotation,
}
