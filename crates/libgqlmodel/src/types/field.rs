use crate::ModelBuildError;
use crate::SchemaModel;
use crate::types::FieldArgument;
use crate::types::FieldRepr;
use crate::types::TypeAnnotation;
use crate::types::TypeRepr;
use crate::types::UnionKind;
use std::cell::OnceCell;

type Result<T> = std::result::Result<T, ModelBuildError>;

/// A field of an object, input or interface type.
///
/// The field's representation is resolved lazily on first read (the type it
/// names may be declared after the field's parent) and memoized from then on.
#[derive(Clone, Debug)]
pub struct Field {
    pub(crate) arguments: Vec<FieldArgument>,
    pub(crate) name: String,
    pub(crate) parent_name: String,
    pub(crate) raw_name: String,
    pub(crate) representation: OnceCell<FieldRepr>,
    pub(crate) type_annotation: TypeAnnotation,
}
impl Field {
    pub fn arguments(&self) -> &[FieldArgument] {
        self.arguments.as_slice()
    }

    /// Indicates whether the field's type is a union, including a
    /// [`UnionKind::SimpleUnion`] whose representation is the member type.
    pub fn is_union(&self, model: &SchemaModel) -> Result<bool> {
        Ok(self.representation(model)?.is_union())
    }

    /// The normalized field name (after any configured casing transform).
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub(crate) fn new(
        parent_name: &str,
        raw_name: &str,
        name: String,
        type_annotation: TypeAnnotation,
        arguments: Vec<FieldArgument>,
    ) -> Self {
        Self {
            arguments,
            name,
            parent_name: parent_name.to_string(),
            raw_name: raw_name.to_string(),
            representation: OnceCell::new(),
            type_annotation,
        }
    }

    pub fn nullable(&self) -> bool {
        self.type_annotation.nullable()
    }

    /// Name of the entity that declares this field.
    pub fn parent_name(&self) -> &str {
        self.parent_name.as_str()
    }

    /// The name exactly as written in the schema.
    pub fn raw_name(&self) -> &str {
        self.raw_name.as_str()
    }

    pub fn representation(&self, model: &SchemaModel) -> Result<&FieldRepr> {
        if let Some(representation) = self.representation.get() {
            return Ok(representation);
        }
        let representation = model.resolver().resolve_field(self)?;
        Ok(self.representation.get_or_init(|| representation))
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }

    pub fn type_repr(&self, model: &SchemaModel) -> Result<&TypeRepr> {
        Ok(&self.representation(model)?.type_repr)
    }

    pub fn union_kind(&self, model: &SchemaModel) -> Result<&UnionKind> {
        Ok(&self.representation(model)?.union_kind)
    }
}
impl std::cmp::PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.arguments == other.arguments
            && self.name == other.name
            && self.parent_name == other.parent_name
            && self.raw_name == other.raw_name
            && self.type_annotation == other.type_annotation
    }
}
