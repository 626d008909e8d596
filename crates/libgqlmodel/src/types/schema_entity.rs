use crate::types::EntityKey;
use crate::types::EntityNode;
use crate::types::EnumType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use inherent::inherent;

/// Every kind of top-level declaration the model keeps.
///
/// Sequence wrappers are not entities of their own: they only ever appear
/// around an element type, as [`TypeRepr::Sequence`](crate::types::TypeRepr).
#[derive(Clone, Debug)]
pub enum SchemaEntity {
    Enum(EnumType),
    Object(ObjectType),
    Scalar(ScalarType),
    Union(UnionType),
}
impl SchemaEntity {
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(enum_type) = self {
            Some(enum_type)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(object_type) = self {
            Some(object_type)
        } else {
            None
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        if let Self::Scalar(scalar_type) = self {
            Some(scalar_type)
        } else {
            None
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(union_type) = self {
            Some(union_type)
        } else {
            None
        }
    }

    /// The SDL keyword that declares this kind of entity.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Enum(_) => "enum",
            Self::Object(object_type) => object_type.kind().keyword(),
            Self::Scalar(_) => "scalar",
            Self::Union(_) => "union",
        }
    }
}

#[inherent]
impl EntityNode for SchemaEntity {
    pub fn key(&self) -> EntityKey;

    pub fn name(&self) -> &str {
        match self {
            Self::Enum(enum_type) => enum_type.name(),
            Self::Object(object_type) => object_type.name(),
            Self::Scalar(scalar_type) => scalar_type.name(),
            Self::Union(union_type) => union_type.name(),
        }
    }

    pub fn namespace(&self) -> &str {
        match self {
            Self::Enum(enum_type) => enum_type.namespace(),
            Self::Object(object_type) => object_type.namespace(),
            Self::Scalar(scalar_type) => scalar_type.namespace(),
            Self::Union(union_type) => union_type.namespace(),
        }
    }
}
