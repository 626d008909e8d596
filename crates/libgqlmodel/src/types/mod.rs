mod entity_key;
mod entity_node;
mod enum_type;
mod field;
mod field_argument;
mod field_repr;
mod object_kind;
mod object_type;
mod scalar_repr;
mod scalar_type;
mod schema_entity;
mod type_annotation;
mod type_repr;
mod union_kind;
mod union_member;
mod union_type;

pub use entity_key::EntityKey;
pub use entity_node::EntityNode;
pub use enum_type::EnumType;
pub use field::Field;
pub use field_argument::FieldArgument;
pub use field_repr::FieldRepr;
pub use object_kind::ObjectKind;
pub use object_type::ObjectType;
pub use scalar_repr::ScalarRepr;
pub use scalar_type::ScalarType;
pub use schema_entity::SchemaEntity;
pub use type_annotation::TypeAnnotation;
pub use type_repr::TypeRepr;
pub use union_kind::UnionKind;
pub use union_member::UnionMember;
pub use union_member::UnionMemberDescriptor;
pub use union_type::UnionType;

#[cfg(test)]
mod tests;
