use crate::ModelBuildError;
use crate::SchemaModel;
use crate::types::TypeRepr;
use crate::types::UnionKind;
use crate::types::UnionMemberDescriptor;

type Result<T> = std::result::Result<T, ModelBuildError>;

/// The resolved representation of a field: its concrete type plus its union
/// classification.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldRepr {
    pub type_repr: TypeRepr,
    pub union_kind: UnionKind,
}
impl FieldRepr {
    pub fn is_union(&self) -> bool {
        self.union_kind.is_union()
    }

    /// Member descriptors of the union this field is typed with, or an empty
    /// list for a field that is not a union.
    pub fn union_members(
        &self,
        model: &SchemaModel,
    ) -> Result<Vec<UnionMemberDescriptor>> {
        let Some(union_id) = self.union_kind.union_id() else {
            return Ok(vec![]);
        };
        match model.entity_by_id(union_id).as_union() {
            Some(union_type) => union_type.member_descriptors(model),
            None => Ok(vec![]),
        }
    }
}
