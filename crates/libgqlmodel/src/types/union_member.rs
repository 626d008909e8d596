use crate::DeferredEntityRef;
use crate::storage::EntityId;

/// One `| Member` of a union declaration: the raw member name as written in
/// the schema plus a deferred reference to the member entity.
#[derive(Clone, Debug, PartialEq)]
pub struct UnionMember {
    pub(crate) entity: DeferredEntityRef,
    pub(crate) raw_name: String,
}
impl UnionMember {
    pub fn entity(&self) -> &DeferredEntityRef {
        &self.entity
    }

    pub fn new(union_name: &str, raw_name: impl Into<String>) -> Self {
        let raw_name = raw_name.into();
        Self {
            entity: DeferredEntityRef::new(&raw_name, union_name),
            raw_name,
        }
    }

    pub fn raw_name(&self) -> &str {
        self.raw_name.as_str()
    }
}

/// A union member with its entity resolved, as handed to emitters.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnionMemberDescriptor {
    pub entity_id: EntityId,
    pub raw_name: String,
}
