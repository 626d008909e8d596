use crate::storage::EntityId;

/// How a field relates to union types.
///
/// Union-ness and representation type are decoupled: a
/// [`UnionKind::SimpleUnion`] field is represented by its single member's type,
/// yet it still reports itself as a union.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum UnionKind {
    NoUnion,

    /// A nullable field typed with a single-member union whose raw name equals
    /// its normalized name. Represented directly by the member type; no union
    /// wrapper is emitted.
    SimpleUnion {
        member: EntityId,
        union: EntityId,
    },

    /// A field kept as a union-typed representation. `alias` carries the raw
    /// schema name whenever it differs from the normalized field name.
    TaggedUnion {
        alias: Option<String>,
        non_null: bool,
        union: EntityId,
    },
}
impl UnionKind {
    pub fn is_union(&self) -> bool {
        !matches!(self, Self::NoUnion)
    }

    pub fn union_id(&self) -> Option<EntityId> {
        match self {
            Self::NoUnion => None,
            Self::SimpleUnion { union, .. }
            | Self::TaggedUnion { union, .. } => Some(*union),
        }
    }
}
