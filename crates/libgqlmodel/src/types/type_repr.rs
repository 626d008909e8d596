use crate::config::ArrayRepresentation;
use crate::storage::EntityId;
use crate::types::ScalarRepr;

/// The representation type chosen to stand in for a GraphQL type in the
/// generated model.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TypeRepr {
    Enum(EntityId),
    Object(EntityId),
    Scalar(ScalarRepr),
    Sequence {
        element: Box<TypeRepr>,
        kind: ArrayRepresentation,
    },
    Union(EntityId),
}
impl TypeRepr {
    /// The entity this representation points at, if any. Sequences report the
    /// entity of their inner-most element.
    pub fn entity_id(&self) -> Option<EntityId> {
        match self.innermost() {
            Self::Enum(entity_id)
            | Self::Object(entity_id)
            | Self::Union(entity_id) => Some(*entity_id),
            Self::Scalar(_) | Self::Sequence { .. } => None,
        }
    }

    /// Recursively unwrap sequences and return the inner-most element.
    pub fn innermost(&self) -> &TypeRepr {
        match self {
            Self::Sequence { element, .. } => element.innermost(),
            other => other,
        }
    }

    pub(crate) fn innermost_mut(&mut self) -> &mut TypeRepr {
        match self {
            Self::Sequence { element, .. } => element.innermost_mut(),
            other => other,
        }
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence { .. })
    }
}
