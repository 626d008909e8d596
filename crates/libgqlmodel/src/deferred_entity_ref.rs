use crate::ModelBuildError;
use crate::storage::EntityId;
use crate::storage::SchemaStorage;
use crate::types::SchemaEntity;
use std::cell::OnceCell;

type Result<T> = std::result::Result<T, ModelBuildError>;

/// A `String`-named reference to an entity owned by a [`SchemaStorage`],
/// resolved lazily and memoized on first resolution.
///
/// Fields, union members and interface lists store these instead of direct
/// references so that an entity can point at another entity that is declared
/// later in the schema (or that points back at it) without the storage ever
/// needing to hold self-references. Resolving is done via
/// [`DeferredEntityRef::resolve()`] by providing the storage explicitly.
///
/// Once resolved, a reference keeps returning the same [`EntityId`]; the
/// storage never moves or replaces a registered entity, so every holder of the
/// same name observes the same node.
#[derive(Clone, Debug)]
pub struct DeferredEntityRef {
    name: String,
    referenced_by: String,
    resolved: OnceCell<EntityId>,
}
impl DeferredEntityRef {
    /// The target entity's deref-result, borrowed from `storage`.
    pub fn deref<'storage>(
        &self,
        storage: &'storage SchemaStorage,
    ) -> Result<&'storage SchemaEntity> {
        Ok(storage.get_by_id(self.resolve(storage)?))
    }

    /// Indicates whether this reference has already been resolved.
    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(
        name: impl AsRef<str>,
        referenced_by: impl AsRef<str>,
    ) -> Self {
        Self {
            name: name.as_ref().to_string(),
            referenced_by: referenced_by.as_ref().to_string(),
            resolved: OnceCell::new(),
        }
    }

    /// A description of whatever holds this reference (e.g. `Query.pet`),
    /// reported when the target can not be found.
    pub fn referenced_by(&self) -> &str {
        self.referenced_by.as_str()
    }

    /// Looks the target up by name on first call and memoizes the result.
    ///
    /// A name that is not registered in `storage` is a
    /// [`ModelBuildError::UnresolvedTypeReference`].
    pub fn resolve(&self, storage: &SchemaStorage) -> Result<EntityId> {
        if let Some(entity_id) = self.resolved.get() {
            return Ok(*entity_id);
        }
        let entity_id = storage.resolve_name(&self.name, &self.referenced_by)?;
        Ok(*self.resolved.get_or_init(|| entity_id))
    }
}
impl std::cmp::PartialEq for DeferredEntityRef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.referenced_by == other.referenced_by
    }
}
