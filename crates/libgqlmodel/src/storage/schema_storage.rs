use crate::DeferredEntityRef;
use crate::ModelBuildError;
use crate::storage::EntityId;
use crate::types::ObjectType;
use crate::types::SchemaEntity;
use indexmap::IndexMap;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, ModelBuildError>;

/// Single owner of every entity produced by one model build.
///
/// Entities are kept in registration order and never moved, replaced or
/// removed once [`put`](SchemaStorage::put), so every lookup of a given name
/// returns the same node and every mutation applied to that node is visible
/// to all holders of the name.
#[derive(Debug, Default)]
pub struct SchemaStorage {
    entities: Vec<SchemaEntity>,
    entity_ids: IndexMap<String, EntityId>,
    parked_interface_suppliers: HashMap<String, Vec<DeferredEntityRef>>,
}
impl SchemaStorage {
    /// Registers an interface that `owner_name` implements in addition to the
    /// ones listed in its own `implements` clause.
    ///
    /// The owner does not need to be registered yet: suppliers for an unknown
    /// owner are parked and handed over when it is [`put`](Self::put). An owner
    /// whose interface list was already read has that list recomputed on the
    /// next read so the new interface is never missed.
    pub fn add_deferred_interface_supplier(
        &mut self,
        owner_name: &str,
        supplier: DeferredEntityRef,
    ) {
        log::debug!(
            "Registering deferred interface `{}` for `{owner_name}`",
            supplier.name(),
        );
        match self.get_mut(owner_name) {
            Some(SchemaEntity::Object(object_type)) =>
                object_type.add_deferred_interface(supplier),

            Some(other) => log::debug!(
                "Ignoring deferred interface `{}` for `{owner_name}`, which is \
                a {} rather than an object type",
                supplier.name(),
                other.kind_name(),
            ),

            None => self.parked_interface_suppliers
                .entry(owner_name.to_string())
                .or_default()
                .push(supplier),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entity_ids.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&SchemaEntity> {
        self.entity_ids
            .get(name)
            .map(|entity_id| self.get_by_id(*entity_id))
    }

    /// A snapshot of every registered entity. Callers must not rely on its
    /// ordering.
    pub fn get_all(&self) -> Vec<&SchemaEntity> {
        self.entities.iter().collect()
    }

    /// Looks up an entity by an id previously issued by this storage.
    pub fn get_by_id(&self, entity_id: EntityId) -> &SchemaEntity {
        &self.entities[entity_id.0]
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut SchemaEntity> {
        let entity_id = *self.entity_ids.get(name)?;
        self.entities.get_mut(entity_id.0)
    }

    pub fn id_of(&self, name: &str) -> Option<EntityId> {
        self.entity_ids.get(name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a newly declared entity under its name.
    ///
    /// Registering a second entity under an existing name is an error; the
    /// originally registered node stays in place.
    pub fn put(&mut self, mut entity: SchemaEntity) -> Result<EntityId> {
        let name = entity.name().to_string();
        if self.entity_ids.contains_key(&name) {
            return Err(ModelBuildError::DuplicateEntityDefinition {
                entity_name: name,
            });
        }

        if let Some(suppliers) = self.parked_interface_suppliers.remove(&name) {
            match &mut entity {
                SchemaEntity::Object(object_type) => {
                    for supplier in suppliers {
                        object_type.add_deferred_interface(supplier);
                    }
                },
                other => log::debug!(
                    "Dropping {} deferred interface(s) registered for `{name}`, \
                    which is a {} rather than an object type",
                    suppliers.len(),
                    other.kind_name(),
                ),
            }
        }

        let entity_id = EntityId(self.entities.len());
        log::trace!("Registered {} `{name}` as {entity_id:?}", entity.kind_name());
        self.entities.push(entity);
        self.entity_ids.insert(name, entity_id);
        Ok(entity_id)
    }

    /// Like [`id_of`](Self::id_of), but a missing name is a hard error naming
    /// the referrer.
    pub fn resolve_name(
        &self,
        name: &str,
        referenced_by: &str,
    ) -> Result<EntityId> {
        self.id_of(name).ok_or_else(|| ModelBuildError::UnresolvedTypeReference {
            type_name: name.to_string(),
            referenced_by: referenced_by.to_string(),
        })
    }

    /// Resolves the full interface list of `object_type`: its declared
    /// `implements` clause followed by any deferred interfaces, without
    /// duplicates.
    ///
    /// The merged list is memoized on the object, so the deferred entries are
    /// folded in exactly once.
    pub fn resolve_interfaces<'object>(
        &self,
        object_type: &'object ObjectType,
    ) -> Result<&'object [EntityId]> {
        if let Some(interface_ids) = object_type.resolved_interfaces.get() {
            return Ok(interface_ids.as_slice());
        }

        let mut interface_ids = vec![];
        for interface_ref in object_type.declared_interfaces
            .iter()
            .chain(object_type.deferred_interfaces.iter()) {
            let interface_id = interface_ref.resolve(self)?;
            if !interface_ids.contains(&interface_id) {
                interface_ids.push(interface_id);
            }
        }

        Ok(object_type.resolved_interfaces
            .get_or_init(|| interface_ids)
            .as_slice())
    }
}
