use crate::types::EntityKey;

/// Accessors shared by every kind of entity stored in a
/// [`SchemaStorage`](crate::storage::SchemaStorage).
pub trait EntityNode {
    /// The stable `(namespace, name)` identity of this entity.
    fn key(&self) -> EntityKey {
        EntityKey::new(self.namespace(), self.name())
    }

    fn name(&self) -> &str;

    fn namespace(&self) -> &str;
}
