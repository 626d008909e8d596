/// Stable handle to an entity registered in a
/// [`SchemaStorage`](crate::storage::SchemaStorage).
///
/// An id is only meaningful for the storage that issued it.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EntityId(pub(crate) usize);
impl EntityId {
    pub fn index(&self) -> usize {
        self.0
    }
}
