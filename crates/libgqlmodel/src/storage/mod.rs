mod entity_id;
mod schema_storage;

pub use entity_id::EntityId;
pub use schema_storage::SchemaStorage;
