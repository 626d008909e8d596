//! Builds a typed object model from GraphQL SDL documents.
//!
//! Schema text is split into one normalized block per top-level declaration
//! by the [`tokenizer`], each block becomes an entity in a
//! [`SchemaStorage`](storage::SchemaStorage), and every field is resolved to
//! a concrete representation type under a [`ModelConfig`](config::ModelConfig).
//! Entities may reference each other in any order (or in cycles): references
//! are stored by name and resolved on first read.
//!
//! ```
//! use libgqlmodel::ModelBuilder;
//! use libgqlmodel::config::ModelConfig;
//!
//! let model = ModelBuilder::new(ModelConfig::default())
//!     .load_str("type Query { pet: Pet } type Pet { id: ID name: String }")?
//!     .build()?;
//! assert_eq!(model.entities().len(), 2);
//! # Ok::<(), libgqlmodel::ModelBuildError>(())
//! ```

pub mod config;
mod deferred_entity_ref;
pub mod file_reader;
pub mod model;
mod model_build_error;
pub mod resolver;
pub mod storage;
pub mod tokenizer;
pub mod types;

pub use deferred_entity_ref::DeferredEntityRef;
pub use model::ModelBuilder;
pub use model::SchemaModel;
pub use model_build_error::ModelBuildError;
