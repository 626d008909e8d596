use crate::ModelBuildError;
use crate::config::ModelConfig;
use crate::resolver::TypeResolver;
use crate::storage::EntityId;
use crate::storage::SchemaStorage;
use crate::types::EnumType;
use crate::types::ObjectType;
use crate::types::SchemaEntity;
use crate::types::TypeRepr;
use crate::types::UnionType;

type Result<T> = std::result::Result<T, ModelBuildError>;

/// The result of a [`ModelBuilder`](crate::ModelBuilder) run: every entity
/// of the schema, with every reference resolvable under one configuration.
#[derive(Debug)]
pub struct SchemaModel {
    config: ModelConfig,
    storage: SchemaStorage,
}
impl SchemaModel {
    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Renders a representation as text, e.g. `List<Pet>` or `int32`.
    pub fn describe_type(&self, type_repr: &TypeRepr) -> String {
        match type_repr {
            TypeRepr::Enum(entity_id)
            | TypeRepr::Object(entity_id)
            | TypeRepr::Union(entity_id) =>
                self.entity_by_id(*entity_id).name().to_string(),
            TypeRepr::Scalar(scalar_repr) => scalar_repr.type_name(),
            TypeRepr::Sequence { element, kind } => format!(
                "{}<{}>",
                kind.wrapper_name(),
                self.describe_type(element),
            ),
        }
    }

    /// Every entity of the schema. Callers must not rely on the ordering.
    pub fn entities(&self) -> Vec<&SchemaEntity> {
        self.storage.get_all()
    }

    pub fn entity(&self, name: &str) -> Option<&SchemaEntity> {
        self.storage.get(name)
    }

    pub fn entity_by_id(&self, entity_id: EntityId) -> &SchemaEntity {
        self.storage.get_by_id(entity_id)
    }

    pub fn enum_type(&self, name: &str) -> Option<&EnumType> {
        self.entity(name).and_then(SchemaEntity::as_enum)
    }

    pub(crate) fn new(config: ModelConfig, storage: SchemaStorage) -> Self {
        Self {
            config,
            storage,
        }
    }

    pub fn object_type(&self, name: &str) -> Option<&ObjectType> {
        self.entity(name).and_then(SchemaEntity::as_object)
    }

    /// Forces every deferred reference held by the model's entities.
    pub fn resolve_all(&self) -> Result<()> {
        for entity in self.storage.get_all() {
            match entity {
                SchemaEntity::Object(object_type) => {
                    for field in object_type.fields() {
                        field.representation(self)?;
                        for argument in field.arguments() {
                            argument.representation(self)?;
                        }
                    }
                    self.storage.resolve_interfaces(object_type)?;
                },
                SchemaEntity::Union(union_type) => {
                    union_type.member_types(self)?;
                },
                SchemaEntity::Enum(_) | SchemaEntity::Scalar(_) => (),
            }
        }
        Ok(())
    }

    /// A [`TypeResolver`] bound to this model's configuration and entities.
    pub fn resolver(&self) -> TypeResolver<'_> {
        TypeResolver::new(&self.config, &self.storage)
    }

    pub fn storage(&self) -> &SchemaStorage {
        &self.storage
    }

    pub fn union_type(&self, name: &str) -> Option<&UnionType> {
        self.entity(name).and_then(SchemaEntity::as_union)
    }
}
