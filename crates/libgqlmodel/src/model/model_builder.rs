use crate::DeferredEntityRef;
use crate::ModelBuildError;
use crate::SchemaModel;
use crate::config::ModelConfig;
use crate::model::DeclarationBody;
use crate::model::EntityDeclaration;
use crate::model::FieldDeclaration;
use crate::storage::SchemaStorage;
use crate::tokenizer::EntityTokenizer;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::FieldArgument;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::SchemaEntity;
use crate::types::UnionMember;
use crate::types::UnionType;
use std::path::Path;

type Result<T> = std::result::Result<T, ModelBuildError>;

/// Drives one model build: tokenizes schema text, registers one entity per
/// declaration, and finally merges type extensions and forces every deferred
/// reference.
///
/// Declarations may appear in any order, across any number of files; a field
/// may name a type that is only declared later.
#[derive(Debug)]
pub struct ModelBuilder {
    config: ModelConfig,
    extensions: Vec<EntityDeclaration>,
    storage: SchemaStorage,
}
impl ModelBuilder {
    fn apply_extension(&mut self, extension: EntityDeclaration) -> Result<()> {
        let entity_name = extension.name.to_string();
        let extension_kind = extension.body.keyword();
        let Some(entity) = self.storage.get_mut(&entity_name) else {
            return Err(ModelBuildError::ExtensionOfUndefinedEntity {
                entity_name,
            });
        };
        log::debug!("Applying `extend {extension_kind} {entity_name}`");

        let mut new_union_members = vec![];
        match (entity, extension.body) {
            (
                SchemaEntity::Enum(enum_type),
                DeclarationBody::Enum { values },
            ) => {
                for value in values {
                    if enum_type.values.contains(&value) {
                        return Err(duplicate_enum_value(&entity_name, &value));
                    }
                    enum_type.values.push(value);
                }
            },

            (
                SchemaEntity::Object(object_type),
                DeclarationBody::Object { fields, implements, kind },
            ) if object_type.kind() == kind => {
                for field_decl in fields {
                    object_type.add_field(
                        build_field(&self.config, &entity_name, field_decl),
                    )?;
                }
                for interface_name in implements {
                    object_type.add_declared_interface(&interface_name);
                }
            },

            (SchemaEntity::Scalar(_), DeclarationBody::Scalar) => (),

            (
                SchemaEntity::Union(union_type),
                DeclarationBody::Union { members },
            ) => {
                for member_name in members {
                    if union_type.member_names().contains(&member_name.as_str()) {
                        continue;
                    }
                    union_type.members.push(
                        UnionMember::new(&entity_name, member_name.as_str()),
                    );
                    new_union_members.push(member_name);
                }
            },

            _ => return Err(ModelBuildError::InvalidExtensionKind {
                entity_name,
                extension_kind: extension_kind.to_string(),
            }),
        }

        for member_name in new_union_members {
            self.storage.add_deferred_interface_supplier(
                &member_name,
                DeferredEntityRef::new(&entity_name, &member_name),
            );
        }
        Ok(())
    }

    /// Merges all collected extensions and produces the finished model.
    ///
    /// Every field type, field argument, union member and interface is
    /// resolved once here, so a reference to a type that is declared nowhere
    /// fails the build rather than a later read.
    pub fn build(mut self) -> Result<SchemaModel> {
        for extension in std::mem::take(&mut self.extensions) {
            self.apply_extension(extension)?;
        }

        let model = SchemaModel::new(self.config, self.storage);
        model.resolve_all()?;
        log::debug!("Built a model of {} entities", model.storage().len());
        Ok(model)
    }

    /// Starts a build and loads a single schema file into it.
    pub fn from_file(
        config: ModelConfig,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        Self::new(config).load_file(file_path)
    }

    /// Starts a build and loads every file in `file_paths` into it, in order.
    pub fn from_files<P: AsRef<Path>>(
        config: ModelConfig,
        file_paths: impl IntoIterator<Item = P>,
    ) -> Result<Self> {
        let mut builder = Self::new(config);
        for file_path in file_paths {
            builder = builder.load_file(file_path)?;
        }
        Ok(builder)
    }

    /// Parses and registers each tokenized block.
    pub fn load_entities(
        mut self,
        blocks: impl IntoIterator<Item = String>,
    ) -> Result<Self> {
        for block in blocks {
            let declaration = EntityDeclaration::parse(&block)?;
            if declaration.is_extension {
                self.extensions.push(declaration);
            } else {
                self.register(declaration)?;
            }
        }
        Ok(self)
    }

    /// Loads the declarations of a schema file. A file that is missing or can
    /// not be read contributes no declarations.
    pub fn load_file(self, file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();
        log::debug!("Loading schema file `{}`", file_path.display());
        self.load_entities(EntityTokenizer::from_path(file_path))
    }

    pub fn load_str(self, content: &str) -> Result<Self> {
        self.load_entities(EntityTokenizer::from_schema_str(content))
    }

    pub fn new(config: ModelConfig) -> Self {
        Self {
            config,
            extensions: vec![],
            storage: SchemaStorage::new(),
        }
    }

    fn register(&mut self, declaration: EntityDeclaration) -> Result<()> {
        let namespace = self.config.namespace.as_str();
        let name = declaration.name;
        match declaration.body {
            DeclarationBody::Enum { values } => {
                for (idx, value) in values.iter().enumerate() {
                    if values[..idx].contains(value) {
                        return Err(duplicate_enum_value(&name, value));
                    }
                }
                self.storage.put(SchemaEntity::Enum(
                    EnumType::new(namespace, name, values),
                ))?;
            },

            DeclarationBody::Object { fields, implements, kind } => {
                let mut object_type =
                    ObjectType::new(kind, namespace, name.as_str(), &implements);
                for field_decl in fields {
                    object_type.add_field(build_field(&self.config, &name, field_decl))?;
                }
                self.storage.put(SchemaEntity::Object(object_type))?;
            },

            DeclarationBody::Scalar => {
                self.storage.put(SchemaEntity::Scalar(
                    ScalarType::new(namespace, name),
                ))?;
            },

            DeclarationBody::Union { members } => {
                self.storage.put(SchemaEntity::Union(
                    UnionType::new(namespace, name.as_str(), &members),
                ))?;
                for member_name in members {
                    self.storage.add_deferred_interface_supplier(
                        &member_name,
                        DeferredEntityRef::new(&name, &member_name),
                    );
                }
            },
        }
        Ok(())
    }
}

fn build_field(
    config: &ModelConfig,
    parent_name: &str,
    field_decl: FieldDeclaration,
) -> Field {
    let owner = format!("{parent_name}.{}", field_decl.raw_name);
    let arguments = field_decl.arguments
        .into_iter()
        .map(|arg_decl| FieldArgument {
            name: arg_decl.name,
            owner: owner.to_string(),
            type_annotation: arg_decl.type_annotation,
        })
        .collect();
    Field::new(
        parent_name,
        &field_decl.raw_name,
        config.normalize_field_name(&field_decl.raw_name),
        field_decl.type_annotation,
        arguments,
    )
}

fn duplicate_enum_value(entity_name: &str, value: &str) -> ModelBuildError {
    ModelBuildError::MalformedEntityBody {
        entity_name: entity_name.to_string(),
        detail: format!("enum value `{value}` is declared more than once"),
    }
}
