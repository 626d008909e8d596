use crate::ModelBuildError;
use crate::config::FloatRepresentation;
use crate::config::IntRepresentation;
use crate::config::ModelConfig;
use crate::resolver::BuiltinScalar;
use crate::storage::EntityId;
use crate::storage::SchemaStorage;
use crate::types::Field;
use crate::types::FieldRepr;
use crate::types::ScalarRepr;
use crate::types::SchemaEntity;
use crate::types::TypeAnnotation;
use crate::types::TypeRepr;
use crate::types::UnionKind;

type Result<T> = std::result::Result<T, ModelBuildError>;

/// Resolves declared types against the built-in scalar table and the entities
/// registered in a [`SchemaStorage`].
///
/// Every configuration axis is consulted in exactly one place, so changing
/// one setting never alters how any other kind of type is represented.
#[derive(Clone, Copy, Debug)]
pub struct TypeResolver<'a> {
    config: &'a ModelConfig,
    storage: &'a SchemaStorage,
}
impl<'a> TypeResolver<'a> {
    fn classify_union(
        &self,
        field: &Field,
        type_repr: &mut TypeRepr,
    ) -> Result<UnionKind> {
        let TypeRepr::Union(union_id) = *type_repr.innermost() else {
            return Ok(UnionKind::NoUnion);
        };
        let Some(union_type) = self.storage.get_by_id(union_id).as_union() else {
            return Ok(UnionKind::NoUnion);
        };

        let members = union_type.members();
        let is_simple =
            members.len() == 1
            && field.nullable()
            && field.raw_name() == field.name();

        if is_simple {
            let member_id = members[0].entity().resolve(self.storage)?;
            *type_repr.innermost_mut() = self.entity_repr(member_id);
            return Ok(UnionKind::SimpleUnion {
                member: member_id,
                union: union_id,
            });
        }

        Ok(UnionKind::TaggedUnion {
            alias: (field.raw_name() != field.name())
                .then(|| field.raw_name().to_string()),
            non_null: !field.nullable(),
            union: union_id,
        })
    }

    fn custom_scalar_repr(&self, scalar_name: &str) -> ScalarRepr {
        match self.config.scalar_mappings.get(scalar_name) {
            Some(target) => ScalarRepr::Custom {
                scalar_name: scalar_name.to_string(),
                target: target.to_string(),
            },
            None => ScalarRepr::String,
        }
    }

    /// The representation of a reference to an already-registered entity.
    pub fn entity_repr(&self, entity_id: EntityId) -> TypeRepr {
        match self.storage.get_by_id(entity_id) {
            SchemaEntity::Enum(_) if self.config.use_strings_for_enums =>
                TypeRepr::Scalar(ScalarRepr::String),
            SchemaEntity::Enum(_) => TypeRepr::Enum(entity_id),
            SchemaEntity::Object(_) => TypeRepr::Object(entity_id),
            SchemaEntity::Scalar(scalar_type) =>
                TypeRepr::Scalar(self.custom_scalar_repr(scalar_type.name())),
            SchemaEntity::Union(_) => TypeRepr::Union(entity_id),
        }
    }

    fn int_repr(representation: IntRepresentation, primitive: bool) -> ScalarRepr {
        match representation {
            IntRepresentation::BigInteger => ScalarRepr::BigInteger,
            IntRepresentation::Int32 => ScalarRepr::Int32 { primitive },
            IntRepresentation::Int64 => ScalarRepr::Int64 { primitive },
            IntRepresentation::String => ScalarRepr::String,
        }
    }

    pub fn new(config: &'a ModelConfig, storage: &'a SchemaStorage) -> Self {
        Self {
            config,
            storage,
        }
    }

    /// Maps a declared type onto its representation. List decorations become
    /// sequences of the configured kind once the element type is resolved.
    ///
    /// `referenced_by` names whatever holds the annotation and is reported if
    /// a named type can not be found.
    pub fn resolve_annotation(
        &self,
        type_annotation: &TypeAnnotation,
        referenced_by: &str,
    ) -> Result<TypeRepr> {
        self.resolve_annotation_impl(type_annotation, referenced_by, false)
    }

    fn resolve_annotation_impl(
        &self,
        type_annotation: &TypeAnnotation,
        referenced_by: &str,
        in_sequence: bool,
    ) -> Result<TypeRepr> {
        match type_annotation {
            TypeAnnotation::List { inner, .. } => Ok(TypeRepr::Sequence {
                element: Box::new(
                    self.resolve_annotation_impl(inner, referenced_by, true)?,
                ),
                kind: self.config.array_representation,
            }),

            TypeAnnotation::Named { name, .. } =>
                self.resolve_named(name, referenced_by, in_sequence),
        }
    }

    /// Picks the representation of a built-in scalar. Primitives are only
    /// chosen outside of sequences.
    pub fn resolve_builtin_scalar(
        &self,
        scalar: BuiltinScalar,
        in_sequence: bool,
    ) -> ScalarRepr {
        let primitive = self.config.use_primitives_for_scalars && !in_sequence;
        match scalar {
            BuiltinScalar::Boolean => ScalarRepr::Boolean { primitive },
            BuiltinScalar::Float => match self.config.float_representation {
                FloatRepresentation::BigDecimal => ScalarRepr::BigDecimal,
                FloatRepresentation::Double => ScalarRepr::Double { primitive },
                FloatRepresentation::Float => ScalarRepr::Float { primitive },
                FloatRepresentation::String => ScalarRepr::String,
            },
            BuiltinScalar::Id =>
                Self::int_repr(self.config.id_representation, primitive),
            BuiltinScalar::Int =>
                Self::int_repr(self.config.int_representation, primitive),
            BuiltinScalar::String => ScalarRepr::String,
        }
    }

    /// Resolves a field's declared type and classifies how it relates to
    /// unions.
    pub fn resolve_field(&self, field: &Field) -> Result<FieldRepr> {
        let referenced_by = format!("{}.{}", field.parent_name(), field.raw_name());
        let mut type_repr =
            self.resolve_annotation(field.type_annotation(), &referenced_by)?;
        let union_kind = self.classify_union(field, &mut type_repr)?;
        log::trace!("Resolved `{referenced_by}` to {type_repr:?} ({union_kind:?})");
        Ok(FieldRepr {
            type_repr,
            union_kind,
        })
    }

    fn resolve_named(
        &self,
        name: &str,
        referenced_by: &str,
        in_sequence: bool,
    ) -> Result<TypeRepr> {
        if let Some(scalar) = BuiltinScalar::from_name(name) {
            return Ok(TypeRepr::Scalar(
                self.resolve_builtin_scalar(scalar, in_sequence),
            ));
        }

        if let Some(entity_id) = self.storage.id_of(name) {
            return Ok(self.entity_repr(entity_id));
        }

        if self.config.scalar_mappings.contains_key(name) {
            return Ok(TypeRepr::Scalar(self.custom_scalar_repr(name)));
        }

        Err(ModelBuildError::UnresolvedTypeReference {
            type_name: name.to_string(),
            referenced_by: referenced_by.to_string(),
        })
    }
}
