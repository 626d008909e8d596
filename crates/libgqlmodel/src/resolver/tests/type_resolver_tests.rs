use crate::ModelBuildError;
use crate::ModelBuilder;
use crate::SchemaModel;
use crate::config::ArrayRepresentation;
use crate::config::FloatRepresentation;
use crate::config::IntRepresentation;
use crate::config::ModelConfig;
use crate::resolver::BuiltinScalar;
use crate::types::ScalarRepr;
use crate::types::TypeAnnotation;
use crate::types::TypeRepr;

type Result<T> = std::result::Result<T, ModelBuildError>;

const SCALARS_SCHEMA: &str = concat!(
    "enum Color { RED GREEN }\n",
    "type Sample {\n",
    "  flag: Boolean\n",
    "  count: Int\n",
    "  key: ID\n",
    "  ratio: Float\n",
    "  label: String\n",
    "  color: Color\n",
    "  counts: [Int]\n",
    "}\n",
);

fn build(config: ModelConfig) -> Result<SchemaModel> {
    ModelBuilder::new(config).load_str(SCALARS_SCHEMA)?.build()
}

fn field_repr(model: &SchemaModel, field_name: &str) -> Result<TypeRepr> {
    let sample = model.object_type("Sample").expect("Sample is declared");
    let field = sample.field(field_name).expect("field is declared");
    Ok(field.type_repr(model)?.clone())
}

fn scalar(model: &SchemaModel, field_name: &str) -> Result<ScalarRepr> {
    match field_repr(model, field_name)? {
        TypeRepr::Scalar(scalar_repr) => Ok(scalar_repr),
        other => panic!("`{field_name}` is not a scalar: {other:?}"),
    }
}

#[test]
fn defaults() -> Result<()> {
    let model = build(ModelConfig::default())?;

    assert_eq!(scalar(&model, "flag")?, ScalarRepr::Boolean { primitive: false });
    assert_eq!(scalar(&model, "count")?, ScalarRepr::Int32 { primitive: false });
    assert_eq!(scalar(&model, "key")?, ScalarRepr::String);
    assert_eq!(scalar(&model, "ratio")?, ScalarRepr::Double { primitive: false });
    assert_eq!(scalar(&model, "label")?, ScalarRepr::String);
    let color_id = model.storage().id_of("Color").expect("Color is declared");
    assert_eq!(field_repr(&model, "color")?, TypeRepr::Enum(color_id));
    assert_eq!(field_repr(&model, "counts")?, TypeRepr::Sequence {
        element: Box::new(TypeRepr::Scalar(ScalarRepr::Int32 { primitive: false })),
        kind: ArrayRepresentation::List,
    });
    Ok(())
}

#[test]
fn primitives_never_apply_to_sequence_elements() -> Result<()> {
    let model = build(ModelConfig::default().with_primitives_for_scalars(true))?;

    assert_eq!(scalar(&model, "flag")?, ScalarRepr::Boolean { primitive: true });
    assert_eq!(scalar(&model, "count")?, ScalarRepr::Int32 { primitive: true });
    assert_eq!(scalar(&model, "ratio")?, ScalarRepr::Double { primitive: true });
    assert_eq!(field_repr(&model, "counts")?, TypeRepr::Sequence {
        element: Box::new(TypeRepr::Scalar(ScalarRepr::Int32 { primitive: false })),
        kind: ArrayRepresentation::List,
    });
    Ok(())
}

#[test]
fn int_and_id_are_configured_independently() -> Result<()> {
    let model = build(
        ModelConfig::default()
            .with_int_representation(IntRepresentation::BigInteger)
            .with_id_representation(IntRepresentation::Int64),
    )?;

    assert_eq!(scalar(&model, "count")?, ScalarRepr::BigInteger);
    assert_eq!(scalar(&model, "key")?, ScalarRepr::Int64 { primitive: false });
    assert_eq!(scalar(&model, "ratio")?, ScalarRepr::Double { primitive: false });
    Ok(())
}

#[test]
fn float_axis_leaves_other_scalars_alone() -> Result<()> {
    for (float_repr, expected) in [
        (FloatRepresentation::BigDecimal, ScalarRepr::BigDecimal),
        (FloatRepresentation::Double, ScalarRepr::Double { primitive: false }),
        (FloatRepresentation::Float, ScalarRepr::Float { primitive: false }),
        (FloatRepresentation::String, ScalarRepr::String),
    ] {
        let model = build(
            ModelConfig::default().with_float_representation(float_repr),
        )?;
        assert_eq!(scalar(&model, "ratio")?, expected);
        assert_eq!(scalar(&model, "count")?, ScalarRepr::Int32 { primitive: false });
        assert_eq!(scalar(&model, "key")?, ScalarRepr::String);
    }
    Ok(())
}

#[test]
fn enums_become_strings_when_configured() -> Result<()> {
    let model = build(ModelConfig::default().with_strings_for_enums(true))?;

    assert_eq!(scalar(&model, "color")?, ScalarRepr::String);
    assert!(model.enum_type("Color").is_some());
    Ok(())
}

#[test]
fn array_representation_wraps_every_list_level() -> Result<()> {
    let model = ModelBuilder::new(
        ModelConfig::default().with_array_representation(ArrayRepresentation::Set),
    )
    .load_str("type Grid { cells: [[Int!]!] }")?
    .build()?;
    let grid = model.object_type("Grid").expect("Grid is declared");
    let cells = grid.field("cells").expect("cells is declared");

    assert_eq!(model.describe_type(cells.type_repr(&model)?), "Set<Set<Int32>>");
    Ok(())
}

#[test]
fn custom_scalars_use_mappings_or_fall_back_to_string() -> Result<()> {
    let model = ModelBuilder::new(
        ModelConfig::default()
            .with_scalar_mapping("DateTime", "Instant")
            .with_scalar_mapping("Json", "JsonNode"),
    )
    .load_str(concat!(
        "scalar DateTime\n",
        "scalar Url\n",
        "type Event { at: DateTime link: Url payload: Json }\n",
    ))?
    .build()?;
    let event = model.object_type("Event").expect("Event is declared");

    let described: Vec<String> = event.fields()
        .map(|field| field.type_repr(&model).map(|repr| model.describe_type(repr)))
        .collect::<Result<_>>()?;
    assert_eq!(described, vec!["Instant", "String", "JsonNode"]);
    Ok(())
}

#[test]
fn resolve_builtin_scalar_directly() -> Result<()> {
    let model = build(
        ModelConfig::default()
            .with_primitives_for_scalars(true)
            .with_id_representation(IntRepresentation::Int32),
    )?;
    let resolver = model.resolver();

    assert_eq!(
        resolver.resolve_builtin_scalar(BuiltinScalar::Id, false),
        ScalarRepr::Int32 { primitive: true },
    );
    assert_eq!(
        resolver.resolve_builtin_scalar(BuiltinScalar::Id, true),
        ScalarRepr::Int32 { primitive: false },
    );
    assert_eq!(BuiltinScalar::from_name("ID"), Some(BuiltinScalar::Id));
    assert_eq!(BuiltinScalar::from_name("Id"), None);
    Ok(())
}

#[test]
fn unknown_names_are_reported_with_their_referrer() -> Result<()> {
    let model = build(ModelConfig::default())?;

    assert_eq!(
        model.resolver().resolve_annotation(
            &TypeAnnotation::list(TypeAnnotation::named("Ghost", true), true),
            "Sample.ghosts",
        ),
        Err(ModelBuildError::UnresolvedTypeReference {
            type_name: "Ghost".to_string(),
            referenced_by: "Sample.ghosts".to_string(),
        }),
    );
    Ok(())
}
