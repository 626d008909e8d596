use crate::ModelBuildError;
use crate::ModelBuilder;
use crate::SchemaModel;
use crate::config::FieldNaming;
use crate::config::ModelConfig;
use crate::types::ObjectKind;
use crate::types::SchemaEntity;
use crate::types::TypeRepr;

type Result<T> = std::result::Result<T, ModelBuildError>;

fn build_default(schema: &str) -> Result<SchemaModel> {
    ModelBuilder::new(ModelConfig::default()).load_str(schema)?.build()
}

fn described_fields(model: &SchemaModel, type_name: &str) -> Result<Vec<String>> {
    let object_type = model.object_type(type_name).expect("type is declared");
    object_type.fields()
        .map(|field| -> Result<String> {
            Ok(format!(
                "{}: {}",
                field.name(),
                model.describe_type(field.type_repr(model)?),
            ))
        })
        .collect()
}

#[test]
fn query_and_pet_under_defaults() -> Result<()> {
    let model = build_default("type Query { pet: Pet } type Pet { id: ID name: String }")?;

    assert_eq!(model.entities().len(), 2);
    assert_eq!(described_fields(&model, "Pet")?, vec![
        "id: String".to_string(),
        "name: String".to_string(),
    ]);
    assert_eq!(described_fields(&model, "Query")?, vec!["pet: Pet".to_string()]);
    Ok(())
}

#[test]
fn forward_and_backward_references_reach_the_same_node() -> Result<()> {
    let model = build_default(concat!(
        "type Before { pet: Pet }\n",
        "type Pet { name: String }\n",
        "type After { pet: Pet }\n",
    ))?;
    let pet_id = model.storage().id_of("Pet").expect("Pet is declared");

    for owner in ["Before", "After"] {
        let field = model.object_type(owner)
            .and_then(|object_type| object_type.field("pet"))
            .expect("field is declared");
        assert_eq!(field.type_repr(&model)?, &TypeRepr::Object(pet_id));
    }
    Ok(())
}

#[test]
fn mutual_references_resolve() -> Result<()> {
    let model = build_default(concat!(
        "type Owner { pets: [Pet!]! best: Pet }\n",
        "type Pet { owner: Owner! self: Pet friends: Friend }\n",
        "union Friend = Owner | Pet\n",
    ))?;

    assert_eq!(described_fields(&model, "Pet")?, vec![
        "owner: Owner".to_string(),
        "self: Pet".to_string(),
        "friends: Friend".to_string(),
    ]);
    let owner = model.object_type("Owner").expect("Owner is declared");
    assert_eq!(owner.interface_names(), vec!["Friend"]);
    Ok(())
}

#[test]
fn shapes_union_exposes_member_descriptors() -> Result<()> {
    let model = build_default(
        "union Shape = Circle | Square  type Circle{r:Int}  type Square{s:Int}  type Query{shape:Shape}",
    )?;
    let shape = model.union_type("Shape").expect("Shape is declared");
    assert_eq!(shape.member_names(), vec!["Circle", "Square"]);

    let field = model.object_type("Query")
        .and_then(|query| query.field("shape"))
        .expect("Query.shape is declared");
    assert!(field.is_union(&model)?);
    let members = field.representation(&model)?.union_members(&model)?;
    assert_eq!(members.len(), 2);
    assert_eq!(model.entity_by_id(members[1].entity_id).name(), "Square");
    Ok(())
}

#[test]
fn interface_and_input_kinds_are_recorded() -> Result<()> {
    let model = build_default("interface Node { id: ID! } input Filter { id: ID }")?;

    assert_eq!(model.object_type("Node").map(|node| node.kind()), Some(ObjectKind::Interface));
    assert_eq!(model.object_type("Filter").map(|node| node.kind()), Some(ObjectKind::Input));
    Ok(())
}

#[test]
fn unresolved_reference_fails_the_build() {
    assert_eq!(
        build_default("type Query { ghost: Ghost }").map(|_| ()),
        Err(ModelBuildError::UnresolvedTypeReference {
            type_name: "Ghost".to_string(),
            referenced_by: "Query.ghost".to_string(),
        }),
    );
}

#[test]
fn unresolved_argument_and_union_member_fail_the_build() {
    assert!(matches!(
        build_default("type Query { pets(filter: Missing): String }"),
        Err(ModelBuildError::UnresolvedTypeReference { type_name, .. })
            if type_name == "Missing"
    ));
    assert!(matches!(
        build_default("union Any = Nowhere type Query { any: Any! }"),
        Err(ModelBuildError::UnresolvedTypeReference { type_name, referenced_by })
            if type_name == "Nowhere" && referenced_by == "Any"
    ));
}

#[test]
fn duplicate_declarations_fail() {
    assert_eq!(
        build_default("type Pet { a: Int } enum Pet { A }").map(|_| ()),
        Err(ModelBuildError::DuplicateEntityDefinition {
            entity_name: "Pet".to_string(),
        }),
    );
    assert!(matches!(
        build_default("enum Color { RED RED }"),
        Err(ModelBuildError::MalformedEntityBody { .. }),
    ));
}

#[test]
fn field_naming_and_reserved_words() -> Result<()> {
    let model = ModelBuilder::new(
        ModelConfig::default()
            .with_field_naming(FieldNaming::Snake)
            .with_reserved_words(["type"]),
    )
    .load_str("type Pet { petName: String type: String }")?
    .build()?;
    let pet = model.object_type("Pet").expect("Pet is declared");

    let names: Vec<(&str, &str)> = pet.fields()
        .map(|field| (field.raw_name(), field.name()))
        .collect();
    assert_eq!(names, vec![("petName", "pet_name"), ("type", "type_")]);
    Ok(())
}

#[test]
fn field_arguments_resolve_through_the_model() -> Result<()> {
    let model = build_default("type Query { pets(first: Int!, kinds: [Kind]): String } enum Kind { CAT }")?;
    let field = model.object_type("Query")
        .and_then(|query| query.field("pets"))
        .expect("Query.pets is declared");

    let described: Vec<String> = field.arguments()
        .iter()
        .map(|arg| arg.representation(&model).map(|repr| model.describe_type(&repr)))
        .collect::<Result<_>>()?;
    assert_eq!(described, vec!["Int32", "List<Kind>"]);
    Ok(())
}

#[test]
fn entities_span_every_kind() -> Result<()> {
    let model = build_default("scalar Date enum E { A } union U = T type T { d: Date }")?;

    let mut kinds: Vec<&str> = model.entities()
        .into_iter()
        .map(SchemaEntity::kind_name)
        .collect();
    kinds.sort();
    assert_eq!(kinds, vec!["enum", "scalar", "type", "union"]);
    Ok(())
}

#[test]
fn empty_schema_builds_an_empty_model() -> Result<()> {
    let model = build_default("# nothing here\n")?;
    assert!(model.storage().is_empty());
    Ok(())
}

#[test]
fn input_fields_with_defaults_build() -> Result<()> {
    let model = build_default("input Filter { first: Int = 10 name: String = \"x\" }")?;

    assert_eq!(described_fields(&model, "Filter")?, vec![
        "first: Int32".to_string(),
        "name: String".to_string(),
    ]);
    Ok(())
}

#[test]
fn unknown_implements_target_fails_the_build() {
    assert_eq!(
        build_default("type Pet implements Node { id: ID }").map(|_| ()),
        Err(ModelBuildError::UnresolvedTypeReference {
            type_name: "Node".to_string(),
            referenced_by: "Pet".to_string(),
        }),
    );
}
