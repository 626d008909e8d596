use libgqlmodel::ModelBuildError;
use libgqlmodel::ModelBuilder;
use libgqlmodel::config::ArrayRepresentation;
use libgqlmodel::config::IntRepresentation;
use libgqlmodel::config::ModelConfig;
use libgqlmodel::tokenizer::EntityTokenizer;
use libgqlmodel::types::UnionKind;
use std::path::PathBuf;
use tempfile::TempDir;

type Result<T> = std::result::Result<T, ModelBuildError>;

fn write_schema(dir: &TempDir, file_name: &str, content: &str) -> PathBuf {
    let file_path = dir.path().join(file_name);
    std::fs::write(&file_path, content).expect("write schema file");
    file_path
}

#[test]
fn references_resolve_across_files() -> Result<()> {
    let dir = tempfile::tempdir().expect("create temp dir");
    let query_path = write_schema(&dir, "query.graphql", concat!(
        "\"\"\"\n",
        "Entry point { with braces } and a # hash\n",
        "\"\"\"\n",
        "type Query {\n",
        "  pets(first: Int = 10): [Pet!]! @deprecated(\n",
        "    reason: \"use animals\"\n",
        "  )\n",
        "  search: SearchResult\n",
        "}\n",
    ));
    let types_path = write_schema(&dir, "types.graphqls", concat!(
        "type Pet {\n",
        "  id: ID!\n",
        "  age: Int\n",
        "}\n",
        "type Owner { name: String }\n",
        "union SearchResult =\n",
        "  | Pet\n",
        "  | Owner\n",
    ));

    let model = ModelBuilder::from_files(
        ModelConfig::default()
            .with_array_representation(ArrayRepresentation::Array)
            .with_id_representation(IntRepresentation::Int64),
        [&query_path, &types_path],
    )?
    .build()?;

    let query = model.object_type("Query").expect("Query is declared");
    let pets = query.field("pets").expect("Query.pets is declared");
    assert_eq!(model.describe_type(pets.type_repr(&model)?), "Array<Pet>");
    assert_eq!(pets.arguments().len(), 1);

    let search = query.field("search").expect("Query.search is declared");
    assert!(matches!(
        search.union_kind(&model)?,
        UnionKind::TaggedUnion { non_null: false, alias: None, .. },
    ));

    let pet = model.object_type("Pet").expect("Pet is declared");
    let id = pet.field("id").expect("Pet.id is declared");
    assert_eq!(model.describe_type(id.type_repr(&model)?), "Int64");
    assert!(!id.nullable());
    assert_eq!(pet.interface_names(), vec!["SearchResult"]);
    Ok(())
}

#[test]
fn missing_file_contributes_nothing() -> Result<()> {
    let dir = tempfile::tempdir().expect("create temp dir");
    let missing_path = dir.path().join("absent.graphql");

    assert_eq!(EntityTokenizer::from_path(&missing_path).count(), 0);
    let model = ModelBuilder::from_file(ModelConfig::default(), &missing_path)?
        .build()?;
    assert!(model.entities().is_empty());
    Ok(())
}

#[test]
fn directory_paths_yield_no_entities() -> Result<()> {
    let dir = tempfile::tempdir().expect("create temp dir");

    assert_eq!(EntityTokenizer::from_path(dir.path()).count(), 0);
    Ok(())
}

#[test]
fn config_survives_serialization() {
    let config = ModelConfig::default()
        .with_int_representation(IntRepresentation::BigInteger)
        .with_namespace("zoo")
        .with_reserved_words(["type", "match"])
        .with_scalar_mapping("DateTime", "Instant");

    let bytes = bincode::serde::encode_to_vec(&config, bincode::config::standard())
        .expect("encode config");
    let (decoded, _): (ModelConfig, usize) =
        bincode::serde::decode_from_slice(&bytes, bincode::config::standard())
            .expect("decode config");
    assert_eq!(decoded, config);
}
