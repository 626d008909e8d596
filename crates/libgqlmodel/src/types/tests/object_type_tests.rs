use crate::DeferredEntityRef;
use crate::ModelBuildError;
use crate::ModelBuilder;
use crate::config::ModelConfig;
use crate::types::EntityKey;
use crate::types::Field;
use crate::types::ObjectKind;
use crate::types::ObjectType;
use crate::types::TypeAnnotation;

type Result<T> = std::result::Result<T, ModelBuildError>;

#[test]
fn declared_interfaces_are_deduplicated() {
    let object_type = ObjectType::new(
        ObjectKind::Type,
        "",
        "Pet",
        &["Node", "Named", "Node"],
    );

    assert_eq!(object_type.interface_names(), vec!["Node", "Named"]);
}

#[test]
fn deferred_interfaces_follow_declared_ones() {
    let mut object_type = ObjectType::new(ObjectKind::Type, "", "Pet", &["Node"]);
    object_type.add_deferred_interface(DeferredEntityRef::new("Animal", "Pet"));
    object_type.add_deferred_interface(DeferredEntityRef::new("Node", "Pet"));

    assert_eq!(object_type.interface_names(), vec!["Node", "Animal"]);
}

#[test]
fn duplicate_fields_are_rejected() {
    let mut object_type = ObjectType::new::<&str>(ObjectKind::Input, "", "Filter", &[]);
    let make_field = || Field::new(
        "Filter",
        "name",
        "name".to_string(),
        TypeAnnotation::named("String", true),
        vec![],
    );

    assert_eq!(object_type.add_field(make_field()), Ok(()));
    assert_eq!(
        object_type.add_field(make_field()),
        Err(ModelBuildError::MalformedEntityBody {
            entity_name: "Filter".to_string(),
            detail: "field `name` is declared more than once".to_string(),
        }),
    );
}

#[test]
fn interfaces_resolve_through_the_model() -> Result<()> {
    let model = ModelBuilder::new(ModelConfig::default())
        .load_str(concat!(
            "type Dog implements Node { id: ID! }\n",
            "interface Node { id: ID! }\n",
            "union Pet = Dog\n",
        ))?
        .build()?;
    let dog = model.object_type("Dog").expect("Dog is declared");

    let interface_names: Vec<&str> = dog.interfaces(&model)?
        .into_iter()
        .map(|entity| entity.name())
        .collect();
    assert_eq!(interface_names, vec!["Node", "Pet"]);
    Ok(())
}

#[test]
fn keys_combine_namespace_and_name() -> Result<()> {
    let model = ModelBuilder::new(ModelConfig::default().with_namespace("zoo"))
        .load_str("enum Color { RED } type Cage { color: Color }")?
        .build()?;

    let mut keys: Vec<EntityKey> = model.entities()
        .into_iter()
        .map(|entity| entity.key())
        .collect();
    keys.sort();
    assert_eq!(keys, vec![
        EntityKey::new("zoo", "Cage"),
        EntityKey::new("zoo", "Color"),
    ]);
    assert_eq!(keys[0].to_string(), "zoo.Cage");
    Ok(())
}
