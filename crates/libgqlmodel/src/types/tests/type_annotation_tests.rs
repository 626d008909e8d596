use crate::types::TypeAnnotation;

#[test]
fn display_renders_sdl_syntax() {
    let annotation = TypeAnnotation::list(TypeAnnotation::named("Pet", false), false);
    assert_eq!(annotation.to_string(), "[Pet!]!");

    let annotation = TypeAnnotation::list(
        TypeAnnotation::list(TypeAnnotation::named("Int", true), true),
        true,
    );
    assert_eq!(annotation.to_string(), "[[Int]]");
}

#[test]
fn innermost_type_name_unwraps_nested_lists() {
    let annotation = TypeAnnotation::list(
        TypeAnnotation::list(TypeAnnotation::named("Pet", false), true),
        false,
    );

    assert_eq!(annotation.innermost_type_name(), "Pet");
    assert!(annotation.is_list());
    assert!(!annotation.nullable());
}
