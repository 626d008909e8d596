use crate::tokenizer::LineNormalizer;

fn normalize_all(lines: &[&str]) -> Vec<String> {
    let mut normalizer = LineNormalizer::new();
    lines.iter()
        .filter_map(|line| normalizer.normalize_line(line))
        .collect()
}

#[test]
fn strips_trailing_comment() {
    assert_eq!(
        normalize_all(&["  name: String # the display name"]),
        vec!["name: String".to_string()],
    );
}

#[test]
fn comment_only_and_blank_lines_are_dropped() {
    assert!(normalize_all(&["# a comment", "", "    ", "\t# indented"]).is_empty());
}

#[test]
fn collapses_whitespace_runs() {
    assert_eq!(
        normalize_all(&["type   Pet\t\t{   id :  ID  }"]),
        vec!["type Pet { id : ID }".to_string()],
    );
}

#[test]
fn strips_directive_without_arguments() {
    assert_eq!(
        normalize_all(&["oldName: String @deprecated"]),
        vec!["oldName: String".to_string()],
    );
}

#[test]
fn strips_directive_with_arguments() {
    assert_eq!(
        normalize_all(&["type Pet @key(fields: \"id\") @shareable {"]),
        vec!["type Pet {".to_string()],
    );
}

#[test]
fn strips_directive_arguments_spanning_lines() {
    assert_eq!(
        normalize_all(&[
            "legacy: Int @deprecated(",
            "  reason: \"use `current` (not this)\"",
            ")",
            "current: Int",
        ]),
        vec!["legacy: Int".to_string(), "current: Int".to_string()],
    );
}

#[test]
fn string_contents_are_emptied() {
    assert_eq!(
        normalize_all(&["\"A { brace } and # hash\" name: String = \"x # y\""]),
        vec!["\"\" name: String = \"\"".to_string()],
    );
}

#[test]
fn escaped_quotes_stay_inside_the_literal() {
    assert_eq!(
        normalize_all(&[r#"title: String = "say \"hi\" # now""#]),
        vec![r#"title: String = """#.to_string()],
    );
}

#[test]
fn block_strings_spanning_lines_are_dropped() {
    assert_eq!(
        normalize_all(&[
            "\"\"\"",
            "Describes a type Pet { with braces }",
            "\"\"\"",
            "type Pet {",
        ]),
        vec!["\"\"".to_string(), "type Pet {".to_string()],
    );
}

#[test]
fn single_line_block_string_is_emptied() {
    assert_eq!(
        normalize_all(&["\"\"\"The id\"\"\" id: ID"]),
        vec!["\"\" id: ID".to_string()],
    );
}
