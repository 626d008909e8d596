use std::sync::LazyLock;

/// `type`, `input`, `enum` or `interface` declaration with a single,
/// non-nested `{...}` body.
///
/// Captures: `extend` (optional), `keyword`, `name`, `implements` (optional),
/// `body`.
pub(crate) static ENTITY_PATTERN: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(concat!(
        r"\b(?:(?P<extend>extend)\s+)?",
        r"(?P<keyword>type|input|enum|interface)\s+",
        r"(?P<name>[_A-Za-z][_0-9A-Za-z]*)\s*",
        r"(?:implements\s+(?P<implements>[^{}]*?))?\s*",
        r"\{(?P<body>[^{}]*)\}",
    ))
    .expect("Invalid entity declaration regex")
});

/// `scalar` declaration. Captures: `extend` (optional), `name`.
pub(crate) static SCALAR_PATTERN: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"\b(?:(?P<extend>extend)\s+)?scalar\s+(?P<name>[_A-Za-z][_0-9A-Za-z]*)",
    )
    .expect("Invalid scalar declaration regex")
});

/// `union` declaration. Captures: `extend` (optional), `name`, `members`.
pub(crate) static UNION_PATTERN: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(concat!(
        r"\b(?:(?P<extend>extend)\s+)?union\s+",
        r"(?P<name>[_A-Za-z][_0-9A-Za-z]*)\s*=\s*\|?\s*",
        r"(?P<members>[_A-Za-z][_0-9A-Za-z]*(?:\s*\|\s*[_A-Za-z][_0-9A-Za-z]*)*)",
    ))
    .expect("Invalid union declaration regex")
});

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum DeclarationPattern {
    Entity,
    Scalar,
    Union,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct DeclarationMatch {
    pub(crate) end: usize,
    pub(crate) pattern: DeclarationPattern,
    pub(crate) start: usize,
}
impl DeclarationMatch {
    /// A union's member list may continue on the next line (`| Member`), so a
    /// union match only proves the declaration complete once some other text
    /// follows it.
    pub(crate) fn is_self_delimited(&self) -> bool {
        !matches!(self.pattern, DeclarationPattern::Union)
    }
}

/// Finds the declaration that starts earliest in `text`.
pub(crate) fn earliest_declaration(text: &str) -> Option<DeclarationMatch> {
    [
        (DeclarationPattern::Entity, &*ENTITY_PATTERN),
        (DeclarationPattern::Scalar, &*SCALAR_PATTERN),
        (DeclarationPattern::Union, &*UNION_PATTERN),
    ]
    .into_iter()
    .filter_map(|(pattern, regex)| {
        regex.find(text).map(|found| DeclarationMatch {
            end: found.end(),
            pattern,
            start: found.start(),
        })
    })
    .min_by_key(|found| found.start)
}

/// Indicates whether `text` opens more `{` than it closes.
pub(crate) fn has_unclosed_brace(text: &str) -> bool {
    let opened = text.chars().filter(|ch| *ch == '{').count();
    let closed = text.chars().filter(|ch| *ch == '}').count();
    opened > closed
}
