use crate::ModelBuildError;
use crate::model::DeclarationBody;
use crate::model::MemberListParser;
use crate::tokenizer::patterns;
use crate::types::ObjectKind;

type Result<T> = std::result::Result<T, ModelBuildError>;

/// One tokenized block, parsed into its name and members.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct EntityDeclaration {
    pub(crate) body: DeclarationBody,
    pub(crate) is_extension: bool,
    pub(crate) name: String,
}
impl EntityDeclaration {
    /// Parses a block produced by the
    /// [`EntityTokenizer`](crate::tokenizer::EntityTokenizer). The block must
    /// consist of exactly one declaration.
    pub(crate) fn parse(block: &str) -> Result<Self> {
        let block = block.trim();
        let spans_block = |start: usize, end: usize| start == 0 && end == block.len();

        if let Some(caps) = patterns::ENTITY_PATTERN.captures(block)
            && let Some(whole) = caps.get(0)
            && spans_block(whole.start(), whole.end()) {
            let name = caps["name"].to_string();
            let keyword = &caps["keyword"];
            let body_text = &caps["body"];
            let body =
                if let Some(kind) = ObjectKind::from_keyword(keyword) {
                    DeclarationBody::Object {
                        fields: MemberListParser::new(&name, body_text)
                            .parse_fields()?,
                        implements: caps.name("implements")
                            .map(|implements| unique_names(
                                split_names(implements.as_str(), &['&', ',']),
                            ))
                            .unwrap_or_default(),
                        kind,
                    }
                } else {
                    DeclarationBody::Enum {
                        values: MemberListParser::new(&name, body_text)
                            .parse_enum_values()?,
                    }
                };
            return Ok(Self {
                body,
                is_extension: caps.name("extend").is_some(),
                name,
            });
        }

        if let Some(caps) = patterns::UNION_PATTERN.captures(block)
            && let Some(whole) = caps.get(0)
            && spans_block(whole.start(), whole.end()) {
            return Ok(Self {
                body: DeclarationBody::Union {
                    members: unique_names(split_names(&caps["members"], &['|'])),
                },
                is_extension: caps.name("extend").is_some(),
                name: caps["name"].to_string(),
            });
        }

        if let Some(caps) = patterns::SCALAR_PATTERN.captures(block)
            && let Some(whole) = caps.get(0)
            && spans_block(whole.start(), whole.end()) {
            return Ok(Self {
                body: DeclarationBody::Scalar,
                is_extension: caps.name("extend").is_some(),
                name: caps["name"].to_string(),
            });
        }

        Err(ModelBuildError::UnrecognizedDeclaration {
            text: block.to_string(),
        })
    }
}

fn split_names(text: &str, separators: &[char]) -> Vec<String> {
    text.split(|ch: char| ch.is_whitespace() || separators.contains(&ch))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

fn unique_names(names: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        if !unique.contains(&name) {
            unique.push(name);
        }
    }
    unique
}
