use crate::model::FieldDeclaration;
use crate::types::ObjectKind;

/// The kind-specific part of a parsed declaration.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum DeclarationBody {
    Enum {
        values: Vec<String>,
    },
    Object {
        fields: Vec<FieldDeclaration>,
        implements: Vec<String>,
        kind: ObjectKind,
    },
    Scalar,
    Union {
        members: Vec<String>,
    },
}
impl DeclarationBody {
    pub(crate) fn keyword(&self) -> &'static str {
        match self {
            Self::Enum { .. } => "enum",
            Self::Object { kind, .. } => kind.keyword(),
            Self::Scalar => "scalar",
            Self::Union { .. } => "union",
        }
    }
}
