/// The SDL keyword an [`ObjectType`](crate::types::ObjectType) was declared
/// with.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ObjectKind {
    Input,
    Interface,
    Type,
}
impl ObjectKind {
    pub(crate) fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "input" => Some(Self::Input),
            "interface" => Some(Self::Interface),
            "type" => Some(Self::Type),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Interface => "interface",
            Self::Type => "type",
        }
    }
}
