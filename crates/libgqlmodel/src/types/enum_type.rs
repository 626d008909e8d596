use crate::types::EntityKey;
use crate::types::EntityNode;
use inherent::inherent;

/// An enumeration and its constants, in declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumType {
    pub(crate) name: String,
    pub(crate) namespace: String,
    pub(crate) values: Vec<String>,
}
impl EnumType {
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        values: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            values,
        }
    }

    /// The enum's constant names, ordered as declared. Values added by an
    /// `extend enum` block follow the ones from the base declaration.
    pub fn values(&self) -> &[String] {
        self.values.as_slice()
    }
}

#[inherent]
impl EntityNode for EnumType {
    pub fn key(&self) -> EntityKey;

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn namespace(&self) -> &str {
        self.namespace.as_str()
    }
}
