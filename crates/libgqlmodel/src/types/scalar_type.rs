use crate::types::EntityKey;
use crate::types::EntityNode;
use inherent::inherent;

/// A custom scalar declared with `scalar Name`.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarType {
    pub(crate) name: String,
    pub(crate) namespace: String,
}
impl ScalarType {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
        }
    }
}

#[inherent]
impl EntityNode for ScalarType {
    pub fn key(&self) -> EntityKey;

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn namespace(&self) -> &str {
        self.namespace.as_str()
    }
}
