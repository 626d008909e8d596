use crate::ModelBuildError;
use crate::SchemaModel;
use crate::types::EntityKey;
use crate::types::EntityNode;
use crate::types::SchemaEntity;
use crate::types::UnionMember;
use crate::types::UnionMemberDescriptor;
use inherent::inherent;

type Result<T> = std::result::Result<T, ModelBuildError>;

/// A union declaration (`union Shape = Circle | Square`).
#[derive(Clone, Debug, PartialEq)]
pub struct UnionType {
    pub(crate) members: Vec<UnionMember>,
    pub(crate) name: String,
    pub(crate) namespace: String,
}
impl UnionType {
    /// Resolved `(raw name, entity)` pairs for every member, in declaration
    /// order.
    pub fn member_descriptors(
        &self,
        model: &SchemaModel,
    ) -> Result<Vec<UnionMemberDescriptor>> {
        self.members
            .iter()
            .map(|member| -> Result<UnionMemberDescriptor> {
                Ok(UnionMemberDescriptor {
                    entity_id: member.entity.resolve(model.storage())?,
                    raw_name: member.raw_name.to_string(),
                })
            })
            .collect()
    }

    /// An ordered list of the raw names of this union's members.
    pub fn member_names(&self) -> Vec<&str> {
        self.members
            .iter()
            .map(|member| member.raw_name())
            .collect()
    }

    /// An ordered list of the entities that are members of this union.
    pub fn member_types<'model>(
        &self,
        model: &'model SchemaModel,
    ) -> Result<Vec<&'model SchemaEntity>> {
        self.members
            .iter()
            .map(|member| member.entity.deref(model.storage()))
            .collect()
    }

    pub fn members(&self) -> &[UnionMember] {
        self.members.as_slice()
    }

    /// Repeated member names are kept once, at their first position.
    pub fn new<S: AsRef<str>>(
        namespace: impl Into<String>,
        name: impl Into<String>,
        member_names: &[S],
    ) -> Self {
        let name = name.into();
        let mut members: Vec<UnionMember> = vec![];
        for member_name in member_names {
            let member_name = member_name.as_ref();
            if !members.iter().any(|member| member.raw_name() == member_name) {
                members.push(UnionMember::new(&name, member_name));
            }
        }
        Self {
            members,
            name,
            namespace: namespace.into(),
        }
    }
}

#[inherent]
impl EntityNode for UnionType {
    pub fn key(&self) -> EntityKey;

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn namespace(&self) -> &str {
        self.namespace.as_str()
    }
}
