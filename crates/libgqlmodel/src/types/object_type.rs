use crate::DeferredEntityRef;
use crate::ModelBuildError;
use crate::SchemaModel;
use crate::storage::EntityId;
use crate::types::EntityKey;
use crate::types::EntityNode;
use crate::types::Field;
use crate::types::ObjectKind;
use crate::types::SchemaEntity;
use indexmap::IndexMap;
use inherent::inherent;
use std::cell::OnceCell;

type Result<T> = std::result::Result<T, ModelBuildError>;

/// A record-like entity declared with `type`, `input` or `interface`.
///
/// The interface list is assembled from two sources: the declaration's own
/// `implements` clause and interfaces contributed later by other declarations
/// (every union tells each of its members that it is implemented by them).
/// The merged list is computed on first read and memoized.
#[derive(Clone, Debug)]
pub struct ObjectType {
    pub(crate) declared_interfaces: Vec<DeferredEntityRef>,
    pub(crate) deferred_interfaces: Vec<DeferredEntityRef>,
    pub(crate) fields: IndexMap<String, Field>,
    pub(crate) kind: ObjectKind,
    pub(crate) name: String,
    pub(crate) namespace: String,
    pub(crate) resolved_interfaces: OnceCell<Vec<EntityId>>,
}
impl ObjectType {
    pub(crate) fn add_declared_interface(&mut self, interface_name: &str) {
        if self.declared_interfaces.iter().any(|iface| iface.name() == interface_name) {
            return;
        }
        self.declared_interfaces.push(
            DeferredEntityRef::new(interface_name, &self.name),
        );
        self.resolved_interfaces.take();
    }

    pub(crate) fn add_deferred_interface(&mut self, supplier: DeferredEntityRef) {
        self.deferred_interfaces.push(supplier);
        self.resolved_interfaces.take();
    }

    /// Adds a field, failing if a field with the same normalized name already
    /// exists on this type.
    pub(crate) fn add_field(&mut self, field: Field) -> Result<()> {
        if self.fields.contains_key(field.name()) {
            return Err(ModelBuildError::MalformedEntityBody {
                entity_name: self.name.to_string(),
                detail: format!("field `{}` is declared more than once", field.name()),
            });
        }
        self.fields.insert(field.name().to_string(), field);
        Ok(())
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// This type's fields, in declaration order. Fields added by extensions
    /// follow the ones from the base declaration.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }

    /// Names of every interface this type implements, declared ones first.
    /// Deferred interfaces are included whether or not they were read yet.
    pub fn interface_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = vec![];
        for interface_ref in self.declared_interfaces
            .iter()
            .chain(self.deferred_interfaces.iter()) {
            if !names.contains(&interface_ref.name()) {
                names.push(interface_ref.name());
            }
        }
        names
    }

    /// The entities of every interface this type implements.
    pub fn interfaces<'model>(
        &self,
        model: &'model SchemaModel,
    ) -> Result<Vec<&'model SchemaEntity>> {
        let storage = model.storage();
        Ok(storage.resolve_interfaces(self)?
            .iter()
            .map(|interface_id| storage.get_by_id(*interface_id))
            .collect())
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    pub fn new<S: AsRef<str>>(
        kind: ObjectKind,
        namespace: impl Into<String>,
        name: impl Into<String>,
        implements: &[S],
    ) -> Self {
        let name = name.into();
        let mut declared_interfaces: Vec<DeferredEntityRef> = vec![];
        for interface_name in implements {
            let interface_name = interface_name.as_ref();
            if !declared_interfaces.iter().any(|iface| iface.name() == interface_name) {
                declared_interfaces.push(DeferredEntityRef::new(interface_name, &name));
            }
        }
        Self {
            declared_interfaces,
            deferred_interfaces: vec![],
            fields: IndexMap::new(),
            kind,
            name,
            namespace: namespace.into(),
            resolved_interfaces: OnceCell::new(),
        }
    }
}

#[inherent]
impl EntityNode for ObjectType {
    pub fn key(&self) -> EntityKey;

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn namespace(&self) -> &str {
        self.namespace.as_str()
    }
}
