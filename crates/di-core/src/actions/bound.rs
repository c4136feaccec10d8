use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use super::ActionFn;
use crate::errors::DiError;

/// Acción con el contexto fijado como primer argumento.
#[derive(Clone)]
pub struct BoundAction {
    group: Arc<str>,
    name: Arc<str>,
    context: Arc<Value>,
    func: ActionFn,
}

impl BoundAction {
    pub(crate) fn new(group: Arc<str>, name: Arc<str>, context: Arc<Value>, func: ActionFn) -> Self {
        Self { group, name, context, func }
    }

    /// Invoca la acción original como `original(context, args...)`.
    pub fn call(&self, args: &[Value]) -> Result<Value, DiError> {
        (self.func)(self.context.as_ref(), args)
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contexto ligado a esta acción.
    pub fn context(&self) -> &Arc<Value> {
        &self.context
    }
}

impl fmt::Debug for BoundAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoundAction({}.{})", self.group, self.name)
    }
}

/// Grupo de acciones ligadas.
#[derive(Debug, Clone, Default)]
pub struct BoundGroup {
    actions: IndexMap<String, BoundAction>,
}

impl BoundGroup {
    pub(crate) fn insert(&mut self, name: String, action: BoundAction) {
        self.actions.insert(name, action);
    }

    pub fn get(&self, name: &str) -> Option<&BoundAction> {
        self.actions.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BoundAction)> {
        self.actions.iter()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Tabla de acciones ligadas compartida por todo el subárbol de un provider.
#[derive(Debug, Clone, Default)]
pub struct BoundActions {
    groups: IndexMap<String, BoundGroup>,
}

impl BoundActions {
    /// Tabla vacía (provider sin acciones o consumer sin provider).
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: String, group: BoundGroup) {
        self.groups.insert(name, group);
    }

    pub fn group(&self, name: &str) -> Option<&BoundGroup> {
        self.groups.get(name)
    }

    pub fn action(&self, group: &str, name: &str) -> Option<&BoundAction> {
        self.groups.get(group).and_then(|g| g.get(name))
    }

    /// Busca y ejecuta `group.name(args)`.
    pub fn call(&self, group: &str, name: &str, args: &[Value]) -> Result<Value, DiError> {
        let action = self.action(group, name)
                         .ok_or_else(|| DiError::UnknownAction { group: group.to_string(), action: name.to_string() })?;
        action.call(args)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BoundGroup)> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
