//! Acciones: funciones cuyo primer argumento es el valor de contexto.
//!
//! - `ActionGroups` / `ActionGroup`: tabla sin ligar tal como la entrega el
//!   llamador del provider.
//! - `BoundActions` / `BoundGroup` / `BoundAction`: misma forma, con el
//!   contexto ya fijado. Se construye una vez por provider (ver `bind`).

pub mod bind;
mod bound;

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::errors::DiError;

pub use bind::bind_actions;
pub use bound::{BoundAction, BoundActions, BoundGroup};

/// Firma de una acción sin ligar: `(context, args) -> resultado`.
pub type ActionFn = Arc<dyn Fn(&Value, &[Value]) -> Result<Value, DiError> + Send + Sync>;

/// Entrada de un grupo de acciones.
///
/// `Data` representa un miembro que no es invocable; ligarlo falla.
#[derive(Clone)]
pub enum ActionEntry {
    Func(ActionFn),
    Data(Value),
}

impl fmt::Debug for ActionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionEntry::Func(_) => f.write_str("Func(..)"),
            ActionEntry::Data(v) => f.debug_tuple("Data").field(v).finish(),
        }
    }
}

/// Grupo de acciones con nombre, en orden de declaración.
#[derive(Debug, Clone, Default)]
pub struct ActionGroup {
    entries: IndexMap<String, ActionEntry>,
}

impl ActionGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Añade (o reemplaza) una acción invocable.
    pub fn action<F>(mut self, name: impl Into<String>, f: F) -> Self
        where F: Fn(&Value, &[Value]) -> Result<Value, DiError> + Send + Sync + 'static
    {
        self.entries.insert(name.into(), ActionEntry::Func(Arc::new(f)));
        self
    }

    /// Añade un miembro de datos (no invocable).
    pub fn data(mut self, name: impl Into<String>, value: Value) -> Self {
        self.entries.insert(name.into(), ActionEntry::Data(value));
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, entry: ActionEntry) -> Option<ActionEntry> {
        self.entries.insert(name.into(), entry)
    }

    pub fn get(&self, name: &str) -> Option<&ActionEntry> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ActionEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Tabla de grupos de acciones: nombre de grupo -> grupo.
#[derive(Debug, Clone, Default)]
pub struct ActionGroups {
    groups: IndexMap<String, ActionGroup>,
}

impl ActionGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group(mut self, name: impl Into<String>, group: ActionGroup) -> Self {
        self.groups.insert(name.into(), group);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, group: ActionGroup) -> Option<ActionGroup> {
        self.groups.insert(name.into(), group)
    }

    pub fn get(&self, name: &str) -> Option<&ActionGroup> {
        self.groups.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ActionGroup)> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
