//! Entorno explícito que se pasa de padres a hijos durante el render.
//!
//! Cada nodo recibe un `Scope` inmutable de su padre y puede sobrescribirlo
//! para sus hijos (`Component::child_scope`). El consumer lee el payload del
//! provider más cercano; si no hay ninguno obtiene contexto y acciones vacíos.

mod payload;

use std::sync::{Arc, OnceLock};

use log::debug;
use serde_json::Value;

use crate::actions::BoundActions;

pub use payload::DepsPayload;

fn empty_context() -> Arc<Value> {
    static EMPTY: OnceLock<Arc<Value>> = OnceLock::new();
    EMPTY.get_or_init(|| Arc::new(Value::Object(Default::default()))).clone()
}

fn empty_actions() -> Arc<BoundActions> {
    static EMPTY: OnceLock<Arc<BoundActions>> = OnceLock::new();
    EMPTY.get_or_init(|| Arc::new(BoundActions::empty())).clone()
}

#[derive(Debug, Clone, Default)]
pub struct Scope {
    deps: Option<Arc<DepsPayload>>,
    depth: usize,
}

impl Scope {
    /// Scope raíz: sin provider.
    pub fn root() -> Self {
        Self::default()
    }

    /// Scope hijo que publica `payload`, ocultando cualquier payload externo.
    pub fn provide(&self, payload: Arc<DepsPayload>) -> Self {
        debug!("scope {} provides deps {}", self.depth + 1, payload.scope_id());
        Self { deps: Some(payload), depth: self.depth + 1 }
    }

    /// Payload del provider más cercano, si existe.
    pub fn deps(&self) -> Option<&Arc<DepsPayload>> {
        self.deps.as_ref()
    }

    /// Contexto publicado, o un objeto vacío si no hay provider.
    pub fn context(&self) -> Arc<Value> {
        self.deps.as_ref().map(|d| d.context().clone()).unwrap_or_else(empty_context)
    }

    /// Acciones publicadas, o una tabla vacía si no hay provider.
    pub fn actions(&self) -> Arc<BoundActions> {
        self.deps.as_ref().map(|d| d.actions().clone()).unwrap_or_else(empty_actions)
    }

    /// Número de providers anidados por encima de este scope.
    pub fn depth(&self) -> usize {
        self.depth
    }
}
