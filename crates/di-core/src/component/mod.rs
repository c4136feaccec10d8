//! Contrato de componente del árbol host.
//!
//! Un componente recibe sus props y el `Scope` explícito heredado de sus
//! ancestros, y devuelve el `Element` a renderizar. `child_scope` decide qué
//! entorno ven sus descendientes: es el punto donde un provider publica su
//! payload.

pub mod display;
pub mod hoist;

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::errors::DiError;
use crate::model::{ComponentMeta, Element, Props};
use crate::scope::Scope;

pub use display::display_name;
pub use hoist::hoist_statics;

/// Trait que define un componente. El render debe ser puro respecto a
/// props + scope.
pub trait Component: Send + Sync + fmt::Debug {
    /// Metadata de definición (nombre, display name, estáticos).
    fn meta(&self) -> &ComponentMeta;

    fn render(&self, props: &Props, scope: &Scope) -> Result<Element, DiError>;

    /// Entorno visible para lo que devuelve `render`. Por defecto se hereda.
    fn child_scope(&self, scope: &Scope) -> Scope {
        scope.clone()
    }

    /// Canales que este componente publica a sus descendientes.
    fn provides(&self) -> &[&'static str] {
        &[]
    }

    /// Canales que este componente lee de sus ancestros.
    fn consumes(&self) -> &[&'static str] {
        &[]
    }
}

pub type ComponentRef = Arc<dyn Component>;

type RenderFn = dyn Fn(&Props, &Scope) -> Result<Element, DiError> + Send + Sync;

/// Componente respaldado por un closure (el equivalente a un componente
/// función del host).
pub struct FnComponent {
    meta: ComponentMeta,
    render: Box<RenderFn>,
}

impl FnComponent {
    pub fn new<F>(name: impl Into<String>, render: F) -> Self
        where F: Fn(&Props, &Scope) -> Result<Element, DiError> + Send + Sync + 'static
    {
        Self { meta: ComponentMeta::named(name), render: Box::new(render) }
    }

    /// Componente sin nombre de definición.
    pub fn anonymous<F>(render: F) -> Self
        where F: Fn(&Props, &Scope) -> Result<Element, DiError> + Send + Sync + 'static
    {
        Self { meta: ComponentMeta::default(), render: Box::new(render) }
    }

    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.meta.display_name = Some(name.into());
        self
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.meta.doc = Some(doc.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.meta.tags.push(tag.into());
        self
    }

    pub fn constant(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.meta.constants.insert(key.into(), value.into());
        self
    }

    pub fn into_ref(self) -> ComponentRef {
        Arc::new(self)
    }
}

impl fmt::Debug for FnComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnComponent").field("meta", &self.meta).finish_non_exhaustive()
    }
}

impl Component for FnComponent {
    fn meta(&self) -> &ComponentMeta {
        &self.meta
    }

    fn render(&self, props: &Props, scope: &Scope) -> Result<Element, DiError> {
        (self.render)(props, scope)
    }
}
