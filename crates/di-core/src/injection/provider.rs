//! Provider: publica contexto y acciones ligadas a todo un subárbol.

use std::sync::Arc;

use log::debug;
use serde_json::Value;

use super::Enhancer;
use crate::actions::{bind_actions, ActionGroups, BoundActions};
use crate::component::display::wrapped_name;
use crate::component::{hoist_statics, Component, ComponentRef};
use crate::constants::{DEPS_CHANNELS, PROVIDER_PREFIX};
use crate::errors::DiError;
use crate::model::{ComponentMeta, Element, Props};
use crate::scope::{DepsPayload, Scope};

/// Construye el enhancer del provider.
///
/// Las acciones se ligan aquí, una única vez; `None` equivale a una tabla
/// vacía. La `ActionGroups` del llamador no se modifica.
pub fn inject_deps(context: impl Into<Value>, actions: Option<&ActionGroups>) -> Result<DepsInjector, DiError> {
    let context = Arc::new(context.into());
    let bound = match actions {
        Some(groups) => bind_actions(&context, groups)?,
        None => BoundActions::empty(),
    };
    let payload = Arc::new(DepsPayload::new(context, Arc::new(bound)));
    debug!("inject_deps: payload {} with {} action groups", payload.scope_id(), payload.actions().len());
    Ok(DepsInjector { payload })
}

/// Enhancer devuelto por `inject_deps`.
#[derive(Debug, Clone)]
pub struct DepsInjector {
    payload: Arc<DepsPayload>,
}

impl DepsInjector {
    pub fn payload(&self) -> &Arc<DepsPayload> {
        &self.payload
    }

    pub fn wrap(&self, component: ComponentRef) -> ComponentRef {
        Arc::new(WithDeps::new(component, self.payload.clone()))
    }
}

impl Enhancer for DepsInjector {
    fn wrap(&self, component: ComponentRef) -> ComponentRef {
        DepsInjector::wrap(self, component)
    }
}

/// Componente envuelto por el provider: `WithDeps(Inner)`.
#[derive(Debug)]
pub struct WithDeps {
    inner: ComponentRef,
    payload: Arc<DepsPayload>,
    meta: ComponentMeta,
}

impl WithDeps {
    fn new(inner: ComponentRef, payload: Arc<DepsPayload>) -> Self {
        let own = ComponentMeta { display_name: Some(wrapped_name(PROVIDER_PREFIX, inner.as_ref())),
                                  ..ComponentMeta::default() };
        let meta = hoist_statics(own, inner.meta());
        Self { inner, payload, meta }
    }

    pub fn inner(&self) -> &ComponentRef {
        &self.inner
    }

    pub fn payload(&self) -> &Arc<DepsPayload> {
        &self.payload
    }
}

impl Component for WithDeps {
    fn meta(&self) -> &ComponentMeta {
        &self.meta
    }

    fn render(&self, props: &Props, _scope: &Scope) -> Result<Element, DiError> {
        Ok(Element::component(self.inner.clone(), props.clone()))
    }

    fn child_scope(&self, scope: &Scope) -> Scope {
        scope.provide(self.payload.clone())
    }

    fn provides(&self) -> &[&'static str] {
        DEPS_CHANNELS
    }
}
