//! Consumer: proyecta el payload del provider más cercano sobre los props.

use std::sync::Arc;

use log::trace;

use super::mapper::{DefaultMapper, DepsMapper};
use super::merge::merge_props;
use super::Enhancer;
use crate::component::display::wrapped_name;
use crate::component::{hoist_statics, Component, ComponentRef};
use crate::constants::{CONSUMER_PREFIX, DEPS_CHANNELS};
use crate::errors::DiError;
use crate::model::{ComponentMeta, Element, Props};
use crate::scope::Scope;

/// Construye el enhancer del consumer; `None` usa `DefaultMapper`.
pub fn use_deps(mapper: Option<Arc<dyn DepsMapper>>) -> DepsConsumer {
    let mapper: Arc<dyn DepsMapper> = match mapper {
        Some(m) => m,
        None => Arc::new(DefaultMapper),
    };
    DepsConsumer { mapper }
}

/// Enhancer devuelto por `use_deps`.
#[derive(Debug, Clone)]
pub struct DepsConsumer {
    mapper: Arc<dyn DepsMapper>,
}

impl DepsConsumer {
    pub fn mapper(&self) -> &Arc<dyn DepsMapper> {
        &self.mapper
    }

    pub fn wrap(&self, component: ComponentRef) -> ComponentRef {
        Arc::new(UseDeps::new(component, self.mapper.clone()))
    }
}

impl Enhancer for DepsConsumer {
    fn wrap(&self, component: ComponentRef) -> ComponentRef {
        DepsConsumer::wrap(self, component)
    }
}

/// Componente envuelto por el consumer: `UseDeps(Inner)`.
#[derive(Debug)]
pub struct UseDeps {
    inner: ComponentRef,
    mapper: Arc<dyn DepsMapper>,
    meta: ComponentMeta,
}

impl UseDeps {
    fn new(inner: ComponentRef, mapper: Arc<dyn DepsMapper>) -> Self {
        let own = ComponentMeta { display_name: Some(wrapped_name(CONSUMER_PREFIX, inner.as_ref())),
                                  ..ComponentMeta::default() };
        let meta = hoist_statics(own, inner.meta());
        Self { inner, mapper, meta }
    }

    pub fn inner(&self) -> &ComponentRef {
        &self.inner
    }

    /// Props finales con los que se renderizará el componente envuelto.
    pub fn resolve_props(&self, props: &Props, scope: &Scope) -> Result<Props, DiError> {
        let context = scope.context();
        let actions = scope.actions();
        let mapped = self.mapper
                         .map(&context, &actions)
                         .map_err(|e| DiError::Mapping { component: self.display(), source: Box::new(e) })?;
        trace!("{}: mapped {} props over {} own", self.display(), mapped.len(), props.len());
        Ok(merge_props(props, mapped))
    }

    fn display(&self) -> String {
        self.meta.display_name.clone().unwrap_or_default()
    }
}

impl Component for UseDeps {
    fn meta(&self) -> &ComponentMeta {
        &self.meta
    }

    fn render(&self, props: &Props, scope: &Scope) -> Result<Element, DiError> {
        let merged = self.resolve_props(props, scope)?;
        Ok(Element::component(self.inner.clone(), merged))
    }

    fn consumes(&self) -> &[&'static str] {
        DEPS_CHANNELS
    }
}
