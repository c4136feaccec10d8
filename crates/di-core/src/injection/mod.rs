//! Inyección de dependencias en el árbol de componentes.
//!
//! - `inject_deps` (provider): liga las acciones al contexto y publica
//!   `{context, actions}` al subárbol del componente envuelto.
//! - `use_deps` (consumer): proyecta el payload más cercano sobre los props
//!   propios mediante un `DepsMapper`. Las claves mapeadas ganan.

pub mod composite;
pub mod consumer;
pub mod mapper;
pub mod merge;
pub mod provider;

use crate::component::ComponentRef;

pub use composite::CompositeMapper;
pub use consumer::{use_deps, DepsConsumer, UseDeps};
pub use mapper::{mapper_fn, DefaultMapper, DepsMapper, FnMapper};
pub use merge::{merge_prop_maps, merge_props};
pub use provider::{inject_deps, DepsInjector, WithDeps};

/// Envuelve un componente produciendo otro sustituible por él.
pub trait Enhancer {
    fn wrap(&self, component: ComponentRef) -> ComponentRef;
}

/// Aplica `enhancers` en orden: el primero envuelve directamente a
/// `component` y el último queda como capa exterior.
pub fn compose(component: ComponentRef, enhancers: &[&dyn Enhancer]) -> ComponentRef {
    enhancers.iter().fold(component, |inner, e| e.wrap(inner))
}
