//! di-core: propagación de dependencias en árboles de componentes.
//!
//! Un ancestro publica un valor de contexto y un conjunto de acciones
//! ligadas (`inject_deps`); cualquier descendiente proyecta lo que necesita
//! sobre sus propios props mediante un mapper (`use_deps`), sin que las
//! capas intermedias reenvíen nada.
//!
//! El crate incluye un árbol host mínimo (`Component`, `Element`, `Scope`,
//! `Renderer`) donde el entorno se pasa explícitamente de padres a hijos.
pub mod actions;
pub mod component;
pub mod constants;
pub mod errors;
pub mod injection;
pub mod model;
pub mod render;
pub mod scope;

pub use actions::{bind_actions, ActionEntry, ActionFn, ActionGroup, ActionGroups, BoundAction, BoundActions, BoundGroup};
pub use component::{display_name, hoist_statics, Component, ComponentRef, FnComponent};
pub use errors::DiError;
pub use injection::{compose, inject_deps, mapper_fn, use_deps, CompositeMapper, DefaultMapper, DepsConsumer, DepsInjector, DepsMapper, Enhancer};
pub use model::{Accessor, ComponentMeta, Element, PropMap, PropValue, Props};
pub use render::{render_to_string, Renderer};
pub use scope::{DepsPayload, Scope};
