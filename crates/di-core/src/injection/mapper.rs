//! Contrato de los mappers `(context, actions) -> props`.
//!
//! Un mapper recibe el contexto y la tabla de acciones ligadas del provider
//! más cercano y devuelve los props que se fusionarán sobre los propios.
//! Debe ser puro: se invoca en cada render.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::actions::BoundActions;
use crate::errors::DiError;
use crate::model::{Accessor, PropMap, PropValue};

pub trait DepsMapper: Send + Sync + fmt::Debug {
    fn map(&self, context: &Arc<Value>, actions: &Arc<BoundActions>) -> Result<PropMap, DiError>;
}

/// Mapper por defecto: `{context: () => context, actions: () => actions}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMapper;

impl DepsMapper for DefaultMapper {
    fn map(&self, context: &Arc<Value>, actions: &Arc<BoundActions>) -> Result<PropMap, DiError> {
        let mut out = PropMap::new();
        out.insert("context".to_string(), PropValue::Context(Accessor::new(context.clone())));
        out.insert("actions".to_string(), PropValue::Actions(Accessor::new(actions.clone())));
        Ok(out)
    }
}

type MapFn = dyn Fn(&Value, &BoundActions) -> Result<PropMap, DiError> + Send + Sync;

/// Mapper construido a partir de un closure.
pub struct FnMapper {
    label: String,
    f: Box<MapFn>,
}

impl fmt::Debug for FnMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FnMapper({})", self.label)
    }
}

impl DepsMapper for FnMapper {
    fn map(&self, context: &Arc<Value>, actions: &Arc<BoundActions>) -> Result<PropMap, DiError> {
        (self.f)(context.as_ref(), actions.as_ref())
    }
}

/// Envuelve un closure como `DepsMapper` compartible.
pub fn mapper_fn<F>(label: impl Into<String>, f: F) -> Arc<dyn DepsMapper>
    where F: Fn(&Value, &BoundActions) -> Result<PropMap, DiError> + Send + Sync + 'static
{
    Arc::new(FnMapper { label: label.into(), f: Box::new(f) })
}
