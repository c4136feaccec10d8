//! `CompositeMapper`: aplica una secuencia de `DepsMapper` de forma
//! determinista y fusiona sus salidas.

use std::sync::Arc;

use serde_json::Value;

use super::mapper::DepsMapper;
use super::merge::merge_prop_maps;
use crate::actions::BoundActions;
use crate::errors::DiError;
use crate::model::PropMap;

/// Orden de merge: mappers en el orden dado; el último gana en colisión.
#[derive(Debug, Default)]
pub struct CompositeMapper {
    pub mappers: Vec<Arc<dyn DepsMapper>>,
}

impl CompositeMapper {
    pub fn new() -> Self {
        Self { mappers: vec![] }
    }

    pub fn with_mappers(mappers: Vec<Arc<dyn DepsMapper>>) -> Self {
        Self { mappers }
    }

    pub fn push(mut self, mapper: Arc<dyn DepsMapper>) -> Self {
        self.mappers.push(mapper);
        self
    }
}

impl DepsMapper for CompositeMapper {
    fn map(&self, context: &Arc<Value>, actions: &Arc<BoundActions>) -> Result<PropMap, DiError> {
        let mut accumulated = PropMap::new();
        for m in self.mappers.iter() {
            let out = m.map(context, actions)?;
            accumulated = merge_prop_maps(&accumulated, out);
        }
        Ok(accumulated)
    }
}
