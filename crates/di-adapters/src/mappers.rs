//! Mappers de referencia.

use std::sync::Arc;

use di_core::{mapper_fn, DepsMapper, DiError, PropMap, PropValue};

/// `c => ({name: c.name})`.
pub fn name_mapper() -> Arc<dyn DepsMapper> {
    mapper_fn("name", |c, _| {
        let mut out = PropMap::new();
        if let Some(name) = c.get("name") {
            out.insert("name".into(), PropValue::from(name.clone()));
        }
        Ok(out)
    })
}

/// `(c, a) => ({getName: a.default.getFullName})`.
pub fn get_name_mapper() -> Arc<dyn DepsMapper> {
    mapper_fn("getName", |_, a| {
        let action = a.action("default", "getFullName")
                      .cloned()
                      .ok_or_else(|| DiError::UnknownAction { group: "default".into(), action: "getFullName".into() })?;
        let mut out = PropMap::new();
        out.insert("getName".into(), PropValue::Action(action));
        Ok(out)
    })
}
