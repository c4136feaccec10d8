//! Metadata de definición de un componente ("estáticos").
//!
//! En lugar de copiar cualquier propiedad por reflexión, la metadata que se
//! traslada entre capas de envoltura está enumerada: documentación, tags y
//! constantes de configuración.

use indexmap::IndexMap;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentMeta {
    /// Nombre de la definición (equivalente al nombre de la función/clase).
    pub name: Option<String>,
    /// Display name configurado explícitamente.
    pub display_name: Option<String>,
    pub doc: Option<String>,
    pub tags: Vec<String>,
    /// Constantes fijadas sobre la definición (p.ej. `theme`).
    pub constants: IndexMap<String, Value>,
}

impl ComponentMeta {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), ..Self::default() }
    }

    pub fn constant(&self, key: &str) -> Option<&Value> {
        self.constants.get(key)
    }
}
