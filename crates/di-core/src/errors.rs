//! Errores del mecanismo de inyección.
//!
//! Todos los fallos son locales y síncronos: se propagan al llamador sin
//! reintentos.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum DiError {
    /// Una entrada de un grupo de acciones no es invocable.
    #[error("cannot bind action `{group}.{action}`: {reason}")]
    Binding { group: String, action: String, reason: String },

    /// El mapper de un consumer falló durante el render.
    #[error("mapper of `{component}` failed: {source}")]
    Mapping {
        component: String,
        #[source]
        source: Box<DiError>,
    },

    /// Fallo reportado por una acción de usuario.
    #[error("action failed: {0}")]
    Action(String),

    #[error("unknown action `{group}.{action}`")]
    UnknownAction { group: String, action: String },

    #[error("render failed: {0}")]
    Render(String),

    #[error("internal: {0}")]
    Internal(String),
}

impl DiError {
    /// Atajo para acciones y mappers de usuario.
    pub fn action(msg: impl Into<String>) -> Self {
        Self::Action(msg.into())
    }
}
