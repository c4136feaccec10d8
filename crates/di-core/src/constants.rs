//! Constantes del mecanismo de inyección.
//!
//! Los nombres de canal forman el contrato de propagación que declaran de
//! forma simétrica el provider (`WithDeps`) y el consumer (`UseDeps`).

/// Clave del canal que transporta el valor de contexto.
pub const CONTEXT_CHANNEL: &str = "context";

/// Clave del canal que transporta la tabla de acciones ligadas.
pub const ACTIONS_CHANNEL: &str = "actions";

/// Canales declarados por ambos enhancers, en este orden.
pub const DEPS_CHANNELS: &[&str] = &[CONTEXT_CHANNEL, ACTIONS_CHANNEL];

/// Prefijo del display name de un componente envuelto por el provider.
pub const PROVIDER_PREFIX: &str = "WithDeps";

/// Prefijo del display name de un componente envuelto por el consumer.
pub const CONSUMER_PREFIX: &str = "UseDeps";

/// Nombre usado cuando un componente no declara display name ni nombre.
pub const FALLBACK_DISPLAY_NAME: &str = "Component";

/// Nombres de metadata reservados por la maquinaria del host; nunca se
/// copian al hacer hoisting de estáticos.
pub const RESERVED_STATICS: &[&str] = &[
    "displayName",
    "name",
    "length",
    "prototype",
    "contextTypes",
    "childContextTypes",
    "propTypes",
    "defaultProps",
    "getDefaultProps",
    "getDerivedStateFromProps",
    "mixins",
    "type",
];

/// Profundidad máxima de render por defecto.
pub const DEFAULT_MAX_RENDER_DEPTH: usize = 256;
