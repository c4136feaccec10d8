//! simple-di: librería de aplicación sobre `di-core`.
//!
//! - Expone `errors` para manejar errores de aplicación (envuelve `DiError`).
//! - Expone `config` para cargar la configuración desde el entorno (.env).
//! - Expone `demo` para renderizar los escenarios de referencia.
//!
//! Puede usarse desde `main.rs` o por otros crates/clientes.

pub mod config;
pub mod demo;
pub mod errors;

pub use config::AppConfig;
pub use errors::CoreError;
