//! di-adapters: componentes, acciones y mappers de referencia sobre di-core.
//!
//! Este crate provee:
//! - Componentes básicos: un `layout` que sólo renderiza sus hijos y
//!   párrafos que muestran props.
//! - Grupos de acciones de ejemplo (`name_actions`) cuyo primer argumento es
//!   el contexto.
//! - Mappers que proyectan contexto y acciones sobre props.
//! - `Scenario`: árboles listos para renderizar, usados por la demo y los
//!   tests.

pub mod actions;
pub mod components;
pub mod mappers;
pub mod scenarios;

pub use scenarios::{all_scenarios, Scenario, ScenarioInput};
