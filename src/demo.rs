//! Render de los escenarios de referencia con la configuración cargada.

use di_adapters::all_scenarios;
use di_core::Renderer;
use log::{debug, info};
use serde::Serialize;

use crate::config::AppConfig;
use crate::errors::CoreError;

/// Resultado de renderizar un escenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoOutcome {
    pub id: &'static str,
    pub html: String,
    pub matched: bool,
}

/// Renderiza todos los escenarios; un escenario que no contiene su texto
/// esperado se reporta con `matched = false`, no como error.
pub fn run_demo(config: &AppConfig) -> Result<Vec<DemoOutcome>, CoreError> {
    let renderer = Renderer::new().with_max_depth(config.max_render_depth);
    let scenarios = all_scenarios(&config.scenario_input())?;
    let mut outcomes = Vec::with_capacity(scenarios.len());
    for scenario in scenarios {
        let html = renderer.render(&scenario.element)?;
        let matched = html.contains(&scenario.expected);
        debug!("scenario {} -> {}", scenario.id, html);
        outcomes.push(DemoOutcome { id: scenario.id, html, matched });
    }
    info!("rendered {} scenarios", outcomes.len());
    Ok(outcomes)
}
