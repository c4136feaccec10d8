//! Árboles de referencia `<div><Layout><Comp/></Layout></div>`.
//!
//! Cada escenario describe el árbol a renderizar y el texto que debe
//! aparecer en la salida.

use di_core::{compose, inject_deps, use_deps, Enhancer, ComponentRef, DiError, Element, Props};
use log::debug;
use serde_json::json;

use crate::actions::name_actions;
use crate::components::{accessor_paragraph, full_name_paragraph, layout, name_paragraph};
use crate::mappers::{get_name_mapper, name_mapper};

/// Datos de entrada comunes a los escenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioInput {
    pub name: String,
    pub surname: String,
}

impl Default for ScenarioInput {
    fn default() -> Self {
        Self { name: "arunoda".into(), surname: "susiripala".into() }
    }
}

#[derive(Debug)]
pub struct Scenario {
    pub id: &'static str,
    pub element: Element,
    /// Texto que debe contener el render.
    pub expected: String,
}

fn wrap_in_div(layout: ComponentRef, comp: ComponentRef, own: Props) -> Element {
    Element::tag("div", vec![Element::component(layout, Props::new().with_child(Element::component(comp, own)))])
}

/// Contexto proyectado con `name_mapper`.
pub fn context_scenario(input: &ScenarioInput) -> Result<Scenario, DiError> {
    let layout_with_deps = inject_deps(json!({"name": input.name}), None)?.wrap(layout());
    let comp = use_deps(Some(name_mapper())).wrap(name_paragraph());
    Ok(Scenario { id: "context", element: wrap_in_div(layout_with_deps, comp, Props::new()), expected: input.name.clone() })
}

/// Acción ligada proyectada con `get_name_mapper`.
pub fn actions_scenario(input: &ScenarioInput) -> Result<Scenario, DiError> {
    let actions = name_actions();
    let layout_with_deps = inject_deps(json!({"name": input.name}), Some(&actions))?.wrap(layout());
    let comp = use_deps(Some(get_name_mapper())).wrap(full_name_paragraph(input.surname.clone()));
    Ok(Scenario { id: "actions",
                  element: wrap_in_div(layout_with_deps, comp, Props::new()),
                  expected: format!("{}-{}", input.name, input.surname) })
}

/// Igual que `actions_scenario` pero construyendo el provider dos veces.
pub fn reinject_scenario(input: &ScenarioInput) -> Result<Scenario, DiError> {
    let actions = name_actions();
    let context = json!({"name": input.name});
    let discarded = inject_deps(context.clone(), Some(&actions))?.wrap(layout());
    debug!("discarded first provider {:?}", di_core::display_name(discarded.as_ref()));
    let layout_with_deps = inject_deps(context, Some(&actions))?.wrap(layout());
    let comp = use_deps(Some(get_name_mapper())).wrap(full_name_paragraph(input.surname.clone()));
    Ok(Scenario { id: "reinject",
                  element: wrap_in_div(layout_with_deps, comp, Props::new()),
                  expected: format!("{}-{}", input.name, input.surname) })
}

/// Mapper por defecto: el componente usa `context()` y `actions()`.
pub fn default_mapper_scenario(input: &ScenarioInput) -> Result<Scenario, DiError> {
    let actions = name_actions();
    let layout_with_deps = inject_deps(json!({"name": input.name}), Some(&actions))?.wrap(layout());
    let comp = use_deps(None).wrap(accessor_paragraph());
    Ok(Scenario { id: "default-mapper",
                  element: wrap_in_div(layout_with_deps, comp, Props::new()),
                  expected: format!("{}-{}", input.name, input.name) })
}

/// Los props propios sobreviven al mapper por defecto.
pub fn own_props_scenario(input: &ScenarioInput) -> Result<Scenario, DiError> {
    let layout_with_deps = inject_deps(json!({}), None)?.wrap(layout());
    let comp = use_deps(None).wrap(name_paragraph());
    let own = Props::new().with("name", input.name.clone());
    Ok(Scenario { id: "own-props", element: wrap_in_div(layout_with_deps, comp, own), expected: input.name.clone() })
}

/// Consumer sin provider: contexto y acciones vacíos.
pub fn standalone_scenario(input: &ScenarioInput) -> Result<Scenario, DiError> {
    let comp = use_deps(None).wrap(name_paragraph());
    let own = Props::new().with("name", input.name.clone());
    Ok(Scenario { id: "standalone",
                  element: Element::tag("div", vec![Element::component(comp, own)]),
                  expected: input.name.clone() })
}

/// Un mismo componente es provider y consumer: `WithDeps(UseDeps(Comp))`.
pub fn composed_scenario(input: &ScenarioInput) -> Result<Scenario, DiError> {
    let actions = name_actions();
    let provider = inject_deps(json!({"name": input.name}), Some(&actions))?;
    let consumer = use_deps(Some(get_name_mapper()));
    let comp = {
        let layers: [&dyn Enhancer; 2] = [&consumer, &provider];
        compose(full_name_paragraph(input.surname.clone()), &layers)
    };
    Ok(Scenario { id: "composed",
                  element: Element::tag("div", vec![Element::component(comp, Props::new())]),
                  expected: format!("{}-{}", input.name, input.surname) })
}

pub fn all_scenarios(input: &ScenarioInput) -> Result<Vec<Scenario>, DiError> {
    Ok(vec![context_scenario(input)?,
            actions_scenario(input)?,
            reinject_scenario(input)?,
            default_mapper_scenario(input)?,
            own_props_scenario(input)?,
            standalone_scenario(input)?,
            composed_scenario(input)?])
}
