//! Componentes de referencia.

use di_core::{ComponentRef, DiError, Element, FnComponent};
use serde_json::json;

/// Layout que sólo renderiza sus hijos.
pub fn layout() -> ComponentRef {
    FnComponent::new("Layout", |props, _| Ok(Element::children_of(props))).display_name("TheLayout")
                                                                           .constant("theme", "light")
                                                                           .into_ref()
}

/// `<p>{name}</p>`.
pub fn name_paragraph() -> ComponentRef {
    FnComponent::new("NameParagraph", |props, _| {
        Ok(Element::tag("p", vec![Element::text(props.str("name").unwrap_or_default())]))
    }).into_ref()
}

/// `<p>{getName("susiripala")}</p>`.
pub fn full_name_paragraph(surname: impl Into<String>) -> ComponentRef {
    let surname = surname.into();
    FnComponent::new("FullNameParagraph", move |props, _| {
        let full = props.call("getName", &[json!(surname)])?;
        Ok(Element::tag("p", vec![Element::text(full.as_str().unwrap_or_default())]))
    }).into_ref()
}

/// `<p>{actions().default.getFullName(context().name)}</p>`, pensado para el
/// mapper por defecto.
pub fn accessor_paragraph() -> ComponentRef {
    FnComponent::new("AccessorParagraph", |props, _| {
        let context = props.context().ok_or_else(|| DiError::action("missing `context` accessor"))?;
        let actions = props.actions().ok_or_else(|| DiError::action("missing `actions` accessor"))?;
        let full = actions.call("default", "getFullName", &[context["name"].clone()])?;
        Ok(Element::tag("p", vec![Element::text(full.as_str().unwrap_or_default())]))
    }).display_name("TheComp")
      .into_ref()
}
