use super::Component;
use crate::constants::FALLBACK_DISPLAY_NAME;

/// Display name de un componente: el configurado, si no el nombre de la
/// definición, si no un placeholder genérico.
pub fn display_name(component: &dyn Component) -> String {
    let meta = component.meta();
    non_empty(&meta.display_name).or_else(|| non_empty(&meta.name))
                                 .unwrap_or(FALLBACK_DISPLAY_NAME)
                                 .to_string()
}

fn non_empty(name: &Option<String>) -> Option<&str> {
    name.as_deref().filter(|s| !s.is_empty())
}

/// `Prefix(inner)`.
pub(crate) fn wrapped_name(prefix: &str, inner: &dyn Component) -> String {
    format!("{}({})", prefix, display_name(inner))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::FnComponent;
    use crate::model::Element;

    #[test]
    fn prefers_display_name_then_name_then_placeholder() {
        let shown = FnComponent::new("Comp", |_, _| Ok(Element::Empty)).display_name("TheComp");
        let named = FnComponent::new("Comp", |_, _| Ok(Element::Empty));
        let anon = FnComponent::anonymous(|_, _| Ok(Element::Empty));
        assert_eq!(display_name(&shown), "TheComp");
        assert_eq!(display_name(&named), "Comp");
        assert_eq!(display_name(&anon), "Component");
    }

    #[test]
    fn empty_display_name_falls_through_to_name() {
        let blank = FnComponent::new("Named", |_, _| Ok(Element::Empty)).display_name("");
        assert_eq!(display_name(&blank), "Named");
        assert_eq!(wrapped_name("UseDeps", &blank), "UseDeps(Named)");
    }
}
