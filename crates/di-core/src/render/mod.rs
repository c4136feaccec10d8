//! Renderer de texto del árbol host.
//!
//! Recorre el árbol de `Element` pasando el `Scope` de forma explícita: la
//! salida de un componente se renderiza bajo `component.child_scope(scope)`.
//! Produce texto tipo HTML con escapado mínimo, suficiente para inspeccionar
//! el resultado en tests y en la demo.

use log::warn;

use crate::component::display_name;
use crate::constants::DEFAULT_MAX_RENDER_DEPTH;
use crate::errors::DiError;
use crate::model::Element;
use crate::scope::Scope;

#[derive(Debug, Clone)]
pub struct Renderer {
    max_depth: usize,
    scope: Scope,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self { max_depth: DEFAULT_MAX_RENDER_DEPTH, scope: Scope::root() }
    }

    /// Límite de componentes anidados antes de abortar el render.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Scope inicial (por defecto, la raíz sin provider).
    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    pub fn render(&self, element: &Element) -> Result<String, DiError> {
        let mut out = String::new();
        self.render_into(element, &self.scope, 0, &mut out)?;
        Ok(out)
    }

    fn render_into(&self, element: &Element, scope: &Scope, depth: usize, out: &mut String) -> Result<(), DiError> {
        match element {
            Element::Empty => {}
            Element::Text(s) => escape_into(s, out),
            Element::Tag { name, children } => {
                self.guard_depth(depth, || format!("<{name}>"))?;
                out.push('<');
                out.push_str(name);
                out.push('>');
                for child in children {
                    self.render_into(child, scope, depth + 1, out)?;
                }
                out.push_str("</");
                out.push_str(name);
                out.push('>');
            }
            Element::Fragment(children) => {
                self.guard_depth(depth, || "fragment".to_string())?;
                for child in children {
                    self.render_into(child, scope, depth + 1, out)?;
                }
            }
            Element::Component { component, props } => {
                self.guard_depth(depth, || display_name(component.as_ref()))?;
                let rendered = component.render(props, scope)?;
                let child_scope = component.child_scope(scope);
                self.render_into(&rendered, &child_scope, depth + 1, out)?;
            }
        }
        Ok(())
    }

    /// Tags, fragmentos y componentes cuentan para `max_depth`.
    fn guard_depth<F>(&self, depth: usize, describe: F) -> Result<(), DiError>
        where F: FnOnce() -> String
    {
        if depth < self.max_depth {
            return Ok(());
        }
        let at = describe();
        warn!("render depth limit {} reached at `{}`", self.max_depth, at);
        Err(DiError::Render(format!("max depth {} exceeded at `{}`", self.max_depth, at)))
    }
}

/// Renderiza `element` desde la raíz con la configuración por defecto.
pub fn render_to_string(element: &Element) -> Result<String, DiError> {
    Renderer::new().render(element)
}

fn escape_into(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
}
