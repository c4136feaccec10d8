//! Árbol de elementos que describe qué renderizar.

use super::Props;
use crate::component::ComponentRef;

#[derive(Debug, Clone, Default)]
pub enum Element {
    #[default]
    Empty,
    Text(String),
    Tag { name: String, children: Vec<Element> },
    Fragment(Vec<Element>),
    Component { component: ComponentRef, props: Props },
}

impl Element {
    pub fn text(s: impl Into<String>) -> Self {
        Element::Text(s.into())
    }

    pub fn tag(name: impl Into<String>, children: Vec<Element>) -> Self {
        Element::Tag { name: name.into(), children }
    }

    pub fn component(component: ComponentRef, props: Props) -> Self {
        Element::Component { component, props }
    }

    /// Fragmento con los hijos recibidos en `props` (un layout que sólo
    /// renderiza sus hijos).
    pub fn children_of(props: &Props) -> Self {
        Element::Fragment(props.children.clone())
    }
}
