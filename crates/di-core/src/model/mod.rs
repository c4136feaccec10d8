//! Modelos neutrales del árbol host (Props, Element, ComponentMeta).

pub mod element;
pub mod meta;
pub mod props;

pub use element::Element;
pub use meta::ComponentMeta;
pub use props::{Accessor, PropMap, PropValue, Props};
