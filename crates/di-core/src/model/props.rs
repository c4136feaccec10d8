//! Parámetros de entrada de un componente.
//!
//! Además de datos JSON, un prop puede transportar acciones ligadas o los
//! accessors que genera el mapper por defecto.

use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use super::Element;
use crate::actions::{BoundAction, BoundActions, BoundGroup};
use crate::errors::DiError;

/// Función sin argumentos que devuelve siempre el mismo valor compartido.
#[derive(Debug)]
pub struct Accessor<T>(Arc<T>);

impl<T> Accessor<T> {
    pub fn new(value: Arc<T>) -> Self {
        Self(value)
    }

    /// Devuelve el valor original (mismo `Arc`).
    pub fn get(&self) -> Arc<T> {
        self.0.clone()
    }
}

impl<T> Clone for Accessor<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

#[derive(Debug, Clone)]
pub enum PropValue {
    Json(Value),
    Action(BoundAction),
    Group(BoundGroup),
    Context(Accessor<Value>),
    Actions(Accessor<BoundActions>),
    /// Elementos proyectados; bajo la clave `children` reemplazan a los hijos.
    Elements(Vec<Element>),
}

impl PropValue {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            PropValue::Json(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_json().and_then(Value::as_str)
    }

    pub fn as_action(&self) -> Option<&BoundAction> {
        match self {
            PropValue::Action(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&BoundGroup> {
        match self {
            PropValue::Group(g) => Some(g),
            _ => None,
        }
    }

    pub fn as_context(&self) -> Option<&Accessor<Value>> {
        match self {
            PropValue::Context(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_elements(&self) -> Option<&[Element]> {
        match self {
            PropValue::Elements(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_actions(&self) -> Option<&Accessor<BoundActions>> {
        match self {
            PropValue::Actions(a) => Some(a),
            _ => None,
        }
    }
}

impl From<Value> for PropValue {
    fn from(v: Value) -> Self {
        PropValue::Json(v)
    }
}

impl From<&str> for PropValue {
    fn from(v: &str) -> Self {
        PropValue::Json(Value::from(v))
    }
}

impl From<String> for PropValue {
    fn from(v: String) -> Self {
        PropValue::Json(Value::from(v))
    }
}

impl From<BoundAction> for PropValue {
    fn from(a: BoundAction) -> Self {
        PropValue::Action(a)
    }
}

impl From<BoundGroup> for PropValue {
    fn from(g: BoundGroup) -> Self {
        PropValue::Group(g)
    }
}

impl From<Vec<Element>> for PropValue {
    fn from(e: Vec<Element>) -> Self {
        PropValue::Elements(e)
    }
}

impl From<Element> for PropValue {
    fn from(e: Element) -> Self {
        PropValue::Elements(vec![e])
    }
}

/// Mapa ordenado de props; es también la salida de un mapper.
pub type PropMap = IndexMap<String, PropValue>;

/// Props de un elemento: valores con nombre más hijos.
#[derive(Debug, Clone, Default)]
pub struct Props {
    pub values: PropMap,
    pub children: Vec<Element>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<Element>) -> Self {
        self.children = children;
        self
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.values.get(key)
    }

    pub fn str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(PropValue::as_str)
    }

    /// Invoca el prop `key` como acción ligada.
    pub fn call(&self, key: &str, args: &[Value]) -> Result<Value, DiError> {
        match self.get(key) {
            Some(PropValue::Action(a)) => a.call(args),
            Some(_) => Err(DiError::action(format!("prop `{key}` is not an action"))),
            None => Err(DiError::action(format!("missing prop `{key}`"))),
        }
    }

    /// Accessor `context()` que deja el mapper por defecto.
    pub fn context(&self) -> Option<Arc<Value>> {
        self.get("context").and_then(PropValue::as_context).map(Accessor::get)
    }

    /// Accessor `actions()` que deja el mapper por defecto.
    pub fn actions(&self) -> Option<Arc<BoundActions>> {
        self.get("actions").and_then(PropValue::as_actions).map(Accessor::get)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
