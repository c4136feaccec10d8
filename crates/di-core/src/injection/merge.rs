//! Fusión de props de forma determinista.
//!
//! Merge "shallow": las claves de `overlay` reemplazan a las de `base` y se
//! conserva el orden de inserción de `base`. La clave `children` del overlay
//! también gana: reemplaza a los hijos propios.

use serde_json::Value;

use crate::model::{Element, PropMap, PropValue, Props};

/// Clave con la que un mapper proyecta hijos.
pub const CHILDREN_KEY: &str = "children";

/// Keys from `overlay` override keys from `base`.
pub fn merge_prop_maps(base: &PropMap, overlay: PropMap) -> PropMap {
    let mut out = base.clone();
    for (k, v) in overlay {
        out.insert(k, v);
    }
    out
}

/// `{...own, ...mapped}`.
pub fn merge_props(own: &Props, mut mapped: PropMap) -> Props {
    let mut children = own.children.clone();
    let mut values = own.values.clone();
    if let Some(mapped_children) = mapped.shift_remove(CHILDREN_KEY) {
        match into_children(mapped_children) {
            Ok(elements) => children = elements,
            Err(other) => {
                // no renderizable: queda como valor y los hijos propios se descartan
                children = Vec::new();
                values.insert(CHILDREN_KEY.to_string(), other);
            }
        }
    }
    Props { values: merge_prop_maps(&values, mapped), children }
}

fn into_children(value: PropValue) -> Result<Vec<Element>, PropValue> {
    match value {
        PropValue::Elements(e) => Ok(e),
        PropValue::Json(Value::Null) => Ok(Vec::new()),
        PropValue::Json(Value::String(s)) => Ok(vec![Element::Text(s)]),
        PropValue::Json(v @ (Value::Number(_) | Value::Bool(_))) => Ok(vec![Element::Text(v.to_string())]),
        other => Err(other),
    }
}
