//! Hoisting de estáticos entre capas de envoltura.

use log::trace;

use crate::constants::RESERVED_STATICS;
use crate::model::ComponentMeta;

fn is_reserved(key: &str) -> bool {
    RESERVED_STATICS.contains(&key)
}

/// Copia la metadata trasladable de `source` sobre `target` y lo devuelve.
///
/// Se copian `doc`, `tags` y las constantes no reservadas. `name` y
/// `display_name` pertenecen a la maquinaria del enhancer y no se tocan.
pub fn hoist_statics(mut target: ComponentMeta, source: &ComponentMeta) -> ComponentMeta {
    if source.doc.is_some() {
        target.doc = source.doc.clone();
    }
    for tag in &source.tags {
        if !target.tags.contains(tag) {
            target.tags.push(tag.clone());
        }
    }
    for (key, value) in &source.constants {
        if is_reserved(key) {
            trace!("skipping reserved static `{key}`");
            continue;
        }
        target.constants.insert(key.clone(), value.clone());
    }
    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn copies_constants_and_skips_reserved() {
        let mut source = ComponentMeta::named("Layout");
        source.doc = Some("page layout".into());
        source.tags.push("layout".into());
        source.constants.insert("theme".into(), json!("light"));
        source.constants.insert("displayName".into(), json!("Evil"));
        source.constants.insert("contextTypes".into(), json!({}));

        let target = ComponentMeta { display_name: Some("WithDeps(Layout)".into()), ..ComponentMeta::default() };
        let out = hoist_statics(target, &source);

        assert_eq!(out.display_name.as_deref(), Some("WithDeps(Layout)"));
        assert_eq!(out.name, None);
        assert_eq!(out.doc.as_deref(), Some("page layout"));
        assert_eq!(out.tags, vec!["layout".to_string()]);
        assert_eq!(out.constant("theme"), Some(&json!("light")));
        assert!(out.constant("displayName").is_none());
        assert!(out.constant("contextTypes").is_none());
    }
}
