//! Ligado de acciones al contexto.
//!
//! El ligado es una transformación pura: produce una `BoundActions` nueva y
//! deja intacta la `ActionGroups` del llamador, de modo que construir el
//! provider varias veces con la misma tabla no afecta a ligados previos.

use std::sync::Arc;

use log::debug;
use serde_json::Value;

use super::{ActionEntry, ActionGroups, BoundAction, BoundActions, BoundGroup};
use crate::errors::DiError;

/// Liga cada acción de `groups` a `context`.
///
/// Falla con `DiError::Binding` en la primera entrada no invocable.
pub fn bind_actions(context: &Arc<Value>, groups: &ActionGroups) -> Result<BoundActions, DiError> {
    let mut bound = BoundActions::empty();
    for (group_name, group) in groups.iter() {
        let group_key: Arc<str> = Arc::from(group_name.as_str());
        let mut out = BoundGroup::default();
        for (action_name, entry) in group.iter() {
            let func = match entry {
                ActionEntry::Func(f) => f.clone(),
                ActionEntry::Data(v) => {
                    return Err(DiError::Binding { group: group_name.clone(),
                                                  action: action_name.clone(),
                                                  reason: format!("entry is not callable ({})", kind_of(v)) })
                }
            };
            let action = BoundAction::new(group_key.clone(), Arc::from(action_name.as_str()), context.clone(), func);
            out.insert(action_name.clone(), action);
        }
        debug!("bound action group `{}` ({} actions)", group_name, out.len());
        bound.insert(group_name.clone(), out);
    }
    Ok(bound)
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ActionGroup;
    use serde_json::json;

    fn greeting_groups() -> ActionGroups {
        ActionGroups::new().group("default",
                                  ActionGroup::new().action("greet", |ctx, args| {
                                                        let who = args.first().and_then(Value::as_str).unwrap_or("?");
                                                        Ok(json!(format!("{} greets {}", ctx["name"].as_str().unwrap_or(""), who)))
                                                    }))
    }

    #[test]
    fn binds_context_as_first_argument() {
        let ctx = Arc::new(json!({"name": "ana"}));
        let bound = bind_actions(&ctx, &greeting_groups()).expect("bind");
        let out = bound.call("default", "greet", &[json!("luis")]).expect("call");
        assert_eq!(out, json!("ana greets luis"));
    }

    #[test]
    fn binding_leaves_source_table_untouched() {
        let groups = greeting_groups();
        let a = bind_actions(&Arc::new(json!({"name": "a"})), &groups).expect("bind a");
        let b = bind_actions(&Arc::new(json!({"name": "b"})), &groups).expect("bind b");
        assert!(matches!(groups.get("default").and_then(|g| g.get("greet")), Some(ActionEntry::Func(_))));
        assert_eq!(a.call("default", "greet", &[json!("x")]).unwrap(), json!("a greets x"));
        assert_eq!(b.call("default", "greet", &[json!("x")]).unwrap(), json!("b greets x"));
    }

    #[test]
    fn non_callable_entry_fails() {
        let groups = ActionGroups::new().group("misc", ActionGroup::new().data("version", json!(3)));
        let err = bind_actions(&Arc::new(json!({})), &groups).unwrap_err();
        assert_eq!(err,
                   DiError::Binding { group: "misc".into(),
                                      action: "version".into(),
                                      reason: "entry is not callable (number)".into() });
    }

    #[test]
    fn empty_table_binds_to_empty() {
        let bound = bind_actions(&Arc::new(json!({})), &ActionGroups::new()).unwrap();
        assert!(bound.is_empty());
        assert!(bound.group("default").is_none());
    }
}
