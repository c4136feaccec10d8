//! Grupos de acciones de ejemplo.

use di_core::{ActionGroup, ActionGroups, DiError};
use serde_json::{json, Value};

fn str_arg(args: &[Value], idx: usize) -> Result<&str, DiError> {
    args.get(idx)
        .and_then(Value::as_str)
        .ok_or_else(|| DiError::action(format!("expected string argument at position {idx}")))
}

fn ctx_name(ctx: &Value) -> Result<&str, DiError> {
    ctx.get("name").and_then(Value::as_str).ok_or_else(|| DiError::action("context has no `name`"))
}

/// `default.getFullName(ctx, surname) -> "<ctx.name>-<surname>"` y
/// `default.greet(ctx, who) -> "Hello <who>, I am <ctx.name>"`.
pub fn name_actions() -> ActionGroups {
    let default = ActionGroup::new().action("getFullName", |ctx, args| {
                                        let surname = str_arg(args, 0)?;
                                        Ok(json!(format!("{}-{}", ctx_name(ctx)?, surname)))
                                    })
                                    .action("greet", |ctx, args| {
                                        let who = str_arg(args, 0)?;
                                        Ok(json!(format!("Hello {}, I am {}", who, ctx_name(ctx)?)))
                                    });
    ActionGroups::new().group("default", default)
}
