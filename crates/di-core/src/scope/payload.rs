use std::sync::Arc;

use serde_json::Value;
use uuid::Uuid;

use crate::actions::BoundActions;

/// Payload que un provider difunde a su subárbol: `{context, actions}`.
#[derive(Debug)]
pub struct DepsPayload {
    scope_id: Uuid,
    context: Arc<Value>,
    actions: Arc<BoundActions>,
}

impl DepsPayload {
    pub fn new(context: Arc<Value>, actions: Arc<BoundActions>) -> Self {
        Self { scope_id: Uuid::new_v4(), context, actions }
    }

    /// Identificador único de la construcción del provider.
    pub fn scope_id(&self) -> Uuid {
        self.scope_id
    }

    pub fn context(&self) -> &Arc<Value> {
        &self.context
    }

    pub fn actions(&self) -> &Arc<BoundActions> {
        &self.actions
    }
}
