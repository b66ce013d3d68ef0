use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::host::ReplySink;

/// One caller invocation, as dispatched by the host's event loop.
#[derive(Clone)]
pub struct Invocation {
    /// Unique id for this invocation.
    pub id: Uuid,
    /// The trigger phrase that routed the event here.
    pub trigger: String,
    /// Raw caller identifier from the platform event. Platforms disagree on
    /// the shape (numeric ids, string ids), so the value stays untyped until
    /// the access gate coerces it.
    pub caller: Option<serde_json::Value>,
    /// When the host received the event.
    pub received_at: DateTime<Utc>,
    /// Reply surface for this invocation.
    pub reply: Arc<dyn ReplySink>,
}

impl Invocation {
    pub fn new(
        trigger: impl Into<String>,
        caller: Option<serde_json::Value>,
        reply: Arc<dyn ReplySink>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            trigger: trigger.into(),
            caller,
            received_at: Utc::now(),
            reply,
        }
    }

    /// The caller id in canonical string form, or `None` when the event does
    /// not carry a resolvable id.
    pub fn caller_id(&self) -> Option<String> {
        match self.caller.as_ref()? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}

impl std::fmt::Debug for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Invocation")
            .field("id", &self.id)
            .field("trigger", &self.trigger)
            .field("caller", &self.caller)
            .field("received_at", &self.received_at)
            .finish_non_exhaustive()
    }
}
