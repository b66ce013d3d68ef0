use std::collections::HashSet;

use tracing::info;

use stargazer_core::Invocation;

/// Caller allow-list for the aggregate help entry point.
///
/// An empty list allows everyone. A caller whose id cannot be determined
/// from the event is allowed; only an explicit, resolvable id missing from
/// the list is denied. Denial is silent on the reply surface.
#[derive(Debug, Clone, Default)]
pub struct AccessGate {
    allowed: HashSet<String>,
}

impl AccessGate {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether this invocation may proceed.
    pub fn permits(&self, invocation: &Invocation) -> bool {
        if self.allowed.is_empty() {
            return true;
        }
        let Some(caller) = invocation.caller_id() else {
            return true;
        };
        if self.allowed.contains(&caller) {
            true
        } else {
            info!(
                caller = %caller,
                trigger = %invocation.trigger,
                "caller not in whitelist, ignoring"
            );
            false
        }
    }
}
