use std::sync::Arc;

use tracing::{error, info, warn};

use stargazer_core::{
    CommandsByExtension, ExtensionDescriptor, ExtensionHandle, ExtensionHost, TriggerFilter,
};

use crate::whitelist::WhitelistIndex;

/// Extensions never listed in the aggregate view: the host core itself, this
/// module's own registration, and the host's bundled reminder extension.
pub const RESERVED_EXTENSIONS: &[&str] = &["astrbot", "astrbot_plugin_help", "astrbot-reminder"];

/// Walks the host's live registries and aggregates visible commands per
/// extension.
///
/// Every call re-reads the registries, so extensions that activate or
/// deactivate between calls come and go with them. A host registry failure
/// degrades to an empty mapping; it never propagates.
pub struct RegistryScanner {
    host: Arc<dyn ExtensionHost>,
    self_handle: ExtensionHandle,
}

impl RegistryScanner {
    pub fn new(host: Arc<dyn ExtensionHost>, self_handle: ExtensionHandle) -> Self {
        Self { host, self_handle }
    }

    /// Aggregate every activated extension except the reserved set.
    pub fn visible_commands(&self) -> CommandsByExtension {
        let Some(extensions) = self.activated_extensions() else {
            return CommandsByExtension::new();
        };
        if extensions.is_empty() {
            warn!("no activated extensions found");
            return CommandsByExtension::new();
        }
        self.collect(&extensions, |name| !RESERVED_EXTENSIONS.contains(&name))
    }

    /// Aggregate only the extensions named by the whitelist.
    pub fn whitelisted_commands(&self, whitelist: &WhitelistIndex) -> CommandsByExtension {
        if whitelist.is_empty() {
            info!("extension whitelist is empty");
            return CommandsByExtension::new();
        }
        let Some(extensions) = self.activated_extensions() else {
            return CommandsByExtension::new();
        };
        self.collect(&extensions, |name| whitelist.contains_extension(name))
    }

    /// Fetch and activation-filter the extension list; `None` when the host
    /// registry is unavailable.
    fn activated_extensions(&self) -> Option<Vec<ExtensionDescriptor>> {
        match self.host.all_extensions() {
            Ok(all) => Some(all.into_iter().filter(|e| e.activated).collect()),
            Err(e) => {
                error!(error = %e, "failed to fetch extension list from host");
                None
            }
        }
    }

    fn collect<F>(&self, extensions: &[ExtensionDescriptor], keep: F) -> CommandsByExtension
    where
        F: Fn(&str) -> bool,
    {
        let handlers = self.host.handler_records();
        let mut commands = CommandsByExtension::new();

        for extension in extensions {
            if !keep(&extension.name) {
                continue;
            }
            let Some((module_id, handle)) = extension
                .module_id
                .as_deref()
                .zip(extension.handle.as_ref())
                .filter(|_| !extension.name.is_empty())
            else {
                warn!(
                    extension = %extension.name,
                    module = ?extension.module_id,
                    "extension metadata is invalid or incomplete, skipping"
                );
                continue;
            };
            if handle.same_as(&self.self_handle) {
                continue;
            }

            for handler in &handlers {
                if handler.owner_module != module_id {
                    continue;
                }
                let Some(name) = handler.filters.iter().find_map(|filter| match filter {
                    TriggerFilter::Command { name } => Some(name.as_str()),
                    TriggerFilter::CommandGroup { name } => Some(name.as_str()),
                    TriggerFilter::Regex { .. } => None,
                }) else {
                    continue;
                };
                let formatted = match handler.description.as_deref() {
                    Some(description) if !description.is_empty() => format!("{name}#{description}"),
                    _ => name.to_string(),
                };
                commands.push(&extension.name, formatted);
            }
        }

        commands
    }
}
