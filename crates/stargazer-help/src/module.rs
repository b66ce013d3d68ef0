use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use stargazer_config::HelpConfig;
use stargazer_core::{
    CommandDispatch, CommandsByExtension, ExtensionHandle, ExtensionHost, HandlerRegistration,
    HelpRenderer, Invocation, Result, TriggerHandler,
};

use crate::gate::AccessGate;
use crate::scanner::RegistryScanner;
use crate::whitelist::WhitelistIndex;

/// User-visible text for a contained handler-path failure.
const GENERIC_FAILURE: &str = "failed to fetch help information";
/// User-visible text when the aggregate scan comes back empty.
const NOTHING_FOUND: &str = "no extensions or commands found";

/// The help module, attached to a host.
///
/// Construction does all the wiring: the whitelist is parsed once, and the
/// aggregate entry point plus one trigger per whitelist entry are registered
/// with the host's dispatch mechanism before `attach` returns. The host
/// dispatches no events until then, so handlers never observe a half-built
/// module.
pub struct HelpModule {
    engine: Arc<HelpEngine>,
}

struct HelpEngine {
    scanner: RegistryScanner,
    renderer: Arc<dyn HelpRenderer>,
    whitelist: WhitelistIndex,
    gate: AccessGate,
}

impl HelpModule {
    /// Attach the module to a host. Registration happens exactly once per
    /// attach; attaching the same configuration twice to one dispatch
    /// surface registers duplicate triggers.
    pub fn attach(
        config: &HelpConfig,
        host: Arc<dyn ExtensionHost>,
        renderer: Arc<dyn HelpRenderer>,
        dispatch: &mut dyn CommandDispatch,
        self_handle: ExtensionHandle,
    ) -> Result<Self> {
        let whitelist = WhitelistIndex::parse(&config.plugin_whitelist);
        let engine = Arc::new(HelpEngine {
            scanner: RegistryScanner::new(host, self_handle),
            renderer,
            whitelist,
            gate: AccessGate::new(config.whitelist.iter().cloned()),
        });

        dispatch.register(HandlerRegistration {
            id: "help".into(),
            trigger: config.trigger.clone(),
            aliases: config.aliases.clone(),
            handler: Arc::new(OverviewHandler {
                engine: Arc::clone(&engine),
            }),
        })?;

        // One registration per whitelist entry. The shared handler resolves
        // its bound extension from the trigger phrase the dispatcher
        // supplies, so no per-entry state is captured here.
        for (trigger, extension) in engine.whitelist.triggers() {
            dispatch.register(HandlerRegistration {
                id: format!("whitelist_{}", trigger.replace(' ', "_")),
                trigger: trigger.to_string(),
                aliases: vec![],
                handler: Arc::new(WhitelistHandler {
                    engine: Arc::clone(&engine),
                }),
            })?;
            info!(trigger, extension, "registered whitelist help trigger");
        }

        Ok(Self { engine })
    }

    /// Aggregate view of every visible extension's commands.
    pub fn visible_commands(&self) -> CommandsByExtension {
        self.engine.scanner.visible_commands()
    }

    /// Aggregate view restricted to whitelisted extensions.
    pub fn whitelisted_commands(&self) -> CommandsByExtension {
        self.engine
            .scanner
            .whitelisted_commands(&self.engine.whitelist)
    }
}

/// Aggregate help entry point.
struct OverviewHandler {
    engine: Arc<HelpEngine>,
}

#[async_trait]
impl TriggerHandler for OverviewHandler {
    async fn invoke(&self, invocation: &Invocation) {
        if !self.engine.gate.permits(invocation) {
            return;
        }
        if let Err(e) = self.engine.reply_overview(invocation).await {
            error!(error = %e, "help overview failed");
            let _ = invocation.reply.text(GENERIC_FAILURE).await;
        }
    }
}

/// Shared handler behind every whitelist trigger. The bound extension is
/// looked up from the invocation's trigger phrase; registrations share one
/// handler value and capture no per-entry state.
struct WhitelistHandler {
    engine: Arc<HelpEngine>,
}

#[async_trait]
impl TriggerHandler for WhitelistHandler {
    async fn invoke(&self, invocation: &Invocation) {
        let Some(extension) = self
            .engine
            .whitelist
            .extension_for(&invocation.trigger)
            .map(str::to_string)
        else {
            error!(trigger = %invocation.trigger, "no whitelist entry for trigger");
            let _ = invocation.reply.text(GENERIC_FAILURE).await;
            return;
        };
        if let Err(e) = self.engine.reply_extension(&extension, invocation).await {
            error!(extension = %extension, error = %e, "whitelist help failed");
            let _ = invocation.reply.text(GENERIC_FAILURE).await;
        }
    }
}

impl HelpEngine {
    async fn reply_overview(&self, invocation: &Invocation) -> Result<()> {
        let commands = self.scanner.visible_commands();
        if commands.is_empty() {
            invocation.reply.text(NOTHING_FOUND).await?;
            return Ok(());
        }
        let image = self.renderer.render(&commands).await?;
        invocation.reply.image(image).await
    }

    async fn reply_extension(&self, extension: &str, invocation: &Invocation) -> Result<()> {
        let commands = self.scanner.whitelisted_commands(&self.whitelist);
        match commands.only(extension) {
            Some(single) => {
                let image = self.renderer.render(&single).await?;
                invocation.reply.image(image).await
            }
            None => {
                invocation
                    .reply
                    .text(&format!("extension {extension} not found or not active"))
                    .await
            }
        }
    }
}
