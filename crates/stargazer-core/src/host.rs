use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::Result;
use crate::event::Invocation;
use crate::extension::{CommandsByExtension, ExtensionDescriptor, HandlerRecord};

/// Read-only query surface over the host's extension and handler registries.
///
/// The engine assumes nothing about how the registries are populated, only
/// the record shapes. Both registries are injected at attach time rather
/// than reached through process-wide globals, so tests can supply fakes.
pub trait ExtensionHost: Send + Sync {
    /// Snapshot of every installed extension, activated or not. Fails when
    /// the host registry is unavailable; callers must degrade, not crash.
    fn all_extensions(&self) -> Result<Vec<ExtensionDescriptor>>;

    /// Snapshot of the global handler registry.
    fn handler_records(&self) -> Vec<HandlerRecord>;
}

/// A command handler as seen by the host's dispatch mechanism.
#[async_trait]
pub trait TriggerHandler: Send + Sync {
    /// Handle one invocation. All failures must be contained inside; the
    /// host's own error path is never exercised from here.
    async fn invoke(&self, invocation: &Invocation);
}

/// One trigger registration handed to the dispatch mechanism.
#[derive(Clone)]
pub struct HandlerRegistration {
    /// Unique internal identity for this registration.
    pub id: String,
    /// Trigger phrase the host routes to the handler. No further argument
    /// parsing happens on this side.
    pub trigger: String,
    /// Additional phrases routed to the same handler.
    pub aliases: Vec<String>,
    pub handler: Arc<dyn TriggerHandler>,
}

/// The host's command-dispatch registration surface.
pub trait CommandDispatch: Send {
    fn register(&mut self, registration: HandlerRegistration) -> Result<()>;
}

/// Per-invocation reply surface.
#[async_trait]
pub trait ReplySink: Send + Sync {
    async fn text(&self, body: &str) -> Result<()>;
    async fn image(&self, data: Bytes) -> Result<()>;
}

/// Renders an aggregated command mapping into help-image bytes.
#[async_trait]
pub trait HelpRenderer: Send + Sync {
    async fn render(&self, commands: &CommandsByExtension) -> Result<Bytes>;
}
