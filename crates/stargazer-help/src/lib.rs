//! # stargazer-help
//!
//! The help engine: command discovery, aggregation, and access filtering
//! over a host's live extension registry.
//!
//! At attach time the module parses the per-extension whitelist, registers
//! the aggregate help trigger and one dedicated trigger per whitelist entry,
//! and then serves each invocation by re-scanning the host's registries and
//! handing the aggregated mapping to the rendering collaborator.

pub mod gate;
pub mod module;
pub mod scanner;
pub mod whitelist;

pub use gate::AccessGate;
pub use module::HelpModule;
pub use scanner::{RESERVED_EXTENSIONS, RegistryScanner};
pub use whitelist::WhitelistIndex;
