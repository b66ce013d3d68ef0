//! # stargazer-core
//!
//! Core types, traits, and primitives for the Stargazer help module.
//! This crate defines the shared vocabulary used by every other crate in the
//! workspace: the record shapes the host registries expose, the collaborator
//! traits the engine consumes, and the aggregated help output type.

pub mod error;
pub mod event;
pub mod extension;
pub mod host;

pub use error::{Result, StargazerError};
pub use event::Invocation;
pub use extension::{
    CommandsByExtension, ExtensionDescriptor, ExtensionHandle, HandlerRecord, TriggerFilter,
};
pub use host::{
    CommandDispatch, ExtensionHost, HandlerRegistration, HelpRenderer, ReplySink, TriggerHandler,
};
