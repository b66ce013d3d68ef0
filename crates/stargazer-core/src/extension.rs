use std::sync::Arc;

/// Opaque identity token for a live extension instance.
///
/// The host hands this module its own handle at attach time; the scanner
/// compares handles by pointer identity to keep the module out of its own
/// listing. The token carries no other information.
#[derive(Clone)]
pub struct ExtensionHandle(Arc<()>);

impl ExtensionHandle {
    pub fn new() -> Self {
        Self(Arc::new(()))
    }

    /// Whether two handles refer to the same extension instance.
    pub fn same_as(&self, other: &ExtensionHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for ExtensionHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ExtensionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ExtensionHandle({:p})", Arc::as_ptr(&self.0))
    }
}

/// One installed extension as reported by the host registry.
///
/// This module only ever reads these; outside of tests it never constructs
/// one.
#[derive(Debug, Clone)]
pub struct ExtensionDescriptor {
    /// Registry name of the extension.
    pub name: String,
    /// Module identifier the extension's handlers are registered under.
    pub module_id: Option<String>,
    /// Live instance handle; `None` when the registry slot does not hold a
    /// recognized extension object.
    pub handle: Option<ExtensionHandle>,
    /// Whether the extension is currently activated.
    pub activated: bool,
}

/// One registered command handler from the host's global handler registry.
#[derive(Debug, Clone)]
pub struct HandlerRecord {
    /// Module identifier of the extension that owns this handler.
    pub owner_module: String,
    /// Human-readable description, when the handler declares one.
    pub description: Option<String>,
    /// Declared trigger filters, in declaration order.
    pub filters: Vec<TriggerFilter>,
}

/// A handler's declared trigger condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerFilter {
    /// Triggered by a single literal command phrase.
    Command { name: String },
    /// Triggered by any command in a named group.
    CommandGroup { name: String },
    /// Triggered by a message pattern; carries no command name.
    Regex { pattern: String },
}

/// Insertion-ordered mapping from extension name to its formatted command
/// descriptors.
///
/// Extension order follows registry iteration order; per-extension command
/// lists keep insertion order and drop exact-duplicate strings. Recomputed
/// from the live registry on every discovery call, so extensions that
/// activate or deactivate between calls come and go with them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandsByExtension {
    entries: Vec<(String, Vec<String>)>,
}

impl CommandsByExtension {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a formatted command to an extension's list, creating the
    /// extension entry on first use. An exact duplicate of a string already
    /// in that extension's list is dropped.
    pub fn push(&mut self, extension: &str, formatted: String) {
        match self.entries.iter_mut().find(|(name, _)| name == extension) {
            Some((_, commands)) => {
                if !commands.contains(&formatted) {
                    commands.push(formatted);
                }
            }
            None => self.entries.push((extension.to_string(), vec![formatted])),
        }
    }

    pub fn get(&self, extension: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == extension)
            .map(|(_, commands)| commands.as_slice())
    }

    pub fn contains(&self, extension: &str) -> bool {
        self.get(extension).is_some()
    }

    /// A mapping holding only the named extension, when present.
    pub fn only(&self, extension: &str) -> Option<CommandsByExtension> {
        self.get(extension).map(|commands| Self {
            entries: vec![(extension.to_string(), commands.to_vec())],
        })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate `(extension, commands)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, commands)| (name.as_str(), commands.as_slice()))
    }
}
