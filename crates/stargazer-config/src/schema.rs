use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Root configuration — maps to `stargazer.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StargazerConfig {
    pub help: HelpConfig,
    pub logging: LoggingConfig,
}

// ── Help module ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HelpConfig {
    /// Trigger phrase for the aggregate help command.
    pub trigger: String,
    /// Additional phrases routed to the aggregate help command.
    pub aliases: Vec<String>,
    /// Caller ids allowed to use the aggregate help command. Empty means no
    /// restriction.
    pub whitelist: Vec<String>,
    /// Per-extension command whitelist, one `"extension-trigger"` line per
    /// entry. Each usable line gets its own dedicated trigger at attach
    /// time.
    pub plugin_whitelist: Vec<String>,
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            trigger: "help".into(),
            aliases: vec!["menu".into(), "commands".into()],
            whitelist: vec![],
            plugin_whitelist: vec![],
        }
    }
}

// ── Logging ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub level: String,
    /// Output format: "pretty", "json", "compact".
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

impl StargazerConfig {
    /// Validate the configuration. Returns warnings for degraded-but-usable
    /// settings, or an error string for unusable ones.
    pub fn validate(&self) -> Result<Vec<String>, String> {
        let mut warnings = Vec::new();

        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.logging.level.as_str()) {
            return Err(format!(
                "logging.level: unknown level '{}'",
                self.logging.level
            ));
        }

        const FORMATS: [&str; 3] = ["pretty", "json", "compact"];
        if !FORMATS.contains(&self.logging.format.as_str()) {
            return Err(format!(
                "logging.format: unknown format '{}'",
                self.logging.format
            ));
        }

        if self.help.trigger.trim().is_empty() {
            return Err("help.trigger: must not be empty".into());
        }

        // The whitelist parser drops unusable lines silently; surface them
        // as warnings at load time.
        let mut seen_triggers: HashSet<&str> = HashSet::new();
        for line in &self.help.plugin_whitelist {
            match line.split_once('-') {
                Some((extension, trigger))
                    if !extension.trim().is_empty() && !trigger.trim().is_empty() =>
                {
                    if !seen_triggers.insert(trigger.trim()) {
                        warnings.push(format!(
                            "help.plugin_whitelist: duplicate trigger '{}', last entry wins",
                            trigger.trim()
                        ));
                    }
                }
                _ => warnings.push(format!(
                    "help.plugin_whitelist: entry '{line}' is not of the form 'extension-trigger' and will be ignored"
                )),
            }
        }

        Ok(warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_validation() {
        let config = StargazerConfig::default();
        assert!(config.validate().unwrap().is_empty());
    }

    #[test]
    fn unknown_log_level_is_an_error() {
        let mut config = StargazerConfig::default();
        config.logging.level = "loud".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_trigger_is_an_error() {
        let mut config = StargazerConfig::default();
        config.help.trigger = "  ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn unusable_whitelist_lines_warn() {
        let mut config = StargazerConfig::default();
        config.help.plugin_whitelist = vec![
            "Weather-forecast help".into(),
            "no separator here".into(),
            "-dangling".into(),
        ];
        let warnings = config.validate().unwrap();
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn duplicate_triggers_warn() {
        let mut config = StargazerConfig::default();
        config.help.plugin_whitelist = vec!["A-cmd".into(), "B-cmd".into()];
        let warnings = config.validate().unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("duplicate trigger"));
    }
}
