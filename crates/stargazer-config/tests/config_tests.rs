#[cfg(test)]
mod tests {
    use stargazer_config::ConfigLoader;
    use stargazer_config::schema::*;
    use std::io::Write;

    // ── Default tests ──────────────────────────────────────────

    #[test]
    fn test_help_config_defaults() {
        let config = HelpConfig::default();
        assert_eq!(config.trigger, "help");
        assert_eq!(config.aliases, vec!["menu", "commands"]);
        assert!(config.whitelist.is_empty());
        assert!(config.plugin_whitelist.is_empty());
    }

    #[test]
    fn test_logging_config_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, "pretty");
    }

    // ── TOML roundtrip tests ───────────────────────────────────

    #[test]
    fn test_config_toml_roundtrip() {
        let config = StargazerConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let restored: StargazerConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(restored.help.trigger, config.help.trigger);
        assert_eq!(restored.help.aliases, config.help.aliases);
        assert_eq!(restored.logging.level, config.logging.level);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let raw = r#"
[help]
whitelist = ["123456"]
plugin_whitelist = ["Weather-forecast help"]
"#;
        let config: StargazerConfig = toml::from_str(raw).unwrap();
        assert_eq!(config.help.trigger, "help");
        assert_eq!(config.help.whitelist, vec!["123456"]);
        assert_eq!(config.help.plugin_whitelist, vec!["Weather-forecast help"]);
        assert_eq!(config.logging.level, "info");
    }

    // ── Loader tests ───────────────────────────────────────────

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[help]
trigger = "commands"
whitelist = ["42"]

[logging]
level = "debug"
"#
        )
        .unwrap();

        let loader = ConfigLoader::load(Some(file.path())).unwrap();
        let config = loader.get();
        assert_eq!(config.help.trigger, "commands");
        assert_eq!(config.help.whitelist, vec!["42"]);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(loader.path(), file.path());
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.toml");
        let loader = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(loader.get().help.trigger, "help");
    }

    #[test]
    fn test_load_rejects_invalid_logging_level() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"shout\"").unwrap();
        assert!(ConfigLoader::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[help\ntrigger = ").unwrap();
        assert!(ConfigLoader::load(Some(file.path())).is_err());
    }
}
