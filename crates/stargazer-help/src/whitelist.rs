use std::collections::HashMap;

use tracing::info;

/// Two derived views over the configured per-extension whitelist entries.
///
/// Built once at attach time from `"extension-trigger"` lines and immutable
/// afterwards. Later duplicate keys overwrite earlier ones in each view.
#[derive(Debug, Clone, Default)]
pub struct WhitelistIndex {
    by_trigger: HashMap<String, String>,
    by_extension: HashMap<String, String>,
}

impl WhitelistIndex {
    /// Parse raw configuration lines into the two lookup views.
    ///
    /// Each line splits on the first `-`; the left side names the extension,
    /// the right side the trigger command. Lines without a separator, or
    /// with a side that trims to empty, contribute nothing.
    pub fn parse(lines: &[String]) -> Self {
        let mut index = Self::default();
        for line in lines {
            let Some((extension, trigger)) = line.split_once('-') else {
                continue;
            };
            let extension = extension.trim();
            let trigger = trigger.trim();
            if extension.is_empty() || trigger.is_empty() {
                continue;
            }
            index
                .by_trigger
                .insert(trigger.to_string(), extension.to_string());
            index
                .by_extension
                .insert(extension.to_string(), trigger.to_string());
        }
        info!(mapping = ?index.by_trigger, "resolved extension whitelist");
        index
    }

    /// Extension bound to a trigger command.
    pub fn extension_for(&self, trigger: &str) -> Option<&str> {
        self.by_trigger.get(trigger).map(String::as_str)
    }

    /// Trigger command bound to an extension.
    pub fn trigger_for(&self, extension: &str) -> Option<&str> {
        self.by_extension.get(extension).map(String::as_str)
    }

    pub fn contains_extension(&self, extension: &str) -> bool {
        self.by_extension.contains_key(extension)
    }

    /// Iterate `(trigger, extension)` pairs.
    pub fn triggers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_trigger
            .iter()
            .map(|(trigger, extension)| (trigger.as_str(), extension.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.by_trigger.is_empty()
    }

    pub fn len(&self) -> usize {
        self.by_trigger.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_both_views() {
        let index = WhitelistIndex::parse(&lines(&["Weather-forecast help", "Music-play menu"]));
        assert_eq!(index.len(), 2);
        assert_eq!(index.extension_for("forecast help"), Some("Weather"));
        assert_eq!(index.trigger_for("Weather"), Some("forecast help"));
        assert_eq!(index.extension_for("play menu"), Some("Music"));
    }

    #[test]
    fn splits_on_first_separator_only() {
        let index = WhitelistIndex::parse(&lines(&["astrbot-reminder-remind me"]));
        // Left of the FIRST '-' is the extension, everything after is the trigger.
        assert_eq!(index.extension_for("reminder-remind me"), Some("astrbot"));
        assert_eq!(index.trigger_for("astrbot"), Some("reminder-remind me"));
    }

    #[test]
    fn trims_both_sides() {
        let index = WhitelistIndex::parse(&lines(&["  Weather - forecast  "]));
        assert_eq!(index.extension_for("forecast"), Some("Weather"));
    }

    #[test]
    fn drops_lines_without_separator() {
        let index = WhitelistIndex::parse(&lines(&["no separator here"]));
        assert!(index.is_empty());
    }

    #[test]
    fn drops_lines_with_an_empty_side() {
        let index = WhitelistIndex::parse(&lines(&["Weather-", "-forecast", " - "]));
        assert!(index.is_empty());
    }

    #[test]
    fn later_duplicates_overwrite() {
        let index = WhitelistIndex::parse(&lines(&["A-cmd", "B-cmd"]));
        assert_eq!(index.extension_for("cmd"), Some("B"));
        // Both extensions keep their (identical) trigger in the other view.
        assert_eq!(index.trigger_for("A"), Some("cmd"));
        assert_eq!(index.trigger_for("B"), Some("cmd"));
    }

    #[test]
    fn empty_input_yields_empty_index() {
        let index = WhitelistIndex::parse(&[]);
        assert!(index.is_empty());
        assert_eq!(index.extension_for("anything"), None);
    }
}
