//! Tests for TOML configuration parsing.

use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let toml = r#"
            [webhook]
            url = "https://hooks.example.com/services/T/B/X"
        "#;

        let config = TomlConfig::parse(toml).unwrap();
        assert_eq!(
            config.webhook.url.as_deref(),
            Some("https://hooks.example.com/services/T/B/X")
        );
        assert!(!config.webhook.ignore_tls);
        assert!(config.webhook.timeout.is_none());
    }

    #[test]
    fn parse_full_config() {
        let toml = r##"
            [webhook]
            url = "https://hooks.example.com/services/T/B/X"
            ignore_tls = true
            timeout = 10

            [bot]
            name = "Robo"
            icon = ":ghost:"
            channel = "#ops"
            markdown = false

            [relay]
            url = "https://app.example.com/relay"
            self_url = "https://me.example.com/relay"
            allow_async = true
        "##;

        let config = TomlConfig::parse(toml).unwrap();

        assert!(config.webhook.ignore_tls);
        assert_eq!(config.webhook.timeout, Some(10));
        assert_eq!(config.bot.name.as_deref(), Some("Robo"));
        assert_eq!(config.bot.icon.as_deref(), Some(":ghost:"));
        assert_eq!(config.bot.channel.as_deref(), Some("#ops"));
        assert_eq!(config.bot.markdown, Some(false));
        assert_eq!(
            config.relay.url.as_deref(),
            Some("https://app.example.com/relay")
        );
        assert_eq!(
            config.relay.self_url.as_deref(),
            Some("https://me.example.com/relay")
        );
        assert!(config.relay.allow_async);
    }

    #[test]
    fn parse_empty_config() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.webhook.url.is_none());
        assert!(config.bot.name.is_none());
        assert!(!config.relay.allow_async);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let toml = r#"
            [webhook]
            url = "https://hooks.example.com/x"
            retries = 3
        "#;

        assert!(TomlConfig::parse(toml).is_err());
    }

    #[test]
    fn unknown_section_is_rejected() {
        assert!(TomlConfig::parse("[queue]\nsize = 1").is_err());
    }

    #[test]
    fn wrong_type_is_rejected() {
        assert!(TomlConfig::parse("[relay]\nallow_async = \"yes\"").is_err());
    }
}

mod template {
    use super::*;

    #[test]
    fn default_template_parses() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();

        // Everything is commented out
        assert!(config.webhook.url.is_none());
        assert!(!config.relay.allow_async);
    }

    #[test]
    fn default_template_mentions_every_section() {
        let template = default_config_template();

        assert!(template.contains("[webhook]"));
        assert!(template.contains("[bot]"));
        assert!(template.contains("[relay]"));
    }
}

mod loading {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[bot]\nname = \"FromFile\"").unwrap();

        let config = TomlConfig::load(file.path()).unwrap();
        assert_eq!(config.bot.name.as_deref(), Some("FromFile"));
    }

    #[test]
    fn load_missing_file_is_error() {
        let result = TomlConfig::load(std::path::Path::new("/nonexistent/slackhook.toml"));

        assert!(matches!(
            result,
            Err(crate::config::ConfigError::FileRead { .. })
        ));
    }
}
