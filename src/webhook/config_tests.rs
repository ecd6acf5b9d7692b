//! Tests for `WebhookConfig` and `DeliveryContext`.

use super::{DEFAULT_CHANNEL, DeliveryContext, WebhookConfig};
use std::time::Duration;

fn test_url() -> url::Url {
    url::Url::parse("https://hooks.example.com/services/T/B/X").unwrap()
}

mod webhook_config {
    use super::*;

    #[test]
    fn new_uses_defaults() {
        let config = WebhookConfig::new(test_url());

        assert_eq!(config.url(), &test_url());
        assert!(!config.ignore_tls());
        assert_eq!(config.bot_name(), "");
        assert_eq!(config.bot_icon(), "");
        assert_eq!(config.channel(), DEFAULT_CHANNEL);
        assert!(config.markdown());
        assert!(config.relay_url().is_none());
        assert!(config.timeout().is_none());
    }

    #[test]
    fn builder_chains_correctly() {
        let relay = url::Url::parse("https://app.example.com/relay").unwrap();
        let config = WebhookConfig::new(test_url())
            .with_bot_name("Robo")
            .with_bot_icon("https://example.com/robo.png")
            .with_channel("@someone")
            .with_ignore_tls(true)
            .with_markdown(false)
            .with_relay_url(relay.clone())
            .with_timeout(Duration::from_secs(10));

        assert_eq!(config.bot_name(), "Robo");
        assert_eq!(config.bot_icon(), "https://example.com/robo.png");
        assert_eq!(config.channel(), "@someone");
        assert!(config.ignore_tls());
        assert!(!config.markdown());
        assert_eq!(config.relay_url(), Some(&relay));
        assert_eq!(config.timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn setters_mutate_in_place() {
        let mut config = WebhookConfig::new(test_url());

        config.set_channel("#ops");
        config.set_ignore_tls(true);
        config.set_bot_name("Ops");
        config.set_bot_icon(":fire:");
        config.set_markdown(false);
        config.set_relay_url(Some(test_url()));

        assert_eq!(config.channel(), "#ops");
        assert!(config.ignore_tls());
        assert_eq!(config.bot_name(), "Ops");
        assert_eq!(config.bot_icon(), ":fire:");
        assert!(!config.markdown());
        assert!(config.relay_url().is_some());

        config.set_relay_url(None);
        assert!(config.relay_url().is_none());
    }

    #[test]
    fn last_write_wins() {
        let mut config = WebhookConfig::new(test_url()).with_channel("#a");
        config.set_channel("#b");
        config.set_channel("#c");

        assert_eq!(config.channel(), "#c");
    }
}

mod delivery_context {
    use super::*;

    #[test]
    fn new_disables_async() {
        let context = DeliveryContext::new();

        assert!(!context.allow_async);
        assert!(context.self_url.is_none());
        assert_eq!(context, DeliveryContext::default());
    }

    #[test]
    fn builder_sets_fields() {
        let context = DeliveryContext::new()
            .with_allow_async(true)
            .with_self_url(test_url());

        assert!(context.allow_async);
        assert_eq!(context.self_url, Some(test_url()));
    }
}
