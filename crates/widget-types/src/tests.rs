#[cfg(test)]
mod tests {
    use crate::message::*;
    use crate::channel::*;
    use crate::config::*;
    use crate::event::*;
    use crate::session::*;
    use crate::seminar::*;
    use crate::error::*;

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_user() {
        let msg = ChatMessage::user("Hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.sender, "You");
        assert_eq!(msg.text, "Hello");
        assert!(msg.timestamp.is_none());
        assert!(msg.sources.is_empty());
        assert!(msg.is_user());
    }

    #[test]
    fn test_message_agent() {
        let msg = ChatMessage::agent("AI Agent", "How can I help?");
        assert_eq!(msg.role, Role::Agent);
        assert_eq!(msg.sender, "AI Agent");
        assert!(!msg.is_user());
    }

    #[test]
    fn test_message_fallback_text() {
        let msg = ChatMessage::fallback(AGENT_SENDER);
        assert_eq!(msg.role, Role::Agent);
        assert_eq!(
            msg.text,
            "I apologize, but I'm experiencing technical difficulties. \
             Please try again or contact our support team."
        );
    }

    #[test]
    fn test_message_with_sources() {
        let msg = ChatMessage::agent("AI Agent", "Hi there")
            .with_sources(vec!["doc1".to_string(), "doc2".to_string()]);
        assert_eq!(msg.sources, vec!["doc1", "doc2"]);
    }

    #[test]
    fn test_message_stamped_is_rfc3339() {
        let msg = ChatMessage::user("hi").stamped();
        let ts = msg.timestamp.unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }

    #[test]
    fn test_message_serialization_skips_empty_fields() {
        let json = serde_json::to_string(&ChatMessage::user("x")).unwrap();
        assert!(json.contains(r#""role":"user""#));
        assert!(!json.contains("timestamp"));
        assert!(!json.contains("sources"));
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
        assert_eq!(serde_json::to_string(&Role::Agent).unwrap(), r#""agent""#);
    }

    // ─── Channel Tests ───────────────────────────────────────

    #[test]
    fn test_channel_tags() {
        let tags: Vec<&str> = Channel::all().iter().map(|c| c.as_str()).collect();
        assert_eq!(
            tags,
            vec!["web", "sms", "whatsapp", "facebook", "instagram", "neuralapps"]
        );
    }

    #[test]
    fn test_channel_serde_matches_wire_tag() {
        for channel in Channel::all() {
            let json = serde_json::to_string(channel).unwrap();
            assert_eq!(json, format!("\"{}\"", channel.as_str()));
        }
    }

    #[test]
    fn test_channel_from_tag() {
        assert_eq!(Channel::from_tag("whatsapp"), Some(Channel::WhatsApp));
        assert_eq!(Channel::from_tag(" SMS "), Some(Channel::Sms));
        assert_eq!(Channel::from_tag("telegram"), None);
    }

    #[test]
    fn test_channel_from_tag_or_web() {
        assert_eq!(Channel::from_tag_or_web(Some("instagram")), Channel::Instagram);
        assert_eq!(Channel::from_tag_or_web(Some("pager")), Channel::Web);
        assert_eq!(Channel::from_tag_or_web(None), Channel::Web);
    }

    #[test]
    fn test_channel_toggleable() {
        assert!(Channel::Sms.is_toggleable());
        assert!(Channel::WhatsApp.is_toggleable());
        assert!(!Channel::Web.is_toggleable());
        assert!(!Channel::Facebook.is_toggleable());
        assert!(!Channel::Instagram.is_toggleable());
        assert!(!Channel::NeuralApps.is_toggleable());
    }

    #[test]
    fn test_channel_labels() {
        assert_eq!(Channel::Sms.label(), "SMS");
        assert_eq!(Channel::WhatsApp.label(), "WhatsApp");
        assert_eq!(Channel::WhatsApp.to_string(), "whatsapp");
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_api_config_for_hostname() {
        assert_eq!(ApiConfig::for_hostname("localhost").base_url, "http://localhost:8000");
        assert_eq!(
            ApiConfig::for_hostname("www.provisionbrokerage.com").base_url,
            "https://provision-brokerage-1.onrender.com"
        );
        assert_eq!(Deployment::from_hostname("LOCALHOST"), Deployment::Local);
        assert_eq!(Deployment::from_hostname("127.0.0.1"), Deployment::Hosted);
    }

    #[test]
    fn test_api_config_endpoint_joins_cleanly() {
        let api = ApiConfig {
            base_url: "http://localhost:8000/".to_string(),
            request_timeout_ms: 1000,
        };
        assert_eq!(api.endpoint("/api/chat"), "http://localhost:8000/api/chat");
        assert_eq!(api.endpoint("api/chat"), "http://localhost:8000/api/chat");
    }

    #[test]
    fn test_mount_defaults() {
        let opts = MountOptions::default();
        assert_eq!(opts.page_context, "home");
        assert_eq!(opts.initial_message, DEFAULT_GREETING);
        assert!(!opts.show_channel_toggle);
        assert!(opts.channel_mode.is_none());
        assert_eq!(opts.agent_name, "AI Agent");
        assert_eq!(opts.session_prefix, "widget");
        assert_eq!(opts.initial_channel(), Channel::Web);
    }

    #[test]
    fn test_mount_toggle_defaults_to_sms() {
        let opts = MountOptions {
            show_channel_toggle: true,
            ..MountOptions::default()
        };
        assert_eq!(opts.initial_channel(), Channel::Sms);
    }

    #[test]
    fn test_mount_explicit_channel_wins() {
        let opts = MountOptions {
            show_channel_toggle: true,
            channel_mode: Some(Channel::WhatsApp),
            ..MountOptions::default()
        };
        assert_eq!(opts.initial_channel(), Channel::WhatsApp);
    }

    #[test]
    fn test_mount_assistant_page_preset() {
        let opts = MountOptions::assistant_page();
        assert_eq!(opts.initial_channel(), Channel::Web);
        assert_eq!(opts.page_context, "home");
        assert!(opts.timestamps);
        assert!(opts.show_sources);
        assert_eq!(opts.session_prefix, "session");
        assert_eq!(opts.greeting_sender(), "Sarah - ProVision Brokerage");
        assert_eq!(opts.agent_name, AGENT_SENDER);
        assert_eq!(
            opts.placeholder.as_deref(),
            Some("Ask me about retirement planning, annuities, or book a consultation...")
        );
    }

    #[test]
    fn test_mount_greeting_sender_defaults_to_agent_name() {
        let opts = MountOptions {
            agent_name: "Sarah".to_string(),
            ..MountOptions::default()
        };
        assert_eq!(opts.greeting_sender(), "Sarah");
        assert!(opts.placeholder.is_none());
    }

    #[test]
    fn test_widget_config_partial_json() {
        let json = r#"{"mount":{"page_context":"seminars","show_channel_toggle":true}}"#;
        let config: WidgetConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.mount.page_context, "seminars");
        assert!(config.mount.show_channel_toggle);
        assert_eq!(config.mount.initial_message, DEFAULT_GREETING);
        assert!(config.api.is_none());
    }

    #[test]
    fn test_widget_config_channel_mode_tag() {
        let json = r#"{"mount":{"channel_mode":"facebook"}}"#;
        let config: WidgetConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.mount.initial_channel(), Channel::Facebook);
    }

    fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: std::collections::HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_mount_from_no_attributes() {
        assert_eq!(MountOptions::from_attributes(attrs(&[])), MountOptions::default());
    }

    #[test]
    fn test_mount_from_attributes() {
        let opts = MountOptions::from_attributes(attrs(&[
            (ATTR_PAGE_CONTEXT, "seminars"),
            (ATTR_INITIAL_MESSAGE, "Welcome to our seminars!"),
            (ATTR_SHOW_CHANNEL_TOGGLE, ""),
        ]));
        assert_eq!(opts.page_context, "seminars");
        assert_eq!(opts.initial_message, "Welcome to our seminars!");
        assert!(opts.show_channel_toggle);
        assert_eq!(opts.initial_channel(), Channel::Sms);
    }

    #[test]
    fn test_mount_toggle_flag_values() {
        for (value, expected) in [("true", true), ("", true), ("false", false), ("0", false), ("OFF", false)] {
            let opts = MountOptions::from_attributes(attrs(&[(ATTR_SHOW_CHANNEL_TOGGLE, value)]));
            assert_eq!(opts.show_channel_toggle, expected, "value {value:?}");
        }
    }

    #[test]
    fn test_mount_unknown_channel_mode_ignored() {
        let opts = MountOptions::from_attributes(attrs(&[(ATTR_CHANNEL_MODE, "telegram")]));
        assert_eq!(opts.channel_mode, None);
        assert_eq!(opts.initial_channel(), Channel::Web);

        let opts = MountOptions::from_attributes(attrs(&[(ATTR_CHANNEL_MODE, "Instagram")]));
        assert_eq!(opts.initial_channel(), Channel::Instagram);
    }

    #[test]
    fn test_widget_config_json_attribute_wins() {
        let json = r#"{"api":{"base_url":"http://127.0.0.1:9000"},"mount":{"page_context":"retirement"}}"#;
        let config = WidgetConfig::from_attributes(attrs(&[
            (ATTR_WIDGET_CONFIG, json),
            (ATTR_PAGE_CONTEXT, "seminars"),
        ]))
        .unwrap();
        assert_eq!(config.mount.page_context, "retirement");
        let api = config.api.unwrap();
        assert_eq!(api.base_url, "http://127.0.0.1:9000");
        assert_eq!(api.request_timeout_ms, 30_000);
    }

    #[test]
    fn test_widget_config_bad_json_attribute() {
        let err = WidgetConfig::from_attributes(attrs(&[(ATTR_WIDGET_CONFIG, "{nope")])).unwrap_err();
        assert!(matches!(err, WidgetError::Decode(_)));
    }

    #[test]
    fn test_widget_config_from_plain_attributes() {
        let config = WidgetConfig::from_attributes(attrs(&[(ATTR_CHANNEL_MODE, "sms")])).unwrap();
        assert!(config.api.is_none());
        assert_eq!(config.mount.initial_channel(), Channel::Sms);
    }

    // ─── Session Tests ───────────────────────────────────────

    #[test]
    fn test_session_new() {
        let session = Session::new("s1".to_string(), Channel::Sms, "seminars");
        assert_eq!(session.id, "s1");
        assert_eq!(session.channel, Channel::Sms);
        assert_eq!(session.page_context, "seminars");
        assert!(session.transcript.is_empty());
        assert!(session.pending_input.is_empty());
        assert!(!session.awaiting_reply);
        assert!(!session.toggle_enabled);
    }

    #[test]
    fn test_session_default_is_blank() {
        let session = Session::default();
        assert!(session.id.is_empty());
        assert_eq!(session.channel, Channel::Web);
        assert!(session.transcript.is_empty());
        assert!(!session.can_send());
    }

    #[test]
    fn test_session_can_send() {
        let mut session = Session::new("s1".to_string(), Channel::Web, "home");
        assert!(!session.can_send());
        session.pending_input = "   ".to_string();
        assert!(!session.can_send());
        session.pending_input = "Hello".to_string();
        assert!(session.can_send());
        session.awaiting_reply = true;
        assert!(!session.can_send());
    }

    #[test]
    fn test_session_id_shape() {
        let id = generate_session_id("widget");
        let parts: Vec<&str> = id.split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "widget");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 9);
        assert!(parts[2].chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_session_ids_are_distinct() {
        let ids: std::collections::HashSet<String> =
            (0..200).map(|_| generate_session_id("widget")).collect();
        assert_eq!(ids.len(), 200);
    }

    // ─── Event Tests ─────────────────────────────────────────

    #[test]
    fn test_event_serialization() {
        let event = WidgetEvent::ChannelSwitched {
            from: Channel::Sms,
            to: Channel::WhatsApp,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("ChannelSwitched"));
        assert!(json.contains("whatsapp"));
    }

    // ─── Seminar Tests ───────────────────────────────────────

    #[test]
    fn test_seminar_list_from_backend_json() {
        let json = r#"{
            "seminars": [{
                "id": 3,
                "title": "Retirement Planning Strategies",
                "description": null,
                "date": "2026-11-06T18:00:00+00:00",
                "duration": 60,
                "location_type": "virtual",
                "capacity": 50,
                "registered_count": 48,
                "available_seats": 2,
                "is_full": false,
                "status": "upcoming"
            }],
            "count": 1
        }"#;
        let list: SeminarList = serde_json::from_str(json).unwrap();
        assert_eq!(list.count, 1);
        let seminar = &list.seminars[0];
        assert_eq!(seminar.available_seats(), 2);
        assert!(!seminar.is_full());
        assert!(seminar.description.is_none());
    }

    #[test]
    fn test_seminar_full_when_over_capacity() {
        let seminar = Seminar {
            id: 1,
            title: "Annuities 101".to_string(),
            description: None,
            topic: None,
            date: None,
            duration: None,
            location_type: None,
            location_details: None,
            capacity: 10,
            registered_count: 12,
            status: None,
        };
        assert!(seminar.is_full());
        assert_eq!(seminar.available_seats(), 0);
    }

    #[test]
    fn test_registration_body() {
        let reg = SeminarRegistration::guest(7, "John Doe", "john@example.com", "+1 555 123 4567");
        let json = serde_json::to_value(&reg).unwrap();
        assert_eq!(json["seminar_id"], 7);
        assert_eq!(json["guest_name"], "John Doe");
        assert_eq!(json["reminder_preference"], "email");
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        let err = WidgetError::Network("offline".to_string());
        assert_eq!(err.to_string(), "Network error: offline");

        let err = WidgetError::Http {
            status: 502,
            body: "Bad Gateway".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 502: Bad Gateway");

        let err = WidgetError::Timeout(30000);
        assert_eq!(err.to_string(), "Timeout after 30000ms");
    }

    #[test]
    fn test_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{{invalid}}").unwrap_err();
        let err: WidgetError = serde_err.into();
        assert!(matches!(err, WidgetError::Decode(_)));
    }
}
