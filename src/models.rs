use serde::{Deserialize, Serialize};

/// Notification authorization status reported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationStatus {
    Authorized,
    Denied,
    NotDetermined,
    Unknown,
}

/// Capability set requested when prompting the user for permission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushCapabilities {
    pub alert: bool,
    pub sound: bool,
    pub badge: bool,
}

impl Default for PushCapabilities {
    fn default() -> Self {
        Self {
            alert: true,
            sound: true,
            badge: true,
        }
    }
}

/// Presentation affordances to use for a notification delivered while the
/// application is in the foreground
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationOptions {
    pub banner: bool,
    pub sound: bool,
    pub badge: bool,
}

/// Notification payload delivered by the platform
///
/// The payload is opaque to the registrar; it is forwarded to the application
/// as-is and never stored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationEvent {
    pub user_info: serde_json::Map<String, serde_json::Value>,
}

impl NotificationEvent {
    /// Create a new notification event from a payload mapping
    pub fn new(user_info: serde_json::Map<String, serde_json::Value>) -> Self {
        Self { user_info }
    }

    /// Look up a payload value by key
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.user_info.get(key)
    }
}

/// Encode a raw device token as a lowercase hex string
///
/// Each byte becomes exactly two hex digits, with no separators.
pub fn encode_device_token(raw_token: &[u8]) -> String {
    hex::encode(raw_token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_device_token() {
        assert_eq!(encode_device_token(&[0x1a, 0x2b]), "1a2b");
        assert_eq!(encode_device_token(&[0x00, 0xff, 0x1a]), "00ff1a");
        assert_eq!(encode_device_token(&[]), "");
    }

    #[test]
    fn test_encode_device_token_shape() {
        let raw: Vec<u8> = (0..=255).collect();
        let encoded = encode_device_token(&raw);

        assert_eq!(encoded.len(), 2 * raw.len());
        assert!(encoded.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));

        // Deterministic
        assert_eq!(encoded, encode_device_token(&raw));
    }

    #[test]
    fn test_default_capabilities_request_everything() {
        let caps = PushCapabilities::default();
        assert!(caps.alert);
        assert!(caps.sound);
        assert!(caps.badge);
    }

    #[test]
    fn test_event_payload_lookup() {
        let mut user_info = serde_json::Map::new();
        user_info.insert("kind".to_string(), serde_json::json!("message"));

        let event = NotificationEvent::new(user_info);
        assert_eq!(event.get("kind"), Some(&serde_json::json!("message")));
        assert_eq!(event.get("missing"), None);
    }
}
