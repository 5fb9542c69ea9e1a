use std::path::PathBuf;

use crate::models::PushCapabilities;

/// Registrar configuration
#[derive(Debug, Clone, Default)]
pub struct RegistrarConfig {
    /// Capabilities requested when prompting for permission
    pub capabilities: PushCapabilities,
    /// Where to persist the device token; in-memory only when unset
    pub token_cache_path: Option<PathBuf>,
}

impl RegistrarConfig {
    /// Create a new configuration with the default capability set and an
    /// in-memory token cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the capabilities requested from the user
    pub fn with_capabilities(mut self, capabilities: PushCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Persist the device token to a file at the given path
    pub fn with_token_cache_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_cache_path = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = RegistrarConfig::new();

        assert!(cfg.capabilities.alert);
        assert!(cfg.capabilities.sound);
        assert!(cfg.capabilities.badge);
        assert_eq!(cfg.token_cache_path, None);
    }

    #[test]
    fn test_config_builder() {
        let cfg = RegistrarConfig::new()
            .with_capabilities(PushCapabilities {
                alert: true,
                sound: false,
                badge: false,
            })
            .with_token_cache_path("/var/lib/app/push_token.json");

        assert!(!cfg.capabilities.sound);
        assert_eq!(
            cfg.token_cache_path,
            Some(PathBuf::from("/var/lib/app/push_token.json"))
        );
    }
}
