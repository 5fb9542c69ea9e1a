use std::sync::{Arc, Mutex};

use tracing::{error, info, warn};

use crate::config::RegistrarConfig;
use crate::errors::RegistrarError;
use crate::models::{
    encode_device_token, AuthorizationStatus, NotificationEvent, PresentationOptions,
    PushCapabilities,
};
use crate::platform::{NotificationDelegate, PlatformNotifications};
use crate::store::{FileTokenStore, MemoryTokenStore, TokenStore};

/// Callback invoked with the hex-encoded device token on receipt
pub type TokenCallback = Arc<dyn Fn(String) + Send + Sync>;

/// Callback invoked with each received or interacted-with notification
pub type PushCallback = Arc<dyn Fn(NotificationEvent) + Send + Sync>;

/// Device-side push notification registrar
///
/// Mediates between application code and the platform notification service:
/// checks and requests notification permission, triggers remote-token
/// registration, caches the issued token, and forwards notification events
/// to the registered callbacks.
///
/// Construct one per process in the composition root and hold it in an
/// `Arc`; the platform-binding layer receives the same `Arc` as its
/// notification delegate via [`PushRegistrar::configure`].
///
/// No operation returns a typed error to the caller: platform failures are
/// logged and leave state unchanged, and retrying is left to the platform or
/// to the application re-invoking `configure`.
pub struct PushRegistrar {
    platform: Arc<dyn PlatformNotifications>,
    store: Arc<dyn TokenStore>,
    capabilities: PushCapabilities,
    on_token_received: Mutex<Option<TokenCallback>>,
    on_push_received: Mutex<Option<PushCallback>>,
}

impl PushRegistrar {
    /// Creates a new registrar
    ///
    /// The token store is chosen from the configuration: file-backed when a
    /// cache path is set, in-memory otherwise.
    pub fn new(platform: Arc<dyn PlatformNotifications>, config: RegistrarConfig) -> Self {
        let store: Arc<dyn TokenStore> = match &config.token_cache_path {
            Some(path) => Arc::new(FileTokenStore::new(path)),
            None => Arc::new(MemoryTokenStore::new()),
        };
        Self::with_store(platform, store, config)
    }

    /// Creates a new registrar with a custom token store
    pub fn with_store(
        platform: Arc<dyn PlatformNotifications>,
        store: Arc<dyn TokenStore>,
        config: RegistrarConfig,
    ) -> Self {
        Self {
            platform,
            store,
            capabilities: config.capabilities,
            on_token_received: Mutex::new(None),
            on_push_received: Mutex::new(None),
        }
    }

    /// Registers the callback invoked when a device token is received
    pub fn set_on_token_received(&self, callback: impl Fn(String) + Send + Sync + 'static) {
        *self
            .on_token_received
            .lock()
            .expect("Token callback lock poisoned") = Some(Arc::new(callback));
    }

    /// Registers the callback invoked when a notification is received
    pub fn set_on_push_received(
        &self,
        callback: impl Fn(NotificationEvent) + Send + Sync + 'static,
    ) {
        *self
            .on_push_received
            .lock()
            .expect("Push callback lock poisoned") = Some(Arc::new(callback));
    }

    /// Installs this registrar as the platform's notification delegate and
    /// checks authorization
    ///
    /// From this point the platform may invoke the delegate hooks at any
    /// time. Idempotent: calling again re-installs the delegate and re-runs
    /// the authorization check.
    pub async fn configure(self: Arc<Self>) {
        self.platform.set_delegate(self.clone());
        self.check_authorization().await;
    }

    /// Queries the current authorization status and acts on it
    ///
    /// Authorized status registers for remote notifications directly; a
    /// not-determined status prompts the user; denial is terminal until the
    /// user changes the system settings and is left alone.
    pub async fn check_authorization(&self) {
        match self.platform.authorization_status().await {
            AuthorizationStatus::Authorized => {
                info!("Notification permission granted, registering for remote notifications");
                self.platform.register_for_remote_notifications().await;
            }
            AuthorizationStatus::Denied => {
                info!("Notification permission denied, notifications must be enabled in system settings");
            }
            AuthorizationStatus::NotDetermined => {
                info!("Notification permission not determined, requesting authorization");
                self.request_authorization().await;
            }
            AuthorizationStatus::Unknown => {
                warn!("Unknown notification permission status");
            }
        }
    }

    /// Prompts the user for notification permission
    ///
    /// Registers for remote notifications when granted. Denial and prompt
    /// failures are logged only; neither is surfaced to the caller.
    pub async fn request_authorization(&self) {
        match self.platform.request_authorization(self.capabilities).await {
            Ok(true) => {
                info!("Notification permission granted");
                self.platform.register_for_remote_notifications().await;
            }
            Ok(false) => {
                info!("Notification permission was denied");
            }
            Err(e) => {
                error!("Failed to request notification permission: {}", e);
            }
        }
    }

    /// Caches a freshly issued device token and notifies the application
    ///
    /// The raw token is hex-encoded, the single cache slot is overwritten
    /// (last write wins), and the token callback fires with the new value. A
    /// persistence failure is logged; the callback still fires since the
    /// encoded token is valid for the session regardless.
    pub async fn set_device_token(&self, raw_token: &[u8]) {
        let token = encode_device_token(raw_token);
        let token_prefix = token.chars().take(8).collect::<String>();
        info!("Device token received (prefix {})", token_prefix);

        if let Err(e) = self.store.save(&token).await {
            error!("Failed to persist device token: {}", e);
        }

        let callback = self
            .on_token_received
            .lock()
            .expect("Token callback lock poisoned")
            .clone();
        if let Some(callback) = callback {
            callback(token);
        }
    }

    /// Returns the cached device token, or an empty string if none has been
    /// received yet
    pub async fn cached_token(&self) -> String {
        match self.store.load().await {
            Ok(Some(token)) => token,
            Ok(None) => String::new(),
            Err(e) => {
                warn!("Failed to read cached device token: {}", e);
                String::new()
            }
        }
    }

    fn forward_push(&self, event: NotificationEvent) {
        let callback = self
            .on_push_received
            .lock()
            .expect("Push callback lock poisoned")
            .clone();
        if let Some(callback) = callback {
            callback(event);
        }
    }
}

#[async_trait::async_trait]
impl NotificationDelegate for PushRegistrar {
    async fn device_token_received(&self, raw_token: &[u8]) {
        self.set_device_token(raw_token).await;
    }

    async fn registration_failed(&self, error: RegistrarError) {
        error!("Remote notification registration failed: {}", error);
    }

    async fn will_present_notification(&self, event: NotificationEvent) -> PresentationOptions {
        info!("Foreground notification received");
        self.forward_push(event);

        // Fixed presentation policy: banner with sound and badge
        PresentationOptions {
            banner: true,
            sound: true,
            badge: true,
        }
    }

    async fn did_receive_notification_response(&self, event: NotificationEvent) {
        info!("Notification interaction received");
        self.forward_push(event);
    }
}
