/// Push Registrar Library
///
/// This library provides the device-side half of remote push notifications:
/// a registrar facade between application code and the host platform's
/// notification service.
///
/// It handles:
/// - Notification permission checks and prompting
/// - Remote-notification token registration
/// - Token hex encoding and single-slot caching (in-memory or file-backed)
/// - Forwarding foreground and interaction notification events to the app
///
/// Everything platform-owned (prompt UI, token issuance, rendering, payload
/// transport) stays behind the PlatformNotifications seam.

pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod platform;
pub mod store;

pub use client::{PushCallback, PushRegistrar, TokenCallback};
pub use config::RegistrarConfig;
pub use errors::RegistrarError;
pub use models::{
    encode_device_token, AuthorizationStatus, NotificationEvent, PresentationOptions,
    PushCapabilities,
};
pub use platform::{NotificationDelegate, PlatformNotifications};
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore};
