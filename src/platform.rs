use std::sync::Arc;

use crate::errors::RegistrarError;
use crate::models::{AuthorizationStatus, NotificationEvent, PresentationOptions, PushCapabilities};

/// Trait for the platform notification service
///
/// Implemented by the platform-binding layer that wraps the host operating
/// system's notification APIs. All completions are asynchronous and may land
/// on any task; the registrar imposes no ordering across calls and never
/// cancels an in-flight operation.
#[async_trait::async_trait]
pub trait PlatformNotifications: Send + Sync {
    /// Installs the delegate that receives inbound notification events
    ///
    /// The binding layer holds the reference and routes the platform's
    /// delegate callbacks (token delivery, foreground presentation, user
    /// interaction) through it.
    fn set_delegate(&self, delegate: Arc<dyn NotificationDelegate>);

    /// Queries the current notification authorization status
    async fn authorization_status(&self) -> AuthorizationStatus;

    /// Shows the system permission prompt requesting the given capabilities
    ///
    /// # Returns
    /// `Ok(granted)` with the user's decision, `Err` if the platform reported
    /// a prompt failure.
    async fn request_authorization(
        &self,
        capabilities: PushCapabilities,
    ) -> Result<bool, RegistrarError>;

    /// Triggers registration for a remote-notification token
    ///
    /// Fire-and-forget: the token (or a failure) is delivered later through
    /// the installed delegate. Registration touches UI-owned subsystems, so
    /// implementations must marshal this call onto their main/UI execution
    /// context themselves.
    async fn register_for_remote_notifications(&self);
}

/// Inbound delegate contract the registrar fulfils for the platform
///
/// The platform-binding layer invokes these hooks on its own schedule,
/// potentially from a different execution context than any application call.
#[async_trait::async_trait]
pub trait NotificationDelegate: Send + Sync {
    /// Called when remote registration succeeds and a raw token is issued
    async fn device_token_received(&self, raw_token: &[u8]);

    /// Called when remote registration fails
    async fn registration_failed(&self, error: RegistrarError);

    /// Called when a notification arrives while the application is in the
    /// foreground; the returned options tell the platform how to present it
    async fn will_present_notification(&self, event: NotificationEvent) -> PresentationOptions;

    /// Called when the user interacts with a notification (e.g. taps it);
    /// returning acknowledges completion to the platform
    async fn did_receive_notification_response(&self, event: NotificationEvent);
}
