use crate::error::AppError;
use crate::model::responses::Envelope;
use async_trait::async_trait;

/// Notification-style operations, shared by notifications and log management
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Gets the unread count
    async fn count(&self) -> Result<Envelope, AppError>;

    /// Asks the server to collect new entries
    async fn refresh(&self) -> Result<Envelope, AppError>;

    /// Marks everything as read
    async fn set_read(&self) -> Result<Envelope, AppError>;
}
