use crate::error::AppError;
use crate::model::responses::Envelope;
use async_trait::async_trait;

/// Interface for the upload service
#[async_trait]
pub trait UploadService: Send + Sync {
    /// Requests an upload authorization token scoped to `role`
    async fn token(&self, role: Option<&str>) -> Result<Envelope, AppError>;
}
