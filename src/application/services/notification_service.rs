use crate::application::interfaces::notification::NotificationService;
use crate::application::services::resource_service::ResourceClient;
use crate::error::AppError;
use crate::model::responses::Envelope;
use async_trait::async_trait;
use std::ops::Deref;

/// Notification resource client; also used for log management under `log/manage`
#[derive(Debug, Clone)]
pub struct NotificationClient {
    resource: ResourceClient,
}

impl NotificationClient {
    /// Wraps a resource client for the same path
    pub fn new(resource: ResourceClient) -> Self {
        Self { resource }
    }
}

impl Deref for NotificationClient {
    type Target = ResourceClient;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}

#[async_trait]
impl NotificationService for NotificationClient {
    async fn count(&self) -> Result<Envelope, AppError> {
        self.http().get(&self.endpoint("count"), None, None).await
    }

    async fn refresh(&self) -> Result<Envelope, AppError> {
        self.http()
            .post(&self.endpoint("refresh"), None, None, None)
            .await
    }

    async fn set_read(&self) -> Result<Envelope, AppError> {
        self.http()
            .post(&self.endpoint("set_read"), None, None, None)
            .await
    }
}
