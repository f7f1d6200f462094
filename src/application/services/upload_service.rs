use crate::application::interfaces::upload::UploadService;
use crate::application::services::resource_service::ResourceClient;
use crate::error::AppError;
use crate::model::responses::Envelope;
use async_trait::async_trait;
use std::ops::Deref;
use tracing::debug;

/// Upload resource client
#[derive(Debug, Clone)]
pub struct UploadClient {
    resource: ResourceClient,
}

impl UploadClient {
    /// Wraps a resource client for the same path
    pub fn new(resource: ResourceClient) -> Self {
        Self { resource }
    }
}

impl Deref for UploadClient {
    type Target = ResourceClient;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}

#[async_trait]
impl UploadService for UploadClient {
    async fn token(&self, role: Option<&str>) -> Result<Envelope, AppError> {
        debug!("Requesting upload token for role {:?}", role);
        self.http()
            .post(&self.endpoint("token"), None, None, role)
            .await
    }
}
