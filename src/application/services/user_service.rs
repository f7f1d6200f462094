use crate::application::interfaces::user::UserService;
use crate::application::services::resource_service::ResourceClient;
use crate::error::AppError;
use crate::model::requests::{ChangePasswordRequest, FormData, Params};
use crate::model::responses::Envelope;
use async_trait::async_trait;
use serde_json::Value;
use std::ops::Deref;
use tracing::{info, warn};

/// User resource client: the standard operations plus account management
#[derive(Debug, Clone)]
pub struct UserClient {
    resource: ResourceClient,
}

impl UserClient {
    /// Wraps a resource client for the same path
    pub fn new(resource: ResourceClient) -> Self {
        Self { resource }
    }
}

impl Deref for UserClient {
    type Target = ResourceClient;

    fn deref(&self) -> &Self::Target {
        &self.resource
    }
}

#[async_trait]
impl UserService for UserClient {
    async fn signin(&self, credentials: FormData) -> Result<Envelope, AppError> {
        let envelope = self
            .http()
            .post(&self.endpoint("signin"), None, Some(credentials), None)
            .await?;

        if envelope.is_success() {
            match envelope.access_token() {
                Some(token) => {
                    self.http().auth().save_token(token)?;
                    info!("Signed in");
                }
                None => warn!("Sign-in succeeded but the response carried no access token"),
            }
        }
        Ok(envelope)
    }

    async fn activation(&self, uid: &str, code: &str) -> Result<Envelope, AppError> {
        let mut params = Params::new();
        params.insert("uid".to_string(), Value::from(uid));
        params.insert("code".to_string(), Value::from(code));
        self.http()
            .get(&self.endpoint("activation"), Some(params), None)
            .await
    }

    async fn get_user_id(&self) -> Result<Envelope, AppError> {
        self.http().get(&self.endpoint("get_userid"), None, None).await
    }

    async fn change_password(&self, request: ChangePasswordRequest) -> Result<Envelope, AppError> {
        self.http()
            .post(&self.endpoint("change_password"), None, Some(request.into()), None)
            .await
    }

    async fn request_password_reset(
        &self,
        nickname: &str,
        email: &str,
    ) -> Result<Envelope, AppError> {
        let body = FormData::new().with("nickname", nickname).with("email", email);
        self.http()
            .post(&self.endpoint("request_password_reset"), None, Some(body), None)
            .await
    }

    async fn validate_password_reset(
        &self,
        uid: &str,
        code: &str,
        password: &str,
    ) -> Result<Envelope, AppError> {
        let body = FormData::new()
            .with("uid", uid)
            .with("code", code)
            .with("password", password);
        self.http()
            .post(&self.endpoint("validate_password_reset"), None, Some(body), None)
            .await
    }

    async fn signout(&self) -> Result<Envelope, AppError> {
        let envelope = self
            .http()
            .post(&self.endpoint("signout"), None, None, None)
            .await?;
        info!("Signed out (code {})", envelope.code);
        Ok(envelope)
    }
}
