use crate::error::AppError;
use crate::model::requests::{ChangePasswordRequest, FormData};
use crate::model::responses::Envelope;
use async_trait::async_trait;

/// Account operations on top of the standard user resource
#[async_trait]
pub trait UserService: Send + Sync {
    /// Signs in with the given credentials
    ///
    /// On success the returned `data.access_token` is persisted before the
    /// envelope is handed back.
    async fn signin(&self, credentials: FormData) -> Result<Envelope, AppError>;

    /// Activates an account with the code it was sent
    async fn activation(&self, uid: &str, code: &str) -> Result<Envelope, AppError>;

    /// Gets the id of the signed-in user
    async fn get_user_id(&self) -> Result<Envelope, AppError>;

    /// Changes the signed-in user's password
    async fn change_password(&self, request: ChangePasswordRequest) -> Result<Envelope, AppError>;

    /// Asks the server to send a password reset code
    async fn request_password_reset(&self, nickname: &str, email: &str)
    -> Result<Envelope, AppError>;

    /// Sets a new password using a reset code
    async fn validate_password_reset(
        &self,
        uid: &str,
        code: &str,
        password: &str,
    ) -> Result<Envelope, AppError>;

    /// Signs out of the current session
    ///
    /// The locally stored token is left as is.
    async fn signout(&self) -> Result<Envelope, AppError>;
}
