use crate::error::AppError;
use crate::model::requests::{FilterSpec, FormData, Params};
use crate::model::responses::Envelope;
use async_trait::async_trait;

/// The five standard operations every resource supports
///
/// All operations resolve to the decoded envelope. A nonzero `code` is still
/// `Ok`; only transport and decoding failures are errors.
#[async_trait]
pub trait ResourceService: Send + Sync {
    /// Fetches a single record from `<base>/get`
    ///
    /// A `loadfk` parameter is sent as its JSON text.
    async fn get(&self, params: Option<Params>, role: Option<&str>) -> Result<Envelope, AppError>;

    /// Fetches one page of records from `<base>/list/<page>[/<size>]`
    ///
    /// A `loadfk` parameter is sent as its JSON text.
    async fn list(
        &self,
        params: Option<Params>,
        page: u32,
        size: Option<u32>,
        role: Option<&str>,
    ) -> Result<Envelope, AppError>;

    /// Submits a partial update to `<base>/update`, filtering `data` first
    async fn update(
        &self,
        params: Option<Params>,
        data: FormData,
        role: Option<&str>,
        filter: Option<&FilterSpec>,
    ) -> Result<Envelope, AppError>;

    /// Same as [`ResourceService::update`]
    async fn set(
        &self,
        params: Option<Params>,
        data: FormData,
        role: Option<&str>,
        filter: Option<&FilterSpec>,
    ) -> Result<Envelope, AppError> {
        self.update(params, data, role, filter).await
    }

    /// Creates a record through `<base>/new`, filtering `data` first
    async fn create(
        &self,
        data: FormData,
        role: Option<&str>,
        filter: Option<&FilterSpec>,
    ) -> Result<Envelope, AppError>;

    /// Deletes the records identified by `params` through `<base>/delete`
    async fn delete(&self, params: Option<Params>, role: Option<&str>) -> Result<Envelope, AppError>;
}
