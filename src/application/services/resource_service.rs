use crate::application::interfaces::resource::ResourceService;
use crate::constants::API_PREFIX;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{FilterSpec, FormData, Params, filter_values};
use crate::model::responses::Envelope;
use crate::utils::encoding::serialize_loadfk;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Client for one server-side resource collection
///
/// Every call goes to `<server>/api/<path>/<verb>`. Specialized clients wrap
/// this one and add their own verbs.
#[derive(Debug, Clone)]
pub struct ResourceClient {
    path: String,
    url_prefix: String,
    http_client: Arc<HttpClient>,
}

impl ResourceClient {
    /// Creates a client for `path` on `api_server`
    pub fn new(path: impl Into<String>, api_server: &str, http_client: Arc<HttpClient>) -> Self {
        let path = path.into();
        let url_prefix = format!("{api_server}/{API_PREFIX}/{path}");
        Self {
            path,
            url_prefix,
            http_client,
        }
    }

    /// Resource path, e.g. `user` or `log/manage`
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Base URL, `<server>/api/<path>`
    pub fn url_prefix(&self) -> &str {
        &self.url_prefix
    }

    /// URL of a verb under this resource
    pub fn endpoint(&self, verb: &str) -> String {
        format!("{}/{verb}", self.url_prefix)
    }

    /// URL of a list page; a size of zero counts as absent
    pub fn list_url(&self, page: u32, size: Option<u32>) -> String {
        match size.filter(|size| *size > 0) {
            Some(size) => format!("{}/list/{page}/{size}", self.url_prefix),
            None => format!("{}/list/{page}", self.url_prefix),
        }
    }

    pub(crate) fn http(&self) -> &HttpClient {
        &self.http_client
    }
}

fn prepare_params(params: Option<Params>) -> Result<Option<Params>, AppError> {
    match params {
        Some(mut params) => {
            serialize_loadfk(&mut params)?;
            Ok(Some(params))
        }
        None => Ok(None),
    }
}

#[async_trait]
impl ResourceService for ResourceClient {
    async fn get(&self, params: Option<Params>, role: Option<&str>) -> Result<Envelope, AppError> {
        let params = prepare_params(params)?;
        self.http_client
            .get(&self.endpoint("get"), params, role)
            .await
    }

    async fn list(
        &self,
        params: Option<Params>,
        page: u32,
        size: Option<u32>,
        role: Option<&str>,
    ) -> Result<Envelope, AppError> {
        let params = prepare_params(params)?;
        let url = self.list_url(page, size);
        debug!("Listing {} page {}", self.path, page);
        self.http_client.get(&url, params, role).await
    }

    async fn update(
        &self,
        params: Option<Params>,
        data: FormData,
        role: Option<&str>,
        filter: Option<&FilterSpec>,
    ) -> Result<Envelope, AppError> {
        let data = filter_values(filter, data);
        self.http_client
            .post(&self.endpoint("update"), params, Some(data), role)
            .await
    }

    async fn create(
        &self,
        data: FormData,
        role: Option<&str>,
        filter: Option<&FilterSpec>,
    ) -> Result<Envelope, AppError> {
        let data = filter_values(filter, data);
        self.http_client
            .post(&self.endpoint("new"), None, Some(data), role)
            .await
    }

    async fn delete(&self, params: Option<Params>, role: Option<&str>) -> Result<Envelope, AppError> {
        self.http_client
            .post(&self.endpoint("delete"), params, None, role)
            .await
    }
}
