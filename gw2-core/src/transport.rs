//! HTTP transport seam.
//!
//! The engine only needs "GET this URL with these query parameters and
//! maybe a bearer token"; putting that behind a trait lets tests substitute
//! a recording transport and keeps reqwest at the edge.

use async_trait::async_trait;
use reqwest::ClientBuilder;
use std::time::Duration;

use crate::error::ApiError;

/// A buffered HTTP response: status code plus the raw body bytes.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issues one GET. Transport-level failures (DNS, connection refused,
    /// timeout) surface as [`ApiError::Transport`]; non-success statuses
    /// are returned in the response for the caller to judge.
    async fn get(
        &self,
        url: &str,
        query: &[(String, String)],
        bearer: Option<&str>,
    ) -> Result<HttpResponse, ApiError>;
}

/// Production transport backed by a pooled reqwest client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, ApiError> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(30))
            .pool_idle_timeout(Duration::from_secs(60))
            .pool_max_idle_per_host(10)
            .build()
            .map_err(ApiError::Transport)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(
        &self,
        url: &str,
        query: &[(String, String)],
        bearer: Option<&str>,
    ) -> Result<HttpResponse, ApiError> {
        let mut request = self.client.get(url).query(query);

        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse { status, body })
    }
}
