//! REST client for the name-bank service.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (unit tests): every call fails with
//! [`ApiError::Unavailable`] since there is no browser fetch to use.
//!
//! ERROR HANDLING
//! ==============
//! Every operation is a single JSON `POST`. Transport failures and non-2xx
//! statuses are logged with the endpoint and returned to the caller; nothing
//! is retried. Search responses are normalized here so callers only ever see
//! a `Vec<NameRecord>`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::error::ApiError;
use super::types::{
    CreateNameRequest, DeleteNameRequest, NameId, NameRecord, SearchCriteria, UpdateNameRequest, parse_name_list,
};
use crate::config::ApiConfig;

pub const SEARCH_NAMES_PATH: &str = "/search/searchnames";
pub const CREATE_NAME_PATH: &str = "/names/createname";
pub const UPDATE_NAME_PATH: &str = "/names/updatename";
pub const DELETE_NAME_PATH: &str = "/names/deletename";

/// Handle to the remote API. Cheap to clone; provided through context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: Arc<str>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self { base_url: Arc::from(config.base_url.as_str()) }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Search names via `POST /search/searchnames`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server responds with a non-OK status.
    pub async fn search_names(&self, criteria: &SearchCriteria) -> Result<Vec<NameRecord>, ApiError> {
        let body = self.post_json(SEARCH_NAMES_PATH, criteria).await?;
        Ok(parse_name_list(&body))
    }

    /// Create a name via `POST /names/createname`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server responds with a non-OK status.
    pub async fn create_name(&self, request: &CreateNameRequest) -> Result<Value, ApiError> {
        self.post_json(CREATE_NAME_PATH, request).await
    }

    /// Update a name via `POST /names/updatename`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server responds with a non-OK status.
    pub async fn update_name(&self, request: &UpdateNameRequest) -> Result<Value, ApiError> {
        self.post_json(UPDATE_NAME_PATH, request).await
    }

    /// Delete a name via `POST /names/deletename`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server responds with a non-OK status.
    pub async fn delete_name(&self, nameid: &NameId) -> Result<Value, ApiError> {
        let request = DeleteNameRequest { nameid: nameid.clone() };
        self.post_json(DELETE_NAME_PATH, &request).await
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Value, ApiError> {
        let url = self.endpoint(path);
        let result = send_json(&url, body).await;
        if let Err(e) = &result {
            log::error!("API request failed: {url}: {e}");
        }
        result
    }
}

#[cfg(feature = "csr")]
async fn send_json<B: Serialize>(url: &str, body: &B) -> Result<Value, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<Value>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(not(feature = "csr"))]
async fn send_json<B: Serialize>(url: &str, body: &B) -> Result<Value, ApiError> {
    let _ = (url, body);
    Err(ApiError::Unavailable)
}
