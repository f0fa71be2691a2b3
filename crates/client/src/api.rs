//! REST API client for the dashboard supplier endpoints.
//!
//! Every action is a `POST {base_url}/api/dashboard?type=<action>` with
//! the configured static credential in the `authorization` header.
//! Which mutation a body performs is carried entirely by the action
//! name and the presence or absence of `supplierId` in the payload.

use std::time::Duration;

use serde::Deserialize;

use vendora_core::supplier::{Supplier, SupplierDraft};

use crate::config::DashboardConfig;

/// HTTP client for the dashboard supplier actions.
pub struct DashboardApi {
    client: reqwest::Client,
    base_url: String,
    auth_token: String,
}

/// Response body of `supplier_get`.
#[derive(Debug, Deserialize)]
struct ListResponse {
    data: Vec<Supplier>,
}

/// Response body of every mutation action.
#[derive(Debug, Deserialize)]
struct MessageResponse {
    message: String,
}

/// Errors from the dashboard REST layer.
///
/// There are deliberately only two shapes: the request itself failed
/// (network, DNS, timeout, or an unparseable body), or the backend
/// answered with a non-2xx status. Callers surface both as one generic
/// failure notice and never branch on the cause.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request failed or the response body was not the
    /// expected JSON.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend returned a non-2xx status code.
    #[error("dashboard API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body, kept for logging only.
        body: String,
    },
}

impl DashboardApi {
    /// Create a new API client from explicit configuration.
    pub fn new(config: &DashboardConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            client,
            base_url: config.base_url.clone(),
            auth_token: config.auth_token.clone(),
        }
    }

    /// Fetch the full supplier collection (`supplier_get`).
    pub async fn list(&self) -> Result<Vec<Supplier>, ApiError> {
        let response = self.post("supplier_get").send().await?;
        let body: ListResponse = Self::parse_response(response).await?;
        Ok(body.data)
    }

    /// Create a new supplier (`supplier_create`).
    ///
    /// The draft must carry no `supplier_id`; the serialized body then
    /// omits the `supplierId` key and the backend assigns one.
    pub async fn create(&self, draft: &SupplierDraft) -> Result<String, ApiError> {
        let response = self.post("supplier_create").json(draft).send().await?;
        let body: MessageResponse = Self::parse_response(response).await?;
        Ok(body.message)
    }

    /// Update an existing supplier (`supplier_update`).
    ///
    /// The draft must carry the `supplier_id` of the record to replace.
    pub async fn update(&self, draft: &SupplierDraft) -> Result<String, ApiError> {
        let response = self.post("supplier_update").json(draft).send().await?;
        let body: MessageResponse = Self::parse_response(response).await?;
        Ok(body.message)
    }

    /// Delete a single supplier by id (`supplier_delete_one`).
    pub async fn delete_one(&self, supplier_id: i64) -> Result<String, ApiError> {
        let body = serde_json::json!({ "supplierId": supplier_id });
        let response = self.post("supplier_delete_one").json(&body).send().await?;
        let body: MessageResponse = Self::parse_response(response).await?;
        Ok(body.message)
    }

    /// Delete the entire supplier collection (`supplier_delete_all`).
    pub async fn delete_all(&self) -> Result<String, ApiError> {
        let response = self.post("supplier_delete_all").send().await?;
        let body: MessageResponse = Self::parse_response(response).await?;
        Ok(body.message)
    }

    // ---- private helpers ----

    /// Start a request for one dashboard action with auth attached.
    fn post(&self, action: &str) -> reqwest::RequestBuilder {
        self.client
            .post(format!("{}/api/dashboard", self.base_url))
            .query(&[("type", action)])
            .header("authorization", &self.auth_token)
    }

    /// Ensure a success status, then decode the JSON body.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<T>().await?)
    }
}
