//! HTTP client for a running kunturd.

use anyhow::{anyhow, Result};
use kuntur_common::{Case, CaseFilter, CaseUpdate, NewCase};
use reqwest::StatusCode;
use serde::Deserialize;

/// Error body returned by the daemon.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Client for the kunturd REST API.
pub struct KunturClient {
    base_url: String,
    http: reqwest::Client,
}

impl KunturClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub async fn create_case(&self, draft: &NewCase) -> Result<Case> {
        let response = self
            .http
            .post(format!("{}/api/casos", self.base_url))
            .json(draft)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!(error_detail(response).await));
        }
        Ok(response.json().await?)
    }

    pub async fn list_cases(&self, filter: &CaseFilter) -> Result<Vec<Case>> {
        let response = self
            .http
            .get(format!("{}/api/casos", self.base_url))
            .query(filter)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!(error_detail(response).await));
        }
        Ok(response.json().await?)
    }

    /// Lookup by id; a 404 from the daemon is `None`, not an error.
    pub async fn case_by_id(&self, id_caso: &str) -> Result<Option<Case>> {
        let response = self
            .http
            .get(format!("{}/api/casos/{}", self.base_url, id_caso))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(anyhow!(error_detail(response).await));
        }
        Ok(Some(response.json().await?))
    }

    pub async fn update_case(&self, id_caso: &str, update: &CaseUpdate) -> Result<Option<Case>> {
        let response = self
            .http
            .put(format!("{}/api/casos/{}", self.base_url, id_caso))
            .json(update)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(anyhow!(error_detail(response).await));
        }
        Ok(Some(response.json().await?))
    }

    pub async fn health(&self) -> Result<serde_json::Value> {
        let response = self
            .http
            .get(format!("{}/healthcheck", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!("daemon unhealthy: HTTP {}", response.status()));
        }
        Ok(response.json().await?)
    }
}

async fn error_detail(response: reqwest::Response) -> String {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => body.detail,
        Err(_) => format!("HTTP {} sin detalle", status),
    }
}
