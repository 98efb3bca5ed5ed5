use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::traits::PortfolioApi;
use crate::errors::DashboardError;
use crate::models::history::HistoryPoint;
use crate::models::holding::{Holding, NewHolding};
use crate::models::quote::Quote;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// REST implementation of [`PortfolioApi`] against the dashboard backend.
///
/// Routes:
/// - `GET    /holdings`
/// - `GET    /portfolio/performance`
/// - `POST   /api/add-stock`
/// - `DELETE /api/remove-stock/{symbol}`
/// - `GET    /api/latest-stock/{symbol}`
/// - `POST   /updateHoldings`, `POST /updatePortfolioHistory`
///
/// All payloads are JSON. A non-2xx status maps to `DashboardError::Api`
/// with the status code; connectivity failures map to
/// `DashboardError::Network`.
pub struct RestPortfolioApi {
    client: Client,
    base_url: String,
}

// ── Backend response types ──────────────────────────────────────────

#[derive(Deserialize)]
struct ConfirmationResponse {
    message: Option<String>,
}

impl RestPortfolioApi {
    /// Create a client for a backend at `base_url` (e.g. "http://localhost:3000").
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{endpoint}", self.base_url))
    }

    /// Send a request and decode the JSON body, mapping bad statuses to
    /// `DashboardError::Api` before attempting to parse.
    async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        context: &str,
    ) -> Result<T, DashboardError> {
        let resp = builder.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(DashboardError::Api {
                status: status.as_u16(),
                message: if message.is_empty() {
                    context.to_string()
                } else {
                    message
                },
            });
        }
        resp.json().await.map_err(|e| {
            DashboardError::Deserialization(format!("{context}: {e}"))
        })
    }

    /// Fire a POST that only signals success/failure via its status code.
    async fn post_trigger(&self, endpoint: &str) -> Result<(), DashboardError> {
        let resp = self.request(Method::POST, endpoint).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(DashboardError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl PortfolioApi for RestPortfolioApi {
    async fn fetch_holdings(&self) -> Result<Vec<Holding>, DashboardError> {
        self.send_json(
            self.request(Method::GET, "/holdings"),
            "Failed to parse holdings",
        )
        .await
    }

    async fn fetch_history(&self) -> Result<Vec<HistoryPoint>, DashboardError> {
        self.send_json(
            self.request(Method::GET, "/portfolio/performance"),
            "Failed to parse performance history",
        )
        .await
    }

    async fn add_holding(&self, holding: &NewHolding) -> Result<String, DashboardError> {
        let resp: ConfirmationResponse = self
            .send_json(
                self.request(Method::POST, "/api/add-stock").json(holding),
                "Failed to parse add-stock response",
            )
            .await?;
        Ok(resp
            .message
            .unwrap_or_else(|| "Stock added successfully!".to_string()))
    }

    async fn remove_holding(&self, symbol: &str) -> Result<String, DashboardError> {
        let endpoint = format!("/api/remove-stock/{}", symbol.to_uppercase());
        let resp: ConfirmationResponse = self
            .send_json(
                self.request(Method::DELETE, &endpoint),
                "Failed to parse remove-stock response",
            )
            .await?;
        Ok(resp
            .message
            .unwrap_or_else(|| "Stock removed successfully!".to_string()))
    }

    async fn fetch_latest_quote(&self, symbol: &str) -> Result<Quote, DashboardError> {
        let endpoint = format!("/api/latest-stock/{}", symbol.to_uppercase());
        self.send_json(
            self.request(Method::GET, &endpoint),
            "Failed to parse latest quote",
        )
        .await
    }

    async fn trigger_backend_refresh(&self) -> Result<(), DashboardError> {
        // Holdings first, then history — the same order the refresh button
        // used, so history points include the just-updated holdings.
        self.post_trigger("/updateHoldings").await?;
        self.post_trigger("/updatePortfolioHistory").await?;
        Ok(())
    }
}
