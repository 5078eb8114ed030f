use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use volterra_nav::Market;

use crate::types::{
    AlertRule, NewAlert, PaperAccount, Position, Quote, ScannerRow, Sentiment, WatchlistEntry,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(Box<ureq::Transport>),

    #[error("server returned {status} for {path}")]
    Status { status: u16, path: String },

    #[error("malformed response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Blocking HTTP client, one per app. Cheap to clone; the underlying agent
/// shares its connection pool.
#[derive(Clone)]
pub struct ApiClient {
    agent: ureq::Agent,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(REQUEST_TIMEOUT)
            .build();
        ApiClient {
            agent,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn quote(&self, symbol: &str, market: Market) -> Result<Quote, ApiError> {
        self.get_symbol("/quote", symbol, market)
    }

    pub fn sentiment(&self, symbol: &str, market: Market) -> Result<Sentiment, ApiError> {
        self.get_symbol("/sentiment", symbol, market)
    }

    pub fn scanner(&self) -> Result<Vec<ScannerRow>, ApiError> {
        self.get("/scanner", &[])
    }

    pub fn watchlist(&self) -> Result<Vec<WatchlistEntry>, ApiError> {
        self.get("/watchlist", &[])
    }

    pub fn add_watchlist(&self, symbol: &str, market: Market) -> Result<WatchlistEntry, ApiError> {
        let path = "/watchlist";
        let body = serde_json::json!({ "symbol": symbol, "market": market.as_str() });
        let resp = self
            .agent
            .post(&format!("{}{}", self.base_url, path))
            .send_json(body)
            .map_err(|e| Self::map_err(e, path))?;
        Self::decode(resp, path)
    }

    pub fn remove_watchlist(&self, symbol: &str, market: Market) -> Result<(), ApiError> {
        let path = format!("/watchlist/{}", symbol);
        self.agent
            .delete(&format!("{}{}", self.base_url, path))
            .query("market", market.as_str())
            .call()
            .map_err(|e| Self::map_err(e, &path))?;
        Ok(())
    }

    pub fn positions(&self) -> Result<Vec<Position>, ApiError> {
        self.get("/positions", &[])
    }

    pub fn alerts(&self) -> Result<Vec<AlertRule>, ApiError> {
        self.get("/alerts", &[])
    }

    pub fn create_alert(&self, alert: &NewAlert) -> Result<AlertRule, ApiError> {
        let path = "/alerts";
        let resp = self
            .agent
            .post(&format!("{}{}", self.base_url, path))
            .send_json(alert)
            .map_err(|e| Self::map_err(e, path))?;
        Self::decode(resp, path)
    }

    pub fn paper_account(&self) -> Result<PaperAccount, ApiError> {
        self.get("/paper/account", &[])
    }

    fn get_symbol<T: DeserializeOwned>(
        &self,
        path: &str,
        symbol: &str,
        market: Market,
    ) -> Result<T, ApiError> {
        self.get(path, &[("symbol", symbol), ("market", market.as_str())])
    }

    fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "api request");
        let mut req = self.agent.get(&url);
        for (key, value) in query {
            req = req.query(key, value);
        }
        let resp = req.call().map_err(|e| Self::map_err(e, path))?;
        Self::decode(resp, path)
    }

    fn decode<T: DeserializeOwned>(resp: ureq::Response, path: &str) -> Result<T, ApiError> {
        resp.into_json().map_err(|source| ApiError::Decode {
            path: path.to_string(),
            source,
        })
    }

    fn map_err(err: ureq::Error, path: &str) -> ApiError {
        match err {
            ureq::Error::Status(status, _) => ApiError::Status {
                status,
                path: path.to_string(),
            },
            ureq::Error::Transport(t) => ApiError::Transport(Box::new(t)),
        }
    }
}
