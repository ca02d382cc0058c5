//! Blocking HTTP client for the message endpoint (native targets).

use std::time::Duration;

use tracing::{debug, info};

use crate::endpoint::Endpoint;
use crate::error::FeedError;
use crate::message::{FeedMessage, decode_message};
use crate::offers::{Offers, decode_offers};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// One GET per call; no caching or retries.
pub struct MessageClient {
    http: reqwest::blocking::Client,
    endpoint: Endpoint,
}

impl MessageClient {
    pub fn new(endpoint: Endpoint) -> Result<Self, FeedError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| FeedError::Transport {
                url: endpoint.base_url().to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn fetch_message(&self, msg_id: i64) -> Result<FeedMessage, FeedError> {
        let body = self.get(&self.endpoint.message_url(msg_id))?;
        let msg = decode_message(&body)?;
        info!(msg_id, empty = msg.is_empty(), "fetched message");
        Ok(msg)
    }

    pub fn fetch_offers(&self) -> Result<Offers, FeedError> {
        let body = self.get(&self.endpoint.offers_url())?;
        let offers = decode_offers(&body)?;
        info!(count = offers.len(), "fetched offers");
        Ok(offers)
    }

    fn get(&self, url: &str) -> Result<String, FeedError> {
        debug!(url, "GET");
        let transport = |e: reqwest::Error| FeedError::Transport {
            url: url.to_string(),
            reason: e.to_string(),
        };
        let response = self.http.get(url).send().map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        response.text().map_err(transport)
    }
}
