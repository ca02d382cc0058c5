//! Browser-side fetches against the message endpoint.

use gloo::net::http::Request;
use p2p_feed::{Endpoint, FeedError, FeedMessage, Offers, decode_message, decode_offers};

pub async fn fetch_message(endpoint: &Endpoint, msg_id: i64) -> Result<FeedMessage, FeedError> {
    let body = get(&endpoint.message_url(msg_id)).await?;
    decode_message(&body)
}

pub async fn fetch_offers(endpoint: &Endpoint) -> Result<Offers, FeedError> {
    let body = get(&endpoint.offers_url()).await?;
    decode_offers(&body)
}

async fn get(url: &str) -> Result<String, FeedError> {
    let transport = |e: gloo::net::Error| FeedError::Transport {
        url: url.to_string(),
        reason: e.to_string(),
    };
    let response = Request::get(url).send().await.map_err(transport)?;
    if !response.ok() {
        return Err(FeedError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }
    response.text().await.map_err(transport)
}
