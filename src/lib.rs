//! # p2p-feed
//!
//! Domain layer of the P2P marketplace feed viewer.
//!
//! The viewer shows one message at a time from a Telegram-backed message
//! API: a navigation bar, an offers selector, the selected message and its
//! sender's profile. This crate holds everything that does not touch the
//! DOM, so the web UI (`wasm-ui`) and the `feed-show` CLI share it.
//!
//! ## Example
//!
//! ```
//! use p2p_feed::{Endpoint, decode_message, render_text};
//!
//! let endpoint = Endpoint::default();
//! assert_eq!(
//!     endpoint.message_url(5),
//!     "http://localhost:8001/telegram/@bitcoinp2pmarketplace?msg_id=5"
//! );
//!
//! let msg = decode_message(r#"{"id": 5, "text": "WTB 0.2 BTC"}"#).unwrap();
//! assert!(render_text(&msg).contains("WTB 0.2 BTC"));
//! ```

#[cfg(not(target_arch = "wasm32"))]
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod message;
pub mod offers;
pub mod render;

#[cfg(not(target_arch = "wasm32"))]
pub use client::MessageClient;
pub use config::{FeedConfig, Viewer};
pub use endpoint::{Endpoint, MediaVariant};
pub use error::FeedError;
pub use message::{FeedMessage, Media, MediaKind, Reaction, Sender, decode_message};
pub use offers::{Offers, decode_offers};
pub use render::render_text;
