//!# Transmission RPC Client
//!
//! A Rust client library for the RPC protocol of the Transmission BitTorrent daemon. Manage your torrents programmatically with a strongly-typed interface.
//!
//! ## Features
//!
//! - Automatic `X-Transmission-Session-Id` handshake with a single retry
//! - Optional basic auth and custom user agent
//! - List torrents with all or selected fields, including recently removed ids
//! - Add torrents from URLs, magnet links or .torrent contents
//! - Start, stop, verify, reannounce, move, rename and remove torrents
//! - Queue management
//! - Read and change session settings, session statistics
//! - Blocklist update, port test, free space
//! - Rates and sizes in bytes, converted with the daemon's units
//! - Human-readable sizes, progress, speed and ETA
//!
//! Rate and cache size conversion uses the units reported by
//! [`get_session`](client::TransmissionClient::get_session). Before the first
//! call every multiplier is `1`, so byte values are sent to the daemon as they
//! are. Call it once after creating the client.
//!
//! ## Usage example
//!
//! ```rust,no_run
//! use anyhow::Result;
//! use std::env;
//! use transmission_rpc_client::client::TransmissionClient;
//! use transmission_rpc_client::ids::Identifier;
//! use transmission_rpc_client::requests::AddTorrentRequest;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<()> {
//!     let client = {
//!         let url = env::var("TRANSMISSION_URL")?;
//!         let username = env::var("TRANSMISSION_USERNAME")?;
//!         let password = env::var("TRANSMISSION_PASSWORD")?;
//!         TransmissionClient::builder()
//!             .url(url)
//!             .username(username)
//!             .password(password)
//!             .build()?
//!     };
//!
//!     let session = client.get_session(&[]).await?;
//!     println!("transmission {}", session.version);
//!
//!     let added = client
//!         .add_torrent(&AddTorrentRequest::from_url("magnet:?xt=urn:btih:..."))
//!         .await?;
//!     println!("added: {}", added.name);
//!
//!     let torrents = client.get_torrents(Identifier::All, &[]).await?;
//!     for torrent in torrents {
//!         println!(
//!             "torrent: {}, name: {}, status: {:?}, progress: {}%",
//!             torrent.id,
//!             torrent.name,
//!             torrent.status,
//!             torrent.calculate_progress()
//!         );
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod entities;
pub mod fields;
pub mod ids;
pub mod requests;
pub mod units;
pub mod utils;
