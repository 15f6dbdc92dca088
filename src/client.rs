use crate::client::TransmissionError::*;
use crate::entities::{
    BlocklistUpdated, FreeSpace, NewTorrent, PortTest, RenamedPath, RpcRequest, RpcResponse,
    Session, SessionStats, Torrent, TorrentAdded, TorrentList,
};
use crate::fields::{SessionField, TorrentField};
use crate::ids::{Identifier, TorrentId};
use crate::requests::{AddTorrentRequest, SetSessionRequest, SetTorrentRequest};
use crate::units::UnitConversion;
use anyhow::{Context, Result};
use log::debug;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};
use url::Url;

const DEFAULT_RPC_PATH: &str = "/transmission/rpc";
const SESSION_ID_HEADER: &str = "X-Transmission-Session-Id";
const SUCCESS: &str = "success";
/// Upper bound on how much of a 409 response body is read before it is dropped
const MAX_DISCARDED_BODY: usize = 4096;

/// Custom error types for the [`TransmissionClient`]
#[derive(Error, Debug)]
pub enum TransmissionError {
    #[error("Invalid input parameter: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("HTTP request failed with status: {status} ({reason})")]
    Http { status: u16, reason: String },

    #[error("Network request error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Session id not accepted by the daemon")]
    TokenRejected,

    #[error("RPC call failed: {0}")]
    Rpc(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("URL parsing error: {0}")]
    UrlParse(String),
}

/// Transmission RPC client.
///
/// All methods take `&self`; one client can be shared between tasks. Dropping
/// a pending call cancels it, including a pending session id retry.
pub struct TransmissionClient {
    url: Url,
    username: Option<String>,
    password: Option<String>,
    user_agent: Option<String>,
    client: Client,
    session_id: Mutex<String>,
    units: RwLock<UnitConversion>,
}

#[derive(Serialize)]
struct IdsArguments {
    #[serde(skip_serializing_if = "Identifier::is_all")]
    ids: Identifier,
}

#[derive(Serialize)]
struct TorrentGetArguments<'a> {
    #[serde(skip_serializing_if = "Identifier::is_all")]
    ids: Identifier,
    fields: &'a [TorrentField],
}

#[derive(Serialize)]
struct TorrentRemoveArguments {
    #[serde(skip_serializing_if = "Identifier::is_all")]
    ids: Identifier,
    #[serde(rename = "delete-local-data")]
    delete_local_data: bool,
}

#[derive(Serialize)]
struct TorrentSetLocationArguments<'a> {
    #[serde(skip_serializing_if = "Identifier::is_all")]
    ids: Identifier,
    location: &'a str,
    #[serde(rename = "move")]
    move_data: bool,
}

#[derive(Serialize)]
struct TorrentRenamePathArguments<'a> {
    ids: TorrentId,
    path: &'a str,
    name: &'a str,
}

#[derive(Serialize)]
struct SessionGetArguments<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<&'a [SessionField]>,
}

#[derive(Serialize)]
struct FreeSpaceArguments<'a> {
    path: &'a str,
}

impl TransmissionClient {
    /// Creates a client for the daemon at `url` with default settings
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed or isn't http(s)
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Self::builder().url(url).build()
    }

    /// Creates a configured HTTP client
    fn create_client(timeout: u64) -> Client {
        Client::builder()
            .timeout(Duration::from_millis(timeout))
            .build()
            .unwrap_or_default()
    }

    /// Creates a new `TransmissionClient` with a builder pattern
    #[must_use]
    pub fn builder() -> TransmissionClientBuilder {
        TransmissionClientBuilder::default()
    }

    /// RPC endpoint the client talks to
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Unit multipliers currently in use.
    ///
    /// Neutral until [`Self::get_session()`] has been called at least once.
    pub async fn unit_conversion(&self) -> UnitConversion {
        *self.units.read().await
    }

    /// Gets torrents. An empty `fields` slice requests every field.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Network request fails
    /// - Daemon rejects the request
    /// - Response cannot be parsed
    pub async fn get_torrents(
        &self,
        ids: Identifier,
        fields: &[TorrentField],
    ) -> Result<Vec<Torrent>> {
        let fields = if fields.is_empty() {
            TorrentField::ALL
        } else {
            fields
        };

        let response = self
            .call_rpc::<_, TorrentList>("torrent-get", Some(TorrentGetArguments { ids, fields }))
            .await
            .context("Failed to get torrents")?;

        match response {
            Some(list) => {
                let units = self.unit_conversion().await;
                let mut torrents = list.torrents;
                for torrent in &mut torrents {
                    torrent.convert_units(&units);
                }
                Ok(torrents)
            }
            None => Err(InvalidResponse("No data received".into()).into()),
        }
    }

    /// Gets the ids of torrents removed in the last hour
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Network request fails
    /// - Daemon rejects the request
    /// - Response cannot be parsed
    pub async fn get_recently_removed_torrent_ids(&self) -> Result<Vec<i64>> {
        let arguments = TorrentGetArguments {
            ids: Identifier::RecentlyActive,
            fields: &[TorrentField::Id],
        };

        let response = self
            .call_rpc::<_, TorrentList>("torrent-get", Some(arguments))
            .await
            .context("Failed to get recently removed torrents")?;

        match response {
            Some(list) => Ok(list.removed),
            None => Err(InvalidResponse("No data received".into()).into()),
        }
    }

    /// Adds a torrent from a URL, magnet link or .torrent contents.
    ///
    /// A torrent the daemon already has is not an error, its existing entry is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Both or neither of `url` and `metainfo` are set (no request is sent)
    /// - Network request fails
    /// - Daemon rejects the request
    /// - Response cannot be parsed
    pub async fn add_torrent(&self, request: &AddTorrentRequest) -> Result<NewTorrent> {
        let arguments = request.to_arguments()?;

        let response = self
            .call_rpc::<_, TorrentAdded>("torrent-add", Some(arguments))
            .await
            .context("Failed to add torrent")?;

        match response {
            Some(TorrentAdded {
                added: Some(torrent),
                ..
            }) => {
                debug!("Added torrent {} ({})", torrent.name, torrent.id);
                Ok(torrent)
            }
            Some(TorrentAdded {
                duplicate: Some(torrent),
                ..
            }) => {
                debug!("Torrent {} ({}) already exists", torrent.name, torrent.id);
                Ok(torrent)
            }
            _ => Err(InvalidResponse("No torrent in response".into()).into()),
        }
    }

    /// Changes torrent properties
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Network request fails
    /// - Daemon rejects the request
    pub async fn set_torrents(&self, ids: Identifier, request: &SetTorrentRequest) -> Result<()> {
        let units = self.unit_conversion().await;

        self.call_rpc::<_, IgnoredAny>("torrent-set", Some(request.to_arguments(ids, &units)))
            .await
            .context("Failed to set torrent properties")?;

        Ok(())
    }

    /// Starts torrents, respecting the download queue
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails or the daemon rejects it
    pub async fn start_torrents(&self, ids: Identifier) -> Result<()> {
        self.torrent_action("torrent-start", ids)
            .await
            .context("Failed to start torrents")
    }

    /// Starts torrents, bypassing the download queue
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails or the daemon rejects it
    pub async fn start_torrents_now(&self, ids: Identifier) -> Result<()> {
        self.torrent_action("torrent-start-now", ids)
            .await
            .context("Failed to start torrents now")
    }

    /// Stops torrents
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails or the daemon rejects it
    pub async fn stop_torrents(&self, ids: Identifier) -> Result<()> {
        self.torrent_action("torrent-stop", ids)
            .await
            .context("Failed to stop torrents")
    }

    /// Verifies local data of torrents
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails or the daemon rejects it
    pub async fn verify_torrents(&self, ids: Identifier) -> Result<()> {
        self.torrent_action("torrent-verify", ids)
            .await
            .context("Failed to verify torrents")
    }

    /// Asks trackers for more peers
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails or the daemon rejects it
    pub async fn reannounce_torrents(&self, ids: Identifier) -> Result<()> {
        self.torrent_action("torrent-reannounce", ids)
            .await
            .context("Failed to reannounce torrents")
    }

    /// Removes torrents, optionally deleting their downloaded data
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails or the daemon rejects it
    pub async fn remove_torrents(&self, ids: Identifier, delete_local_data: bool) -> Result<()> {
        let arguments = TorrentRemoveArguments {
            ids,
            delete_local_data,
        };

        self.call_rpc::<_, IgnoredAny>("torrent-remove", Some(arguments))
            .await
            .context("Failed to remove torrents")?;

        Ok(())
    }

    /// Points torrents at a new location, moving the data there if `move_data` is set
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Location is empty
    /// - Network request fails
    /// - Daemon rejects the request
    pub async fn set_torrents_location(
        &self,
        ids: Identifier,
        location: &str,
        move_data: bool,
    ) -> Result<()> {
        if location.is_empty() {
            return Err(InvalidInput("Location cannot be empty".into()).into());
        }

        let arguments = TorrentSetLocationArguments {
            ids,
            location,
            move_data,
        };

        self.call_rpc::<_, IgnoredAny>("torrent-set-location", Some(arguments))
            .await
            .context("Failed to set torrent location")?;

        Ok(())
    }

    /// Renames a file or directory inside a single torrent
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Path or name is empty
    /// - Network request fails
    /// - Daemon rejects the request
    /// - Response cannot be parsed
    pub async fn rename_torrent_path(
        &self,
        id: TorrentId,
        path: &str,
        name: &str,
    ) -> Result<RenamedPath> {
        if path.is_empty() {
            return Err(InvalidInput("Path cannot be empty".into()).into());
        }

        if name.is_empty() {
            return Err(InvalidInput("Name cannot be empty".into()).into());
        }

        let arguments = TorrentRenamePathArguments { ids: id, path, name };

        let response = self
            .call_rpc::<_, RenamedPath>("torrent-rename-path", Some(arguments))
            .await
            .context("Failed to rename torrent path")?;

        match response {
            Some(renamed) => Ok(renamed),
            None => Err(InvalidResponse("No data received".into()).into()),
        }
    }

    /// Moves torrents to the top of the queue
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails or the daemon rejects it
    pub async fn queue_move_to_top(&self, ids: Identifier) -> Result<()> {
        self.torrent_action("queue-move-top", ids)
            .await
            .context("Failed to move torrents to the top of the queue")
    }

    /// Moves torrents to the bottom of the queue
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails or the daemon rejects it
    pub async fn queue_move_to_bottom(&self, ids: Identifier) -> Result<()> {
        self.torrent_action("queue-move-bottom", ids)
            .await
            .context("Failed to move torrents to the bottom of the queue")
    }

    /// Moves torrents one position up the queue
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails or the daemon rejects it
    pub async fn queue_move_up(&self, ids: Identifier) -> Result<()> {
        self.torrent_action("queue-move-up", ids)
            .await
            .context("Failed to move torrents up the queue")
    }

    /// Moves torrents one position down the queue
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails or the daemon rejects it
    pub async fn queue_move_down(&self, ids: Identifier) -> Result<()> {
        self.torrent_action("queue-move-down", ids)
            .await
            .context("Failed to move torrents down the queue")
    }

    /// Gets session settings. An empty `fields` slice requests every field.
    ///
    /// The unit multipliers in the response replace the ones used for rate and
    /// size conversion by every later call on this client.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Network request fails
    /// - Daemon rejects the request
    /// - Response cannot be parsed
    pub async fn get_session(&self, fields: &[SessionField]) -> Result<Session> {
        let response = self
            .call_rpc::<_, Session>(
                "session-get",
                Some(SessionGetArguments {
                    fields: (!fields.is_empty()).then_some(fields),
                }),
            )
            .await
            .context("Failed to get session")?;

        let Some(mut session) = response else {
            return Err(InvalidResponse("No data received".into()).into());
        };

        let units = {
            let mut current = self.units.write().await;
            *current = current.merge(&session.units);
            *current
        };
        debug!("Using unit conversion {units:?}");

        session.convert_units(&units);
        Ok(session)
    }

    /// Changes session settings
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Network request fails
    /// - Daemon rejects the request
    pub async fn set_session(&self, request: &SetSessionRequest) -> Result<()> {
        let units = self.unit_conversion().await;

        self.call_rpc::<_, IgnoredAny>("session-set", Some(request.to_arguments(&units)))
            .await
            .context("Failed to set session")?;

        Ok(())
    }

    /// Gets session statistics
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Network request fails
    /// - Daemon rejects the request
    /// - Response cannot be parsed
    pub async fn get_session_stats(&self) -> Result<SessionStats> {
        let response = self
            .call_rpc::<(), SessionStats>("session-stats", None)
            .await
            .context("Failed to get session statistics")?;

        match response {
            Some(stats) => Ok(stats),
            None => Err(InvalidResponse("No data received".into()).into()),
        }
    }

    /// Updates the blocklist and returns its new size
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Network request fails
    /// - Daemon rejects the request
    /// - Response cannot be parsed
    pub async fn update_blocklist(&self) -> Result<i64> {
        let response = self
            .call_rpc::<(), BlocklistUpdated>("blocklist-update", None)
            .await
            .context("Failed to update blocklist")?;

        match response {
            Some(blocklist) => Ok(blocklist.size),
            None => Err(InvalidResponse("No data received".into()).into()),
        }
    }

    /// Checks whether the daemon's incoming peer port is reachable from outside
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Network request fails
    /// - Daemon rejects the request
    /// - Response cannot be parsed
    pub async fn is_port_open(&self) -> Result<bool> {
        let response = self
            .call_rpc::<(), PortTest>("port-test", None)
            .await
            .context("Failed to test port")?;

        match response {
            Some(port) => Ok(port.open),
            None => Err(InvalidResponse("No data received".into()).into()),
        }
    }

    /// Shuts the daemon down
    ///
    /// # Errors
    ///
    /// Returns an error if the network request fails or the daemon rejects it
    pub async fn close_session(&self) -> Result<()> {
        self.call_rpc::<(), IgnoredAny>("session-close", None)
            .await
            .context("Failed to close session")?;

        Ok(())
    }

    /// Gets free space in bytes available in `path` on the daemon's host
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Path is empty
    /// - Network request fails
    /// - Daemon rejects the request
    /// - Response cannot be parsed
    pub async fn get_free_space(&self, path: &str) -> Result<i64> {
        if path.is_empty() {
            return Err(InvalidInput("Path cannot be empty".into()).into());
        }

        let response = self
            .call_rpc::<_, FreeSpace>("free-space", Some(FreeSpaceArguments { path }))
            .await
            .context("Failed to get free space")?;

        match response {
            Some(space) => Ok(space.size_bytes),
            None => Err(InvalidResponse("No data received".into()).into()),
        }
    }

    async fn torrent_action(&self, method: &str, ids: Identifier) -> Result<()> {
        self.call_rpc::<_, IgnoredAny>(method, Some(IdsArguments { ids }))
            .await?;
        Ok(())
    }

    /// Makes an RPC call and returns the decoded `arguments` of the response.
    ///
    /// The body is serialized once. A 409 response carries a fresh session id;
    /// it is stored and the same body is sent exactly once more.
    async fn call_rpc<A, R>(&self, method: &str, arguments: Option<A>) -> Result<Option<R>>
    where
        A: Serialize,
        R: DeserializeOwned,
    {
        let body = serde_json::to_vec(&RpcRequest { method, arguments })
            .map_err(|e| InvalidInput(format!("Failed to serialize request: {e}")))?;

        debug!("Making RPC call {method} to: {}", self.url);

        let mut response = self.send(body.clone()).await?;
        if response.status() == StatusCode::CONFLICT {
            self.refresh_session_id(response).await;
            response = self.send(body).await?;
            if response.status() == StatusCode::CONFLICT {
                return Err(TokenRejected.into());
            }
        }

        let status = response.status();
        if !status.is_success() {
            return Err(Http {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            }
            .into());
        }

        let bytes = response.bytes().await.map_err(Network)?;
        let response = serde_json::from_slice::<RpcResponse<R>>(&bytes)
            .map_err(|e| InvalidResponse(e.to_string()))?;

        if response.result != SUCCESS {
            return Err(Rpc(response.result).into());
        }

        Ok(response.arguments)
    }

    /// Sends one attempt with the current session id
    async fn send(&self, body: Vec<u8>) -> Result<Response> {
        let session_id = self.session_id.lock().await.clone();

        let mut request = self
            .client
            .post(self.url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(SESSION_ID_HEADER, session_id)
            .body(body);

        if self.username.is_some() || self.password.is_some() {
            request = request.basic_auth(
                self.username.as_deref().unwrap_or_default(),
                self.password.as_deref(),
            );
        }

        if let Some(user_agent) = &self.user_agent {
            request = request.header(USER_AGENT, user_agent);
        }

        let response = request.send().await.map_err(Network)?;
        debug!("RPC request status: {}", response.status());

        Ok(response)
    }

    /// Stores the session id from a 409 response and drops its body
    async fn refresh_session_id(&self, mut response: Response) {
        let session_id = response
            .headers()
            .get(SESSION_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let mut read = 0;
        while read < MAX_DISCARDED_BODY {
            match response.chunk().await {
                Ok(Some(chunk)) => read += chunk.len(),
                _ => break,
            }
        }

        debug!("Session id refreshed");
        *self.session_id.lock().await = session_id;
    }
}

/// Builder for [`TransmissionClient`]
#[derive(Default)]
pub struct TransmissionClientBuilder {
    url: Option<String>,
    username: Option<String>,
    password: Option<String>,
    user_agent: Option<String>,
    timeout: Option<u64>,
    http_client: Option<Client>,
}

impl TransmissionClientBuilder {
    /// Sets the daemon URL. Without a path, `/transmission/rpc` is used.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the username for basic auth
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Sets the password for basic auth
    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Sets the `User-Agent` header
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets the request timeout in milliseconds. Ignored with [`Self::http_client()`].
    #[must_use]
    pub fn timeout(mut self, timeout_millis: u64) -> Self {
        self.timeout = Some(timeout_millis);
        self
    }

    /// Uses the given HTTP client instead of building one
    #[must_use]
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the [`TransmissionClient`]
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - URL is not provided or cannot be parsed
    /// - URL scheme is not http or https
    pub fn build(self) -> Result<TransmissionClient> {
        let url = self
            .url
            .ok_or_else(|| Configuration("URL is required".into()))?;

        let mut url = Url::parse(&url).map_err(|e| UrlParse(format!("{url}: {e}")))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(Configuration(format!(
                "URL must start with http:// or https://, got: {url}"
            ))
            .into());
        }

        if url.path().is_empty() || url.path() == "/" {
            url.set_path(DEFAULT_RPC_PATH);
        }

        let client = self
            .http_client
            .unwrap_or_else(|| TransmissionClient::create_client(self.timeout.unwrap_or(3000)));

        Ok(TransmissionClient {
            url,
            username: self.username,
            password: self.password,
            user_agent: self.user_agent,
            client,
            session_id: Mutex::new(String::new()),
            units: RwLock::new(UnitConversion::default()),
        })
    }
}
