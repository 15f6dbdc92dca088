use crate::units::{UnitConversion, minutes_from_wire, seconds_from_wire};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;
use std::net::IpAddr;
use std::ops::BitOr;
use std::time::Duration;
use url::Url;

/// RPC request envelope
#[derive(Serialize, Debug)]
pub(crate) struct RpcRequest<'a, A> {
    pub method: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<A>,
}

/// RPC response envelope. `result` is `"success"` or an error description.
#[derive(Deserialize, Debug)]
pub(crate) struct RpcResponse<D> {
    pub result: String,
    pub arguments: Option<D>,
}

/// A torrent as reported by `torrent-get`.
///
/// Only the requested fields are filled in, the rest keep their default value.
/// Rates and sizes are in bytes, rate limits are converted from the daemon's
/// speed unit with the client's [`UnitConversion`].
#[derive(Deserialize, Default, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Torrent {
    pub id: i64,
    #[serde(rename = "hashString")]
    pub hash: String,
    pub name: String,
    pub status: Status,
    pub creator: String,
    pub comment: String,
    pub labels: Vec<String>,

    /// Time until the torrent is done, `None` when unknown
    #[serde(deserialize_with = "optional_seconds")]
    pub eta: Option<Duration>,
    /// Time until the idle seeding limit is reached, `None` when unknown
    #[serde(rename = "etaIdle", deserialize_with = "optional_seconds")]
    pub idle_eta: Option<Duration>,

    #[serde(rename = "error")]
    pub error_type: ErrorType,
    #[serde(rename = "errorString")]
    pub error: String,

    /// Path to the .torrent file on the daemon host
    #[serde(rename = "torrentFile")]
    pub file: String,
    pub magnet_link: String,
    #[serde(rename = "downloadDir")]
    pub download_directory: String,

    #[serde(rename = "dateCreated", deserialize_with = "unix_time")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "addedDate", deserialize_with = "unix_time")]
    pub added_at: Option<DateTime<Utc>>,
    #[serde(rename = "startDate", deserialize_with = "unix_time")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(rename = "activityDate", deserialize_with = "unix_time")]
    pub last_active_at: Option<DateTime<Utc>>,
    #[serde(rename = "doneDate", deserialize_with = "unix_time")]
    pub done_at: Option<DateTime<Utc>>,
    /// When one of the trackers will allow a manual announce
    #[serde(rename = "manualAnnounceTime", deserialize_with = "unix_time")]
    pub can_manually_announce_at: Option<DateTime<Utc>>,

    #[serde(rename = "rateDownload")]
    pub download_rate: i64,
    #[serde(rename = "rateUpload")]
    pub upload_rate: i64,
    #[serde(rename = "downloadLimit")]
    pub download_rate_limit: i64,
    #[serde(rename = "downloadLimited")]
    pub download_rate_limit_enabled: bool,
    #[serde(rename = "uploadLimit")]
    pub upload_rate_limit: i64,
    #[serde(rename = "uploadLimited")]
    pub upload_rate_limit_enabled: bool,
    #[serde(rename = "honorsSessionLimits")]
    pub honor_session_limits: bool,

    #[serde(rename = "downloadedEver")]
    pub downloaded_total: i64,
    #[serde(rename = "uploadedEver")]
    pub uploaded_total: i64,
    #[serde(rename = "corruptEver")]
    pub corrupted_total: i64,

    #[serde(rename = "bandwidthPriority")]
    pub priority: Priority,
    #[serde(rename = "queuePosition")]
    pub position_in_queue: i64,

    /// Stop seeding after this much inactivity
    #[serde(rename = "seedIdleLimit", deserialize_with = "minutes")]
    pub idle_seeding_limit: Duration,
    #[serde(rename = "seedIdleMode")]
    pub idle_seeding_limit_mode: Limit,
    #[serde(rename = "seedRatioLimit")]
    pub upload_ratio_limit: f64,
    #[serde(rename = "seedRatioMode")]
    pub upload_ratio_limit_mode: Limit,
    pub upload_ratio: f64,

    #[serde(rename = "secondsDownloading", deserialize_with = "seconds")]
    pub downloading_for: Duration,
    #[serde(rename = "secondsSeeding", deserialize_with = "seconds")]
    pub seeding_for: Duration,

    pub total_size: i64,
    /// Size of the wanted files
    #[serde(rename = "sizeWhenDone")]
    pub wanted_size: i64,
    /// Size of the wanted files available from peers
    #[serde(rename = "desiredAvailable")]
    pub wanted_available: i64,
    #[serde(rename = "leftUntilDone")]
    pub wanted_left: i64,
    #[serde(rename = "haveUnchecked")]
    pub unchecked_size: i64,
    #[serde(rename = "haveValid")]
    pub valid_size: i64,

    /// Fraction of wanted data downloaded, `0.0..=1.0`
    #[serde(rename = "percentDone")]
    pub data_done: f64,
    #[serde(rename = "recheckProgress")]
    pub data_checked: f64,
    #[serde(rename = "metadataPercentComplete")]
    pub metadata_done: f64,

    pub is_finished: bool,
    pub is_private: bool,
    pub is_stalled: bool,

    #[serde(rename = "peer-limit")]
    pub peer_limit: i64,
    #[serde(rename = "peersConnected")]
    pub connected_peers: i64,
    pub peers_getting_from_us: i64,
    pub peers_sending_to_us: i64,
    pub peers: Vec<Peer>,
    pub peers_from: PeersOrigin,
    #[serde(rename = "webseedsSendingToUs")]
    pub web_seeds_sending_to_us: i64,
    #[serde(rename = "webseeds")]
    pub web_seeds: Vec<String>,

    /// One flag per file telling whether it is wanted
    #[serde(deserialize_with = "bool_list")]
    pub wanted: Vec<bool>,
    pub files: Vec<File>,
    pub file_stats: Vec<FileStat>,
    pub priorities: Vec<Priority>,

    pub piece_count: i64,
    pub piece_size: i64,
    pub pieces: Pieces,

    pub trackers: Vec<Tracker>,
    pub tracker_stats: Vec<TrackerStat>,
}

impl Torrent {
    pub(crate) fn convert_units(&mut self, units: &UnitConversion) {
        self.download_rate_limit = units.speed_from_wire(self.download_rate_limit);
        self.upload_rate_limit = units.speed_from_wire(self.upload_rate_limit);
    }
}

/// A peer connected to a torrent
#[derive(Deserialize, Default, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Peer {
    pub address: Option<IpAddr>,
    pub port: u16,
    pub client_name: String,
    /// Download rate from this peer
    #[serde(rename = "rateToClient")]
    pub download_rate: i64,
    /// Upload rate to this peer
    #[serde(rename = "rateToPeer")]
    pub upload_rate: i64,
    /// Fraction of the torrent the peer has
    pub progress: f64,
    #[serde(rename = "isDownloadingFrom")]
    pub is_downloading: bool,
    #[serde(rename = "isUploadingTo")]
    pub is_uploading: bool,
    #[serde(rename = "isUTP")]
    pub is_utp: bool,
    pub is_incoming: bool,
    pub is_encrypted: bool,
    #[serde(rename = "clientIsChoked")]
    pub are_we_choked: bool,
    pub peer_is_choked: bool,
    #[serde(rename = "clientIsInterested")]
    pub are_we_interested: bool,
    pub peer_is_interested: bool,
}

/// Number of peers per discovery source
#[derive(Deserialize, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct PeersOrigin {
    #[serde(rename = "fromTracker")]
    pub tracker: i64,
    #[serde(rename = "fromIncoming")]
    pub incoming: i64,
    #[serde(rename = "fromCache")]
    pub cache: i64,
    #[serde(rename = "fromDht")]
    pub dht: i64,
    #[serde(rename = "fromLpd")]
    pub lpd: i64,
    #[serde(rename = "fromPex")]
    pub pex: i64,
    #[serde(rename = "fromLtep")]
    pub ltep: i64,
}

/// A file within a torrent
#[derive(Deserialize, Default, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct File {
    pub name: String,
    #[serde(rename = "length")]
    pub size: i64,
    #[serde(rename = "bytesCompleted")]
    pub downloaded: i64,
}

#[derive(Deserialize, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct FileStat {
    #[serde(rename = "bytesCompleted")]
    pub downloaded: i64,
    pub priority: Priority,
    pub wanted: bool,
}

/// Bitfield of downloaded pieces, most significant bit of the first byte
/// being piece 0.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Pieces(pub Vec<u8>);

impl Pieces {
    /// Reports whether `piece` has been downloaded.
    ///
    /// Pieces outside the bitfield (including negative indexes) are reported
    /// as not downloaded.
    #[must_use]
    pub fn is_downloaded(&self, piece: i64) -> bool {
        let Ok(piece) = usize::try_from(piece) else {
            return false;
        };
        self.0
            .get(piece / 8)
            .is_some_and(|byte| byte & (0x80 >> (piece % 8)) != 0)
    }
}

impl<'de> Deserialize<'de> for Pieces {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        BASE64_STANDARD
            .decode(encoded.as_bytes())
            .map(Pieces)
            .map_err(de::Error::custom)
    }
}

/// A tracker of a torrent
#[derive(Deserialize, Default, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Tracker {
    pub id: i64,
    pub tier: i64,
    #[serde(rename = "announce", deserialize_with = "optional_url")]
    pub announce_url: Option<Url>,
    #[serde(rename = "scrape", deserialize_with = "optional_url")]
    pub scrape_url: Option<Url>,
}

/// Announce and scrape statistics of a tracker
#[derive(Deserialize, Default, Clone, Debug, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct TrackerStat {
    pub id: i64,
    pub tier: i64,
    pub is_backup: bool,
    #[serde(deserialize_with = "optional_url")]
    pub host: Option<Url>,
    #[serde(rename = "announce", deserialize_with = "optional_url")]
    pub announce_url: Option<Url>,
    #[serde(rename = "scrape", deserialize_with = "optional_url")]
    pub scrape_url: Option<Url>,

    #[serde(rename = "leecherCount")]
    pub leechers: i64,
    #[serde(rename = "seederCount")]
    pub seeders: i64,
    #[serde(rename = "downloadCount")]
    pub downloads: i64,

    pub has_announced: bool,
    pub announce_state: TrackerState,
    #[serde(deserialize_with = "unix_time")]
    pub last_announce_start_time: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "unix_time")]
    pub last_announce_time: Option<DateTime<Utc>>,
    #[serde(rename = "lastAnnounceTimedOut")]
    pub is_last_announce_timed_out: bool,
    #[serde(rename = "lastAnnounceSucceeded")]
    pub is_last_announce_succeeded: bool,
    pub last_announce_result: String,
    pub last_announce_peer_count: i64,
    #[serde(deserialize_with = "unix_time")]
    pub next_announce_time: Option<DateTime<Utc>>,

    pub has_scraped: bool,
    pub scrape_state: TrackerState,
    #[serde(deserialize_with = "unix_time")]
    pub last_scrape_start_time: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "unix_time")]
    pub last_scrape_time: Option<DateTime<Utc>>,
    #[serde(rename = "lastScrapeTimedOut", deserialize_with = "flexible_bool")]
    pub is_last_scrape_timed_out: bool,
    #[serde(rename = "lastScrapeSucceeded")]
    pub is_last_scrape_succeeded: bool,
    pub last_scrape_result: String,
    #[serde(deserialize_with = "unix_time")]
    pub next_scrape_time: Option<DateTime<Utc>>,
}

/// Torrent status
#[derive(Serialize_repr, Deserialize_repr, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Status {
    #[default]
    Stopped = 0,
    VerifyQueued = 1,
    Verifying = 2,
    DownloadQueued = 3,
    Downloading = 4,
    SeedQueued = 5,
    Seeding = 6,
}

/// Kind of error a torrent is in
#[derive(Serialize_repr, Deserialize_repr, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrorType {
    #[default]
    Ok = 0,
    TrackerWarning = 1,
    TrackerError = 2,
    LocalError = 3,
}

/// State of a tracker announce or scrape
#[derive(Serialize_repr, Deserialize_repr, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum TrackerState {
    #[default]
    Inactive = 0,
    Waiting = 1,
    Queued = 2,
    Active = 3,
}

/// Torrent or file priority
#[derive(Serialize_repr, Deserialize_repr, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i8)]
pub enum Priority {
    Low = -1,
    #[default]
    Normal = 0,
    High = 1,
}

/// Which limit a torrent honors
#[derive(Serialize_repr, Deserialize_repr, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Limit {
    /// Follow the session-wide limit
    #[default]
    Global = 0,
    /// Follow the torrent's own limit
    Local = 1,
    /// No limit at all
    Unlimited = 2,
}

/// Peer encryption preference
#[derive(Serialize, Deserialize, Default, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Encryption {
    Required,
    #[default]
    Preferred,
    Tolerated,
}

impl fmt::Display for Encryption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Encryption::Required => "required",
            Encryption::Preferred => "preferred",
            Encryption::Tolerated => "tolerated",
        })
    }
}

/// Set of days of the week, as used by the alternative speed schedule
#[derive(Serialize, Deserialize, Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Weekdays(pub u8);

impl Weekdays {
    pub const SUNDAY: Weekdays = Weekdays(1);
    pub const MONDAY: Weekdays = Weekdays(1 << 1);
    pub const TUESDAY: Weekdays = Weekdays(1 << 2);
    pub const WEDNESDAY: Weekdays = Weekdays(1 << 3);
    pub const THURSDAY: Weekdays = Weekdays(1 << 4);
    pub const FRIDAY: Weekdays = Weekdays(1 << 5);
    pub const SATURDAY: Weekdays = Weekdays(1 << 6);

    pub const WEEKDAYS: Weekdays = Weekdays(0b0011_1110);
    pub const WEEKENDS: Weekdays = Weekdays(0b0100_0001);
    pub const EVERY_DAY: Weekdays = Weekdays(0b0111_1111);

    const NAMES: [&'static str; 7] = [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ];

    #[must_use]
    pub fn contains(self, other: Weekdays) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for Weekdays {
    type Output = Weekdays;

    fn bitor(self, rhs: Self) -> Self::Output {
        Weekdays(self.0 | rhs.0)
    }
}

impl fmt::Display for Weekdays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Weekdays::EVERY_DAY => f.write_str("Every Day"),
            Weekdays::WEEKENDS => f.write_str("Weekends"),
            Weekdays::WEEKDAYS => f.write_str("Weekdays"),
            days => {
                let names: Vec<&str> = Weekdays::NAMES
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| days.0 & (1 << i) != 0)
                    .map(|(_, name)| *name)
                    .collect();
                f.write_str(&names.join(", "))
            }
        }
    }
}

/// Session settings as reported by `session-get`.
///
/// Rate limits and cache size are in bytes, converted with the units the
/// daemon reports in the same response.
#[derive(Deserialize, Default, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Session {
    #[serde(rename = "session-id")]
    pub id: String,

    /// Alternative ("turtle") download limit, bytes/s
    #[serde(rename = "alt-speed-down")]
    pub turtle_download_rate_limit: i64,
    /// Alternative ("turtle") upload limit, bytes/s
    #[serde(rename = "alt-speed-up")]
    pub turtle_upload_rate_limit: i64,
    #[serde(rename = "alt-speed-enabled")]
    pub turtle_enabled: bool,
    #[serde(rename = "alt-speed-time-enabled")]
    pub turtle_schedule_enabled: bool,
    #[serde(rename = "alt-speed-time-day")]
    pub turtle_schedule_on_days: Weekdays,
    /// Minutes after midnight
    #[serde(rename = "alt-speed-time-begin")]
    pub turtle_schedule_starts_at: i64,
    /// Minutes after midnight
    #[serde(rename = "alt-speed-time-end")]
    pub turtle_schedule_stops_at: i64,

    #[serde(rename = "speed-limit-down")]
    pub download_rate_limit: i64,
    #[serde(rename = "speed-limit-down-enabled")]
    pub download_rate_limit_enabled: bool,
    #[serde(rename = "speed-limit-up")]
    pub upload_rate_limit: i64,
    #[serde(rename = "speed-limit-up-enabled")]
    pub upload_rate_limit_enabled: bool,

    #[serde(rename = "blocklist-url")]
    pub blocklist_url: String,
    #[serde(rename = "blocklist-enabled")]
    pub blocklist_enabled: bool,
    #[serde(rename = "blocklist-size")]
    pub blocklist_size: i64,

    /// Disk cache size in bytes
    #[serde(rename = "cache-size-mb")]
    pub cache_size: i64,

    #[serde(rename = "config-dir")]
    pub config_directory: String,
    #[serde(rename = "download-dir")]
    pub download_directory: String,
    #[serde(rename = "incomplete-dir")]
    pub incomplete_directory: String,
    #[serde(rename = "incomplete-dir-enabled")]
    pub incomplete_directory_enabled: bool,
    /// Append ".part" to incomplete files
    #[serde(rename = "rename-partial-files")]
    pub rename_incomplete_files: bool,

    #[serde(rename = "download-queue-size")]
    pub download_queue_limit: i64,
    #[serde(rename = "download-queue-enabled")]
    pub download_queue_limit_enabled: bool,
    #[serde(rename = "seed-queue-size")]
    pub upload_queue_limit: i64,
    #[serde(rename = "seed-queue-enabled")]
    pub upload_queue_limit_enabled: bool,
    /// Torrents idle for longer don't count against the queue limits
    #[serde(rename = "queue-stalled-minutes", deserialize_with = "minutes")]
    pub queue_stalled: Duration,
    #[serde(rename = "queue-stalled-enabled")]
    pub queue_stalled_enabled: bool,
    #[serde(rename = "seedRatioLimit")]
    pub upload_ratio: f64,
    #[serde(rename = "seedRatioLimited")]
    pub upload_ratio_enabled: bool,

    #[serde(rename = "dht-enabled")]
    pub dht_enabled: bool,
    #[serde(rename = "lpd-enabled")]
    pub lpd_enabled: bool,
    #[serde(rename = "pex-enabled")]
    pub pex_enabled: bool,
    #[serde(rename = "utp-enabled")]
    pub utp_enabled: bool,

    pub encryption: Encryption,

    #[serde(rename = "idle-seeding-limit", deserialize_with = "minutes")]
    pub idle_seeding_limit: Duration,
    #[serde(rename = "idle-seeding-limit-enabled")]
    pub idle_seeding_limit_enabled: bool,

    #[serde(rename = "peer-limit-global")]
    pub global_peer_limit: i64,
    #[serde(rename = "peer-limit-per-torrent")]
    pub torrent_peer_limit: i64,

    #[serde(rename = "peer-port")]
    pub peer_port: u16,
    #[serde(rename = "peer-port-random-on-start")]
    pub randomize_peer_port: bool,
    #[serde(rename = "port-forwarding-enabled")]
    pub port_forwarding_enabled: bool,

    #[serde(rename = "script-torrent-done-filename")]
    pub script_path: String,
    #[serde(rename = "script-torrent-done-enabled")]
    pub script_enabled: bool,

    #[serde(rename = "start-added-torrents")]
    pub autostart_torrents: bool,
    #[serde(rename = "trash-original-torrent-files")]
    pub remove_torrent_files: bool,

    #[serde(rename = "rpc-version")]
    pub rpc_version: i64,
    #[serde(rename = "rpc-version-minimum")]
    pub rpc_version_minimum: i64,
    pub version: String,

    pub units: SessionUnits,
}

impl Session {
    pub(crate) fn convert_units(&mut self, units: &UnitConversion) {
        self.turtle_download_rate_limit = units.speed_from_wire(self.turtle_download_rate_limit);
        self.turtle_upload_rate_limit = units.speed_from_wire(self.turtle_upload_rate_limit);
        self.download_rate_limit = units.speed_from_wire(self.download_rate_limit);
        self.upload_rate_limit = units.speed_from_wire(self.upload_rate_limit);
        self.cache_size = units.cache_size_from_wire(self.cache_size);
    }
}

/// Unit names and byte multipliers used by the daemon
#[derive(Deserialize, Default, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct SessionUnits {
    /// e.g. "KB/s", "MB/s", "GB/s", "TB/s"
    #[serde(rename = "speed-units")]
    pub speed_units: Vec<String>,
    /// Bytes per speed kilo-unit
    #[serde(rename = "speed-bytes")]
    pub speed_bytes: i64,
    #[serde(rename = "size-units")]
    pub size_units: Vec<String>,
    /// Bytes per size kilo-unit
    #[serde(rename = "size-bytes")]
    pub size_bytes: i64,
    #[serde(rename = "memory-units")]
    pub memory_units: Vec<String>,
    /// Bytes per memory kilo-unit
    #[serde(rename = "memory-bytes")]
    pub memory_bytes: i64,
}

/// Session statistics
#[derive(Deserialize, Default, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct SessionStats {
    #[serde(rename = "torrentCount")]
    pub torrents: i64,
    #[serde(rename = "activeTorrentCount")]
    pub active_torrents: i64,
    #[serde(rename = "pausedTorrentCount")]
    pub paused_torrents: i64,
    /// Cumulative download rate, bytes/s
    #[serde(rename = "downloadSpeed")]
    pub download_rate: i64,
    /// Cumulative upload rate, bytes/s
    #[serde(rename = "uploadSpeed")]
    pub upload_rate: i64,
    #[serde(rename = "current-stats")]
    pub current_session: Stats,
    /// Statistics over every session, including the current one
    #[serde(rename = "cumulative-stats")]
    pub all_sessions: Stats,
}

#[derive(Deserialize, Default, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Stats {
    #[serde(rename = "downloadedBytes")]
    pub downloaded: i64,
    #[serde(rename = "uploadedBytes")]
    pub uploaded: i64,
    #[serde(rename = "filesAdded")]
    pub files: i64,
    #[serde(rename = "sessionCount")]
    pub sessions: i64,
    #[serde(rename = "secondsActive", deserialize_with = "seconds")]
    pub active_for: Duration,
}

/// A torrent returned by `torrent-add`
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NewTorrent {
    pub id: i64,
    #[serde(rename = "hashString")]
    pub hash: String,
    pub name: String,
}

/// Result of `torrent-rename-path`
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RenamedPath {
    pub id: i64,
    pub path: String,
    pub name: String,
}

#[derive(Deserialize, Default, Debug)]
#[serde(default)]
pub(crate) struct TorrentList {
    pub torrents: Vec<Torrent>,
    pub removed: Vec<i64>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct TorrentAdded {
    #[serde(rename = "torrent-added")]
    pub added: Option<NewTorrent>,
    #[serde(rename = "torrent-duplicate")]
    pub duplicate: Option<NewTorrent>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct BlocklistUpdated {
    #[serde(rename = "blocklist-size")]
    pub size: i64,
}

#[derive(Deserialize, Debug)]
pub(crate) struct FreeSpace {
    #[serde(rename = "size-bytes")]
    pub size_bytes: i64,
}

#[derive(Deserialize, Debug)]
pub(crate) struct PortTest {
    #[serde(rename = "port-is-open")]
    pub open: bool,
}

/// Epoch seconds; zero and negative values mean "not set"
fn unix_time<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error> {
    let secs = i64::deserialize(deserializer)?;
    if secs <= 0 {
        return Ok(None);
    }
    DateTime::from_timestamp(secs, 0)
        .map(Some)
        .ok_or_else(|| de::Error::custom(format!("timestamp out of range: {secs}")))
}

/// Seconds; negative values are the daemon's "unknown" markers
fn optional_seconds<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Duration>, D::Error> {
    let secs = i64::deserialize(deserializer)?;
    Ok(u64::try_from(secs).ok().map(Duration::from_secs))
}

fn seconds<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    i64::deserialize(deserializer).map(seconds_from_wire)
}

fn minutes<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    i64::deserialize(deserializer).map(minutes_from_wire)
}

fn optional_url<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Url>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    if raw.is_empty() {
        return Ok(None);
    }
    Url::parse(&raw)
        .map(Some)
        .map_err(|e| de::Error::custom(format!("invalid URL {raw:?}: {e}")))
}

/// Booleans the daemon sends either as `true`/`false` or as `1`/`0`
#[derive(Deserialize)]
#[serde(untagged)]
enum FlexibleBool {
    Bool(bool),
    Int(i64),
}

impl From<FlexibleBool> for bool {
    fn from(value: FlexibleBool) -> Self {
        match value {
            FlexibleBool::Bool(b) => b,
            FlexibleBool::Int(i) => i != 0,
        }
    }
}

fn flexible_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    FlexibleBool::deserialize(deserializer).map(Into::into)
}

fn bool_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<bool>, D::Error> {
    let values = Vec::<FlexibleBool>::deserialize(deserializer)?;
    Ok(values.into_iter().map(Into::into).collect())
}
