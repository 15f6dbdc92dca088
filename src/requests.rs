//! Request types for the operations that take more than a couple of arguments.
//!
//! Every field is optional; only `Some` values are sent. Byte quantities are
//! given in bytes and timers as [`Duration`]s, and are converted to the
//! daemon's units when the request is built.

use crate::client::TransmissionError;
use crate::entities::{Encryption, Limit, Priority, Weekdays};
use crate::ids::Identifier;
use crate::units::{UnitConversion, minutes_to_wire};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::time::Duration;

/// A cookie sent by the daemon when it downloads a torrent file over HTTP
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
}

impl Cookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// A new torrent for `torrent-add`. Exactly one of `url` and `metainfo` must be set.
#[derive(Clone, Debug, Default)]
pub struct AddTorrentRequest {
    /// Path or URL of a .torrent file, or a magnet link
    pub url: Option<String>,
    /// Raw contents of a .torrent file
    pub metainfo: Option<Vec<u8>>,
    pub download_directory: Option<String>,
    /// Cookies for fetching `url`
    pub cookies: Vec<Cookie>,
    /// Add without starting
    pub paused: Option<bool>,
    pub priority: Option<Priority>,
    pub high_priority_files: Option<Vec<i64>>,
    pub normal_priority_files: Option<Vec<i64>>,
    pub low_priority_files: Option<Vec<i64>>,
    pub peer_limit: Option<i64>,
    pub wanted_files: Option<Vec<i64>>,
    pub unwanted_files: Option<Vec<i64>>,
}

#[derive(Serialize, Debug, Default)]
pub(crate) struct AddTorrentArguments {
    #[serde(rename = "filename", skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metainfo: Option<String>,
    #[serde(rename = "download-dir", skip_serializing_if = "Option::is_none")]
    download_directory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cookies: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    paused: Option<bool>,
    #[serde(rename = "bandwidthPriority", skip_serializing_if = "Option::is_none")]
    priority: Option<Priority>,
    #[serde(rename = "priority-high", skip_serializing_if = "Option::is_none")]
    high_priority_files: Option<Vec<i64>>,
    #[serde(rename = "priority-normal", skip_serializing_if = "Option::is_none")]
    normal_priority_files: Option<Vec<i64>>,
    #[serde(rename = "priority-low", skip_serializing_if = "Option::is_none")]
    low_priority_files: Option<Vec<i64>>,
    #[serde(rename = "peer-limit", skip_serializing_if = "Option::is_none")]
    peer_limit: Option<i64>,
    #[serde(rename = "files-wanted", skip_serializing_if = "Option::is_none")]
    wanted_files: Option<Vec<i64>>,
    #[serde(rename = "files-unwanted", skip_serializing_if = "Option::is_none")]
    unwanted_files: Option<Vec<i64>>,
}

impl AddTorrentRequest {
    /// Torrent from a URL or magnet link
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Torrent from the contents of a .torrent file
    pub fn from_metainfo(metainfo: impl Into<Vec<u8>>) -> Self {
        Self {
            metainfo: Some(metainfo.into()),
            ..Default::default()
        }
    }

    pub(crate) fn to_arguments(&self) -> Result<AddTorrentArguments, TransmissionError> {
        match (&self.url, &self.metainfo) {
            (Some(_), Some(_)) => {
                return Err(TransmissionError::InvalidInput(
                    "Only one of url and metainfo can be set".into(),
                ));
            }
            (None, None) => {
                return Err(TransmissionError::InvalidInput(
                    "Either url or metainfo must be set".into(),
                ));
            }
            _ => {}
        }

        let cookies = (!self.cookies.is_empty()).then(|| {
            self.cookies
                .iter()
                .map(Cookie::to_string)
                .collect::<Vec<_>>()
                .join("; ")
        });

        Ok(AddTorrentArguments {
            url: self.url.clone(),
            metainfo: self
                .metainfo
                .as_ref()
                .map(|meta| BASE64_STANDARD.encode(meta)),
            download_directory: self.download_directory.clone(),
            cookies,
            paused: self.paused,
            priority: self.priority,
            high_priority_files: self.high_priority_files.clone(),
            normal_priority_files: self.normal_priority_files.clone(),
            low_priority_files: self.low_priority_files.clone(),
            peer_limit: self.peer_limit,
            wanted_files: self.wanted_files.clone(),
            unwanted_files: self.unwanted_files.clone(),
        })
    }
}

/// Replacement announce URL for the tracker with the given id, sent verbatim
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackerReplacement {
    pub id: i64,
    pub announce_url: String,
}

/// Changes for `torrent-set`.
///
/// For the file index lists an empty `Vec` means "every file".
#[derive(Clone, Debug, Default)]
pub struct SetTorrentRequest {
    /// Bytes per second
    pub download_rate_limit: Option<i64>,
    pub download_rate_limit_enabled: Option<bool>,
    /// Bytes per second
    pub upload_rate_limit: Option<i64>,
    pub upload_rate_limit_enabled: Option<bool>,
    pub honor_session_limits: Option<bool>,

    pub priority: Option<Priority>,
    pub high_priority_files: Option<Vec<i64>>,
    pub normal_priority_files: Option<Vec<i64>>,
    pub low_priority_files: Option<Vec<i64>>,
    pub position_in_queue: Option<i64>,

    pub wanted_files: Option<Vec<i64>>,
    pub unwanted_files: Option<Vec<i64>>,

    pub peer_limit: Option<i64>,
    /// New location of the torrent's content
    pub location: Option<String>,

    /// Sent in whole minutes
    pub idle_seeding_limit: Option<Duration>,
    pub idle_seeding_limit_mode: Option<Limit>,
    pub upload_ratio_limit: Option<f64>,
    pub upload_ratio_limit_mode: Option<Limit>,

    /// Announce URLs, sent verbatim
    pub trackers_to_add: Vec<String>,
    pub trackers_to_remove: Vec<i64>,
    pub trackers_to_replace: Vec<TrackerReplacement>,
}

#[derive(Serialize, Debug, Default)]
pub(crate) struct SetTorrentArguments {
    #[serde(skip_serializing_if = "Identifier::is_all")]
    ids: Identifier,
    #[serde(rename = "downloadLimit", skip_serializing_if = "Option::is_none")]
    download_rate_limit: Option<i64>,
    #[serde(rename = "downloadLimited", skip_serializing_if = "Option::is_none")]
    download_rate_limit_enabled: Option<bool>,
    #[serde(rename = "uploadLimit", skip_serializing_if = "Option::is_none")]
    upload_rate_limit: Option<i64>,
    #[serde(rename = "uploadLimited", skip_serializing_if = "Option::is_none")]
    upload_rate_limit_enabled: Option<bool>,
    #[serde(rename = "honorsSessionLimits", skip_serializing_if = "Option::is_none")]
    honor_session_limits: Option<bool>,
    #[serde(rename = "bandwidthPriority", skip_serializing_if = "Option::is_none")]
    priority: Option<Priority>,
    #[serde(rename = "priority-high", skip_serializing_if = "Option::is_none")]
    high_priority_files: Option<Vec<i64>>,
    #[serde(rename = "priority-normal", skip_serializing_if = "Option::is_none")]
    normal_priority_files: Option<Vec<i64>>,
    #[serde(rename = "priority-low", skip_serializing_if = "Option::is_none")]
    low_priority_files: Option<Vec<i64>>,
    #[serde(rename = "queuePosition", skip_serializing_if = "Option::is_none")]
    position_in_queue: Option<i64>,
    #[serde(rename = "files-wanted", skip_serializing_if = "Option::is_none")]
    wanted_files: Option<Vec<i64>>,
    #[serde(rename = "files-unwanted", skip_serializing_if = "Option::is_none")]
    unwanted_files: Option<Vec<i64>>,
    #[serde(rename = "peer-limit", skip_serializing_if = "Option::is_none")]
    peer_limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<String>,
    #[serde(rename = "seedIdleLimit", skip_serializing_if = "Option::is_none")]
    idle_seeding_limit: Option<i64>,
    #[serde(rename = "seedIdleMode", skip_serializing_if = "Option::is_none")]
    idle_seeding_limit_mode: Option<Limit>,
    #[serde(rename = "seedRatioLimit", skip_serializing_if = "Option::is_none")]
    upload_ratio_limit: Option<f64>,
    #[serde(rename = "seedRatioMode", skip_serializing_if = "Option::is_none")]
    upload_ratio_limit_mode: Option<Limit>,
    #[serde(rename = "trackerAdd", skip_serializing_if = "Vec::is_empty")]
    trackers_to_add: Vec<String>,
    #[serde(rename = "trackerRemove", skip_serializing_if = "Vec::is_empty")]
    trackers_to_remove: Vec<i64>,
    /// Flat `[id, url, id, url, ...]` pairs
    #[serde(rename = "trackerReplace", skip_serializing_if = "Vec::is_empty")]
    trackers_to_replace: Vec<Value>,
}

impl SetTorrentRequest {
    pub(crate) fn to_arguments(
        &self,
        ids: Identifier,
        units: &UnitConversion,
    ) -> SetTorrentArguments {
        SetTorrentArguments {
            ids,
            download_rate_limit: self.download_rate_limit.map(|v| units.speed_to_wire(v)),
            download_rate_limit_enabled: self.download_rate_limit_enabled,
            upload_rate_limit: self.upload_rate_limit.map(|v| units.speed_to_wire(v)),
            upload_rate_limit_enabled: self.upload_rate_limit_enabled,
            honor_session_limits: self.honor_session_limits,
            priority: self.priority,
            high_priority_files: self.high_priority_files.clone(),
            normal_priority_files: self.normal_priority_files.clone(),
            low_priority_files: self.low_priority_files.clone(),
            position_in_queue: self.position_in_queue,
            wanted_files: self.wanted_files.clone(),
            unwanted_files: self.unwanted_files.clone(),
            peer_limit: self.peer_limit,
            location: self.location.clone(),
            idle_seeding_limit: self.idle_seeding_limit.map(minutes_to_wire),
            idle_seeding_limit_mode: self.idle_seeding_limit_mode,
            upload_ratio_limit: self.upload_ratio_limit,
            upload_ratio_limit_mode: self.upload_ratio_limit_mode,
            trackers_to_add: self.trackers_to_add.clone(),
            trackers_to_remove: self.trackers_to_remove.clone(),
            trackers_to_replace: self
                .trackers_to_replace
                .iter()
                .flat_map(|t| [Value::from(t.id), Value::from(t.announce_url.as_str())])
                .collect(),
        }
    }
}

/// Changes for `session-set`
#[derive(Clone, Debug, Default)]
pub struct SetSessionRequest {
    /// Bytes per second
    pub turtle_download_rate_limit: Option<i64>,
    /// Bytes per second
    pub turtle_upload_rate_limit: Option<i64>,
    pub turtle_enabled: Option<bool>,
    pub turtle_schedule_enabled: Option<bool>,
    pub turtle_schedule_on_days: Option<Weekdays>,
    /// Minutes after midnight
    pub turtle_schedule_starts_at: Option<i64>,
    /// Minutes after midnight
    pub turtle_schedule_stops_at: Option<i64>,

    /// Bytes per second
    pub download_rate_limit: Option<i64>,
    pub download_rate_limit_enabled: Option<bool>,
    /// Bytes per second
    pub upload_rate_limit: Option<i64>,
    pub upload_rate_limit_enabled: Option<bool>,

    pub blocklist_url: Option<String>,
    pub blocklist_enabled: Option<bool>,

    /// Bytes
    pub cache_size: Option<i64>,

    pub download_directory: Option<String>,
    pub incomplete_directory: Option<String>,
    pub incomplete_directory_enabled: Option<bool>,
    pub rename_incomplete_files: Option<bool>,

    pub download_queue_limit: Option<i64>,
    pub download_queue_limit_enabled: Option<bool>,
    pub upload_queue_limit: Option<i64>,
    pub upload_queue_limit_enabled: Option<bool>,
    /// Sent in whole minutes
    pub queue_stalled: Option<Duration>,
    pub queue_stalled_enabled: Option<bool>,
    pub upload_ratio_limit: Option<f64>,
    pub upload_ratio_limit_enabled: Option<bool>,

    pub dht_enabled: Option<bool>,
    pub lpd_enabled: Option<bool>,
    pub pex_enabled: Option<bool>,
    pub utp_enabled: Option<bool>,

    pub encryption: Option<Encryption>,

    /// Sent in whole minutes
    pub idle_seeding_limit: Option<Duration>,
    pub idle_seeding_limit_enabled: Option<bool>,

    pub global_peer_limit: Option<i64>,
    pub torrent_peer_limit: Option<i64>,

    pub peer_port: Option<u16>,
    pub randomize_peer_port: Option<bool>,
    pub port_forwarding_enabled: Option<bool>,

    pub script_path: Option<String>,
    pub script_enabled: Option<bool>,

    pub autostart_torrents: Option<bool>,
    pub remove_torrent_files: Option<bool>,
}

#[derive(Serialize, Debug, Default)]
pub(crate) struct SetSessionArguments {
    #[serde(rename = "alt-speed-down", skip_serializing_if = "Option::is_none")]
    turtle_download_rate_limit: Option<i64>,
    #[serde(rename = "alt-speed-up", skip_serializing_if = "Option::is_none")]
    turtle_upload_rate_limit: Option<i64>,
    #[serde(rename = "alt-speed-enabled", skip_serializing_if = "Option::is_none")]
    turtle_enabled: Option<bool>,
    #[serde(rename = "alt-speed-time-enabled", skip_serializing_if = "Option::is_none")]
    turtle_schedule_enabled: Option<bool>,
    #[serde(rename = "alt-speed-time-day", skip_serializing_if = "Option::is_none")]
    turtle_schedule_on_days: Option<Weekdays>,
    #[serde(rename = "alt-speed-time-begin", skip_serializing_if = "Option::is_none")]
    turtle_schedule_starts_at: Option<i64>,
    #[serde(rename = "alt-speed-time-end", skip_serializing_if = "Option::is_none")]
    turtle_schedule_stops_at: Option<i64>,
    #[serde(rename = "speed-limit-down", skip_serializing_if = "Option::is_none")]
    download_rate_limit: Option<i64>,
    #[serde(rename = "speed-limit-down-enabled", skip_serializing_if = "Option::is_none")]
    download_rate_limit_enabled: Option<bool>,
    #[serde(rename = "speed-limit-up", skip_serializing_if = "Option::is_none")]
    upload_rate_limit: Option<i64>,
    #[serde(rename = "speed-limit-up-enabled", skip_serializing_if = "Option::is_none")]
    upload_rate_limit_enabled: Option<bool>,
    #[serde(rename = "blocklist-url", skip_serializing_if = "Option::is_none")]
    blocklist_url: Option<String>,
    #[serde(rename = "blocklist-enabled", skip_serializing_if = "Option::is_none")]
    blocklist_enabled: Option<bool>,
    #[serde(rename = "cache-size-mb", skip_serializing_if = "Option::is_none")]
    cache_size: Option<i64>,
    #[serde(rename = "download-dir", skip_serializing_if = "Option::is_none")]
    download_directory: Option<String>,
    #[serde(rename = "incomplete-dir", skip_serializing_if = "Option::is_none")]
    incomplete_directory: Option<String>,
    #[serde(rename = "incomplete-dir-enabled", skip_serializing_if = "Option::is_none")]
    incomplete_directory_enabled: Option<bool>,
    #[serde(rename = "rename-partial-files", skip_serializing_if = "Option::is_none")]
    rename_incomplete_files: Option<bool>,
    #[serde(rename = "download-queue-size", skip_serializing_if = "Option::is_none")]
    download_queue_limit: Option<i64>,
    #[serde(rename = "download-queue-enabled", skip_serializing_if = "Option::is_none")]
    download_queue_limit_enabled: Option<bool>,
    #[serde(rename = "seed-queue-size", skip_serializing_if = "Option::is_none")]
    upload_queue_limit: Option<i64>,
    #[serde(rename = "seed-queue-enabled", skip_serializing_if = "Option::is_none")]
    upload_queue_limit_enabled: Option<bool>,
    #[serde(rename = "queue-stalled-minutes", skip_serializing_if = "Option::is_none")]
    queue_stalled: Option<i64>,
    #[serde(rename = "queue-stalled-enabled", skip_serializing_if = "Option::is_none")]
    queue_stalled_enabled: Option<bool>,
    #[serde(rename = "seedRatioLimit", skip_serializing_if = "Option::is_none")]
    upload_ratio_limit: Option<f64>,
    #[serde(rename = "seedRatioLimited", skip_serializing_if = "Option::is_none")]
    upload_ratio_limit_enabled: Option<bool>,
    #[serde(rename = "dht-enabled", skip_serializing_if = "Option::is_none")]
    dht_enabled: Option<bool>,
    #[serde(rename = "lpd-enabled", skip_serializing_if = "Option::is_none")]
    lpd_enabled: Option<bool>,
    #[serde(rename = "pex-enabled", skip_serializing_if = "Option::is_none")]
    pex_enabled: Option<bool>,
    #[serde(rename = "utp-enabled", skip_serializing_if = "Option::is_none")]
    utp_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    encryption: Option<Encryption>,
    #[serde(rename = "idle-seeding-limit", skip_serializing_if = "Option::is_none")]
    idle_seeding_limit: Option<i64>,
    #[serde(rename = "idle-seeding-limit-enabled", skip_serializing_if = "Option::is_none")]
    idle_seeding_limit_enabled: Option<bool>,
    #[serde(rename = "peer-limit-global", skip_serializing_if = "Option::is_none")]
    global_peer_limit: Option<i64>,
    #[serde(rename = "peer-limit-per-torrent", skip_serializing_if = "Option::is_none")]
    torrent_peer_limit: Option<i64>,
    #[serde(rename = "peer-port", skip_serializing_if = "Option::is_none")]
    peer_port: Option<u16>,
    #[serde(rename = "peer-port-random-on-start", skip_serializing_if = "Option::is_none")]
    randomize_peer_port: Option<bool>,
    #[serde(rename = "port-forwarding-enabled", skip_serializing_if = "Option::is_none")]
    port_forwarding_enabled: Option<bool>,
    #[serde(rename = "script-torrent-done-filename", skip_serializing_if = "Option::is_none")]
    script_path: Option<String>,
    #[serde(rename = "script-torrent-done-enabled", skip_serializing_if = "Option::is_none")]
    script_enabled: Option<bool>,
    #[serde(rename = "start-added-torrents", skip_serializing_if = "Option::is_none")]
    autostart_torrents: Option<bool>,
    #[serde(rename = "trash-original-torrent-files", skip_serializing_if = "Option::is_none")]
    remove_torrent_files: Option<bool>,
}

impl SetSessionRequest {
    pub(crate) fn to_arguments(&self, units: &UnitConversion) -> SetSessionArguments {
        SetSessionArguments {
            turtle_download_rate_limit: self
                .turtle_download_rate_limit
                .map(|v| units.speed_to_wire(v)),
            turtle_upload_rate_limit: self.turtle_upload_rate_limit.map(|v| units.speed_to_wire(v)),
            turtle_enabled: self.turtle_enabled,
            turtle_schedule_enabled: self.turtle_schedule_enabled,
            turtle_schedule_on_days: self.turtle_schedule_on_days,
            turtle_schedule_starts_at: self.turtle_schedule_starts_at,
            turtle_schedule_stops_at: self.turtle_schedule_stops_at,
            download_rate_limit: self.download_rate_limit.map(|v| units.speed_to_wire(v)),
            download_rate_limit_enabled: self.download_rate_limit_enabled,
            upload_rate_limit: self.upload_rate_limit.map(|v| units.speed_to_wire(v)),
            upload_rate_limit_enabled: self.upload_rate_limit_enabled,
            blocklist_url: self.blocklist_url.clone(),
            blocklist_enabled: self.blocklist_enabled,
            cache_size: self.cache_size.map(|v| units.cache_size_to_wire(v)),
            download_directory: self.download_directory.clone(),
            incomplete_directory: self.incomplete_directory.clone(),
            incomplete_directory_enabled: self.incomplete_directory_enabled,
            rename_incomplete_files: self.rename_incomplete_files,
            download_queue_limit: self.download_queue_limit,
            download_queue_limit_enabled: self.download_queue_limit_enabled,
            upload_queue_limit: self.upload_queue_limit,
            upload_queue_limit_enabled: self.upload_queue_limit_enabled,
            queue_stalled: self.queue_stalled.map(minutes_to_wire),
            queue_stalled_enabled: self.queue_stalled_enabled,
            upload_ratio_limit: self.upload_ratio_limit,
            upload_ratio_limit_enabled: self.upload_ratio_limit_enabled,
            dht_enabled: self.dht_enabled,
            lpd_enabled: self.lpd_enabled,
            pex_enabled: self.pex_enabled,
            utp_enabled: self.utp_enabled,
            encryption: self.encryption,
            idle_seeding_limit: self.idle_seeding_limit.map(minutes_to_wire),
            idle_seeding_limit_enabled: self.idle_seeding_limit_enabled,
            global_peer_limit: self.global_peer_limit,
            torrent_peer_limit: self.torrent_peer_limit,
            peer_port: self.peer_port,
            randomize_peer_port: self.randomize_peer_port,
            port_forwarding_enabled: self.port_forwarding_enabled,
            script_path: self.script_path.clone(),
            script_enabled: self.script_enabled,
            autostart_torrents: self.autostart_torrents,
            remove_torrent_files: self.remove_torrent_files,
        }
    }
}
