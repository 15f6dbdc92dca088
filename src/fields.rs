//! Field names accepted by `torrent-get` and `session-get`.
//!
//! Passing an empty field list to
//! [`get_torrents`](crate::client::TransmissionClient::get_torrents) requests
//! [`TorrentField::ALL`].

use serde::Serialize;
use std::fmt;

/// A field of [`Torrent`](crate::entities::Torrent)
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TorrentField {
    #[serde(rename = "id")]
    Id,
    #[serde(rename = "hashString")]
    Hash,
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "status")]
    Status,
    #[serde(rename = "creator")]
    Creator,
    #[serde(rename = "comment")]
    Comment,
    #[serde(rename = "labels")]
    Labels,
    #[serde(rename = "eta")]
    Eta,
    #[serde(rename = "etaIdle")]
    IdleEta,
    #[serde(rename = "error")]
    ErrorType,
    #[serde(rename = "errorString")]
    Error,
    #[serde(rename = "torrentFile")]
    File,
    #[serde(rename = "magnetLink")]
    MagnetLink,
    #[serde(rename = "downloadDir")]
    DownloadDirectory,
    #[serde(rename = "dateCreated")]
    CreatedAt,
    #[serde(rename = "addedDate")]
    AddedAt,
    #[serde(rename = "startDate")]
    StartedAt,
    #[serde(rename = "activityDate")]
    LastActiveAt,
    #[serde(rename = "doneDate")]
    DoneAt,
    #[serde(rename = "manualAnnounceTime")]
    CanManuallyAnnounceAt,
    #[serde(rename = "rateDownload")]
    DownloadRate,
    #[serde(rename = "rateUpload")]
    UploadRate,
    #[serde(rename = "downloadLimit")]
    DownloadRateLimit,
    #[serde(rename = "downloadLimited")]
    DownloadRateLimitEnabled,
    #[serde(rename = "uploadLimit")]
    UploadRateLimit,
    #[serde(rename = "uploadLimited")]
    UploadRateLimitEnabled,
    #[serde(rename = "honorsSessionLimits")]
    HonorSessionLimits,
    #[serde(rename = "downloadedEver")]
    DownloadedTotal,
    #[serde(rename = "uploadedEver")]
    UploadedTotal,
    #[serde(rename = "corruptEver")]
    CorruptedTotal,
    #[serde(rename = "bandwidthPriority")]
    Priority,
    #[serde(rename = "queuePosition")]
    PositionInQueue,
    #[serde(rename = "seedIdleLimit")]
    IdleSeedingLimit,
    #[serde(rename = "seedIdleMode")]
    IdleSeedingLimitMode,
    #[serde(rename = "seedRatioLimit")]
    UploadRatioLimit,
    #[serde(rename = "seedRatioMode")]
    UploadRatioLimitMode,
    #[serde(rename = "uploadRatio")]
    UploadRatio,
    #[serde(rename = "secondsDownloading")]
    DownloadingFor,
    #[serde(rename = "secondsSeeding")]
    SeedingFor,
    #[serde(rename = "totalSize")]
    TotalSize,
    #[serde(rename = "sizeWhenDone")]
    WantedSize,
    #[serde(rename = "desiredAvailable")]
    WantedAvailable,
    #[serde(rename = "leftUntilDone")]
    WantedLeft,
    #[serde(rename = "haveUnchecked")]
    UncheckedSize,
    #[serde(rename = "haveValid")]
    ValidSize,
    #[serde(rename = "percentDone")]
    DataDone,
    #[serde(rename = "recheckProgress")]
    DataChecked,
    #[serde(rename = "metadataPercentComplete")]
    MetadataDone,
    #[serde(rename = "isFinished")]
    IsFinished,
    #[serde(rename = "isPrivate")]
    IsPrivate,
    #[serde(rename = "isStalled")]
    IsStalled,
    #[serde(rename = "peer-limit")]
    PeerLimit,
    #[serde(rename = "peersConnected")]
    ConnectedPeers,
    #[serde(rename = "peersGettingFromUs")]
    PeersGettingFromUs,
    #[serde(rename = "peersSendingToUs")]
    PeersSendingToUs,
    #[serde(rename = "peers")]
    Peers,
    #[serde(rename = "peersFrom")]
    PeersFrom,
    #[serde(rename = "webseedsSendingToUs")]
    WebSeedsSendingToUs,
    #[serde(rename = "webseeds")]
    WebSeeds,
    #[serde(rename = "wanted")]
    Wanted,
    #[serde(rename = "files")]
    Files,
    #[serde(rename = "fileStats")]
    FileStats,
    #[serde(rename = "priorities")]
    Priorities,
    #[serde(rename = "pieceCount")]
    PieceCount,
    #[serde(rename = "pieceSize")]
    PieceSize,
    #[serde(rename = "pieces")]
    Pieces,
    #[serde(rename = "trackers")]
    Trackers,
    #[serde(rename = "trackerStats")]
    TrackerStats,
}

impl TorrentField {
    /// Every field, in wire order
    pub const ALL: &'static [TorrentField] = &[
        TorrentField::Id,
        TorrentField::Hash,
        TorrentField::Name,
        TorrentField::Status,
        TorrentField::Creator,
        TorrentField::Comment,
        TorrentField::Labels,
        TorrentField::Eta,
        TorrentField::IdleEta,
        TorrentField::ErrorType,
        TorrentField::Error,
        TorrentField::File,
        TorrentField::MagnetLink,
        TorrentField::DownloadDirectory,
        TorrentField::CreatedAt,
        TorrentField::AddedAt,
        TorrentField::StartedAt,
        TorrentField::LastActiveAt,
        TorrentField::DoneAt,
        TorrentField::CanManuallyAnnounceAt,
        TorrentField::DownloadRate,
        TorrentField::UploadRate,
        TorrentField::DownloadRateLimit,
        TorrentField::DownloadRateLimitEnabled,
        TorrentField::UploadRateLimit,
        TorrentField::UploadRateLimitEnabled,
        TorrentField::HonorSessionLimits,
        TorrentField::DownloadedTotal,
        TorrentField::UploadedTotal,
        TorrentField::CorruptedTotal,
        TorrentField::Priority,
        TorrentField::PositionInQueue,
        TorrentField::IdleSeedingLimit,
        TorrentField::IdleSeedingLimitMode,
        TorrentField::UploadRatioLimit,
        TorrentField::UploadRatioLimitMode,
        TorrentField::UploadRatio,
        TorrentField::DownloadingFor,
        TorrentField::SeedingFor,
        TorrentField::TotalSize,
        TorrentField::WantedSize,
        TorrentField::WantedAvailable,
        TorrentField::WantedLeft,
        TorrentField::UncheckedSize,
        TorrentField::ValidSize,
        TorrentField::DataDone,
        TorrentField::DataChecked,
        TorrentField::MetadataDone,
        TorrentField::IsFinished,
        TorrentField::IsPrivate,
        TorrentField::IsStalled,
        TorrentField::PeerLimit,
        TorrentField::ConnectedPeers,
        TorrentField::PeersGettingFromUs,
        TorrentField::PeersSendingToUs,
        TorrentField::Peers,
        TorrentField::PeersFrom,
        TorrentField::WebSeedsSendingToUs,
        TorrentField::WebSeeds,
        TorrentField::Wanted,
        TorrentField::Files,
        TorrentField::FileStats,
        TorrentField::Priorities,
        TorrentField::PieceCount,
        TorrentField::PieceSize,
        TorrentField::Pieces,
        TorrentField::Trackers,
        TorrentField::TrackerStats,
    ];

    /// Wire name of the field
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TorrentField::Id => "id",
            TorrentField::Hash => "hashString",
            TorrentField::Name => "name",
            TorrentField::Status => "status",
            TorrentField::Creator => "creator",
            TorrentField::Comment => "comment",
            TorrentField::Labels => "labels",
            TorrentField::Eta => "eta",
            TorrentField::IdleEta => "etaIdle",
            TorrentField::ErrorType => "error",
            TorrentField::Error => "errorString",
            TorrentField::File => "torrentFile",
            TorrentField::MagnetLink => "magnetLink",
            TorrentField::DownloadDirectory => "downloadDir",
            TorrentField::CreatedAt => "dateCreated",
            TorrentField::AddedAt => "addedDate",
            TorrentField::StartedAt => "startDate",
            TorrentField::LastActiveAt => "activityDate",
            TorrentField::DoneAt => "doneDate",
            TorrentField::CanManuallyAnnounceAt => "manualAnnounceTime",
            TorrentField::DownloadRate => "rateDownload",
            TorrentField::UploadRate => "rateUpload",
            TorrentField::DownloadRateLimit => "downloadLimit",
            TorrentField::DownloadRateLimitEnabled => "downloadLimited",
            TorrentField::UploadRateLimit => "uploadLimit",
            TorrentField::UploadRateLimitEnabled => "uploadLimited",
            TorrentField::HonorSessionLimits => "honorsSessionLimits",
            TorrentField::DownloadedTotal => "downloadedEver",
            TorrentField::UploadedTotal => "uploadedEver",
            TorrentField::CorruptedTotal => "corruptEver",
            TorrentField::Priority => "bandwidthPriority",
            TorrentField::PositionInQueue => "queuePosition",
            TorrentField::IdleSeedingLimit => "seedIdleLimit",
            TorrentField::IdleSeedingLimitMode => "seedIdleMode",
            TorrentField::UploadRatioLimit => "seedRatioLimit",
            TorrentField::UploadRatioLimitMode => "seedRatioMode",
            TorrentField::UploadRatio => "uploadRatio",
            TorrentField::DownloadingFor => "secondsDownloading",
            TorrentField::SeedingFor => "secondsSeeding",
            TorrentField::TotalSize => "totalSize",
            TorrentField::WantedSize => "sizeWhenDone",
            TorrentField::WantedAvailable => "desiredAvailable",
            TorrentField::WantedLeft => "leftUntilDone",
            TorrentField::UncheckedSize => "haveUnchecked",
            TorrentField::ValidSize => "haveValid",
            TorrentField::DataDone => "percentDone",
            TorrentField::DataChecked => "recheckProgress",
            TorrentField::MetadataDone => "metadataPercentComplete",
            TorrentField::IsFinished => "isFinished",
            TorrentField::IsPrivate => "isPrivate",
            TorrentField::IsStalled => "isStalled",
            TorrentField::PeerLimit => "peer-limit",
            TorrentField::ConnectedPeers => "peersConnected",
            TorrentField::PeersGettingFromUs => "peersGettingFromUs",
            TorrentField::PeersSendingToUs => "peersSendingToUs",
            TorrentField::Peers => "peers",
            TorrentField::PeersFrom => "peersFrom",
            TorrentField::WebSeedsSendingToUs => "webseedsSendingToUs",
            TorrentField::WebSeeds => "webseeds",
            TorrentField::Wanted => "wanted",
            TorrentField::Files => "files",
            TorrentField::FileStats => "fileStats",
            TorrentField::Priorities => "priorities",
            TorrentField::PieceCount => "pieceCount",
            TorrentField::PieceSize => "pieceSize",
            TorrentField::Pieces => "pieces",
            TorrentField::Trackers => "trackers",
            TorrentField::TrackerStats => "trackerStats",
        }
    }
}

impl fmt::Display for TorrentField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field of [`Session`](crate::entities::Session)
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionField {
    #[serde(rename = "session-id")]
    Id,
    #[serde(rename = "alt-speed-down")]
    TurtleDownloadRateLimit,
    #[serde(rename = "alt-speed-up")]
    TurtleUploadRateLimit,
    #[serde(rename = "alt-speed-enabled")]
    TurtleEnabled,
    #[serde(rename = "alt-speed-time-enabled")]
    TurtleScheduleEnabled,
    #[serde(rename = "alt-speed-time-day")]
    TurtleScheduleOnDays,
    #[serde(rename = "alt-speed-time-begin")]
    TurtleScheduleStartsAt,
    #[serde(rename = "alt-speed-time-end")]
    TurtleScheduleStopsAt,
    #[serde(rename = "speed-limit-down")]
    DownloadRateLimit,
    #[serde(rename = "speed-limit-down-enabled")]
    DownloadRateLimitEnabled,
    #[serde(rename = "speed-limit-up")]
    UploadRateLimit,
    #[serde(rename = "speed-limit-up-enabled")]
    UploadRateLimitEnabled,
    #[serde(rename = "blocklist-url")]
    BlocklistUrl,
    #[serde(rename = "blocklist-enabled")]
    BlocklistEnabled,
    #[serde(rename = "blocklist-size")]
    BlocklistSize,
    #[serde(rename = "cache-size-mb")]
    CacheSize,
    #[serde(rename = "config-dir")]
    ConfigDirectory,
    #[serde(rename = "download-dir")]
    DownloadDirectory,
    #[serde(rename = "incomplete-dir")]
    IncompleteDirectory,
    #[serde(rename = "incomplete-dir-enabled")]
    IncompleteDirectoryEnabled,
    #[serde(rename = "rename-partial-files")]
    RenameIncompleteFiles,
    #[serde(rename = "download-queue-size")]
    DownloadQueueLimit,
    #[serde(rename = "download-queue-enabled")]
    DownloadQueueLimitEnabled,
    #[serde(rename = "seed-queue-size")]
    UploadQueueLimit,
    #[serde(rename = "seed-queue-enabled")]
    UploadQueueLimitEnabled,
    #[serde(rename = "queue-stalled-minutes")]
    QueueStalled,
    #[serde(rename = "queue-stalled-enabled")]
    QueueStalledEnabled,
    #[serde(rename = "seedRatioLimit")]
    UploadRatio,
    #[serde(rename = "seedRatioLimited")]
    UploadRatioEnabled,
    #[serde(rename = "dht-enabled")]
    DhtEnabled,
    #[serde(rename = "lpd-enabled")]
    LpdEnabled,
    #[serde(rename = "pex-enabled")]
    PexEnabled,
    #[serde(rename = "utp-enabled")]
    UtpEnabled,
    #[serde(rename = "encryption")]
    Encryption,
    #[serde(rename = "idle-seeding-limit")]
    IdleSeedingLimit,
    #[serde(rename = "idle-seeding-limit-enabled")]
    IdleSeedingLimitEnabled,
    #[serde(rename = "peer-limit-global")]
    GlobalPeerLimit,
    #[serde(rename = "peer-limit-per-torrent")]
    TorrentPeerLimit,
    #[serde(rename = "peer-port")]
    PeerPort,
    #[serde(rename = "peer-port-random-on-start")]
    RandomizePeerPort,
    #[serde(rename = "port-forwarding-enabled")]
    PortForwardingEnabled,
    #[serde(rename = "script-torrent-done-filename")]
    ScriptPath,
    #[serde(rename = "script-torrent-done-enabled")]
    ScriptEnabled,
    #[serde(rename = "start-added-torrents")]
    AutostartTorrents,
    #[serde(rename = "trash-original-torrent-files")]
    RemoveTorrentFiles,
    #[serde(rename = "rpc-version")]
    RpcVersion,
    #[serde(rename = "rpc-version-minimum")]
    RpcVersionMinimum,
    #[serde(rename = "version")]
    Version,
    #[serde(rename = "units")]
    Units,
}

impl SessionField {
    /// Every field, in wire order
    pub const ALL: &'static [SessionField] = &[
        SessionField::Id,
        SessionField::TurtleDownloadRateLimit,
        SessionField::TurtleUploadRateLimit,
        SessionField::TurtleEnabled,
        SessionField::TurtleScheduleEnabled,
        SessionField::TurtleScheduleOnDays,
        SessionField::TurtleScheduleStartsAt,
        SessionField::TurtleScheduleStopsAt,
        SessionField::DownloadRateLimit,
        SessionField::DownloadRateLimitEnabled,
        SessionField::UploadRateLimit,
        SessionField::UploadRateLimitEnabled,
        SessionField::BlocklistUrl,
        SessionField::BlocklistEnabled,
        SessionField::BlocklistSize,
        SessionField::CacheSize,
        SessionField::ConfigDirectory,
        SessionField::DownloadDirectory,
        SessionField::IncompleteDirectory,
        SessionField::IncompleteDirectoryEnabled,
        SessionField::RenameIncompleteFiles,
        SessionField::DownloadQueueLimit,
        SessionField::DownloadQueueLimitEnabled,
        SessionField::UploadQueueLimit,
        SessionField::UploadQueueLimitEnabled,
        SessionField::QueueStalled,
        SessionField::QueueStalledEnabled,
        SessionField::UploadRatio,
        SessionField::UploadRatioEnabled,
        SessionField::DhtEnabled,
        SessionField::LpdEnabled,
        SessionField::PexEnabled,
        SessionField::UtpEnabled,
        SessionField::Encryption,
        SessionField::IdleSeedingLimit,
        SessionField::IdleSeedingLimitEnabled,
        SessionField::GlobalPeerLimit,
        SessionField::TorrentPeerLimit,
        SessionField::PeerPort,
        SessionField::RandomizePeerPort,
        SessionField::PortForwardingEnabled,
        SessionField::ScriptPath,
        SessionField::ScriptEnabled,
        SessionField::AutostartTorrents,
        SessionField::RemoveTorrentFiles,
        SessionField::RpcVersion,
        SessionField::RpcVersionMinimum,
        SessionField::Version,
        SessionField::Units,
    ];

    /// Wire name of the field
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SessionField::Id => "session-id",
            SessionField::TurtleDownloadRateLimit => "alt-speed-down",
            SessionField::TurtleUploadRateLimit => "alt-speed-up",
            SessionField::TurtleEnabled => "alt-speed-enabled",
            SessionField::TurtleScheduleEnabled => "alt-speed-time-enabled",
            SessionField::TurtleScheduleOnDays => "alt-speed-time-day",
            SessionField::TurtleScheduleStartsAt => "alt-speed-time-begin",
            SessionField::TurtleScheduleStopsAt => "alt-speed-time-end",
            SessionField::DownloadRateLimit => "speed-limit-down",
            SessionField::DownloadRateLimitEnabled => "speed-limit-down-enabled",
            SessionField::UploadRateLimit => "speed-limit-up",
            SessionField::UploadRateLimitEnabled => "speed-limit-up-enabled",
            SessionField::BlocklistUrl => "blocklist-url",
            SessionField::BlocklistEnabled => "blocklist-enabled",
            SessionField::BlocklistSize => "blocklist-size",
            SessionField::CacheSize => "cache-size-mb",
            SessionField::ConfigDirectory => "config-dir",
            SessionField::DownloadDirectory => "download-dir",
            SessionField::IncompleteDirectory => "incomplete-dir",
            SessionField::IncompleteDirectoryEnabled => "incomplete-dir-enabled",
            SessionField::RenameIncompleteFiles => "rename-partial-files",
            SessionField::DownloadQueueLimit => "download-queue-size",
            SessionField::DownloadQueueLimitEnabled => "download-queue-enabled",
            SessionField::UploadQueueLimit => "seed-queue-size",
            SessionField::UploadQueueLimitEnabled => "seed-queue-enabled",
            SessionField::QueueStalled => "queue-stalled-minutes",
            SessionField::QueueStalledEnabled => "queue-stalled-enabled",
            SessionField::UploadRatio => "seedRatioLimit",
            SessionField::UploadRatioEnabled => "seedRatioLimited",
            SessionField::DhtEnabled => "dht-enabled",
            SessionField::LpdEnabled => "lpd-enabled",
            SessionField::PexEnabled => "pex-enabled",
            SessionField::UtpEnabled => "utp-enabled",
            SessionField::Encryption => "encryption",
            SessionField::IdleSeedingLimit => "idle-seeding-limit",
            SessionField::IdleSeedingLimitEnabled => "idle-seeding-limit-enabled",
            SessionField::GlobalPeerLimit => "peer-limit-global",
            SessionField::TorrentPeerLimit => "peer-limit-per-torrent",
            SessionField::PeerPort => "peer-port",
            SessionField::RandomizePeerPort => "peer-port-random-on-start",
            SessionField::PortForwardingEnabled => "port-forwarding-enabled",
            SessionField::ScriptPath => "script-torrent-done-filename",
            SessionField::ScriptEnabled => "script-torrent-done-enabled",
            SessionField::AutostartTorrents => "start-added-torrents",
            SessionField::RemoveTorrentFiles => "trash-original-torrent-files",
            SessionField::RpcVersion => "rpc-version",
            SessionField::RpcVersionMinimum => "rpc-version-minimum",
            SessionField::Version => "version",
            SessionField::Units => "units",
        }
    }
}

impl fmt::Display for SessionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
