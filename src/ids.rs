use serde::{Serialize, Serializer};

/// Identifies exactly one torrent, either by its numeric id or by its info hash.
///
/// Operations that must target a single torrent (like
/// [`rename_torrent_path`](crate::client::TransmissionClient::rename_torrent_path))
/// accept this type instead of [`Identifier`], so collections can't be passed to them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TorrentId {
    /// Numeric id assigned by the daemon
    Id(i64),
    /// Info hash string
    Hash(String),
}

impl From<i64> for TorrentId {
    fn from(id: i64) -> Self {
        TorrentId::Id(id)
    }
}

impl From<&str> for TorrentId {
    fn from(hash: &str) -> Self {
        TorrentId::Hash(hash.to_owned())
    }
}

impl From<String> for TorrentId {
    fn from(hash: String) -> Self {
        TorrentId::Hash(hash)
    }
}

impl Serialize for TorrentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TorrentId::Id(id) => serializer.serialize_i64(*id),
            TorrentId::Hash(hash) => serializer.serialize_str(hash),
        }
    }
}

/// Identifies one or several torrents in bulk operations.
///
/// Serialized as the `ids` argument of a request. [`Identifier::All`] has no
/// wire representation: requests holding it omit the `ids` key entirely, which
/// the daemon reads as "every torrent".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Identifier {
    /// A single torrent by numeric id
    Id(i64),
    /// A single torrent by info hash
    Hash(String),
    /// Several torrents, in the given order
    List(Vec<TorrentId>),
    /// Torrents that were active in the last hour
    RecentlyActive,
    /// Every torrent
    #[default]
    All,
}

const RECENTLY_ACTIVE: &str = "recently-active";

impl Identifier {
    /// Builds a list identifier from any sequence of single-torrent ids.
    ///
    /// A one element list is still sent as an array.
    pub fn list<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TorrentId>,
    {
        Identifier::List(ids.into_iter().map(Into::into).collect())
    }

    /// `true` for [`Identifier::All`], which must not be serialized
    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Identifier::All)
    }
}

impl From<TorrentId> for Identifier {
    fn from(id: TorrentId) -> Self {
        match id {
            TorrentId::Id(id) => Identifier::Id(id),
            TorrentId::Hash(hash) => Identifier::Hash(hash),
        }
    }
}

impl From<i64> for Identifier {
    fn from(id: i64) -> Self {
        Identifier::Id(id)
    }
}

impl From<&str> for Identifier {
    fn from(hash: &str) -> Self {
        Identifier::Hash(hash.to_owned())
    }
}

impl From<String> for Identifier {
    fn from(hash: String) -> Self {
        Identifier::Hash(hash)
    }
}

impl From<Vec<TorrentId>> for Identifier {
    fn from(ids: Vec<TorrentId>) -> Self {
        Identifier::List(ids)
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Identifier::Id(id) => serializer.serialize_i64(*id),
            Identifier::Hash(hash) => serializer.serialize_str(hash),
            Identifier::List(ids) => ids.serialize(serializer),
            Identifier::RecentlyActive => serializer.serialize_str(RECENTLY_ACTIVE),
            // Only reached when a container forgets `skip_serializing_if`.
            Identifier::All => serializer.serialize_none(),
        }
    }
}
