use crate::entities::SessionUnits;
use std::time::Duration;

/// Seconds per minute; the daemon reports idle and stalled timers in minutes.
const SECONDS_PER_MINUTE: u64 = 60;

/// Byte multipliers for the daemon's "kilo" units.
///
/// The daemon reports and accepts rates and some sizes in kilo-units whose
/// byte size it chooses (usually 1000 or 1024). The table is learned from
/// [`get_session`](crate::client::TransmissionClient::get_session).
///
/// Until then every multiplier is `1` and values pass through unchanged. A
/// caller that never fetches the session will therefore send byte values
/// where the daemon expects kilo-units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitConversion {
    /// Bytes per speed kilo-unit (`speed-bytes`)
    pub speed: i64,
    /// Bytes per size kilo-unit (`size-bytes`)
    pub size: i64,
    /// Bytes per memory kilo-unit (`memory-bytes`)
    pub memory: i64,
}

impl Default for UnitConversion {
    fn default() -> Self {
        Self {
            speed: 1,
            size: 1,
            memory: 1,
        }
    }
}

impl UnitConversion {
    /// Returns a table updated with the multipliers reported by the daemon.
    ///
    /// Missing or non-positive multipliers keep their current value.
    #[must_use]
    pub fn merge(self, units: &SessionUnits) -> Self {
        let pick = |reported: i64, current: i64| if reported > 0 { reported } else { current };
        Self {
            speed: pick(units.speed_bytes, self.speed),
            size: pick(units.size_bytes, self.size),
            memory: pick(units.memory_bytes, self.memory),
        }
    }

    /// Bytes per second to wire speed units. Truncates.
    #[must_use]
    pub fn speed_to_wire(&self, bytes: i64) -> i64 {
        bytes / self.speed
    }

    /// Wire speed units to bytes per second. Saturates at the `i64` bounds.
    #[must_use]
    pub fn speed_from_wire(&self, value: i64) -> i64 {
        value.saturating_mul(self.speed)
    }

    /// Cache size in bytes to the wire's megabyte-like unit.
    #[must_use]
    pub fn cache_size_to_wire(&self, bytes: i64) -> i64 {
        bytes / self.size / self.size
    }

    /// Wire cache size to bytes. Saturates at the `i64` bounds.
    #[must_use]
    pub fn cache_size_from_wire(&self, value: i64) -> i64 {
        value.saturating_mul(self.size).saturating_mul(self.size)
    }
}

/// Whole minutes to a [`Duration`]. Negative values clamp to zero, huge ones saturate.
#[must_use]
pub fn minutes_from_wire(minutes: i64) -> Duration {
    Duration::from_secs(
        u64::try_from(minutes)
            .unwrap_or_default()
            .saturating_mul(SECONDS_PER_MINUTE),
    )
}

/// A [`Duration`] to whole minutes, truncating.
#[must_use]
pub fn minutes_to_wire(duration: Duration) -> i64 {
    i64::try_from(duration.as_secs() / SECONDS_PER_MINUTE).unwrap_or(i64::MAX)
}

/// Whole seconds to a [`Duration`]. Negative values clamp to zero.
#[must_use]
pub fn seconds_from_wire(seconds: i64) -> Duration {
    Duration::from_secs(u64::try_from(seconds).unwrap_or_default())
}
