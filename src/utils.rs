use crate::entities::Status::{Downloading, Seeding};
use crate::entities::Torrent;
use byte_unit::{Byte, UnitType};

impl Torrent {
    #[must_use]
    pub fn calculate_size(&self) -> String {
        let size = Byte::from(u64::try_from(self.total_size).unwrap_or_default());
        format!("{:#.2}", size.get_appropriate_unit(UnitType::Decimal))
    }

    /// Percentage of the wanted data that is downloaded, rounded
    #[must_use]
    pub fn calculate_progress(&self) -> f64 {
        Some((self.data_done * 100.0).round())
            .take_if(|x| !x.is_nan())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn calculate_speed(&self) -> String {
        let speed = match self.status {
            Downloading => self.download_rate,
            Seeding => self.upload_rate,
            _ => return String::new(),
        };

        u64::try_from(speed)
            .ok()
            .take_if(|speed| *speed > 0u64)
            .map(|speed| {
                format!(
                    "({:#.2}/s)",
                    Byte::from(speed).get_appropriate_unit(UnitType::Decimal)
                )
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn calculate_time_left(&self) -> String {
        if !matches!(self.status, Downloading) {
            return String::new();
        }

        let time_left = self
            .eta
            .and_then(|eta| i64::try_from(eta.as_secs()).ok())
            .unwrap_or(-1);

        format!("⏳Time left: {}", convert_time_left(time_left))
    }
}

#[must_use]
pub fn convert_time_left(input: i64) -> String {
    if input < 0 {
        return String::from("Unknown");
    }

    if input < 60 {
        return format!("{input} s");
    }

    if input < 3600 {
        let minutes = input / 60;
        let seconds = input - 60 * minutes;
        return format!("{minutes} m {seconds} s");
    }

    if input < 86400 {
        let hours = input / 3600;
        let minutes = (input - hours * 3600) / 60;
        return format!("{hours} h {minutes} m");
    }

    let days = input / 86400;
    let hours = (input - days * 86400) / 3600;
    let minutes = (input - days * 86400 - hours * 3600) / 60;
    format!("{days} d {hours} h {minutes} m")
}
