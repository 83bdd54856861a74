//! Display formatting of stored measurements.

use chrono_tz::Tz;

use crate::{absolute_humidity, DisplayRecord, Measurement, INVALID_DATE};

/// `en-GB` date layout, e.g. `14/11/2023, 22:13:20`.
const TIMESTAMP_FORMAT: &str = "%d/%m/%Y, %H:%M:%S";

/// Turns a [`Measurement`] plus its resolved location into a [`DisplayRecord`].
#[derive(Debug, Clone, Copy)]
pub struct ReadingFormatter {
    timezone: Tz,
}

impl ReadingFormatter {
    #[must_use]
    pub const fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    #[must_use]
    pub fn format(&self, measurement: &Measurement, location: &str) -> DisplayRecord {
        let absolute = absolute_humidity(measurement.temperature, measurement.humidity);
        DisplayRecord {
            location: location.to_owned(),
            temperature: format_one_decimal(measurement.temperature),
            humidity: format_one_decimal(measurement.humidity),
            absolute_humidity: format_one_decimal(absolute),
            last_modified_time: self.format_timestamp(measurement.time),
        }
    }

    /// Epoch milliseconds as local wall-clock time in the configured zone.
    #[must_use]
    pub fn format_timestamp(&self, epoch_millis: i64) -> String {
        match chrono::DateTime::from_timestamp_millis(epoch_millis) {
            Some(utc) => utc.with_timezone(&self.timezone).format(TIMESTAMP_FORMAT).to_string(),
            None => INVALID_DATE.to_owned(),
        }
    }
}

/// Fixed one-decimal rendering of the exact stored value: `18` becomes
/// `"18.0"` and `21.45` (held as `21.4499…`) becomes `"21.4"`.
///
/// `{:.1}` already rounds the exact binary expansion; it only differs on exact
/// halves, which it sends to even. The only binary values sitting exactly
/// between two tenths are odd multiples of a quarter, and those go away
/// from zero.
#[must_use]
pub fn format_one_decimal(value: f64) -> String {
    let quarters = value.abs() * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 == 1.0 {
        let away = (value.abs() * 10.0).ceil() / 10.0;
        return format!("{:.1}", away.copysign(value));
    }
    format!("{value:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn london() -> ReadingFormatter {
        ReadingFormatter::new(chrono_tz::Europe::London)
    }

    #[test]
    fn whole_number_gets_one_decimal() {
        assert_eq!(format_one_decimal(18.0), "18.0");
    }

    #[test]
    fn extra_precision_is_dropped() {
        assert_eq!(format_one_decimal(18.04), "18.0");
        assert_eq!(format_one_decimal(21.3), "21.3");
    }

    #[test]
    fn exact_halves_round_away_from_zero() {
        assert_eq!(format_one_decimal(18.25), "18.3");
        assert_eq!(format_one_decimal(-18.25), "-18.3");
        assert_eq!(format_one_decimal(0.25), "0.3");
        assert_eq!(format_one_decimal(20.75), "20.8");
    }

    #[test]
    fn decimal_looking_halves_follow_the_stored_value() {
        // 21.45, 0.15 and 1.45 are all stored just below the half.
        assert_eq!(format_one_decimal(21.45), "21.4");
        assert_eq!(format_one_decimal(0.15), "0.1");
        assert_eq!(format_one_decimal(1.45), "1.4");
        assert_eq!(format_one_decimal(-1.45), "-1.4");
        assert_eq!(format_one_decimal(0.35), "0.3");
        // 0.45 is stored just above.
        assert_eq!(format_one_decimal(0.45), "0.5");
    }

    #[test]
    fn winter_timestamp_is_gmt() {
        assert_eq!(london().format_timestamp(1_700_000_000_000), "14/11/2023, 22:13:20");
    }

    #[test]
    fn summer_timestamp_is_bst() {
        // 2023-07-01T12:00:00Z
        assert_eq!(london().format_timestamp(1_688_212_800_000), "01/07/2023, 13:00:00");
    }

    #[test]
    fn other_zones_are_respected() {
        let formatter = ReadingFormatter::new(chrono_tz::UTC);
        assert_eq!(formatter.format_timestamp(1_688_212_800_000), "01/07/2023, 12:00:00");
    }

    #[test]
    fn unrepresentable_timestamp_renders_invalid_date() {
        assert_eq!(london().format_timestamp(i64::MAX), INVALID_DATE);
    }

    #[test]
    fn formats_kitchen_reading() {
        let m = Measurement::new("kitchen", 1_700_000_000_000, 21.3, 55.2);
        let record = london().format(&m, "Kitchen");
        assert_eq!(record.location, "Kitchen");
        assert_eq!(record.temperature, "21.3");
        assert_eq!(record.humidity, "55.2");
        assert_eq!(record.absolute_humidity, "10.3");
        assert_eq!(record.last_modified_time, "14/11/2023, 22:13:20");
    }
}
