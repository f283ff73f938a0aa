use crate::core::Clock;
use chrono::{Local, NaiveDateTime};

/// Row-level `processed_at` format.
pub const ROW_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// ISO-8601 with microseconds, used for the JSON metadata stamp.
pub const METADATA_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Local wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always answers the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

pub fn format_row_timestamp(at: NaiveDateTime) -> String {
    at.format(ROW_TIMESTAMP_FORMAT).to_string()
}

pub fn format_metadata_timestamp(at: NaiveDateTime) -> String {
    at.format(METADATA_TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_timestamp_formats() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_micro_opt(9, 7, 1, 42)
            .unwrap();

        assert_eq!(format_row_timestamp(at), "2024-03-05 09:07:01");
        assert_eq!(format_metadata_timestamp(at), "2024-03-05T09:07:01.000042");
    }

    #[test]
    fn test_fixed_clock_is_stable() {
        let at = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let clock = FixedClock(at);
        assert_eq!(clock.now(), clock.now());
    }
}
