use std::fmt;

use chrono::{DateTime, Utc};

/// Format of the relocation prefix: UTC, second resolution.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Ordering prefix sampled once per run and shared by every relocated file.
///
/// Fixed width digits, so lexicographic order equals chronological order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RunTimestamp(String);

impl RunTimestamp {
    pub fn now() -> Self {
        Self::at(Utc::now())
    }

    pub fn at(time: DateTime<Utc>) -> Self {
        Self(time.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RunTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_fixed_width_utc() {
        let t = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 1).unwrap();
        assert_eq!(RunTimestamp::at(t).as_str(), "20240307090501");
    }

    #[test]
    fn later_runs_sort_after_earlier_ones() {
        let a = RunTimestamp::at(Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap());
        let b = RunTimestamp::at(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
        assert!(a.as_str() < b.as_str());
    }
}
