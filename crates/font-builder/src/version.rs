//! Date-based font versioning.

use chrono::{Datelike, NaiveDate};
use write_fonts::types::{Fixed, LongDateTime};

use crate::error::{BuildError, Result};

/// Font version information.
///
/// Fonts are versioned by date tag (e.g. "2026-08-05" or "2026-08-05.1");
/// the tag feeds name ID 5 and the date feeds `head.font_revision` and the
/// created/modified timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct FontVersion {
    /// Version date.
    pub date: NaiveDate,
    /// Version tag (e.g., "2026-08-05" or "2026-08-05.1").
    pub tag: String,
}

impl FontVersion {
    /// Create a version from a date and tag.
    pub fn new(date: NaiveDate, tag: impl Into<String>) -> Self {
        Self { date, tag: tag.into() }
    }

    /// Today's date as both date and tag.
    pub fn today() -> Self {
        let today = chrono::Local::now().date_naive();
        Self::new(today, today.format("%Y-%m-%d").to_string())
    }

    /// Parse a version string (YYYY-MM-DD or YYYY-MM-DD.N) or use today's date.
    pub fn parse(value: Option<&str>) -> Result<Self> {
        match value {
            None => Ok(Self::today()),
            Some(v) => {
                // Try YYYY-MM-DD.N format first
                if let Some((date_part, build_num)) = v.rsplit_once('.')
                    && build_num.parse::<u32>().is_ok()
                    && let Ok(parsed) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
                {
                    return Ok(Self::new(parsed, v));
                }

                // Try plain YYYY-MM-DD format
                if let Ok(parsed) = NaiveDate::parse_from_str(v, "%Y-%m-%d") {
                    return Ok(Self::new(parsed, v));
                }

                Err(BuildError::InvalidVersion(v.to_string()))
            }
        }
    }

    /// Get the version string (e.g., "Version 2026-08-05").
    pub fn version_string(&self) -> String {
        format!("Version {}", self.tag)
    }

    /// Compute font revision as YYYY.MMDD.
    pub fn revision(&self) -> Fixed {
        let year = self.date.year() as f64;
        let month_day = self.date.format("%m%d").to_string().parse::<f64>().unwrap() / 10000.0;
        Fixed::from_f64(year + month_day)
    }

    /// The version date at midnight as seconds since 1904-01-01, the epoch
    /// `head.created` and `head.modified` count from.
    pub fn timestamp(&self) -> LongDateTime {
        let epoch = NaiveDate::from_ymd_opt(1904, 1, 1).unwrap();
        let days = (self.date - epoch).num_days();
        LongDateTime::new(days * 24 * 60 * 60)
    }
}

impl Default for FontVersion {
    fn default() -> Self {
        Self::today()
    }
}
