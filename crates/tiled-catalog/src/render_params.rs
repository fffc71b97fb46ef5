use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Maximum span, in days, that a catalog/time-series date range may cover.
pub const MAX_DATE_RANGE_DAYS: i64 = 366;

/// The aggregation window a rendering covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Period {
    Wet,
    Dry,
    Month,
}

impl Period {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Wet => "WET",
            Self::Dry => "DRY",
            Self::Month => "MONTH",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "WET" => Some(Self::Wet),
            "DRY" => Some(Self::Dry),
            "MONTH" => Some(Self::Month),
            _ => None,
        }
    }
}

/// Every parameter that affects pixel output for a rendering, other than
/// `(layer, x, y, z)` itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderParams {
    pub period: Period,
    pub year: u16,
    pub month: u8,
    pub vis: String,
}

impl RenderParams {
    pub fn new(period: Period, year: u16, month: u8, vis: impl Into<String>) -> Result<Self> {
        if period == Period::Month && !(1..=12).contains(&month) {
            return Err(Error::invalid("month must be between 1 and 12"));
        }

        Ok(Self {
            period,
            year,
            month,
            vis: vis.into(),
        })
    }

    /// The canonical digest embedded in a tile's cache key. Deterministic
    /// and order-independent by construction: every field has a fixed
    /// position, there is no map to reorder.
    pub fn digest(&self) -> String {
        format!("{}_{}_{}_{}", self.period.as_str(), self.year, self.month, self.vis)
    }
}

/// Validates an inclusive `[start, end]` day range against
/// [`MAX_DATE_RANGE_DAYS`] and basic ordering.
pub fn validate_date_range(start_epoch_day: i64, end_epoch_day: i64) -> Result<()> {
    if end_epoch_day < start_epoch_day {
        return Err(Error::invalid("date range end precedes start"));
    }

    if end_epoch_day - start_epoch_day > MAX_DATE_RANGE_DAYS {
        return Err(Error::invalid(format!(
            "date range spans more than {MAX_DATE_RANGE_DAYS} days"
        )));
    }

    Ok(())
}

/// Validates a lat/lon pair is within the legal WGS84 bounds.
pub fn validate_lat_lon(lat: f64, lon: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&lat) {
        return Err(Error::invalid(format!("latitude {lat} out of range")));
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(Error::invalid(format!("longitude {lon} out of range")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_order_independent_because_it_has_no_order_to_vary() {
        let a = RenderParams::new(Period::Wet, 2023, 0, "tvi-false").unwrap();
        let b = RenderParams::new(Period::Wet, 2023, 0, "tvi-false").unwrap();
        assert_eq!(a.digest(), b.digest());
    }

    #[test]
    fn month_period_requires_valid_month() {
        assert!(RenderParams::new(Period::Month, 2023, 0, "tvi-false").is_err());
        assert!(RenderParams::new(Period::Month, 2023, 13, "tvi-false").is_err());
        assert!(RenderParams::new(Period::Month, 2023, 6, "tvi-false").is_ok());
    }

    #[test]
    fn date_range_rejects_excessive_span() {
        assert!(validate_date_range(0, MAX_DATE_RANGE_DAYS + 1).is_err());
        assert!(validate_date_range(0, MAX_DATE_RANGE_DAYS).is_ok());
        assert!(validate_date_range(10, 5).is_err());
    }
}
