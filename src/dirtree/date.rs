//! Date field ordering
//!
//! Listings print dates with the field order of the machine's locale. Only the
//! day/month/year convention is understood; it is a named policy rather than a silent
//! default so that callers (and the config file) always say which order they expect.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order in which the three numeric date fields appear in the listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateOrder {
    /// `D/M/Y`, e.g. `1/2/2017` is the 1st of February 2017
    #[default]
    DayMonthYear,
}

impl DateOrder {
    /// Build a calendar date from the fields in the order they were printed.
    ///
    /// Returns `None` for impossible dates (month 13, February 30th, ...).
    pub fn resolve(self, fields: [u32; 3]) -> Option<NaiveDate> {
        match self {
            DateOrder::DayMonthYear => {
                let [day, month, year] = fields;
                let year = i32::try_from(year).ok()?;
                NaiveDate::from_ymd_opt(year, month, day)
            }
        }
    }
}

impl fmt::Display for DateOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateOrder::DayMonthYear => f.write_str("day/month/year"),
        }
    }
}
