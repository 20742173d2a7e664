//! Shared domain types.
//!
//! The dataset types mirror the bundled `data.json` schema one-to-one so that
//! deserialization stays a plain `serde_json` read. Everything here is either:
//!
//! - loaded once and never mutated (`Dataset` and its children), or
//! - freshly allocated per query (`AggregatedBrand`, `ChartSeries`)

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A plain calendar triple used as a query key.
///
/// Dates are exact numeric triples, not timestamps: no timezone handling, no
/// calendar validation. A key like 31/02/2099 is a legal query that simply
/// matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateKey {
    pub day: u8,
    pub month: u8,
    pub year: i32,
}

impl DateKey {
    pub fn new(day: u8, month: u8, year: i32) -> Self {
        Self { day, month, year }
    }
}

impl std::fmt::Display for DateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month, self.year)
    }
}

impl std::str::FromStr for DateKey {
    type Err = String;

    /// Accepts `DD/MM/YYYY`, `DD-MM-YYYY`, or `YYYY-MM-DD`.
    ///
    /// A leading 4-digit component is taken as the year; otherwise the order
    /// is day-month-year. Components are parsed as plain integers.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(['/', '-']).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(format!(
                "Invalid date '{s}'. Expected DD/MM/YYYY, DD-MM-YYYY, or YYYY-MM-DD."
            ));
        }

        let nums: Vec<i64> = parts
            .iter()
            .map(|p| p.parse::<i64>())
            .collect::<Result<_, _>>()
            .map_err(|_| format!("Invalid date '{s}': non-numeric component."))?;

        let (day, month, year) = if parts[0].len() == 4 {
            (nums[2], nums[1], nums[0])
        } else {
            (nums[0], nums[1], nums[2])
        };

        let day = u8::try_from(day).map_err(|_| format!("Invalid day in '{s}'."))?;
        let month = u8::try_from(month).map_err(|_| format!("Invalid month in '{s}'."))?;
        let year = i32::try_from(year).map_err(|_| format!("Invalid year in '{s}'."))?;

        Ok(DateKey { day, month, year })
    }
}

/// One brand's performance at one location on one day.
///
/// `name` is non-empty but not unique across locations on the same day: the
/// same brand sold at two bars produces two entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandSale {
    pub name: String,
    pub sold: f64,
    pub efficiency: f64,
    pub quality: f64,
}

/// One location's set of brand sales on one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub sold: Vec<BrandSale>,
}

/// One calendar day's full report across all locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRecord {
    pub day: u8,
    pub month: u8,
    pub year: i32,
    pub locations: Vec<LocationRecord>,
}

impl DayRecord {
    pub fn date(&self) -> DateKey {
        DateKey::new(self.day, self.month, self.year)
    }
}

/// The full reference dataset: an ordered sequence of day reports.
///
/// Constructed once at startup and passed by reference into the query engine.
/// Never mutated after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub data: Vec<DayRecord>,
}

impl Dataset {
    /// All day records matching the given calendar triple exactly.
    ///
    /// Zero, one, or more matches; an empty result is a valid outcome, not an
    /// error ("no chart to draw").
    pub fn find_by_date(&self, date: DateKey) -> Vec<&DayRecord> {
        self.data.iter().filter(|d| d.date() == date).collect()
    }

    /// Distinct brand names across the whole dataset, in first-seen order.
    ///
    /// The order carries no meaning but is deterministic (scan order), which
    /// keeps picker lists and tests stable.
    pub fn brand_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        for day in &self.data {
            for location in &day.locations {
                for sale in &location.sold {
                    if seen.insert(sale.name.clone()) {
                        names.push(sale.name.clone());
                    }
                }
            }
        }
        names
    }

    /// Distinct dates present in the dataset, in storage order.
    pub fn dates(&self) -> Vec<DateKey> {
        let mut seen = HashSet::new();
        let mut dates = Vec::new();
        for day in &self.data {
            let key = day.date();
            if seen.insert(key) {
                dates.push(key);
            }
        }
        dates
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Optional restriction narrowing aggregation to a set of brand names.
///
/// An empty name set is treated as "no restriction", matching the behavior of
/// an absent filter.
#[derive(Debug, Clone)]
pub enum BrandFilter {
    All,
    Named(HashSet<String>),
}

impl BrandFilter {
    pub fn named<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: HashSet<String> = names.into_iter().map(Into::into).collect();
        if set.is_empty() {
            BrandFilter::All
        } else {
            BrandFilter::Named(set)
        }
    }

    pub fn admits(&self, name: &str) -> bool {
        match self {
            BrandFilter::All => true,
            BrandFilter::Named(set) => set.contains(name),
        }
    }
}

/// Exactly two distinct brand names for compare mode.
///
/// The two-ness is enforced here by construction rather than by runtime
/// checks scattered through callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandPair {
    first: String,
    second: String,
}

impl BrandPair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Result<Self, AppError> {
        let first = first.into();
        let second = second.into();
        if first.is_empty() || second.is_empty() {
            return Err(AppError::invalid_request(
                "Compare requires two non-empty brand names.",
            ));
        }
        if first == second {
            return Err(AppError::invalid_request(
                "Compare requires two distinct brand names.",
            ));
        }
        Ok(Self { first, second })
    }

    /// Names in selection order.
    pub fn names(&self) -> [&str; 2] {
        [&self.first, &self.second]
    }
}

/// One brand's merged view for a single logical day (derived, transient).
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedBrand {
    pub name: String,
    /// Sum of `sold` across all locations for this brand on the matched day.
    pub total_sold: f64,
    /// Sold-weighted mean across the contributing entries (plain mean when
    /// the group's total sold is zero).
    pub efficiency: f64,
    pub quality: f64,
}

/// The core's output contract: a labeled multi-series numeric table.
///
/// All four sequences are parallel and of equal length; index `i` describes
/// one brand. No rounding or normalization is applied here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub sold: Vec<f64>,
    pub efficiency: Vec<f64>,
    pub quality: Vec<f64>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// A saved query result (JSON export).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesFile {
    pub tool: String,
    pub date: DateKey,
    pub query: String,
    pub series: ChartSeries,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_key_parses_common_formats() {
        let expected = DateKey::new(3, 11, 2023);
        for s in ["3/11/2023", "03-11-2023", "2023-11-03"] {
            let parsed: DateKey = s.parse().unwrap();
            assert_eq!(parsed, expected, "format {s}");
        }
    }

    #[test]
    fn date_key_allows_non_calendar_triples() {
        // Query keys are plain triples; validity is a matching concern.
        let parsed: DateKey = "31/2/2099".parse().unwrap();
        assert_eq!(parsed, DateKey::new(31, 2, 2099));
    }

    #[test]
    fn date_key_rejects_garbage() {
        assert!("2023".parse::<DateKey>().is_err());
        assert!("a/b/c".parse::<DateKey>().is_err());
        assert!("1/2/3/4".parse::<DateKey>().is_err());
    }

    #[test]
    fn brand_pair_rejects_duplicates_and_empties() {
        assert!(BrandPair::new("Amber", "Amber").is_err());
        assert!(BrandPair::new("", "Amber").is_err());
        let pair = BrandPair::new("Amber", "Stout").unwrap();
        assert_eq!(pair.names(), ["Amber", "Stout"]);
    }

    #[test]
    fn empty_named_filter_means_no_restriction() {
        let filter = BrandFilter::named(Vec::<String>::new());
        assert!(filter.admits("anything"));
    }

    #[test]
    fn brand_names_first_seen_order() {
        let dataset = Dataset {
            data: vec![
                DayRecord {
                    day: 1,
                    month: 1,
                    year: 2024,
                    locations: vec![LocationRecord {
                        sold: vec![
                            sale("B", 1.0),
                            sale("A", 1.0),
                            sale("B", 2.0),
                        ],
                    }],
                },
                DayRecord {
                    day: 2,
                    month: 1,
                    year: 2024,
                    locations: vec![LocationRecord {
                        sold: vec![sale("C", 1.0), sale("A", 1.0)],
                    }],
                },
            ],
        };
        assert_eq!(dataset.brand_names(), vec!["B", "A", "C"]);
        assert_eq!(
            dataset.dates(),
            vec![DateKey::new(1, 1, 2024), DateKey::new(2, 1, 2024)]
        );
    }

    fn sale(name: &str, sold: f64) -> BrandSale {
        BrandSale {
            name: name.to_string(),
            sold,
            efficiency: 0.8,
            quality: 0.9,
        }
    }
}
