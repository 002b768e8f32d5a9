//! Calendar periods used by the transaction filters.

use chrono::{Datelike, NaiveDate};

/// Inclusive date interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    pub fn single_day(date: NaiveDate) -> Self {
        Self { from: date, to: date }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }

    pub fn start_date(&self) -> String {
        self.from.format("%Y-%m-%d").to_string()
    }

    pub fn end_date(&self) -> String {
        self.to.format("%Y-%m-%d").to_string()
    }

    pub fn whole_year(year: i32) -> Option<Self> {
        Some(Self {
            from: NaiveDate::from_ymd_opt(year, 1, 1)?,
            to: NaiveDate::from_ymd_opt(year, 12, 31)?,
        })
    }

    pub fn whole_month(year: i32, month: u32) -> Option<Self> {
        let from = NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(Self {
            from,
            to: last_day_of_month(from),
        })
    }

    /// Parses a `YYYY-MM` month picker value into its full month.
    pub fn parse_month(value: &str) -> Option<Self> {
        let (y, m) = value.trim().split_once('-')?;
        Self::whole_month(y.parse().ok()?, m.parse().ok()?)
    }
}

pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let (y, m) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)
        .and_then(|d| d.pred_opt())
        .unwrap_or(date)
}

/// Week-of-month buckets: days 1-7, 8-14, 15-21 and 22 to month end.
pub const WEEK_OF_MONTH_RANGES: [(u32, u32); 4] = [(1, 7), (8, 14), (15, 21), (22, 31)];

/// Year / month / week-of-month selector state. `None` means "all".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PeriodSelection {
    pub year: Option<i32>,
    /// 1-12
    pub month: Option<u32>,
    /// 1-4, only meaningful with a month
    pub week: Option<u32>,
}

impl PeriodSelection {
    pub fn year(year: i32) -> Self {
        Self {
            year: Some(year),
            ..Default::default()
        }
    }

    /// Choosing "all months" also resets the week.
    pub fn with_month(mut self, month: Option<u32>) -> Self {
        self.month = month;
        if month.is_none() {
            self.week = None;
        }
        self
    }

    pub fn with_week(mut self, week: Option<u32>) -> Self {
        self.week = week;
        self
    }

    /// Date range for the selection, `None` when no year is chosen.
    pub fn to_range(&self) -> Option<DateRange> {
        let year = self.year?;
        let Some(month) = self.month else {
            return DateRange::whole_year(year);
        };
        let month_range = DateRange::whole_month(year, month)?;
        let Some(week) = self.week else {
            return Some(month_range);
        };
        let (start, end) = *WEEK_OF_MONTH_RANGES.get(week.checked_sub(1)? as usize)?;
        let end = end.min(month_range.to.day());
        Some(DateRange {
            from: NaiveDate::from_ymd_opt(year, month, start)?,
            to: NaiveDate::from_ymd_opt(year, month, end)?,
        })
    }
}

/// Selectable years: current year +/- 2.
pub fn year_options(current_year: i32) -> Vec<i32> {
    (current_year - 2..=current_year + 2).collect()
}

pub const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// `W{iso week}` for an ISO date (or datetime) string, `-` when unparsable.
pub fn iso_week_label(value: &str) -> String {
    let date_part = value.get(..10).unwrap_or(value);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => format!("W{}", date.iso_week().week()),
        Err(_) => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_whole_year_and_month() {
        let sel = PeriodSelection::year(2025);
        assert_eq!(sel.to_range(), Some(DateRange::new(d(2025, 1, 1), d(2025, 12, 31))));
        let sel = sel.with_month(Some(2));
        assert_eq!(sel.to_range(), Some(DateRange::new(d(2025, 2, 1), d(2025, 2, 28))));
        let leap = PeriodSelection::year(2024).with_month(Some(2));
        assert_eq!(leap.to_range().unwrap().to, d(2024, 2, 29));
    }

    #[test]
    fn test_week_of_month_clamps_to_month_end() {
        let sel = PeriodSelection::year(2025).with_month(Some(2)).with_week(Some(4));
        assert_eq!(sel.to_range(), Some(DateRange::new(d(2025, 2, 22), d(2025, 2, 28))));
        let sel = PeriodSelection::year(2025).with_month(Some(1)).with_week(Some(2));
        assert_eq!(sel.to_range(), Some(DateRange::new(d(2025, 1, 8), d(2025, 1, 14))));
    }

    #[test]
    fn test_all_months_resets_week() {
        let sel = PeriodSelection::year(2025)
            .with_month(Some(3))
            .with_week(Some(2))
            .with_month(None);
        assert_eq!(sel.week, None);
        assert_eq!(PeriodSelection::default().to_range(), None);
    }

    #[test]
    fn test_parse_month() {
        let r = DateRange::parse_month("2025-11").unwrap();
        assert_eq!(r.start_date(), "2025-11-01");
        assert_eq!(r.end_date(), "2025-11-30");
        assert_eq!(DateRange::parse_month("2025-12").unwrap().end_date(), "2025-12-31");
        assert!(DateRange::parse_month("").is_none());
        assert!(DateRange::parse_month("2025-13").is_none());
    }

    #[test]
    fn test_iso_week_label() {
        assert_eq!(iso_week_label("2025-01-01"), "W1");
        assert_eq!(iso_week_label("2025-12-29T00:00:00"), "W1");
        assert_eq!(iso_week_label("2025-06-16"), "W25");
        assert_eq!(iso_week_label(""), "-");
    }

    #[test]
    fn test_year_options() {
        assert_eq!(year_options(2025), vec![2023, 2024, 2025, 2026, 2027]);
    }
}
