use std::collections::{BTreeMap, BTreeSet};

use super::dto::RollingRecord;

// ============================================================================
// Date keys
// ============================================================================

/// Returns the `YYYY-MM-DD` prefix of a bucket date, or `None` when the
/// value does not start with one.
pub fn date_key(raw: &str) -> Option<&str> {
    let prefix = raw.get(..10)?;
    let valid = prefix.bytes().enumerate().all(|(i, b)| match i {
        4 | 7 => b == b'-',
        _ => b.is_ascii_digit(),
    });
    valid.then_some(prefix)
}

fn month_of(date: &str) -> &str {
    &date[..7]
}

/// Inclusive date restriction; an open bound accepts everything on that side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateWindow {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl DateWindow {
    /// Blank or malformed bounds are treated as open.
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: date_key(from.trim()).map(str::to_string),
            to: date_key(to.trim()).map(str::to_string),
        }
    }

    pub fn contains(&self, date: &str) -> bool {
        self.from.as_deref().map_or(true, |from| date >= from)
            && self.to.as_deref().map_or(true, |to| date <= to)
    }
}

// ============================================================================
// Matrix
// ============================================================================

/// Monthly rollup of one product's weekly buckets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlyAggregate {
    pub month: String,
    pub planned: f64,
    pub forecast: f64,
    pub incoming: f64,
    pub net_req: f64,
    /// Closing stock of the last bucket of the month, 0 without one.
    pub closing: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatrixRow {
    pub sku_id: String,
    pub product_name: String,
    pub category: String,
    pub warehouse_id: Option<String>,
    cells: BTreeMap<String, RollingRecord>,
    months: BTreeMap<String, MonthlyAggregate>,
}

impl MatrixRow {
    fn new(record: &RollingRecord) -> Self {
        Self {
            sku_id: record.sku_id.clone(),
            product_name: record.product_name.clone().unwrap_or_default(),
            category: record.category.clone().unwrap_or_default(),
            warehouse_id: record.warehouse_id.clone(),
            ..Default::default()
        }
    }

    pub fn cell(&self, date: &str) -> Option<&RollingRecord> {
        self.cells.get(date)
    }

    pub fn month(&self, month: &str) -> Option<&MonthlyAggregate> {
        self.months.get(month)
    }

    /// Weekly records of one `YYYY-MM` month in date order.
    pub fn cells_in_month<'a>(&'a self, month: &'a str) -> impl Iterator<Item = &'a RollingRecord> + 'a {
        self.cells
            .iter()
            .filter(move |(date, _)| month_of(date) == month)
            .map(|(_, record)| record)
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn aggregate(&self, month: &str) -> MonthlyAggregate {
        let mut agg = MonthlyAggregate {
            month: month.to_string(),
            ..Default::default()
        };
        for record in self.cells_in_month(month) {
            agg.planned += record.planned;
            agg.forecast += record.forecast;
            agg.incoming += record.incoming;
            agg.net_req += record.net_req;
            // cells are ordered by date, so the last one wins
            agg.closing = record.closing;
        }
        agg
    }
}

/// Weekly records pivoted to product rows with date and month columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RollingMatrix {
    pub dates: Vec<String>,
    pub months: Vec<String>,
    pub rows: Vec<MatrixRow>,
    /// Records dropped for a malformed bucket date.
    pub rejected: usize,
}

impl RollingMatrix {
    pub fn build(records: &[RollingRecord], window: &DateWindow) -> Self {
        let mut rejected = 0;
        let mut dates = BTreeSet::new();
        let mut rows: Vec<MatrixRow> = Vec::new();
        let mut index: BTreeMap<String, usize> = BTreeMap::new();

        for record in records {
            let Some(date) = date_key(&record.bucket_date) else {
                rejected += 1;
                continue;
            };
            if !window.contains(date) {
                continue;
            }
            dates.insert(date.to_string());

            let position = *index.entry(record.sku_id.clone()).or_insert_with(|| {
                rows.push(MatrixRow::new(record));
                rows.len() - 1
            });
            let row = &mut rows[position];
            if row.warehouse_id.is_none() {
                row.warehouse_id = record.warehouse_id.clone();
            }
            row.cells.insert(date.to_string(), record.clone());
        }

        let months: Vec<String> = dates
            .iter()
            .map(|d| month_of(d).to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        for row in rows.iter_mut() {
            row.months = months
                .iter()
                .map(|m| (m.clone(), row.aggregate(m)))
                .collect();
        }

        Self {
            dates: dates.into_iter().collect(),
            months,
            rows,
            rejected,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn dates_in_month<'a>(&'a self, month: &'a str) -> impl Iterator<Item = &'a String> + 'a {
        self.dates.iter().filter(move |d| month_of(d) == month)
    }

    pub fn row(&self, sku_id: &str) -> Option<&MatrixRow> {
        self.rows.iter().find(|r| r.sku_id == sku_id)
    }

    pub fn record(&self, sku_id: &str, date: &str) -> Option<&RollingRecord> {
        self.row(sku_id).and_then(|r| r.cell(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sku: &str, date: &str, planned: f64, closing: f64) -> RollingRecord {
        RollingRecord {
            sku_id: sku.into(),
            product_name: Some(format!("Product {sku}")),
            bucket_date: date.into(),
            planned,
            closing,
            forecast: 1.0,
            incoming: 2.0,
            net_req: 0.5,
            ..Default::default()
        }
    }

    #[test]
    fn test_date_key() {
        assert_eq!(date_key("2025-01-06"), Some("2025-01-06"));
        assert_eq!(date_key("2025-01-06T00:00:00"), Some("2025-01-06"));
        assert_eq!(date_key(""), None);
        assert_eq!(date_key("N/A"), None);
        assert_eq!(date_key("2025/01/06"), None);
        assert_eq!(date_key("06-01-2025"), None);
    }

    #[test]
    fn test_january_closing_and_planned_sum() {
        let records = vec![
            record("A001", "2025-01-20", 20.0, 120.0),
            record("A001", "2025-01-06", 10.0, 100.0),
            record("A001", "2025-01-31", 5.0, 90.0),
            record("A001", "2025-01-13", 0.0, 110.0),
        ];
        let matrix = RollingMatrix::build(&records, &DateWindow::default());
        let jan = matrix.rows[0].month("2025-01").unwrap();
        assert_eq!(jan.closing, 90.0);
        assert_eq!(jan.planned, 35.0);
        assert_eq!(jan.forecast, 4.0);
        assert_eq!(jan.incoming, 8.0);
        assert_eq!(jan.net_req, 2.0);
    }

    #[test]
    fn test_closing_uses_last_present_date() {
        let records = vec![
            record("A001", "2025-01-06", 10.0, 100.0),
            record("A001", "2025-01-20", 20.0, 70.0),
        ];
        let matrix = RollingMatrix::build(&records, &DateWindow::default());
        assert_eq!(matrix.rows[0].month("2025-01").unwrap().closing, 70.0);
    }

    #[test]
    fn test_malformed_dates_excluded_everywhere() {
        let records = vec![
            record("A001", "2025-01-06", 10.0, 100.0),
            record("A001", "", 999.0, 999.0),
            record("A001", "N/A", 999.0, 999.0),
            record("B002", "not a date", 1.0, 1.0),
        ];
        let matrix = RollingMatrix::build(&records, &DateWindow::default());
        assert_eq!(matrix.rejected, 3);
        assert_eq!(matrix.dates, vec!["2025-01-06".to_string()]);
        assert_eq!(matrix.rows.len(), 1);
        assert_eq!(matrix.rows[0].cell_count(), 1);
        assert_eq!(matrix.rows[0].month("2025-01").unwrap().planned, 10.0);
        assert!(matrix.row("B002").is_none());
    }

    #[test]
    fn test_months_without_dates_are_skipped() {
        let records = vec![
            record("A001", "2025-01-06", 1.0, 1.0),
            record("A001", "2025-03-03", 1.0, 1.0),
        ];
        let matrix = RollingMatrix::build(&records, &DateWindow::default());
        assert_eq!(matrix.months, vec!["2025-01".to_string(), "2025-03".to_string()]);
        assert!(matrix.rows[0].month("2025-02").is_none());
    }

    #[test]
    fn test_product_missing_in_month_gets_zero_closing() {
        let records = vec![
            record("A001", "2025-01-06", 1.0, 50.0),
            record("A001", "2025-02-03", 1.0, 40.0),
            record("B002", "2025-01-06", 3.0, 30.0),
        ];
        let matrix = RollingMatrix::build(&records, &DateWindow::default());
        let feb = matrix.row("B002").unwrap().month("2025-02").unwrap();
        assert_eq!(feb.closing, 0.0);
        assert_eq!(feb.planned, 0.0);
    }

    #[test]
    fn test_window_restricts_dates_and_aggregates() {
        let records = vec![
            record("A001", "2024-12-30", 7.0, 10.0),
            record("A001", "2025-01-06", 1.0, 20.0),
            record("A001", "2025-01-13", 2.0, 30.0),
            record("A001", "2025-01-20", 4.0, 40.0),
        ];
        let window = DateWindow::new("2025-01-01", "2025-01-13");
        let matrix = RollingMatrix::build(&records, &window);
        assert_eq!(matrix.dates, vec!["2025-01-06".to_string(), "2025-01-13".to_string()]);
        assert_eq!(matrix.months, vec!["2025-01".to_string()]);
        let jan = matrix.rows[0].month("2025-01").unwrap();
        assert_eq!(jan.planned, 3.0);
        assert_eq!(jan.closing, 30.0);
    }

    #[test]
    fn test_rows_keep_first_seen_order() {
        let records = vec![
            record("B002", "2025-01-06", 1.0, 1.0),
            record("A001", "2025-01-06", 1.0, 1.0),
            record("B002", "2025-01-13", 1.0, 1.0),
        ];
        let matrix = RollingMatrix::build(&records, &DateWindow::default());
        let skus: Vec<_> = matrix.rows.iter().map(|r| r.sku_id.as_str()).collect();
        assert_eq!(skus, vec!["B002", "A001"]);
        assert_eq!(matrix.dates_in_month("2025-01").count(), 2);
    }
}
