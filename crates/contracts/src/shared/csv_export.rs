//! CSV content for client-side exports.
//!
//! Every field is quoted so that spreadsheet tools never split a value on an
//! embedded separator. The content is prefixed with a UTF-8 byte-order mark
//! when handed to the browser.

use chrono::NaiveDate;
use thiserror::Error;

pub const UTF8_BOM: char = '\u{FEFF}';

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No data to export")]
    Empty,
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV output is not valid UTF-8")]
    Encoding,
    #[error("{0}")]
    Browser(String),
}

/// Types that know their own export columns.
pub trait CsvExportable {
    fn headers() -> Vec<&'static str>;
    fn to_csv_row(&self) -> Vec<String>;
}

/// Builds the CSV text (header line first, `\n` line endings, no BOM).
pub fn build_csv<I, R>(headers: &[&str], rows: I) -> Result<String, ExportError>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: AsRef<[u8]>,
{
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.into_error().into()))?;
    String::from_utf8(bytes).map_err(|_| ExportError::Encoding)
}

/// CSV for a slice of exportable records; empty input is an error.
pub fn build_csv_for<T: CsvExportable>(items: &[T]) -> Result<String, ExportError> {
    if items.is_empty() {
        return Err(ExportError::Empty);
    }
    build_csv(&T::headers(), items.iter().map(T::to_csv_row))
}

/// Content ready for a `text/csv` blob.
pub fn with_bom(content: &str) -> String {
    let mut out = String::with_capacity(content.len() + 3);
    out.push(UTF8_BOM);
    out.push_str(content);
    out
}

/// `{prefix}_{YYYY-MM-DD}.csv`
pub fn export_filename(prefix: &str, date: NaiveDate) -> String {
    format!("{}_{}.csv", prefix, date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        id: String,
        name: String,
    }

    impl CsvExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["id", "name"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.id.clone(), self.name.clone()]
        }
    }

    #[test]
    fn test_quotes_every_field_and_keeps_commas() {
        let rows = vec![Row {
            id: "1".into(),
            name: "Foo,Bar".into(),
        }];
        let csv = build_csv_for(&rows).unwrap();
        assert_eq!(csv, "\"id\",\"name\"\n\"1\",\"Foo,Bar\"\n");
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let csv = build_csv(&["note"], vec![vec!["10\" pipe"]]).unwrap();
        assert_eq!(csv, "\"note\"\n\"10\"\" pipe\"\n");
    }

    #[test]
    fn test_empty_export_rejected() {
        let rows: Vec<Row> = Vec::new();
        assert!(matches!(build_csv_for(&rows), Err(ExportError::Empty)));
    }

    #[test]
    fn test_bom_and_filename() {
        assert!(with_bom("a").starts_with('\u{FEFF}'));
        assert_eq!(with_bom("a").chars().nth(1), Some('a'));
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(export_filename("customers_export", date), "customers_export_2025-03-07.csv");
    }
}
