use super::matrix::RollingMatrix;
use super::overlay::EditOverlay;
use crate::shared::csv_export::{build_csv, ExportError};

/// Column granularity of the matrix view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MatrixView {
    #[default]
    Weekly,
    Monthly,
}

impl MatrixView {
    pub fn label(&self) -> &'static str {
        match self {
            MatrixView::Weekly => "Week",
            MatrixView::Monthly => "Month",
        }
    }
}

/// CSV of the matrix as displayed, pending planned edits included.
pub fn matrix_csv(
    matrix: &RollingMatrix,
    overlay: &EditOverlay,
    view: MatrixView,
) -> Result<String, ExportError> {
    if matrix.is_empty() {
        return Err(ExportError::Empty);
    }
    let columns: &[String] = match view {
        MatrixView::Weekly => &matrix.dates,
        MatrixView::Monthly => &matrix.months,
    };

    let mut headers = vec![
        "SKU".to_string(),
        "Product".to_string(),
        "Category".to_string(),
    ];
    for column in columns {
        headers.push(format!("{column} Close"));
        headers.push(format!("{column} Plan"));
        headers.push(format!("{column} NetReq"));
    }
    let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();

    let rows = matrix.rows.iter().map(|row| {
        let mut cells = vec![
            row.sku_id.clone(),
            row.product_name.clone(),
            row.category.clone(),
        ];
        for column in columns {
            let (closing, planned, net_req) = match view {
                MatrixView::Weekly => row
                    .cell(column)
                    .map(|r| (r.closing, overlay.display_planned(r), r.net_req))
                    .unwrap_or_default(),
                MatrixView::Monthly => row
                    .month(column)
                    .map(|m| (m.closing, overlay.month_planned(row, column), m.net_req))
                    .unwrap_or_default(),
            };
            cells.push(closing.to_string());
            cells.push(planned.to_string());
            cells.push(net_req.to_string());
        }
        cells
    });

    build_csv(&header_refs, rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u503_rolling_plan::dto::RollingRecord;
    use crate::usecases::u503_rolling_plan::matrix::DateWindow;

    #[test]
    fn test_weekly_export_uses_overlay() {
        let records = vec![RollingRecord {
            sku_id: "A001".into(),
            product_name: Some("Widget".into()),
            bucket_date: "2025-02-03".into(),
            planned: 10.0,
            closing: 40.0,
            ..Default::default()
        }];
        let matrix = RollingMatrix::build(&records, &DateWindow::default());
        let mut overlay = EditOverlay::new();
        overlay.set("A001", "2025-02-03", 25.0);

        let csv = matrix_csv(&matrix, &overlay, MatrixView::Weekly).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some(r#""SKU","Product","Category","2025-02-03 Close","2025-02-03 Plan","2025-02-03 NetReq""#)
        );
        assert_eq!(lines.next(), Some(r#""A001","Widget","","40","25","0""#));
    }

    #[test]
    fn test_monthly_export_uses_overlay() {
        let records = vec![
            RollingRecord {
                sku_id: "A001".into(),
                bucket_date: "2025-02-03".into(),
                planned: 10.0,
                ..Default::default()
            },
            RollingRecord {
                sku_id: "A001".into(),
                bucket_date: "2025-02-10".into(),
                planned: 4.0,
                closing: 12.0,
                ..Default::default()
            },
        ];
        let matrix = RollingMatrix::build(&records, &DateWindow::default());
        let mut overlay = EditOverlay::new();
        overlay.set("A001", "2025-02-03", 25.0);

        let csv = matrix_csv(&matrix, &overlay, MatrixView::Monthly).unwrap();
        let row = csv.lines().nth(1);
        assert_eq!(row, Some(r#""A001","","","12","29","0""#));
    }

    #[test]
    fn test_empty_matrix_is_not_exported() {
        let matrix = RollingMatrix::default();
        assert!(matches!(
            matrix_csv(&matrix, &EditOverlay::new(), MatrixView::Monthly),
            Err(ExportError::Empty)
        ));
    }
}
