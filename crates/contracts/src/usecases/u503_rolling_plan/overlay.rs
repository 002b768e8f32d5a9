use std::collections::BTreeMap;

use super::dto::{PlannedSupplyUpdate, RollingRecord};
use super::matrix::{date_key, MatrixRow, RollingMatrix};
use crate::domain::common::non_negative;
use crate::shared::api::ApiError;

/// Pending planned-supply edits keyed by (sku, bucket date).
///
/// Fetched records are never mutated; the overlay only changes what is shown
/// until it is flushed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditOverlay {
    edits: BTreeMap<(String, String), f64>,
}

/// Result of flushing the overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// Nothing was pending.
    Nothing,
    /// Every sent update was accepted. `held` edits were outside the
    /// matrix they were sent from and are still pending.
    Saved { count: usize, held: usize },
    /// Failed edits stay in the overlay.
    Failed {
        saved: usize,
        failed: usize,
        error: ApiError,
    },
}

impl SaveOutcome {
    /// The matrix must be re-fetched when anything reached the backend.
    pub fn needs_refetch(&self) -> bool {
        match self {
            SaveOutcome::Nothing => false,
            SaveOutcome::Saved { .. } => true,
            SaveOutcome::Failed { saved, .. } => *saved > 0,
        }
    }
}

impl EditOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, sku_id: &str, date: &str, value: f64) {
        self.edits
            .insert((sku_id.to_string(), date.to_string()), value);
    }

    /// Parses the typed value and stores it. Blank input drops the edit.
    pub fn set_input(&mut self, sku_id: &str, date: &str, input: &str) -> Result<(), ApiError> {
        if input.trim().is_empty() {
            self.remove(sku_id, date);
            return Ok(());
        }
        let value = non_negative(input, "Planned supply")?;
        self.set(sku_id, date, value);
        Ok(())
    }

    pub fn remove(&mut self, sku_id: &str, date: &str) {
        self.edits.remove(&(sku_id.to_string(), date.to_string()));
    }

    pub fn get(&self, sku_id: &str, date: &str) -> Option<f64> {
        self.edits
            .get(&(sku_id.to_string(), date.to_string()))
            .copied()
    }

    pub fn is_edited(&self, sku_id: &str, date: &str) -> bool {
        self.get(sku_id, date).is_some()
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn clear(&mut self) {
        self.edits.clear();
    }

    /// Planned supply to show for a record: the pending edit if any.
    pub fn display_planned(&self, record: &RollingRecord) -> f64 {
        date_key(&record.bucket_date)
            .and_then(|date| self.get(&record.sku_id, date))
            .unwrap_or(record.planned)
    }

    /// Planned supply of a month as shown: pending edits replace the fetched
    /// value of their bucket.
    pub fn month_planned(&self, row: &MatrixRow, month: &str) -> f64 {
        self.planned_sum(row.cells_in_month(month))
    }

    pub fn planned_sum<'a>(&self, records: impl IntoIterator<Item = &'a RollingRecord>) -> f64 {
        records
            .into_iter()
            .map(|record| self.display_planned(record))
            .sum()
    }

    /// Pending edits with no cell in `matrix`; they are not sent on save.
    pub fn outside(&self, matrix: &RollingMatrix) -> usize {
        self.edits
            .keys()
            .filter(|(sku, date)| matrix.record(sku, date).is_none())
            .count()
    }

    /// One update per edited cell. Edits whose cell is no longer in the
    /// matrix are left out; `fallback_warehouse` covers records without one.
    pub fn updates(
        &self,
        matrix: &RollingMatrix,
        fallback_warehouse: Option<&str>,
    ) -> Vec<PlannedSupplyUpdate> {
        self.edits
            .iter()
            .filter_map(|((sku, date), value)| {
                let row = matrix.row(sku)?;
                let record = row.cell(date)?;
                let warehouse_id = record
                    .warehouse_id
                    .clone()
                    .or_else(|| row.warehouse_id.clone())
                    .or_else(|| fallback_warehouse.map(str::to_string))
                    .unwrap_or_default();
                Some(PlannedSupplyUpdate {
                    sku_id: sku.clone(),
                    bucket_date: date.clone(),
                    warehouse_id,
                    planned_supply: *value,
                })
            })
            .collect()
    }

    /// Folds per-update results back into the overlay: accepted edits are
    /// removed, rejected and unsent ones kept.
    pub fn apply_results(
        &mut self,
        results: Vec<(PlannedSupplyUpdate, Result<(), ApiError>)>,
    ) -> SaveOutcome {
        if results.is_empty() {
            return SaveOutcome::Nothing;
        }
        let mut saved = 0;
        let mut failed = 0;
        let mut first_error = None;
        for (update, result) in results {
            match result {
                Ok(()) => {
                    saved += 1;
                    self.remove(&update.sku_id, &update.bucket_date);
                }
                Err(err) => {
                    failed += 1;
                    first_error.get_or_insert(err);
                }
            }
        }
        match first_error {
            None => SaveOutcome::Saved {
                count: saved,
                held: self.len(),
            },
            Some(error) => SaveOutcome::Failed {
                saved,
                failed,
                error,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u503_rolling_plan::matrix::DateWindow;

    fn matrix() -> RollingMatrix {
        let records = vec![
            RollingRecord {
                sku_id: "A001".into(),
                bucket_date: "2025-02-01".into(),
                warehouse_id: Some("WH01".into()),
                planned: 10.0,
                ..Default::default()
            },
            RollingRecord {
                sku_id: "B002".into(),
                bucket_date: "2025-02-01".into(),
                planned: 3.0,
                ..Default::default()
            },
        ];
        RollingMatrix::build(&records, &DateWindow::default())
    }

    #[test]
    fn test_overlay_value_shown_without_mutating_record() {
        let matrix = matrix();
        let mut overlay = EditOverlay::new();
        overlay.set("A001", "2025-02-01", 50.0);

        let record = matrix.record("A001", "2025-02-01").unwrap();
        assert_eq!(overlay.display_planned(record), 50.0);
        assert_eq!(record.planned, 10.0);

        let other = matrix.record("B002", "2025-02-01").unwrap();
        assert_eq!(overlay.display_planned(other), 3.0);
    }

    #[test]
    fn test_successful_save_clears_and_refetches() {
        let matrix = matrix();
        let mut overlay = EditOverlay::new();
        overlay.set("A001", "2025-02-01", 50.0);

        let updates = overlay.updates(&matrix, None);
        assert_eq!(
            updates,
            vec![PlannedSupplyUpdate {
                sku_id: "A001".into(),
                bucket_date: "2025-02-01".into(),
                warehouse_id: "WH01".into(),
                planned_supply: 50.0,
            }]
        );

        let results = updates.into_iter().map(|u| (u, Ok(()))).collect();
        let outcome = overlay.apply_results(results);
        assert_eq!(outcome, SaveOutcome::Saved { count: 1, held: 0 });
        assert!(outcome.needs_refetch());
        assert!(overlay.is_empty());
    }

    #[test]
    fn test_failed_update_stays_pending() {
        let matrix = matrix();
        let mut overlay = EditOverlay::new();
        overlay.set("A001", "2025-02-01", 50.0);
        overlay.set("B002", "2025-02-01", 7.0);

        let updates = overlay.updates(&matrix, Some("MAIN"));
        assert_eq!(updates[1].warehouse_id, "MAIN");

        let error = ApiError::Http {
            status: 500,
            detail: "boom".into(),
        };
        let results = vec![
            (updates[0].clone(), Ok(())),
            (updates[1].clone(), Err(error.clone())),
        ];
        let outcome = overlay.apply_results(results);
        assert_eq!(
            outcome,
            SaveOutcome::Failed {
                saved: 1,
                failed: 1,
                error
            }
        );
        assert!(outcome.needs_refetch());
        assert_eq!(overlay.len(), 1);
        assert_eq!(overlay.get("B002", "2025-02-01"), Some(7.0));
    }

    #[test]
    fn test_edit_for_missing_cell_is_skipped() {
        let mut overlay = EditOverlay::new();
        overlay.set("Z999", "2025-02-01", 1.0);
        assert!(overlay.updates(&matrix(), None).is_empty());
        assert_eq!(overlay.apply_results(vec![]), SaveOutcome::Nothing);
    }

    #[test]
    fn test_edits_outside_narrowed_window_survive_save() {
        let records = vec![
            RollingRecord {
                sku_id: "A001".into(),
                bucket_date: "2025-01-06".into(),
                warehouse_id: Some("WH01".into()),
                ..Default::default()
            },
            RollingRecord {
                sku_id: "A001".into(),
                bucket_date: "2025-03-03".into(),
                warehouse_id: Some("WH01".into()),
                ..Default::default()
            },
        ];
        let mut overlay = EditOverlay::new();
        overlay.set("A001", "2025-01-06", 5.0);
        overlay.set("A001", "2025-03-03", 8.0);

        let january = RollingMatrix::build(&records, &DateWindow::new("2025-01-01", "2025-01-31"));
        assert_eq!(overlay.outside(&january), 1);
        let updates = overlay.updates(&january, None);
        assert_eq!(updates.len(), 1);

        let outcome = overlay.apply_results(updates.into_iter().map(|u| (u, Ok(()))).collect());
        assert_eq!(outcome, SaveOutcome::Saved { count: 1, held: 1 });
        assert_eq!(overlay.get("A001", "2025-01-06"), None);
        assert_eq!(overlay.get("A001", "2025-03-03"), Some(8.0));

        // widening the window again sends the held edit
        let full = RollingMatrix::build(&records, &DateWindow::default());
        assert_eq!(overlay.outside(&full), 0);
        let updates = overlay.updates(&full, None);
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].bucket_date, "2025-03-03");
    }

    #[test]
    fn test_edits_for_filtered_out_sku_survive_save() {
        let mut overlay = EditOverlay::new();
        overlay.set("A001", "2025-02-01", 50.0);
        overlay.set("C003", "2025-02-01", 4.0);

        let updates = overlay.updates(&matrix(), None);
        let outcome = overlay.apply_results(updates.into_iter().map(|u| (u, Ok(()))).collect());
        assert_eq!(outcome, SaveOutcome::Saved { count: 1, held: 1 });
        assert!(outcome.needs_refetch());
        assert_eq!(overlay.get("C003", "2025-02-01"), Some(4.0));
    }

    #[test]
    fn test_month_planned_includes_pending_edits() {
        let records = vec![
            RollingRecord {
                sku_id: "A001".into(),
                bucket_date: "2025-01-06".into(),
                planned: 10.0,
                ..Default::default()
            },
            RollingRecord {
                sku_id: "A001".into(),
                bucket_date: "2025-01-13".into(),
                planned: 20.0,
                ..Default::default()
            },
        ];
        let matrix = RollingMatrix::build(&records, &DateWindow::default());
        let row = matrix.row("A001").unwrap();
        let mut overlay = EditOverlay::new();
        assert_eq!(overlay.month_planned(row, "2025-01"), 30.0);

        overlay.set("A001", "2025-01-13", 5.0);
        assert_eq!(overlay.month_planned(row, "2025-01"), 15.0);
        assert_eq!(row.month("2025-01").unwrap().planned, 30.0);
        assert_eq!(overlay.month_planned(row, "2025-02"), 0.0);
    }

    #[test]
    fn test_set_input() {
        let mut overlay = EditOverlay::new();
        overlay.set_input("A001", "2025-02-01", "12,5").unwrap();
        assert_eq!(overlay.get("A001", "2025-02-01"), Some(12.5));
        assert!(overlay.set_input("A001", "2025-02-01", "-1").is_err());
        overlay.set_input("A001", "2025-02-01", " ").unwrap();
        assert!(overlay.is_empty());
    }
}
