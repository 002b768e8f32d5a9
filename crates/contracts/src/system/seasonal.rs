use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::shared::period::MONTH_NAMES;

/// Per-month demand multiplier and lead-time delays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalFactor {
    pub month: u32,
    #[serde(default = "one")]
    pub demand_multiplier: f64,
    #[serde(default)]
    pub supplier_delay_days: i64,
    #[serde(default)]
    pub shipping_delay_days: i64,
    #[serde(default)]
    pub description: String,
}

fn one() -> f64 {
    1.0
}

impl SeasonalFactor {
    pub fn neutral(month: u32) -> Self {
        Self {
            month,
            demand_multiplier: 1.0,
            supplier_delay_days: 0,
            shipping_delay_days: 0,
            description: String::new(),
        }
    }

    pub fn month_label(&self) -> String {
        let name = MONTH_NAMES
            .get(self.month.wrapping_sub(1) as usize)
            .copied()
            .unwrap_or("");
        format!("{} - {}", self.month, name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonalField {
    DemandMultiplier,
    SupplierDelayDays,
    ShippingDelayDays,
    Description,
}

/// Unsaved rows keyed by month; only these are sent on save.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeasonalEdits {
    edits: BTreeMap<u32, SeasonalFactor>,
}

impl SeasonalEdits {
    /// Row as currently displayed: the edit, else the fetched row.
    pub fn current(&self, factors: &[SeasonalFactor], month: u32) -> SeasonalFactor {
        self.edits
            .get(&month)
            .or_else(|| factors.iter().find(|f| f.month == month))
            .cloned()
            .unwrap_or_else(|| SeasonalFactor::neutral(month))
    }

    /// Numeric fields fall back to 0 on unparsable input.
    pub fn edit(&mut self, factors: &[SeasonalFactor], month: u32, field: SeasonalField, input: &str) {
        let mut row = self.current(factors, month);
        let input = input.trim();
        match field {
            SeasonalField::DemandMultiplier => row.demand_multiplier = input.parse().unwrap_or(0.0),
            SeasonalField::SupplierDelayDays => row.supplier_delay_days = input.parse().unwrap_or(0),
            SeasonalField::ShippingDelayDays => row.shipping_delay_days = input.parse().unwrap_or(0),
            SeasonalField::Description => row.description = input.to_string(),
        }
        self.edits.insert(month, row);
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn clear(&mut self) {
        self.edits.clear();
    }

    /// Body of `PUT /api/planning/settings/seasonal/update`.
    pub fn to_payload(&self) -> Vec<SeasonalFactor> {
        self.edits.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edits_only_touch_changed_months() {
        let factors = vec![SeasonalFactor::neutral(1), SeasonalFactor::neutral(2)];
        let mut edits = SeasonalEdits::default();
        edits.edit(&factors, 2, SeasonalField::DemandMultiplier, "1.3");
        edits.edit(&factors, 2, SeasonalField::SupplierDelayDays, "x");
        edits.edit(&factors, 2, SeasonalField::Description, " Tet ");

        let payload = edits.to_payload();
        assert_eq!(payload.len(), 1);
        assert_eq!(payload[0].month, 2);
        assert_eq!(payload[0].demand_multiplier, 1.3);
        assert_eq!(payload[0].supplier_delay_days, 0);
        assert_eq!(payload[0].description, "Tet");
        assert_eq!(edits.current(&factors, 1), factors[0]);
        assert_eq!(factors[1].month_label(), "2 - February");
    }
}
