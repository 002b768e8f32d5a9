use crate::domain::common::{non_negative, optional, required, EntityForm};
use crate::shared::api::ApiError;
use crate::shared::csv_export::CsvExportable;
use crate::shared::data_table::TableRow;
use serde::{Deserialize, Serialize};

/// Supplier (`GET /api/data/vendors`), synced from the ERP partner list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub vendor_id: String,
    #[serde(default)]
    pub vendor_name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Average lead time in days.
    #[serde(default)]
    pub lead_time_avg: Option<f64>,
}

impl TableRow for Vendor {
    fn row_key(&self) -> String {
        self.vendor_id.clone()
    }
}

impl CsvExportable for Vendor {
    fn headers() -> Vec<&'static str> {
        vec!["vendor_id", "vendor_name", "address", "email", "phone", "lead_time_avg"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.vendor_id.clone(),
            self.vendor_name.clone(),
            self.address.clone().unwrap_or_default(),
            self.email.clone().unwrap_or_default(),
            self.phone.clone().unwrap_or_default(),
            self.lead_time_avg.map(|v| v.to_string()).unwrap_or_default(),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VendorForm {
    pub editing: Option<String>,
    pub vendor_id: String,
    pub vendor_name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub lead_time_avg: String,
}

impl VendorForm {
    pub fn for_edit(vendor: &Vendor) -> Self {
        Self {
            editing: Some(vendor.vendor_id.clone()),
            vendor_id: vendor.vendor_id.clone(),
            vendor_name: vendor.vendor_name.clone(),
            address: vendor.address.clone().unwrap_or_default(),
            email: vendor.email.clone().unwrap_or_default(),
            phone: vendor.phone.clone().unwrap_or_default(),
            lead_time_avg: vendor
                .lead_time_avg
                .map(|v| v.to_string())
                .unwrap_or_default(),
        }
    }
}

impl EntityForm for VendorForm {
    type Payload = Vendor;

    fn existing_key(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    fn to_payload(&self) -> Result<Vendor, ApiError> {
        let email = optional(&self.email);
        if let Some(e) = &email {
            if !e.contains('@') {
                return Err(ApiError::Validation("Email is not valid".into()));
            }
        }
        Ok(Vendor {
            vendor_id: required(&self.vendor_id, "Vendor ID")?,
            vendor_name: required(&self.vendor_name, "Vendor name")?,
            address: optional(&self.address),
            email,
            phone: optional(&self.phone),
            lead_time_avg: Some(non_negative(&self.lead_time_avg, "Lead time")?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_form_validation() {
        let mut form = VendorForm {
            vendor_id: "V01".into(),
            vendor_name: "Acme".into(),
            lead_time_avg: "7".into(),
            ..Default::default()
        };
        assert_eq!(form.to_payload().unwrap().lead_time_avg, Some(7.0));

        form.email = "not-an-email".into();
        assert!(matches!(form.to_payload(), Err(ApiError::Validation(_))));
    }
}
