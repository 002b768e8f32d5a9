use crate::shared::csv_export::CsvExportable;
use crate::shared::data_table::TableRow;
use serde::{Deserialize, Serialize};

/// Customer (`GET /api/data/customers`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub misa_code: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl TableRow for Customer {
    fn row_key(&self) -> String {
        self.customer_id.clone()
    }
}

impl CsvExportable for Customer {
    fn headers() -> Vec<&'static str> {
        vec![
            "customer_id",
            "misa_code",
            "customer_name",
            "address",
            "phone",
            "email",
            "updated_at",
        ]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.customer_id.clone(),
            self.misa_code.clone().unwrap_or_default(),
            self.customer_name.clone(),
            self.address.clone().unwrap_or_default(),
            self.phone.clone().unwrap_or_default(),
            self.email.clone().unwrap_or_default(),
            self.updated_at.clone().unwrap_or_default(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::csv_export::build_csv_for;

    #[test]
    fn test_customer_export_columns() {
        let customers = vec![Customer {
            customer_id: "C1".into(),
            customer_name: "Hanoi Mart, Ltd".into(),
            misa_code: Some("KH001".into()),
            ..Default::default()
        }];
        let csv = build_csv_for(&customers).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("\"customer_id\",\"misa_code\",\"customer_name\",\"address\",\"phone\",\"email\",\"updated_at\"")
        );
        assert_eq!(
            lines.next(),
            Some("\"C1\",\"KH001\",\"Hanoi Mart, Ltd\",\"\",\"\",\"\",\"\"")
        );
    }
}
