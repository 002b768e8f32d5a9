/// Master-data collection synced from the ERP via `POST /api/data/sync/{path}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncTarget {
    Products,
    Units,
    Groups,
    Warehouses,
    Partners,
}

/// Which configured delay to wait before re-fetching after a sync trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefetchDelay {
    Standard,
    Partner,
}

pub const CANCEL_SYNC_PATH: &str = "/api/data/sync/cancel";
pub const CANCEL_REQUESTED: &str = "Cancellation Requested.";

impl SyncTarget {
    pub fn path_segment(&self) -> &'static str {
        match self {
            SyncTarget::Products => "products",
            SyncTarget::Units => "units",
            SyncTarget::Groups => "groups",
            SyncTarget::Warehouses => "warehouses",
            SyncTarget::Partners => "partners",
        }
    }

    pub fn endpoint(&self) -> String {
        format!("/api/data/sync/{}", self.path_segment())
    }

    pub fn started_message(&self) -> &'static str {
        match self {
            SyncTarget::Products => "Sync Started for Products. This may take a while.",
            SyncTarget::Units => "Sync Started for Units.",
            SyncTarget::Groups => "Sync Started for Groups. Please refresh shortly.",
            SyncTarget::Warehouses => "Sync Started for Warehouses.",
            SyncTarget::Partners => "Sync Started for Partners (Vendors/Customers).",
        }
    }

    pub fn refetch_delay(&self) -> RefetchDelay {
        match self {
            SyncTarget::Partners => RefetchDelay::Partner,
            _ => RefetchDelay::Standard,
        }
    }
}

/// `type` tag of `POST /api/data/import/upload?type=...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportType {
    Products,
    Vendors,
    Customers,
    PartnerGroups,
    SalesDetails,
    PurchaseDetails,
}

pub const IMPORT_PATH: &str = "/api/data/import/upload";

/// Blank import file, opened in a new tab.
pub const INVENTORY_TEMPLATE_PATH: &str = "/api/data/template/inventory_manual";
pub const IMPORT_ACCEPT: &str = ".csv,.xlsx,.xls";

impl ImportType {
    pub fn tag(&self) -> &'static str {
        match self {
            ImportType::Products => "products",
            ImportType::Vendors => "vendors",
            ImportType::Customers => "customers",
            ImportType::PartnerGroups => "partner-groups",
            ImportType::SalesDetails => "sales_details",
            ImportType::PurchaseDetails => "purchase_details",
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{IMPORT_PATH}?type={}", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(SyncTarget::Groups.endpoint(), "/api/data/sync/groups");
        assert_eq!(SyncTarget::Partners.refetch_delay(), RefetchDelay::Partner);
        assert_eq!(SyncTarget::Units.refetch_delay(), RefetchDelay::Standard);
        assert_eq!(
            ImportType::PartnerGroups.endpoint(),
            "/api/data/import/upload?type=partner-groups"
        );
        assert_eq!(ImportType::SalesDetails.tag(), "sales_details");
    }
}
