pub mod d400_home;
pub mod d401_purchasing_spend;

pub use d400_home::ui::HomeDashboard;
pub use d401_purchasing_spend::ui::PurchasingSpendDashboard;
