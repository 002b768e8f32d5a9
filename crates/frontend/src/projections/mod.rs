pub mod p901_sales;
pub mod p902_purchases;
pub mod p903_inventory;
pub mod p904_snapshots;
pub mod p905_rolling_inventory;
