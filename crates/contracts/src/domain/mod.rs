pub mod a001_product;
pub mod a002_unit;
pub mod a003_product_group;
pub mod a004_warehouse;
pub mod a005_vendor;
pub mod a006_customer;
pub mod a007_partner_group;
pub mod common;
