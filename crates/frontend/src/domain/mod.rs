pub mod a001_product;
pub mod a002_cart;
pub mod a003_catalog_filter;
pub mod a004_university;
pub mod a005_contact;
pub mod a006_session;
