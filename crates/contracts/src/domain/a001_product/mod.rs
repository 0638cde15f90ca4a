pub mod aggregate;
pub mod catalog;

pub use aggregate::{Category, Product, ProductId, Rating};
pub use catalog::demo_catalog;
