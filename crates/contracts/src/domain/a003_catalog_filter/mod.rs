pub mod filter;

pub use filter::{filtered_products, CategoryFilter, FilterState};
