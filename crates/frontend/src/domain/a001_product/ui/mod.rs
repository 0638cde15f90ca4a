pub mod card;
pub mod grid;

pub use grid::ProductGrid;
