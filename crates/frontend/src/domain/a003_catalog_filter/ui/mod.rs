pub mod search_bar;

pub use search_bar::SearchBar;
