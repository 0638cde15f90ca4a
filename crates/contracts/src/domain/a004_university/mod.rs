pub mod dto;

pub use dto::{search_url, University, DEFAULT_QUERY};
