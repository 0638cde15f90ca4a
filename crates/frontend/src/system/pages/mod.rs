pub mod about;
pub mod not_found;
pub mod store;
