pub mod session;

pub use session::{LoginError, Session};
