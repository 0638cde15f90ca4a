pub mod error_message;
pub mod loading_spinner;

pub use error_message::ErrorMessage;
pub use loading_spinner::LoadingSpinner;
