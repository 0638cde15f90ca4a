pub mod form;

pub use form::{ContactField, ContactFieldError, ContactForm, ContactSubmission};
