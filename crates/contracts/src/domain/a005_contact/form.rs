use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactFieldError {
    #[error("{} is required", .0.label())]
    Required(ContactField),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

impl ContactFieldError {
    pub fn field(&self) -> ContactField {
        match self {
            ContactFieldError::Required(field) => *field,
            ContactFieldError::InvalidEmail(_) => ContactField::Email,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Принятое сообщение
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub form: ContactForm,
    pub submitted_at: DateTime<Utc>,
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn validate(&self) -> Vec<ContactFieldError> {
        let mut errors = Vec::new();
        for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
            if self.get(field).trim().is_empty() {
                errors.push(ContactFieldError::Required(field));
            }
        }
        let email = self.email.trim();
        if !email.is_empty() && !looks_like_email(email) {
            errors.push(ContactFieldError::InvalidEmail(email.to_string()));
        }
        errors
    }

    /// Валидирует и сбрасывает форму. При ошибке форма не меняется.
    pub fn submit(&mut self) -> Result<ContactSubmission, Vec<ContactFieldError>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        let form = std::mem::take(self);
        Ok(ContactSubmission {
            form,
            submitted_at: Utc::now(),
        })
    }
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !value.contains(char::is_whitespace)
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = ContactForm::default().validate();
        let fields: Vec<_> = errors.iter().map(|e| e.field()).collect();
        assert_eq!(
            fields,
            vec![ContactField::Name, ContactField::Email, ContactField::Message]
        );
    }

    #[test]
    fn test_email_format() {
        assert!(looks_like_email("a@b.c"));
        assert!(!looks_like_email("a@b"));
        assert!(!looks_like_email("@b.c"));
        assert!(!looks_like_email("a b@c.d"));
        assert!(!looks_like_email("a@@b.c"));
    }

    #[test]
    fn test_submit_resets_form() {
        let mut form = filled();
        let submission = form.submit().unwrap();
        assert_eq!(submission.form, filled());
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_invalid_submit_keeps_input() {
        let mut form = filled();
        form.set(ContactField::Email, "not-an-email".to_string());
        let errors = form.submit().unwrap_err();
        assert_eq!(
            errors,
            vec![ContactFieldError::InvalidEmail("not-an-email".to_string())]
        );
        assert_eq!(form.get(ContactField::Email), "not-an-email");
        assert_eq!(errors[0].to_string(), "'not-an-email' is not a valid email address");
    }
}
