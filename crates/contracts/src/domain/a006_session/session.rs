use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("username must not be empty")]
    EmptyUsername,
}

/// Состояние сессии пользователя: логин и демонстрационный счётчик.
///
/// Передаётся компонентам явно, глобального контекста нет.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    user: Option<String>,
    counter: i64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn login(&mut self, username: &str) -> Result<(), LoginError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(LoginError::EmptyUsername);
        }
        self.user = Some(username.to_string());
        Ok(())
    }

    pub fn logout(&mut self) {
        self.user = None;
    }

    pub fn counter(&self) -> i64 {
        self.counter
    }

    pub fn increment(&mut self) {
        self.counter = self.counter.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        self.counter = self.counter.saturating_sub(1);
    }
}
