use contracts::domain::a004_university::{search_url, University};
use gloo_net::http::Request;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UniversityApiError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Поиск университетов по названию
pub async fn search_universities(
    api_base: &str,
    name: &str,
) -> Result<Vec<University>, UniversityApiError> {
    let url = search_url(api_base, name);
    log::debug!("universities: GET {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| UniversityApiError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(UniversityApiError::Status(response.status()));
    }

    response
        .json::<Vec<University>>()
        .await
        .map_err(|e| UniversityApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(UniversityApiError::Status(503).to_string(), "HTTP error: 503");
        assert_eq!(
            UniversityApiError::Request("offline".into()).to_string(),
            "Request failed: offline"
        );
    }
}
