use serde::{Deserialize, Serialize};

/// Запрос по умолчанию при открытии страницы поиска
pub const DEFAULT_QUERY: &str = "mora";

/// Запись справочника университетов (Hipolabs Universities API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct University {
    pub name: String,
    pub country: String,
    pub web_pages: Vec<String>,
    #[serde(default)]
    pub alpha_two_code: Option<String>,
    #[serde(default)]
    pub domains: Vec<String>,
    #[serde(rename = "state-province", default)]
    pub state_province: Option<String>,
}

impl University {
    /// Основной сайт (первый в списке)
    pub fn primary_web_page(&self) -> Option<&str> {
        self.web_pages.first().map(String::as_str)
    }
}

/// `GET {base}/search?name=<query>`
pub fn search_url(base: &str, name: &str) -> String {
    format!(
        "{}/search?name={}",
        base.trim_end_matches('/'),
        urlencoding::encode(name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_encodes_query() {
        assert_eq!(
            search_url("http://universities.hipolabs.com", "mora"),
            "http://universities.hipolabs.com/search?name=mora"
        );
        assert_eq!(
            search_url("http://universities.hipolabs.com/", "São Paulo & co"),
            "http://universities.hipolabs.com/search?name=S%C3%A3o%20Paulo%20%26%20co"
        );
    }

    #[test]
    fn test_decode_api_response() {
        let json = r#"[
            {
                "domains": ["mrt.ac.lk"],
                "alpha_two_code": "LK",
                "country": "Sri Lanka",
                "web_pages": ["http://www.mrt.ac.lk/", "https://uom.lk/"],
                "name": "University of Moratuwa",
                "state-province": null
            },
            {
                "country": "Nowhere",
                "web_pages": ["http://example.edu/"],
                "name": "Minimal"
            }
        ]"#;
        let list: Vec<University> = serde_json::from_str(json).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].primary_web_page(), Some("http://www.mrt.ac.lk/"));
        assert_eq!(list[0].alpha_two_code.as_deref(), Some("LK"));
        assert_eq!(list[0].state_province, None);
        assert!(list[1].domains.is_empty());
    }
}
