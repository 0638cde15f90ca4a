use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl ProductId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Category
// ============================================================================

/// Категории каталога (закрытый список)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Accessories,
}

impl Category {
    /// Код категории, совпадает с JSON-представлением
    pub fn code(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Accessories => "accessories",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Electronics => "📱 Electronics",
            Category::Accessories => "🎧 Accessories",
        }
    }

    pub fn all() -> Vec<Category> {
        vec![Category::Electronics, Category::Accessories]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "electronics" => Some(Category::Electronics),
            "accessories" => Some(Category::Accessories),
            _ => None,
        }
    }
}

// ============================================================================
// Product
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u32,
}

/// Позиция каталога. Неизменяема в течение сессии.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    #[serde(deserialize_with = "deserialize_price")]
    pub price: f64,
    pub description: String,
    pub category: Category,
    /// Глиф, который показывается вместо картинки
    #[serde(rename = "image")]
    pub glyph: String,
    pub rating: Rating,
}

impl Product {
    pub fn new(
        id: u32,
        title: &str,
        price: f64,
        description: &str,
        category: Category,
        glyph: &str,
        rating: Rating,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            title: title.to_string(),
            price: clamp_price(price),
            description: description.to_string(),
            category,
            glyph: glyph.to_string(),
            rating,
        }
    }
}

/// Цена не бывает отрицательной; NaN тоже превращается в 0
fn clamp_price(price: f64) -> f64 {
    price.max(0.0)
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(clamp_price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_codes_roundtrip() {
        for category in Category::all() {
            assert_eq!(Category::from_code(category.code()), Some(category));
        }
        assert_eq!(Category::from_code("books"), None);
    }

    #[test]
    fn test_product_json_shape() {
        let json = r#"{
            "id": 7,
            "title": "Wireless Mouse",
            "price": 79.99,
            "description": "Ergonomic wireless mouse",
            "category": "accessories",
            "image": "🖱️",
            "rating": { "rate": 4.2, "count": 134 }
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId(7));
        assert_eq!(product.category, Category::Accessories);
        assert_eq!(product.glyph, "🖱️");
        assert_eq!(product.rating.count, 134);
    }

    #[test]
    fn test_negative_price_is_clamped() {
        let p = Product::new(
            1,
            "Broken",
            -5.0,
            "",
            Category::Electronics,
            "?",
            Rating { rate: 0.0, count: 0 },
        );
        assert_eq!(p.price, 0.0);
    }

    #[test]
    fn test_negative_price_from_json_is_clamped() {
        let json = r#"{
            "id": 3,
            "title": "Broken",
            "price": -12.5,
            "description": "",
            "category": "electronics",
            "image": "?",
            "rating": { "rate": 0.0, "count": 0 }
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, 0.0);
    }
}
