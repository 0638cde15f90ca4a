use crate::domain::a001_product::{Category, Product};
use serde::{Deserialize, Serialize};

/// Значение селектора категории: "all" или конкретная категория
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn code(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.code(),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryFilter::All => "🛍️ All Categories",
            CategoryFilter::Only(category) => category.display_name(),
        }
    }

    /// Неизвестный код трактуется как "all"
    pub fn from_code(code: &str) -> Self {
        Category::from_code(code).map_or(CategoryFilter::All, CategoryFilter::Only)
    }

    /// Опции селектора в порядке отображения
    pub fn options() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::all().into_iter().map(CategoryFilter::Only))
            .collect()
    }

    pub fn accepts(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search: String,
    pub category: CategoryFilter,
}

impl FilterState {
    pub fn new(search: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            search: search.into(),
            category,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Сужает ли хоть один критерий список
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.category != CategoryFilter::All
    }

    pub fn matches(&self, product: &Product) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = product.title.to_lowercase().contains(&needle)
            || product.description.to_lowercase().contains(&needle);
        matches_search && self.category.accepts(product.category)
    }
}

/// Подпоследовательность `products`, прошедшая фильтр. Порядок сохраняется.
pub fn filtered_products(products: &[Product], filter: &FilterState) -> Vec<Product> {
    products
        .iter()
        .filter(|product| filter.matches(product))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::{demo_catalog, Rating};

    fn sample() -> Vec<Product> {
        vec![
            Product::new(
                1,
                "A",
                10.0,
                "Electronics gadget",
                Category::Electronics,
                "📱",
                Rating { rate: 4.0, count: 1 },
            ),
            Product::new(
                2,
                "B",
                20.0,
                "Desk accessory",
                Category::Accessories,
                "🖱️",
                Rating { rate: 4.0, count: 1 },
            ),
        ]
    }

    #[test]
    fn test_default_filter_returns_everything_in_order() {
        let catalog = demo_catalog();
        assert_eq!(filtered_products(&catalog, &FilterState::default()), catalog);
    }

    #[test]
    fn test_search_matches_description_case_insensitively() {
        let products = sample();
        let result = filtered_products(&products, &FilterState::new("electro", CategoryFilter::All));
        assert_eq!(result, vec![products[0].clone()]);

        let result = filtered_products(&products, &FilterState::new("DESK", CategoryFilter::All));
        assert_eq!(result, vec![products[1].clone()]);
    }

    #[test]
    fn test_search_without_hits_is_empty() {
        let catalog = demo_catalog();
        let result = filtered_products(&catalog, &FilterState::new("zzz-no-such", CategoryFilter::All));
        assert!(result.is_empty());
    }

    #[test]
    fn test_category_and_search_are_combined() {
        let catalog = demo_catalog();
        let filter = FilterState::new("wireless", CategoryFilter::Only(Category::Accessories));
        let titles: Vec<_> = filtered_products(&catalog, &filter)
            .into_iter()
            .map(|p| p.title)
            .collect();
        // AirPods Pro тоже "wireless", но это electronics
        assert_eq!(titles, vec!["Wireless Mouse".to_string()]);
    }

    #[test]
    fn test_category_only_preserves_order() {
        let catalog = demo_catalog();
        let filter = FilterState::new("", CategoryFilter::Only(Category::Accessories));
        let ids: Vec<_> = filtered_products(&catalog, &filter)
            .into_iter()
            .map(|p| p.id.value())
            .collect();
        assert_eq!(ids, vec![6, 7, 8]);
    }

    #[test]
    fn test_category_filter_codes() {
        assert_eq!(CategoryFilter::from_code("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_code("electronics"),
            CategoryFilter::Only(Category::Electronics)
        );
        assert_eq!(CategoryFilter::from_code("garbage"), CategoryFilter::All);
        let codes: Vec<_> = CategoryFilter::options().iter().map(|o| o.code()).collect();
        assert_eq!(codes, vec!["all", "electronics", "accessories"]);
    }

    #[test]
    fn test_reset_and_is_active() {
        let mut filter = FilterState::new("mac", CategoryFilter::Only(Category::Electronics));
        assert!(filter.is_active());
        filter.reset();
        assert!(!filter.is_active());
        assert_eq!(filter, FilterState::default());
    }
}
