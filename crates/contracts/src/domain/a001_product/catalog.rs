//! Демонстрационный каталог TechStore.
//!
//! Каталог создаётся один раз при старте сессии и дальше не меняется.

use super::aggregate::{Category, Product, Rating};

pub fn demo_catalog() -> Vec<Product> {
    vec![
        Product::new(
            1,
            "iPhone 14 Pro",
            999.99,
            "Latest Apple smartphone with advanced camera system and A16 Bionic chip",
            Category::Electronics,
            "📱",
            Rating { rate: 4.5, count: 150 },
        ),
        Product::new(
            2,
            "MacBook Air M2",
            1199.99,
            "Lightweight laptop with M2 chip for professional work and creative tasks",
            Category::Electronics,
            "💻",
            Rating { rate: 4.8, count: 89 },
        ),
        Product::new(
            3,
            "AirPods Pro",
            249.99,
            "Wireless earbuds with active noise cancellation and spatial audio",
            Category::Electronics,
            "🎧",
            Rating { rate: 4.6, count: 203 },
        ),
        Product::new(
            4,
            "iPad Pro 12.9",
            799.99,
            "Professional tablet with M2 chip for creative work and productivity",
            Category::Electronics,
            "📱",
            Rating { rate: 4.7, count: 156 },
        ),
        Product::new(
            5,
            "Apple Watch Series 8",
            399.99,
            "Smart watch with health monitoring, fitness tracking, and crash detection",
            Category::Electronics,
            "⌚",
            Rating { rate: 4.4, count: 98 },
        ),
        Product::new(
            6,
            "Gaming Headset Pro",
            129.99,
            "High-quality headset with 7.1 surround sound for gaming and streaming",
            Category::Accessories,
            "🎮",
            Rating { rate: 4.3, count: 67 },
        ),
        Product::new(
            7,
            "Wireless Mouse",
            79.99,
            "Ergonomic wireless mouse with precision tracking and long battery life",
            Category::Accessories,
            "🖱️",
            Rating { rate: 4.2, count: 134 },
        ),
        Product::new(
            8,
            "USB-C Hub",
            49.99,
            "Multi-port USB-C hub with HDMI, USB 3.0, and card reader support",
            Category::Accessories,
            "🔌",
            Rating { rate: 4.1, count: 87 },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_demo_catalog_ids_are_unique() {
        let catalog = demo_catalog();
        let ids: HashSet<_> = catalog.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), catalog.len());
        assert_eq!(catalog.len(), 8);
    }

    #[test]
    fn test_demo_catalog_categories() {
        let catalog = demo_catalog();
        let accessories = catalog
            .iter()
            .filter(|p| p.category == Category::Accessories)
            .count();
        assert_eq!(accessories, 3);
    }
}
