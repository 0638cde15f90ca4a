use contracts::domain::a001_product::{demo_catalog, Product};
use gloo_timers::future::TimeoutFuture;

/// Загрузить каталог.
///
/// Сети нет: каталог встроенный, задержка имитирует запрос.
pub async fn fetch_products(delay_ms: u32) -> Result<Vec<Product>, String> {
    if delay_ms > 0 {
        TimeoutFuture::new(delay_ms).await;
    }
    let products = demo_catalog();
    if products.is_empty() {
        return Err("Failed to fetch products. Please try again later.".to_string());
    }
    Ok(products)
}
