//! Форматирование производных значений корзины для отображения

/// Цена с двумя знаками после запятой: `$1234.50`
pub fn format_price(value: f64) -> String {
    format!("${:.2}", value)
}

/// Текст бейджа на иконке корзины. `None` — бейдж скрыт.
pub fn cart_badge(total_items: u64) -> Option<String> {
    match total_items {
        0 => None,
        n if n > 99 => Some("99+".to_string()),
        n => Some(n.to_string()),
    }
}

pub fn items_label(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{} items", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(40.0), "$40.00");
        assert_eq!(format_price(999.99 * 2.0), "$1999.98");
    }

    #[test]
    fn test_cart_badge() {
        assert_eq!(cart_badge(0), None);
        assert_eq!(cart_badge(1).as_deref(), Some("1"));
        assert_eq!(cart_badge(99).as_deref(), Some("99"));
        assert_eq!(cart_badge(100).as_deref(), Some("99+"));
        assert_eq!(cart_badge(u64::MAX).as_deref(), Some("99+"));
    }

    #[test]
    fn test_items_label() {
        assert_eq!(items_label(0), "0 items");
        assert_eq!(items_label(1), "1 item");
        assert_eq!(items_label(3), "3 items");
    }
}
