use crate::domain::a001_product::{Product, ProductId};
use serde::{Deserialize, Serialize};

/// Строка корзины. Существует только пока `quantity >= 1`.
///
/// Отображаемые поля товара копируются в строку в момент добавления,
/// цена для итогов берётся отсюда.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub title: String,
    pub price: f64,
    pub glyph: String,
    pub quantity: u64,
}

impl CartLine {
    fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            title: product.title.clone(),
            price: product.price,
            glyph: product.glyph.clone(),
            quantity: 1,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Переходы корзины (закрытый набор)
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    AddItem(Product),
    RemoveItem(ProductId),
    UpdateQuantity { id: ProductId, quantity: i64 },
    ClearCart,
}

/// Каноническое состояние корзины.
///
/// Инварианты: не больше одной строки на товар, у каждой строки quantity >= 1,
/// порядок строк = порядок первого добавления.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    lines: Vec<CartLine>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == id)
    }

    pub fn quantity_of(&self, id: ProductId) -> u64 {
        self.line(id).map_or(0, |line| line.quantity)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Количество различных строк (не единиц товара)
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Сумма количеств по всем строкам, насыщается на `u64::MAX`
    pub fn total_items(&self) -> u64 {
        self.lines
            .iter()
            .fold(0u64, |total, line| total.saturating_add(line.quantity))
    }

    pub fn total_price(&self) -> f64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Применяет переход. Возвращает `true`, если состояние изменилось.
    pub fn apply(&mut self, action: CartAction) -> bool {
        match action {
            CartAction::AddItem(product) => {
                match self.lines.iter_mut().find(|l| l.product_id == product.id) {
                    Some(line) => line.quantity = line.quantity.saturating_add(1),
                    None => self.lines.push(CartLine::from_product(&product)),
                }
                true
            }
            CartAction::RemoveItem(id) => {
                let before = self.lines.len();
                self.lines.retain(|line| line.product_id != id);
                self.lines.len() != before
            }
            CartAction::UpdateQuantity { id, quantity } if quantity <= 0 => {
                self.apply(CartAction::RemoveItem(id))
            }
            CartAction::UpdateQuantity { id, quantity } => {
                // quantity > 0, в u64 помещается без потерь
                let quantity = quantity.unsigned_abs();
                match self.lines.iter_mut().find(|l| l.product_id == id) {
                    Some(line) if line.quantity != quantity => {
                        line.quantity = quantity;
                        true
                    }
                    // Неизвестный товар: строка не создаётся
                    _ => false,
                }
            }
            CartAction::ClearCart => {
                let changed = !self.lines.is_empty();
                self.lines.clear();
                changed
            }
        }
    }
}

/// Чистая функция перехода: старое состояние + действие -> новое состояние
pub fn reduce(state: &CartState, action: CartAction) -> CartState {
    let mut next = state.clone();
    next.apply(action);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::{Category, Rating};

    fn product(id: u32, category: Category, price: f64) -> Product {
        Product::new(
            id,
            &format!("Product {}", id),
            price,
            "",
            category,
            "📦",
            Rating { rate: 4.0, count: 1 },
        )
    }

    #[test]
    fn test_repeated_add_keeps_single_line() {
        let p = product(1, Category::Electronics, 10.0);
        let mut state = CartState::new();
        for _ in 0..5 {
            state.apply(CartAction::AddItem(p.clone()));
        }
        assert_eq!(state.line_count(), 1);
        assert_eq!(state.total_items(), 5);
        assert_eq!(state.quantity_of(p.id), 5);
    }

    #[test]
    fn test_add_then_remove_restores_previous_state() {
        let a = product(1, Category::Electronics, 10.0);
        let b = product(2, Category::Accessories, 20.0);

        let empty = CartState::new();
        let added = reduce(&empty, CartAction::AddItem(a.clone()));
        assert_eq!(reduce(&added, CartAction::RemoveItem(a.id)), empty);

        let with_a = reduce(&empty, CartAction::AddItem(a));
        let with_ab = reduce(&with_a, CartAction::AddItem(b.clone()));
        assert_eq!(reduce(&with_ab, CartAction::RemoveItem(b.id)), with_a);
    }

    #[test]
    fn test_non_positive_quantity_equals_remove() {
        let a = product(1, Category::Electronics, 10.0);
        let b = product(2, Category::Accessories, 20.0);
        let mut base = CartState::new();
        base.apply(CartAction::AddItem(a.clone()));
        base.apply(CartAction::AddItem(a.clone()));
        base.apply(CartAction::AddItem(b));

        let removed = reduce(&base, CartAction::RemoveItem(a.id));
        for q in [0, -1, -2, -100, i64::MIN] {
            let updated = reduce(&base, CartAction::UpdateQuantity { id: a.id, quantity: q });
            assert_eq!(updated, removed, "quantity {}", q);
        }
    }

    #[test]
    fn test_update_quantity_on_unknown_product_is_noop() {
        let a = product(1, Category::Electronics, 10.0);
        let mut state = CartState::new();
        state.apply(CartAction::AddItem(a));
        let before = state.clone();

        let changed = state.apply(CartAction::UpdateQuantity {
            id: ProductId(42),
            quantity: 3,
        });
        assert!(!changed);
        assert_eq!(state, before);
    }

    #[test]
    fn test_remove_unknown_product_is_noop() {
        let mut state = CartState::new();
        assert!(!state.apply(CartAction::RemoveItem(ProductId(9))));
        assert!(state.is_empty());
    }

    #[test]
    fn test_update_quantity_has_no_upper_bound() {
        let a = product(1, Category::Electronics, 1.5);
        let mut state = CartState::new();
        state.apply(CartAction::AddItem(a.clone()));
        state.apply(CartAction::UpdateQuantity {
            id: a.id,
            quantity: 1_000,
        });
        assert_eq!(state.total_items(), 1_000);
        assert_eq!(state.total_price(), 1_500.0);
    }

    #[test]
    fn test_update_quantity_keeps_values_above_u32() {
        let a = product(1, Category::Electronics, 2.0);
        let b = product(2, Category::Accessories, 3.0);
        let mut state = CartState::new();
        state.apply(CartAction::AddItem(a.clone()));
        state.apply(CartAction::AddItem(b.clone()));

        assert!(state.apply(CartAction::UpdateQuantity {
            id: a.id,
            quantity: 5_000_000_000,
        }));
        assert_eq!(state.quantity_of(a.id), 5_000_000_000);
        assert_eq!(state.total_items(), 5_000_000_001);
        assert_eq!(state.total_price(), 10_000_000_003.0);
    }

    #[test]
    fn test_totals_stay_consistent_at_max_quantity() {
        let a = product(1, Category::Electronics, 1.0);
        let b = product(2, Category::Accessories, 2.0);
        let c = product(3, Category::Accessories, 4.0);
        let mut state = CartState::new();
        for p in [&a, &b, &c] {
            state.apply(CartAction::AddItem(p.clone()));
        }

        state.apply(CartAction::UpdateQuantity {
            id: a.id,
            quantity: i64::MAX,
        });
        assert_eq!(state.quantity_of(a.id), i64::MAX as u64);
        assert_eq!(state.total_items(), i64::MAX as u64 + 2);

        state.apply(CartAction::UpdateQuantity {
            id: b.id,
            quantity: i64::MAX,
        });
        state.apply(CartAction::UpdateQuantity {
            id: c.id,
            quantity: i64::MAX,
        });
        assert_eq!(state.line_count(), 3);
        assert_eq!(state.total_items(), u64::MAX);

        let expected = i64::MAX as f64 * 7.0;
        assert_eq!(state.total_price(), expected);
        assert!(state.total_price().is_finite());

        // Повторная установка того же значения не меняет состояние
        assert!(!state.apply(CartAction::UpdateQuantity {
            id: a.id,
            quantity: i64::MAX,
        }));
    }

    #[test]
    fn test_totals_on_empty_cart_are_zero() {
        let state = CartState::new();
        assert_eq!(state.total_items(), 0);
        assert_eq!(state.total_price(), 0.0);
    }

    #[test]
    fn test_clear_resets_totals() {
        let mut state = CartState::new();
        state.apply(CartAction::AddItem(product(1, Category::Electronics, 10.0)));
        state.apply(CartAction::AddItem(product(2, Category::Accessories, 20.0)));
        assert!(state.apply(CartAction::ClearCart));
        assert_eq!(state.total_items(), 0);
        assert_eq!(state.total_price(), 0.0);
        assert!(!state.apply(CartAction::ClearCart));
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let a = product(1, Category::Electronics, 10.0);
        let b = product(2, Category::Accessories, 20.0);
        let mut state = CartState::new();
        state.apply(CartAction::AddItem(b.clone()));
        state.apply(CartAction::AddItem(a.clone()));
        state.apply(CartAction::AddItem(b.clone()));
        let ids: Vec<_> = state.lines().iter().map(|l| l.product_id).collect();
        assert_eq!(ids, vec![b.id, a.id]);
    }
}
