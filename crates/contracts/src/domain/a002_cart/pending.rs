use crate::domain::a001_product::ProductId;
use std::collections::HashSet;

/// Товары, для которых "добавить в корзину" сейчас в процессе.
///
/// Повторный клик по тому же товару, пока флаг стоит, игнорируется.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingAdds {
    in_flight: HashSet<ProductId>,
}

impl PendingAdds {
    pub fn new() -> Self {
        Self::default()
    }

    /// `false` — добавление этого товара уже идёт
    pub fn begin(&mut self, id: ProductId) -> bool {
        self.in_flight.insert(id)
    }

    pub fn finish(&mut self, id: ProductId) {
        self.in_flight.remove(&id);
    }

    pub fn is_pending(&self, id: ProductId) -> bool {
        self.in_flight.contains(&id)
    }
}
