//! CartStore — владелец `CartState` с явной подпиской на изменения.
//!
//! Подписчик получает ссылку на новое состояние после каждого перехода,
//! который действительно изменил корзину. Переходы-пустышки (удаление
//! отсутствующего товара и т.п.) подписчиков не будят.

use super::state::{CartAction, CartState};
use crate::domain::a001_product::{Product, ProductId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&CartState) + Send + Sync>;

#[derive(Default)]
pub struct CartStore {
    state: CartState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CartState {
        &self.state
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&CartState) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Возвращает `false`, если подписки с таким id нет
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    pub fn dispatch(&mut self, action: CartAction) {
        if self.state.apply(action) {
            for (_, listener) in &self.listeners {
                listener(&self.state);
            }
        }
    }

    pub fn add(&mut self, product: &Product) {
        self.dispatch(CartAction::AddItem(product.clone()));
    }

    pub fn remove(&mut self, id: ProductId) {
        self.dispatch(CartAction::RemoveItem(id));
    }

    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) {
        self.dispatch(CartAction::UpdateQuantity { id, quantity });
    }

    pub fn clear(&mut self) {
        self.dispatch(CartAction::ClearCart);
    }

    pub fn total_price(&self) -> f64 {
        self.state.total_price()
    }

    pub fn total_items(&self) -> u64 {
        self.state.total_items()
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
