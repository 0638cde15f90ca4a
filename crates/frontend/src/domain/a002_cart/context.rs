use contracts::domain::a001_product::{Product, ProductId};
use contracts::domain::a002_cart::{CartState, CartStore, PendingAdds};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Handle корзины для компонентов.
///
/// `CartStore` владеет состоянием; подписка на store зеркалирует каждое
/// изменение в сигнал `state`, и всё отображение читает только его.
/// Handle копируемый и передаётся компонентам через props.
#[derive(Clone, Copy)]
pub struct CartContext {
    store: StoredValue<CartStore>,
    state: ReadSignal<CartState>,
    pending: RwSignal<PendingAdds>,
}

impl CartContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(CartState::new());
        let mut store = CartStore::new();
        store.subscribe(move |next| set_state.set(next.clone()));

        Self {
            store: StoredValue::new(store),
            state,
            pending: RwSignal::new(PendingAdds::new()),
        }
    }

    pub fn state(&self) -> ReadSignal<CartState> {
        self.state
    }

    pub fn add(&self, product: &Product) {
        log::debug!("cart: add {}", product.id);
        self.store.update_value(|store| store.add(product));
    }

    pub fn remove(&self, id: ProductId) {
        log::debug!("cart: remove {}", id);
        self.store.update_value(|store| store.remove(id));
    }

    pub fn set_quantity(&self, id: ProductId, quantity: i64) {
        log::debug!("cart: set quantity {} -> {}", id, quantity);
        self.store.update_value(|store| store.set_quantity(id, quantity));
    }

    pub fn clear(&self) {
        log::debug!("cart: clear");
        self.store.update_value(|store| store.clear());
    }

    pub fn total_price(&self) -> f64 {
        self.state.with(|s| s.total_price())
    }

    pub fn total_items(&self) -> u64 {
        self.state.with(|s| s.total_items())
    }

    pub fn is_adding(&self, id: ProductId) -> bool {
        self.pending.with(|p| p.is_pending(id))
    }

    /// Добавление с визуальным подтверждением: флаг "в процессе" держится
    /// `delay_ms`, затем товар попадает в корзину. Повторный вызов для того же
    /// товара, пока флаг стоит, игнорируется.
    pub fn add_with_ack(&self, product: Product, delay_ms: u32) {
        let id = product.id;
        let started = self
            .pending
            .try_update(|p| p.begin(id))
            .unwrap_or(false);
        if !started {
            log::debug!("cart: add {} already in flight, ignored", id);
            return;
        }

        let cart = *self;
        spawn_local(async move {
            if delay_ms > 0 {
                TimeoutFuture::new(delay_ms).await;
            }
            cart.add(&product);
            cart.pending.update(|p| p.finish(id));
        });
    }
}

impl Default for CartContext {
    fn default() -> Self {
        Self::new()
    }
}
