use crate::domain::a002_cart::context::CartContext;
use crate::shared::list_utils::highlight_matches;
use contracts::domain::a001_product::Product;
use contracts::shared::format::format_price;
use leptos::prelude::*;

#[component]
pub fn ProductCard(
    product: Product,
    cart: CartContext,
    /// Задержка подтверждения "Adding..."
    add_delay_ms: u32,
    /// Текущий поисковый запрос, для подсветки
    #[prop(into)]
    search: Signal<String>,
) -> impl IntoView {
    let id = product.id;
    let is_adding = move || cart.is_adding(id);

    let title = product.title.clone();
    let description = product.description.clone();
    let to_add = product.clone();

    view! {
        <div class="product-card">
            <div class="product-card__glyph">{product.glyph.clone()}</div>
            <h3 class="product-card__title">
                {move || highlight_matches(&title, &search.get())}
            </h3>
            <p class="product-card__description">
                {move || highlight_matches(&description, &search.get())}
            </p>
            <div class="product-card__meta">
                <span class="product-card__price">{format_price(product.price)}</span>
                <div class="product-card__rating">
                    <span>"⭐"</span>
                    <span class="product-card__rate">{product.rating.rate}</span>
                    <span class="product-card__count">{format!("({})", product.rating.count)}</span>
                </div>
            </div>
            <button
                class="button button--primary product-card__add"
                disabled=is_adding
                on:click=move |_| cart.add_with_ack(to_add.clone(), add_delay_ms)
            >
                {move || if is_adding() { "⏳ Adding..." } else { "🛒 Add to Cart" }}
            </button>
        </div>
    }
}
