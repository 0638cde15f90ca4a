use super::cart_item::CartItem;
use crate::domain::a002_cart::context::CartContext;
use contracts::domain::a002_cart::CartLine;
use contracts::shared::format::{format_price, items_label};
use leptos::prelude::*;

#[component]
pub fn CartSidebar(
    cart: CartContext,
    #[prop(into)]
    is_open: Signal<bool>,
    on_close: Callback<()>,
) -> impl IntoView {
    let lines = move || cart.state().with(|s| s.lines().to_vec());
    let is_empty = move || cart.state().with(|s| s.is_empty());
    let total = move || format_price(cart.total_price());

    view! {
        <Show when=move || is_open.get()>
            <div class="cart-overlay" on:click=move |_| on_close.run(())></div>
            <aside class="cart-sidebar">
                <div class="cart-sidebar__header">
                    <div>
                        <h2>"🛒 Shopping Cart"</h2>
                        <p>{move || items_label(cart.state().with(|s| s.line_count()))}</p>
                    </div>
                    <button
                        class="button button--ghost"
                        aria-label="Close cart"
                        on:click=move |_| on_close.run(())
                    >
                        "✕"
                    </button>
                </div>

                <div class="cart-sidebar__items">
                    <Show
                        when=move || !is_empty()
                        fallback=|| view! {
                            <div class="cart-sidebar__empty">
                                <div class="cart-sidebar__empty-glyph">"🛍️"</div>
                                <h3>"Your cart is empty"</h3>
                                <p>"Add some awesome products to get started!"</p>
                            </div>
                        }
                    >
                        <For
                            each=lines
                            key=|line| line.product_id
                            children=move |line: CartLine| view! { <CartItem line=line cart=cart /> }
                        />
                    </Show>
                </div>

                <Show when=move || !is_empty()>
                    <div class="cart-sidebar__footer">
                        <div class="cart-sidebar__total">
                            <span>"Total:"</span>
                            <span>{total}</span>
                        </div>
                        <div class="cart-sidebar__actions">
                            <button class="button button--secondary" on:click=move |_| cart.clear()>
                                "🗑️ Clear Cart"
                            </button>
                            <button
                                class="button button--success"
                                on:click=move |_| log::info!("checkout requested, total {}", total())
                            >
                                {move || format!("💳 Checkout ({})", total())}
                            </button>
                        </div>
                    </div>
                </Show>
            </aside>
        </Show>
    }
}
