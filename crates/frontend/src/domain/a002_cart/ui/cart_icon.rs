use crate::domain::a002_cart::context::CartContext;
use contracts::shared::format::cart_badge;
use leptos::prelude::*;

#[component]
pub fn CartIcon(cart: CartContext, on_toggle: Callback<()>) -> impl IntoView {
    view! {
        <button
            class="cart-icon"
            aria-label="Toggle cart"
            on:click=move |_| on_toggle.run(())
        >
            "🛒"
            {move || cart_badge(cart.total_items()).map(|text| view! {
                <span class="cart-icon__badge">{text}</span>
            })}
        </button>
    }
}
