use crate::domain::a002_cart::context::CartContext;
use crate::shared::icons::icon;
use contracts::domain::a002_cart::CartLine;
use contracts::shared::format::format_price;
use leptos::prelude::*;

#[component]
pub fn CartItem(line: CartLine, cart: CartContext) -> impl IntoView {
    let id = line.product_id;
    // Количество читаем из сигнала: строка в <For> не пересоздаётся при смене quantity
    let quantity = move || cart.state().with(|s| s.quantity_of(id));
    let current = move || {
        let quantity = cart.state().with_untracked(|s| s.quantity_of(id));
        i64::try_from(quantity).unwrap_or(i64::MAX)
    };

    view! {
        <div class="cart-item">
            <div class="cart-item__glyph">{line.glyph.clone()}</div>
            <div class="cart-item__details">
                <h4>{line.title.clone()}</h4>
                <p>{format!("{} each", format_price(line.price))}</p>
            </div>
            <div class="cart-item__quantity">
                <button
                    class="button button--ghost"
                    aria-label="Decrease"
                    on:click=move |_| cart.set_quantity(id, current() - 1)
                >
                    "−"
                </button>
                <span>{quantity}</span>
                <button
                    class="button button--ghost"
                    aria-label="Increase"
                    on:click=move |_| cart.set_quantity(id, current().saturating_add(1))
                >
                    "+"
                </button>
            </div>
            <button class="button button--danger" on:click=move |_| cart.remove(id)>
                {icon("trash")}
                " Remove"
            </button>
        </div>
    }
}
