use super::card::ProductCard;
use crate::domain::a002_cart::context::CartContext;
use contracts::domain::a001_product::Product;
use leptos::prelude::*;

#[component]
pub fn ProductGrid(
    #[prop(into)]
    products: Signal<Vec<Product>>,
    cart: CartContext,
    add_delay_ms: u32,
    #[prop(into)]
    search: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="product-grid">
            <For
                each=move || products.get()
                key=|product| product.id
                children=move |product: Product| {
                    view! {
                        <ProductCard
                            product=product
                            cart=cart
                            add_delay_ms=add_delay_ms
                            search=search
                        />
                    }
                }
            />
        </div>
    }
}
