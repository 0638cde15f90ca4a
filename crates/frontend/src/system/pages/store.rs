//! TechStore — витрина с фильтром и корзиной.

use crate::domain::a001_product::api::fetch_products;
use crate::domain::a001_product::ui::ProductGrid;
use crate::domain::a002_cart::context::CartContext;
use crate::domain::a002_cart::ui::{CartIcon, CartSidebar};
use crate::domain::a003_catalog_filter::ui::SearchBar;
use crate::shared::components::{ErrorMessage, LoadingSpinner};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_product::Product;
use contracts::domain::a003_catalog_filter::{filtered_products, CategoryFilter, FilterState};
use contracts::shared::config::StoreConfig;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn StorePage(cart: CartContext, config: StoreConfig) -> impl IntoView {
    let (products, set_products) = signal(Vec::<Product>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let filter = RwSignal::new(FilterState::default());
    let (is_cart_open, set_cart_open) = signal(false);

    let load_delay = config.products_load_delay_ms;
    let add_delay = config.add_to_cart_delay_ms;

    let load = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match fetch_products(load_delay).await {
                Ok(list) => {
                    log::debug!("products loaded: {}", list.len());
                    set_products.set(list);
                }
                Err(e) => {
                    log::error!("Error fetching products: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    // Загрузить каталог при монтировании
    Effect::new(move |_| {
        load();
    });

    let filtered = Memo::new(move |_| {
        products.with(|list| filter.with(|f| filtered_products(list, f)))
    });
    let search = Signal::derive(move || filter.with(|f| f.search.clone()));

    let toggle_cart = Callback::new(move |_| set_cart_open.update(|open| *open = !*open));
    let close_cart = Callback::new(move |_| set_cart_open.set(false));

    view! {
        <PageFrame page_id="a001_product--list" category=PAGE_CAT_LIST class="techstore">
            <header class="page__header techstore__header">
                <div>
                    <h1>"🏪 TechStore"</h1>
                    <p>"Your one-stop tech destination ✨"</p>
                </div>
                <CartIcon cart=cart on_toggle=toggle_cart />
            </header>

            <div class="page__content">
                <SearchBar filter=filter />

                {move || {
                    if loading.get() {
                        return view! { <LoadingSpinner label="Loading awesome products..." /> }.into_any();
                    }
                    if let Some(message) = error.get() {
                        return view! {
                            <ErrorMessage message=message on_retry=Callback::new(move |_| load()) />
                        }.into_any();
                    }
                    view! {
                        <ResultsInfo filter=filter shown=filtered total=products />
                        <Show
                            when=move || filtered.with(|list| !list.is_empty())
                            fallback=move || view! { <NoResults filter=filter /> }
                        >
                            <ProductGrid
                                products=filtered
                                cart=cart
                                add_delay_ms=add_delay
                                search=search
                            />
                        </Show>
                    }.into_any()
                }}
            </div>

            <CartSidebar cart=cart is_open=is_cart_open on_close=close_cart />
        </PageFrame>
    }
}

/// "Showing N of M products" + активная категория
#[component]
fn ResultsInfo(
    filter: RwSignal<FilterState>,
    #[prop(into)]
    shown: Signal<Vec<Product>>,
    #[prop(into)]
    total: Signal<Vec<Product>>,
) -> impl IntoView {
    view! {
        <div class="results-info">
            <span>
                {move || format!(
                    "Showing {} of {} products",
                    shown.with(Vec::len),
                    total.with(Vec::len)
                )}
                {move || filter.with(|f| {
                    (!f.search.is_empty()).then(|| format!(" for \"{}\"", f.search))
                })}
            </span>
            {move || match filter.with(|f| f.category) {
                CategoryFilter::All => None,
                selected => Some(view! {
                    <span class="badge badge--primary">{selected.display_name()}</span>
                }),
            }}
        </div>
    }
}

#[component]
fn NoResults(filter: RwSignal<FilterState>) -> impl IntoView {
    view! {
        <div class="no-results">
            <div class="no-results__glyph">"🔍"</div>
            <h3>"No products found"</h3>
            <p>"Try adjusting your search terms or browse all categories"</p>
            <button class="button button--primary" on:click=move |_| filter.update(|f| f.reset())>
                "🔄 Clear Filters"
            </button>
        </div>
    }
}
