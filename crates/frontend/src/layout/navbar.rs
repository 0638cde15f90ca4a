use crate::domain::a002_cart::context::CartContext;
use crate::shared::icons;
use contracts::domain::a006_session::Session;
use contracts::shared::format::cart_badge;
use leptos::prelude::*;
use leptos_router::components::A;

/// Статический список ссылок: (путь, заголовок)
const LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/store", "Store"),
    ("/about", "About"),
    ("/contact", "Contact Us"),
];

#[component]
pub fn Navbar(session: RwSignal<Session>, cart: CartContext) -> impl IntoView {
    let badge = move || cart_badge(cart.total_items());

    view! {
        <nav class="main-nav-bar">
            <div class="main-nav-bar__brand">
                <A href="/">"UniFinder"</A>
            </div>
            <ul class="main-nav-bar__links">
                {LINKS.iter().map(|(href, title)| {
                    view! {
                        <li><A href=*href>{*title}</A></li>
                    }
                }).collect_view()}
            </ul>
            <div class="main-nav-bar__actions">
                <span class="main-nav-bar__cart">
                    <A href="/store">
                        {icons::icon("cart")}
                        {move || badge().map(|text| view! { <span class="badge badge--primary">{text}</span> })}
                    </A>
                </span>
                {move || match session.with(|s| s.user().map(str::to_string)) {
                    Some(user) => view! {
                        <span class="main-nav-bar__user">{user}</span>
                        <button
                            class="button button--ghost"
                            on:click=move |_| {
                                log::info!("logout");
                                session.update(|s| s.logout());
                            }
                        >
                            "Logout"
                        </button>
                    }.into_any(),
                    None => view! { <A href="/login">"Login"</A> }.into_any(),
                }}
            </div>
        </nav>
    }
}
