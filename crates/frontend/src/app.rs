use crate::domain::a002_cart::context::CartContext;
use crate::domain::a004_university::ui::page::UniversitySearchPage;
use crate::domain::a005_contact::ui::page::ContactPage;
use crate::domain::a006_session::ui::login::LoginPage;
use crate::layout::Shell;
use crate::shared::config::load_app_config;
use crate::system::pages::about::AboutPage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::pages::store::StorePage;
use contracts::domain::a006_session::Session;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Корень приложения.
///
/// Всё общее состояние (корзина, сессия, конфигурация) создаётся здесь и
/// передаётся страницам явно через props.
#[component]
pub fn App() -> impl IntoView {
    let config = load_app_config();
    let cart = CartContext::new();
    let session = RwSignal::new(Session::new());

    let universities = config.universities.clone();
    let store = config.store.clone();

    view! {
        <Router>
            <Shell session=session cart=cart>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route
                        path=path!("/")
                        view=move || view! { <UniversitySearchPage config=universities.clone() /> }
                    />
                    <Route
                        path=path!("/store")
                        view=move || view! { <StorePage cart=cart config=store.clone() /> }
                    />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/contact") view=ContactPage />
                    <Route path=path!("/login") view=move || view! { <LoginPage session=session /> } />
                </Routes>
            </Shell>
        </Router>
    }
}
