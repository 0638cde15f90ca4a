pub mod footer;
pub mod navbar;

use crate::domain::a002_cart::context::CartContext;
use contracts::domain::a006_session::Session;
use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |                Navbar                    |
/// +------------------------------------------+
/// |               (routes)                   |
/// +------------------------------------------+
/// |                Footer                    |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(session: RwSignal<Session>, cart: CartContext, children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <navbar::Navbar session=session cart=cart />
            <main class="app-main">
                {children()}
            </main>
            <footer::Footer />
        </div>
    }
}
