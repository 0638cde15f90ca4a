use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer data-zone="footer" class="status-bar">
            <h3>"🏪 TechStore - Demo Leptos Application"</h3>
            <p>"Built with Leptos signals, explicit state handles and modern web standards"</p>
            <div class="status-bar__concepts">
                <strong>"Concepts: "</strong>
                "Props, Signals, Effects, Observer store, Routing, Event Handling"
            </div>
        </footer>
    }
}
