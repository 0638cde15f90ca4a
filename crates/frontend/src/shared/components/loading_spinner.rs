use leptos::prelude::*;

#[component]
pub fn LoadingSpinner(
    /// Подпись под индикатором
    #[prop(into)]
    label: String,
) -> impl IntoView {
    view! {
        <div class="loading-spinner">
            <div class="loading-spinner__circle"></div>
            <p class="loading-spinner__label">{label}</p>
        </div>
    }
}
