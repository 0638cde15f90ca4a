use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_STATIC;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageFrame page_id="not_found--static" category=PAGE_CAT_STATIC>
            <div class="page__header">
                <h1>"Page not found"</h1>
            </div>
            <div class="page__content">
                <A href="/">"Back to search"</A>
            </div>
        </PageFrame>
    }
}
