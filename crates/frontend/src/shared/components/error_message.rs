use crate::shared::icons::icon;
use leptos::prelude::*;

/// Сообщение об ошибке с необязательной кнопкой повтора
#[component]
pub fn ErrorMessage(
    #[prop(into)]
    message: String,
    /// Если задан, показывается кнопка "Try Again"
    #[prop(optional)]
    on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="error-message" role="alert">
            <div class="error-message__glyph">"😕"</div>
            <p class="error-message__text">{message}</p>
            {on_retry.map(|retry| view! {
                <button class="button button--primary" on:click=move |_| retry.run(())>
                    {icon("refresh")}
                    " Try Again"
                </button>
            })}
        </div>
    }
}
