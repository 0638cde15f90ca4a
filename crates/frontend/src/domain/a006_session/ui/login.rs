use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_FORM;
use contracts::domain::a006_session::Session;
use leptos::prelude::*;

/// Вход (без сервера) и счётчик сессии.
///
/// `session` приходит от родителя; страница ничего не берёт из контекста.
#[component]
pub fn LoginPage(session: RwSignal<Session>) -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (error_message, set_error_message) = signal(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let name = username.get_untracked();
        match session.try_update(|s| s.login(&name)) {
            Some(Ok(())) => {
                log::info!("Submitted: {}", name.trim());
                set_error_message.set(None);
                set_username.set(String::new());
            }
            Some(Err(e)) => set_error_message.set(Some(format!("Login failed: {}", e))),
            None => {}
        }
    };

    view! {
        <PageFrame page_id="a006_session--form" category=PAGE_CAT_FORM>
            <div class="login-box">
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                {move || session.with(|s| s.user().map(str::to_string)).map(|user| view! {
                    <p class="login-box__status">"Signed in as " <strong>{user}</strong></p>
                })}

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            placeholder="Enter username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="button button--primary">"Login"</button>
                </form>

                <div class="session-counter">
                    <span>{move || format!("Counter: {}", session.with(|s| s.counter()))}</span>
                    <button class="button button--primary" on:click=move |_| session.update(|s| s.increment())>
                        "Increment Counter"
                    </button>
                    <button class="button button--danger" on:click=move |_| session.update(|s| s.decrement())>
                        "Decrement Counter"
                    </button>
                </div>
            </div>
        </PageFrame>
    }
}
