use crate::domain::a004_university::api::search_universities;
use crate::shared::components::{ErrorMessage, LoadingSpinner};
use crate::shared::list_utils::SearchInput;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a004_university::University;
use contracts::shared::config::UniversitiesConfig;
use contracts::shared::request_sequence::RequestSequence;
use leptos::prelude::*;
use leptos::task::spawn_local;

const NETWORK_ERROR: &str = "Could not load universities. Check your connection and try again.";

#[component]
pub fn UniversitySearchPage(config: UniversitiesConfig) -> impl IntoView {
    let query = RwSignal::new(config.default_query.clone());
    let (universities, set_universities) = signal(Vec::<University>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (clicks, set_clicks) = signal(0u32);

    let api_base = StoredValue::new(config.api_base.clone());
    let sequence = StoredValue::new(RequestSequence::new());

    let run_search = move |name: String| {
        let Some(ticket) = sequence.try_update_value(|s| s.next()) else {
            return;
        };
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let base = api_base.get_value();
            let result = search_universities(&base, &name).await;

            // Ответ на устаревший запрос не должен перетирать свежий
            if !sequence.with_value(|s| s.is_current(ticket)) {
                log::debug!("universities: stale response for '{}' dropped", name);
                return;
            }

            match result {
                Ok(list) => {
                    log::debug!("universities: {} results for '{}'", list.len(), name);
                    set_universities.set(list);
                }
                Err(e) => {
                    log::error!("Error fetching universities: {}", e);
                    set_universities.set(Vec::new());
                    set_error.set(Some(NETWORK_ERROR.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    // Новый запрос на каждое изменение query
    Effect::new(move |_| {
        run_search(query.get());
    });

    view! {
        <PageFrame page_id="a004_university--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h1>"🎓 University Finder"</h1>
                <div class="click-counter">
                    <span>{move || clicks.get()}</span>
                    <button
                        class="button button--ghost"
                        on:click=move |_| {
                            log::debug!("counter clicked");
                            set_clicks.update(|c| *c += 1);
                        }
                    >
                        "clicked"
                    </button>
                </div>
            </div>

            <div class="page__content">
                <SearchInput
                    initial=config.default_query
                    on_change=Callback::new(move |value: String| query.set(value))
                    debounce_ms=config.debounce_ms
                    placeholder="Enter a university name"
                />

                {move || {
                    if let Some(message) = error.get() {
                        return view! {
                            <ErrorMessage
                                message=message
                                on_retry=Callback::new(move |_| run_search(query.get_untracked()))
                            />
                        }.into_any();
                    }
                    if loading.get() && universities.with(Vec::is_empty) {
                        return view! { <LoadingSpinner label="Searching universities..." /> }.into_any();
                    }
                    view! {
                        <div class="university-list">
                            <For
                                each=move || universities.get().into_iter().enumerate()
                                key=|(index, uni)| (*index, uni.name.clone())
                                children=move |(_, uni): (usize, University)| view! {
                                    <UniversityCard university=uni />
                                }
                            />
                        </div>
                    }.into_any()
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn UniversityCard(university: University) -> impl IntoView {
    view! {
        <div class="university-card">
            <h2>{university.name.clone()}</h2>
            <p class="university-card__country">{university.country.clone()}</p>
            <div class="university-card__links">
                {university.web_pages.into_iter().map(|web| {
                    let href = web.clone();
                    view! {
                    <p>
                        <a href=href target="_blank" rel="noopener noreferrer">{web}</a>
                    </p>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
