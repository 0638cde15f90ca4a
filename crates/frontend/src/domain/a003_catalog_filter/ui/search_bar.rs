use contracts::domain::a003_catalog_filter::{CategoryFilter, FilterState};
use leptos::prelude::*;

/// Поиск по названию/описанию и выбор категории.
///
/// Фильтр пересчитывается на каждое нажатие клавиши, без debounce: каталог
/// маленький и локальный.
#[component]
pub fn SearchBar(filter: RwSignal<FilterState>) -> impl IntoView {
    view! {
        <div class="search-bar">
            <h3 class="search-bar__title">"🔍 Find Your Perfect Tech"</h3>
            <div class="search-bar__controls">
                <input
                    type="text"
                    class="search-bar__input"
                    placeholder="Search by name or description..."
                    prop:value=move || filter.with(|f| f.search.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        filter.update(|f| f.search = value);
                    }
                />
                <select
                    class="search-bar__select"
                    prop:value=move || filter.with(|f| f.category.code())
                    on:change=move |ev| {
                        let category = CategoryFilter::from_code(&event_target_value(&ev));
                        filter.update(|f| f.category = category);
                    }
                >
                    {CategoryFilter::options().into_iter().map(|option| view! {
                        <option value=option.code()>{option.display_name()}</option>
                    }).collect_view()}
                </select>
            </div>
        </div>
    }
}
