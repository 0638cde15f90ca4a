/// Утилиты для списков: подсветка совпадений и поле поиска с debounce
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Разбивает `text` на отрезки `(фрагмент, совпал)` по вхождениям `filter`
/// без учёта регистра.
///
/// Сравнение идёт по символам: нижний регистр может менять длину символа в
/// байтах, поэтому границы отрезков всегда берутся из исходного текста.
pub fn match_segments<'a>(text: &'a str, filter: &str) -> Vec<(&'a str, bool)> {
    let needle: Vec<char> = filter.trim().to_lowercase().chars().collect();
    if needle.is_empty() {
        return vec![(text, false)];
    }

    // (символ в нижнем регистре, начало и конец исходного символа в байтах)
    let lowered: Vec<(char, usize, usize)> = text
        .char_indices()
        .flat_map(|(start, c)| {
            let end = start + c.len_utf8();
            c.to_lowercase().map(move |lower| (lower, start, end))
        })
        .collect();

    let mut parts = Vec::new();
    let mut last_pos = 0;
    let mut i = 0;
    while i + needle.len() <= lowered.len() {
        let window = &lowered[i..i + needle.len()];
        if !window.iter().zip(&needle).all(|((lower, _, _), n)| lower == n) {
            i += 1;
            continue;
        }

        let match_start = window[0].1;
        let match_end = window[needle.len() - 1].2;
        if match_start > last_pos {
            parts.push((&text[last_pos..match_start], false));
        }
        parts.push((&text[match_start..match_end], true));
        last_pos = match_end;

        // Совпадение захватывает исходный символ целиком
        i += needle.len();
        while i < lowered.len() && lowered[i].1 < match_end {
            i += 1;
        }
    }
    if last_pos < text.len() || parts.is_empty() {
        parts.push((&text[last_pos..], false));
    }
    parts
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let parts: Vec<AnyView> = match_segments(text, filter)
        .into_iter()
        .map(|(fragment, matched)| {
            let fragment = fragment.to_string();
            if matched {
                view! { <mark class="search-highlight">{fragment}</mark> }.into_any()
            } else {
                view! { <span>{fragment}</span> }.into_any()
            }
        })
        .collect();

    view! { <>{parts}</> }.into_any()
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Начальное значение поля
    #[prop(into)]
    initial: String,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Задержка перед вызовом `on_change`
    debounce_ms: u32,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(initial);

    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };

        // Отменяем предыдущий таймер если есть
        if let Some(timeout_id) = debounce_timeout.get_value() {
            window.clear_timeout_with_handle(timeout_id);
        }

        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            on_change.run(new_value.clone());
        }) as Box<dyn Fn()>);

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            debounce_ms as i32,
        ) {
            Ok(timeout_id) => {
                closure.forget();
                debounce_timeout.set_value(Some(timeout_id));
            }
            Err(e) => log::error!("setTimeout failed: {:?}", e),
        }
    };

    let clear_filter = move |_| {
        if let (Some(window), Some(timeout_id)) = (web_sys::window(), debounce_timeout.get_value()) {
            window.clear_timeout_with_handle(timeout_id);
        }
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    handle_input_change(event_target_value(&ev));
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        class="search-input__clear"
                        on:click=clear_filter
                        title="Clear"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_segments_marks_every_hit() {
        assert_eq!(
            match_segments("USB-C Hub with usb 3.0", "usb"),
            vec![
                ("USB", true),
                ("-C Hub with ", false),
                ("usb", true),
                (" 3.0", false),
            ]
        );
    }

    #[test]
    fn test_match_segments_without_filter() {
        assert_eq!(match_segments("AirPods Pro", ""), vec![("AirPods Pro", false)]);
        assert_eq!(match_segments("AirPods Pro", "zzz"), vec![("AirPods Pro", false)]);
    }

    #[test]
    fn test_match_segments_whole_text() {
        assert_eq!(match_segments("Mouse", "mouse"), vec![("Mouse", true)]);
    }

    #[test]
    fn test_match_segments_case_mapping_changes_char_width() {
        // 'ẞ' в нижнем регистре короче на байт, 'İ' длиннее
        assert_eq!(match_segments("ẞİ", "i"), vec![("ẞ", false), ("İ", true)]);
        assert_eq!(match_segments("ẞİ", "ß"), vec![("ẞ", true), ("İ", false)]);
        assert_eq!(
            match_segments("Straẞe İstanbul", "i"),
            vec![("Straẞe ", false), ("İ", true), ("stanbul", false)]
        );
    }

    #[test]
    fn test_match_segments_non_ascii_title() {
        assert_eq!(
            match_segments("Чехол ЧЕХОЛ", "чехол"),
            vec![("Чехол", true), (" ", false), ("ЧЕХОЛ", true)]
        );
    }
}
