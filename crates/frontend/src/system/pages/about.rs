use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_STATIC;
use leptos::prelude::*;

const UNIVERSITIES_API_HOME: &str = "http://universities.hipolabs.com";

#[component]
pub fn AboutPage() -> impl IntoView {
    let stack = [
        ("Leptos", "for building user interfaces"),
        ("gloo-net", "for fetching API data"),
        ("leptos_router", "for navigation between pages"),
    ];

    view! {
        <PageFrame page_id="about--static" category=PAGE_CAT_STATIC>
            <div class="page__header">
                <h1>"About This App"</h1>
            </div>
            <div class="page__content about">
                <p>
                    "Welcome to the " <span class="accent">"University Finder"</span> " app! "
                    "This application helps users search for universities around the world using the "
                    <a href=UNIVERSITIES_API_HOME target="_blank" rel="noopener noreferrer">
                        "Hipolabs Universities API"
                    </a>
                    "."
                </p>
                <p>
                    "Just enter a university name in the search box, and you'll get a list of matching "
                    "universities along with their countries and official websites."
                </p>
                <p>"This project is built using:"</p>
                <ul>
                    {stack.into_iter().map(|(name, purpose)| view! {
                        <li><span class="accent">{name}</span>" – "{purpose}</li>
                    }).collect_view()}
                </ul>
                <p class="about__credits">"Made with ❤️ by the UniFinder team"</p>
            </div>
        </PageFrame>
    }
}
