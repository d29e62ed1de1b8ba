//! UI Components

use advisor_core::SearchState;
use leptos::prelude::*;

/// Site header with in-page navigation
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <a href="/" class="logo">"Investment AI"</a>
            <nav class="nav">
                <a href="#features">"Features"</a>
                <a href="#about">"About"</a>
                <a href="#contact">"Contact"</a>
            </nav>
        </header>
    }
}

/// One tile in the features grid
#[component]
pub fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="feature-item">
            <span class="feature-icon">{icon}</span>
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}

/// Raw completion text, shown once a query has settled
#[component]
pub fn ResultPanel(state: RwSignal<SearchState>) -> impl IntoView {
    let result = move || state.with(|s| s.result().map(str::to_string));

    view! {
        <Show when=move || result().is_some()>
            <section class="results-section">
                <h2>"Results"</h2>
                <div class="results-content">{move || result().unwrap_or_default()}</div>
            </section>
        </Show>
    }
}

/// Clickable shortcuts that copy a past query back into the search box
#[component]
pub fn RecentSearchList(state: RwSignal<SearchState>) -> impl IntoView {
    view! {
        <div class="recent-searches">
            <h3>"Recent Searches"</h3>
            <ul>
                <For
                    each=move || state.with(|s| s.recent_searches().as_slice().to_vec())
                    key=|search| search.clone()
                    children=move |search| {
                        let label = search.clone();
                        view! {
                            <li>
                                <button
                                    class="recent-item"
                                    on:click=move |_| state.update(|s| s.select_recent_search(&search))
                                >
                                    {label}
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
        </div>
    }
}
