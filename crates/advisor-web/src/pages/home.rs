//! Home Page

use advisor_core::SearchState;
use leptos::prelude::*;

use crate::api;
use crate::components::{FeatureCard, Header, RecentSearchList, ResultPanel};

#[component]
pub fn HomePage() -> impl IntoView {
    let state = RwSignal::new(SearchState::default());
    let loading = move || state.with(SearchState::is_loading);

    // Overlapping submissions are not sequenced; whichever settles last
    // owns the result.
    let submit = move || {
        let Some(pending) = state.try_update(SearchState::begin_submit).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let outcome = api::search(pending.text()).await;
            state.update(|s| s.settle(pending, outcome));
        });
    };

    view! {
        <Header />

        <section class="hero-section">
            <div class="hero-content">
                <h1>"Investment AI"</h1>
                <p>"Your AI-Powered Investment Assistant"</p>
                <div class="search-container">
                    <input
                        type="text"
                        class="search-input"
                        placeholder="Ask about investments, stocks, market trends..."
                        prop:value=move || state.with(|s| s.query().to_string())
                        on:input=move |ev| state.update(|s| s.set_query(event_target_value(&ev)))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                submit();
                            }
                        }
                    />
                    <button class="search-button" on:click=move |_| submit() disabled=loading>
                        {move || if loading() {
                            view! { <div class="spinner"></div> }.into_any()
                        } else {
                            view! { <span class="search-icon">"🔍"</span> }.into_any()
                        }}
                    </button>
                </div>
                <RecentSearchList state=state />
            </div>
        </section>

        <ResultPanel state=state />

        <section id="features" class="features-section">
            <h2>"Features"</h2>
            <div class="features-list">
                <FeatureCard
                    icon="📈"
                    title="Market Analysis"
                    description="Get the latest market insights and trends."
                />
                <FeatureCard
                    icon="💻"
                    title="Tech Outlook"
                    description="Understand the future of technology investments."
                />
                <FeatureCard
                    icon="🧱"
                    title="Portfolio Diversity"
                    description="Diversify your investments for better returns."
                />
                <FeatureCard
                    icon="🛡️"
                    title="Safe Investments"
                    description="Find safe investment options during market volatility."
                />
            </div>
        </section>

        <section id="about" class="about-section">
            <h2>"About Us"</h2>
            <p>
                "Investment AI is your trusted partner in making informed investment decisions using advanced AI technology."
            </p>
        </section>

        <section id="contact" class="contact-section">
            <h2>"Contact Us"</h2>
            <p>"Have questions? Reach out to us at contact@investmentai.com."</p>
        </section>

        <footer class="footer">
            <p>"© 2025 Investment AI. All rights reserved."</p>
        </footer>
    }
}
