//! Presidents Admin App
//!
//! Shell around the entity pages: tab bar, busy spinner and status line.

use leptos::prelude::*;

use crate::components::{BusySpinner, Page, PageTabs, PartyPage, PresidentPage, StatePage, StatusBar};
use crate::config::RestConfig;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let (current_page, set_current_page) = signal(Page::Presidents);

    // Provide context to all children
    let ctx = AppContext::new();
    provide_context(ctx);

    match RestConfig::from_document() {
        Ok(config) => log::info!("[APP] REST root {}", config.base()),
        Err(e) => log::error!("[APP] {}", e),
    }

    // Status line belongs to the page it was hovered on
    Effect::new(move |_| {
        let page = current_page.get();
        log::info!("[APP] Showing {:?}", page);
        ctx.set_status(String::new());
    });

    view! {
        <div class="app-layout">
            <PageTabs current_page=current_page set_current_page=set_current_page />
            <BusySpinner />

            <main class="main-content">
                <h1>{move || current_page.get().title()}</h1>
                {move || match current_page.get() {
                    Page::Parties => view! { <PartyPage /> }.into_any(),
                    Page::Presidents => view! { <PresidentPage /> }.into_any(),
                    Page::States => view! { <StatePage /> }.into_any(),
                }}
                <StatusBar />
            </main>
        </div>
    }
}
