//! Page Tab Bar
//!
//! Switches between the party, president and state pages.

use leptos::prelude::*;

use crate::context::use_app_context;

/// Entity page shown in the main area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Parties,
    Presidents,
    States,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Parties, Page::Presidents, Page::States];

    pub fn title(self) -> &'static str {
        match self {
            Page::Parties => "Political Parties",
            Page::Presidents => "Presidents",
            Page::States => "States",
        }
    }
}

#[component]
pub fn PageTabs(current_page: ReadSignal<Page>, set_current_page: WriteSignal<Page>) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="page-tab-bar">
            {Page::ALL.iter().map(|&page| {
                let is_active = move || current_page.get() == page;
                view! {
                    <button
                        class=move || if is_active() { "page-tab active" } else { "page-tab" }
                        prop:disabled=move || ctx.is_busy()
                        on:click=move |_| {
                            if !ctx.is_busy_now() {
                                set_current_page.set(page);
                            }
                        }
                    >
                        {page.title()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
