//! Status Bar
//!
//! One-line summary of the record last hovered.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn StatusBar() -> impl IntoView {
    let ctx = use_app_context();
    view! {
        <p class="status-bar">{move || ctx.status.get()}</p>
    }
}
