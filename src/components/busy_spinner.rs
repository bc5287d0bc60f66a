//! Busy Spinner
//!
//! Shown while any request is in flight.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn BusySpinner() -> impl IntoView {
    let ctx = use_app_context();
    view! {
        <div id="spinner" class="spinner" style:display=move || if ctx.is_busy() { "block" } else { "none" }>
            <img src="images/spinner.gif" alt="Loading..." />
        </div>
    }
}
