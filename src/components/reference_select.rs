//! Reference Select
//!
//! Dropdown over a lookup list with a blank sentinel option first.

use leptos::prelude::*;

use crate::models::Choice;

#[component]
pub fn ReferenceSelect(
    #[prop(into)] id: String,
    /// Value of the blank first option
    sentinel: &'static str,
    #[prop(into)] choices: Signal<Vec<Choice>>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            id=id
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value=sentinel prop:selected=move || value.get() == sentinel>" "</option>
            <For
                each=move || choices.get()
                key=|choice| (choice.id, choice.label.clone())
                children=move |choice| {
                    let option_value = choice.id.to_string();
                    let selected_value = option_value.clone();
                    view! {
                        <option
                            value=option_value
                            prop:selected=move || value.get() == selected_value
                        >
                            {choice.label}
                        </option>
                    }
                }
            />
        </select>
    }
}
