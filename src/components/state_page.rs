//! State Page

use leptos::html;
use leptos::prelude::*;

use crate::components::crud::Crud;
use crate::components::row_actions::{RowAction, RowActions};
use crate::resources::{StateFields, StateResource};

#[component]
pub fn StatePage() -> impl IntoView {
    let crud = Crud::<StateResource>::new();
    let abbr_input = NodeRef::<html::Input>::new();

    crud.refresh();

    let on_click = move |ev: web_sys::MouseEvent| match RowAction::from_event(&ev) {
        Some(RowAction::Edit(id)) => {
            if let Some(state) = crud.row(id) {
                if crud.begin_edit(id, StateFields::from(&state)) {
                    if let Some(input) = abbr_input.get_untracked() {
                        let _ = input.focus();
                    }
                }
            }
        }
        Some(RowAction::Delete(id)) => crud.delete(id),
        _ => {}
    };
    let on_mouseover = move |ev: web_sys::MouseEvent| {
        if let Some(RowAction::Detail(id)) = RowAction::from_event(&ev) {
            crud.show_detail(id);
        }
    };

    view! {
        <section class="entity-page">
            <form id="frmState" on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                crud.submit();
            }>
                <fieldset prop:disabled=move || crud.is_busy()>
                    <legend>{move || if crud.is_editing() { "Edit State" } else { "Add State" }}</legend>
                    <label for="txtName">"Name"</label>
                    <input
                        type="text"
                        id="txtName"
                        required
                        prop:disabled=move || crud.is_editing()
                        prop:value=move || crud.fields.with(|f| f.name.clone())
                        on:input=move |ev| crud.fields.update(|f| f.name = event_target_value(&ev))
                    />
                    <label for="txtAbbr">"Abbreviation"</label>
                    <input
                        type="text"
                        id="txtAbbr"
                        required
                        maxlength="2"
                        node_ref=abbr_input
                        prop:value=move || crud.fields.with(|f| f.abbreviation.clone())
                        on:input=move |ev| crud.fields.update(|f| f.abbreviation = event_target_value(&ev))
                    />
                    <button type="submit">"Save"</button>
                </fieldset>
            </form>

            <table id="tblList">
                <thead>
                    <tr>
                        <th></th>
                        <th>"Name"</th>
                        <th>"Abbreviation"</th>
                    </tr>
                </thead>
                <tbody on:click=on_click on:mouseover=on_mouseover>
                    <For
                        each=move || crud.rows.get()
                        key=|state| (state.id, state.name.clone(), state.abbreviation.clone())
                        children=move |state| {
                            let row_id = state.id;
                            let id = row_id.to_string();
                            view! {
                                <tr>
                                    <RowActions id=row_id />
                                    <td class="id" data-action="detail" data-id=id>{state.name}</td>
                                    <td>{state.abbreviation}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}
