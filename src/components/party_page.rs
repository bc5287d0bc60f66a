//! Party Page
//!
//! Party list with inline create/edit form.

use leptos::html;
use leptos::prelude::*;

use crate::components::crud::Crud;
use crate::components::row_actions::{RowAction, RowActions};
use crate::resources::{PartyFields, PartyResource};

#[component]
pub fn PartyPage() -> impl IntoView {
    let crud = Crud::<PartyResource>::new();
    let founded_input = NodeRef::<html::Input>::new();

    crud.refresh();

    let on_click = move |ev: web_sys::MouseEvent| match RowAction::from_event(&ev) {
        Some(RowAction::Edit(id)) => {
            if let Some(party) = crud.row(id) {
                // name is the identity, only the years may change
                if crud.begin_edit(id, PartyFields::from(&party)) {
                    if let Some(input) = founded_input.get_untracked() {
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
            <form id="frmParty" on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                crud.submit();
            }>
                <fieldset prop:disabled=move || crud.is_busy()>
                    <legend>{move || if crud.is_editing() { "Edit Party" } else { "Add Party" }}</legend>
                    <label for="txtName">"Name"</label>
                    <input
                        type="text"
                        id="txtName"
                        required
                        prop:disabled=move || crud.is_editing()
                        prop:value=move || crud.fields.with(|f| f.name.clone())
                        on:input=move |ev| crud.fields.update(|f| f.name = event_target_value(&ev))
                    />
                    <label for="txtFoundedYear">"Founded Year"</label>
                    <input
                        type="number"
                        id="txtFoundedYear"
                        required
                        node_ref=founded_input
                        prop:value=move || crud.fields.with(|f| f.founded_year.clone())
                        on:input=move |ev| crud.fields.update(|f| f.founded_year = event_target_value(&ev))
                    />
                    <label for="txtEndYear">"End Year"</label>
                    <input
                        type="number"
                        id="txtEndYear"
                        prop:value=move || crud.fields.with(|f| f.end_year.clone())
                        on:input=move |ev| crud.fields.update(|f| f.end_year = event_target_value(&ev))
                    />
                    <button type="submit">"Save"</button>
                </fieldset>
            </form>

            <table id="tblList">
                <thead>
                    <tr>
                        <th></th>
                        <th>"Name"</th>
                        <th>"Founded Year"</th>
                        <th>"End Year"</th>
                    </tr>
                </thead>
                <tbody on:click=on_click on:mouseover=on_mouseover>
                    <For
                        each=move || crud.rows.get()
                        key=|party| (party.id, party.name.clone(), party.founded_year, party.end_year)
                        children=move |party| {
                            let row_id = party.id;
                            let id = row_id.to_string();
                            view! {
                                <tr>
                                    <RowActions id=row_id />
                                    <td class="id" data-action="detail" data-id=id>{party.name.clone()}</td>
                                    <td>{party.founded_year}</td>
                                    <td>{party.end_year_cell()}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}
