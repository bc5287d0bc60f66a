//! President Page
//!
//! President list and form. The state and party dropdowns are filled from
//! their own resources when the page loads.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::components::crud::{browser_api, Crud};
use crate::components::reference_select::ReferenceSelect;
use crate::components::row_actions::{RowAction, RowActions};
use crate::context::use_app_context;
use crate::models::Choice;
use crate::notify::AlertNotifier;
use crate::resources::{
    PartyResource, PresidentFields, PresidentResource, Resource, StateResource, NO_PARTY, NO_STATE,
};

#[component]
pub fn PresidentPage() -> impl IntoView {
    let crud = Crud::<PresidentResource>::new();
    let states = RwSignal::new(Vec::<Choice>::new());
    let parties = RwSignal::new(Vec::<Choice>::new());
    let firstname_input = NodeRef::<html::Input>::new();

    crud.refresh();
    load_choices::<StateResource>(states, |state| Choice::from(state));
    load_choices::<PartyResource>(parties, |party| Choice::from(party));

    let on_click = move |ev: web_sys::MouseEvent| match RowAction::from_event(&ev) {
        Some(RowAction::Edit(id)) => {
            if let Some(row) = crud.row(id) {
                let fields = PresidentFields::from_row(&row, &states.get_untracked(), &parties.get_untracked());
                if crud.begin_edit(id, fields) {
                    if let Some(input) = firstname_input.get_untracked() {
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
            <form id="frmPresident" on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                crud.submit();
            }>
                <fieldset prop:disabled=move || crud.is_busy()>
                    <legend>{move || if crud.is_editing() { "Edit President" } else { "Add President" }}</legend>
                    <label for="txtFirstname">"First Name"</label>
                    <input
                        type="text"
                        id="txtFirstname"
                        required
                        node_ref=firstname_input
                        prop:value=move || crud.fields.with(|f| f.firstname.clone())
                        on:input=move |ev| crud.fields.update(|f| f.firstname = event_target_value(&ev))
                    />
                    <label for="txtLastname">"Last Name"</label>
                    <input
                        type="text"
                        id="txtLastname"
                        required
                        prop:value=move || crud.fields.with(|f| f.lastname.clone())
                        on:input=move |ev| crud.fields.update(|f| f.lastname = event_target_value(&ev))
                    />
                    <label for="ctlState">"State"</label>
                    <ReferenceSelect
                        id="ctlState"
                        sentinel=NO_STATE
                        choices=states
                        value=Signal::derive(move || crud.fields.with(|f| f.state.clone()))
                        on_change=Callback::new(move |value: String| crud.fields.update(|f| f.state = value))
                    />
                    <label for="ctlParty">"Party"</label>
                    <ReferenceSelect
                        id="ctlParty"
                        sentinel=NO_PARTY
                        choices=parties
                        value=Signal::derive(move || crud.fields.with(|f| f.party.clone()))
                        on_change=Callback::new(move |value: String| crud.fields.update(|f| f.party = value))
                    />
                    <label for="txtInauguratedYear">"Inaugurated Year"</label>
                    <input
                        type="number"
                        id="txtInauguratedYear"
                        required
                        prop:value=move || crud.fields.with(|f| f.inaugurated_year.clone())
                        on:input=move |ev| crud.fields.update(|f| f.inaugurated_year = event_target_value(&ev))
                    />
                    <label for="txtYears">"Years in Office"</label>
                    <input
                        type="number"
                        id="txtYears"
                        required
                        min="0"
                        prop:value=move || crud.fields.with(|f| f.years.clone())
                        on:input=move |ev| crud.fields.update(|f| f.years = event_target_value(&ev))
                    />
                    <button type="submit">"Save"</button>
                </fieldset>
            </form>

            <table id="tblList">
                <thead>
                    <tr>
                        <th></th>
                        <th>"No."</th>
                        <th>"Name"</th>
                        <th>"State"</th>
                        <th>"Party"</th>
                        <th>"Inaugurated Year"</th>
                        <th>"Years in Office"</th>
                    </tr>
                </thead>
                <tbody on:click=on_click on:mouseover=on_mouseover>
                    <For
                        each=move || crud.rows.get()
                        key=|row| {
                            (
                                row.id,
                                row.firstname.clone(),
                                row.lastname.clone(),
                                row.state.clone(),
                                row.party.clone(),
                                row.inaugurated_year,
                                row.years,
                            )
                        }
                        children=move |row| {
                            let row_id = row.id;
                            let id = row_id.to_string();
                            let detail_id = id.clone();
                            let name = row.full_name();
                            let name_url = row.name_url();
                            let state_url = row.state_url();
                            let party_cell = row.party_url().map(|party_url| {
                                let party = row.party.clone().unwrap_or_default();
                                view! { <a href=party_url target="_blank">{party}</a> }
                            });
                            view! {
                                <tr>
                                    <RowActions id=row_id />
                                    <td class="id" data-action="detail" data-id=detail_id>{id}</td>
                                    <td><a href=name_url target="_blank">{name}</a></td>
                                    <td><a href=state_url target="_blank">{row.state}</a></td>
                                    <td>{party_cell}</td>
                                    <td>{row.inaugurated_year}</td>
                                    <td>{row.years}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </section>
    }
}

/// Fill a dropdown's choices from a resource list.
fn load_choices<R: Resource>(target: RwSignal<Vec<Choice>>, to_choice: fn(&R::Row) -> Choice) {
    let ctx = use_app_context();
    let guard = ctx.begin_request();
    spawn_local(async move {
        let _guard = guard;
        let Some(api) = browser_api() else { return };
        let rows = actions::load::<R, _>(&api, &AlertNotifier).await;
        let _ = target.try_set(rows.iter().map(to_choice).collect());
    });
}
