//! Row Actions
//!
//! Edit/delete icons for a table row, and the delegated event decoding the
//! table body uses to route clicks and hovers by record id.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

const ACTION_ATTR: &str = "data-action";
const ID_ATTR: &str = "data-id";

/// What a row element asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit(u32),
    Delete(u32),
    Detail(u32),
}

impl RowAction {
    /// Decode the `data-action` / `data-id` pair of an element.
    pub fn parse(action: &str, id: &str) -> Option<Self> {
        let id = id.trim().parse().ok()?;
        match action {
            "edit" => Some(RowAction::Edit(id)),
            "delete" => Some(RowAction::Delete(id)),
            "detail" => Some(RowAction::Detail(id)),
            _ => None,
        }
    }

    /// Find the action for an event bubbling up to the table body.
    pub fn from_event(ev: &web_sys::Event) -> Option<Self> {
        let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
        let element = target.closest(&format!("[{ACTION_ATTR}]")).ok()??;
        let action = element.get_attribute(ACTION_ATTR)?;
        let id = element.get_attribute(ID_ATTR)?;
        Self::parse(&action, &id)
    }
}

/// Edit and delete icons for the row of record `id`
#[component]
pub fn RowActions(id: u32) -> impl IntoView {
    let edit_id = id.to_string();
    let delete_id = edit_id.clone();
    view! {
        <td class="row-actions">
            <img src="images/edit.png" alt="Edit" title="Edit" class="btnEdit" data-action="edit" data-id=edit_id />
            <img src="images/delete.png" alt="Delete" title="Delete" class="btnDelete" data-action="delete" data-id=delete_id />
        </td>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(RowAction::parse("edit", "7"), Some(RowAction::Edit(7)));
        assert_eq!(RowAction::parse("delete", "12"), Some(RowAction::Delete(12)));
        assert_eq!(RowAction::parse("detail", " 3 "), Some(RowAction::Detail(3)));
        assert_eq!(RowAction::parse("rename", "3"), None);
        assert_eq!(RowAction::parse("edit", "Edit3"), None);
    }
}
