//! State resource

use super::Resource;
use crate::error::ApiResult;
use crate::models::State;

pub struct StateResource;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StateFields {
    pub name: String,
    pub abbreviation: String,
}

impl From<&State> for StateFields {
    fn from(state: &State) -> Self {
        Self {
            name: state.name.clone(),
            abbreviation: state.abbreviation.clone(),
        }
    }
}

impl Resource for StateResource {
    const PATH: &'static str = "state";
    const TAG: &'static str = "STATE";

    type Record = State;
    type Row = State;
    type Fields = StateFields;

    fn row_id(row: &State) -> u32 {
        row.id
    }

    fn read_fields(fields: &StateFields, id: u32) -> ApiResult<State> {
        Ok(State {
            id,
            name: fields.name.clone(),
            abbreviation: fields.abbreviation.clone(),
        })
    }

    fn added_message(state: &State) -> String {
        format!("Added State {} ({}).", state.name, state.abbreviation)
    }

    fn updated_message(state: &State) -> String {
        format!("Updated State {} ({}).", state.name, state.abbreviation)
    }

    fn deleted_message(state: &State) -> String {
        format!("Deleted State {} ({}).", state.name, state.abbreviation)
    }

    fn status_line(state: &State) -> String {
        format!("{} ({})", state.name, state.abbreviation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let ohio = State { id: 36, name: "Ohio".into(), abbreviation: "OH".into() };
        assert_eq!(StateResource::added_message(&ohio), "Added State Ohio (OH).");
        assert_eq!(StateResource::deleted_message(&ohio), "Deleted State Ohio (OH).");
        assert_eq!(StateResource::status_line(&ohio), "Ohio (OH)");
        assert_eq!(StateResource::read_fields(&StateFields::from(&ohio), 36).unwrap(), ohio);
    }
}
