//! President resource

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use super::fields::required;
use super::Resource;
use crate::error::{ApiError, ApiResult, FieldErrors};
use crate::models::{Choice, President, PresidentRow};

/// Value of the blank state option
pub const NO_STATE: &str = "-1";
/// Value of the blank party option
pub const NO_PARTY: &str = "null";

const WIKI_BASE: &str = "https://en.wikipedia.org/wiki/";

/// Characters escaped in an article title
const TITLE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Encyclopedia link for `title` (spaces become underscores).
pub fn wiki_url(title: &str) -> String {
    let title = title.trim().replace(' ', "_");
    format!("{}{}", WIKI_BASE, utf8_percent_encode(&title, TITLE))
}

pub struct PresidentResource;

/// President form values; `state` and `party` hold the selected option values
#[derive(Debug, Clone, PartialEq)]
pub struct PresidentFields {
    pub firstname: String,
    pub lastname: String,
    pub state: String,
    pub party: String,
    pub inaugurated_year: String,
    pub years: String,
}

impl Default for PresidentFields {
    fn default() -> Self {
        Self {
            firstname: String::new(),
            lastname: String::new(),
            state: NO_STATE.to_string(),
            party: NO_PARTY.to_string(),
            inaugurated_year: String::new(),
            years: String::new(),
        }
    }
}

impl PresidentFields {
    /// Fill the form from a list row, selecting the dropdown entries whose
    /// labels match the row's state and party names.
    pub fn from_row(row: &PresidentRow, states: &[Choice], parties: &[Choice]) -> Self {
        let state = option_value(states, Some(&row.state)).unwrap_or_else(|| NO_STATE.to_string());
        let party = option_value(parties, row.party.as_deref()).unwrap_or_else(|| NO_PARTY.to_string());
        Self {
            firstname: row.firstname.clone(),
            lastname: row.lastname.clone(),
            state,
            party,
            inaugurated_year: row.inaugurated_year.to_string(),
            years: row.years.to_string(),
        }
    }
}

fn option_value(choices: &[Choice], label: Option<&str>) -> Option<String> {
    let label = label?;
    choices
        .iter()
        .find(|c| c.label == label)
        .map(|c| c.id.to_string())
}

impl PresidentRow {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }

    pub fn name_url(&self) -> String {
        wiki_url(&format!("{}_{}", self.firstname, self.lastname))
    }

    pub fn state_url(&self) -> String {
        wiki_url(&self.state)
    }

    pub fn party_url(&self) -> Option<String> {
        self.party.as_deref().filter(|p| !p.is_empty()).map(wiki_url)
    }
}

impl Resource for PresidentResource {
    const PATH: &'static str = "president";
    const TAG: &'static str = "PRESIDENT";

    type Record = President;
    type Row = PresidentRow;
    type Fields = PresidentFields;

    fn row_id(row: &PresidentRow) -> u32 {
        row.id
    }

    fn read_fields(fields: &PresidentFields, id: u32) -> ApiResult<President> {
        let mut errors = FieldErrors::new();
        let state_id = match fields.state.trim() {
            "" | NO_STATE => {
                errors.push("stateId", "State is required.");
                None
            }
            value => required(&mut errors, "stateId", "State", value),
        };
        let party_id = match fields.party.trim() {
            "" | NO_PARTY => None,
            value => required(&mut errors, "partyId", "Party", value),
        };
        let inaugurated_year = required(&mut errors, "inauguratedYear", "Inaugurated Year", &fields.inaugurated_year);
        let years = required(&mut errors, "years", "Years in Office", &fields.years);

        match (state_id, inaugurated_year, years) {
            (Some(state_id), Some(inaugurated_year), Some(years)) if errors.is_empty() => Ok(President {
                id,
                firstname: fields.firstname.clone(),
                lastname: fields.lastname.clone(),
                state_id,
                party_id,
                inaugurated_year,
                years,
            }),
            _ => Err(ApiError::Rejected(errors)),
        }
    }

    fn added_message(president: &President) -> String {
        format!("Added President {} {}.", president.firstname, president.lastname)
    }

    fn updated_message(president: &President) -> String {
        format!("Updated President {} {}.", president.firstname, president.lastname)
    }

    fn deleted_message(row: &PresidentRow) -> String {
        format!("Deleted President {}.", row.lastname)
    }

    fn status_line(president: &President) -> String {
        let last_year = president
            .inaugurated_year
            .saturating_add_unsigned(president.years)
            .saturating_sub(1);
        format!(
            "{} {} {} - {}",
            president.firstname, president.lastname, president.inaugurated_year, last_year
        )
    }
}
