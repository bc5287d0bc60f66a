//! Party resource

use super::fields::{optional, required};
use super::Resource;
use crate::error::{ApiError, ApiResult, FieldErrors};
use crate::models::Party;

pub struct PartyResource;

/// Party form values as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartyFields {
    pub name: String,
    pub founded_year: String,
    pub end_year: String,
}

impl From<&Party> for PartyFields {
    fn from(party: &Party) -> Self {
        Self {
            name: party.name.clone(),
            founded_year: party.founded_year.to_string(),
            end_year: party.end_year.map(|y| y.to_string()).unwrap_or_default(),
        }
    }
}

impl Party {
    /// End Year column text; blank for active parties
    pub fn end_year_cell(&self) -> String {
        self.end_year.map(|y| y.to_string()).unwrap_or_default()
    }
}

impl Resource for PartyResource {
    const PATH: &'static str = "party";
    const TAG: &'static str = "PARTY";

    type Record = Party;
    type Row = Party;
    type Fields = PartyFields;

    fn row_id(row: &Party) -> u32 {
        row.id
    }

    fn read_fields(fields: &PartyFields, id: u32) -> ApiResult<Party> {
        let mut errors = FieldErrors::new();
        let founded_year = required(&mut errors, "foundedYear", "Founded Year", &fields.founded_year);
        let end_year = optional(&mut errors, "endYear", "End Year", &fields.end_year);
        match founded_year {
            Some(founded_year) if errors.is_empty() => Ok(Party {
                id,
                name: fields.name.clone(),
                founded_year,
                end_year,
            }),
            _ => Err(ApiError::Rejected(errors)),
        }
    }

    fn added_message(party: &Party) -> String {
        format!("Added Party {}.", party.name)
    }

    fn updated_message(party: &Party) -> String {
        format!("Updated Party {}.", party.name)
    }

    fn deleted_message(party: &Party) -> String {
        format!("Deleted Party {}.", party.name)
    }

    fn status_line(party: &Party) -> String {
        let dissolved = party
            .end_year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "not yet!".to_string());
        format!("{} (founded: {}, dissolved: {})", party.name, party.founded_year, dissolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn whig() -> Party {
        Party { id: 4, name: "Whig".into(), founded_year: 1833, end_year: Some(1856) }
    }

    #[test]
    fn test_fields_round_trip() {
        let party = whig();
        let fields = PartyFields::from(&party);
        assert_eq!(PartyResource::read_fields(&fields, party.id).unwrap(), party);
    }

    #[test]
    fn test_blank_end_year_is_absent() {
        let fields = PartyFields { name: "Republican".into(), founded_year: "1854".into(), end_year: "".into() };
        let party = PartyResource::read_fields(&fields, 0).unwrap();
        assert_eq!(party.end_year, None);
        assert_eq!(party.end_year_cell(), "");
    }

    #[test]
    fn test_missing_founded_year_rejected() {
        let fields = PartyFields { name: "Republican".into(), ..Default::default() };
        let err = PartyResource::read_fields(&fields, 0).unwrap_err();
        assert_eq!(err.field_errors()[0].field, "foundedYear");
    }

    #[test]
    fn test_status_line() {
        assert_eq!(PartyResource::status_line(&whig()), "Whig (founded: 1833, dissolved: 1856)");
        let active = Party { end_year: None, ..whig() };
        assert_eq!(PartyResource::status_line(&active), "Whig (founded: 1833, dissolved: not yet!)");
    }
}
