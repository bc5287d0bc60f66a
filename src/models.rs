//! Frontend Models
//!
//! Records as the REST backend sends and accepts them.

use serde::{de::Error as _, Deserialize, Deserializer, Serialize};

/// Identifier the backend treats as "not assigned yet"
pub const UNASSIGNED_ID: u32 = 0;

/// Political party
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub id: u32,
    pub name: String,
    pub founded_year: i32,
    /// None while the party is still active
    #[serde(default, deserialize_with = "zero_as_none")]
    pub end_year: Option<i32>,
}

/// U.S. state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    pub id: u32,
    pub name: String,
    pub abbreviation: String,
}

/// President as created, updated and read by id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct President {
    pub id: u32,
    pub firstname: String,
    pub lastname: String,
    pub state_id: u32,
    #[serde(default)]
    pub party_id: Option<u32>,
    pub inaugurated_year: i32,
    #[serde(deserialize_with = "whole_number")]
    pub years: u32,
}

/// President as listed, with state and party resolved to names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresidentRow {
    pub id: u32,
    pub firstname: String,
    pub lastname: String,
    pub state: String,
    #[serde(default)]
    pub party: Option<String>,
    pub inaugurated_year: i32,
    #[serde(deserialize_with = "whole_number")]
    pub years: u32,
}

/// Entry of a lookup dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub id: u32,
    pub label: String,
}

impl From<&Party> for Choice {
    fn from(party: &Party) -> Self {
        Choice { id: party.id, label: party.name.clone() }
    }
}

impl From<&State> for Choice {
    fn from(state: &State) -> Self {
        Choice { id: state.id, label: state.name.clone() }
    }
}

/// The backend stores "no end year" as 0 in some rows
fn zero_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i32>, D::Error> {
    let year = Option::<i32>::deserialize(deserializer)?;
    Ok(year.filter(|y| *y != 0))
}

/// Years in office come out of a DECIMAL column and may carry a `.0`
fn whole_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let n = f64::deserialize(deserializer)?;
    if n < 0.0 || n.fract() != 0.0 || n > u32::MAX as f64 {
        return Err(D::Error::custom(format!("expected a whole number of years, got {n}")));
    }
    Ok(n as u32)
}
