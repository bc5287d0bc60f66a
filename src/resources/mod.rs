//! Resources
//!
//! The three REST collections and everything that differs between them:
//! path, user messages, status line and how form fields become a record.

mod fields;
mod party;
mod president;
mod state;

use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

use crate::error::ApiResult;

pub use party::{PartyFields, PartyResource};
pub use president::{PresidentFields, PresidentResource, NO_PARTY, NO_STATE};
pub use state::{StateFields, StateResource};

/// A REST-addressable entity collection
pub trait Resource: 'static {
    /// Path below the REST root, e.g. `party`
    const PATH: &'static str;
    /// Log prefix
    const TAG: &'static str;

    /// Shape sent by create/update and returned by detail
    type Record: Serialize + DeserializeOwned + Clone + Debug + Send + Sync + 'static;
    /// Shape of one list entry
    type Row: DeserializeOwned + Clone + Debug + PartialEq + Send + Sync + 'static;
    /// Raw form values
    type Fields: Clone + Default + Debug + PartialEq + Send + Sync + 'static;

    fn row_id(row: &Self::Row) -> u32;

    /// Turn form values into a record carrying `id`.
    fn read_fields(fields: &Self::Fields, id: u32) -> ApiResult<Self::Record>;

    fn added_message(record: &Self::Record) -> String;
    fn updated_message(record: &Self::Record) -> String;
    fn deleted_message(row: &Self::Row) -> String;

    /// One-line summary shown when hovering a row
    fn status_line(record: &Self::Record) -> String;
}
