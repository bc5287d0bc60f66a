//! CRUD Flows
//!
//! What each user action does against the backend, independent of the DOM.
//! Every failure is reported through the notifier right here and handed back
//! only so the caller can decide whether to leave its form alone.

use crate::api::{Api, Transport};
use crate::error::ApiResult;
use crate::models::UNASSIGNED_ID;
use crate::notify::Notifier;
use crate::resources::Resource;

/// Whether the form creates a new record or edits an existing one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Editing(u32),
}

impl FormMode {
    pub fn is_editing(self) -> bool {
        matches!(self, FormMode::Editing(_))
    }

    /// A successful submission returns the form to create mode; a failed one
    /// leaves it where it was.
    pub fn after_submit(self, succeeded: bool) -> FormMode {
        if succeeded {
            FormMode::Create
        } else {
            self
        }
    }
}

/// Form mode and values once a flow has finished
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState<F> {
    pub mode: FormMode,
    pub fields: F,
}

impl<F: Default> FormState<F> {
    pub fn new(mode: FormMode, fields: F) -> Self {
        Self { mode, fields }
    }

    /// Success empties the form; failure keeps mode and values.
    pub fn after_submit(self, succeeded: bool) -> Self {
        match self.mode.after_submit(succeeded) {
            FormMode::Create if succeeded => Self::default(),
            mode => Self { mode, ..self },
        }
    }

    /// Deleting the record being edited abandons the edit.
    pub fn after_delete(self, deleted: u32, succeeded: bool) -> Self {
        if succeeded && self.mode == FormMode::Editing(deleted) {
            Self::default()
        } else {
            self
        }
    }
}

/// Fetch the list. On failure the snapshot becomes empty.
pub async fn load<R: Resource, T: Transport>(api: &Api<T>, notifier: &dyn Notifier) -> Vec<R::Row> {
    match api.list::<R>().await {
        Ok(rows) => {
            log::debug!("[{}] Loaded {} rows", R::TAG, rows.len());
            rows
        }
        Err(e) => {
            notifier.failure(&e);
            Vec::new()
        }
    }
}

/// Create or update from the form, depending on `mode`.
pub async fn submit<R: Resource, T: Transport>(
    api: &Api<T>,
    notifier: &dyn Notifier,
    mode: FormMode,
    fields: &R::Fields,
) -> ApiResult<R::Record> {
    let result = match mode {
        FormMode::Create => create::<R, T>(api, fields).await,
        FormMode::Editing(id) => update::<R, T>(api, fields, id).await,
    };
    match &result {
        Ok(record) => match mode {
            FormMode::Create => notifier.success(&R::added_message(record)),
            FormMode::Editing(_) => notifier.success(&R::updated_message(record)),
        },
        Err(e) => {
            log::warn!("[{}] Submit failed ({:?}): {}", R::TAG, mode, e);
            notifier.failure(e);
        }
    }
    result
}

async fn create<R: Resource, T: Transport>(api: &Api<T>, fields: &R::Fields) -> ApiResult<R::Record> {
    let record = R::read_fields(fields, UNASSIGNED_ID)?;
    api.create::<R>(&record).await
}

async fn update<R: Resource, T: Transport>(api: &Api<T>, fields: &R::Fields, id: u32) -> ApiResult<R::Record> {
    let record = R::read_fields(fields, id)?;
    api.update::<R>(&record).await
}

/// Delete the record shown in `row`.
pub async fn delete<R: Resource, T: Transport>(api: &Api<T>, notifier: &dyn Notifier, row: &R::Row) -> ApiResult<()> {
    let id = R::row_id(row);
    let result = api.delete::<R>(id).await;
    match &result {
        Ok(()) => notifier.success(&R::deleted_message(row)),
        Err(e) => {
            log::warn!("[{}] Delete of {} failed: {}", R::TAG, id, e);
            notifier.failure(e);
        }
    }
    result
}

/// Fetch one record and summarise it for the status line.
pub async fn detail<R: Resource, T: Transport>(api: &Api<T>, notifier: &dyn Notifier, id: u32) -> Option<String> {
    match api.read::<R>(id).await {
        Ok(record) => Some(R::status_line(&record)),
        Err(e) => {
            notifier.failure(&e);
            None
        }
    }
}

/// Find a row in the snapshot by identifier.
pub fn find_row<R: Resource>(rows: &[R::Row], id: u32) -> Option<&R::Row> {
    rows.iter().find(|row| R::row_id(row) == id)
}
