//! CRUD Page Controller
//!
//! Reactive state shared by the three entity pages: the list snapshot, the
//! form mode and the form values. Every backend call goes through the busy
//! gate so two operations never overlap.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{self, FormMode, FormState};
use crate::api::{Api, HttpTransport};
use crate::context::{use_app_context, AppContext};
use crate::notify::{AlertNotifier, Notifier};
use crate::resources::Resource;

pub struct Crud<R: Resource> {
    ctx: AppContext,
    pub rows: RwSignal<Vec<R::Row>>,
    pub mode: RwSignal<FormMode>,
    pub fields: RwSignal<R::Fields>,
}

impl<R: Resource> Clone for Crud<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Resource> Copy for Crud<R> {}

impl<R: Resource> Crud<R> {
    pub fn new() -> Self {
        Self {
            ctx: use_app_context(),
            rows: RwSignal::new(Vec::new()),
            mode: RwSignal::new(FormMode::Create),
            fields: RwSignal::new(R::Fields::default()),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.mode.get().is_editing()
    }

    /// Controls are disabled while anything is in flight
    pub fn is_busy(&self) -> bool {
        self.ctx.is_busy()
    }

    /// Look a row up in the current snapshot.
    pub fn row(&self, id: u32) -> Option<R::Row> {
        self.rows
            .with_untracked(|rows| actions::find_row::<R>(rows, id).cloned())
    }

    /// Reload the list (page load).
    pub fn refresh(self) {
        let guard = self.ctx.begin_request();
        spawn_local(async move {
            let _guard = guard;
            if let Some(api) = browser_api() {
                self.reload(&api).await;
            }
        });
    }

    /// Switch the form to editing `id` with the given values.
    /// Returns false when a request is in flight and nothing changed.
    pub fn begin_edit(self, id: u32, fields: R::Fields) -> bool {
        if self.ctx.is_busy_now() {
            return false;
        }
        log::debug!("[{}] Editing {}", R::TAG, id);
        self.fields.set(fields);
        self.mode.set(FormMode::Editing(id));
        true
    }

    /// Create or update, depending on the mode.
    pub fn submit(self) {
        if self.ctx.is_busy_now() {
            log::debug!("[{}] Submit ignored, request in flight", R::TAG);
            return;
        }
        let mode = self.mode.get_untracked();
        let fields = self.fields.get_untracked();
        let guard = self.ctx.begin_request();
        spawn_local(async move {
            let _guard = guard;
            let Some(api) = browser_api() else { return };
            let saved = actions::submit::<R, _>(&api, &AlertNotifier, mode, &fields).await.is_ok();
            let state = FormState::new(mode, fields).after_submit(saved);
            if self.apply(state).is_some() && saved {
                self.reload(&api).await;
            }
        });
    }

    /// Delete the row with `id`, then reload.
    pub fn delete(self, id: u32) {
        if self.ctx.is_busy_now() {
            return;
        }
        let Some(row) = self.row(id) else {
            log::warn!("[{}] Delete: no row with id {}", R::TAG, id);
            return;
        };
        let guard = self.ctx.begin_request();
        spawn_local(async move {
            let _guard = guard;
            let Some(api) = browser_api() else { return };
            let deleted = actions::delete::<R, _>(&api, &AlertNotifier, &row).await.is_ok();
            let Some(state) = self.form() else { return };
            if self.apply(state.after_delete(id, deleted)).is_some() {
                self.reload(&api).await;
            }
        });
    }

    /// Fetch `id` and show its summary in the status line.
    pub fn show_detail(self, id: u32) {
        if self.ctx.is_busy_now() {
            return;
        }
        let guard = self.ctx.begin_request();
        let ctx = self.ctx;
        spawn_local(async move {
            let _guard = guard;
            let Some(api) = browser_api() else { return };
            if let Some(line) = actions::detail::<R, _>(&api, &AlertNotifier, id).await {
                ctx.set_status(line);
            }
        });
    }

    /// Current form, or `None` once the page is gone.
    fn form(self) -> Option<FormState<R::Fields>> {
        Some(FormState::new(self.mode.try_get_untracked()?, self.fields.try_get_untracked()?))
    }

    /// Write a settled form back. `None` once the page is gone.
    fn apply(self, state: FormState<R::Fields>) -> Option<()> {
        self.mode.try_update(|mode| *mode = state.mode)?;
        self.fields.try_update(|fields| *fields = state.fields)
    }

    async fn reload(self, api: &Api<HttpTransport>) {
        let rows = actions::load::<R, _>(api, &AlertNotifier).await;
        if self.rows.try_set(rows).is_some() {
            log::debug!("[{}] Page closed before the list arrived", R::TAG);
        }
    }
}

/// Client for the current page, reporting configuration problems.
pub fn browser_api() -> Option<Api<HttpTransport>> {
    match Api::from_document() {
        Ok(api) => Some(api),
        Err(e) => {
            AlertNotifier.failure(&e);
            None
        }
    }
}
