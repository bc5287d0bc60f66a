//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Number of user actions / page loads still waiting on the backend
    in_flight: RwSignal<u32>,
    /// Status line shown under the table
    pub status: ReadSignal<String>,
    set_status: WriteSignal<String>,
}

impl AppContext {
    pub fn new() -> Self {
        let (status, set_status) = signal(String::new());
        Self {
            in_flight: RwSignal::new(0),
            status,
            set_status,
        }
    }

    /// True while any request is outstanding
    pub fn is_busy(&self) -> bool {
        self.in_flight.get() > 0
    }

    /// Untracked variant for event handlers
    pub fn is_busy_now(&self) -> bool {
        self.in_flight.get_untracked() > 0
    }

    /// Mark a request as started; it ends when the guard is dropped.
    pub fn begin_request(&self) -> BusyGuard {
        self.in_flight.update(|n| *n += 1);
        BusyGuard { in_flight: self.in_flight }
    }

    pub fn set_status(&self, line: String) {
        self.set_status.set(line);
    }
}

/// Keeps the busy indicator up until dropped
pub struct BusyGuard {
    in_flight: RwSignal<u32>,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        let _ = self.in_flight.try_update(|n| *n = n.saturating_sub(1));
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
