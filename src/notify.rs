//! Notifications
//!
//! Blocking alerts for the operator, raw details for the developer console.

use crate::error::ApiError;

const FAILURE_HEADER: &str = "The following errors occurred:\n\n";
const GENERIC_FAILURE: &str = "The request failed.";

pub trait Notifier {
    fn success(&self, message: &str);
    fn failure(&self, error: &ApiError);
}

/// Alert text for a failed operation
pub fn failure_text(error: &ApiError) -> String {
    let mut text = String::from(FAILURE_HEADER);
    let mut any = false;
    for field in error.field_errors() {
        text.push_str(&field.message);
        text.push('\n');
        any = true;
    }
    if !any {
        text.push_str(GENERIC_FAILURE);
        if let Some(status) = error.status() {
            text.push_str(&format!(" (HTTP {status})"));
        }
        text.push('\n');
    }
    text
}

/// `window.alert` notifier
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn success(&self, message: &str) {
        log::info!("[NOTIFY] {}", message);
        alert(message);
    }

    fn failure(&self, error: &ApiError) {
        alert(&failure_text(error));
        log::error!("[NOTIFY] {}", error);
        if let Some(status) = error.status() {
            log::error!("[NOTIFY] Status: {}", status);
        }
        if let Some(body) = error.body() {
            crate::logger::log_json("[NOTIFY] Response JSON:", body);
        }
        log::debug!("[NOTIFY] Error object: {:?}", error);
    }
}

fn alert(message: &str) {
    if let Err(e) = leptos::prelude::window().alert_with_message(message) {
        log::warn!("[NOTIFY] alert unavailable: {:?}", e);
    }
}

#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Records what would have been alerted
    #[derive(Default)]
    pub struct RecordingNotifier {
        pub successes: RefCell<Vec<String>>,
        pub failures: RefCell<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn success(&self, message: &str) {
            self.successes.borrow_mut().push(message.to_string());
        }

        fn failure(&self, error: &ApiError) {
            self.failures.borrow_mut().push(failure_text(error));
        }
    }
}
