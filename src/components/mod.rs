//! UI Components
//!
//! Leptos components for the three entity pages and the shell around them.

mod busy_spinner;
mod crud;
mod page_tabs;
mod party_page;
mod president_page;
mod reference_select;
mod row_actions;
mod state_page;
mod status_bar;

pub use busy_spinner::BusySpinner;
pub use page_tabs::{Page, PageTabs};
pub use party_page::PartyPage;
pub use president_page::PresidentPage;
pub use state_page::StatePage;
pub use status_bar::StatusBar;
