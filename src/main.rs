//! Presidents Admin Frontend Entry Point

mod actions;
mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod logger;
mod models;
mod notify;
mod resources;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Debug);
    mount_to_body(App);
}
