//! Landing Builder Frontend Entry Point

mod app;
mod blocks;
mod browser;
mod components;
mod config;
mod context;
mod document;
mod logger;
mod media;
mod models;
mod placeholder;
mod sales;
mod settings_io;
mod storage;
mod store;
mod workspace;

#[cfg(test)]
mod tests;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Debug);
    mount_to_body(App);
}
