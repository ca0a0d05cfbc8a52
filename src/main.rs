#![allow(warnings)]
//! Testdeck Frontend Entry Point

mod models;
mod api;
mod category;
mod tree;
mod filter;
mod context;
mod store;
mod notify;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
