mod app;
mod components;
mod config;
mod utils;

use app::App;
use config::MOUNT_ID;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    match utils::dom::element_by_id(MOUNT_ID) {
        Some(root) => mount_to(root, App).forget(),
        None => {
            web_sys::console::warn_1(&format!("#{} not found, mounting to body", MOUNT_ID).into());
            mount_to_body(App);
        }
    }
}
