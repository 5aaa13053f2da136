//! Catalog UI Entry Point

mod app;
mod components;
mod config;
mod count_up;
mod debounce;
mod dom;
mod effects;
mod filters;
mod models;
mod navigation;
mod number_format;
mod products;
mod search;
mod styles;

use app::Catalog;

fn main() {
    console_error_panic_hook::set_once();

    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        web_sys::console::error_1(&"[CATALOG] No document body to attach to".into());
        return;
    };

    if let Err(e) = Catalog::attach(&body) {
        web_sys::console::error_1(&format!("[CATALOG] {}", e).into());
    }
}
