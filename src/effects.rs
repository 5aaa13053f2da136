//! Scroll Effects
//!
//! Reveal-on-scroll classes, the price count-up trigger and hero parallax.

use reveal_once::{observe_once, RevealOptions};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Window};

use crate::config::CatalogConfig;
use crate::count_up;
use crate::dom::{add_class, js_err, listen, query, query_all, text_of};
use crate::number_format::parse_price;

const REVEAL_CLASS: &str = "animate-in";

pub fn reveal_options(config: &CatalogConfig) -> RevealOptions {
    RevealOptions {
        threshold: config.reveal_threshold,
        root_margin: config.reveal_root_margin.clone(),
    }
}

/// Hero content offset for a scroll position, while the hero is on screen
pub fn parallax_offset(scrolled: f64, hero_height: f64, factor: f64) -> Option<f64> {
    (scrolled < hero_height).then(|| scrolled * factor)
}

pub fn translate_y(offset: f64) -> String {
    format!("translateY({}px)", offset)
}

pub fn init_reveal(root: &Element, config: &CatalogConfig) -> Result<(), String> {
    let targets = query_all(root, &config.selectors.reveal_targets)?;
    observe_once(&targets, &reveal_options(config), |el| add_class(&el, REVEAL_CLASS)).map_err(js_err)?;
    Ok(())
}

/// Count each price label up from zero the first time it scrolls into view
pub fn init_price_count_up(root: &Element, config: &CatalogConfig) -> Result<(), String> {
    let prices = query_all(root, &config.selectors.price)?;
    let duration_ms = config.count_up_ms;

    observe_once(&prices, &reveal_options(config), move |el| {
        let label = text_of(&el);
        let end = parse_price(&label);
        if end.is_nan() {
            web_sys::console::warn_1(&format!("[COUNTUP] No number in '{}'", label).into());
        }
        if let Err(e) = count_up::animate(el, 0.0, end, duration_ms, &label) {
            web_sys::console::error_1(&format!("[COUNTUP] {}", e).into());
        }
    })
    .map_err(js_err)?;

    web_sys::console::log_1(&format!("[COUNTUP] Watching {} prices", prices.len()).into());
    Ok(())
}

pub fn init_parallax(root: &Element, window: &Window, config: &CatalogConfig) -> Result<(), String> {
    let sel = &config.selectors;
    let hero = query(root, &sel.hero)?.and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let content = query(root, &sel.hero_content)?.and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let (Some(hero), Some(content)) = (hero, content) else {
        return Ok(());
    };

    let win = window.clone();
    let factor = config.parallax_factor;
    listen(window, "scroll", move |_: web_sys::Event| {
        let scrolled = win.scroll_y().unwrap_or(0.0);
        if let Some(offset) = parallax_offset(scrolled, f64::from(hero.offset_height()), factor) {
            let _ = content.style().set_property("transform", &translate_y(offset));
        }
    })
}
