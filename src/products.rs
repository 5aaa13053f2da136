//! Product Cards
//!
//! Card hover state and click-to-open product details.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlImageElement};

use crate::components::open_product_modal;
use crate::config::CatalogConfig;
use crate::dom::{add_class, listen, query_all, remove_class, text_of};
use crate::models::ProductSummary;

const HOVER_CLASS: &str = "hover-effect";

/// Read name, image and price out of a card
pub fn summary_from_card(card: &Element, price_selector: &str) -> ProductSummary {
    let first = |selector: &str| card.query_selector(selector).ok().flatten();

    ProductSummary::from_parts(
        first("h3, h4").map(|el| text_of(&el)),
        first("img")
            .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
            .map(|img| img.src()),
        first(price_selector).map(|el| text_of(&el)),
    )
}

pub fn init(root: &Element, config: &CatalogConfig) -> Result<(), String> {
    let cards = query_all(root, &config.selectors.cards)?;

    for card in &cards {
        let clicked = card.clone();
        let price_selector = config.selectors.price.clone();
        let show_delay_ms = config.modal_show_delay_ms;
        listen(card, "click", move |_: web_sys::MouseEvent| {
            let summary = summary_from_card(&clicked, &price_selector);
            if let Err(e) = open_product_modal(summary, show_delay_ms) {
                web_sys::console::error_1(&format!("[MODAL] {}", e).into());
            }
        })?;

        let hovered = card.clone();
        listen(card, "mouseenter", move |_: web_sys::MouseEvent| add_class(&hovered, HOVER_CLASS))?;
        let left = card.clone();
        listen(card, "mouseleave", move |_: web_sys::MouseEvent| remove_class(&left, HOVER_CLASS))?;
    }

    web_sys::console::log_1(&format!("[PRODUCTS] Wired {} cards", cards.len()).into());
    Ok(())
}
