//! Catalog App
//!
//! Attaches every handler to an already-rendered catalog page.

use web_sys::Element;

use crate::config::{CatalogConfig, CONFIG_ATTRIBUTE};
use crate::{effects, filters, navigation, products, search, styles};

pub struct Catalog;

impl Catalog {
    /// Wire the page under `root`.
    ///
    /// Features are independent: one that fails to wire is logged and the
    /// rest still attach. Only a missing window/document is an error.
    pub fn attach(root: &Element) -> Result<CatalogConfig, String> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let config = CatalogConfig::from_attribute(root.get_attribute(CONFIG_ATTRIBUTE));

        report("styles", styles::inject_styles(&document));
        report("filters", filters::init(root, &config));
        report("search", search::init(root, &document, &config));
        report("navigation", navigation::init(root, &config));
        report("reveal", effects::init_reveal(root, &config));
        report("parallax", effects::init_parallax(root, &window, &config));
        report("products", products::init(root, &config));
        report("count-up", effects::init_price_count_up(root, &config));

        web_sys::console::log_1(&"[CATALOG] Attached".into());
        Ok(config)
    }
}

fn report(feature: &str, result: Result<(), String>) {
    if let Err(e) = result {
        web_sys::console::error_1(&format!("[CATALOG] {} disabled: {}", feature, e).into());
    }
}
