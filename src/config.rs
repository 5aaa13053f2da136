//! Catalog Configuration
//!
//! Selectors, timings and section routes. Defaults match the stock catalog
//! markup; a page can override any subset through JSON in the root
//! element's `data-catalog-config` attribute.

use serde::{Deserialize, Serialize};

/// Attribute on the root element holding a JSON override
pub const CONFIG_ATTRIBUTE: &str = "data-catalog-config";

/// CSS selectors resolved under the root container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub filter_group: String,
    /// Group title, relative to the group element
    pub filter_group_title: String,
    pub filter_heading: String,
    pub filter_checkbox: String,
    pub filter_title: String,
    pub filterable_cards: String,
    pub cards: String,
    pub search_input: String,
    pub search_button: String,
    pub product_area: String,
    pub nav_links: String,
    pub price: String,
    pub reveal_targets: String,
    pub hero: String,
    pub hero_content: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            filter_group: ".filter-group".to_string(),
            filter_group_title: "h4 span".to_string(),
            filter_heading: ".filter-group h4".to_string(),
            filter_checkbox: ".checkbox-label input".to_string(),
            filter_title: ".filter-section h3".to_string(),
            filterable_cards: ".featured-card".to_string(),
            cards: ".featured-card, .brand-card".to_string(),
            search_input: ".search-bar input".to_string(),
            search_button: ".search-bar button".to_string(),
            product_area: ".product-area".to_string(),
            nav_links: ".nav-link, .sub-link".to_string(),
            price: ".price-value".to_string(),
            reveal_targets: ".featured-card, .brand-card, .filter-section, .hero-content".to_string(),
            hero: ".hero".to_string(),
            hero_content: ".hero-content".to_string(),
        }
    }
}

/// Link text keyword -> section selector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionRoute {
    pub keyword: String,
    pub selector: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub selectors: Selectors,
    pub search_debounce_ms: u32,
    pub search_highlight_ms: u32,
    pub count_up_ms: u32,
    pub modal_show_delay_ms: u32,
    /// Visible fraction that triggers reveal and count-up
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub parallax_factor: f64,
    /// Checked in order; first keyword contained in the link text wins
    pub section_routes: Vec<SectionRoute>,
    pub fallback_section: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            search_debounce_ms: 300,
            search_highlight_ms: 2000,
            count_up_ms: 1000,
            modal_show_delay_ms: 10,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            parallax_factor: 0.5,
            section_routes: vec![
                SectionRoute {
                    keyword: "notebook".to_string(),
                    selector: ".featured-products".to_string(),
                },
                SectionRoute {
                    keyword: "promoção".to_string(),
                    selector: ".hero".to_string(),
                },
            ],
            fallback_section: ".brand-section".to_string(),
        }
    }
}

impl CatalogConfig {
    /// Parse a JSON override; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("invalid catalog config: {}", e))
    }

    /// Config from an optional attribute value, falling back to defaults
    pub fn from_attribute(value: Option<String>) -> Self {
        match value {
            Some(json) if !json.trim().is_empty() => Self::from_json(&json).unwrap_or_else(|e| {
                web_sys::console::error_1(&format!("[CATALOG] {}, using defaults", e).into());
                Self::default()
            }),
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_page() {
        let config = CatalogConfig::default();
        assert_eq!(config.search_debounce_ms, 300);
        assert_eq!(config.count_up_ms, 1000);
        assert_eq!(config.reveal_threshold, 0.1);
        assert_eq!(config.reveal_root_margin, "0px 0px -50px 0px");
        assert_eq!(config.selectors.price, ".price-value");
        assert_eq!(config.section_routes.len(), 2);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = CatalogConfig::from_json(
            r#"{"search_debounce_ms": 150, "selectors": {"price": ".preco"}}"#,
        )
        .unwrap();

        assert_eq!(config.search_debounce_ms, 150);
        assert_eq!(config.selectors.price, ".preco");
        assert_eq!(config.selectors.cards, ".featured-card, .brand-card");
        assert_eq!(config.count_up_ms, 1000);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = CatalogConfig::from_json("{not json").unwrap_err();
        assert!(err.starts_with("invalid catalog config"));
    }

    #[test]
    fn test_missing_attribute_uses_defaults() {
        assert_eq!(CatalogConfig::from_attribute(None), CatalogConfig::default());
        assert_eq!(CatalogConfig::from_attribute(Some("  ".to_string())), CatalogConfig::default());
    }
}
