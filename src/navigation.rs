//! Navigation
//!
//! Active-link highlighting and smooth scrolling to the matching section.

use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::config::{CatalogConfig, SectionRoute};
use crate::dom::{add_class, listen, query, query_all, remove_class, text_of};

const ACTIVE_CLASS: &str = "active";

/// Section selector for a link's text; first matching keyword wins
pub fn section_for<'a>(link_text: &str, routes: &'a [SectionRoute], fallback: &'a str) -> &'a str {
    let text = link_text.to_lowercase();
    routes
        .iter()
        .find(|route| text.contains(&route.keyword.to_lowercase()))
        .map(|route| route.selector.as_str())
        .unwrap_or(fallback)
}

/// Look up the section for `selector` with `find`, which searches the
/// catalog root. A missing section is `Ok(None)`.
fn locate<T>(
    selector: &str,
    find: impl Fn(&str) -> Result<Option<T>, String>,
) -> Result<Option<T>, String> {
    find(selector).map_err(|e| format!("bad selector '{}': {}", selector, e))
}

pub fn init(root: &Element, config: &CatalogConfig) -> Result<(), String> {
    let selector = config.selectors.nav_links.clone();
    let links = query_all(root, &selector)?;

    for link in &links {
        let link_handle = link.clone();
        let root = root.clone();
        let selector = selector.clone();
        let routes = config.section_routes.clone();
        let fallback = config.fallback_section.clone();

        listen(link, "click", move |ev: web_sys::MouseEvent| {
            ev.prevent_default();
            activate(&link_handle, &selector);

            let target = section_for(&text_of(&link_handle), &routes, &fallback);
            scroll_to(&root, target);
        })?;
    }

    web_sys::console::log_1(&format!("[NAV] Wired {} links", links.len()).into());
    Ok(())
}

/// Clear `active` on sibling links (same grandparent) and set it on `link`
fn activate(link: &Element, selector: &str) {
    let scope = link.parent_element().and_then(|p| p.parent_element());
    if let Some(scope) = scope {
        for sibling in query_all(&scope, selector).unwrap_or_default() {
            remove_class(&sibling, ACTIVE_CLASS);
        }
    }
    add_class(link, ACTIVE_CLASS);
}

fn scroll_to(root: &Element, selector: &str) {
    match locate(selector, |sel| query(root, sel)) {
        Ok(Some(section)) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
        Ok(None) => {
            web_sys::console::warn_1(&format!("[NAV] Section '{}' not on page", selector).into());
        }
        Err(e) => {
            web_sys::console::error_1(&format!("[NAV] {}", e).into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_routing() {
        let config = CatalogConfig::default();
        let route = |text: &str| section_for(text, &config.section_routes, &config.fallback_section).to_string();

        assert_eq!(route("Notebooks"), ".featured-products");
        assert_eq!(route("NOTEBOOK GAMER"), ".featured-products");
        assert_eq!(route("Promoção da Semana"), ".hero");
        assert_eq!(route("Monitores"), ".brand-section");
    }

    #[test]
    fn test_first_route_wins() {
        let routes = vec![
            SectionRoute { keyword: "gamer".to_string(), selector: ".gaming".to_string() },
            SectionRoute { keyword: "notebook".to_string(), selector: ".notebooks".to_string() },
        ];
        assert_eq!(section_for("Notebook Gamer", &routes, ".all"), ".gaming");
        assert_eq!(section_for("", &routes, ".all"), ".all");
    }

    #[test]
    fn test_section_found_only_inside_root() {
        let config = CatalogConfig::default();
        let inside_root = [".featured-products", ".hero"];
        let find = |sel: &str| Ok(inside_root.iter().find(|s| **s == sel).copied());

        let target = section_for("Notebooks", &config.section_routes, &config.fallback_section);
        assert_eq!(locate(target, find), Ok(Some(".featured-products")));

        let target = section_for("Monitores", &config.section_routes, &config.fallback_section);
        assert_eq!(locate(target, find), Ok(None));
    }

    #[test]
    fn test_bad_selector_is_reported() {
        let find = |_: &str| Err::<Option<()>, _>("SyntaxError".to_string());
        assert_eq!(locate("##", find), Err("bad selector '##': SyntaxError".to_string()));
    }
}
