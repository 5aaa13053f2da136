//! Filter Panel
//!
//! Collapsible filter groups and the active-filter summary.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement};

use crate::config::CatalogConfig;
use crate::dom::{add_class, listen, query, query_all, query_all_html, remove_class, set_display, text_of};

const FILTER_TITLE: &str = "Filtrar por Especificações";

/// Which filter group a checkbox belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterGroup {
    Price,
    Family,
    Series,
}

impl FilterGroup {
    /// Classify by group title ("Faixa de Preço", "Família", "Série" ...)
    pub fn from_title(title: &str) -> Option<Self> {
        let title = title.to_lowercase();
        if title.contains("preço") {
            Some(Self::Price)
        } else if title.contains("família") {
            Some(Self::Family)
        } else if title.contains("série") {
            Some(Self::Series)
        } else {
            None
        }
    }
}

/// Checked labels per group
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActiveFilters {
    pub price: Vec<String>,
    pub family: Vec<String>,
    pub series: Vec<String>,
}

impl ActiveFilters {
    pub fn push(&mut self, group: FilterGroup, label: impl Into<String>) {
        let label = label.into();
        match group {
            FilterGroup::Price => self.price.push(label),
            FilterGroup::Family => self.family.push(label),
            FilterGroup::Series => self.series.push(label),
        }
    }
}

/// Cards carry no product data to match against, so every card stays visible
/// whatever is selected.
pub fn card_matches(_card_text: &str, _filters: &ActiveFilters) -> bool {
    true
}

/// Section heading for `active_count` checked boxes
pub fn filter_title(active_count: usize) -> String {
    if active_count > 0 {
        format!("{} ({} ativos)", FILTER_TITLE, active_count)
    } else {
        FILTER_TITLE.to_string()
    }
}

/// Options display and icon rotation after a toggle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelState {
    pub display: &'static str,
    pub icon_rotation: &'static str,
}

pub fn toggle_panel_state(current_display: &str) -> PanelState {
    if current_display == "none" {
        PanelState { display: "block", icon_rotation: "rotate(0deg)" }
    } else {
        PanelState { display: "none", icon_rotation: "rotate(180deg)" }
    }
}

// ========================
// DOM wiring
// ========================

pub fn init(root: &Element, config: &CatalogConfig) -> Result<(), String> {
    let sel = &config.selectors;

    for heading in query_all(root, &sel.filter_heading)? {
        let target = heading.clone();
        listen(&heading, "click", move |_: web_sys::MouseEvent| toggle_panel(&target))?;
    }

    let checkboxes: Rc<Vec<HtmlInputElement>> = Rc::new(
        query_all(root, &sel.filter_checkbox)?
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlInputElement>().ok())
            .collect(),
    );
    let cards = Rc::new(query_all_html(root, &sel.filterable_cards)?);
    let title = query(root, &sel.filter_title)?;
    let group_selector = Rc::new((sel.filter_group.clone(), sel.filter_group_title.clone()));

    for checkbox in checkboxes.iter() {
        let checkboxes = checkboxes.clone();
        let cards = cards.clone();
        let title = title.clone();
        let group_selector = group_selector.clone();
        listen(checkbox, "change", move |_: web_sys::Event| {
            let active = active_filters(&checkboxes, &group_selector.0, &group_selector.1);
            apply_filters(&cards, &active);
            if let Some(title) = &title {
                let checked = checkboxes.iter().filter(|c| c.checked()).count();
                title.set_text_content(Some(&filter_title(checked)));
            }
        })?;
    }

    web_sys::console::log_1(&format!("[FILTERS] Wired {} checkboxes", checkboxes.len()).into());
    Ok(())
}

fn toggle_panel(heading: &Element) {
    let Some(options) = heading
        .next_element_sibling()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let current = options.style().get_property_value("display").unwrap_or_default();
    let next = toggle_panel_state(&current);

    set_display(&options, next.display);
    if let Ok(Some(icon)) = heading.query_selector("i") {
        if let Ok(icon) = icon.dyn_into::<HtmlElement>() {
            let _ = icon.style().set_property("transform", next.icon_rotation);
        }
    }
}

fn active_filters(checkboxes: &[HtmlInputElement], group_selector: &str, title_selector: &str) -> ActiveFilters {
    let mut filters = ActiveFilters::default();
    for checkbox in checkboxes.iter().filter(|c| c.checked()) {
        let label = checkbox
            .parent_element()
            .map(|p| text_of(&p).trim().to_string())
            .unwrap_or_default();
        let group = checkbox
            .closest(group_selector)
            .ok()
            .flatten()
            .and_then(|g| g.query_selector(title_selector).ok().flatten())
            .and_then(|t| FilterGroup::from_title(&text_of(&t)));
        if let Some(group) = group {
            filters.push(group, label);
        }
    }
    filters
}

fn apply_filters(cards: &[HtmlElement], filters: &ActiveFilters) {
    for card in cards {
        if card_matches(&text_of(card), filters) {
            set_display(card, "block");
            add_class(card, "fade-in");
        } else {
            set_display(card, "none");
            remove_class(card, "fade-in");
        }
    }
}
