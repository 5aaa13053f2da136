//! Product Search
//!
//! Substring search over card text. Typing is debounced; the button and
//! Enter search immediately.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::config::CatalogConfig;
use crate::debounce::{BrowserScheduler, Debouncer, Scheduler};
use crate::dom::{add_class, js_err, listen, query, query_all_html, remove_class, set_display, text_of};

const HIGHLIGHT_CLASS: &str = "search-highlight";
const NO_RESULTS_CLASS: &str = "no-results-message";

const NO_RESULTS_HTML: &str = r#"
    <div style="text-align: center; padding: 40px; color: #666;">
        <i class="fas fa-search" style="font-size: 48px; margin-bottom: 20px; opacity: 0.5;"></i>
        <h3>Nenhum produto encontrado</h3>
        <p>Tente usar termos diferentes ou remova alguns filtros.</p>
    </div>
"#;

pub fn normalize_term(raw: &str) -> String {
    raw.to_lowercase()
}

/// Empty term matches everything
pub fn matches(card_text: &str, term: &str) -> bool {
    term.is_empty() || card_text.to_lowercase().contains(term)
}

pub fn should_show_no_results(visible_cards: usize, term: &str) -> bool {
    visible_cards == 0 && !term.is_empty()
}

/// Removal timers for the latest search's highlights.
///
/// Each search replaces the whole set: dropping the previous handles cancels
/// them, so a stale timer never cuts a new highlight short.
pub struct HighlightTimers<S: Scheduler> {
    scheduler: S,
    duration_ms: u32,
    pending: RefCell<Vec<S::Handle>>,
}

impl<S: Scheduler> HighlightTimers<S> {
    pub fn new(scheduler: S, duration_ms: u32) -> Self {
        Self {
            scheduler,
            duration_ms,
            pending: RefCell::new(Vec::new()),
        }
    }

    pub fn replace(&self, removals: Vec<Box<dyn FnOnce()>>) {
        let handles = removals
            .into_iter()
            .map(|removal| self.scheduler.schedule(self.duration_ms, removal))
            .collect();
        self.pending.replace(handles);
    }
}

/// Card handles and page elements a search touches
struct SearchView {
    document: Document,
    cards: Vec<HtmlElement>,
    product_area: Option<Element>,
    highlights: HighlightTimers<BrowserScheduler>,
}

impl SearchView {
    fn perform(&self, term: &str) {
        let mut visible = 0;
        let mut removals: Vec<Box<dyn FnOnce()>> = Vec::new();
        for card in &self.cards {
            remove_class(card, HIGHLIGHT_CLASS);
            if matches(&text_of(card), term) {
                visible += 1;
                set_display(card, "block");
                add_class(card, HIGHLIGHT_CLASS);
                let card = card.clone();
                removals.push(Box::new(move || remove_class(&card, HIGHLIGHT_CLASS)));
            } else {
                set_display(card, "none");
            }
        }
        self.highlights.replace(removals);
        web_sys::console::log_1(&format!("[SEARCH] '{}' -> {} visible", term, visible).into());

        if let Err(e) = self.update_no_results(should_show_no_results(visible, term)) {
            web_sys::console::error_1(&format!("[SEARCH] No-results message: {}", e).into());
        }
    }

    fn update_no_results(&self, show: bool) -> Result<(), String> {
        let Some(area) = &self.product_area else {
            return Ok(());
        };
        let existing = query(area, &format!(".{}", NO_RESULTS_CLASS))?;
        match (show, existing) {
            (true, None) => {
                let message = self.document.create_element("div").map_err(js_err)?;
                message.set_class_name(NO_RESULTS_CLASS);
                message.set_inner_html(NO_RESULTS_HTML);
                area.append_child(&message).map_err(js_err)?;
            }
            (false, Some(message)) => message.remove(),
            _ => {}
        }
        Ok(())
    }
}

pub fn init(root: &Element, document: &Document, config: &CatalogConfig) -> Result<(), String> {
    let sel = &config.selectors;
    let Some(input) = query(root, &sel.search_input)?.and_then(|el| el.dyn_into::<HtmlInputElement>().ok()) else {
        web_sys::console::warn_1(&"[SEARCH] No search input, search disabled".into());
        return Ok(());
    };

    let view = Rc::new(SearchView {
        document: document.clone(),
        cards: query_all_html(root, &sel.cards)?,
        product_area: query(root, &sel.product_area)?,
        highlights: HighlightTimers::new(BrowserScheduler, config.search_highlight_ms),
    });

    let debounced = {
        let view = view.clone();
        Rc::new(Debouncer::new(BrowserScheduler, config.search_debounce_ms, move |term: String| {
            view.perform(&term)
        }))
    };

    {
        let debounced = debounced.clone();
        let source = input.clone();
        listen(&input, "input", move |_: web_sys::Event| {
            debounced.call(normalize_term(&source.value()));
        })?;
    }

    if let Some(button) = query(root, &sel.search_button)? {
        let debounced = debounced.clone();
        let view = view.clone();
        let source = input.clone();
        listen(&button, "click", move |ev: web_sys::MouseEvent| {
            ev.prevent_default();
            debounced.cancel();
            view.perform(&normalize_term(&source.value()));
        })?;
    }

    {
        let source = input.clone();
        listen(&input, "keypress", move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Enter" {
                ev.prevent_default();
                debounced.cancel();
                view.perform(&normalize_term(&source.value()));
            }
        })?;
    }

    Ok(())
}
