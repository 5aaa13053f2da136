//! Reveal-Once Viewport Triggers
//!
//! IntersectionObserver wrapper that notifies each target once.
//! The first intersecting notification unobserves the target and runs the
//! callback; a fired-set guard keeps late or duplicate entries from firing again.

use std::collections::HashSet;
use std::hash::Hash;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Observer options
#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the target area that must be visible (0.0 ..= 1.0)
    pub threshold: f64,
    /// CSS margin applied around the viewport box, e.g. "0px 0px -50px 0px"
    pub root_margin: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            root_margin: "0px".to_string(),
        }
    }
}

/// Remembers which keys already fired
#[derive(Debug)]
pub struct OneShot<K> {
    fired: HashSet<K>,
}

impl<K: Eq + Hash> OneShot<K> {
    pub fn new() -> Self {
        Self { fired: HashSet::new() }
    }

    /// Returns true exactly once per key: on its first intersecting notification
    pub fn trigger(&mut self, key: K, intersecting: bool) -> bool {
        intersecting && self.fired.insert(key)
    }

    pub fn has_fired(&self, key: &K) -> bool {
        self.fired.contains(key)
    }

    pub fn fired_count(&self) -> usize {
        self.fired.len()
    }
}

impl<K: Eq + Hash> Default for OneShot<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Observe `targets` and call `on_visible` the first time each one intersects.
///
/// The observer is returned so callers can `disconnect()` it early; the
/// callback closure is leaked to JS for the page lifetime.
pub fn observe_once<F>(
    targets: &[Element],
    options: &RevealOptions,
    on_visible: F,
) -> Result<IntersectionObserver, JsValue>
where
    F: Fn(Element) + 'static,
{
    let registry: Vec<Element> = targets.to_vec();
    let mut guard = OneShot::<usize>::new();

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let Some(index) = registry.iter().position(|t| *t == target) else {
                    continue;
                };
                if guard.trigger(index, entry.is_intersecting()) {
                    observer.unobserve(&target);
                    on_visible(target);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    for target in targets {
        observer.observe(target);
    }
    callback.forget();

    Ok(observer)
}
