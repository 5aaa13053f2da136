//! Count-Up Animation
//!
//! Animates a price label from a start value up to the value it displays,
//! one write per animation frame, finishing on the label's original text.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::number_format::{format_plain, format_pt_br};

/// Ease-out quartic: fast start, slow finish
pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

/// One count-up run
#[derive(Clone, Debug, PartialEq)]
pub struct CountUp {
    pub start: f64,
    pub end: f64,
    pub duration_ms: f64,
    /// Written verbatim on the last frame
    pub final_text: String,
    /// Text preceding the number, e.g. "R$ "
    pub prefix: String,
}

/// What a single frame writes
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub text: String,
    pub done: bool,
}

impl CountUp {
    pub fn new(start: f64, end: f64, duration_ms: u32, final_text: impl Into<String>) -> Self {
        let final_text = final_text.into();
        let prefix = price_prefix(&final_text, end);
        Self {
            start,
            end,
            duration_ms: f64::from(duration_ms),
            final_text,
            prefix,
        }
    }

    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, progress: f64) -> f64 {
        self.start + (self.end - self.start) * ease_out_quart(progress)
    }

    pub fn text_at(&self, progress: f64) -> String {
        if progress >= 1.0 {
            return self.final_text.clone();
        }
        format!("{}{}", self.prefix, format_pt_br(self.value_at(progress)))
    }

    pub fn frame(&self, elapsed_ms: f64) -> Frame {
        let progress = self.progress(elapsed_ms);
        Frame {
            text: self.text_at(progress),
            done: progress >= 1.0,
        }
    }
}

/// Text of `label` that precedes the rendered number `end`.
///
/// Looks for the grouped pt-BR rendering first, then the plain one, then
/// falls back to everything before the first digit.
pub fn price_prefix(label: &str, end: f64) -> String {
    let found = [format_pt_br(end), format_plain(end)]
        .iter()
        .find_map(|rendered| label.find(rendered.as_str()));

    let cut = found
        .or_else(|| label.find(|c: char| c.is_ascii_digit()))
        .unwrap_or(0);
    label[..cut].to_string()
}

/// Animate `element` from `start` to `end` over `duration_ms`, ending on `final_text`
pub fn animate(
    element: Element,
    start: f64,
    end: f64,
    duration_ms: u32,
    final_text: &str,
) -> Result<(), String> {
    run(element, CountUp::new(start, end, duration_ms, final_text))
}

/// Drive a count-up with requestAnimationFrame until it is done
fn run(element: Element, count_up: CountUp) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let started_at = window.performance().ok_or("no performance clock")?.now();

    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let first = tick.clone();
    let win = window.clone();

    *first.borrow_mut() = Some(Closure::new(move |now: f64| {
        let frame = count_up.frame(now - started_at);
        element.set_text_content(Some(&frame.text));
        if frame.done {
            // Breaks the self-reference; the closure is freed after this call
            let _ = tick.borrow_mut().take();
            return;
        }

        let scheduled = match tick.borrow().as_ref() {
            Some(cb) => win.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok(),
            None => false,
        };
        if !scheduled {
            web_sys::console::warn_1(&"[COUNTUP] Frame request failed, restoring label".into());
            element.set_text_content(Some(&count_up.final_text));
            let _ = tick.borrow_mut().take();
        }
    }));

    let requested = match first.borrow().as_ref() {
        Some(cb) => window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .map(|_| ())
            .map_err(|e| format!("{:?}", e)),
        None => Ok(()),
    };
    if requested.is_err() {
        let _ = first.borrow_mut().take();
    }
    requested
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number_format::parse_price;

    fn from_label(label: &str) -> CountUp {
        CountUp::new(0.0, parse_price(label), 1000, label)
    }

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert_eq!(ease_out_quart(0.5), 0.9375);
    }

    #[test]
    fn test_ease_is_monotonic() {
        let mut previous = ease_out_quart(0.0);
        for step in 1..=1000 {
            let current = ease_out_quart(step as f64 / 1000.0);
            assert!(current >= previous, "dropped at step {}", step);
            previous = current;
        }
    }

    #[test]
    fn test_halfway_uses_eased_value() {
        let count_up = CountUp::new(0.0, 1234.56, 1000, "1.234,56");
        let frame = count_up.frame(500.0);

        assert!(!frame.done);
        assert_eq!(frame.text, format_pt_br(1234.56 * ease_out_quart(0.5)));
        assert_eq!(frame.text, "1.157,40");
    }

    #[test]
    fn test_prefix_is_kept_during_animation() {
        let count_up = from_label("R$ 1.234,56");

        assert_eq!(count_up.end, 1234.56);
        assert_eq!(count_up.prefix, "R$ ");
        assert_eq!(count_up.frame(0.0).text, "R$ 0,00");
        assert_eq!(count_up.frame(500.0).text, "R$ 1.157,40");
    }

    #[test]
    fn test_last_frame_writes_original_text() {
        let label = "R$ 2.499,90";
        let count_up = from_label(label);

        let last = count_up.frame(1000.0);
        assert!(last.done);
        assert_eq!(last.text, label);
        assert_eq!(count_up.frame(5000.0).text, label);
    }

    #[test]
    fn test_reformatting_reproduces_label() {
        for label in ["R$ 1.234,56", "R$ 89,90", "A partir de R$ 12.000,00", "3.199,99"] {
            let count_up = from_label(label);
            let rebuilt = format!("{}{}", count_up.prefix, format_pt_br(count_up.end));
            assert_eq!(rebuilt, label);
        }
    }

    #[test]
    fn test_prefix_fallbacks() {
        // Integer label: neither rendering matches, cut at the first digit
        assert_eq!(price_prefix("R$ 1.500", 1500.0), "R$ ");
        // Ungrouped label matches the plain rendering
        assert_eq!(price_prefix("R$ 1234,56", 1234.56), "R$ ");
        assert_eq!(price_prefix("Consulte", f64::NAN), "");
    }

    #[test]
    fn test_unparseable_label_recovers_at_the_end() {
        let count_up = from_label("Consulte");

        assert!(count_up.end.is_nan());
        assert_eq!(count_up.frame(300.0).text, "NaN");
        assert_eq!(count_up.frame(1000.0).text, "Consulte");
    }

    #[test]
    fn test_early_timestamp_clamps_to_start() {
        let count_up = CountUp::new(10.0, 20.0, 1000, "20,00");
        assert_eq!(count_up.progress(-16.0), 0.0);
        assert_eq!(count_up.frame(-16.0).text, "10,00");
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let count_up = CountUp::new(0.0, 5.0, 0, "R$ 5,00");
        assert_eq!(count_up.frame(0.0), Frame { text: "R$ 5,00".to_string(), done: true });
    }
}
