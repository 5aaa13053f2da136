//! UI Components
//!
//! Leptos components mounted on top of the static catalog markup.

mod product_modal;

pub use product_modal::open_product_modal;
