//! Product Modal Component
//!
//! Full-screen overlay with the clicked product's details.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::ProductSummary;

/// Holds a mounted view's `UnmountHandle` until the view is closed.
/// Releasing drops the handle, which unmounts the nodes and disposes the
/// view's reactive owner.
#[derive(Clone, Default)]
pub struct MountSlot(Rc<RefCell<Option<Box<dyn Any>>>>);

impl MountSlot {
    pub fn hold(&self, handle: impl Any) {
        self.0.replace(Some(Box::new(handle)));
    }

    pub fn is_mounted(&self) -> bool {
        self.0.borrow().is_some()
    }

    /// Drop the held handle; later calls do nothing
    pub fn release(&self) {
        let handle = self.0.borrow_mut().take();
        drop(handle);
    }
}

/// Product detail overlay
///
/// Fades in (`show` class) after `show_delay_ms`. Calls `on_close` for the ×
/// button or for a click that lands on the backdrop rather than the content.
#[component]
pub fn ProductModal<F>(
    product: ProductSummary,
    on_close: F,
    #[prop(default = 10)] show_delay_ms: u32,
) -> impl IntoView
where
    F: Fn() + Clone + 'static,
{
    let (shown, set_shown) = signal(false);

    set_timeout(
        move || {
            let _ = set_shown.try_set(true);
        },
        Duration::from_millis(u64::from(show_delay_ms)),
    );

    let close_on_backdrop = on_close.clone();
    let ProductSummary { name, image_src, price } = product;

    view! {
        <div
            class=move || if shown.get() { "product-modal show" } else { "product-modal" }
            on:click=move |ev| {
                if ev.target() == ev.current_target() {
                    close_on_backdrop();
                }
            }
        >
            <div class="modal-content">
                <span class="close-modal" on:click=move |_| on_close()>"×"</span>
                <div class="modal-product">
                    <img src=image_src.unwrap_or_default() alt=name.clone() />
                    <div class="modal-info">
                        <h2>{name}</h2>
                        {price.map(|price| view! { <div class="modal-price">{price}</div> })}
                        <p>"Especificações detalhadas do produto apareceriam aqui."</p>
                        <div class="modal-actions">
                            <button class="btn-primary">"Comprar Agora"</button>
                            <button class="btn-secondary">"Adicionar ao Carrinho"</button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Mount a `ProductModal` on `<body>`. Closing it unmounts the view and
/// disposes its owner.
pub fn open_product_modal(product: ProductSummary, show_delay_ms: u32) -> Result<(), String> {
    let body = document().body().ok_or("document has no <body>")?;
    web_sys::console::log_1(&format!("[MODAL] Opening '{}'", product.name).into());

    let slot = MountSlot::default();
    let on_close = {
        let slot = slot.clone();
        move || {
            // Released outside the click handler that belongs to the view
            let slot = slot.clone();
            spawn_local(async move { slot.release() });
        }
    };

    let handle = leptos::mount::mount_to(body, move || {
        view! { <ProductModal product=product on_close=on_close show_delay_ms=show_delay_ms /> }
    });
    slot.hold(handle);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct DropFlag(Rc<Cell<u32>>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_release_drops_the_held_handle() {
        let drops = Rc::new(Cell::new(0));
        let slot = MountSlot::default();
        slot.hold(DropFlag(drops.clone()));
        assert!(slot.is_mounted());
        assert_eq!(drops.get(), 0);

        slot.release();
        assert!(!slot.is_mounted());
        assert_eq!(drops.get(), 1);

        // Backdrop and × can both fire; the second close is a no-op
        slot.release();
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn test_release_through_a_clone() {
        let drops = Rc::new(Cell::new(0));
        let slot = MountSlot::default();
        let close_path = slot.clone();
        slot.hold(DropFlag(drops.clone()));

        close_path.release();
        assert!(!slot.is_mounted());
        assert_eq!(drops.get(), 1);
    }
}
