//! Style Injection
//!
//! CSS for the classes toggled by the handlers and for the product modal.

use web_sys::Document;

use crate::dom::js_err;

const STYLE_ELEMENT_ID: &str = "catalog-ui-styles";

pub const CATALOG_CSS: &str = r#"
.fade-in {
    animation: fadeIn 0.5s ease-in;
}

.search-highlight {
    animation: highlight 2s ease-in-out;
}

.animate-in {
    animation: slideInUp 0.6s ease-out;
}

.hover-effect {
    transform: scale(1.02) !important;
}

.product-modal {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    height: 100%;
    background: rgba(0,0,0,0.8);
    z-index: 10000;
    display: flex;
    align-items: center;
    justify-content: center;
    opacity: 0;
    transition: opacity 0.3s ease;
}

.product-modal.show {
    opacity: 1;
}

.modal-content {
    background: white;
    border-radius: 12px;
    max-width: 600px;
    width: 90%;
    max-height: 80%;
    overflow-y: auto;
    position: relative;
    transform: scale(0.8);
    transition: transform 0.3s ease;
}

.product-modal.show .modal-content {
    transform: scale(1);
}

.close-modal {
    position: absolute;
    top: 15px;
    right: 20px;
    font-size: 24px;
    cursor: pointer;
    z-index: 1;
    background: rgba(0,0,0,0.1);
    width: 30px;
    height: 30px;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
}

.modal-product {
    padding: 30px;
}

.modal-product img {
    width: 100%;
    max-height: 200px;
    object-fit: cover;
    border-radius: 8px;
    margin-bottom: 20px;
}

.modal-info h2 {
    margin-bottom: 15px;
    color: #333;
}

.modal-price {
    font-size: 24px;
    font-weight: 700;
    color: #e60012;
    margin-bottom: 20px;
}

.modal-actions {
    display: flex;
    gap: 15px;
    margin-top: 25px;
}

.btn-primary, .btn-secondary {
    padding: 12px 24px;
    border: none;
    border-radius: 6px;
    font-weight: 600;
    cursor: pointer;
    transition: all 0.3s;
}

.btn-primary {
    background: #e60012;
    color: white;
}

.btn-primary:hover {
    background: #c8000f;
}

.btn-secondary {
    background: transparent;
    color: #e60012;
    border: 2px solid #e60012;
}

.btn-secondary:hover {
    background: #e60012;
    color: white;
}

@keyframes fadeIn {
    from { opacity: 0; }
    to { opacity: 1; }
}

@keyframes highlight {
    0%, 100% { background: transparent; }
    50% { background: rgba(230, 0, 18, 0.1); }
}

@keyframes slideInUp {
    from {
        opacity: 0;
        transform: translateY(30px);
    }
    to {
        opacity: 1;
        transform: translateY(0);
    }
}
"#;

/// Append the catalog stylesheet to `<head>` unless it is already there
pub fn inject_styles(document: &Document) -> Result<(), String> {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(());
    }
    let head = document.head().ok_or("document has no <head>")?;
    let style = document.create_element("style").map_err(js_err)?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(CATALOG_CSS));
    head.append_child(&style).map_err(js_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_covers_toggled_classes() {
        for class in [".fade-in", ".search-highlight", ".animate-in", ".hover-effect", ".product-modal.show", ".close-modal"] {
            assert!(CATALOG_CSS.contains(class), "missing {}", class);
        }
        for keyframes in ["fadeIn", "highlight", "slideInUp"] {
            assert!(CATALOG_CSS.contains(&format!("@keyframes {}", keyframes)));
        }
    }
}
