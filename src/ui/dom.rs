//! Thin helpers over `web_sys` lookups. Every helper answers `None` / empty
//! for a missing anchor so callers can skip silently.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlOptionElement, HtmlSelectElement};

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// All elements of the page matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        log::warn!("Invalid selector {}", selector);
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|idx| nodes.item(idx))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// First `<select>` under `root` matching `selector`.
pub fn select_in(root: &Element, selector: &str) -> Option<HtmlSelectElement> {
    root.query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<HtmlSelectElement>()
        .ok()
}

/// Option values in document order, placeholders (empty values) included.
pub fn option_values(select: &HtmlSelectElement) -> Vec<String> {
    (0..select.length())
        .filter_map(|idx| select.item(idx))
        .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
        .map(|option| option.value())
        .collect()
}

/// Non-empty attribute value.
pub fn attr(element: &Element, name: &str) -> Option<String> {
    element.get_attribute(name).filter(|value| !value.is_empty())
}
