//! Reads one product card's selection and writes its price slot and purchase action.

use web_sys::{Document, Element};

use crate::config::DOM;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::ShopData;
use crate::pricing::{CardDisplay, CardSelection, resolve_price};
use crate::ui::dom;

/// Model id plus current selection, or `None` for a card without a size control.
pub fn read_selection(card: &Element) -> Option<(String, CardSelection)> {
    let size_select = dom::select_in(card, DOM.size_select_selector)?;
    let model_id = dom::attr(&size_select, DOM.size_model_id_attr)?;

    let color = dom::select_in(card, DOM.color_select_selector).map(|select| select.value());
    let name = card.get_attribute(DOM.card_name_attr).unwrap_or_default();

    let selection = CardSelection::new(&name, &size_select.value(), color.as_deref());
    Some((model_id, selection))
}

/// Writes `display` into the nodes addressed by `model_id`. Both the price slot
/// and the purchase action must exist, otherwise nothing is written.
pub fn write_display(document: &Document, model_id: &str, display: &CardDisplay) {
    let Some(price_slot) = document.get_element_by_id(&DOM.price_id(model_id)) else {
        return;
    };
    let Some(action) = document.get_element_by_id(&DOM.purchase_id(model_id)) else {
        return;
    };

    price_slot.set_text_content(Some(&display.price_text));
    action.set_text_content(Some(&display.action_label));

    let written = if display.action_enabled {
        action
            .remove_attribute("disabled")
            .and_then(|_| action.set_attribute("href", &display.action_href))
    } else {
        action
            .set_attribute("disabled", "true")
            .and_then(|_| action.set_attribute("href", &display.action_href))
    };
    if let Err(e) = written {
        log::warn!("Could not update purchase action {}: {:?}", model_id, e);
    }
}

/// Re-resolves the card's price from its current controls.
pub fn refresh_card(card: &Element, data: &ShopData) {
    let Some((model_id, selection)) = read_selection(card) else {
        return;
    };
    let Some(document) = dom::document() else {
        return;
    };

    let resolution = resolve_price(&selection, &data.prices);

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_ui_events {
        log::debug!(
            "Card {}: size={:?} color={:?} -> {:?}",
            model_id,
            selection.size,
            selection.color,
            resolution.price()
        );
    }

    write_display(&document, &model_id, &CardDisplay::from(&resolution));
}
