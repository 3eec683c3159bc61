//! Wires every product card on the page to the loaded shop data.
//!
//! Binding happens once after loading and again on every `rebind()` call from
//! the host page. All listeners live in a thread-local [`ListenerRegistry`]
//! keyed per control, so a second binding replaces the first instead of
//! stacking on top of it.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::Element;

use crate::config::DOM;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::ShopData;
use crate::gallery::{ColorControl, startup_gallery};
use crate::pricing::price_table_rows;
use crate::ui::card::refresh_card;
use crate::ui::dom;
use crate::ui::gallery::show_gallery;
use crate::ui::listeners::{ListenerRegistry, color_listener_key, size_key, thumbs_key};
use crate::ui::table::render_price_table;

thread_local! {
    // Written once by `install`, read-only afterwards.
    static SHOP_DATA: RefCell<Option<Rc<ShopData>>> = const { RefCell::new(None) };
    static LISTENERS: RefCell<ListenerRegistry<EventListener>> =
        RefCell::new(ListenerRegistry::new());
}

pub(crate) fn with_listeners<R>(f: impl FnOnce(&mut ListenerRegistry<EventListener>) -> R) -> R {
    LISTENERS.with(|registry| f(&mut registry.borrow_mut()))
}

/// Stores the loaded data for the page lifetime and binds the page.
pub fn install(data: ShopData) {
    let data = Rc::new(data);
    SHOP_DATA.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&data)));
    bind_page(&data);
}

/// Binds the page again against the data already installed.
pub fn rebind() {
    let Some(data) = SHOP_DATA.with(|slot| slot.borrow().clone()) else {
        log::warn!("rebind() called before the shop data finished loading");
        return;
    };
    bind_page(&data);
}

fn bind_page(data: &Rc<ShopData>) {
    let Some(document) = dom::document() else {
        return;
    };

    let cards = dom::query_all(&document, DOM.card_selector);
    let mut live: HashSet<String> = HashSet::new();
    for card in &cards {
        live.extend(bind_card(card, data));
        if let Some(product_id) = dom::attr(card, DOM.card_product_id_attr) {
            live.insert(thumbs_key(&product_id));
        }
    }
    // Cards removed since the last pass take their listeners with them
    let stale = with_listeners(|registry| registry.retain_keys(&live));
    if stale > 0 {
        log::info!("Released listeners of {} controls no longer on the page", stale);
    }

    for card in &cards {
        init_gallery(card, data);
        // Reflect selections the browser restored on back/forward navigation
        refresh_card(card, data);
    }
    render_price_table(&price_table_rows(&data.prices));

    log::info!(
        "Bound {} product cards ({} listener groups)",
        cards.len(),
        with_listeners(|registry| registry.len())
    );
}

/// Binds the card's controls and returns the registry keys it now owns.
fn bind_card(card: &Element, data: &Rc<ShopData>) -> Vec<String> {
    let mut keys = Vec::new();

    let size_select = dom::select_in(card, DOM.size_select_selector);
    let model_id = size_select
        .as_ref()
        .and_then(|select| dom::attr(select, DOM.size_model_id_attr));

    if let (Some(size_select), Some(model_id)) = (&size_select, &model_id) {
        let key = size_key(model_id);
        let card = card.clone();
        let data = Rc::clone(data);
        let listener = EventListener::new(size_select, "change", move |_event| {
            refresh_card(&card, &data);
        });
        with_listeners(|registry| registry.replace(key.clone(), listener));
        keys.push(key);
    }

    if let Some(color_select) = dom::select_in(card, DOM.color_select_selector) {
        let product_id = dom::attr(&color_select, DOM.color_product_id_attr);
        let Some(key) = color_listener_key(product_id.as_deref(), model_id.as_deref()) else {
            return keys;
        };
        let select = color_select.clone();
        let card = card.clone();
        let data = Rc::clone(data);
        let listener = EventListener::new(&color_select, "change", move |_event| {
            let color = select.value();

            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_events {
                log::debug!("Color change on {:?}: {:?}", product_id, color);
            }

            // The price depends on the color even when the gallery cannot be found
            if let Some(product_id) = &product_id {
                show_gallery(&data, product_id, &color);
            }
            refresh_card(&card, &data);
        });
        with_listeners(|registry| registry.replace(key.clone(), listener));
        keys.push(key);
    }

    keys
}

fn init_gallery(card: &Element, data: &ShopData) {
    let Some(product_id) = dom::attr(card, DOM.card_product_id_attr) else {
        return;
    };

    let color_select = dom::select_in(card, DOM.color_select_selector);
    let current = color_select.as_ref().map(|s| s.value()).unwrap_or_default();
    let options = color_select
        .as_ref()
        .map(dom::option_values)
        .unwrap_or_default();
    let control = color_select.as_ref().map(|_| ColorControl {
        value: &current,
        options: &options,
    });

    let Some(startup) = startup_gallery(control) else {
        return;
    };
    if startup.select_option {
        if let Some(select) = &color_select {
            select.set_value(&startup.color);
        }
    }
    show_gallery(data, &product_id, &startup.color);
}
