//! Builds a product gallery (primary image + thumbnail strip) inside its container.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlImageElement};

use crate::config::DOM;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::ShopData;
use crate::gallery::{GalleryView, select_gallery};
use crate::ui::binder::with_listeners;
use crate::ui::dom;
use crate::ui::listeners::thumbs_key;

fn create_img(document: &Document, src: &str, alt: &str) -> Result<HtmlImageElement, JsValue> {
    let img = document.create_element("img")?.dyn_into::<HtmlImageElement>()?;
    img.set_src(src);
    img.set_alt(alt);
    Ok(img)
}

fn create_div(document: &Document, class: &str) -> Result<Element, JsValue> {
    let div = document.create_element("div")?;
    div.set_class_name(class);
    Ok(div)
}

/// Shows the gallery for `color` (or the default one). Leaves the container
/// untouched when the catalog has nothing to show.
pub fn show_gallery(data: &ShopData, product_id: &str, color: &str) {
    let Some(gallery) = select_gallery(&data.catalog, product_id, color) else {
        return;
    };
    let Some(document) = dom::document() else {
        return;
    };
    let Some(container) = document.get_element_by_id(&DOM.gallery_id(product_id)) else {
        return;
    };

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_gallery_events {
        log::debug!(
            "Gallery {}: {} ({} images)",
            product_id,
            gallery.color_key,
            gallery.images.len()
        );
    }

    let view = GalleryView::from_gallery(&gallery);
    if let Err(e) = render_gallery(&document, &container, product_id, view) {
        log::warn!("Gallery {} could not be rendered: {:?}", product_id, e);
    }
}

fn render_gallery(
    document: &Document,
    container: &Element,
    product_id: &str,
    view: GalleryView,
) -> Result<(), JsValue> {
    container.set_inner_html("");

    let main_div = create_div(document, DOM.gallery_main_class)?;
    let main_img = create_img(document, &view.main_src, &view.main_alt)?;
    main_div.append_child(&main_img)?;

    let thumbs_div = create_div(document, DOM.gallery_thumbs_class)?;
    let mut thumb_imgs = Vec::with_capacity(view.thumbs.len());
    for (idx, thumb) in view.thumbs.iter().enumerate() {
        let img = create_img(document, &thumb.src, &thumb.alt)?;
        if view.is_active(idx) {
            img.class_list().add_1(DOM.active_class)?;
        }
        thumbs_div.append_child(&img)?;
        thumb_imgs.push(img);
    }

    container.append_child(&main_div)?;
    container.append_child(&thumbs_div)?;

    let view = Rc::new(RefCell::new(view));
    let thumb_imgs = Rc::new(thumb_imgs);
    let listeners: Vec<EventListener> = thumb_imgs
        .iter()
        .enumerate()
        .map(|(idx, img)| {
            let view = Rc::clone(&view);
            let thumbs = Rc::clone(&thumb_imgs);
            let main_img = main_img.clone();
            EventListener::new(img, "click", move |_event| {
                let mut view = view.borrow_mut();
                let Some(src) = view.activate(idx) else {
                    return;
                };
                main_img.set_src(src);
                for (i, thumb) in thumbs.iter().enumerate() {
                    if let Err(e) = thumb
                        .class_list()
                        .toggle_with_force(DOM.active_class, view.is_active(i))
                    {
                        log::warn!("Thumbnail {} active class not updated: {:?}", i, e);
                    }
                }
            })
        })
        .collect();

    // Replaces (and detaches) the listeners of the previous strip
    with_listeners(|registry| registry.replace_all(thumbs_key(product_id), listeners));
    Ok(())
}
