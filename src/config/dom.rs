//! Markup contract shared with the templating step that renders the page.
//!
//! Only selectors, attribute names and id prefixes live here. Changing any of
//! them means the HTML templates must change too.

pub struct DomContract {
    pub card_selector: &'static str,
    pub size_select_selector: &'static str,
    pub color_select_selector: &'static str,

    /// On the card: catalog key used for galleries
    pub card_product_id_attr: &'static str,
    /// On the card: display name used in the purchase message
    pub card_name_attr: &'static str,
    /// On the size select: model id addressing the price + button nodes
    pub size_model_id_attr: &'static str,
    /// On the color select: catalog key (mirrors the card attribute)
    pub color_product_id_attr: &'static str,

    pub price_id_prefix: &'static str,
    pub purchase_id_prefix: &'static str,
    pub gallery_id_prefix: &'static str,
    pub price_table_body_id: &'static str,

    pub gallery_main_class: &'static str,
    pub gallery_thumbs_class: &'static str,
    pub active_class: &'static str,
}

impl DomContract {
    pub fn price_id(&self, model_id: &str) -> String {
        format!("{}{}", self.price_id_prefix, model_id)
    }

    pub fn purchase_id(&self, model_id: &str) -> String {
        format!("{}{}", self.purchase_id_prefix, model_id)
    }

    pub fn gallery_id(&self, product_id: &str) -> String {
        format!("{}{}", self.gallery_id_prefix, product_id)
    }
}

pub const DOM: DomContract = DomContract {
    card_selector: ".product-card",
    size_select_selector: ".select-talla",
    color_select_selector: ".select-color",

    card_product_id_attr: "data-product-id",
    card_name_attr: "data-modelo",
    size_model_id_attr: "data-modelo-id",
    color_product_id_attr: "data-product-id",

    price_id_prefix: "precio-",
    purchase_id_prefix: "btn-whatsapp-",
    gallery_id_prefix: "gallery-",
    price_table_body_id: "price-table-body",

    gallery_main_class: "product-gallery-main",
    gallery_thumbs_class: "product-gallery-thumbs",
    active_class: "active",
};
