//! Shop identity and the outbound purchase deep-link.

/// Fixed values that end up inside the purchase message
pub struct ShopConfig {
    /// Destination number for the messaging service (digits only, country code first)
    pub phone_number: &'static str,
    /// Deep-link prefix; the phone number and `?text=` are appended to it
    pub deep_link_base: &'static str,
    /// First line of every purchase message. `{name}` is the product display name.
    pub greeting_prefix: &'static str,
    /// Currency label used inside the message body
    pub message_currency: &'static str,
    /// Currency label used on the purchase button
    pub button_currency: &'static str,
    /// Fabric / quality descriptor appended to every message
    pub quality: &'static str,
    /// Used when a product card carries no display name
    pub fallback_product_name: &'static str,
}

impl ShopConfig {
    /// Everything up to (and including) the `text=` query key.
    pub fn deep_link_prefix(&self) -> String {
        format!("{}{}?text=", self.deep_link_base, self.phone_number)
    }
}

pub const SHOP: ShopConfig = ShopConfig {
    // Replace with the real business number before publishing
    phone_number: "51987654321",
    deep_link_base: "https://wa.me/",
    greeting_prefix: "Hola, me interesa la camiseta:",
    message_currency: "S/.",
    button_currency: "S/",
    quality: "Algodón Jersey 20/1 Reactivo.",
    fallback_product_name: "Producto",
};
