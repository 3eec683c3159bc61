//! User-facing strings. The page is Spanish only.

pub struct UiText {
    /// Shown in the price slot while no price can be resolved
    pub price_placeholder: &'static str,
    pub prompt_size: &'static str,
    pub prompt_size_and_color: &'static str,
    pub order_button_prefix: &'static str,
    pub order_button_suffix: &'static str,
    pub size_label: &'static str,
    pub color_label: &'static str,
    pub price_label: &'static str,
    pub quality_label: &'static str,
    /// Thumbnail alt text: "{name} - {color} - imagen {n}"
    pub thumb_word: &'static str,
    /// href of a disabled purchase action
    pub inert_href: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    price_placeholder: "--",
    prompt_size: "Selecciona talla",
    prompt_size_and_color: "Selecciona talla y color",
    order_button_prefix: "¡Pedir",
    order_button_suffix: "por WhatsApp!",
    size_label: "Talla",
    color_label: "Color",
    price_label: "Precio",
    quality_label: "Calidad",
    thumb_word: "imagen",
    inert_href: "#",
};
