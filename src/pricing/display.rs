use crate::config::{SHOP, UI_TEXT};
use crate::pricing::resolver::PriceResolution;
use crate::utils::format_price;

/// Everything the price slot and purchase action of one card should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDisplay {
    pub price_text: String,
    pub action_label: String,
    pub action_href: String,
    pub action_enabled: bool,
}

impl From<&PriceResolution> for CardDisplay {
    fn from(resolution: &PriceResolution) -> Self {
        match resolution {
            PriceResolution::Resolved { price, message } => {
                let price_text = format_price(*price);
                Self {
                    action_label: format!(
                        "{} {} {} {}",
                        UI_TEXT.order_button_prefix,
                        price_text,
                        SHOP.button_currency,
                        UI_TEXT.order_button_suffix
                    ),
                    price_text,
                    action_href: message.deep_link(),
                    action_enabled: true,
                }
            }
            PriceResolution::Unresolved(prompt) => Self {
                price_text: UI_TEXT.price_placeholder.to_string(),
                action_label: prompt.text().to_string(),
                action_href: UI_TEXT.inert_href.to_string(),
                action_enabled: false,
            },
        }
    }
}
