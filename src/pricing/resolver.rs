//! Maps a card's current selection onto a price and a purchase action.

use crate::config::UI_TEXT;
use crate::domain::PriceList;
use crate::pricing::message::PurchaseMessage;

/// What a product card's controls currently hold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardSelection {
    pub product_name: String,
    /// Empty when nothing is chosen yet
    pub size: String,
    /// `None` when the card has no color control at all,
    /// `Some("")` when it has one with nothing chosen.
    pub color: Option<String>,
}

impl CardSelection {
    pub fn new(product_name: &str, size: &str, color: Option<&str>) -> Self {
        Self {
            product_name: product_name.to_string(),
            size: size.to_string(),
            color: color.map(str::to_string),
        }
    }

    pub fn color_required(&self) -> bool {
        self.color.is_some()
    }

    pub fn chosen_color(&self) -> Option<&str> {
        self.color.as_deref().filter(|c| !c.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    SelectSize,
    SelectSizeAndColor,
}

impl Prompt {
    pub fn text(self) -> &'static str {
        match self {
            Prompt::SelectSize => UI_TEXT.prompt_size,
            Prompt::SelectSizeAndColor => UI_TEXT.prompt_size_and_color,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PriceResolution {
    Resolved { price: f64, message: PurchaseMessage },
    Unresolved(Prompt),
}

impl PriceResolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, PriceResolution::Resolved { .. })
    }

    pub fn price(&self) -> Option<f64> {
        match self {
            PriceResolution::Resolved { price, .. } => Some(*price),
            PriceResolution::Unresolved(_) => None,
        }
    }
}

/// Resolved only when the size has a price AND a required color is chosen.
/// A price of zero is a real price.
pub fn resolve_price(selection: &CardSelection, prices: &PriceList) -> PriceResolution {
    let prompt = if selection.color_required() {
        Prompt::SelectSizeAndColor
    } else {
        Prompt::SelectSize
    };

    if selection.size.is_empty() {
        return PriceResolution::Unresolved(prompt);
    }
    let Some(price) = prices.price_for(&selection.size) else {
        return PriceResolution::Unresolved(prompt);
    };
    if selection.color_required() && selection.chosen_color().is_none() {
        return PriceResolution::Unresolved(prompt);
    }

    PriceResolution::Resolved {
        price,
        message: PurchaseMessage::new(
            &selection.product_name,
            &selection.size,
            selection.chosen_color(),
            price,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PriceEntry;

    fn prices(rows: &[(&str, f64)]) -> PriceList {
        PriceList::from_entries(rows.iter().map(|(s, p)| PriceEntry::new(*s, *p)).collect())
    }

    #[test]
    fn test_every_listed_size_resolves_to_its_price() {
        let list = prices(&[("S", 10.0), ("M", 12.0), ("L", 14.5), ("XL", 16.0)]);
        for entry in list.entries() {
            let selection = CardSelection::new("Polo", &entry.size, None);
            let resolution = resolve_price(&selection, &list);
            assert_eq!(resolution.price(), Some(entry.price), "size {}", entry.size);
        }
    }

    #[test]
    fn test_unlisted_size_is_unresolved() {
        let list = prices(&[("S", 10.0)]);
        for size in ["M", "XXL", "s", " S"] {
            let resolution = resolve_price(&CardSelection::new("Polo", size, None), &list);
            assert_eq!(resolution, PriceResolution::Unresolved(Prompt::SelectSize));
        }
    }

    #[test]
    fn test_empty_size_is_unresolved_even_if_listed() {
        let list = prices(&[("", 5.0)]);
        let resolution = resolve_price(&CardSelection::new("Polo", "", None), &list);
        assert!(!resolution.is_resolved());
    }

    #[test]
    fn test_zero_price_resolves() {
        let list = prices(&[("Kids", 0.0)]);
        let resolution = resolve_price(&CardSelection::new("Polo", "Kids", None), &list);
        assert_eq!(resolution.price(), Some(0.0));
    }

    #[test]
    fn test_required_color_missing_prompts_for_both() {
        let list = prices(&[("M", 15.0)]);

        let blank = resolve_price(&CardSelection::new("Polo", "M", Some("")), &list);
        assert_eq!(blank, PriceResolution::Unresolved(Prompt::SelectSizeAndColor));

        let no_size = resolve_price(&CardSelection::new("Polo", "", Some("Red")), &list);
        assert_eq!(no_size, PriceResolution::Unresolved(Prompt::SelectSizeAndColor));
    }

    #[test]
    fn test_color_is_carried_into_message() {
        let list = prices(&[("M", 15.0)]);
        let resolution = resolve_price(&CardSelection::new("Polo", "M", Some("Red")), &list);
        match resolution {
            PriceResolution::Resolved { price, message } => {
                assert_eq!(price, 15.0);
                assert_eq!(message.color.as_deref(), Some("Red"));
                assert_eq!(message.size, "M");
            }
            other => panic!("expected resolved, got {:?}", other),
        }
    }

    #[test]
    fn prompt_texts() {
        assert_eq!(Prompt::SelectSize.text(), "Selecciona talla");
        assert_eq!(Prompt::SelectSizeAndColor.text(), "Selecciona talla y color");
    }
}
