use crate::config::{SHOP, UI_TEXT};
use crate::utils::format_price;

/// The prefilled chat message behind an enabled purchase action.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseMessage {
    pub product_name: String,
    pub size: String,
    pub color: Option<String>,
    pub price: f64,
}

impl PurchaseMessage {
    pub fn new(product_name: &str, size: &str, color: Option<&str>, price: f64) -> Self {
        let product_name = match product_name.trim() {
            "" => SHOP.fallback_product_name,
            name => name,
        };
        Self {
            product_name: product_name.to_string(),
            size: size.to_string(),
            color: color.filter(|c| !c.is_empty()).map(str::to_string),
            price,
        }
    }

    /// One field per line; the color line only exists when a color was chosen.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("{} {}.", SHOP.greeting_prefix, self.product_name),
            format!("{}: {}", UI_TEXT.size_label, self.size),
        ];
        if let Some(color) = &self.color {
            lines.push(format!("{}: {}", UI_TEXT.color_label, color));
        }
        lines.push(format!(
            "{}: {} {}",
            UI_TEXT.price_label,
            format_price(self.price),
            SHOP.message_currency
        ));
        lines.push(format!("{}: {}", UI_TEXT.quality_label, SHOP.quality));
        lines
    }

    pub fn text(&self) -> String {
        self.lines().join("\n")
    }

    /// Deep link with the whole message percent-encoded as the `text` query value.
    pub fn deep_link(&self) -> String {
        format!(
            "{}{}",
            SHOP.deep_link_prefix(),
            urlencoding::encode(&self.text())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_without_color() {
        let message = PurchaseMessage::new("Polo Andino", "M", None, 12.0);
        assert_eq!(
            message.text(),
            "Hola, me interesa la camiseta: Polo Andino.\n\
             Talla: M\n\
             Precio: 12 S/.\n\
             Calidad: Algodón Jersey 20/1 Reactivo."
        );
    }

    #[test]
    fn test_color_line_only_when_chosen() {
        let with = PurchaseMessage::new("Polo", "L", Some("Rojo"), 15.0);
        assert!(with.lines().contains(&"Color: Rojo".to_string()));

        let blank = PurchaseMessage::new("Polo", "L", Some(""), 15.0);
        assert_eq!(blank.color, None);
        assert!(!blank.text().contains("Color:"));
    }

    #[test]
    fn test_blank_name_falls_back() {
        let message = PurchaseMessage::new("  ", "S", None, 10.0);
        assert_eq!(message.product_name, "Producto");
    }

    #[test]
    fn test_deep_link_is_percent_encoded() {
        let link = PurchaseMessage::new("Polo & Co", "M", Some("Azul marino"), 12.5).deep_link();

        assert!(link.starts_with("https://wa.me/51987654321?text="));
        let query = link.split_once("?text=").unwrap().1;
        assert!(!query.contains(' '));
        assert!(!query.contains('&'));
        assert!(!query.contains('\n'));
        assert!(query.contains("%0A"));

        let decoded = urlencoding::decode(query).unwrap();
        assert!(decoded.contains("Polo & Co"));
        assert!(decoded.contains("Color: Azul marino"));
        assert!(decoded.contains("Precio: 12.5 S/."));
    }
}
