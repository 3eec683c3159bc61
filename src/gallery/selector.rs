use crate::config::UI_TEXT;
use crate::domain::{Catalog, DEFAULT_COLOR_KEY};

/// The image list picked for one product and color, borrowed from the catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gallery<'a> {
    pub product_name: &'a str,
    /// The key actually used, `"default"` after a fallback. Used in alt texts.
    pub color_key: &'a str,
    /// Never empty
    pub images: &'a [String],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumb {
    pub src: String,
    pub alt: String,
}

impl<'a> Gallery<'a> {
    pub fn main_image(&self) -> &'a str {
        self.images.first().map(String::as_str).unwrap_or_default()
    }

    pub fn main_alt(&self) -> String {
        format!("{} - {}", self.product_name, self.color_key)
    }

    pub fn thumbs(&self) -> Vec<Thumb> {
        self.images
            .iter()
            .enumerate()
            .map(|(idx, src)| Thumb {
                src: src.clone(),
                alt: format!(
                    "{} - {} - {} {}",
                    self.product_name,
                    self.color_key,
                    UI_TEXT.thumb_word,
                    idx + 1
                ),
            })
            .collect()
    }
}

/// Looks up `color` for `product_id`, falling back to the `"default"` key.
///
/// Returns `None` (leave whatever is rendered alone) when the product is
/// unknown, when neither key exists, or when the chosen key has no images.
/// A present-but-empty color does not fall back.
pub fn select_gallery<'a>(
    catalog: &'a Catalog,
    product_id: &str,
    color: &str,
) -> Option<Gallery<'a>> {
    let entry = catalog.get(product_id)?;

    let (color_key, images) = entry
        .colors
        .get_key_value(color)
        .or_else(|| entry.colors.get_key_value(DEFAULT_COLOR_KEY))?;

    if images.is_empty() {
        return None;
    }

    Some(Gallery {
        product_name: &entry.name,
        color_key,
        images,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"{
                "polo": {
                    "name": "Polo Andino",
                    "colors": {
                        "Red": ["img1.jpg", "img2.jpg"],
                        "default": ["img3.jpg"],
                        "Ghost": []
                    }
                },
                "plain": { "name": "Plain", "colors": { "Black": ["black.jpg"] } }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_exact_color_wins() {
        let catalog = catalog();
        let gallery = select_gallery(&catalog, "polo", "Red").unwrap();
        assert_eq!(gallery.color_key, "Red");
        assert_eq!(gallery.main_image(), "img1.jpg");
        assert_eq!(gallery.images.len(), 2);
    }

    #[test]
    fn test_unknown_color_falls_back_to_default() {
        let catalog = catalog();
        let gallery = select_gallery(&catalog, "polo", "Blue").unwrap();
        assert_eq!(gallery.color_key, "default");
        assert_eq!(gallery.main_image(), "img3.jpg");
        assert_eq!(gallery.main_alt(), "Polo Andino - default");
    }

    #[test]
    fn test_no_color_and_no_default_is_noop() {
        let catalog = catalog();
        assert!(select_gallery(&catalog, "plain", "Blue").is_none());
        assert!(select_gallery(&catalog, "plain", "default").is_none());
        assert!(select_gallery(&catalog, "missing", "Red").is_none());
    }

    #[test]
    fn test_empty_image_list_does_not_fall_back() {
        let catalog = catalog();
        assert!(select_gallery(&catalog, "polo", "Ghost").is_none());
    }

    #[test]
    fn thumb_alts_are_numbered_from_one() {
        let catalog = catalog();
        let thumbs = select_gallery(&catalog, "polo", "Red").unwrap().thumbs();
        assert_eq!(thumbs[0].alt, "Polo Andino - Red - imagen 1");
        assert_eq!(thumbs[1].alt, "Polo Andino - Red - imagen 2");
        assert_eq!(thumbs[1].src, "img2.jpg");
    }
}
