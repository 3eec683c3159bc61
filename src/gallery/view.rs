use crate::gallery::selector::{Gallery, Thumb};

/// Rendered state of one gallery: the primary image and a strip of thumbnails
/// with exactly one of them active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryView {
    pub main_src: String,
    pub main_alt: String,
    pub thumbs: Vec<Thumb>,
    active: usize,
}

impl GalleryView {
    pub fn from_gallery(gallery: &Gallery<'_>) -> Self {
        Self {
            main_src: gallery.main_image().to_string(),
            main_alt: gallery.main_alt(),
            thumbs: gallery.thumbs(),
            active: 0,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    /// Makes `index` the only active thumbnail and shows its image as primary.
    /// Out-of-range indices change nothing.
    pub fn activate(&mut self, index: usize) -> Option<&str> {
        let thumb = self.thumbs.get(index)?;
        self.main_src = thumb.src.clone();
        self.active = index;
        Some(&self.main_src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Catalog;
    use crate::gallery::selector::select_gallery;

    fn view() -> GalleryView {
        let catalog = Catalog::from_json(
            r#"{ "p": { "name": "P", "colors": { "Red": ["a.jpg", "b.jpg", "c.jpg"] } } }"#,
        )
        .unwrap();
        GalleryView::from_gallery(&select_gallery(&catalog, "p", "Red").unwrap())
    }

    #[test]
    fn test_first_thumb_starts_active() {
        let view = view();
        assert_eq!(view.main_src, "a.jpg");
        assert_eq!(view.main_alt, "P - Red");
        assert!(view.is_active(0));
        assert_eq!(view.thumbs.len(), 3);
    }

    #[test]
    fn test_activation_is_exclusive() {
        let mut view = view();
        assert_eq!(view.activate(2), Some("c.jpg"));
        assert_eq!(view.main_src, "c.jpg");

        let active: Vec<usize> = (0..view.thumbs.len()).filter(|&i| view.is_active(i)).collect();
        assert_eq!(active, vec![2]);

        view.activate(1);
        assert_eq!(view.active_index(), 1);
        assert_eq!(view.main_src, "b.jpg");
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut view = view();
        view.activate(1);
        assert_eq!(view.activate(9), None);
        assert_eq!(view.active_index(), 1);
        assert_eq!(view.main_src, "b.jpg");
    }
}
