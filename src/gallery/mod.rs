// Gallery selection and thumbnail state
pub mod selector;
pub mod startup;
pub mod view;

// Re-export commonly used types
pub use selector::{Gallery, Thumb, select_gallery};
pub use startup::{ColorControl, StartupGallery, startup_gallery};
pub use view::GalleryView;
