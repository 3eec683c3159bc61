// Reference data loading
pub mod loader;
pub mod source;

// Re-export commonly used types
pub use loader::{DataDocument, LoadReport, load_shop_data};
pub use source::DocumentSource;
#[cfg(not(target_arch = "wasm32"))]
pub use source::FileSource;
#[cfg(target_arch = "wasm32")]
pub use source::HttpSource;
