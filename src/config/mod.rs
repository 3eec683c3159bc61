//! Configuration module for the catalog page.

pub mod data;
pub mod dom;
pub mod shop;
pub mod text;

mod debug; // Private: callers use crate::config::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

// Re-export commonly used items
pub use data::DATA_SOURCES;
pub use dom::DOM;
pub use shop::SHOP;
pub use text::UI_TEXT;
