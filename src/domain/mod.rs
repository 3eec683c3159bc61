// Reference data types. Pure and serde-only, no DOM access.
pub mod catalog;
pub mod price;
pub mod shop_data;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogEntry, DEFAULT_COLOR_KEY};
pub use price::{PriceEntry, PriceList};
pub use shop_data::ShopData;
