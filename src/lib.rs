//! Product catalog page enhancer.
//!
//! Loads the catalog and price documents, then wires each product card's size
//! and color selectors to its price slot, purchase link and image gallery.
//! Everything except `ui` (and the wasm entry points below) is plain Rust and
//! is tested natively.

// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod gallery;
pub mod pricing;
pub mod ui;
pub mod utils;

#[cfg(test)]
mod scenario_tests;

// Re-export commonly used types
pub use data::{DocumentSource, LoadReport, load_shop_data};
pub use domain::{Catalog, CatalogEntry, PriceEntry, PriceList, ShopData};
pub use gallery::{GalleryView, select_gallery};
pub use pricing::{CardDisplay, CardSelection, PriceResolution, resolve_price};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Browser entry point. Runs once the module is instantiated (the page loads
/// it as a deferred module, so the markup is already parsed).
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    // A. Init Logging
    console_error_panic_hook::set_once();
    ui::logging::init_logging();

    log::info!("🛒 Catalog enhancer starting...");

    // B. Load both documents; failures degrade to empty data
    let report = load_shop_data(&data::HttpSource, &config::DATA_SOURCES).await;
    if !report.is_complete() {
        log::warn!("⚠️  Running with partial data, missing: {:?}", report.failed);
    }

    // C. Wire the page
    ui::binder::install(report.data);
    Ok(())
}

/// Re-binds every product card, e.g. after the host page re-rendered them.
/// Previously bound listeners are replaced, never duplicated.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn rebind() {
    ui::binder::rebind();
}
