//! Startup data loading.
//!
//! Both documents are requested concurrently and awaited together. A failure
//! of either one is logged and replaced by empty data so the page can still be
//! wired and the price slots fall back to their placeholders.

use anyhow::Result;
use strum_macros::{AsRefStr, Display};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::data::DataSources;
use crate::data::source::DocumentSource;
use crate::domain::{Catalog, PriceList, ShopData};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
pub enum DataDocument {
    #[strum(serialize = "catalog")]
    Catalog,
    #[strum(serialize = "price list")]
    Prices,
}

/// What the loader produced, plus which documents had to be replaced by defaults.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub data: ShopData,
    pub failed: Vec<DataDocument>,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

async fn load_catalog(source: &dyn DocumentSource, location: &str) -> Result<Catalog> {
    let text = source.fetch_text(location).await?;
    let catalog = Catalog::from_json(&text)?;

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_data_load {
        log::debug!(
            "Catalog: {} bytes, {} products from {}",
            text.len(),
            catalog.len(),
            location
        );
    }
    Ok(catalog)
}

async fn load_prices(source: &dyn DocumentSource, location: &str) -> Result<PriceList> {
    let text = source.fetch_text(location).await?;
    let prices = PriceList::from_json(&text)?;

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_data_load {
        log::debug!(
            "Price list: {} bytes, {} rows from {}",
            text.len(),
            prices.len(),
            location
        );
    }
    Ok(prices)
}

/// Join both loads, then proceed regardless of individual failure.
pub async fn load_shop_data(source: &dyn DocumentSource, sources: &DataSources) -> LoadReport {
    let (catalog, prices) = futures::join!(
        load_catalog(source, sources.catalog_url),
        load_prices(source, sources.prices_url)
    );

    let mut report = LoadReport::default();

    match catalog {
        Ok(catalog) => report.data.catalog = catalog,
        Err(e) => {
            log::warn!("⚠️  {} unavailable, galleries stay as rendered: {:#}", DataDocument::Catalog, e);
            report.failed.push(DataDocument::Catalog);
        }
    }

    match prices {
        Ok(prices) => {
            let duplicates = prices.duplicate_sizes();
            if !duplicates.is_empty() {
                log::warn!("Sizes listed more than once (last price wins): {:?}", duplicates);
            }
            report.data.prices = prices;
        }
        Err(e) => {
            log::warn!("⚠️  {} unavailable, prices show placeholders: {:#}", DataDocument::Prices, e);
            report.failed.push(DataDocument::Prices);
        }
    }

    log::info!(
        "Loaded {} products and {} price rows via {}",
        report.data.catalog.len(),
        report.data.prices.len(),
        source.signature()
    );
    report
}
