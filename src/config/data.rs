//! Locations of the two reference documents.

pub struct DataSources {
    /// Catalog metadata: product id -> name + color galleries
    pub catalog_url: &'static str,
    /// Ordered price list by size
    pub prices_url: &'static str,
}

pub const DATA_SOURCES: DataSources = DataSources {
    catalog_url: "data/products.json",
    prices_url: "data/prices.json",
};
