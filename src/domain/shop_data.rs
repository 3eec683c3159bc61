use crate::domain::{Catalog, PriceList};

/// All reference data the page needs. Populated once by the loader before any
/// handler is bound, never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct ShopData {
    pub catalog: Catalog,
    pub prices: PriceList,
}

impl ShopData {
    pub fn new(catalog: Catalog, prices: PriceList) -> Self {
        Self { catalog, prices }
    }
}
