use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Reserved color key used for colorless products and as the gallery fallback.
pub const DEFAULT_COLOR_KEY: &str = "default";

/// One sellable product as described by the catalog document.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CatalogEntry {
    #[serde(default, alias = "nombre")]
    pub name: String,
    // Absent in the document means "no color variants", never an error.
    #[serde(default, alias = "colores")]
    pub colors: HashMap<String, Vec<String>>,
}

impl CatalogEntry {
    pub fn images_for(&self, color_key: &str) -> Option<&[String]> {
        self.colors.get(color_key).map(Vec::as_slice)
    }

    pub fn has_default_gallery(&self) -> bool {
        self.colors.contains_key(DEFAULT_COLOR_KEY)
    }

    /// Reads one product leniently. A product that is not an object or whose
    /// name is not text is rejected; a malformed color list only loses that color.
    fn from_value(product_id: &str, value: &Value) -> Option<Self> {
        let Some(fields) = value.as_object() else {
            log::warn!("Catalog product {} is not an object, skipped", product_id);
            return None;
        };

        let name = match field(fields, "name", "nombre") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(name)) => name.clone(),
            Some(other) => {
                log::warn!("Catalog product {} has a non-text name {}, skipped", product_id, other);
                return None;
            }
        };

        let mut colors = HashMap::new();
        match field(fields, "colors", "colores") {
            None | Some(Value::Null) => {}
            Some(Value::Object(by_color)) => {
                for (color, images) in by_color {
                    match image_list(images) {
                        Some(images) => {
                            colors.insert(color.clone(), images);
                        }
                        None => log::warn!(
                            "Catalog product {} color {} is not a list of image paths, skipped",
                            product_id,
                            color
                        ),
                    }
                }
            }
            Some(other) => {
                log::warn!("Catalog product {} has colors {} that are not a map, ignored", product_id, other);
            }
        }

        Some(Self { name, colors })
    }
}

fn field<'v>(fields: &'v Map<String, Value>, name: &str, alias: &str) -> Option<&'v Value> {
    fields.get(name).or_else(|| fields.get(alias))
}

fn image_list(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()?
        .iter()
        .map(|path| path.as_str().map(str::to_string))
        .collect()
}

/// Product id -> catalog entry. Loaded once, read-only afterwards.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Catalog {
    products: HashMap<String, CatalogEntry>,
}

impl Catalog {
    /// Parses the catalog document. Only the top level must be a product-id map;
    /// malformed products are logged and left out so their neighbours still load.
    pub fn from_json(text: &str) -> Result<Self> {
        let raw: HashMap<String, Value> =
            serde_json::from_str(text).context("catalog document is not a product-id map")?;

        Ok(raw
            .iter()
            .filter_map(|(id, value)| CatalogEntry::from_value(id, value).map(|entry| (id.clone(), entry)))
            .collect())
    }

    pub fn get(&self, product_id: &str) -> Option<&CatalogEntry> {
        self.products.get(product_id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Product ids in sorted order (the document map itself is unordered).
    pub fn product_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.products.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

impl FromIterator<(String, CatalogEntry)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, CatalogEntry)>>(iter: I) -> Self {
        Self {
            products: iter.into_iter().collect(),
        }
    }
}
