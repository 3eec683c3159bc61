//! End-to-end checks of the pure pipeline: documents -> shop data -> card
//! selection -> what the page would show.

use futures::executor::block_on;

use crate::data::load_shop_data;
use crate::data::loader::tests::{MemorySource, TEST_SOURCES};
use crate::domain::{PriceEntry, PriceList, ShopData};
use crate::gallery::{GalleryView, select_gallery, startup_gallery};
use crate::pricing::{CardDisplay, CardSelection, Prompt, price_table_rows, resolve_price};

const SITE_PRODUCTS: &str = include_str!("../site/data/products.json");
const SITE_PRICES: &str = include_str!("../site/data/prices.json");

fn display_for(data: &ShopData, selection: &CardSelection) -> CardDisplay {
    CardDisplay::from(&resolve_price(selection, &data.prices))
}

fn decoded_query(display: &CardDisplay) -> String {
    let query = display.action_href.split_once("?text=").unwrap().1;
    urlencoding::decode(query).unwrap().into_owned()
}

#[test]
fn colorless_product_selecting_size() {
    let data = ShopData {
        prices: PriceList::from_entries(vec![PriceEntry::new("S", 10.0), PriceEntry::new("M", 12.0)]),
        ..Default::default()
    };

    let display = display_for(&data, &CardSelection::new("Polo Básico", "M", None));

    assert_eq!(display.price_text, "12");
    assert!(display.action_enabled);
    let payload = decoded_query(&display);
    assert!(payload.contains("Talla: M"));
    assert!(payload.contains("Precio: 12 S/."));
    assert!(!payload.contains("Color:"));
}

#[test]
fn color_required_then_chosen() {
    let data = ShopData {
        prices: PriceList::from_entries(vec![PriceEntry::new("M", 15.0)]),
        ..Default::default()
    };

    let mut selection = CardSelection::new("Polo", "M", Some(""));
    let display = display_for(&data, &selection);
    assert_eq!(display.price_text, "--");
    assert!(!display.action_enabled);
    assert_eq!(display.action_label, Prompt::SelectSizeAndColor.text());

    selection.color = Some("Red".to_string());
    let display = display_for(&data, &selection);
    assert_eq!(display.price_text, "15");
    assert!(display.action_enabled);
    assert!(decoded_query(&display).contains("Color: Red"));
}

#[test]
fn absent_color_renders_default_gallery() {
    let source = MemorySource::default()
        .with(
            TEST_SOURCES.catalog_url,
            r#"{ "p": { "name": "P", "colors": { "Red": ["img1", "img2"], "default": ["img3"] } } }"#,
        )
        .with(TEST_SOURCES.prices_url, "{}");
    let data = block_on(load_shop_data(&source, &TEST_SOURCES)).data;

    let gallery = select_gallery(&data.catalog, "p", "Blue").unwrap();
    let view = GalleryView::from_gallery(&gallery);
    assert_eq!(view.main_src, "img3");
    assert_eq!(view.thumbs.len(), 1);
}

#[test]
fn empty_price_document() {
    let source = MemorySource::default()
        .with(TEST_SOURCES.catalog_url, SITE_PRODUCTS)
        .with(TEST_SOURCES.prices_url, r#"{ "prices": [] }"#);
    let data = block_on(load_shop_data(&source, &TEST_SOURCES)).data;

    assert!(price_table_rows(&data.prices).is_empty());
    for size in ["S", "M", "L", ""] {
        for color in [None, Some(""), Some("Negro")] {
            let selection = CardSelection::new("Polo", size, color);
            assert!(!resolve_price(&selection, &data.prices).is_resolved());
        }
    }
}

#[test]
fn one_bad_row_or_product_degrades_locally() {
    let source = MemorySource::default()
        .with(
            TEST_SOURCES.catalog_url,
            r#"{
                "ok": { "nombre": "Polo Ok", "colores": { "default": ["ok.jpg"] } },
                "broken": { "nombre": "Polo Roto", "colores": { "default": "b.jpg" } }
            }"#,
        )
        .with(
            TEST_SOURCES.prices_url,
            r#"{ "precios": [ { "talla": "S", "precio": 10 }, { "talla": "M", "precio": null } ] }"#,
        );
    let report = block_on(load_shop_data(&source, &TEST_SOURCES));
    assert!(report.is_complete(), "both documents still parse");
    let data = report.data;

    let small = display_for(&data, &CardSelection::new("Polo Ok", "S", None));
    assert_eq!(small.price_text, "10");
    assert!(small.action_enabled);

    let medium = display_for(&data, &CardSelection::new("Polo Ok", "M", None));
    assert_eq!(medium.price_text, "--");
    assert!(!medium.action_enabled);

    let rows = price_table_rows(&data.prices);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].size, "S");

    assert_eq!(select_gallery(&data.catalog, "ok", "default").unwrap().main_image(), "ok.jpg");
    assert!(select_gallery(&data.catalog, "broken", "default").is_none());
}

#[test]
fn site_documents_load_and_render() {
    let source = MemorySource::default()
        .with(TEST_SOURCES.catalog_url, SITE_PRODUCTS)
        .with(TEST_SOURCES.prices_url, SITE_PRICES);
    let report = block_on(load_shop_data(&source, &TEST_SOURCES));
    assert!(report.is_complete());
    let data = report.data;

    let rows = price_table_rows(&data.prices);
    let sizes: Vec<&str> = rows.iter().map(|r| r.size.as_str()).collect();
    assert_eq!(sizes, vec!["S", "M", "L", "XL", "XXL"]);
    assert_eq!(rows[4].price_text, "42.5");

    // Card without a color control starts on the default gallery
    let startup = startup_gallery(None).unwrap();
    let condor = select_gallery(&data.catalog, "polo-condor", &startup.color).unwrap();
    assert_eq!(condor.main_alt(), "Polo Cóndor - default");

    // Product without any gallery data is left alone
    assert!(select_gallery(&data.catalog, "polo-lima", &startup.color).is_none());

    let display = display_for(&data, &CardSelection::new("Polo Andino", "XL", Some("Negro")));
    assert_eq!(display.action_label, "¡Pedir 40 S/ por WhatsApp!");
}
