//! Loads the site's reference documents from disk and prints what the page
//! would render: the price table, and optionally one card's price and gallery.
//!
//!     cargo run --bin preview_data -- --data-dir site --product polo-andino --size M --color Negro

// The helper is native only; the wasm build still wants a main().
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use anyhow::{Result, bail};
    use catalog_enhancer::config::{DATA_SOURCES, DOM};
    use catalog_enhancer::data::{FileSource, load_shop_data};
    use catalog_enhancer::domain::ShopData;
    use catalog_enhancer::gallery::{GalleryView, select_gallery, startup_gallery};
    use catalog_enhancer::pricing::{CardDisplay, CardSelection, price_table_rows, resolve_price};
    use clap::Parser;
    use std::path::PathBuf;

    #[derive(Parser, Debug)]
    #[command(author, version, about, long_about = None)]
    struct Args {
        /// Site root containing the data/ directory
        #[arg(long, default_value = ".")]
        data_dir: PathBuf,

        /// Product id to preview (catalog key / card data-product-id)
        #[arg(long)]
        product: Option<String>,

        /// Selected size for the previewed card
        #[arg(long, default_value = "")]
        size: String,

        /// Selected color; omit for cards without a color selector
        #[arg(long)]
        color: Option<String>,

        /// Fail instead of degrading when a document cannot be loaded
        #[arg(long, default_value_t = false)]
        strict: bool,
    }

    pub fn run() -> Result<()> {
        // Default to info, RUST_LOG still wins
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();

        let args = Args::parse();
        #[cfg(debug_assertions)]
        log::info!("Parsed arguments: {:?}", args);

        let source = FileSource::new(&args.data_dir);
        let report = futures::executor::block_on(load_shop_data(&source, &DATA_SOURCES));
        if args.strict && !report.is_complete() {
            bail!("could not load: {:?}", report.failed);
        }
        let data = report.data;

        print_price_table(&data);
        if let Some(product_id) = &args.product {
            print_card(&data, product_id, &args.size, args.color.as_deref());
        }
        Ok(())
    }

    fn print_price_table(data: &ShopData) {
        let rows = price_table_rows(&data.prices);
        println!("#{} ({} rows)", DOM.price_table_body_id, rows.len());
        for row in rows {
            println!("  {:<8} {}", row.size, row.price_text);
        }
    }

    fn print_card(data: &ShopData, product_id: &str, size: &str, color: Option<&str>) {
        let name = data
            .catalog
            .get(product_id)
            .map(|entry| entry.name.as_str())
            .unwrap_or_default();
        if name.is_empty() {
            log::warn!("⚠️  {} is not in the catalog", product_id);
        }

        let selection = CardSelection::new(name, size, color);
        let display = CardDisplay::from(&resolve_price(&selection, &data.prices));
        println!();
        println!("Card {}", product_id);
        println!("  price   : {}", display.price_text);
        println!(
            "  action  : {} [{}]",
            display.action_label,
            if display.action_enabled { "enabled" } else { "disabled" }
        );
        println!("  href    : {}", display.action_href);

        // Same choice the page makes: a chosen color, else the default gallery
        let gallery_color = match color.filter(|c| !c.is_empty()) {
            Some(color) => color.to_string(),
            None => startup_gallery(None).map(|s| s.color).unwrap_or_default(),
        };
        match select_gallery(&data.catalog, product_id, &gallery_color) {
            Some(gallery) => {
                let view = GalleryView::from_gallery(&gallery);
                println!("  gallery : {} ({})", view.main_src, view.main_alt);
                for (idx, thumb) in view.thumbs.iter().enumerate() {
                    let marker = if view.is_active(idx) { "*" } else { " " };
                    println!("   {} {}", marker, thumb.src);
                }
            }
            None => println!("  gallery : (unchanged)"),
        }
    }
}
