// Price resolution, purchase message and price table rows
pub mod display;
pub mod message;
pub mod resolver;
pub mod table;

// Re-export commonly used types
pub use display::CardDisplay;
pub use message::PurchaseMessage;
pub use resolver::{CardSelection, PriceResolution, Prompt, resolve_price};
pub use table::{PriceRow, TableBody, price_table_rows, redraw_table};
