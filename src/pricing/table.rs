use crate::domain::PriceList;
use crate::utils::format_price;

/// One rendered row of the price table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRow {
    /// Rendered emphasized
    pub size: String,
    pub price_text: String,
}

/// One row per entry, in document order. Duplicated sizes keep all their rows.
pub fn price_table_rows(prices: &PriceList) -> Vec<PriceRow> {
    prices
        .entries()
        .iter()
        .map(|entry| PriceRow {
            size: entry.size.clone(),
            price_text: format_price(entry.price),
        })
        .collect()
}

/// Something the price table can be drawn into (the DOM `<tbody>` in the browser).
pub trait TableBody {
    type Error;

    fn clear(&mut self);
    fn append_row(&mut self, row: &PriceRow) -> Result<(), Self::Error>;
}

/// Replaces whatever `body` held with `rows`, in order. Drawing twice never
/// leaves rows from the first pass behind.
pub fn redraw_table<B: TableBody>(body: &mut B, rows: &[PriceRow]) -> Result<(), B::Error> {
    body.clear();
    rows.iter().try_for_each(|row| body.append_row(row))
}
