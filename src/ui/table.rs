use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::config::DOM;
use crate::pricing::{PriceRow, TableBody, redraw_table};
use crate::ui::dom;

/// The price table `<tbody>` as a [`TableBody`]; rows carry text nodes only.
struct DomTableBody<'a> {
    document: &'a Document,
    body: &'a Element,
}

impl TableBody for DomTableBody<'_> {
    type Error = JsValue;

    fn clear(&mut self) {
        self.body.set_inner_html("");
    }

    fn append_row(&mut self, row: &PriceRow) -> Result<(), JsValue> {
        let tr = self.document.create_element("tr")?;

        let size_cell = self.document.create_element("td")?;
        let strong = self.document.create_element("strong")?;
        strong.set_text_content(Some(&row.size));
        size_cell.append_child(&strong)?;

        let price_cell = self.document.create_element("td")?;
        price_cell.set_text_content(Some(&row.price_text));

        tr.append_child(&size_cell)?;
        tr.append_child(&price_cell)?;
        self.body.append_child(&tr)?;
        Ok(())
    }
}

/// Clears the price table body and rebuilds one row per entry.
pub fn render_price_table(rows: &[PriceRow]) {
    let Some(document) = dom::document() else {
        return;
    };
    let Some(body) = document.get_element_by_id(DOM.price_table_body_id) else {
        return;
    };
    let mut table = DomTableBody {
        document: &document,
        body: &body,
    };
    if let Err(e) = redraw_table(&mut table, rows) {
        log::warn!("Price table could not be rendered: {:?}", e);
    }
}
