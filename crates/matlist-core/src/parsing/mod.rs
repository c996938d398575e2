pub mod normalize;
pub mod text;
pub mod values;

use crate::extraction::table::TableLayout;
use crate::extraction::PageContent;
use crate::model::LineItem;
use normalize::normalize_text;
use serde::Serialize;
use values::parse_quantity;

/// Below this many table rows on a page the free-text parser is tried too.
const MIN_TABLE_ROWS: usize = 2;

/// A candidate row rejected because its quantity did not parse.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedRow {
    pub source: String,
    pub page_number: usize,
    pub line_text: String,
    pub reason: String,
}

/// Result of reading one candidate row.
#[derive(Debug, Clone)]
pub enum RowOutcome {
    Item(LineItem),
    Skipped(SkippedRow),
}

impl RowOutcome {
    fn is_item(&self) -> bool {
        matches!(self, RowOutcome::Item(_))
    }
}

/// Line items of a whole document, in page order.
///
/// Pages are parsed one at a time as the iterator is advanced.
pub fn line_items<'a>(
    source: &'a str,
    pages: &'a [PageContent],
) -> impl Iterator<Item = RowOutcome> + 'a {
    pages.iter().flat_map(move |page| parse_page(source, page))
}

/// Parse one page, table first, falling back to free text when the table
/// yields too little. Only one strategy's rows are kept per page.
pub fn parse_page(source: &str, page: &PageContent) -> Vec<RowOutcome> {
    let table = parse_table_rows(source, page);
    let table_items = table.iter().filter(|o| o.is_item()).count();
    if table_items >= MIN_TABLE_ROWS {
        return table;
    }

    let text = text::parse_text_rows(source, page);
    let text_items = text.iter().filter(|o| o.is_item()).count();
    log::debug!(
        "{source} page {}: {table_items} table row(s), {text_items} text row(s)",
        page.page_number
    );
    if text_items > table_items {
        text
    } else {
        table
    }
}

/// Parse rows below every line-item table header on the page.
fn parse_table_rows(source: &str, page: &PageContent) -> Vec<RowOutcome> {
    let mut rows = Vec::new();
    let mut layout: Option<TableLayout> = None;

    for line in &page.lines {
        if let Some(header) = TableLayout::from_header(line) {
            layout = Some(header);
            continue;
        }

        let Some(layout) = &layout else {
            continue;
        };

        let cells = layout.cells(line);
        let quantity_raw = normalize_text(&cells.quantity);
        let units = normalize_text(&cells.units);
        let size = normalize_text(&cells.size);
        let description = normalize_text(&cells.description);

        // Blank lines, footers and totals lack one of these.
        if quantity_raw.is_empty() || units.is_empty() || description.is_empty() {
            continue;
        }

        match parse_quantity(&quantity_raw) {
            Ok(quantity) => rows.push(RowOutcome::Item(LineItem {
                quantity,
                units,
                size,
                description,
                source: source.to_string(),
            })),
            Err(e) => rows.push(RowOutcome::Skipped(SkippedRow {
                source: source.to_string(),
                page_number: page.page_number,
                line_text: normalize_text(line),
                reason: e.to_string(),
            })),
        }
    }

    rows
}
