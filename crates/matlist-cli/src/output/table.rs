use matlist_core::{ParsedDocument, RunSummary};

pub fn print_summary(summary: &RunSummary) {
    println!(
        "Done, output written to: {} ({})\n",
        summary.output_path.display(),
        summary.output_format
    );
    println!("  Documents read:     {}", summary.documents_read);
    println!("  Documents skipped:  {}", summary.documents_skipped.len());
    println!("  Items extracted:    {}", summary.items_extracted);
    println!("  Rows skipped:       {}", summary.rows_skipped.len());
    println!("  Records written:    {}", summary.records_written);

    if !summary.documents_skipped.is_empty() {
        println!("\nSkipped documents:");
        for doc in &summary.documents_skipped {
            println!("  - {}", doc.reason);
        }
    }

    if !summary.rows_skipped.is_empty() {
        println!("\nSkipped rows:");
        for row in &summary.rows_skipped {
            println!(
                "  - {} p.{}: {} ({})",
                row.source, row.page_number, row.line_text, row.reason
            );
        }
    }
}

pub fn format_parsed(parsed: &ParsedDocument) -> String {
    let mut out = String::new();

    out.push_str(&format!("--- {} ---\n\n", parsed.name));

    if parsed.items.is_empty() {
        out.push_str("  (no line items found)\n");
        return out;
    }

    let quantities: Vec<String> = parsed
        .items
        .iter()
        .map(|i| i.quantity.normalize().to_string())
        .collect();
    let qty_width = quantities.iter().map(|q| q.len()).max().unwrap_or(0).max(8);
    let units_width = parsed
        .items
        .iter()
        .map(|i| i.units.chars().count())
        .max()
        .unwrap_or(0)
        .max(5);
    let size_width = parsed
        .items
        .iter()
        .map(|i| i.size.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    out.push_str(&format!(
        "  {:>qty_width$}  {:<units_width$}  {:<size_width$}  Description\n",
        "Quantity", "Units", "Size"
    ));
    out.push_str(&format!(
        "  {}\n",
        "-".repeat(qty_width + units_width + size_width + 6 + 11)
    ));

    for (item, qty) in parsed.items.iter().zip(&quantities) {
        out.push_str(&format!(
            "  {:>qty_width$}  {:<units_width$}  {:<size_width$}  {}\n",
            qty, item.units, item.size, item.description
        ));
    }

    out.push_str(&format!("\n  {} item(s)\n", parsed.items.len()));
    out
}
