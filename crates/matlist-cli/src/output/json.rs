use matlist_core::error::MatlistError;
use matlist_core::ParsedDocument;

pub fn print(parsed: &ParsedDocument) -> Result<(), MatlistError> {
    let json = serde_json::to_string_pretty(parsed)?;
    println!("{json}");
    Ok(())
}
