//! Free-text fallback for pages where no line-item table could be found.
//!
//! Lines are read as `<quantity> <units> <size...> <description...>`, where
//! the description starts at the first word that names a kind of fitting or
//! material.

use super::normalize::normalize_text;
use super::values::parse_quantity;
use super::{RowOutcome, SkippedRow};
use crate::extraction::PageContent;
use crate::model::LineItem;

/// Units accepted in free text. Anything else in the second position means
/// the line is not a line item.
const TEXT_UNITS: &[&str] = &["EA", "LF"];

/// Lines starting with these (lowercased) are page furniture.
const IGNORED_PREFIXES: &[&str] = &["quantity units", "dkc -"];

/// Words (or word prefixes) that begin the description part of a line.
const DESCRIPTION_START_WORDS: &[&str] = &[
    "type",
    "propress",
    "wrot",
    "threaded",
    "butterfly",
    "bolts",
    "valve",
    "adapter",
    "coupling",
    "cap",
    "tee",
    "ell",
    "reducer",
    "flange",
    "plug",
    "tube",
    "street",
    "measurement/balancing",
];

fn is_text_unit(token: &str) -> bool {
    TEXT_UNITS.iter().any(|u| token.eq_ignore_ascii_case(u))
}

/// Parse a page as free text.
pub fn parse_text_rows(source: &str, page: &PageContent) -> Vec<RowOutcome> {
    let mut out = Vec::new();

    for line in stitch_wrapped_lines(&page.lines) {
        let lower = line.to_lowercase();
        if IGNORED_PREFIXES.iter().any(|p| lower.starts_with(p)) {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 4 || !is_text_unit(tokens[1]) {
            continue;
        }

        let quantity = match parse_quantity(tokens[0]) {
            Ok(q) => q,
            Err(e) => {
                out.push(RowOutcome::Skipped(SkippedRow {
                    source: source.to_string(),
                    page_number: page.page_number,
                    line_text: line.clone(),
                    reason: e.to_string(),
                }));
                continue;
            }
        };

        let remainder = &tokens[2..];
        let (size, description) = match find_description_start(remainder) {
            Some(idx) if idx > 0 => (remainder[..idx].join(" "), remainder[idx..].join(" ")),
            _ => (String::new(), remainder.join(" ")),
        };

        out.push(RowOutcome::Item(LineItem {
            quantity,
            units: tokens[1].to_string(),
            size,
            description,
            source: source.to_string(),
        }));
    }

    out
}

/// Index of the first token that starts a description.
fn find_description_start(tokens: &[&str]) -> Option<usize> {
    tokens.iter().position(|t| {
        let lower = t.to_lowercase();
        DESCRIPTION_START_WORDS.iter().any(|w| lower.starts_with(w))
    })
}

/// Normalize lines and re-join rows that wrapped after the unit column.
///
/// A line that is exactly `<number> <EA|LF>` lost its size and description
/// to the next line, so the two are joined. Blank lines are dropped.
fn stitch_wrapped_lines(lines: &[String]) -> Vec<String> {
    let mut stitched = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let cur = normalize_text(&lines[i]);
        if cur.is_empty() {
            i += 1;
            continue;
        }

        let parts: Vec<&str> = cur.split_whitespace().collect();
        if parts.len() == 2 && parse_quantity(parts[0]).is_ok() && is_text_unit(parts[1]) {
            if let Some(next) = lines.get(i + 1).map(|l| normalize_text(l)) {
                if !next.is_empty() {
                    stitched.push(format!("{cur} {next}"));
                    i += 2;
                    continue;
                }
            }
        }

        stitched.push(cur);
        i += 1;
    }

    stitched
}
