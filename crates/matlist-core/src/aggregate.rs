use indexmap::IndexMap;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::MatlistError;
use crate::model::{AggregateKey, AggregateRecord, LineItem};
use crate::parsing::normalize::{normalize_key_part, normalize_text, normalize_units};

impl AggregateKey {
    /// Key of a line item under the matching rule: whitespace-normalized,
    /// case-insensitive, with unit synonyms folded.
    pub fn for_item(item: &LineItem) -> AggregateKey {
        AggregateKey {
            units: normalize_units(&item.units),
            size: normalize_key_part(&item.size),
            description: normalize_key_part(&item.description),
        }
    }
}

/// Folds line items into one record per key.
#[derive(Debug, Default)]
pub struct Aggregator {
    records: IndexMap<AggregateKey, AggregateRecord>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one item into its record.
    ///
    /// A total that would overflow is left unchanged and the item is
    /// rejected with `QuantityOverflow`.
    pub fn add(&mut self, item: &LineItem) -> Result<(), MatlistError> {
        let key = AggregateKey::for_item(item);

        if let Some(record) = self.records.get_mut(&key) {
            record.total_quantity = record
                .total_quantity
                .checked_add(item.quantity)
                .ok_or_else(|| MatlistError::QuantityOverflow {
                    key: key.to_string(),
                })?;
            record.source_count += 1;
            if !record.documents.iter().any(|d| d == &item.source) {
                record.documents.push(item.source.clone());
            }
            return Ok(());
        }

        self.records.insert(
            key.clone(),
            AggregateRecord {
                key,
                units: normalize_text(&item.units),
                size: normalize_text(&item.size),
                description: normalize_text(&item.description),
                total_quantity: item.quantity,
                source_count: 1,
                documents: vec![item.source.clone()],
            },
        );
        Ok(())
    }

    /// Records in output order.
    pub fn finish(self) -> Vec<AggregateRecord> {
        let mut records: Vec<AggregateRecord> = self.records.into_values().collect();
        records.sort_by(compare_records);
        records
    }
}

/// Aggregate a whole batch of items at once. Stops at the first overflow.
pub fn aggregate<'a>(
    items: impl IntoIterator<Item = &'a LineItem>,
) -> Result<Vec<AggregateRecord>, MatlistError> {
    let mut aggregator = Aggregator::new();
    for item in items {
        aggregator.add(item)?;
    }
    Ok(aggregator.finish())
}

/// Output order: linear feet first, then each, then other units; then
/// description A-Z; then numeric size ascending. Remaining ties fall back
/// to the normalized size and units text so the order is total.
fn compare_records(a: &AggregateRecord, b: &AggregateRecord) -> Ordering {
    unit_rank(&a.key.units)
        .cmp(&unit_rank(&b.key.units))
        .then_with(|| a.key.description.cmp(&b.key.description))
        .then_with(|| size_sort_value(&a.size).cmp(&size_sort_value(&b.size)))
        .then_with(|| a.key.size.cmp(&b.key.size))
        .then_with(|| a.key.units.cmp(&b.key.units))
}

fn unit_rank(units: &str) -> u8 {
    match units {
        "lf" => 0,
        "ea" => 1,
        _ => 99,
    }
}

/// Numeric value of the leading dimension of a size, for sorting.
///
/// Takes the part before any `x` and its first word, e.g. `1-1/2" x 3/4"`
/// -> 1.5, `1½"` -> 1.5, `3/4` -> 0.75, `10mm` -> 10. Non-numeric sizes
/// sort as zero.
pub fn size_sort_value(size: &str) -> Decimal {
    let s = size
        .replace('¼', ".25")
        .replace('½', ".5")
        .replace('¾', ".75");
    let first = s.split(['x', 'X']).next().unwrap_or("").trim();
    let word = first.split_whitespace().next().unwrap_or("");
    parse_dimension(word).unwrap_or(Decimal::ZERO)
}

fn parse_dimension(word: &str) -> Option<Decimal> {
    // Whole and fraction joined by a hyphen: 1-1/2
    if let Some((whole, frac)) = word.split_once('-') {
        if frac.contains('/') {
            return parse_dimension(whole)?.checked_add(parse_dimension(frac)?);
        }
    }

    if let Some((num, den)) = word.split_once('/') {
        let num = leading_number(num)?;
        let den = leading_number(den)?;
        // None on a zero denominator or an out-of-range quotient.
        return num.checked_div(den);
    }

    leading_number(word)
}

/// Parse the numeric prefix of a word, ignoring trailing unit marks such as
/// `"` or `mm`. A bare `.5` (from `½`) is accepted, as is `1.5`.
fn leading_number(word: &str) -> Option<Decimal> {
    let end = word
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(word.len());
    let digits = &word[..end];
    if digits.is_empty() || digits == "." {
        return None;
    }
    Decimal::from_str(digits).ok()
}
