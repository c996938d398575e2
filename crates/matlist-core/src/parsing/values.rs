use crate::error::MatlistError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a quantity cell into a Decimal.
///
/// Handles formats like:
/// - "5" -> 5
/// - "12.5" -> 12.5
/// - ".75" -> 0.75
/// - "1,200" -> 1200 (thousands separators, only when grouped by three)
/// - "-2" -> -2
pub fn parse_quantity(s: &str) -> Result<Decimal, MatlistError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(MatlistError::InvalidQuantity("empty".into()));
    }

    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s.strip_prefix('+').unwrap_or(s)),
    };

    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let int_part = strip_thousands(int_part)
        .ok_or_else(|| MatlistError::InvalidQuantity(format!("'{}'", s)))?;

    if int_part.is_empty() && frac_part.map_or(true, str::is_empty) {
        return Err(MatlistError::InvalidQuantity(format!("'{}'", s)));
    }
    let all_digits = |p: &str| p.chars().all(|c| c.is_ascii_digit());
    if !all_digits(&int_part) || !frac_part.map_or(true, all_digits) {
        return Err(MatlistError::InvalidQuantity(format!("'{}'", s)));
    }

    let literal = match frac_part {
        Some(f) if !f.is_empty() => {
            let whole = if int_part.is_empty() { "0" } else { int_part.as_str() };
            format!("{sign}{whole}.{f}")
        }
        _ => format!("{sign}{int_part}"),
    };

    Decimal::from_str(&literal)
        .map_err(|e| MatlistError::InvalidQuantity(format!("'{}': {}", s, e)))
}

/// Remove `,` thousands separators. Returns None for malformed grouping
/// such as "1,20" or "12,,000".
fn strip_thousands(int_part: &str) -> Option<String> {
    if !int_part.contains(',') {
        return Some(int_part.to_string());
    }
    let mut groups = int_part.split(',');
    let head = groups.next()?;
    if head.is_empty() || head.len() > 3 {
        return None;
    }
    let mut out = head.to_string();
    for group in groups {
        if group.len() != 3 {
            return None;
        }
        out.push_str(group);
    }
    Some(out)
}
