//! Reconstruct table rows from pdftotext -layout output.
//!
//! pdftotext -layout preserves column alignment using spaces, so a table
//! header tells us where each column starts and data lines can be cut into
//! cells by position.

/// A run of text on a layout line, bounded by gaps of 2+ whitespace.
/// `start` and `end` are character columns, `end` exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    pub start: usize,
    pub end: usize,
    pub text: &'a str,
}

/// Split a line by gaps of 2+ whitespace characters, keeping column positions.
pub fn split_by_whitespace_gaps(line: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    // (byte offset, char column) of the current segment start
    let mut start: Option<(usize, usize)> = None;
    // (byte offset, char column) just past the last non-space char
    let mut last_end = (0, 0);
    let mut space_count = 0;

    for (col, (i, c)) in line.char_indices().enumerate() {
        if c.is_whitespace() {
            space_count += 1;
            if space_count == 2 {
                if let Some((s_byte, s_col)) = start.take() {
                    segments.push(Segment {
                        start: s_col,
                        end: last_end.1,
                        text: &line[s_byte..last_end.0],
                    });
                }
            }
        } else {
            if start.is_none() {
                start = Some((i, col));
            }
            space_count = 0;
            last_end = (i + c.len_utf8(), col + 1);
        }
    }

    if let Some((s_byte, s_col)) = start {
        segments.push(Segment {
            start: s_col,
            end: last_end.1,
            text: &line[s_byte..last_end.0],
        });
    }

    segments
}

/// The four columns a line-item table must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    Quantity,
    Units,
    Size,
    Description,
}

impl ColumnRole {
    const ALL: [ColumnRole; 4] = [
        ColumnRole::Quantity,
        ColumnRole::Units,
        ColumnRole::Size,
        ColumnRole::Description,
    ];

    /// Header cells that name this column outright.
    fn exact_names(self) -> &'static [&'static str] {
        match self {
            ColumnRole::Quantity => &["quantity", "qty", "qty."],
            ColumnRole::Units => &["units", "unit", "uom"],
            ColumnRole::Size => &["size"],
            ColumnRole::Description => &["description"],
        }
    }

    fn from_header_cell(cell: &str) -> Option<ColumnRole> {
        let lower = cell.to_lowercase();
        if lower.contains("quantity") || lower == "qty" || lower == "qty." {
            Some(ColumnRole::Quantity)
        } else if lower.contains("unit") || lower == "uom" {
            Some(ColumnRole::Units)
        } else if lower.contains("size") {
            Some(ColumnRole::Size)
        } else if lower.contains("description") {
            Some(ColumnRole::Description)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone)]
struct Column {
    role: Option<ColumnRole>,
    /// First character column that belongs to the next column.
    right_bound: usize,
}

/// Column positions recovered from a table header line.
#[derive(Debug, Clone)]
pub struct TableLayout {
    columns: Vec<Column>,
}

/// Raw cell text of one table row, per role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowCells {
    pub quantity: String,
    pub units: String,
    pub size: String,
    pub description: String,
}

/// Detect if a line looks like a line-item table header.
pub fn is_table_header(line: &str) -> bool {
    TableLayout::from_header(line).is_some()
}

impl TableLayout {
    /// Build a layout from a header line naming all four roles.
    ///
    /// Each role goes to the header cell that names it exactly ("Units"),
    /// else to the first cell containing its name ("Unit of Measure").
    /// Remaining cells, including later matches such as "Unit Price",
    /// become unnamed columns whose text is dropped.
    pub fn from_header(line: &str) -> Option<TableLayout> {
        let segments = split_by_whitespace_gaps(line);
        let lowered: Vec<String> = segments.iter().map(|s| s.text.to_lowercase()).collect();
        let matched: Vec<Option<ColumnRole>> = segments
            .iter()
            .map(|s| ColumnRole::from_header_cell(s.text))
            .collect();

        let mut roles: Vec<Option<ColumnRole>> = vec![None; segments.len()];
        for role in ColumnRole::ALL {
            let index = lowered
                .iter()
                .position(|text| role.exact_names().contains(&text.as_str()))
                .or_else(|| matched.iter().position(|m| *m == Some(role)))?;
            roles[index] = Some(role);
        }

        let columns = segments
            .iter()
            .zip(roles)
            .enumerate()
            .map(|(i, (seg, role))| {
                // Split the gap between neighbouring headers down the middle.
                let right_bound = match segments.get(i + 1) {
                    Some(next) => seg.end + (next.start - seg.end) / 2,
                    None => usize::MAX,
                };
                Column { role, right_bound }
            })
            .collect();

        Some(TableLayout { columns })
    }

    /// Cut a data line into cells. Segments are assigned to the column whose
    /// span contains their first character; several segments landing in the
    /// same column are joined with a space.
    pub fn cells(&self, line: &str) -> RowCells {
        let mut cells = RowCells::default();

        for seg in split_by_whitespace_gaps(line) {
            let column = self
                .columns
                .iter()
                .find(|c| seg.start < c.right_bound)
                .or(self.columns.last());
            let target = match column.and_then(|c| c.role) {
                Some(ColumnRole::Quantity) => &mut cells.quantity,
                Some(ColumnRole::Units) => &mut cells.units,
                Some(ColumnRole::Size) => &mut cells.size,
                Some(ColumnRole::Description) => &mut cells.description,
                None => continue,
            };
            if !target.is_empty() {
                target.push(' ');
            }
            target.push_str(seg.text);
        }

        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Quantity   Units   Size        Description";

    #[test]
    fn test_split_by_whitespace_gaps() {
        let segments = split_by_whitespace_gaps("  5     EA   3/4 in     Type L copper");
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[0].text, "5");
        assert_eq!(segments[0].start, 2);
        assert_eq!(segments[2].text, "3/4 in");
        assert_eq!(segments[3].text, "Type L copper");
    }

    #[test]
    fn test_split_tracks_char_columns_not_bytes() {
        let segments = split_by_whitespace_gaps("1½\"  EA");
        assert_eq!(segments[0].text, "1½\"");
        assert_eq!(segments[0].end, 3);
        assert_eq!(segments[1].start, 5);
    }

    #[test]
    fn test_is_table_header() {
        assert!(is_table_header(HEADER));
        assert!(is_table_header("  Item   QTY   Unit   Size   Description   Notes"));
        assert!(!is_table_header("  5     EA     10mm     Bolt"));
        assert!(!is_table_header("Quantity   Units   Description"));
    }

    #[test]
    fn test_cells_by_position() {
        let layout = TableLayout::from_header(HEADER).unwrap();
        let cells = layout.cells("   12      LF      3/4\"        Type L copper tube");
        assert_eq!(cells.quantity, "12");
        assert_eq!(cells.units, "LF");
        assert_eq!(cells.size, "3/4\"");
        assert_eq!(cells.description, "Type L copper tube");
    }

    #[test]
    fn test_empty_size_cell() {
        let layout = TableLayout::from_header(HEADER).unwrap();
        let cells = layout.cells("5          EA                  Hanger rod");
        assert_eq!(cells.quantity, "5");
        assert_eq!(cells.units, "EA");
        assert_eq!(cells.size, "");
        assert_eq!(cells.description, "Hanger rod");
    }

    #[test]
    fn test_unnamed_columns_are_dropped() {
        let layout = TableLayout::from_header("Item   Quantity   Units   Size   Description").unwrap();
        let cells = layout.cells("1      4          EA      2\"     Ball valve");
        assert_eq!(cells.quantity, "4");
        assert_eq!(cells.description, "Ball valve");
    }

    #[test]
    fn test_extra_unit_price_column_is_dropped() {
        let layout =
            TableLayout::from_header("Quantity   Units   Size   Description   Unit Price").unwrap();
        let cells = layout.cells("5          BOX     10mm   Anchor kit    12.00");
        assert_eq!(cells.quantity, "5");
        assert_eq!(cells.units, "BOX");
        assert_eq!(cells.size, "10mm");
        assert_eq!(cells.description, "Anchor kit");
    }

    #[test]
    fn test_exact_header_name_wins_over_earlier_partial_match() {
        let layout =
            TableLayout::from_header("Total Quantity   Quantity   Units   Size   Description")
                .unwrap();
        let cells = layout.cells("40               5          EA      10mm   Bolt");
        assert_eq!(cells.quantity, "5");
        assert_eq!(cells.units, "EA");
        assert_eq!(cells.description, "Bolt");
    }

    #[test]
    fn test_partial_header_names_are_accepted() {
        let layout =
            TableLayout::from_header("Order Quantity   Unit of Measure   Size   Item Description")
                .unwrap();
        assert_eq!(layout.columns.len(), 4);
        assert!(layout.columns.iter().all(|c| c.role.is_some()));
    }

    #[test]
    fn test_wide_description_gap_is_joined() {
        let layout = TableLayout::from_header(HEADER).unwrap();
        let cells = layout.cells("5          EA      10mm        Bolt    zinc plated");
        assert_eq!(cells.description, "Bolt zinc plated");
    }
}
