//! Row formatting: cell strings to one aligned text line.

use crate::resolve::ResolvedWidths;
use crate::types::{Align, Column, GridSpec, Overflow, TruncateAt};
use crate::util::{
    display_width, pad_center, pad_left, pad_right, take_prefix, truncate_end, truncate_middle,
    truncate_start,
};

/// Formats cell rows according to resolved column widths.
///
/// The formatter is row-at-a-time so callers can interleave other lines
/// (captions, notes) between data rows.
///
/// # Example
///
/// ```rust
/// use trestle_grid::{Column, GridSpec, RowFormatter};
///
/// let spec = GridSpec::builder()
///     .column(Column::new("name").fixed(10))
///     .column(Column::new("dept").fixed(8))
///     .separator(" | ")
///     .build();
///
/// let formatter = RowFormatter::new(&spec, 80);
/// assert_eq!(formatter.format_row(&["Ann", "Eng"]), "Ann        | Eng     ");
/// ```
#[derive(Clone, Debug)]
pub struct RowFormatter {
    columns: Vec<Column>,
    widths: Vec<usize>,
    separator: String,
    prefix: String,
    suffix: String,
}

impl RowFormatter {
    /// Create a formatter by resolving widths from the spec alone.
    ///
    /// `total_width` is the full row budget, decorations included. Use
    /// [`from_resolved`](RowFormatter::from_resolved) when widths were
    /// already computed from data.
    pub fn new(spec: &GridSpec, total_width: usize) -> Self {
        let resolved = spec.resolve_widths(total_width);
        Self::from_resolved(spec, resolved)
    }

    /// Create a formatter with pre-resolved widths.
    pub fn from_resolved(spec: &GridSpec, resolved: ResolvedWidths) -> Self {
        RowFormatter {
            columns: spec.columns.clone(),
            widths: resolved.widths,
            separator: spec.decorations.column_sep.clone(),
            prefix: spec.decorations.row_prefix.clone(),
            suffix: spec.decorations.row_suffix.clone(),
        }
    }

    /// Format a single row of cell values.
    ///
    /// Each value is truncated and padded per its column; a missing value
    /// falls back to the column's null representation.
    pub fn format_row<S: AsRef<str>>(&self, values: &[S]) -> String {
        let mut result = String::new();
        result.push_str(&self.prefix);

        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                result.push_str(&self.separator);
            }

            let width = self.widths.get(i).copied().unwrap_or(0);
            let value = values.get(i).map(|s| s.as_ref()).unwrap_or(&col.null_repr);
            result.push_str(&format_cell(value, width, col));
        }

        result.push_str(&self.suffix);
        result
    }

    /// Resolved width of a column by index.
    pub fn column_width(&self, index: usize) -> Option<usize> {
        self.widths.get(index).copied()
    }

    /// All resolved column widths.
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Number of columns.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Display width of a full formatted row, decorations included.
    pub fn row_width(&self) -> usize {
        let sep_count = self.columns.len().saturating_sub(1);
        self.widths.iter().sum::<usize>()
            + display_width(&self.prefix)
            + display_width(&self.suffix)
            + display_width(&self.separator) * sep_count
    }
}

/// Truncate and pad one cell value per the column's hints.
fn format_cell(value: &str, width: usize, col: &Column) -> String {
    if width == 0 {
        return String::new();
    }

    let truncated = if display_width(value) > width {
        match &col.overflow {
            Overflow::Truncate { at, marker } => match at {
                TruncateAt::End => truncate_end(value, width, marker),
                TruncateAt::Start => truncate_start(value, width, marker),
                TruncateAt::Middle => truncate_middle(value, width, marker),
            },
            Overflow::Clip => take_prefix(value, width),
        }
    } else {
        value.to_string()
    };

    match col.align {
        Align::Left => pad_right(&truncated, width),
        Align::Right => pad_left(&truncated, width),
        Align::Center => pad_center(&truncated, width),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Column;

    fn simple_spec() -> GridSpec {
        GridSpec::builder()
            .column(Column::new("name").fixed(10))
            .column(Column::new("dept").fixed(8))
            .separator(" | ")
            .build()
    }

    #[test]
    fn format_basic_row() {
        let formatter = RowFormatter::new(&simple_spec(), 80);
        let output = formatter.format_row(&["Hello", "World"]);
        assert_eq!(output, "Hello      | World   ");
    }

    #[test]
    fn format_row_truncates_long_values() {
        let spec = GridSpec::builder()
            .column(Column::new("a").fixed(8))
            .build();
        let formatter = RowFormatter::new(&spec, 80);
        assert_eq!(formatter.format_row(&["Hello World"]), "Hello W…");
    }

    #[test]
    fn format_row_right_align() {
        let spec = GridSpec::builder()
            .column(Column::new("n").fixed(10).right())
            .build();
        let formatter = RowFormatter::new(&spec, 80);
        assert_eq!(formatter.format_row(&["42"]), "        42");
    }

    #[test]
    fn format_row_center_align() {
        let spec = GridSpec::builder()
            .column(Column::new("n").fixed(10).center())
            .build();
        let formatter = RowFormatter::new(&spec, 80);
        assert_eq!(formatter.format_row(&["hi"]), "    hi    ");
    }

    #[test]
    fn format_row_truncate_start() {
        let spec = GridSpec::builder()
            .column(Column::new("path").fixed(10).truncate(TruncateAt::Start))
            .build();
        let formatter = RowFormatter::new(&spec, 80);

        let output = formatter.format_row(&["/path/to/file.rs"]);
        assert_eq!(display_width(&output), 10);
        assert!(output.starts_with("…"));
    }

    #[test]
    fn format_row_clip_cuts_without_marker() {
        let spec = GridSpec::builder()
            .column(Column::new("id").fixed(5).clip())
            .build();
        let formatter = RowFormatter::new(&spec, 80);
        assert_eq!(formatter.format_row(&["abcdefgh"]), "abcde");
    }

    #[test]
    fn format_row_missing_value_uses_null_repr() {
        let spec = GridSpec::builder()
            .column(Column::new("a").fixed(10))
            .column(Column::new("b").fixed(8).null_repr("n/a"))
            .separator("  ")
            .build();
        let formatter = RowFormatter::new(&spec, 80);

        let output = formatter.format_row(&["value"]);
        assert_eq!(output, "value       n/a     ");
    }

    #[test]
    fn format_row_missing_value_defaults_to_blank() {
        let spec = GridSpec::builder()
            .column(Column::new("a").fixed(4))
            .column(Column::new("b").fixed(4))
            .separator("|")
            .build();
        let formatter = RowFormatter::new(&spec, 80);
        assert_eq!(formatter.format_row(&["x"]), "x   |    ");
    }

    #[test]
    fn format_row_with_decorations() {
        let spec = GridSpec::builder()
            .column(Column::new("a").fixed(10))
            .column(Column::new("b").fixed(8))
            .separator(" │ ")
            .prefix("│ ")
            .suffix(" │")
            .build();
        let formatter = RowFormatter::new(&spec, 80);

        let output = formatter.format_row(&["Hello", "World"]);
        assert!(output.starts_with("│ "));
        assert!(output.ends_with(" │"));
        assert!(output.contains(" │ "));
    }

    #[test]
    fn format_empty_spec() {
        let spec = GridSpec::builder().build();
        let formatter = RowFormatter::new(&spec, 80);
        assert_eq!(formatter.format_row::<&str>(&[]), "");
    }

    #[test]
    fn format_preserves_ansi() {
        let spec = GridSpec::builder()
            .column(Column::new("a").fixed(10))
            .build();
        let formatter = RowFormatter::new(&spec, 80);

        let output = formatter.format_row(&["\x1b[31mred\x1b[0m"]);
        assert!(output.contains("\x1b[31m"));
        assert_eq!(display_width(&output), 10);
    }

    #[test]
    fn formatter_accessors() {
        let formatter = RowFormatter::new(&simple_spec(), 80);
        assert_eq!(formatter.num_columns(), 2);
        assert_eq!(formatter.column_width(0), Some(10));
        assert_eq!(formatter.column_width(1), Some(8));
        assert_eq!(formatter.column_width(2), None);
        assert_eq!(formatter.widths(), &[10, 8]);
        // 10 + 8 cells, 3 for the separator
        assert_eq!(formatter.row_width(), 21);
    }
}
