//! Plain-text embedding of the render tree.
//!
//! [`TextGrid`] turns a [`GridSpec`] and an item sequence into terminal
//! lines: an optional header row with a dash rule, caption lines exactly
//! where the contract places them, and one formatted line per data row.

use crate::format::RowFormatter;
use crate::types::{GridSpec, Item};
use crate::view::GridRow;

const FALLBACK_WIDTH: usize = 80;

/// Renders grids as aligned terminal text.
///
/// Column widths resolve from the actual cell data (and the header labels,
/// when shown). Unless [`width`](TextGrid::width) pins a total budget, Fill
/// columns stretch to the detected terminal width.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use trestle_grid::{Column, GridSpec, Item, TextGrid};
///
/// let items: Vec<Item> = serde_json::from_value(json!([
///     { "name": "Ann", "dept": "Eng" },
///     { "name": "Bo", "dept": "Sales" },
/// ]))
/// .unwrap();
///
/// let spec = GridSpec::builder()
///     .column(Column::new("name").header("Name"))
///     .column(Column::new("dept").header("Dept"))
///     .separator("  ")
///     .build();
///
/// let text = TextGrid::new(spec).header().render(&items);
/// assert_eq!(text, "Name  Dept \n-----------\nAnn   Eng  \nBo    Sales");
/// ```
#[derive(Clone, Debug)]
pub struct TextGrid {
    spec: GridSpec,
    total_width: Option<usize>,
    show_header: bool,
    header_rule: bool,
}

impl TextGrid {
    /// Create a text renderer for the given spec.
    pub fn new(spec: GridSpec) -> Self {
        TextGrid {
            spec,
            total_width: None,
            show_header: false,
            header_rule: true,
        }
    }

    /// Pin the total row budget instead of probing the terminal.
    pub fn width(mut self, total_width: usize) -> Self {
        self.total_width = Some(total_width);
        self
    }

    /// Render a header row of column labels above the data.
    pub fn header(mut self) -> Self {
        self.show_header = true;
        self
    }

    /// Toggle the dash rule under the header (on by default).
    pub fn header_rule(mut self, on: bool) -> Self {
        self.header_rule = on;
        self
    }

    /// Render items to a newline-joined string.
    ///
    /// Total like the contract itself: empty inputs produce an empty (or
    /// header-only) string, never an error.
    pub fn render(&self, items: &[Item]) -> String {
        let rows = self.spec.render(items);

        let header = if self.show_header {
            Some(self.spec.extract_header())
        } else {
            None
        };

        // Width resolution sees every data row plus the header labels
        let mut data: Vec<Vec<&str>> = rows
            .iter()
            .filter_map(|row| row.as_cells())
            .map(|cells| cells.iter().map(String::as_str).collect())
            .collect();
        if let Some(labels) = &header {
            data.push(labels.iter().map(String::as_str).collect());
        }

        let total = self.total_width.unwrap_or_else(detect_width);
        let resolved = self.spec.resolve_widths_from_data(total, &data);
        let formatter = RowFormatter::from_resolved(&self.spec, resolved);

        let mut lines = Vec::with_capacity(rows.len() + 2);
        if let Some(labels) = &header {
            lines.push(formatter.format_row(labels));
            if self.header_rule {
                lines.push("-".repeat(formatter.row_width()));
            }
        }

        for row in &rows {
            match row {
                GridRow::Caption(caption) => lines.push(caption.clone()),
                GridRow::Cells(cells) => lines.push(formatter.format_row(cells)),
            }
        }

        lines.join("\n")
    }
}

/// Current terminal width, falling back to 80 columns when detection fails
/// (pipes, CI).
fn detect_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(FALLBACK_WIDTH)
}
