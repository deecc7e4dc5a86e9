//! Width resolution for grid columns.
//!
//! Two passes: Fixed, Auto, and Bounded columns resolve first (Auto and
//! Bounded from the widest cell, Bounded clamped to its bounds), then Fill
//! columns split whatever is left of the available width.

use crate::types::{GridSpec, Width};
use crate::util::display_width;

/// Resolved widths for all columns, in display columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedWidths {
    /// Width for each column.
    pub widths: Vec<usize>,
}

impl ResolvedWidths {
    /// Width of a specific column.
    pub fn get(&self, index: usize) -> Option<usize> {
        self.widths.get(index).copied()
    }

    /// Total width of all columns (without decorations).
    pub fn total(&self) -> usize {
        self.widths.iter().sum()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    /// Check if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

impl GridSpec {
    /// Resolve column widths without examining data.
    ///
    /// Auto and Bounded columns fall back to their minimum (0 when unset);
    /// Fill columns receive the remaining space. Use
    /// [`resolve_widths_from_data`](GridSpec::resolve_widths_from_data) when
    /// cell values are at hand.
    ///
    /// `total_width` is the full row budget, decorations included.
    pub fn resolve_widths(&self, total_width: usize) -> ResolvedWidths {
        self.resolve_widths_impl(total_width, None)
    }

    /// Resolve column widths from actual cell data.
    ///
    /// Scans `data` for the widest cell per column; Auto columns take that
    /// width, Bounded columns clamp it to their bounds, and Fill columns
    /// split what remains of `total_width` after decorations.
    ///
    /// # Example
    ///
    /// ```rust
    /// use trestle_grid::{Column, GridSpec};
    ///
    /// let spec = GridSpec::builder()
    ///     .column(Column::new("name"))
    ///     .column(Column::new("notes").fill())
    ///     .separator("  ")
    ///     .build();
    ///
    /// let data: Vec<Vec<&str>> = vec![
    ///     vec!["Ann", "on leave"],
    ///     vec!["Beatriz", "remote"],
    /// ];
    /// let widths = spec.resolve_widths_from_data(40, &data);
    /// assert_eq!(widths.widths, vec![7, 31]);
    /// ```
    pub fn resolve_widths_from_data<S: AsRef<str>>(
        &self,
        total_width: usize,
        data: &[Vec<S>],
    ) -> ResolvedWidths {
        let mut max_data_widths: Vec<usize> = vec![0; self.columns.len()];

        for row in data {
            for (i, cell) in row.iter().enumerate() {
                if i < max_data_widths.len() {
                    let cell_width = display_width(cell.as_ref());
                    max_data_widths[i] = max_data_widths[i].max(cell_width);
                }
            }
        }

        self.resolve_widths_impl(total_width, Some(&max_data_widths))
    }

    fn resolve_widths_impl(
        &self,
        total_width: usize,
        data_widths: Option<&[usize]>,
    ) -> ResolvedWidths {
        if self.columns.is_empty() {
            return ResolvedWidths { widths: vec![] };
        }

        let overhead = self.decorations.overhead(self.columns.len());
        let available = total_width.saturating_sub(overhead);

        let mut widths: Vec<usize> = Vec::with_capacity(self.columns.len());
        let mut fill_indices: Vec<usize> = Vec::new();
        let mut used_width: usize = 0;

        // First pass: everything except Fill
        for (i, col) in self.columns.iter().enumerate() {
            let data_w = data_widths.and_then(|dw| dw.get(i).copied()).unwrap_or(0);
            match &col.width {
                Width::Fixed(w) => {
                    widths.push(*w);
                    used_width += w;
                }
                Width::Auto => {
                    widths.push(data_w);
                    used_width += data_w;
                }
                Width::Bounded { min, max } => {
                    let width = data_w
                        .max(min.unwrap_or(0))
                        .min(max.unwrap_or(usize::MAX));
                    widths.push(width);
                    used_width += width;
                }
                Width::Fill => {
                    widths.push(0); // placeholder
                    fill_indices.push(i);
                }
            }
        }

        // Second pass: Fill columns share the leftover equally, last one
        // takes the remainder so the total comes out exact
        if !fill_indices.is_empty() {
            let remaining = available.saturating_sub(used_width);
            let share = remaining / fill_indices.len();
            let mut remaining_space = remaining;

            for (n, idx) in fill_indices.iter().enumerate() {
                let width = if n == fill_indices.len() - 1 {
                    remaining_space
                } else {
                    remaining_space = remaining_space.saturating_sub(share);
                    share
                };
                widths[*idx] = width;
            }
        }

        ResolvedWidths { widths }
    }
}
