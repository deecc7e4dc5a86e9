//! The rendering contract: items in, row descriptors out.
//!
//! [`GridSpec::render`] is a pure function of (items, columns, grouping,
//! caption order). It is total: empty item sequences, empty column sets, and
//! items missing referenced fields all produce defined output, never an
//! error. The descriptors say nothing about pixels or padding; the embedding
//! layer (terminal text, GUI, anything) decides how a caption line or a cell
//! sequence actually looks.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{CaptionOrder, GridSpec, Item, ItemGrouping};

/// One row of the render tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridRow {
    /// A group caption line.
    Caption(String),
    /// One cell value per column, in column order.
    Cells(Vec<String>),
}

impl GridRow {
    /// Returns `true` for caption rows.
    pub fn is_caption(&self) -> bool {
        matches!(self, GridRow::Caption(_))
    }

    /// The cell values, if this is a data row.
    pub fn as_cells(&self) -> Option<&[String]> {
        match self {
            GridRow::Caption(_) => None,
            GridRow::Cells(cells) => Some(cells),
        }
    }
}

/// Render a single value the way a cell displays it.
///
/// Strings pass through verbatim (no quoting), numbers and booleans use
/// their canonical display form, and nested structures fall back to compact
/// JSON. A missing (`None`) or null value renders as the empty string.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use trestle_grid::cell_text;
///
/// assert_eq!(cell_text(Some(&json!("Ann"))), "Ann");
/// assert_eq!(cell_text(Some(&json!(42))), "42");
/// assert_eq!(cell_text(Some(&json!(null))), "");
/// assert_eq!(cell_text(None), "");
/// ```
pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(v) => v.to_string(),
    }
}

/// Look up a field in an item, walking dot-notation paths ("author.name").
fn field_value<'a>(item: &'a Item, path: &str) -> Option<&'a Value> {
    let mut parts = path.split('.');
    let mut current = item.get(parts.next()?)?;
    for part in parts {
        current = current.as_object()?.get(part)?;
    }
    Some(current)
}

/// Display text of a field, `None` when the field is missing or null.
fn field_text(item: &Item, path: &str) -> Option<String> {
    match field_value(item, path)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        v => Some(v.to_string()),
    }
}

impl GridSpec {
    /// Extract one data row from an item.
    ///
    /// Each cell is the display text of `item[column.field]`; missing or
    /// null fields render as the column's `null_repr` (empty by default).
    pub fn extract_row(&self, item: &Item) -> Vec<String> {
        self.columns
            .iter()
            .map(|col| field_text(item, &col.field).unwrap_or_else(|| col.null_repr.clone()))
            .collect()
    }

    /// Render items into an ordered list of row descriptors.
    ///
    /// With no grouping this is one [`GridRow::Cells`] per item, in input
    /// order. With field grouping, items are partitioned by the distinct
    /// display values of the grouping field (group keys in first-seen
    /// order, input order preserved within each group) and every group
    /// carries a [`GridRow::Caption`] placed before or after its rows per
    /// the configured [`CaptionOrder`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use serde_json::json;
    /// use trestle_grid::{Column, GridRow, GridSpec, Item};
    ///
    /// let items: Vec<Item> = serde_json::from_value(json!([
    ///     { "name": "Ann", "dept": "Eng" },
    ///     { "name": "Bo", "dept": "Sales" },
    ///     { "name": "Cy", "dept": "Eng" },
    /// ]))
    /// .unwrap();
    ///
    /// let spec = GridSpec::builder()
    ///     .column(Column::new("name"))
    ///     .column(Column::new("dept"))
    ///     .group_by("dept")
    ///     .build();
    ///
    /// let rows = spec.render(&items);
    /// assert_eq!(rows[0], GridRow::Caption("Eng".into()));
    /// assert_eq!(rows[1], GridRow::Cells(vec!["Ann".into(), "Eng".into()]));
    /// ```
    pub fn render(&self, items: &[Item]) -> Vec<GridRow> {
        match &self.grouping {
            ItemGrouping::None => items
                .iter()
                .map(|item| GridRow::Cells(self.extract_row(item)))
                .collect(),
            ItemGrouping::ByField(field) => {
                let mut rows = Vec::new();
                for (key, members) in group_by_field(items, field) {
                    if self.caption_order == CaptionOrder::Before {
                        rows.push(GridRow::Caption(key.clone()));
                    }
                    for &i in &members {
                        rows.push(GridRow::Cells(self.extract_row(&items[i])));
                    }
                    if self.caption_order == CaptionOrder::After {
                        rows.push(GridRow::Caption(key));
                    }
                }
                rows
            }
        }
    }
}

/// Partition item indices by the display value of one field.
///
/// Keys appear in first-seen order; members keep input order. Null and
/// missing values both key as the empty string, so they land in one group.
fn group_by_field(items: &[Item], field: &str) -> Vec<(String, Vec<usize>)> {
    let mut groups: Vec<(String, Vec<usize>)> = Vec::new();
    for (i, item) in items.iter().enumerate() {
        let key = field_text(item, field).unwrap_or_default();
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => members.push(i),
            None => groups.push((key, vec![i])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Column;
    use serde_json::json;

    fn items(value: serde_json::Value) -> Vec<Item> {
        serde_json::from_value(value).unwrap()
    }

    fn employee_sample() -> Vec<Item> {
        items(json!([
            { "name": "Ann", "dept": "Eng" },
            { "name": "Bo", "dept": "Sales" },
            { "name": "Cy", "dept": "Eng" },
        ]))
    }

    fn name_dept_spec() -> GridSpec {
        GridSpec::builder()
            .column(Column::new("name"))
            .column(Column::new("dept"))
            .build()
    }

    // --- cell_text ---

    #[test]
    fn cell_text_strings_are_verbatim() {
        assert_eq!(cell_text(Some(&json!("Ann"))), "Ann");
        assert_eq!(cell_text(Some(&json!(""))), "");
    }

    #[test]
    fn cell_text_scalars_use_canonical_form() {
        assert_eq!(cell_text(Some(&json!(30))), "30");
        assert_eq!(cell_text(Some(&json!(2.5))), "2.5");
        assert_eq!(cell_text(Some(&json!(true))), "true");
    }

    #[test]
    fn cell_text_null_and_missing_are_empty() {
        assert_eq!(cell_text(Some(&json!(null))), "");
        assert_eq!(cell_text(None), "");
    }

    #[test]
    fn cell_text_nested_values_fall_back_to_json() {
        assert_eq!(cell_text(Some(&json!({ "a": 1 }))), "{\"a\":1}");
        assert_eq!(cell_text(Some(&json!([1, 2]))), "[1,2]");
    }

    // --- extract_row ---

    #[test]
    fn extract_row_reads_fields_in_column_order() {
        let spec = name_dept_spec();
        let sample = employee_sample();
        assert_eq!(spec.extract_row(&sample[0]), vec!["Ann", "Eng"]);
    }

    #[test]
    fn extract_row_missing_field_is_blank() {
        let spec = GridSpec::builder()
            .column(Column::new("name"))
            .column(Column::new("title"))
            .build();
        let sample = items(json!([{ "name": "Ann" }]));
        assert_eq!(spec.extract_row(&sample[0]), vec!["Ann", ""]);
    }

    #[test]
    fn extract_row_null_field_is_blank() {
        let spec = name_dept_spec();
        let sample = items(json!([{ "name": "Ann", "dept": null }]));
        assert_eq!(spec.extract_row(&sample[0]), vec!["Ann", ""]);
    }

    #[test]
    fn extract_row_honors_null_repr() {
        let spec = GridSpec::builder()
            .column(Column::new("name"))
            .column(Column::new("dept").null_repr("n/a"))
            .build();
        let sample = items(json!([{ "name": "Ann" }]));
        assert_eq!(spec.extract_row(&sample[0]), vec!["Ann", "n/a"]);
    }

    #[test]
    fn extract_row_walks_dot_paths() {
        let spec = GridSpec::builder()
            .column(Column::new("author.name"))
            .column(Column::new("author.missing"))
            .build();
        let sample = items(json!([{ "author": { "name": "Ann" } }]));
        assert_eq!(spec.extract_row(&sample[0]), vec!["Ann", ""]);
    }

    // --- render, ungrouped ---

    #[test]
    fn render_ungrouped_one_row_per_item() {
        let spec = name_dept_spec();
        let rows = spec.render(&employee_sample());

        assert_eq!(
            rows,
            vec![
                GridRow::Cells(vec!["Ann".into(), "Eng".into()]),
                GridRow::Cells(vec!["Bo".into(), "Sales".into()]),
                GridRow::Cells(vec!["Cy".into(), "Eng".into()]),
            ]
        );
    }

    #[test]
    fn render_empty_items_is_empty() {
        let spec = name_dept_spec();
        assert_eq!(spec.render(&[]), vec![]);
    }

    #[test]
    fn render_empty_columns_yields_empty_cell_rows() {
        let spec = GridSpec::builder().build();
        let rows = spec.render(&employee_sample());
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.as_cells() == Some(&[][..])));
    }

    // --- render, grouped ---

    #[test]
    fn render_grouped_captions_before_rows() {
        let spec = GridSpec::builder()
            .column(Column::new("name"))
            .column(Column::new("dept"))
            .group_by("dept")
            .build();

        let rows = spec.render(&employee_sample());
        assert_eq!(
            rows,
            vec![
                GridRow::Caption("Eng".into()),
                GridRow::Cells(vec!["Ann".into(), "Eng".into()]),
                GridRow::Cells(vec!["Cy".into(), "Eng".into()]),
                GridRow::Caption("Sales".into()),
                GridRow::Cells(vec!["Bo".into(), "Sales".into()]),
            ]
        );
    }

    #[test]
    fn render_grouped_captions_after_rows() {
        let spec = GridSpec::builder()
            .column(Column::new("name"))
            .column(Column::new("dept"))
            .group_by("dept")
            .caption_order(CaptionOrder::After)
            .build();

        let rows = spec.render(&employee_sample());
        assert_eq!(
            rows,
            vec![
                GridRow::Cells(vec!["Ann".into(), "Eng".into()]),
                GridRow::Cells(vec!["Cy".into(), "Eng".into()]),
                GridRow::Caption("Eng".into()),
                GridRow::Cells(vec!["Bo".into(), "Sales".into()]),
                GridRow::Caption("Sales".into()),
            ]
        );
    }

    #[test]
    fn caption_order_changes_placement_only() {
        let before = GridSpec::builder()
            .column(Column::new("name"))
            .group_by("dept")
            .build();
        let mut after = before.clone();
        after.caption_order = CaptionOrder::After;

        let sample = employee_sample();
        let cells_of = |rows: Vec<GridRow>| {
            rows.into_iter()
                .filter(|r| !r.is_caption())
                .collect::<Vec<_>>()
        };
        assert_eq!(
            cells_of(before.render(&sample)),
            cells_of(after.render(&sample))
        );
    }

    #[test]
    fn group_keys_keep_first_seen_order() {
        let spec = GridSpec::builder()
            .column(Column::new("name"))
            .group_by("dept")
            .build();

        let sample = items(json!([
            { "name": "a", "dept": "Z" },
            { "name": "b", "dept": "A" },
            { "name": "c", "dept": "Z" },
            { "name": "d", "dept": "M" },
        ]));

        let captions: Vec<_> = spec
            .render(&sample)
            .into_iter()
            .filter_map(|r| match r {
                GridRow::Caption(c) => Some(c),
                _ => None,
            })
            .collect();
        assert_eq!(captions, vec!["Z", "A", "M"]);
    }

    #[test]
    fn grouping_field_need_not_be_a_column() {
        let spec = GridSpec::builder()
            .column(Column::new("name"))
            .group_by("dept")
            .build();

        let rows = spec.render(&employee_sample());
        assert_eq!(rows[0], GridRow::Caption("Eng".into()));
        assert_eq!(rows[1], GridRow::Cells(vec!["Ann".into()]));
    }

    #[test]
    fn null_and_missing_group_keys_share_the_empty_group() {
        let spec = GridSpec::builder()
            .column(Column::new("name"))
            .group_by("dept")
            .build();

        let sample = items(json!([
            { "name": "a", "dept": null },
            { "name": "b", "dept": "Eng" },
            { "name": "c" },
        ]));

        let rows = spec.render(&sample);
        assert_eq!(
            rows,
            vec![
                GridRow::Caption("".into()),
                GridRow::Cells(vec!["a".into()]),
                GridRow::Cells(vec!["c".into()]),
                GridRow::Caption("Eng".into()),
                GridRow::Cells(vec!["b".into()]),
            ]
        );
    }

    #[test]
    fn grouping_by_numeric_field_uses_display_text() {
        let spec = GridSpec::builder()
            .column(Column::new("name"))
            .group_by("level")
            .build();

        let sample = items(json!([
            { "name": "a", "level": 2 },
            { "name": "b", "level": 1 },
            { "name": "c", "level": 2 },
        ]));

        let captions: Vec<_> = spec
            .render(&sample)
            .into_iter()
            .filter_map(|r| match r {
                GridRow::Caption(c) => Some(c),
                _ => None,
            })
            .collect();
        assert_eq!(captions, vec!["2", "1"]);
    }

    #[test]
    fn render_is_idempotent() {
        let spec = GridSpec::builder()
            .column(Column::new("name"))
            .column(Column::new("dept"))
            .group_by("dept")
            .build();

        let sample = employee_sample();
        assert_eq!(spec.render(&sample), spec.render(&sample));
    }

    #[test]
    fn grid_row_accessors() {
        let caption = GridRow::Caption("Eng".into());
        let cells = GridRow::Cells(vec!["a".into()]);

        assert!(caption.is_caption());
        assert!(!cells.is_caption());
        assert_eq!(caption.as_cells(), None);
        assert_eq!(cells.as_cells(), Some(&["a".to_string()][..]));
    }

    #[test]
    fn grid_row_serde() {
        let row = GridRow::Caption("Eng".into());
        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            "{\"caption\":\"Eng\"}"
        );

        let row = GridRow::Cells(vec!["Ann".into(), "Eng".into()]);
        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            "{\"cells\":[\"Ann\",\"Eng\"]}"
        );
    }
}
