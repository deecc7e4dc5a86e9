//! Configuration types for grid rendering.
//!
//! This module defines the input model: items, column specifications with
//! their formatting hints, and the grouping/caption enums that control how
//! rows are partitioned.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One displayable record: an opaque mapping from field name to value.
///
/// Items arrive from a data source (or are built by the caller) and are never
/// mutated by the grid; every rendering function takes them by reference.
pub type Item = serde_json::Map<String, Value>;

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Right-align text (pad on the left).
    Right,
    /// Center text (pad on both sides).
    Center,
}

/// Position where truncation occurs when content exceeds a column's width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TruncateAt {
    /// Truncate at the end, keeping the start visible.
    /// Example: "Hello World" → "Hello W…"
    #[default]
    End,
    /// Truncate at the start, keeping the end visible.
    /// Example: "Hello World" → "…o World"
    Start,
    /// Truncate in the middle, keeping both start and end visible.
    /// Example: "Hello World" → "Hel…orld"
    Middle,
}

/// How a column handles content that exceeds its width.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Overflow {
    /// Truncate content with an ellipsis marker.
    Truncate {
        /// Where to truncate (start, middle, or end).
        at: TruncateAt,
        /// The marker to show when truncation occurs (default: "…").
        marker: String,
    },
    /// Hard cut without any marker.
    Clip,
}

impl Default for Overflow {
    fn default() -> Self {
        Overflow::Truncate {
            at: TruncateAt::End,
            marker: "…".to_string(),
        }
    }
}

impl Overflow {
    /// Create a truncate overflow with the default marker.
    pub fn truncate(at: TruncateAt) -> Self {
        Overflow::Truncate {
            at,
            marker: "…".to_string(),
        }
    }

    /// Create a truncate overflow with a custom marker.
    pub fn truncate_with_marker(at: TruncateAt, marker: impl Into<String>) -> Self {
        Overflow::Truncate {
            at,
            marker: marker.into(),
        }
    }
}

/// Specifies how a column determines its width.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WidthRaw", into = "WidthRaw")]
pub enum Width {
    /// Width of the widest cell in the column.
    #[default]
    Auto,
    /// Fixed width in display columns.
    Fixed(usize),
    /// Width calculated from content, constrained by optional min/max bounds.
    Bounded {
        /// Minimum width (defaults to 0 if not specified).
        min: Option<usize>,
        /// Maximum width (unlimited if not specified).
        max: Option<usize>,
    },
    /// Expand to take the space left over after all other columns.
    /// Multiple Fill columns share the leftover space equally.
    Fill,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum WidthRaw {
    Fixed(usize),
    Bounded {
        #[serde(default)]
        min: Option<usize>,
        #[serde(default)]
        max: Option<usize>,
    },
    StringVariant(String),
}

impl From<Width> for WidthRaw {
    fn from(width: Width) -> Self {
        match width {
            Width::Auto => WidthRaw::StringVariant("auto".to_string()),
            Width::Fixed(w) => WidthRaw::Fixed(w),
            Width::Bounded { min, max } => WidthRaw::Bounded { min, max },
            Width::Fill => WidthRaw::StringVariant("fill".to_string()),
        }
    }
}

impl TryFrom<WidthRaw> for Width {
    type Error = String;

    fn try_from(raw: WidthRaw) -> Result<Self, Self::Error> {
        match raw {
            WidthRaw::Fixed(w) => Ok(Width::Fixed(w)),
            WidthRaw::Bounded { min, max } => Ok(Width::Bounded { min, max }),
            WidthRaw::StringVariant(s) if s == "auto" => Ok(Width::Auto),
            WidthRaw::StringVariant(s) if s == "fill" => Ok(Width::Fill),
            WidthRaw::StringVariant(s) => Err(format!(
                "Invalid width string: '{}'. Expected 'auto' or 'fill'.",
                s
            )),
        }
    }
}

impl Width {
    /// Create a fixed-width column.
    pub fn fixed(width: usize) -> Self {
        Width::Fixed(width)
    }

    /// Create a bounded-width column with both min and max.
    pub fn bounded(min: usize, max: usize) -> Self {
        Width::Bounded {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Create a column with only a minimum width.
    pub fn min(min: usize) -> Self {
        Width::Bounded {
            min: Some(min),
            max: None,
        }
    }

    /// Create a column with only a maximum width.
    pub fn max(max: usize) -> Self {
        Width::Bounded {
            min: None,
            max: Some(max),
        }
    }

    /// Create a fill column that expands into leftover space.
    pub fn fill() -> Self {
        Width::Fill
    }
}

/// Binds one field of an [`Item`] to a displayed column.
///
/// The `field` key supports dot notation for nested objects ("author.name").
/// A field absent from an item is tolerated: the cell renders as
/// [`null_repr`](Column::null_repr), which defaults to the empty string.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Column {
    /// Data key this column reads from each item.
    pub field: String,
    /// Display label for header rows. Falls back to `field` when unset.
    pub header: Option<String>,
    /// How the column determines its width.
    pub width: Width,
    /// Text alignment within the column.
    pub align: Align,
    /// How to handle content that exceeds the width.
    pub overflow: Overflow,
    /// Representation for null/missing values.
    pub null_repr: String,
}

impl Column {
    /// Create a column reading the given field, with default hints.
    pub fn new(field: impl Into<String>) -> Self {
        Column {
            field: field.into(),
            header: None,
            width: Width::default(),
            align: Align::default(),
            overflow: Overflow::default(),
            null_repr: String::new(),
        }
    }

    /// Set the header label.
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Set the width strategy.
    pub fn width(mut self, width: Width) -> Self {
        self.width = width;
        self
    }

    /// Set a fixed width (shorthand for `.width(Width::Fixed(n))`).
    pub fn fixed(self, width: usize) -> Self {
        self.width(Width::Fixed(width))
    }

    /// Expand into leftover space (shorthand for `.width(Width::Fill)`).
    pub fn fill(self) -> Self {
        self.width(Width::Fill)
    }

    /// Bound the auto width between min and max.
    pub fn bounded(self, min: usize, max: usize) -> Self {
        self.width(Width::bounded(min, max))
    }

    /// Set the text alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Set alignment to right (shorthand for `.align(Align::Right)`).
    pub fn right(self) -> Self {
        self.align(Align::Right)
    }

    /// Set alignment to center (shorthand for `.align(Align::Center)`).
    pub fn center(self) -> Self {
        self.align(Align::Center)
    }

    /// Set the overflow behavior.
    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// Set truncation position (configures `Overflow::Truncate`).
    pub fn truncate(mut self, at: TruncateAt) -> Self {
        self.overflow = match self.overflow {
            Overflow::Truncate { marker, .. } => Overflow::Truncate { at, marker },
            _ => Overflow::truncate(at),
        };
        self
    }

    /// Set the ellipsis/marker used when truncating.
    pub fn ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.overflow = match self.overflow {
            Overflow::Truncate { at, .. } => Overflow::Truncate {
                at,
                marker: ellipsis.into(),
            },
            _ => Overflow::truncate_with_marker(TruncateAt::End, ellipsis),
        };
        self
    }

    /// Set overflow to clip (shorthand for `.overflow(Overflow::Clip)`).
    pub fn clip(self) -> Self {
        self.overflow(Overflow::Clip)
    }

    /// Set the null/missing value representation.
    pub fn null_repr(mut self, null_repr: impl Into<String>) -> Self {
        self.null_repr = null_repr.into();
        self
    }

    /// The label shown in header rows: `header` if set, else the field key.
    pub fn label(&self) -> &str {
        self.header.as_deref().unwrap_or(&self.field)
    }
}

/// Whether a group's caption renders before or after its member rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptionOrder {
    /// Caption line immediately precedes the group's rows.
    #[default]
    Before,
    /// Caption line immediately follows the group's rows.
    After,
}

/// Whether/how items are partitioned into labeled groups before rendering.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemGrouping {
    /// One flat table, no captions.
    #[default]
    None,
    /// Partition by the distinct values of one field, in first-seen order.
    ByField(String),
}

impl ItemGrouping {
    /// Group by the given field (shorthand for `ItemGrouping::ByField`).
    pub fn by_field(field: impl Into<String>) -> Self {
        ItemGrouping::ByField(field.into())
    }

    /// The grouping field, if grouping is active.
    pub fn field(&self) -> Option<&str> {
        match self {
            ItemGrouping::None => None,
            ItemGrouping::ByField(field) => Some(field),
        }
    }
}

/// Decorations for rendered rows (separators, prefixes, suffixes).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decorations {
    /// Separator between columns (e.g., "  " or " │ ").
    pub column_sep: String,
    /// Prefix at the start of each row.
    pub row_prefix: String,
    /// Suffix at the end of each row.
    pub row_suffix: String,
}

impl Decorations {
    /// Create decorations with just a column separator.
    pub fn with_separator(sep: impl Into<String>) -> Self {
        Decorations {
            column_sep: sep.into(),
            row_prefix: String::new(),
            row_suffix: String::new(),
        }
    }

    /// Set the column separator.
    pub fn separator(mut self, sep: impl Into<String>) -> Self {
        self.column_sep = sep.into();
        self
    }

    /// Set the row prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.row_prefix = prefix.into();
        self
    }

    /// Set the row suffix.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.row_suffix = suffix.into();
        self
    }

    /// Total overhead: prefix + suffix + separators between n columns.
    pub fn overhead(&self, num_columns: usize) -> usize {
        use crate::util::display_width;
        let prefix_width = display_width(&self.row_prefix);
        let suffix_width = display_width(&self.row_suffix);
        let sep_width = display_width(&self.column_sep);
        let sep_count = num_columns.saturating_sub(1);
        prefix_width + suffix_width + (sep_width * sep_count)
    }
}

/// Complete specification of a grid: columns plus grouping and caption
/// placement.
///
/// Rendering is a pure function of a `GridSpec` and an item sequence. The
/// spec holds no state and can be reused across renders.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridSpec {
    /// Column specifications, in display order.
    pub columns: Vec<Column>,
    /// How items are partitioned into groups.
    pub grouping: ItemGrouping,
    /// Where each group's caption renders relative to its rows.
    pub caption_order: CaptionOrder,
    /// Row decorations used by the text layer.
    pub decorations: Decorations,
}

impl GridSpec {
    /// Create a spec with the given columns, no grouping, and defaults.
    pub fn new(columns: Vec<Column>) -> Self {
        GridSpec {
            columns,
            grouping: ItemGrouping::default(),
            caption_order: CaptionOrder::default(),
            decorations: Decorations::default(),
        }
    }

    /// Create a spec builder.
    pub fn builder() -> GridSpecBuilder {
        GridSpecBuilder::default()
    }

    /// Number of columns.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Check if any column uses Fill width.
    pub fn has_fill_column(&self) -> bool {
        self.columns.iter().any(|c| matches!(c.width, Width::Fill))
    }

    /// Header labels for all columns, in order.
    pub fn extract_header(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.label().to_string()).collect()
    }
}

/// Builder for constructing [`GridSpec`] instances.
#[derive(Clone, Debug, Default)]
pub struct GridSpecBuilder {
    columns: Vec<Column>,
    grouping: ItemGrouping,
    caption_order: CaptionOrder,
    decorations: Decorations,
}

impl GridSpecBuilder {
    /// Add a column.
    pub fn column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Add multiple columns from an iterator.
    pub fn columns(mut self, columns: impl IntoIterator<Item = Column>) -> Self {
        self.columns.extend(columns);
        self
    }

    /// Set the grouping.
    pub fn grouping(mut self, grouping: ItemGrouping) -> Self {
        self.grouping = grouping;
        self
    }

    /// Group by a field (shorthand for `.grouping(ItemGrouping::by_field(..))`).
    pub fn group_by(self, field: impl Into<String>) -> Self {
        self.grouping(ItemGrouping::by_field(field))
    }

    /// Set the caption placement.
    pub fn caption_order(mut self, order: CaptionOrder) -> Self {
        self.caption_order = order;
        self
    }

    /// Set the column separator.
    pub fn separator(mut self, sep: impl Into<String>) -> Self {
        self.decorations.column_sep = sep.into();
        self
    }

    /// Set the row prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.decorations.row_prefix = prefix.into();
        self
    }

    /// Set the row suffix.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.decorations.row_suffix = suffix.into();
        self
    }

    /// Set all decorations at once.
    pub fn decorations(mut self, decorations: Decorations) -> Self {
        self.decorations = decorations;
        self
    }

    /// Build the [`GridSpec`].
    pub fn build(self) -> GridSpec {
        GridSpec {
            columns: self.columns,
            grouping: self.grouping,
            caption_order: self.caption_order,
            decorations: self.decorations,
        }
    }
}
