//! # Trestle Grid - Grouped, Captioned Tabular Views
//!
//! `trestle-grid` renders arbitrary record collections as tables: rows under
//! caller-supplied columns, optionally partitioned into labeled groups. It is
//! the rendering core of the `trestle` crate, but can be used on its own.
//!
//! ## Core Concepts
//!
//! - [`Item`]: one record, an opaque field → value map (a JSON object)
//! - [`Column`]: binds one field to a displayed column, with formatting hints
//! - [`ItemGrouping`]: no grouping, or partition by one field's values
//! - [`CaptionOrder`]: group captions before or after their rows
//! - [`GridSpec::render`]: the contract, items in, [`GridRow`] descriptors out
//! - [`TextGrid`]: the bundled terminal embedding of those descriptors
//!
//! Rendering is a pure, total function: empty item sequences, empty column
//! sets, and missing fields all degrade to visible-but-empty output. Nothing
//! here returns an error.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use trestle_grid::{Column, GridRow, GridSpec, Item};
//!
//! let items: Vec<Item> = serde_json::from_value(json!([
//!     { "name": "Ann", "dept": "Eng" },
//!     { "name": "Bo", "dept": "Sales" },
//!     { "name": "Cy", "dept": "Eng" },
//! ]))
//! .unwrap();
//!
//! let spec = GridSpec::builder()
//!     .column(Column::new("name").header("Name"))
//!     .column(Column::new("dept").header("Dept"))
//!     .group_by("dept")
//!     .build();
//!
//! let rows = spec.render(&items);
//! assert_eq!(
//!     rows,
//!     vec![
//!         GridRow::Caption("Eng".into()),
//!         GridRow::Cells(vec!["Ann".into(), "Eng".into()]),
//!         GridRow::Cells(vec!["Cy".into(), "Eng".into()]),
//!         GridRow::Caption("Sales".into()),
//!         GridRow::Cells(vec!["Bo".into(), "Sales".into()]),
//!     ]
//! );
//! ```
//!
//! ## Terminal Output
//!
//! The descriptors carry no layout. For plain-text output, [`TextGrid`]
//! resolves column widths from the data and aligns every cell:
//!
//! ```rust
//! use serde_json::json;
//! use trestle_grid::{Column, GridSpec, Item, TextGrid};
//!
//! let items: Vec<Item> = serde_json::from_value(json!([
//!     { "name": "Ann", "dept": "Eng" },
//!     { "name": "Bo", "dept": "Sales" },
//! ]))
//! .unwrap();
//!
//! let spec = GridSpec::builder()
//!     .column(Column::new("name"))
//!     .column(Column::new("dept"))
//!     .separator("  ")
//!     .build();
//!
//! let text = TextGrid::new(spec).render(&items);
//! assert_eq!(text, "Ann  Eng  \nBo   Sales");
//! ```
//!
//! ## Width Strategies
//!
//! - [`Width::Auto`] - widest cell wins (the default)
//! - [`Width::Fixed(n)`](Width::Fixed) - exactly n display columns
//! - [`Width::Bounded { min, max }`](Width::Bounded) - auto, clamped to bounds
//! - [`Width::Fill`] - take the space left over after all other columns
//!
//! ## Truncation Modes
//!
//! - [`TruncateAt::End`] - keep the start: "Hello W…"
//! - [`TruncateAt::Start`] - keep the end: "…o World"
//! - [`TruncateAt::Middle`] - keep both: "Hel…orld"

mod format;
mod resolve;
mod text;
mod types;
mod util;
mod view;

pub use format::RowFormatter;
pub use resolve::ResolvedWidths;
pub use text::TextGrid;
pub use types::{
    Align, CaptionOrder, Column, Decorations, GridSpec, GridSpecBuilder, Item, ItemGrouping,
    Overflow, TruncateAt, Width,
};
pub use util::{
    display_width, pad_center, pad_left, pad_right, truncate_end, truncate_middle, truncate_start,
};
pub use view::{cell_text, GridRow};
