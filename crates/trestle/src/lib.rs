//! # Trestle - Grouped Tabular Views
//!
//! Trestle presents arbitrary record collections as tables, decoupling what
//! a table shows from where its data comes from. It provides:
//!
//! - A pure rendering contract: items + column specs in, row descriptors out
//! - Single-field grouping with captions before or after each group
//! - A plain-text embedding with width resolution, alignment, and truncation
//! - Pluggable item loading, with HTTP JSON and in-memory sources bundled
//!
//! The rendering side never performs I/O and never fails; the loading side
//! owns both. Each half is usable alone via `trestle-grid` and
//! `trestle-source`.
//!
//! ## Core Concepts
//!
//! - [`Item`]: one record, an opaque field → value map (a JSON object)
//! - [`Column`]: binds one field to a displayed column, with formatting hints
//! - [`GridSpec`]: columns plus [`ItemGrouping`] and [`CaptionOrder`]
//! - [`GridRow`]: one rendered row, a caption line or a cell sequence
//! - [`TextGrid`]: terminal embedding of the render tree
//! - [`ItemSource`]: where items come from ([`HttpSource`], [`StaticSource`])
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use trestle::{Column, GridRow, GridSpec, Item};
//!
//! let items: Vec<Item> = serde_json::from_value(json!([
//!     { "name": "Ann", "dept": "Eng" },
//!     { "name": "Bo", "dept": "Sales" },
//!     { "name": "Cy", "dept": "Eng" },
//! ]))
//! .unwrap();
//!
//! let spec = GridSpec::builder()
//!     .column(Column::new("name"))
//!     .column(Column::new("dept"))
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
//! ## Loading Data
//!
//! Loading is the only fallible, asynchronous step. Fetch first, then render
//! whatever arrived:
//!
//! ```no_run
//! use trestle::{Column, GridSpec, HttpSource, ItemSource, TextGrid};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), trestle::LoadError> {
//!     let source = HttpSource::new("https://example.com/employees.json")
//!         .api_key("demo-key");
//!     let items = source.fetch_items().await?;
//!
//!     let spec = GridSpec::builder()
//!         .column(Column::new("first_name").header("Name"))
//!         .column(Column::new("department").header("Dept"))
//!         .group_by("department")
//!         .separator("  ")
//!         .build();
//!
//!     println!("{}", TextGrid::new(spec).header().render(&items));
//!     Ok(())
//! }
//! ```

// Rendering contract and text layer (from trestle-grid)
pub use trestle_grid::{
    cell_text, Align, CaptionOrder, Column, Decorations, GridRow, GridSpec, GridSpecBuilder, Item,
    ItemGrouping, Overflow, ResolvedWidths, RowFormatter, TextGrid, TruncateAt, Width,
};

// Width-aware string utilities (from trestle-grid)
pub use trestle_grid::{
    display_width, pad_center, pad_left, pad_right, truncate_end, truncate_middle, truncate_start,
};

// Item loading (from trestle-source)
pub use trestle_source::{
    decode_items, HttpSource, ItemSource, LoadError, StaticSource, API_KEY_HEADER,
};
