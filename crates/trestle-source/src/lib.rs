//! Data loading for trestle grids.
//!
//! Rendering in `trestle-grid` is a pure function over an item sequence.
//! This crate owns the other half: acquiring that sequence. Everything is
//! built around the [`ItemSource`] trait, with bundled implementations for
//! remote JSON endpoints ([`HttpSource`]) and in-memory fixtures
//! ([`StaticSource`]).
//!
//! # Quick Start
//!
//! ```no_run
//! use trestle_source::{HttpSource, ItemSource};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), trestle_source::LoadError> {
//!     let source = HttpSource::new("https://example.com/employees.json")
//!         .api_key("demo-key");
//!
//!     let items = source.fetch_items().await?;
//!     println!("loaded {} items", items.len());
//!     Ok(())
//! }
//! ```
//!
//! # Failure Model
//!
//! Every failure surfaces as a [`LoadError`]: transport problems as
//! [`LoadError::Network`], non-success responses as [`LoadError::Status`],
//! and bodies that are not a JSON array of objects as [`LoadError::Decode`].
//! A load either yields the complete item sequence or fails as a whole;
//! there are no partial results.
//!
//! # Testing
//!
//! [`StaticSource`] and [`decode_items`] keep consumers testable without a
//! network:
//!
//! ```
//! use trestle_source::decode_items;
//!
//! let items = decode_items(r#"[{"name":"Ann","dept":"Eng"}]"#)?;
//! assert_eq!(items[0]["name"], "Ann");
//! # Ok::<(), trestle_source::LoadError>(())
//! ```

mod error;
mod source;

pub use error::LoadError;
pub use source::{decode_items, HttpSource, ItemSource, StaticSource, API_KEY_HEADER};
