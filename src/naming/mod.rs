//! Filename tag engine.
//!
//! File names carry their own metadata as trailing hashtags:
//! `alice-beach #2#sunset.jpg`. This module parses such names, brings their
//! tags into canonical order and derives new names from them. Every function
//! here is pure and total; malformed input simply has no tags.
//!
//! # Examples
//!
//! ```
//! use vtag::naming::{self, Priority};
//!
//! assert_eq!(naming::scrub("shoot #2 #5 #landscape.jpg"), "shoot #5#landscape.jpg");
//! assert_eq!(naming::add_tag("photo.jpg", "vacation"), "photo #vacation.jpg");
//! assert_eq!(
//!     naming::apply_priority_tag("photo #4#sea.jpg", Priority::new(1)?),
//!     "photo #1#sea.jpg"
//! );
//! assert_eq!(naming::index_name("alice-beach #1.jpg").as_deref(), Some("alice-index #1.jpg"));
//! assert_eq!(naming::model_name("alice-beach #1.jpg"), Some("alice"));
//! # Ok::<(), vtag::naming::TagError>(())
//! ```

pub mod derive;
pub mod error;
pub mod grammar;
pub mod mutate;
pub mod scrub;
pub mod tag;

pub use derive::{index_name, model_name};
pub use error::TagError;
pub use grammar::{ParsedName, parse, render};
pub use mutate::{add_tag, apply_priority_tag, remove_tag, with_tag, without_tag};
pub use scrub::{canonical_tags, canonicalize, scrub};
pub use tag::{Priority, TagToken};
