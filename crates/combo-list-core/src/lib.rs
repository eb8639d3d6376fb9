//! Searchable grouped combo list model
//!
//! This crate provides the data model behind a searchable, grouped
//! drop-down list:
//! - A two-level group/item collection flattened into a single row sequence
//! - Live token-prefix filtering with group/item relevance promotion
//! - A tag-keyed selection that survives filter changes
//! - A small read surface for whatever renders the rows
//!
//! # Example
//!
//! ```rust,ignore
//! use combo_list_core::{ComboList, Group, Item};
//!
//! let mut list = ComboList::new(vec![
//!     Group::new("Fruits", vec![Item::new("Apple", 1), Item::new("Banana", 2)]),
//!     Group::new("Vegetables", vec![Item::new("Carrot", 3)]),
//! ]);
//!
//! list.set_filter("ap");
//! assert_eq!(list.row_count(), 2); // "Fruits" header + "Apple"
//!
//! list.set_selected_tag(Some(1));
//! assert_eq!(list.selected_tag(), Some(1));
//! ```

mod list;
mod query;
mod rows;
mod tokens;

pub use list::{ComboList, GroupProvider, Invalidation, RowContent, SelectionObserver};
pub use query::Query;
pub use rows::{Group, Item, Row};
pub use tokens::tokenize;
