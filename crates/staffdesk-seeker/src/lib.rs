//! Seeker - filter, sort and paginate in-memory record collections for table
//! views.
//!
//! A table view is a function of a few inputs: search text, column filters,
//! a sort column and a page number. This crate keeps those inputs in one
//! place and turns them into the rows to draw:
//!
//! - [`QueryState`] owns the inputs and applies the page-reset rules.
//! - [`Debounced`] holds back search text until typing pauses.
//! - [`compute_view`] runs the filter and sort stages and reports the match
//!   count.
//! - [`Paginator`] clamps the page and slices the rows.
//!
//! Records describe themselves with a static [`Schema`] through the
//! [`Seekable`] trait, so each column's comparison is known up front.
//!
//! # Quick Start
//!
//! ```rust
//! use std::num::NonZeroUsize;
//! use staffdesk_seeker::{
//!     compute_view, FieldDef, FieldKind, FilterValue, Number, Paginator, QueryState, Schema,
//!     Seekable, Value,
//! };
//!
//! struct Asset {
//!     id: u32,
//!     item: String,
//!     status: &'static str,
//! }
//!
//! static ASSET: Schema = Schema::new(&[
//!     FieldDef::new("id", "ID", FieldKind::Number),
//!     FieldDef::new("item", "Item", FieldKind::Text).searchable(),
//!     FieldDef::new("status", "Status", FieldKind::Enum(&["active", "returned"])),
//! ]);
//!
//! impl Seekable for Asset {
//!     fn schema() -> &'static Schema {
//!         &ASSET
//!     }
//!
//!     fn seeker_field_value(&self, field: &str) -> Value<'_> {
//!         match field {
//!             "id" => Value::Number(Number::from(self.id)),
//!             "item" => Value::String(&self.item),
//!             "status" => Value::Enum(self.status),
//!             _ => Value::None,
//!         }
//!     }
//! }
//!
//! let assets = vec![
//!     Asset { id: 1, item: "MacBook Pro".into(), status: "active" },
//!     Asset { id: 2, item: "iPhone".into(), status: "active" },
//!     Asset { id: 3, item: "iMac".into(), status: "returned" },
//! ];
//!
//! let mut state = QueryState::new(NonZeroUsize::new(10).unwrap());
//! state.set_search_text("mac");
//! state.set_sort("item");
//!
//! let view = compute_view(&assets, state.search_text(), state.filters(), state.sort());
//! assert_eq!(view.match_count, 2);
//! assert_eq!(view.rows[0].item, "iMac");
//!
//! state.set_filter("status", FilterValue::parse("active"));
//! let view = compute_view(&assets, state.search_text(), state.filters(), state.sort());
//! let pager = Paginator::new(state.page_size(), NonZeroUsize::new(5).unwrap());
//! let page = pager.paginate(view.match_count, state.page());
//! assert_eq!(page.slice(&view.rows).len(), 1);
//! ```
//!
//! # Query Semantics
//!
//! Underneath, view inputs become a [`Query`] with three clause groups:
//!
//! ```text
//! match = (all AND clauses match)
//!       ∧ (at least one OR clause matches, OR no OR clauses exist)
//!       ∧ (no NOT clause matches)
//! ```
//!
//! Filters are AND equality clauses; search is an OR group of `Contains`
//! clauses over the searchable fields. A missing field never matches.
//!
//! # Field Kinds and Operators
//!
//! | Kind | Operators | Sorted by |
//! |------|-----------|-----------|
//! | Text | `Eq`, `Ne`, `Contains`, range | case- and accent-insensitive collation |
//! | Enum | `Eq`, `Ne`, `Contains` | token, like text |
//! | Number | `Eq`, `Ne`, `Gt`, `Gte`, `Lt`, `Lte` | numeric value |
//! | Date | `Eq`, `Ne`, `Gt`, `Gte`, `Lt`, `Lte` | calendar order |

mod clause;
mod config;
mod debounce;
mod error;
mod op;
mod ordering;
mod pagination;
mod query;
mod schema;
mod state;
mod traits;
mod value;
mod view;

// Re-export public API
pub use clause::{Clause, ClauseValue};
pub use config::{ValidatedConfig, ViewConfig};
pub use debounce::Debounced;
pub use error::{Result, SeekerError};
pub use op::Op;
pub use ordering::{collation_key, Dir, SortSpec};
pub use pagination::{Page, Paginator};
pub use query::{Group, Query};
pub use schema::{FieldDef, FieldKind, Schema};
pub use state::QueryState;
pub use traits::{Seekable, SeekerEnum};
pub use value::{Number, Value, DATE_FORMAT};
pub use view::{compute_view, view_query, FilterValue, View};
