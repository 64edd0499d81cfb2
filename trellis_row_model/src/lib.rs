// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Row Model: the pure derivation pipeline behind a data grid.
//!
//! This crate turns a caller-owned slice of rows into the ordered set of row
//! indices a grid should display, via the classic filter → sort → paginate
//! chain, plus the filler-row computation that keeps a grid's visible height
//! constant. It knows nothing about widgets, rendering, or where the rows
//! come from.
//!
//! The core concepts are:
//!
//! - [`CellValue`]: the small value universe the pipeline understands
//!   (empty, boolean, number, text), with a total order for sorting and
//!   case-insensitive substring matching for filtering.
//! - [`Row`]: a trait the host implements so the pipeline can read cells by
//!   column id without owning or copying row data.
//! - [`FilterSet`]: the active global and per-column filter needles.
//! - [`SortChain`]: an ordered list of sort keys with the three-state
//!   activation cycle (unsorted → ascending → descending → unsorted).
//! - [`project`]: the pipeline itself, returning a [`Projection`] of row
//!   indices into the caller's slice.
//! - [`FixedWindow`]: filler-row arithmetic for fixed-height grids.
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_row_model::{
//!     CellValue, FilterSet, FixedWindow, Pagination, Row, SortChain, project,
//! };
//!
//! struct Person {
//!     id: u32,
//!     name: &'static str,
//!     age: f64,
//! }
//!
//! impl Row for Person {
//!     type Id = u32;
//!
//!     fn id(&self) -> u32 {
//!         self.id
//!     }
//!
//!     fn cell(&self, column_id: &str) -> CellValue {
//!         match column_id {
//!             "name" => CellValue::from(self.name),
//!             "age" => CellValue::from(self.age),
//!             _ => CellValue::Empty,
//!         }
//!     }
//! }
//!
//! let rows = [
//!     Person { id: 1, name: "Ada", age: 36.0 },
//!     Person { id: 2, name: "Grace", age: 45.0 },
//!     Person { id: 3, name: "Alan", age: 41.0 },
//! ];
//!
//! // Sort by age descending, no filters, first page of 10.
//! let mut chain = SortChain::new();
//! chain.activate("age", false);
//! chain.activate("age", false);
//!
//! let projection = project(
//!     &rows,
//!     &["name", "age"],
//!     &FilterSet::new(),
//!     &chain,
//!     Some(Pagination::new(10)),
//! );
//! assert_eq!(projection.page_rows, vec![1, 2, 0]);
//!
//! // Three realized rows in a seven-row window leaves four filler rows.
//! let window = FixedWindow::new(7);
//! assert_eq!(window.filler_count(projection.page_rows.len()), 4);
//! ```
//!
//! All derivations are pure and allocate only their output; callers re-run
//! [`project`] whenever rows or view state change.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod filter;
mod paginate;
mod pipeline;
mod row;
mod sort;
mod value;
mod window;

pub use filter::FilterSet;
pub use paginate::Pagination;
pub use pipeline::{Projection, project};
pub use row::Row;
pub use sort::{SortChain, SortDirection, SortKey};
pub use value::{CellKind, CellValue};
pub use window::{FixedWindow, WindowPlan};
