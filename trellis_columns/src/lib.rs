// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Columns: the column model behind a data grid.
//!
//! This crate normalizes caller-supplied column descriptors into the
//! engine's internal shape and maintains the grid's column order as an
//! explicit permutation with a pinned leading actions column.
//!
//! The core concepts are:
//!
//! - [`ColumnSpec`]: what a host declares — id, header, width bounds, and
//!   capability flags.
//! - [`Column`]: the normalized internal shape, with width bounds clamped
//!   into a consistent `min ≤ default ≤ max` ordering and duplicate ids
//!   dropped.
//! - [`ColumnOrder`]: the permutation of `{actions} ∪ {column ids}`, with
//!   [`ACTIONS_COLUMN_ID`] pinned first and excluded from drag candidacy.
//! - [`array_move`] / [`reorder_ids`]: remove-and-reinsert permutation
//!   helpers shared by row and column reordering.
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_columns::{ACTIONS_COLUMN_ID, ColumnOrder, ColumnSpec, normalize};
//!
//! let columns = normalize(vec![
//!     ColumnSpec::new("vendor", "Vendor"),
//!     ColumnSpec::new("amount", "Amount").numeric().with_widths(80.0, 120.0, 300.0),
//! ]);
//! assert_eq!(columns.len(), 2);
//!
//! let mut order = ColumnOrder::new(columns.iter().map(|c| c.id.as_str()));
//! assert_eq!(order.as_slice()[0], ACTIONS_COLUMN_ID);
//!
//! // Drag "amount" over "vendor": actions stays pinned first.
//! assert!(order.move_column("amount", "vendor"));
//! assert_eq!(order.as_slice(), [ACTIONS_COLUMN_ID, "amount", "vendor"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod column;
mod order;

pub use column::{Align, Column, ColumnSpec, normalize};
pub use order::{ACTIONS_COLUMN_ID, ColumnOrder, array_move, reorder_ids};
