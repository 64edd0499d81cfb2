// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trellis Engine: a headless, renderer-agnostic data-grid controller.
//!
//! The engine ties the Trellis primitive crates together into one object a
//! host embeds behind its table widget: the row-model pipeline
//! ([`trellis_row_model`]), column descriptors and ordering
//! ([`trellis_columns`]), selection tracking ([`trellis_selection`]), and
//! the gesture state machines ([`trellis_session`]).
//!
//! The division of labor is strict:
//!
//! - The **host** owns the rows, paints cells, and routes input. It calls
//!   one [`GridEngine`] transition per gesture (header click, pointer move,
//!   checkbox toggle, keystroke) and re-renders from [`GridEngine::view_rows`].
//! - The **engine** owns everything else: the consolidated [`ViewState`]
//!   (sort, filters, visibility, order, sizing, selection, pagination), the
//!   single in-flight gesture session, and the [`GridEvent`] queue through
//!   which state the host must mirror flows back out.
//!
//! Capabilities are opted into per grid instance with [`GridFeatures`];
//! transitions for a disabled capability are silent no-ops, so hosts can
//! wire their full input surface once and configure behavior in one place.
//!
//! ## Minimal example
//!
//! ```rust
//! use trellis_engine::{
//!     CellValue, ColumnSpec, GridEngine, GridEvent, GridFeatures, GridSettings, Row,
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
//! let mut grid: GridEngine<u32> = GridEngine::new(
//!     vec![
//!         ColumnSpec::new("name", "Name"),
//!         ColumnSpec::new("age", "Age").numeric(),
//!     ],
//!     GridSettings::new().enable(GridFeatures::ROW_SELECTION),
//! );
//!
//! let people = vec![
//!     Person { id: 1, name: "Ada", age: 36.0 },
//!     Person { id: 2, name: "Grace", age: 29.0 },
//! ];
//!
//! // Header click: sort ascending by age; Grace now comes first.
//! grid.sort_clicked("age");
//! let view = grid.view_rows(&people);
//! assert_eq!(view.row_indices, vec![1, 0]);
//!
//! // Select a row, then drain the events the host must mirror.
//! grid.toggle_row(2);
//! let events = grid.take_events();
//! assert!(matches!(&events[..], [GridEvent::SelectionChanged(s)] if s.is_selected(&2)));
//! ```

mod engine;
mod event;
mod settings;
mod view_state;

pub use engine::{GridEngine, ViewRows};
pub use event::GridEvent;
pub use settings::{GridFeatures, GridSettings};
pub use view_state::ViewState;

pub use trellis_columns::{ACTIONS_COLUMN_ID, Align, Column, ColumnOrder, ColumnSpec};
pub use trellis_row_model::{
    CellKind, CellValue, FilterSet, Pagination, Row, SortChain, SortDirection, SortKey,
};
pub use trellis_selection::SelectionMap;
pub use trellis_session::{EditOutcome, Session};
