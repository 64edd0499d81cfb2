// Copyright 2026 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The grid controller: owns the view state and one gesture session,
//! exposes synchronous transitions, and queues events for the host.

use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::Point;
use log::{debug, trace};
use trellis_columns::{ACTIONS_COLUMN_ID, Column, ColumnOrder, ColumnSpec, normalize, reorder_ids};
use trellis_row_model::{FixedWindow, Row, project};
use trellis_session::{DragState, EditOutcome, EditState, ResizeState, Session, WidthBounds};

use crate::{GridEvent, GridFeatures, GridSettings, ViewState};

/// One projected window of rows, ready to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewRows {
    /// Indices into the host's row slice, in display order.
    pub row_indices: Vec<usize>,
    /// Non-interactive filler rows appended after the data rows to keep
    /// the grid's visible height constant.
    pub filler_rows: usize,
    /// Rows passing the filters across all pages.
    pub filtered_len: usize,
    /// The displayed (clamped) page index.
    pub page_index: usize,
    /// Total pages; at least 1.
    pub page_count: usize,
}

/// A headless data grid.
///
/// The engine owns the grid's [`ViewState`] and its single in-flight
/// gesture [`Session`], never the rows: hosts keep canonical data and pass
/// a row slice to [`view_rows`] whenever they render. Every user gesture
/// maps to one synchronous transition method; transitions for disabled
/// [`GridFeatures`] are silent no-ops, and malformed input (unknown ids,
/// out-of-range indices) degrades to a no-op instead of an error.
///
/// State changes the host must mirror are queued as [`GridEvent`]s and
/// drained with [`take_events`]. An update guard makes transitions invoked
/// re-entrantly — from inside the host's event handling — idempotent
/// no-ops, so a host handler that synchronously feeds input back into the
/// engine cannot recurse.
///
/// [`view_rows`]: GridEngine::view_rows
/// [`take_events`]: GridEngine::take_events
#[derive(Debug)]
pub struct GridEngine<K: Eq + Hash> {
    columns: Vec<Column>,
    settings: GridSettings,
    view: ViewState<K>,
    session: Session<K, String>,
    seed_visibility: HashMap<String, bool>,
    seed_sizing: HashMap<String, f64>,
    events: Vec<GridEvent<K>>,
    in_update: bool,
}

impl<K: Clone + Eq + Hash + Debug> GridEngine<K> {
    /// Creates a grid over the given column descriptors.
    #[must_use]
    pub fn new(specs: Vec<ColumnSpec>, settings: GridSettings) -> Self {
        let columns = normalize(specs);
        let order = ColumnOrder::new(columns.iter().map(|column| column.id.as_str()));
        let view = ViewState::new(order, settings.page_size);
        Self {
            columns,
            settings,
            view,
            session: Session::Idle,
            seed_visibility: HashMap::new(),
            seed_sizing: HashMap::new(),
            events: Vec::new(),
            in_update: false,
        }
    }

    /// Seeds column visibility, e.g. from the host's saved layout. The
    /// seed is also what [`reset_layout`](Self::reset_layout) restores.
    #[must_use]
    pub fn with_initial_visibility(mut self, visibility: HashMap<String, bool>) -> Self {
        self.seed_visibility = visibility;
        self.apply_visibility_seed();
        self
    }

    /// Seeds explicit column widths; values are clamped into each column's
    /// bounds. The seed is also what [`reset_layout`](Self::reset_layout)
    /// restores.
    #[must_use]
    pub fn with_initial_sizing(mut self, sizing: HashMap<String, f64>) -> Self {
        self.seed_sizing = sizing;
        self.apply_sizing_seed();
        self
    }

    /// The normalized columns, in declaration order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Looks up a column by id.
    #[must_use]
    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.id == column_id)
    }

    /// The grid's configuration.
    #[must_use]
    pub fn settings(&self) -> &GridSettings {
        &self.settings
    }

    /// The consolidated view state.
    #[must_use]
    pub fn view(&self) -> &ViewState<K> {
        &self.view
    }

    /// The in-flight gesture, if any.
    #[must_use]
    pub fn session(&self) -> &Session<K, String> {
        &self.session
    }

    /// Visible data-column ids in display order (the actions column and
    /// hidden columns are excluded).
    #[must_use]
    pub fn visible_columns(&self) -> Vec<&str> {
        self.view
            .order
            .as_slice()
            .iter()
            .map(String::as_str)
            .filter(|id| *id != ACTIONS_COLUMN_ID && self.view.is_column_visible(id))
            .collect()
    }

    /// The current width of a column: the resized width if one was
    /// committed, otherwise the declared default.
    #[must_use]
    pub fn width_of(&self, column_id: &str) -> Option<f64> {
        let column = self.column(column_id)?;
        Some(
            self.view
                .sizing
                .get(column_id)
                .copied()
                .unwrap_or(column.default_width),
        )
    }

    /// Drains the queued events, oldest first.
    #[must_use]
    pub fn take_events(&mut self) -> Vec<GridEvent<K>> {
        core::mem::take(&mut self.events)
    }

    // ---- sorting ----------------------------------------------------

    /// Header activation: cycles the column's sort state, collapsing the
    /// chain to this column (single-sort interaction).
    pub fn sort_clicked(&mut self, column_id: &str) {
        self.sort_with(column_id, false);
    }

    /// Additive header activation (shift-click): cycles the column within
    /// the chain, building a multi-column sort.
    pub fn sort_clicked_additive(&mut self, column_id: &str) {
        self.sort_with(column_id, true);
    }

    fn sort_with(&mut self, column_id: &str, additive: bool) {
        self.transition((), |this| {
            if !this.settings.has(GridFeatures::SORTING) {
                return;
            }
            match this.column(column_id) {
                Some(column) if column.sortable => {
                    this.view.sort.activate(column_id, additive);
                    trace!("sort chain: {:?}", this.view.sort.keys());
                }
                _ => debug!("sort on unknown or unsortable column {column_id:?} ignored"),
            }
        });
    }

    // ---- filtering --------------------------------------------------

    /// Sets or clears the global filter and reports it to the host.
    pub fn set_global_filter(&mut self, text: &str) {
        self.transition((), |this| {
            this.view.filters.set_global(text);
            this.events.push(GridEvent::GlobalSearch(String::from(text)));
        });
    }

    /// Sets or clears one column's filter needle.
    pub fn set_column_filter(&mut self, column_id: &str, needle: Option<&str>) {
        self.transition((), |this| {
            if !this.settings.has(GridFeatures::COLUMN_FILTERS) {
                return;
            }
            if this.column(column_id).is_none() {
                debug!("filter on unknown column {column_id:?} ignored");
                return;
            }
            this.view.filters.set_column(column_id, needle);
        });
    }

    /// Clears the global and all per-column filters.
    pub fn clear_filters(&mut self) {
        self.transition((), |this| {
            this.view.filters.clear();
        });
    }

    // ---- pagination -------------------------------------------------

    /// Requests a page. Out-of-range indices are clamped at projection.
    pub fn set_page(&mut self, page_index: usize) {
        self.transition((), |this| {
            if this.settings.has(GridFeatures::PAGINATION) {
                this.view.pagination.page_index = page_index;
            }
        });
    }

    /// Advances one page; clamped at projection.
    pub fn next_page(&mut self) {
        self.transition((), |this| {
            if this.settings.has(GridFeatures::PAGINATION) {
                this.view.pagination.page_index = this.view.pagination.page_index.saturating_add(1);
            }
        });
    }

    /// Goes back one page.
    pub fn prev_page(&mut self) {
        self.transition((), |this| {
            if this.settings.has(GridFeatures::PAGINATION) {
                this.view.pagination.page_index = this.view.pagination.page_index.saturating_sub(1);
            }
        });
    }

    /// Changes the page size. Zero is clamped to 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.transition((), |this| {
            if this.settings.has(GridFeatures::PAGINATION) {
                this.view.pagination.page_size = page_size.max(1);
            }
        });
    }

    // ---- selection --------------------------------------------------

    /// Toggles one row's selection and reports the full selection state.
    pub fn toggle_row(&mut self, row: K) {
        self.transition((), |this| {
            if !this.settings.has(GridFeatures::ROW_SELECTION) {
                return;
            }
            this.view.selection.toggle(row);
            this.push_selection_changed();
        });
    }

    /// Bulk-selects or clears the given rows (select-all over the current
    /// view). Reports only if anything changed.
    pub fn set_all_rows(&mut self, rows: Vec<K>, selected: bool) {
        self.transition((), |this| {
            if !this.settings.has(GridFeatures::ROW_SELECTION) {
                return;
            }
            if this.view.selection.set_all(rows.into_iter(), selected) {
                this.push_selection_changed();
            }
        });
    }

    /// Reconciles engine state against the current row-id set. Call after
    /// every data refresh: stale selection entries are pruned (and
    /// reported), and an edit session whose row vanished is discarded.
    pub fn sync_rows(&mut self, current_ids: &[K]) {
        self.transition((), |this| {
            if this.view.selection.reconcile(current_ids.iter().cloned()) {
                this.push_selection_changed();
            }
            if let Session::Edit(edit) = &this.session
                && !current_ids.contains(edit.row())
            {
                debug!("edited row {:?} disappeared; edit discarded", edit.row());
                this.session = Session::Idle;
            }
        });
    }

    fn push_selection_changed(&mut self) {
        self.events
            .push(GridEvent::SelectionChanged(self.view.selection.clone()));
    }

    // ---- column visibility ------------------------------------------

    /// Shows or hides a column. Hiding a column declared `always_visible`
    /// is refused.
    pub fn set_column_visible(&mut self, column_id: &str, visible: bool) {
        self.transition((), |this| {
            if !this.settings.has(GridFeatures::COLUMN_VISIBILITY) {
                return;
            }
            match this.column(column_id) {
                Some(column) if visible || column.hideable => {
                    this.view.visibility.insert(String::from(column_id), visible);
                }
                Some(_) => debug!("column {column_id:?} is not hideable"),
                None => debug!("visibility toggle on unknown column {column_id:?} ignored"),
            }
        });
    }

    // ---- resize -----------------------------------------------------

    /// Begins resizing a column edge. No-op while another gesture is in
    /// flight; the input layer's event capture keeps resize handles and
    /// drag sensors mutually exclusive, and this guard backs that up.
    pub fn begin_resize(&mut self, column_id: &str, pointer: Point) {
        self.transition((), |this| {
            if !this.settings.has(GridFeatures::COLUMN_RESIZING) {
                return;
            }
            if !this.session.is_idle() {
                debug!("resize refused: another gesture is in flight");
                return;
            }
            let Some(column) = this.column(column_id) else {
                debug!("resize on unknown column {column_id:?} ignored");
                return;
            };
            let bounds = WidthBounds {
                min: column.min_width,
                max: column.max_width,
            };
            let start_width = this
                .view
                .sizing
                .get(column_id)
                .copied()
                .unwrap_or(column.default_width);
            this.session = Session::Resize(ResizeState::begin(
                String::from(column_id),
                start_width,
                bounds,
                pointer,
            ));
        });
    }

    /// Tracks the pointer during a resize; returns the clamped preview
    /// width, or `None` when no resize is in flight.
    pub fn update_resize(&mut self, pointer: Point) -> Option<f64> {
        self.transition(None, |this| {
            if let Session::Resize(resize) = &mut this.session {
                Some(resize.update(pointer))
            } else {
                None
            }
        })
    }

    /// Commits the resize, persisting the width and reporting the full
    /// sizing map.
    pub fn commit_resize(&mut self) {
        self.transition((), |this| {
            match this.session.take() {
                Session::Resize(resize) => {
                    let (column, width) = resize.commit();
                    trace!("column {column:?} resized to {width}");
                    this.view.sizing.insert(column, width);
                    this.events
                        .push(GridEvent::ColumnSizingChanged(this.view.sizing.clone()));
                }
                other => this.session = other,
            }
        });
    }

    /// Abandons the resize without touching the sizing map.
    pub fn cancel_resize(&mut self) {
        self.transition((), |this| {
            if matches!(this.session, Session::Resize(_)) {
                this.session = Session::Idle;
            }
        });
    }

    // ---- drag reorder -----------------------------------------------

    /// Begins dragging a row. No-op while another gesture is in flight.
    pub fn begin_row_drag(&mut self, row: K, pointer: Point) {
        self.transition((), |this| {
            if !this.settings.has(GridFeatures::ROW_REORDER) {
                return;
            }
            if !this.session.is_idle() {
                debug!("row drag refused: another gesture is in flight");
                return;
            }
            this.session = Session::RowDrag(DragState::begin(row, pointer));
        });
    }

    /// Begins dragging a column. The pinned actions column never drags.
    pub fn begin_column_drag(&mut self, column_id: &str, pointer: Point) {
        self.transition((), |this| {
            if !this.settings.has(GridFeatures::COLUMN_REORDER) {
                return;
            }
            if !this.session.is_idle() {
                debug!("column drag refused: another gesture is in flight");
                return;
            }
            if column_id == ACTIONS_COLUMN_ID || this.column(column_id).is_none() {
                debug!("column drag on {column_id:?} ignored");
                return;
            }
            this.session = Session::ColumnDrag(DragState::begin(String::from(column_id), pointer));
        });
    }

    /// Tracks pointer movement for whichever drag is in flight.
    pub fn drag_moved(&mut self, pointer: Point) {
        self.transition((), |this| match &mut this.session {
            Session::RowDrag(drag) => {
                drag.on_move(pointer);
            }
            Session::ColumnDrag(drag) => {
                drag.on_move(pointer);
            }
            _ => {}
        });
    }

    /// Updates the row a row-drag is hovering over.
    pub fn drag_over_row(&mut self, over: Option<K>) {
        self.transition((), |this| {
            if let Session::RowDrag(drag) = &mut this.session {
                drag.set_over(over);
            }
        });
    }

    /// Updates the column a column-drag is hovering over.
    pub fn drag_over_column(&mut self, over: Option<&str>) {
        self.transition((), |this| {
            if let Session::ColumnDrag(drag) = &mut this.session {
                drag.set_over(over.map(String::from));
            }
        });
    }

    /// Ends the in-flight drag.
    ///
    /// For a row drag, `visible_row_ids` is the currently displayed row
    /// order; the committed permutation is reported via
    /// [`GridEvent::RowsReordered`] for the host to apply — the engine
    /// does not own rows. For a column drag the argument is ignored and
    /// the column order is written directly. Drops with no target, onto
    /// the dragged item itself, or referencing unknown ids are no-ops.
    pub fn end_drag(&mut self, visible_row_ids: &[K]) {
        self.transition((), |this| match this.session.take() {
            Session::RowDrag(drag) => {
                if let Some((active, over)) = drag.end() {
                    match reorder_ids(visible_row_ids, &active, &over) {
                        Some(order) => {
                            trace!("row {active:?} dropped on {over:?}");
                            this.events.push(GridEvent::RowsReordered(order));
                        }
                        None => debug!("row drag referenced an unknown id; ignored"),
                    }
                }
            }
            Session::ColumnDrag(drag) => {
                if let Some((active, over)) = drag.end()
                    && this.view.order.move_column(&active, &over)
                {
                    trace!("column order: {:?}", this.view.order.as_slice());
                }
            }
            other => this.session = other,
        });
    }

    /// Abandons the in-flight drag without reordering anything.
    pub fn cancel_drag(&mut self) {
        self.transition((), |this| {
            if matches!(this.session, Session::RowDrag(_) | Session::ColumnDrag(_)) {
                this.session = Session::Idle;
            }
        });
    }

    // ---- inline editing ---------------------------------------------

    /// Opens a cell for editing, seeded with its current display text.
    ///
    /// Opening a new cell while another edit is in flight commits the
    /// previous session first (its outcome is reported as usual). A drag
    /// or resize in flight refuses the edit instead.
    pub fn begin_edit(&mut self, row: K, row_index: usize, column_id: &str, initial: &str) {
        self.transition((), |this| {
            match this.column(column_id) {
                Some(column) if column.editable => {}
                _ => {
                    debug!("edit on non-editable column {column_id:?} ignored");
                    return;
                }
            }
            match this.session.take() {
                Session::Idle => {}
                Session::Edit(previous) => {
                    let _ = this.finish_edit(previous);
                }
                other => {
                    debug!("edit refused: another gesture is in flight");
                    this.session = other;
                    return;
                }
            }
            this.session = Session::Edit(EditState::begin(
                row,
                row_index,
                String::from(column_id),
                initial,
            ));
        });
    }

    /// Replaces the pending text as the user types.
    pub fn edit_input(&mut self, text: &str) {
        self.transition((), |this| {
            if let Session::Edit(edit) = &mut this.session {
                edit.set_pending(text);
            }
        });
    }

    /// Commits the in-flight edit (blur). A successful commit is reported
    /// via [`GridEvent::CellCommitted`]; a failed numeric parse rejects
    /// the edit, leaving the cell unchanged. Returns the outcome, or
    /// `None` when no edit was in flight.
    pub fn commit_edit(&mut self) -> Option<EditOutcome> {
        self.transition(None, |this| match this.session.take() {
            Session::Edit(edit) => Some(this.finish_edit(edit)),
            other => {
                this.session = other;
                None
            }
        })
    }

    /// Discards the in-flight edit and its pending value.
    pub fn cancel_edit(&mut self) {
        self.transition((), |this| {
            if matches!(this.session, Session::Edit(_)) {
                this.session = Session::Idle;
            }
        });
    }

    fn finish_edit(&mut self, edit: EditState<K, String>) -> EditOutcome {
        let row = edit.row().clone();
        let column = edit.column().clone();
        let kind = self
            .column(&column)
            .map(|column| column.kind)
            .unwrap_or_default();
        let outcome = edit.commit(kind);
        match &outcome {
            EditOutcome::Committed(value) => {
                trace!("cell ({row:?}, {column:?}) committed");
                self.events.push(GridEvent::CellCommitted {
                    row,
                    column,
                    value: value.clone(),
                });
            }
            EditOutcome::Rejected(raw) => {
                debug!("cell ({row:?}, {column:?}) rejected non-numeric input {raw:?}");
            }
        }
        outcome
    }

    // ---- layout -----------------------------------------------------

    /// Restores the caller's original layout: declaration column order and
    /// the visibility / sizing seeds. Sorting, filters, selection, and
    /// pagination are untouched. Any in-flight gesture is discarded.
    pub fn reset_layout(&mut self) {
        self.transition((), |this| {
            this.session = Session::Idle;
            this.view
                .order
                .reset(this.columns.iter().map(|column| column.id.as_str()));
            this.apply_visibility_seed();
            this.apply_sizing_seed();
            this.events.push(GridEvent::LayoutReset);
        });
    }

    fn apply_visibility_seed(&mut self) {
        self.view.visibility.clear();
        for (id, visible) in &self.seed_visibility {
            let Some(column) = self.columns.iter().find(|column| &column.id == id) else {
                continue;
            };
            if *visible || column.hideable {
                self.view.visibility.insert(id.clone(), *visible);
            }
        }
    }

    fn apply_sizing_seed(&mut self) {
        self.view.sizing.clear();
        for (id, width) in &self.seed_sizing {
            if let Some(column) = self.columns.iter().find(|column| &column.id == id) {
                self.view.sizing.insert(id.clone(), column.clamp_width(*width));
            }
        }
    }

    // ---- projection -------------------------------------------------

    /// Projects the host's rows through the pipeline under the current
    /// view state: filter, stable sort, paginate, then pad with filler
    /// rows up to the fixed window capacity.
    ///
    /// The clamped page index is written back into the view state, so a
    /// dataset that shrinks under filtering settles on the last valid
    /// page rather than an empty out-of-range one.
    pub fn view_rows<R: Row<Id = K>>(&mut self, rows: &[R]) -> ViewRows {
        let visible = self.visible_columns();
        let pagination = self
            .settings
            .has(GridFeatures::PAGINATION)
            .then_some(self.view.pagination);
        let projection = project(rows, &visible, &self.view.filters, &self.view.sort, pagination);

        if self.view.pagination.page_index != projection.page_index
            && self.settings.has(GridFeatures::PAGINATION)
        {
            trace!(
                "page index clamped {} -> {}",
                self.view.pagination.page_index, projection.page_index
            );
            self.view.pagination.page_index = projection.page_index;
        }

        let window = FixedWindow::new(self.settings.window_capacity());
        let filler_rows = window.filler_count(projection.page_rows.len());
        ViewRows {
            row_indices: projection.page_rows,
            filler_rows,
            filtered_len: projection.filtered_len,
            page_index: projection.page_index,
            page_count: projection.page_count,
        }
    }

    // ---- internal ---------------------------------------------------

    /// Runs one transition under the re-entrancy guard.
    ///
    /// Host event handlers that synchronously feed input back into the
    /// engine while a transition is notifying them would otherwise
    /// recurse; such nested calls return `default` untouched.
    fn transition<T>(&mut self, default: T, f: impl FnOnce(&mut Self) -> T) -> T {
        if self.in_update {
            debug!("re-entrant grid transition ignored");
            return default;
        }
        self.in_update = true;
        let result = f(self);
        self.in_update = false;
        result
    }
}
