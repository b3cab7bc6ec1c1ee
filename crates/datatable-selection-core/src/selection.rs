//! Row selection state for data tables.
//!
//! [`SelectableRows`] owns the selection set of a table and the anchor used for range selection.
//! The host feeds it the rows of the current page (after filtering, sorting, and pagination) and
//! forwards user interactions as method calls. Rows are addressed by their position on the
//! current page.
//!
//! Every write of the selection set queues a [`SelectableEvent::UpdateModelValue`] for two-way
//! binding. An uncontrolled table stores the value right away and follows up with a
//! [`SelectableEvent::SelectionChange`] carrying owned snapshots of the new and the previous
//! value. A controlled table reports the change once the host writes the value back through
//! [`SelectableRows::set_model_value`]. Hosts collect events with
//! [`SelectableRows::drain_events`].
//!
//! The selection set spans pages: bulk operations only add or remove the keys of the current
//! page and leave keys of other pages alone.

use crate::key::ItemSource;
use crate::key::TrackBy;
use crate::key::resolve_key;
use crate::mode::SelectMode;
use crate::mode::SelectableOptions;
use crate::model::ModelValue;
use crate::row::DataTableRow;
use indexmap::IndexSet;
use std::ops::RangeInclusive;

/// Payload of [`SelectableEvent::SelectionChange`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionChange<K> {
    pub current: Vec<K>,
    pub previous: Vec<K>,
}

/// Notifications produced by [`SelectableRows`], in emission order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectableEvent<K> {
    /// The selection the table wants the host to store. Fired on every write.
    UpdateModelValue(Vec<K>),
    /// The authoritative selection changed.
    SelectionChange(SelectionChange<K>),
}

/// A user interaction, resolved to a page position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionCommand {
    Toggle(usize),
    CtrlToggle(usize),
    RangeSelect(usize),
    ToggleBulk,
}

/// Selection engine of a data table.
#[derive(Clone, Debug)]
pub struct SelectableRows<T: ItemSource> {
    rows: Vec<DataTableRow<T>>,
    options: SelectableOptions,
    track_by: TrackBy<T>,
    model: ModelValue<T::Key>,
    anchor: Option<usize>,
    events: Vec<SelectableEvent<T::Key>>,
}

impl<T: ItemSource> SelectableRows<T> {
    /// Creates an uncontrolled engine with an empty selection and no rows.
    pub fn new(options: SelectableOptions) -> Self {
        Self::init(options, ModelValue::uncontrolled())
    }

    /// Creates an engine whose selection is owned by the host.
    pub fn with_model_value(
        options: SelectableOptions,
        value: impl IntoIterator<Item = T::Key>,
    ) -> Self {
        Self::init(options, ModelValue::controlled(value))
    }

    fn init(options: SelectableOptions, model: ModelValue<T::Key>) -> Self {
        let mut s = Self {
            rows: Vec::new(),
            options,
            track_by: TrackBy::Identity,
            model,
            anchor: None,
            events: Vec::new(),
        };
        let current = s.selected_items();
        s.events.push(SelectableEvent::SelectionChange(SelectionChange {
            current,
            previous: Vec::new(),
        }));
        s
    }

    pub fn with_track_by(mut self, track_by: TrackBy<T>) -> Self {
        self.track_by = track_by;
        self
    }

    pub fn with_rows(mut self, rows: Vec<DataTableRow<T>>) -> Self {
        self.set_rows(rows);
        self
    }

    pub fn rows(&self) -> &[DataTableRow<T>] {
        &self.rows
    }

    pub fn options(&self) -> &SelectableOptions {
        &self.options
    }

    pub fn track_by(&self) -> &TrackBy<T> {
        &self.track_by
    }

    pub fn is_controlled(&self) -> bool {
        self.model.is_controlled()
    }

    /// Page position of the row range selection starts from.
    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    pub fn selected_keys(&self) -> &IndexSet<T::Key> {
        self.model.get()
    }

    /// Snapshot of the selection in selection order.
    pub fn selected_items(&self) -> Vec<T::Key> {
        self.model.get().iter().cloned().collect()
    }

    /// Takes the queued events.
    pub fn drain_events(&mut self) -> Vec<SelectableEvent<T::Key>> {
        std::mem::take(&mut self.events)
    }

    /// Replaces the rows of the current page.
    ///
    /// The anchor is dropped when the page shows different rows than before (a different source
    /// position or a different key at any position), so a range never starts from a row that is
    /// no longer visible.
    pub fn set_rows(&mut self, rows: Vec<DataTableRow<T>>) {
        let changed = self.rows.len() != rows.len()
            || self.rows.iter().zip(&rows).any(|(a, b)| {
                a.initial_index != b.initial_index
                    || resolve_key(&a.source, &self.track_by)
                        != resolve_key(&b.source, &self.track_by)
            });
        self.rows = rows;
        if changed && self.anchor.take().is_some() {
            log::debug!("page rows changed, range anchor reset");
        }
    }

    pub fn set_options(&mut self, options: SelectableOptions) {
        self.set_selectable(options.selectable);
        self.set_select_mode(options.select_mode);
    }

    pub fn set_selectable(&mut self, selectable: bool) {
        self.options.selectable = selectable;
    }

    /// Switching from multiple to single clears the selection and the anchor.
    pub fn set_select_mode(&mut self, mode: SelectMode) {
        let prev = self.options.select_mode;
        self.options.select_mode = mode;
        if prev == SelectMode::Multiple && mode == SelectMode::Single {
            log::debug!("select mode downgraded to single, clearing selection");
            self.commit(IndexSet::new());
            self.anchor = None;
        }
    }

    /// Changes how rows are keyed. Every row gets a new identity, so the anchor is dropped.
    pub fn set_track_by(&mut self, track_by: TrackBy<T>) {
        self.track_by = track_by;
        if self.anchor.take().is_some() {
            log::debug!("track-by changed, range anchor reset");
        }
    }

    /// Syncs the host-owned selection. `None` makes the engine uncontrolled.
    pub fn set_model_value(&mut self, value: Option<Vec<T::Key>>) {
        let previous = self.selected_items();
        self.model
            .set_external(value.map(|v| v.into_iter().collect()));
        let current = self.selected_items();
        if current != previous {
            self.events
                .push(SelectableEvent::SelectionChange(SelectionChange { current, previous }));
        }
    }

    /// Key of the row at page position `index`.
    pub fn key_at(&self, index: usize) -> Option<T::Key> {
        self.rows
            .get(index)
            .map(|row| resolve_key(&row.source, &self.track_by))
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.key_at(index)
            .is_some_and(|key| self.model.get().contains(&key))
    }

    pub fn is_key_selected(&self, key: &T::Key) -> bool {
        self.model.get().contains(key)
    }

    /// No row of the current page is selected.
    pub fn none_selected(&self) -> bool {
        let selected = self.model.get();
        !self
            .rows
            .iter()
            .any(|row| selected.contains(&resolve_key(&row.source, &self.track_by)))
    }

    /// The current page has rows and all of them are selected.
    pub fn all_selected(&self) -> bool {
        if self.rows.is_empty() {
            return false;
        }
        let selected = self.model.get();
        self.rows
            .iter()
            .all(|row| selected.contains(&resolve_key(&row.source, &self.track_by)))
    }

    pub fn some_selected(&self) -> bool {
        !self.none_selected() && !self.all_selected()
    }

    /// Toggles the row at `index`.
    ///
    /// In single mode selecting a row replaces the selection. In multiple mode the row's key is
    /// appended. Returns `false` without touching the selection when selection is disabled or
    /// `index` is not on the page.
    pub fn toggle(&mut self, index: usize) -> bool {
        if !self.options.selectable {
            return false;
        }
        self.toggle_row(index)
    }

    /// Ctrl+click. Behaves exactly like [`Self::toggle`].
    pub fn ctrl_toggle(&mut self, index: usize) -> bool {
        if !self.options.selectable {
            return false;
        }
        self.toggle_row(index)
    }

    /// Shift+click: selects or deselects the rows between the anchor and `index`.
    ///
    /// Without an anchor, or in single mode, this is a plain toggle. When the anchored row itself
    /// is not selected the range excludes it, so dragging a deselection keeps the anchor
    /// deselected.
    pub fn range_select(&mut self, index: usize) -> bool {
        if !self.options.selectable {
            return false;
        }
        let anchor = match (self.options.select_mode, self.anchor) {
            (SelectMode::Multiple, Some(anchor)) => anchor,
            _ => return self.toggle_row(index),
        };
        if index >= self.rows.len() {
            return false;
        }

        let range = if self.is_selected(anchor) {
            anchor.min(index)..=anchor.max(index)
        } else {
            (anchor + 1).min(index)..=anchor.saturating_sub(1).max(index)
        };
        self.merge_rows(range);
        self.anchor = None;
        true
    }

    /// Merges the rows at page positions `range` into the selection.
    ///
    /// If every row in the range is already selected they are removed instead.
    pub fn merge_selection(&mut self, range: RangeInclusive<usize>) -> bool {
        if !self.options.selectable {
            return false;
        }
        self.merge_rows(range);
        true
    }

    /// Adds every row of the current page to the selection.
    pub fn select_all(&mut self) -> bool {
        if !self.options.selectable {
            return false;
        }
        self.select_page();
        true
    }

    /// Removes every row of the current page from the selection.
    pub fn unselect_all(&mut self) -> bool {
        if !self.options.selectable {
            return false;
        }
        self.unselect_page();
        true
    }

    /// Header checkbox: unselects the page if it is fully selected, selects it otherwise.
    pub fn toggle_bulk(&mut self) -> bool {
        if !self.options.selectable {
            return false;
        }
        if self.all_selected() {
            self.unselect_page();
        } else {
            self.select_page();
        }
        self.anchor = None;
        true
    }

    pub fn apply(&mut self, command: SelectionCommand) -> bool {
        match command {
            SelectionCommand::Toggle(index) => self.toggle(index),
            SelectionCommand::CtrlToggle(index) => self.ctrl_toggle(index),
            SelectionCommand::RangeSelect(index) => self.range_select(index),
            SelectionCommand::ToggleBulk => self.toggle_bulk(),
        }
    }

    // Appending a key that is already selected is the caller's mistake; the set absorbs it.
    fn toggle_row(&mut self, index: usize) -> bool {
        let Some(row) = self.rows.get(index) else {
            return false;
        };
        let key = resolve_key(&row.source, &self.track_by);
        let initial_index = row.initial_index;
        let mode = self.options.select_mode;

        let mut next = self.model.get().clone();
        if next.shift_remove(&key) {
            self.commit(next);
            self.anchor = match mode {
                SelectMode::Single => None,
                SelectMode::Multiple => self.position_of(initial_index),
            };
        } else {
            match mode {
                SelectMode::Single => next = std::iter::once(key).collect(),
                SelectMode::Multiple => {
                    next.insert(key);
                }
            }
            self.commit(next);
            self.anchor = self.position_of(initial_index);
        }
        true
    }

    fn merge_rows(&mut self, range: RangeInclusive<usize>) {
        let (start, end) = range.into_inner();
        let end = end.min(self.rows.len().saturating_sub(1));
        let keys: IndexSet<T::Key> = if self.rows.is_empty() || start > end {
            IndexSet::new()
        } else {
            self.rows[start..=end]
                .iter()
                .map(|row| resolve_key(&row.source, &self.track_by))
                .collect()
        };

        let current = self.model.get();
        let next = if current.is_empty() {
            keys
        } else if keys.iter().all(|key| current.contains(key)) {
            current
                .iter()
                .filter(|key| !keys.contains(*key))
                .cloned()
                .collect()
        } else {
            let mut next = current.clone();
            next.extend(keys);
            next
        };
        self.commit(next);
    }

    fn select_page(&mut self) {
        let mut next = self.model.get().clone();
        next.extend(self.page_keys());
        self.commit(next);
    }

    fn unselect_page(&mut self) {
        let page: IndexSet<T::Key> = self.page_keys().collect();
        let next = self
            .model
            .get()
            .iter()
            .filter(|key| !page.contains(*key))
            .cloned()
            .collect();
        self.commit(next);
    }

    fn page_keys(&self) -> impl Iterator<Item = T::Key> + '_ {
        self.rows
            .iter()
            .map(|row| resolve_key(&row.source, &self.track_by))
    }

    fn position_of(&self, initial_index: usize) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.initial_index == initial_index)
    }

    fn commit(&mut self, next: IndexSet<T::Key>) {
        let previous = self.selected_items();
        let current: Vec<T::Key> = next.iter().cloned().collect();
        log::trace!(
            "selection write: {} -> {} keys (controlled: {})",
            previous.len(),
            current.len(),
            self.model.is_controlled()
        );
        self.events
            .push(SelectableEvent::UpdateModelValue(current.clone()));
        if self.model.set(next) {
            self.events
                .push(SelectableEvent::SelectionChange(SelectionChange { current, previous }));
        }
    }
}
