//! `datatable-selection-core` implements row selection for data-table components.
//!
//! The crate is presentation-agnostic: it holds selection state and answers the questions a
//! table needs while drawing (is this row selected, is the header checkbox checked or
//! indeterminate), but it never draws anything itself.
//!
//! ## Design goals
//!
//! - Event-loop agnostic: the host forwards interactions and drains notifications.
//! - No async runtime: every operation completes synchronously.
//! - Controlled or uncontrolled: the selection can live in the table or in the host.
//!
//! ## Getting started
//!
//! Most users should depend on the facade crate `datatable-selection`.
//!
//! Useful entry points:
//! - [`selection::SelectableRows`]: the selection engine.
//! - [`key::TrackBy`]: how rows are identified inside the selection set.
//! - [`row::paginate`]: slicing a row sequence into the current page.
//! - [`interaction::SelectionBindings`]: clicks and keys to engine operations.
//!
//! ## Events
//!
//! Mutating operations queue [`selection::SelectableEvent`]s. Call
//! [`selection::SelectableRows::drain_events`] after handling input and forward
//! `UpdateModelValue` to wherever the host keeps its selection.
pub mod error;
pub mod key;
pub mod mode;
pub mod model;
pub mod row;

pub mod selection;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;

pub mod input;
pub mod interaction;
pub mod keymap;
