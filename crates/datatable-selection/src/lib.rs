//! Row selection for data-table components.
//!
//! This facade re-exports `datatable-selection-core` and forwards its features:
//! - `crossterm`: conversion of crossterm events into selection input.
//! - `serde`: (de)serialization of [`mode::SelectableOptions`] and [`mode::SelectMode`].
pub use datatable_selection_core::error;
pub use datatable_selection_core::input;
pub use datatable_selection_core::interaction;
pub use datatable_selection_core::key;
pub use datatable_selection_core::keymap;
pub use datatable_selection_core::mode;
pub use datatable_selection_core::model;
pub use datatable_selection_core::row;
pub use datatable_selection_core::selection;

#[cfg(feature = "crossterm")]
pub use datatable_selection_core::crossterm_input;

pub use datatable_selection_core::key::ItemSource;
pub use datatable_selection_core::key::TrackBy;
pub use datatable_selection_core::mode::SelectMode;
pub use datatable_selection_core::mode::SelectableOptions;
pub use datatable_selection_core::row::DataTableRow;
pub use datatable_selection_core::selection::SelectableEvent;
pub use datatable_selection_core::selection::SelectableRows;
