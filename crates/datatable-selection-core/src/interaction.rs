//! Maps clicks and key presses onto [`SelectableRows`] operations.
//!
//! Clicks follow the usual desktop conventions: a plain click toggles the row, ctrl+click toggles
//! it independently of the others, and shift+click selects the range from the anchor row.

use crate::input::InputEvent;
use crate::input::KeyEvent;
use crate::input::RowClick;
use crate::key::ItemSource;
use crate::keymap;
use crate::keymap::Binding;
use crate::selection::SelectableRows;
use crate::selection::SelectionCommand;

/// Key bindings acting on the row under the cursor, plus the bulk toggle.
#[derive(Clone, Debug)]
pub struct SelectionBindings {
    pub toggle: Vec<KeyEvent>,
    pub ctrl_toggle: Vec<KeyEvent>,
    pub range_select: Vec<KeyEvent>,
    pub toggle_bulk: Vec<KeyEvent>,
}

impl Default for SelectionBindings {
    fn default() -> Self {
        Self {
            toggle: vec![keymap::key_char(' ')],
            ctrl_toggle: vec![keymap::key_ctrl(' ')],
            range_select: vec![keymap::key_shift(' ')],
            toggle_bulk: vec![keymap::key_ctrl('a')],
        }
    }
}

impl SelectionBindings {
    /// Resolves `key` against the bindings. Row commands need a `cursor` row.
    pub fn command_for_key(
        &self,
        key: &KeyEvent,
        cursor: Option<usize>,
    ) -> Option<SelectionCommand> {
        if self
            .toggle_bulk
            .iter()
            .any(|p| keymap::key_event_matches(p, key))
        {
            return Some(SelectionCommand::ToggleBulk);
        }
        let row = cursor?;
        if self.toggle.iter().any(|p| keymap::key_event_matches(p, key)) {
            return Some(SelectionCommand::Toggle(row));
        }
        if self
            .ctrl_toggle
            .iter()
            .any(|p| keymap::key_event_matches(p, key))
        {
            return Some(SelectionCommand::CtrlToggle(row));
        }
        if self
            .range_select
            .iter()
            .any(|p| keymap::key_event_matches(p, key))
        {
            return Some(SelectionCommand::RangeSelect(row));
        }
        None
    }

    pub fn command_for(
        &self,
        event: &InputEvent,
        cursor: Option<usize>,
    ) -> Option<SelectionCommand> {
        match event {
            InputEvent::Key(key) => self.command_for_key(key, cursor),
            InputEvent::RowClick(click) => Some(command_for_click(click)),
            InputEvent::HeaderToggle => Some(SelectionCommand::ToggleBulk),
        }
    }

    /// Applies `event` to `rows`. Returns `true` if an operation ran.
    pub fn handle<T: ItemSource>(
        &self,
        rows: &mut SelectableRows<T>,
        event: &InputEvent,
        cursor: Option<usize>,
    ) -> bool {
        match self.command_for(event, cursor) {
            Some(command) => rows.apply(command),
            None => false,
        }
    }

    /// Entries for a help bar.
    pub fn help(&self) -> Vec<Binding> {
        vec![
            Binding::new("space", "toggle row", self.toggle.clone()),
            Binding::new("ctrl+space", "toggle row", self.ctrl_toggle.clone()),
            Binding::new("shift+space", "select range", self.range_select.clone()),
            Binding::new("ctrl+a", "select page", self.toggle_bulk.clone()),
        ]
    }
}

/// Shift wins over ctrl when both are held.
pub fn command_for_click(click: &RowClick) -> SelectionCommand {
    if click.modifiers.shift {
        SelectionCommand::RangeSelect(click.row)
    } else if click.modifiers.ctrl {
        SelectionCommand::CtrlToggle(click.row)
    } else {
        SelectionCommand::Toggle(click.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::HitTarget;
    use crate::input::KeyModifiers;
    use crate::mode::SelectableOptions;
    use crate::row::DataTableRow;

    fn click(row: usize, modifiers: KeyModifiers) -> InputEvent {
        InputEvent::from_hit(HitTarget::Row(row), modifiers)
    }

    #[test]
    fn click_modifiers_pick_command() {
        assert_eq!(
            command_for_click(&RowClick {
                row: 2,
                modifiers: KeyModifiers::none()
            }),
            SelectionCommand::Toggle(2)
        );
        assert_eq!(
            command_for_click(&RowClick {
                row: 2,
                modifiers: KeyModifiers::ctrl()
            }),
            SelectionCommand::CtrlToggle(2)
        );
        assert_eq!(
            command_for_click(&RowClick {
                row: 2,
                modifiers: KeyModifiers {
                    shift: true,
                    ctrl: true,
                    alt: false,
                }
            }),
            SelectionCommand::RangeSelect(2)
        );
    }

    #[test]
    fn row_keys_need_cursor() {
        let b = SelectionBindings::default();
        assert_eq!(b.command_for_key(&keymap::key_char(' '), None), None);
        assert_eq!(
            b.command_for_key(&keymap::key_shift(' '), Some(4)),
            Some(SelectionCommand::RangeSelect(4))
        );
        assert_eq!(
            b.command_for_key(&keymap::key_ctrl('a'), None),
            Some(SelectionCommand::ToggleBulk)
        );
        assert_eq!(b.command_for_key(&keymap::key_char('x'), Some(0)), None);
    }

    #[test]
    fn shift_click_selects_range() {
        let b = SelectionBindings::default();
        let mut rows = SelectableRows::new(SelectableOptions::multiple())
            .with_rows(DataTableRow::from_items([10u32, 20, 30, 40]));

        assert!(b.handle(&mut rows, &click(0, KeyModifiers::none()), None));
        assert!(b.handle(&mut rows, &click(2, KeyModifiers::shift()), None));
        assert_eq!(rows.selected_items(), vec![10, 20, 30]);

        assert!(b.handle(&mut rows, &InputEvent::HeaderToggle, None));
        assert!(rows.all_selected());
        assert!(!b.handle(&mut rows, &InputEvent::Key(keymap::key_char('q')), Some(1)));
    }

    #[test]
    fn help_lists_every_binding() {
        let help = SelectionBindings::default().help();
        assert_eq!(help.len(), 4);
        assert!(help[3].matches(&keymap::key_ctrl('a')));
    }
}
