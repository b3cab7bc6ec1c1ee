//! Backend-agnostic input events understood by the selection layer.
//!
//! Hit testing is the host's job: a mouse press becomes a [`RowClick`] once the host knows which
//! page row (or the header checkbox) is under the pointer.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyModifiers {
    pub shift: bool,
    /// Ctrl, or the platform command key.
    pub ctrl: bool,
    pub alt: bool,
}

impl KeyModifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::default()
        }
    }
}

/// Selection bindings only use character keys; cursor movement belongs to the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyCode {
    Char(char),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyEvent {
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::none(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: KeyModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// A primary-button press on a body row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowClick {
    /// Position of the row on the current page.
    pub row: usize,
    pub modifiers: KeyModifiers,
}

/// What a pointer press landed on, as reported by the host's hit test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    Row(usize),
    HeaderCheckbox,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    RowClick(RowClick),
    /// The select-all checkbox in the header was clicked.
    HeaderToggle,
}

impl InputEvent {
    pub fn from_hit(target: HitTarget, modifiers: KeyModifiers) -> Self {
        match target {
            HitTarget::Row(row) => InputEvent::RowClick(RowClick { row, modifiers }),
            HitTarget::HeaderCheckbox => InputEvent::HeaderToggle,
        }
    }
}
