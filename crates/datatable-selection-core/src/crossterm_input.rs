use crate::input::HitTarget;
use crate::input::InputEvent;
use crate::input::KeyCode;
use crate::input::KeyEvent;
use crate::input::KeyModifiers;

/// Converts a crossterm event into an [`InputEvent`].
///
/// Only key presses and left-button presses are relevant for selection. `hit_test` maps a
/// terminal cell (column, row) to what the table draws there.
pub fn input_event_from_crossterm(
    ev: crossterm::event::Event,
    hit_test: impl FnOnce(u16, u16) -> Option<HitTarget>,
) -> Option<InputEvent> {
    match ev {
        crossterm::event::Event::Key(key) => {
            if key.kind != crossterm::event::KeyEventKind::Press {
                return None;
            }
            Some(InputEvent::Key(key_event_from_crossterm(key)?))
        }
        crossterm::event::Event::Mouse(m) => {
            if m.kind != crossterm::event::MouseEventKind::Down(crossterm::event::MouseButton::Left)
            {
                return None;
            }
            let target = hit_test(m.column, m.row)?;
            Some(InputEvent::from_hit(target, modifiers_from_crossterm(m.modifiers)))
        }
        _ => None,
    }
}

pub fn key_event_from_crossterm(key: crossterm::event::KeyEvent) -> Option<KeyEvent> {
    let code = match key.code {
        crossterm::event::KeyCode::Char(c) => KeyCode::Char(c),
        _ => return None,
    };

    Some(KeyEvent {
        code,
        modifiers: modifiers_from_crossterm(key.modifiers),
    })
}

/// Super and meta count as ctrl.
pub fn modifiers_from_crossterm(m: crossterm::event::KeyModifiers) -> KeyModifiers {
    use crossterm::event::KeyModifiers as M;
    KeyModifiers {
        shift: m.contains(M::SHIFT),
        ctrl: m.intersects(M::CONTROL | M::SUPER | M::META),
        alt: m.contains(M::ALT),
    }
}
