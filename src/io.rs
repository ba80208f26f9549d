use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;

use crate::events::AppEvent;
use crate::events::EngineEvent;
use crate::events::Event;

/// Converts a crossterm event into a gridlife event
pub fn convert_event(event: CrossTermEvent) -> Option<Event> {
    match event {
        // some platforms report releases too, we only care about presses
        CrossTermEvent::Key(KeyEvent {
            kind: KeyEventKind::Release,
            ..
        }) => None,

        CrossTermEvent::Key(key_event) => match key_event {
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
            | KeyEvent {
                code: KeyCode::Char('q') | KeyCode::Esc,
                ..
            } => Some(Event::AppEvent(AppEvent::Exit)),
            KeyEvent {
                code: KeyCode::Char(' '),
                ..
            } => Some(Event::EngineEvent(EngineEvent::TogglePause)),
            KeyEvent {
                code: KeyCode::Char('n'),
                ..
            } => Some(Event::EngineEvent(EngineEvent::Step)),
            KeyEvent {
                code: KeyCode::Char('c'),
                ..
            } => Some(Event::EngineEvent(EngineEvent::Clear)),
            _ => None,
        },

        CrossTermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => Some(Event::EngineEvent(EngineEvent::ToggleCell { col: column, row })),

        CrossTermEvent::Resize(cols, rows) => Some(Event::AppEvent(AppEvent::Resize { cols, rows })),

        _ => None,
    }
}

#[cfg(test)]
mod test {
    use crossterm::event::Event as CrossTermEvent;
    use crossterm::event::KeyCode;
    use crossterm::event::KeyEvent;
    use crossterm::event::KeyEventKind;
    use crossterm::event::KeyEventState;
    use crossterm::event::KeyModifiers;
    use crossterm::event::MouseButton;
    use crossterm::event::MouseEvent;
    use crossterm::event::MouseEventKind;

    use super::convert_event;
    use crate::events::AppEvent;
    use crate::events::EngineEvent;
    use crate::events::Event;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> CrossTermEvent {
        CrossTermEvent::Key(KeyEvent::new(code, modifiers))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> CrossTermEvent {
        CrossTermEvent::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn exit_keys() {
        let exit = Some(Event::AppEvent(AppEvent::Exit));

        assert_eq!(convert_event(key(KeyCode::Char('q'), KeyModifiers::NONE)), exit);
        assert_eq!(convert_event(key(KeyCode::Esc, KeyModifiers::NONE)), exit);
        assert_eq!(convert_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)), exit);
    }

    #[test]
    fn engine_keys() {
        assert_eq!(
            convert_event(key(KeyCode::Char(' '), KeyModifiers::NONE)),
            Some(Event::EngineEvent(EngineEvent::TogglePause))
        );
        assert_eq!(
            convert_event(key(KeyCode::Char('n'), KeyModifiers::NONE)),
            Some(Event::EngineEvent(EngineEvent::Step))
        );
        assert_eq!(
            convert_event(key(KeyCode::Char('c'), KeyModifiers::NONE)),
            Some(Event::EngineEvent(EngineEvent::Clear))
        );
        assert_eq!(convert_event(key(KeyCode::Char('x'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn key_release_is_ignored() {
        let release = CrossTermEvent::Key(KeyEvent::new_with_kind_and_state(
            KeyCode::Char(' '),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        ));

        assert_eq!(convert_event(release), None);
    }

    #[test]
    fn left_click_toggles_cell() {
        assert_eq!(
            convert_event(mouse(MouseEventKind::Down(MouseButton::Left), 4, 7)),
            Some(Event::EngineEvent(EngineEvent::ToggleCell { col: 4, row: 7 }))
        );
        assert_eq!(
            convert_event(mouse(MouseEventKind::Down(MouseButton::Right), 4, 7)),
            None
        );
        assert_eq!(convert_event(mouse(MouseEventKind::Moved, 4, 7)), None);
    }

    #[test]
    fn resize() {
        assert_eq!(
            convert_event(CrossTermEvent::Resize(80, 24)),
            Some(Event::AppEvent(AppEvent::Resize { cols: 80, rows: 24 }))
        );
    }
}
