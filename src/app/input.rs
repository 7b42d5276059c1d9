use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::app::{Message, Model};
use crate::app::model::Mode;

/// Translate a terminal event into a message for the active mode.
pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
    match event {
        Event::Key(key) => handle_key(*key, model),
        Event::Resize(w, h) => Some(Message::Resize(*w, *h)),
        _ => None,
    }
}

fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
    match model.mode {
        Mode::ChordEntry => handle_chord_key(key, model),
        Mode::Navigation => handle_navigation_key(key),
        Mode::Insertion => handle_insertion_key(key),
    }
}

fn handle_chord_key(key: KeyEvent, model: &Model) -> Option<Message> {
    match key.code {
        KeyCode::Enter => Some(Message::CommitChord(model.chord.clone())),
        KeyCode::Esc => Some(Message::Escape),
        KeyCode::Backspace => Some(Message::ChordBackspace),
        KeyCode::Char(c) if is_plain(key) => Some(Message::ChordChar(c)),
        _ => None,
    }
}

fn handle_navigation_key(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Up | KeyCode::Char('w') => Some(Message::MoveUp),
        KeyCode::Down | KeyCode::Char('s') => Some(Message::MoveDown),
        KeyCode::Left => Some(Message::MoveLeft),
        KeyCode::Right => Some(Message::MoveRight),
        KeyCode::Char('a') => Some(Message::LineStart),
        KeyCode::Char('d') => Some(Message::LineEnd),
        KeyCode::Char('i') => Some(Message::EnterInsert),
        KeyCode::Char(c @ (':' | ';')) => Some(Message::StartChord(c)),
        KeyCode::Esc => Some(Message::Escape),
        _ => None,
    }
}

fn handle_insertion_key(key: KeyEvent) -> Option<Message> {
    match key.code {
        KeyCode::Up => Some(Message::MoveUp),
        KeyCode::Down => Some(Message::MoveDown),
        KeyCode::Left => Some(Message::MoveLeft),
        KeyCode::Right => Some(Message::MoveRight),
        KeyCode::Enter => Some(Message::SplitLine),
        KeyCode::Tab => Some(Message::InsertTab),
        KeyCode::Backspace => Some(Message::DeleteBack),
        KeyCode::Esc => Some(Message::Escape),
        KeyCode::Char(c) if is_plain(key) => Some(Message::InsertChar(c)),
        _ => None,
    }
}

// Reject chars arriving with control or alt held.
fn is_plain(key: KeyEvent) -> bool {
    !key.modifiers.contains(KeyModifiers::CONTROL) && !key.modifiers.contains(KeyModifiers::ALT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn model_in(mode: Mode) -> Model {
        let mut m = Model::new(PathBuf::from("t.txt"), &["abc"], 80, 24);
        m.mode = mode;
        if mode == Mode::ChordEntry {
            m.chord.push(':');
        }
        m
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::from(code))
    }

    #[test]
    fn test_navigation_letter_aliases() {
        let m = model_in(Mode::Navigation);
        assert_eq!(
            handle_event(&key(KeyCode::Char('w')), &m),
            Some(Message::MoveUp)
        );
        assert_eq!(
            handle_event(&key(KeyCode::Char('s')), &m),
            Some(Message::MoveDown)
        );
        assert_eq!(
            handle_event(&key(KeyCode::Char('a')), &m),
            Some(Message::LineStart)
        );
        assert_eq!(
            handle_event(&key(KeyCode::Char('d')), &m),
            Some(Message::LineEnd)
        );
    }

    #[test]
    fn test_navigation_printable_is_not_an_edit() {
        let m = model_in(Mode::Navigation);
        assert_eq!(handle_event(&key(KeyCode::Char('x')), &m), None);
        assert_eq!(handle_event(&key(KeyCode::Enter), &m), None);
        assert_eq!(handle_event(&key(KeyCode::Backspace), &m), None);
    }

    #[test]
    fn test_both_chord_triggers() {
        let m = model_in(Mode::Navigation);
        assert_eq!(
            handle_event(&key(KeyCode::Char(':')), &m),
            Some(Message::StartChord(':'))
        );
        assert_eq!(
            handle_event(&key(KeyCode::Char(';')), &m),
            Some(Message::StartChord(';'))
        );
    }

    #[test]
    fn test_insertion_chars_insert() {
        let m = model_in(Mode::Insertion);
        assert_eq!(
            handle_event(&key(KeyCode::Char('x')), &m),
            Some(Message::InsertChar('x'))
        );
        assert_eq!(
            handle_event(&key(KeyCode::Tab), &m),
            Some(Message::InsertTab)
        );
    }

    #[test]
    fn test_insertion_arrows_still_navigate() {
        let m = model_in(Mode::Insertion);
        assert_eq!(handle_event(&key(KeyCode::Up), &m), Some(Message::MoveUp));
        assert_eq!(
            handle_event(&key(KeyCode::Right), &m),
            Some(Message::MoveRight)
        );
    }

    #[test]
    fn test_ctrl_char_is_ignored_in_insertion() {
        let m = model_in(Mode::Insertion);
        let ev = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(handle_event(&ev, &m), None);
    }

    #[test]
    fn test_chord_enter_carries_chord_text() {
        let mut m = model_in(Mode::ChordEntry);
        m.chord.push('q');
        assert_eq!(
            handle_event(&key(KeyCode::Enter), &m),
            Some(Message::CommitChord(":q".to_string()))
        );
    }

    #[test]
    fn test_chord_chars_append() {
        let m = model_in(Mode::ChordEntry);
        assert_eq!(
            handle_event(&key(KeyCode::Char('q')), &m),
            Some(Message::ChordChar('q'))
        );
        assert_eq!(
            handle_event(&key(KeyCode::Backspace), &m),
            Some(Message::ChordBackspace)
        );
        assert_eq!(handle_event(&key(KeyCode::Esc), &m), Some(Message::Escape));
    }

    #[test]
    fn test_resize_passes_through_in_any_mode() {
        let m = model_in(Mode::ChordEntry);
        assert_eq!(
            handle_event(&Event::Resize(120, 40), &m),
            Some(Message::Resize(120, 40))
        );
    }
}
