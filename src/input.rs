use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction::{self, *};

/// A request from the player, applied to the game between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Turn(Direction),
    TogglePause,
    Restart,
    Quit,
}

impl Intent {
    pub fn from_key_event(ev: &KeyEvent) -> Option<Intent> {
        if is_ctrl_c(ev) {
            return Some(Intent::Quit);
        }

        match ev.code {
            KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Some(Intent::Turn(Up)),
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Some(Intent::Turn(Left)),
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Some(Intent::Turn(Down)),
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Some(Intent::Turn(Right)),
            KeyCode::Char('p') | KeyCode::Char('P') => Some(Intent::TogglePause),
            KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R') => Some(Intent::Restart),
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Intent::Quit),
            _ => None,
        }
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent { code, modifiers: KeyModifiers::NONE }
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(Intent::from_key_event(&key(KeyCode::Up)), Some(Intent::Turn(Up)));
        assert_eq!(Intent::from_key_event(&key(KeyCode::Down)), Some(Intent::Turn(Down)));
        assert_eq!(Intent::from_key_event(&key(KeyCode::Left)), Some(Intent::Turn(Left)));
        assert_eq!(Intent::from_key_event(&key(KeyCode::Right)), Some(Intent::Turn(Right)));
    }

    #[test]
    fn test_wasd_keys() {
        assert_eq!(Intent::from_key_event(&key(KeyCode::Char('w'))), Some(Intent::Turn(Up)));
        assert_eq!(Intent::from_key_event(&key(KeyCode::Char('a'))), Some(Intent::Turn(Left)));
        assert_eq!(Intent::from_key_event(&key(KeyCode::Char('S'))), Some(Intent::Turn(Down)));
        assert_eq!(Intent::from_key_event(&key(KeyCode::Char('D'))), Some(Intent::Turn(Right)));
    }

    #[test]
    fn test_pause_and_restart() {
        assert_eq!(Intent::from_key_event(&key(KeyCode::Char('p'))), Some(Intent::TogglePause));
        assert_eq!(Intent::from_key_event(&key(KeyCode::Char('P'))), Some(Intent::TogglePause));
        assert_eq!(Intent::from_key_event(&key(KeyCode::Enter)), Some(Intent::Restart));
        assert_eq!(Intent::from_key_event(&key(KeyCode::Char('r'))), Some(Intent::Restart));
    }

    #[test]
    fn test_quit_keys() {
        let ctrl_c = KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL };
        assert_eq!(Intent::from_key_event(&ctrl_c), Some(Intent::Quit));
        assert_eq!(Intent::from_key_event(&key(KeyCode::Esc)), Some(Intent::Quit));
        assert_eq!(Intent::from_key_event(&key(KeyCode::Char('q'))), Some(Intent::Quit));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(Intent::from_key_event(&key(KeyCode::Char('c'))), None);
        assert_eq!(Intent::from_key_event(&key(KeyCode::Tab)), None);
    }
}
