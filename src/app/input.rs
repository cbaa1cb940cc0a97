//! Event handling utilities

use crossterm::event::{KeyCode, KeyModifiers};

use super::state::Screen;

/// Actions available on the signed-in screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation within a screen
    Up,
    Down,
    Select,
    Back,

    // Quiz display tabs
    TabLeft,
    TabRight,

    // Navbar routing
    Goto(Screen),
    NextScreen,
    PrevScreen,

    // Data
    Refresh,

    // Session
    Logout,
    Quit,
}

/// Key mapping for the signed-in screens (not the login form)
pub fn nav_key_to_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('j') | KeyCode::Down => Some(Action::Down),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::Up),
        KeyCode::Char('h') | KeyCode::Left => Some(Action::TabLeft),
        KeyCode::Char('l') | KeyCode::Right => Some(Action::TabRight),
        KeyCode::Enter => Some(Action::Select),
        KeyCode::Esc => Some(Action::Back),
        KeyCode::Tab => Some(Action::NextScreen),
        KeyCode::BackTab => Some(Action::PrevScreen),
        KeyCode::Char('1') => Some(Action::Goto(Screen::Dashboard)),
        KeyCode::Char('2') => Some(Action::Goto(Screen::Recommendation)),
        KeyCode::Char('3') => Some(Action::Goto(Screen::Quiz)),
        KeyCode::Char('4') => Some(Action::Goto(Screen::Schedule)),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Char('x') => Some(Action::Logout),
        KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

/// Key mapping with modifiers (Ctrl+C always quits)
pub fn key_with_modifier_to_action(key: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
    if modifiers.contains(KeyModifiers::CONTROL) {
        match key {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        }
    } else {
        nav_key_to_action(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vim_j_maps_to_down() {
        assert_eq!(nav_key_to_action(KeyCode::Char('j')), Some(Action::Down));
    }

    #[test]
    fn vim_k_maps_to_up() {
        assert_eq!(nav_key_to_action(KeyCode::Char('k')), Some(Action::Up));
    }

    #[test]
    fn number_keys_route_to_screens() {
        assert_eq!(nav_key_to_action(KeyCode::Char('1')), Some(Action::Goto(Screen::Dashboard)));
        assert_eq!(nav_key_to_action(KeyCode::Char('3')), Some(Action::Goto(Screen::Quiz)));
        assert_eq!(nav_key_to_action(KeyCode::Char('4')), Some(Action::Goto(Screen::Schedule)));
    }

    #[test]
    fn tab_cycles_screens() {
        assert_eq!(nav_key_to_action(KeyCode::Tab), Some(Action::NextScreen));
        assert_eq!(nav_key_to_action(KeyCode::BackTab), Some(Action::PrevScreen));
    }

    #[test]
    fn unknown_key_returns_none() {
        assert_eq!(nav_key_to_action(KeyCode::Char('z')), None);
    }

    #[test]
    fn ctrl_c_quits() {
        assert_eq!(
            key_with_modifier_to_action(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Action::Quit)
        );
    }

    #[test]
    fn no_modifier_uses_nav_keys() {
        assert_eq!(
            key_with_modifier_to_action(KeyCode::Char('j'), KeyModifiers::NONE),
            Some(Action::Down)
        );
    }
}
