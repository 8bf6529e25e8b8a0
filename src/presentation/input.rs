use crate::application::{App, Screen};
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) && key == KeyCode::Char('c') {
            app.should_quit = true;
            return;
        }

        if app.show_help {
            Self::handle_help_mode(app, key);
            return;
        }

        match key {
            KeyCode::Char('q') => {
                app.should_quit = true;
                return;
            }
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.toggle_help();
                return;
            }
            _ => {}
        }

        match app.screen {
            Screen::List => Self::handle_list_screen(app, key),
            Screen::Detail(_) => Self::handle_detail_screen(app, key),
        }
    }

    fn handle_list_screen(app: &mut App, key: KeyCode) {
        app.status_message = None;

        match key {
            KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => app.select_next(),
            KeyCode::Home | KeyCode::Char('g') => app.select_first(),
            KeyCode::End | KeyCode::Char('G') => app.select_last(),
            KeyCode::PageUp => app.page_up(),
            KeyCode::PageDown => app.page_down(),
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => app.open_selected(),
            _ => {}
        }
    }

    fn handle_detail_screen(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => app.finish(),
            KeyCode::Char('a') => app.adopt(),
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        if matches!(
            key,
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q')
        ) {
            app.show_help = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::find_pet;

    fn press(app: &mut App, key: KeyCode) {
        InputHandler::handle_key_event(app, key, KeyModifiers::NONE);
    }

    #[test]
    fn test_enter_opens_selected_pet() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert!(app.is_on_detail());
        assert_eq!(app.current_pet(), find_pet(3));
    }

    #[test]
    fn test_escape_goes_back_to_list() {
        let mut app = App::default();
        press(&mut app, KeyCode::End);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.screen, Screen::List);
        assert_eq!(app.selected, 9);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_escape_on_list_does_not_quit() {
        let mut app = App::default();
        press(&mut app, KeyCode::Esc);
        assert!(!app.should_quit);
        assert_eq!(app.screen, Screen::List);
    }

    #[test]
    fn test_adopt_key_only_on_detail() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('a'));
        assert!(app.status_message.is_none());

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('a'));
        assert!(app.status_message.is_some());
        assert!(app.is_on_detail());
    }

    #[test]
    fn test_back_from_empty_detail() {
        let mut app = App::default();
        app.open_detail_without_selection();
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.screen, Screen::List);
    }

    #[test]
    fn test_help_swallows_keys_until_closed() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);

        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, 0);

        press(&mut app, KeyCode::Char('q'));
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::default();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = App::default();
        InputHandler::handle_key_event(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }
}
