//! Application state management for the pet browser.
//!
//! This module holds the screen stack, the list cursor, and the state of
//! the detail screen.

use crate::application::navigation::{self, Destination, Intent};
use crate::domain::{list_pets, Pet};
use crate::infrastructure::transfer;

/// State of an open detail screen.
///
/// `pet` is `None` when the screen was opened without a selection or the
/// payload could not be read. Such a screen renders empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailState {
    pub pet: Option<Pet>,
}

impl DetailState {
    pub fn from_intent(intent: &Intent) -> Self {
        Self {
            pet: transfer::decode(intent.pet_message()),
        }
    }
}

/// The screen currently shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Scrollable list of every pet in the catalog
    List,
    /// A single pet
    Detail(DetailState),
}

/// Main application state.
///
/// # Examples
///
/// ```
/// use pawlist::application::{App, Screen};
///
/// let app = App::default();
/// assert_eq!(app.selected, 0);
/// assert_eq!(app.screen, Screen::List);
/// ```
#[derive(Debug)]
pub struct App {
    /// Screen currently shown
    pub screen: Screen,
    /// Screens below the current one, most recent last
    pub back_stack: Vec<Screen>,
    /// Index of the highlighted list row
    pub selected: usize,
    /// First list row visible in the viewport
    pub scroll: usize,
    /// Number of list rows that fit in the viewport
    pub viewport_rows: usize,
    /// Whether cursor movement wraps around the list ends
    pub wrap_list: bool,
    /// Whether the help popup is open
    pub show_help: bool,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Set once the root screen has been finished
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self {
            screen: Screen::List,
            back_stack: Vec::new(),
            selected: 0,
            scroll: 0,
            viewport_rows: 10,
            wrap_list: true,
            show_help: false,
            status_message: None,
            should_quit: false,
        }
    }
}

impl App {
    pub fn new(wrap_list: bool) -> Self {
        Self {
            wrap_list,
            ..Self::default()
        }
    }

    pub fn pets(&self) -> &'static [Pet] {
        list_pets()
    }

    /// The pet under the list cursor.
    pub fn selected_pet(&self) -> Option<&'static Pet> {
        self.pets().get(self.selected)
    }

    /// The pet shown on the detail screen, if any.
    pub fn current_pet(&self) -> Option<&Pet> {
        match &self.screen {
            Screen::Detail(detail) => detail.pet.as_ref(),
            Screen::List => None,
        }
    }

    pub fn is_on_detail(&self) -> bool {
        matches!(self.screen, Screen::Detail(_))
    }

    pub fn select_next(&mut self) {
        let len = self.pets().len();
        if len == 0 {
            return;
        }
        if self.selected + 1 < len {
            self.selected += 1;
        } else if self.wrap_list {
            self.selected = 0;
        }
        self.ensure_cursor_visible();
    }

    pub fn select_previous(&mut self) {
        let len = self.pets().len();
        if len == 0 {
            return;
        }
        if self.selected > 0 {
            self.selected -= 1;
        } else if self.wrap_list {
            self.selected = len - 1;
        }
        self.ensure_cursor_visible();
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
        self.ensure_cursor_visible();
    }

    pub fn select_last(&mut self) {
        self.selected = self.pets().len().saturating_sub(1);
        self.ensure_cursor_visible();
    }

    pub fn page_down(&mut self) {
        let last = self.pets().len().saturating_sub(1);
        self.selected = (self.selected + self.viewport_rows.max(1)).min(last);
        self.ensure_cursor_visible();
    }

    pub fn page_up(&mut self) {
        self.selected = self.selected.saturating_sub(self.viewport_rows.max(1));
        self.ensure_cursor_visible();
    }

    /// Adjusts `scroll` so the cursor row is inside the viewport.
    pub fn ensure_cursor_visible(&mut self) {
        let rows = self.viewport_rows.max(1);
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if self.selected >= self.scroll + rows {
            self.scroll = self.selected + 1 - rows;
        }
    }

    pub fn set_viewport_rows(&mut self, rows: usize) {
        self.viewport_rows = rows.max(1);
        self.ensure_cursor_visible();
    }

    /// Opens the detail screen for the highlighted row.
    pub fn open_selected(&mut self) {
        if let Some(pet) = self.selected_pet() {
            self.open_detail(pet);
        }
    }

    pub fn open_detail(&mut self, pet: &Pet) {
        self.start_activity(navigation::open_detail(pet));
    }

    /// Opens the detail screen with nothing selected.
    pub fn open_detail_without_selection(&mut self) {
        self.start_activity(Intent::new(Destination::PetDetails));
    }

    /// Pushes the current screen and shows the intent's destination.
    pub fn start_activity(&mut self, intent: Intent) {
        let next = match intent.destination {
            Destination::PetList => Screen::List,
            Destination::PetDetails => {
                let detail = DetailState::from_intent(&intent);
                if detail.pet.is_none() {
                    tracing::debug!("detail screen opened without a pet");
                }
                Screen::Detail(detail)
            }
        };

        let previous = std::mem::replace(&mut self.screen, next);
        self.back_stack.push(previous);
        self.status_message = None;
        self.show_help = false;
    }

    /// Closes the current screen. Finishing the root screen quits.
    pub fn finish(&mut self) {
        self.status_message = None;
        match self.back_stack.pop() {
            Some(previous) => {
                tracing::debug!(depth = self.back_stack.len(), "finishing screen");
                self.screen = previous;
            }
            None => self.should_quit = true,
        }
    }

    /// The adoption button. Adoption is not implemented; only the status
    /// line changes.
    pub fn adopt(&mut self) {
        let message = match self.current_pet() {
            Some(pet) => format!("Adoption requests for {} are not available yet", pet.name()),
            None => "Nothing to adopt".to_string(),
        };
        self.status_message = Some(message);
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{find_pet, ImageRef};
    use crate::infrastructure::TransferMessage;

    #[test]
    fn test_app_default() {
        let app = App::default();
        assert_eq!(app.screen, Screen::List);
        assert!(app.back_stack.is_empty());
        assert_eq!(app.selected, 0);
        assert_eq!(app.scroll, 0);
        assert!(app.wrap_list);
        assert!(!app.show_help);
        assert!(app.status_message.is_none());
        assert!(!app.should_quit);
        assert_eq!(app.selected_pet().map(Pet::id), Some(1));
    }

    #[test]
    fn test_cursor_wraps_both_ways() {
        let mut app = App::default();
        app.select_previous();
        assert_eq!(app.selected, 9);
        app.select_next();
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn test_cursor_clamps_without_wrap() {
        let mut app = App::new(false);
        app.select_previous();
        assert_eq!(app.selected, 0);
        app.select_last();
        app.select_next();
        assert_eq!(app.selected, 9);
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let mut app = App::default();
        app.set_viewport_rows(3);

        for _ in 0..4 {
            app.select_next();
        }
        assert_eq!(app.selected, 4);
        assert_eq!(app.scroll, 2);

        app.select_first();
        assert_eq!(app.scroll, 0);

        app.select_last();
        assert_eq!(app.scroll, 7);
    }

    #[test]
    fn test_paging() {
        let mut app = App::default();
        app.set_viewport_rows(4);
        app.page_down();
        assert_eq!(app.selected, 4);
        app.page_down();
        app.page_down();
        assert_eq!(app.selected, 9);
        app.page_up();
        assert_eq!(app.selected, 5);
    }

    #[test]
    fn test_open_selected_shows_copy_of_pet() {
        let mut app = App::default();
        app.select_next();
        app.select_next();
        app.open_selected();

        assert!(app.is_on_detail());
        assert_eq!(app.back_stack, vec![Screen::List]);
        assert_eq!(app.current_pet(), find_pet(3));
    }

    #[test]
    fn test_open_detail_with_uncatalogued_pet() {
        let pet = Pet::new(6, "Frenchton", 6, 10, "Nashik", ImageRef::new("frenchton")).unwrap();
        let mut app = App::default();
        app.open_detail(&pet);
        assert_eq!(app.current_pet(), Some(&pet));
    }

    #[test]
    fn test_detail_without_selection_is_empty() {
        let mut app = App::default();
        app.open_detail_without_selection();

        assert_eq!(app.screen, Screen::Detail(DetailState { pet: None }));
        assert!(app.current_pet().is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_detail_with_malformed_payload_is_empty() {
        let mut intent = Intent::new(Destination::PetDetails);
        intent
            .extras
            .put(navigation::PET_DETAILS, TransferMessage::from_bytes(vec![1, 2, 3]));

        let mut app = App::default();
        app.start_activity(intent);
        assert_eq!(app.screen, Screen::Detail(DetailState::default()));
    }

    #[test]
    fn test_finish_returns_to_list_with_cursor_kept() {
        let mut app = App::default();
        app.select_last();
        app.open_selected();
        app.finish();

        assert_eq!(app.screen, Screen::List);
        assert_eq!(app.selected, 9);
        assert!(app.back_stack.is_empty());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_finish_on_root_quits() {
        let mut app = App::default();
        app.finish();
        assert!(app.should_quit);
    }

    #[test]
    fn test_adopt_is_a_no_op() {
        let mut app = App::default();
        app.open_selected();
        let before = app.screen.clone();

        app.adopt();
        assert_eq!(app.screen, before);
        assert!(app.status_message.as_ref().unwrap().contains("American Bulldog"));

        app.finish();
        assert!(app.status_message.is_none());
    }
}
