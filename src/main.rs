//! Pawlist - Terminal Pet Adoption Browser
//!
//! Lists the pets available for adoption and shows the details of the
//! selected one.

use std::io;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::Backend, Terminal};

use pawlist::application::App;
use pawlist::infrastructure::{init_tracing, Config};
use pawlist::presentation::{render_ui, setup_terminal, InputHandler, Strings};

/// Entry point for the pet browser.
///
/// Loads the optional config file, sets up logging and the terminal, and
/// runs the event loop until the user quits.
///
/// # Errors
///
/// Returns an error if terminal setup fails or if there are issues
/// with the terminal interface during runtime.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Warning: {err}. Using default settings.");
            Config::default()
        }
    };
    init_tracing(&config.logging.level);
    tracing::info!(path = %Config::config_path().display(), "starting pawlist");

    let strings = Strings::from_config(&config);
    let mut app = App::new(config.ui.wrap_list);

    let (mut terminal, guard) = setup_terminal()?;
    let res = run_app(&mut terminal, &mut app, &strings);
    drop(guard);

    if let Err(err) = res {
        tracing::error!(%err, "event loop failed");
        println!("{err:?}");
    }

    Ok(())
}

/// Main application event loop.
///
/// Redraws after every key press and stops once the app asks to quit.
///
/// # Errors
///
/// Returns an IO error if terminal operations fail.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, strings: &Strings) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|f| render_ui(f, app, strings))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                InputHandler::handle_key_event(app, key.code, key.modifiers);
            }
        }
    }
    Ok(())
}
