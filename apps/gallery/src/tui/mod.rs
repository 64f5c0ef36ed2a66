//! Terminal front end: raw mode, mouse capture and the UI loop.

pub mod app;
pub mod input;
pub mod ui;

pub use app::{App, Focus, SearchCompletion};

use crate::error::GalleryError;

use gallery_core::{SessionController, UnsplashClient};

use std::io::stdout;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use log::{info, warn};

/// Take over the terminal, run the gallery, and always hand the terminal back.
pub async fn run(session: SessionController, client: UnsplashClient) -> Result<(), GalleryError> {
    let mut terminal = ratatui::try_init()?;
    if let Err(e) = execute!(stdout(), EnableMouseCapture) {
        warn!("Mouse capture unavailable: {e}");
    }
    info!("Terminal initialized");

    let (mut app, completions) = App::new(session, client);
    let result = app.run(&mut terminal, completions).await;

    if let Err(e) = execute!(stdout(), DisableMouseCapture) {
        warn!("Failed to disable mouse capture: {e}");
    }
    ratatui::try_restore()?;
    info!("Terminal restored");

    result
}
