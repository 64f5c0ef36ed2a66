use crate::error::GalleryError;
use crate::tui::input::LineCursor;
use crate::tui::ui::{self, CardTarget, HitMap, UiState};

use gallery_core::error::SearchError;
use gallery_core::view;
use gallery_core::{
    OverlayClick, SearchOutcome, SearchTicket, SessionController, UnsplashClient,
};

use models::Photo;

use common::ErrorLocation;

use std::panic::Location;

use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use futures_util::StreamExt;
use log::{debug, info, warn};
use ratatui::prelude::*;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

/// Which panel receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Results,
    Favorites,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Search => Focus::Results,
            Focus::Results => Focus::Favorites,
            Focus::Favorites => Focus::Search,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Search => Focus::Favorites,
            Focus::Results => Focus::Search,
            Focus::Favorites => Focus::Results,
        }
    }
}

/// A finished search task, sent back to the UI loop.
#[derive(Debug)]
pub struct SearchCompletion {
    pub ticket: SearchTicket,
    pub result: Result<SearchOutcome, SearchError>,
}

pub struct App {
    session: SessionController,
    client: UnsplashClient,
    completions: UnboundedSender<SearchCompletion>,

    focus: Focus,
    cursor: LineCursor,
    result_index: usize,
    favorite_index: usize,
    hits: HitMap,

    should_quit: bool,
}

impl App {
    /// Build the app and the receiving end of its completion channel.
    pub fn new(
        session: SessionController,
        client: UnsplashClient,
    ) -> (Self, UnboundedReceiver<SearchCompletion>) {
        let (tx, rx) = unbounded_channel();
        let cursor = LineCursor::at_end(session.query());

        let app = Self {
            session,
            client,
            completions: tx,
            focus: Focus::Search,
            cursor,
            result_index: 0,
            favorite_index: 0,
            hits: HitMap::default(),
            should_quit: false,
        };

        (app, rx)
    }

    /// Run the UI loop until the user quits.
    ///
    /// Terminal events and search completions are handled one at a time on
    /// this task; search requests run in spawned tasks. Nothing is searched
    /// until the user submits the prefilled query.
    pub async fn run(
        &mut self,
        terminal: &mut ratatui::DefaultTerminal,
        mut completions: UnboundedReceiver<SearchCompletion>,
    ) -> Result<(), GalleryError> {
        let mut events = EventStream::new();

        loop {
            terminal.draw(|frame| self.draw(frame))?;

            tokio::select! {
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(event)) => self.handle_event(event),
                    Some(Err(e)) => {
                        return Err(GalleryError::Terminal {
                            message: format!("Failed to read terminal event: {e}"),
                            location: ErrorLocation::from(Location::caller()),
                        });
                    }
                    None => {
                        info!("Terminal event stream closed");
                        break;
                    }
                },
                Some(completion) = completions.recv() => self.apply_completion(completion),
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let screen = view::render(&self.session);
        self.hits = ui::draw(frame, &screen, &self.ui_state());
    }

    pub fn session(&self) -> &SessionController {
        &self.session
    }

    #[cfg(test)]
    pub(crate) fn session_mut(&mut self) -> &mut SessionController {
        &mut self.session
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn result_index(&self) -> usize {
        self.result_index
    }

    pub fn favorite_index(&self) -> usize {
        self.favorite_index
    }

    pub fn hits(&self) -> &HitMap {
        &self.hits
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn ui_state(&self) -> UiState {
        UiState {
            focus: self.focus,
            cursor_column: self.cursor.column(self.session.query()),
            result_index: self.result_index,
            favorite_index: self.favorite_index,
        }
    }

    // --- Searching ---

    /// Submit the current query and spawn the request.
    ///
    /// Does nothing for a blank query.
    pub fn start_search(&mut self) {
        let Some(ticket) = self.session.submit() else {
            return;
        };

        self.result_index = 0;

        let client = self.client.clone();
        let tx = self.completions.clone();
        tokio::spawn(async move {
            let result = client.search(ticket.query()).await;
            if tx.send(SearchCompletion { ticket, result }).is_err() {
                debug!("UI loop gone, dropping search completion");
            }
        });
    }

    pub fn apply_completion(&mut self, completion: SearchCompletion) {
        if self.session.complete(&completion.ticket, completion.result) {
            self.result_index = 0;
        }
    }

    // --- Event handling ---

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
            info!("Quit requested");
            self.should_quit = true;
            return;
        }

        if self.session.selected().is_some() {
            self.handle_detail_key(key);
            return;
        }

        match key.code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Search => self.handle_search_key(key),
            Focus::Results => self.handle_results_key(key),
            Focus::Favorites => self.handle_favorites_key(key),
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.session.close_detail(),
            KeyCode::Char('f') | KeyCode::Char(' ') => {
                self.session.toggle_selected_favorite();
                self.clamp_favorite_index();
            }
            KeyCode::Char('o') => {
                if let Some(photo) = self.session.selected() {
                    open_source_link(photo);
                }
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.start_search();
                return;
            }
            KeyCode::Down => {
                self.focus = Focus::Results;
                return;
            }
            _ => {}
        }

        let query = self.session.query_mut();
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.cursor.insert(query, c);
            }
            KeyCode::Backspace => {
                self.cursor.backspace(query);
            }
            KeyCode::Delete => {
                self.cursor.delete(query);
            }
            KeyCode::Left => self.cursor.left(query),
            KeyCode::Right => self.cursor.right(query),
            KeyCode::Home => self.cursor.home(),
            KeyCode::End => self.cursor.end(query),
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        let total = self.session.photos().len();
        let columns = self.hits.result_columns.max(1);

        match key.code {
            KeyCode::Left => self.result_index = self.result_index.saturating_sub(1),
            KeyCode::Right => self.result_index = step_forward(self.result_index, 1, total),
            KeyCode::Up => {
                if self.result_index < columns {
                    self.focus = Focus::Search;
                } else {
                    self.result_index -= columns;
                }
            }
            KeyCode::Down => self.result_index = step_forward(self.result_index, columns, total),
            KeyCode::Home => self.result_index = 0,
            KeyCode::End => self.result_index = total.saturating_sub(1),
            KeyCode::Enter => {
                if let Some(photo) = self.session.photos().get(self.result_index).cloned() {
                    self.session.open_detail(photo);
                }
            }
            KeyCode::Char('f') | KeyCode::Char(' ') => {
                if let Some(photo) = self.session.photos().get(self.result_index).cloned() {
                    self.session.toggle_favorite(&photo);
                    self.clamp_favorite_index();
                }
            }
            KeyCode::Char('o') => {
                if let Some(photo) = self.session.photos().get(self.result_index) {
                    open_source_link(photo);
                }
            }
            KeyCode::Char('/') => self.focus = Focus::Search,
            _ => {}
        }
    }

    fn handle_favorites_key(&mut self, key: KeyEvent) {
        let total = self.session.favorites().len();

        match key.code {
            KeyCode::Up => self.favorite_index = self.favorite_index.saturating_sub(1),
            KeyCode::Down => self.favorite_index = step_forward(self.favorite_index, 1, total),
            KeyCode::Home => self.favorite_index = 0,
            KeyCode::End => self.favorite_index = total.saturating_sub(1),
            KeyCode::Enter => {
                if let Some(photo) = self.selected_favorite() {
                    self.session.open_detail(photo);
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(photo) = self.selected_favorite() {
                    self.session.toggle_favorite(&photo);
                    self.clamp_favorite_index();
                }
            }
            KeyCode::Char('o') => {
                if let Some(photo) = self.selected_favorite() {
                    open_source_link(&photo);
                }
            }
            KeyCode::Char('/') => self.focus = Focus::Search,
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let position = Position::new(mouse.column, mouse.row);

        if self.session.selected().is_some() {
            let click = if self.hits.close_button.is_some_and(|r| r.contains(position)) {
                OverlayClick::CloseButton
            } else if self.hits.overlay.is_some_and(|r| r.contains(position)) {
                OverlayClick::Content
            } else {
                OverlayClick::Scrim
            };
            self.session.overlay_click(click);
            return;
        }

        if self.hits.submit_button.is_some_and(|r| r.contains(position)) {
            self.start_search();
            return;
        }

        match self.hits.card_at(position) {
            Some(CardTarget::Result(index)) => {
                self.focus = Focus::Results;
                self.result_index = index;
                if let Some(photo) = self.session.photos().get(index).cloned() {
                    self.session.open_detail(photo);
                }
            }
            Some(CardTarget::Favorite(index)) => {
                self.focus = Focus::Favorites;
                self.favorite_index = index;
                if let Some(photo) = self.selected_favorite() {
                    self.session.open_detail(photo);
                }
            }
            None => {}
        }
    }

    fn selected_favorite(&self) -> Option<Photo> {
        self.session
            .favorites()
            .photos()
            .get(self.favorite_index)
            .cloned()
    }

    fn clamp_favorite_index(&mut self) {
        let total = self.session.favorites().len();
        self.favorite_index = self.favorite_index.min(total.saturating_sub(1));
    }
}

fn step_forward(index: usize, step: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    (index + step).min(total - 1)
}

fn open_source_link(photo: &Photo) {
    info!("Opening {} in the browser", photo.links.html);
    if let Err(e) = open::that_detached(&photo.links.html) {
        warn!("Failed to open {}: {}", photo.links.html, e);
    }
}
