use crate::tui::app::Focus;

use gallery_core::view::{
    DetailOverlay, FavoriteCard, FavoritesBody, FavoritesPanel, MessageKind, PhotoCard,
    ResultsBody, ResultsPanel, SOURCE_LINK_LABEL, Screen, SearchForm,
};

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

const CARD_WIDTH: u16 = 30;
const CARD_HEIGHT: u16 = 6;
const FAVORITE_ROW_HEIGHT: u16 = 2;
const CLOSE_LABEL: &str = "[x]";
const FAVORITE_MARK: &str = "★";
const NOT_FAVORITE_MARK: &str = "☆";
const KEY_HINTS: &str = "Enter search/open · Tab focus · f favorite · d remove · o open link · Ctrl-Q quit";

/// What a click at a card position refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTarget {
    Result(usize),
    Favorite(usize),
}

/// Clickable regions from the last frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    pub cards: Vec<(Rect, CardTarget)>,
    pub submit_button: Option<Rect>,
    pub overlay: Option<Rect>,
    pub close_button: Option<Rect>,
    /// Cards per row in the results grid, used for Up/Down.
    pub result_columns: usize,
}

impl HitMap {
    pub fn card_at(&self, position: Position) -> Option<CardTarget> {
        self.cards
            .iter()
            .find(|(rect, _)| rect.contains(position))
            .map(|(_, target)| *target)
    }
}

/// Front-end state the screen model does not carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiState {
    pub focus: Focus,
    pub cursor_column: usize,
    pub result_index: usize,
    pub favorite_index: usize,
}

pub fn draw(frame: &mut Frame, screen: &Screen, state: &UiState) -> HitMap {
    let area = frame.area();
    let mut hits = HitMap {
        result_columns: 1,
        ..HitMap::default()
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title + subtitle
            Constraint::Length(3), // Search bar
            Constraint::Min(5),    // Results + favorites
            Constraint::Length(1), // Footer
        ])
        .split(area);

    draw_header(frame, screen, chunks[0]);
    let input_area = draw_search_bar(frame, &screen.search_form, state, chunks[1], &mut hits);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(chunks[2]);

    draw_results(frame, &screen.results, state, panels[0], &mut hits);
    draw_favorites(frame, &screen.favorites, state, panels[1], &mut hits);
    draw_footer(frame, screen.footer, chunks[3]);

    match &screen.detail {
        Some(detail) => draw_detail(frame, detail, area, &mut hits),
        None if state.focus == Focus::Search => {
            let max_x = input_area.right().saturating_sub(1);
            let cursor_x = (input_area.x + state.cursor_column as u16).min(max_x);
            frame.set_cursor_position(Position::new(cursor_x, input_area.y));
        }
        None => {}
    }

    hits
}

pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn panel_title(title: &str, badge: Option<&str>) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!(" {title} "),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )];
    if let Some(badge) = badge {
        spans.push(Span::styled(
            format!("({badge}) "),
            Style::default().fg(Color::Gray),
        ));
    }
    Line::from(spans)
}

fn draw_header(frame: &mut Frame, screen: &Screen, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            screen.title,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            screen.subtitle,
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Returns the inner area of the text input, for cursor placement.
fn draw_search_bar(
    frame: &mut Frame,
    form: &SearchForm,
    state: &UiState,
    area: Rect,
    hits: &mut HitMap,
) -> Rect {
    let button_width = form.submit_label.chars().count() as u16 + 6;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(button_width)])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(state.focus == Focus::Search));
    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);

    let text = if form.query.is_empty() {
        Span::styled(form.placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(form.query.as_str(), Style::default().fg(Color::White))
    };
    frame.render_widget(Paragraph::new(Line::from(text)), inner);

    let button_style = if form.busy {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    };
    let button = Paragraph::new(Line::from(format!(" {} ", form.submit_label)).centered())
        .style(button_style)
        .block(Block::default().borders(Borders::ALL).border_style(button_style));
    frame.render_widget(button, chunks[1]);
    hits.submit_button = Some(chunks[1]);

    inner
}

fn draw_results(
    frame: &mut Frame,
    panel: &ResultsPanel,
    state: &UiState,
    area: Rect,
    hits: &mut HitMap,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(state.focus == Focus::Results))
        .title(panel_title(panel.title, panel.badge.as_deref()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &panel.body {
        ResultsBody::Blank => {}
        ResultsBody::Loading(text) => {
            let loading = Paragraph::new(Line::from(*text).centered())
                .style(Style::default().fg(Color::Yellow));
            frame.render_widget(loading, inner);
        }
        ResultsBody::Message { kind, text } => {
            let color = match kind {
                MessageKind::Info => Color::Gray,
                MessageKind::Error => Color::Red,
            };
            let message = Paragraph::new(text.as_str())
                .style(Style::default().fg(color))
                .wrap(Wrap { trim: true });
            frame.render_widget(message, inner);
        }
        ResultsBody::Grid(cards) => draw_result_grid(frame, cards, state, inner, hits),
    }
}

fn draw_result_grid(
    frame: &mut Frame,
    cards: &[PhotoCard],
    state: &UiState,
    area: Rect,
    hits: &mut HitMap,
) {
    let columns = (area.width / CARD_WIDTH).max(1) as usize;
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let card_width = area.width / columns as u16;
    hits.result_columns = columns;

    let selected = state.result_index.min(cards.len().saturating_sub(1));
    let first_row = (selected / columns).saturating_sub(visible_rows - 1);
    let first_index = first_row * columns;

    for (index, card) in cards
        .iter()
        .enumerate()
        .skip(first_index)
        .take(visible_rows * columns)
    {
        let offset = index - first_index;
        let row = (offset / columns) as u16;
        let col = (offset % columns) as u16;
        let rect = Rect::new(
            area.x + col * card_width,
            area.y + row * CARD_HEIGHT,
            card_width,
            CARD_HEIGHT,
        )
        .intersection(area);
        if rect.is_empty() {
            continue;
        }

        let is_selected = state.focus == Focus::Results && index == selected;
        draw_photo_card(frame, card, rect, is_selected);
        hits.cards.push((rect, CardTarget::Result(index)));
    }
}

fn draw_photo_card(frame: &mut Frame, card: &PhotoCard, area: Rect, is_selected: bool) {
    let border = if is_selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default().borders(Borders::ALL).border_style(border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (mark, mark_style) = if card.is_favorite {
        (FAVORITE_MARK, Style::default().fg(Color::Yellow))
    } else {
        (NOT_FAVORITE_MARK, Style::default().fg(Color::DarkGray))
    };

    let lines = vec![
        Line::from(Span::styled(
            card.alt_text.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("by {}", card.photographer),
            Style::default().fg(Color::Gray),
        )),
        Line::from(vec![
            Span::styled(format!("{mark} "), mark_style),
            Span::styled(card.favorite_label, mark_style),
        ]),
        Line::from(Span::styled(
            format!("[o] {}", card.source_label),
            Style::default().fg(Color::Cyan),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_favorites(
    frame: &mut Frame,
    panel: &FavoritesPanel,
    state: &UiState,
    area: Rect,
    hits: &mut HitMap,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(state.focus == Focus::Favorites))
        .title(panel_title(panel.title, panel.badge.as_deref()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &panel.body {
        FavoritesBody::Empty(text) => {
            let empty = Paragraph::new(*text)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true });
            frame.render_widget(empty, inner);
        }
        FavoritesBody::Grid(cards) => draw_favorite_list(frame, cards, state, inner, hits),
    }
}

fn draw_favorite_list(
    frame: &mut Frame,
    cards: &[FavoriteCard],
    state: &UiState,
    area: Rect,
    hits: &mut HitMap,
) {
    let visible = (area.height / FAVORITE_ROW_HEIGHT).max(1) as usize;
    let selected = state.favorite_index.min(cards.len().saturating_sub(1));
    let first = selected.saturating_sub(visible - 1);

    for (index, card) in cards.iter().enumerate().skip(first).take(visible) {
        let row = (index - first) as u16;
        let rect = Rect::new(
            area.x,
            area.y + row * FAVORITE_ROW_HEIGHT,
            area.width,
            FAVORITE_ROW_HEIGHT,
        )
        .intersection(area);
        if rect.is_empty() {
            continue;
        }

        let style = if state.focus == Focus::Favorites && index == selected {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        let lines = vec![
            Line::from(vec![
                Span::styled(format!("{FAVORITE_MARK} "), Style::default().fg(Color::Yellow)),
                Span::raw(card.alt_text.as_str()),
            ]),
            Line::from(Span::styled(
                format!("  {}", card.photographer),
                Style::default().fg(Color::Gray),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).style(style), rect);
        hits.cards.push((rect, CardTarget::Favorite(index)));
    }
}

fn draw_footer(frame: &mut Frame, footer: &str, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Fill(1)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(footer, Style::default().fg(Color::DarkGray))),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(KEY_HINTS).right_aligned())
            .style(Style::default().fg(Color::DarkGray)),
        chunks[1],
    );
}

fn draw_detail(frame: &mut Frame, detail: &DetailOverlay, area: Rect, hits: &mut HitMap) {
    // Scrim
    frame
        .buffer_mut()
        .set_style(area, Style::default().add_modifier(Modifier::DIM));

    let width = area.width.saturating_sub(4).min(76);
    let height = area.height.saturating_sub(2).min(12);
    let popup_area = centered_rect(width, height, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Detail ")
        .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let close_width = CLOSE_LABEL.len() as u16;
    let close_area = Rect::new(
        popup_area.right().saturating_sub(close_width + 1),
        popup_area.y,
        close_width,
        1,
    )
    .intersection(popup_area);
    frame.render_widget(
        Paragraph::new(CLOSE_LABEL)
            .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        close_area,
    );

    let (mark, mark_style) = if detail.is_favorite {
        (FAVORITE_MARK, Style::default().fg(Color::Yellow))
    } else {
        (NOT_FAVORITE_MARK, Style::default().fg(Color::Gray))
    };
    let key_style = Style::default().fg(Color::Cyan);

    let lines = vec![
        Line::from(Span::styled(
            detail.alt_text.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            detail.attribution.as_str(),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("Image   ", Style::default().fg(Color::Gray)),
            Span::raw(detail.image_url.as_str()),
        ]),
        Line::from(vec![
            Span::styled("Source  ", Style::default().fg(Color::Gray)),
            Span::raw(detail.source_url.as_str()),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled("[f] ", key_style),
            Span::styled(format!("{mark} {}", detail.favorite_label), mark_style),
            Span::raw("   "),
            Span::styled("[o] ", key_style),
            Span::raw(SOURCE_LINK_LABEL),
            Span::raw("   "),
            Span::styled("[Esc] ", key_style),
            Span::raw("Close"),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);

    hits.overlay = Some(popup_area);
    hits.close_button = Some(close_area);
}
