//! Terminal store browser.
//!
//! `AppState` wraps a [`Session`] and turns key presses into browser events.
//! The main loop polls the background descriptor load, advances the
//! copy-label timer and redraws every 100ms.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

pub mod app_detail;
pub mod catalog_view;
pub mod clipboard;
pub mod handlers;
pub mod overlays;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::loader::CatalogLoader;
use crate::location::StoreSource;
use crate::models::Catalog;
use crate::session::{BrowserEvent, Effect, Session, SessionState, VisibleView};

pub use app_detail::AppDetailWidget;
pub use catalog_view::CatalogWidget;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Terminal browser state.
pub struct AppState {
    /// Loaded configuration
    pub config: Config,
    /// Browsing session driven by key presses
    pub session: Session,
    /// Pending descriptor load, dropped once it reports back
    pub loader: Option<CatalogLoader>,
    /// Store location shown while loading
    pub source: String,
    /// Active color theme
    pub theme: Theme,
    /// Selected tile in the main view
    pub selected_tile: usize,
    /// Selected gallery item in the detail view
    pub selected_gallery: usize,
    /// Fragment being typed after `:`
    pub fragment_input: Option<String>,
    /// Status line text
    pub status_message: String,
    /// Error shown in the error overlay
    pub error_message: Option<String>,
    /// Set when the user asked to quit
    pub should_quit: bool,
}

impl AppState {
    /// Creates browser state around a session.
    #[must_use]
    pub fn new(
        config: Config,
        session: Session,
        loader: Option<CatalogLoader>,
        source: impl Into<String>,
    ) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);

        Self {
            config,
            session,
            loader,
            source: source.into(),
            theme,
            selected_tile: 0,
            selected_gallery: 0,
            fragment_input: None,
            status_message: String::new(),
            error_message: None,
            should_quit: false,
        }
    }

    /// Checks the background load; returns true when it just finished.
    pub fn poll_loader(&mut self) -> bool {
        let Some(result) = self.loader.as_mut().and_then(CatalogLoader::poll) else {
            return false;
        };

        self.loader = None;
        self.finish_load(result);
        true
    }

    /// Hands the descriptor load result to the session.
    pub fn finish_load(&mut self, result: Result<Catalog>) {
        let effects = self.session.finish_load(result);

        if matches!(self.session.state(), SessionState::LoadFailed(_)) {
            self.set_status("Store could not be loaded");
        } else if let Some(catalog) = self.session.catalog() {
            self.status_message = format!("{} apps available", catalog.apps.len());
        }

        self.apply_effects(effects);
    }

    /// Delivers an event to the session and carries out its effects.
    pub fn dispatch(&mut self, event: BrowserEvent) {
        let before = self.session.fragment().to_string();
        let effects = self.session.handle(event);

        if self.session.fragment() != before {
            self.selected_gallery = 0;
        }

        self.apply_effects(effects);
    }

    fn apply_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::CopyToClipboard(text) => match clipboard::copy_text(&text) {
                    Ok(()) => {
                        self.session.copy_succeeded(Instant::now());
                        self.set_status("Install command copied to clipboard");
                    }
                    Err(e) => self.set_error(format!("{e:#}")),
                },
            }
        }
    }

    /// Number of tiles in the main view.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.session
            .display()
            .main
            .as_ref()
            .map_or(0, |view| view.tiles.len())
    }

    /// Number of gallery items in the detail view.
    #[must_use]
    pub fn gallery_count(&self) -> usize {
        self.session
            .display()
            .detail
            .as_ref()
            .map_or(0, |view| view.gallery.len())
    }

    /// Moves the selection of the visible view down.
    pub fn select_next(&mut self) {
        match self.session.display().visible {
            VisibleView::Main => {
                if self.selected_tile + 1 < self.tile_count() {
                    self.selected_tile += 1;
                }
            }
            VisibleView::Detail => {
                if self.selected_gallery + 1 < self.gallery_count() {
                    self.selected_gallery += 1;
                }
            }
        }
    }

    /// Moves the selection of the visible view up.
    pub fn select_previous(&mut self) {
        match self.session.display().visible {
            VisibleView::Main => self.selected_tile = self.selected_tile.saturating_sub(1),
            VisibleView::Detail => self.selected_gallery = self.selected_gallery.saturating_sub(1),
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

/// Opens the terminal browser on a store.
///
/// The descriptor is loaded on a background thread; `fragment` is the initial
/// deep link, dispatched once the store is ready.
pub fn run_browser(config: Config, source: StoreSource, fragment: String) -> Result<()> {
    let location = source
        .page_location()
        .with_context(|| format!("Cannot browse store at {source}"))?;

    let session = Session::new(location, config.store.install_cli.clone(), fragment);
    let loader = CatalogLoader::spawn(source.clone(), config.store.descriptor_file.clone());
    let mut state = AppState::new(config, session, Some(loader), source.to_string());

    let mut terminal = setup_terminal()?;
    let result = run_tui(&mut state, &mut terminal);
    restore_terminal(terminal)?;

    result
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        if state.poll_loader() {
            if let Some(header) = &state.session.display().header {
                execute!(terminal.backend_mut(), SetTitle(header.title.as_str()))
                    .context("Failed to set window title")?;
            }
        }

        state.session.tick(Instant::now());

        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key_event(state, key)? {
                    break;
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    let theme = &state.theme;

    let full_bg = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Store header
            Constraint::Min(6),    // Active view
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0], state);
    render_content(f, chunks[1], state);
    StatusBar::render(f, chunks[2], state, theme);

    let display = state.session.display();
    if display.install_dialog.visible {
        overlays::render_install_dialog(f, &display.install_dialog, &display.copy_button, theme);
    }
    if display.gallery_modal.visible {
        overlays::render_gallery_modal(f, &display.gallery_modal, theme);
    }
    if let Some(input) = &state.fragment_input {
        overlays::render_fragment_prompt(f, input, theme);
    }
    if let Some(error) = &state.error_message {
        overlays::render_error_overlay(f, error, theme);
    }
}

/// Render the store header with the current fragment
fn render_header(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;

    let mut spans = match &state.session.display().header {
        Some(header) => vec![
            Span::styled(
                format!(" {} ", header.store_name),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("[{}]", header.store_logo),
                Style::default().fg(theme.text_muted),
            ),
        ],
        None => vec![Span::styled(
            format!(" {} ", crate::constants::APP_NAME),
            Style::default().fg(theme.primary),
        )],
    };
    spans.push(Span::styled(
        format!("  {}", state.session.fragment()),
        Style::default().fg(theme.text_secondary),
    ));

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(theme.background)),
    );

    f.render_widget(header, area);
}

/// Render the visible view, or the loading and failure placeholders
fn render_content(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let display = state.session.display();

    match state.session.state() {
        SessionState::Loading => {
            let loading = Paragraph::new(format!("Loading store from {}...", state.source))
                .style(Style::default().fg(theme.text_muted))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(loading, area);
        }
        SessionState::LoadFailed(message) => {
            // The failure takes the place of the app grid
            let text = display
                .load_failure
                .as_ref()
                .map_or(message.as_str(), |failure| failure.message.as_str());
            let failure = Paragraph::new(text)
                .style(Style::default().fg(theme.error))
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title(" Apps "));
            f.render_widget(failure, area);
        }
        SessionState::Ready | SessionState::RenderedMain | SessionState::RenderedDetail => {
            match display.visible {
                VisibleView::Main => {
                    if let Some(view) = &display.main {
                        CatalogWidget::render(f, area, view, state.selected_tile, theme);
                    }
                }
                VisibleView::Detail => {
                    if let Some(view) = &display.detail {
                        AppDetailWidget::render(f, area, view, state.selected_gallery, theme);
                    }
                }
            }
        }
    }
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Handle keyboard input events
fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    use crossterm::event::KeyCode;

    // Error overlay swallows input until dismissed
    if state.error_message.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            state.clear_error();
        }
        return Ok(false);
    }

    if state.fragment_input.is_some() {
        return handlers::handle_fragment_input(state, key);
    }

    let display = state.session.display();
    if display.gallery_modal.visible || display.install_dialog.visible {
        return handlers::handle_overlay_input(state, key);
    }

    handlers::handle_main_input(state, key)
}
