//! TUI rendering and terminal management (impure shell)

pub mod book;
pub mod constants;
pub mod footer;
mod help;
pub mod layout;
mod panels;
pub mod styles;

pub use help::{key_label, max_help_scroll, render_help_overlay};
pub use layout::{page_label, ReaderLayout};
pub use panels::{render_contents_panel, render_settings_panel};
pub use styles::{ColorConfig, Palette};

use crate::config::{ConfigError, KeyBindings};
use crate::logging::LoggingError;
use crate::model::{ContentError, DisplayPreferences, PageContentStore};
use crate::pagination::{Clock, GestureAdapter, SystemClock};
use crate::state::{handle_action, handle_mouse, AppState, HitRegions, Overlay};
use crate::storage::{KeyValueStore, PreferencesRepository, StorageError};
use constants::IDLE_POLL_INTERVAL;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind, MouseEvent,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    widgets::Block,
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur while starting or running the reader
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Content pack could not be loaded
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Preference storage failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration file could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Log file could not be set up
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),
}

// ===== Terminal guard =====

/// Owns raw mode, the alternate screen and mouse capture.
///
/// Everything is restored on drop, including when the event loop returns an
/// error or a panic unwinds through it.
#[derive(Debug)]
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Take over the terminal.
    pub fn acquire() -> Result<Self, TuiError> {
        enable_raw_mode()?;
        // Constructed before the remaining steps so a failure part-way still
        // restores what was already changed.
        let guard = Self { _private: () };
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        debug!("Terminal acquired");
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        match restore_terminal() {
            Ok(()) => debug!("Terminal restored"),
            Err(err) => warn!(error = %err, "Failed to restore terminal"),
        }
    }
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

// ===== Reader =====

/// Startup settings for the reader, resolved from config and CLI.
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderOptions {
    /// Zero-based page to open on (clamped to the book).
    pub start_index: usize,
    /// Whether to emit colors.
    pub colors: ColorConfig,
    /// Horizontal drag, in columns, that counts as a swipe.
    pub swipe_threshold_columns: u16,
    /// How long a page turn holds the transition lock.
    pub transition_cooldown: Duration,
    /// Persist the current page on every change.
    pub remember_position: bool,
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend, and over the
/// clock so transition timing can be driven by hand.
pub struct TuiApp<B, S, C = SystemClock>
where
    B: Backend,
    S: KeyValueStore,
    C: Clock,
{
    terminal: Terminal<B>,
    state: AppState<C>,
    key_bindings: KeyBindings,
    repository: PreferencesRepository<S>,
    colors: ColorConfig,
    remember_position: bool,
    /// Regions from the last render (for mouse hit testing)
    regions: HitRegions,
}

impl<B, S, C> TuiApp<B, S, C>
where
    B: Backend,
    S: KeyValueStore,
    C: Clock,
{
    /// Assemble a reader over an already-built state.
    pub fn new(
        terminal: Terminal<B>,
        state: AppState<C>,
        repository: PreferencesRepository<S>,
        options: &ReaderOptions,
    ) -> Self {
        Self {
            terminal,
            state,
            key_bindings: KeyBindings::default(),
            repository,
            colors: options.colors,
            remember_position: options.remember_position,
            regions: HitRegions::default(),
        }
    }

    /// Handle one terminal event. Returns true if the reader should quit.
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse);
                false
            }
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
                false
            }
            _ => false,
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }
        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        let quit = handle_action(&mut self.state, action);
        if self.state.overlay == Overlay::Help {
            self.clamp_help_scroll();
        }
        self.persist();
        quit
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if handle_mouse(&mut self.state, mouse, &self.regions) {
            self.persist();
        }
    }

    fn clamp_help_scroll(&mut self) {
        if let Ok(size) = self.terminal.size() {
            let area = Rect::new(0, 0, size.width, size.height);
            let max = max_help_scroll(area, &self.key_bindings);
            self.state.help_scroll_offset = self.state.help_scroll_offset.min(max);
        }
    }

    /// Write out anything the last input changed.
    ///
    /// Storage failures are logged; the reader keeps going with in-memory
    /// state.
    fn persist(&mut self) {
        if self.state.take_preferences_dirty() {
            match self.repository.save(&self.state.preferences) {
                Ok(()) => debug!("Display preferences saved"),
                Err(err) => warn!(error = %err, "Failed to save display preferences"),
            }
        }

        if let Some(index) = self.state.take_position_change() {
            if self.remember_position {
                if let Err(err) = self.repository.save_last_page(index) {
                    warn!(error = %err, index, "Failed to save reading position");
                }
            }
        }
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let palette = Palette::new(&self.state.preferences, self.colors);
        let state = &self.state;
        let bindings = &self.key_bindings;
        let mut regions = HitRegions::default();

        self.terminal.draw(|frame| {
            regions = render_reader(frame, state, bindings, &palette);
        })?;

        self.regions = regions;
        Ok(())
    }
}

impl<S, C> TuiApp<CrosstermBackend<Stdout>, S, C>
where
    S: KeyValueStore,
    C: Clock,
{
    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Redraws on input and when a
    /// page transition's cooldown elapses; the poll timeout shrinks to the
    /// remaining cooldown so the lock is released on time.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let timeout = self
                .state
                .gestures
                .time_until_release()
                .unwrap_or(IDLE_POLL_INTERVAL);

            let mut redraw = false;
            if event::poll(timeout)? {
                if self.handle_event(event::read()?) {
                    return Ok(());
                }
                redraw = true;
            }
            if self.state.tick() {
                redraw = true;
            }
            if redraw {
                self.draw()?;
            }
        }
    }
}

/// Draw the whole reader for `state` and return the clickable regions.
pub fn render_reader<C: Clock>(
    frame: &mut Frame,
    state: &AppState<C>,
    bindings: &KeyBindings,
    palette: &Palette,
) -> HitRegions {
    let prefs = &state.preferences;
    let snapshot = state.snapshot();
    let layout = ReaderLayout::compute(frame.area(), prefs, snapshot.total_pages);

    book::render_header(
        frame,
        layout.header,
        state.controller.store(),
        &snapshot,
        prefs,
        palette,
    );
    if let Some(spine) = layout.spine {
        frame.render_widget(Block::default().style(palette.spine), spine);
    }
    book::render_page(frame, layout.page, &snapshot, prefs, palette);
    footer::render_footer(frame, &layout, &snapshot, palette);

    match state.overlay {
        Overlay::Settings => {
            render_settings_panel(frame, prefs, state.settings_cursor, palette);
        }
        Overlay::Contents => {
            render_contents_panel(frame, &state.controller, state.contents_cursor, palette);
        }
        Overlay::Help => {
            render_help_overlay(frame, state.help_scroll_offset, bindings, palette);
        }
        Overlay::None => {}
    }

    layout.hit_regions()
}

/// Initialize and run the reader
///
/// Takes over the terminal for the duration and restores it on every exit
/// path. Logging must be initialized by the caller.
pub fn run<S: KeyValueStore>(
    store: PageContentStore,
    preferences: DisplayPreferences,
    repository: PreferencesRepository<S>,
    options: ReaderOptions,
) -> Result<(), TuiError> {
    let gestures = GestureAdapter::new()
        .with_swipe_threshold(f64::from(options.swipe_threshold_columns))
        .with_cooldown(options.transition_cooldown);
    let state = AppState::new(store, options.start_index, preferences, gestures);
    info!(
        pages = state.controller.total_pages(),
        start = state.controller.current_index(),
        "Opening reader"
    );

    let _guard = TerminalGuard::acquire()?;
    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut app = TuiApp::new(terminal, state, repository, &options);
    app.run()
}

// ===== Test Helpers =====

#[cfg(test)]
impl<B, S, C> TuiApp<B, S, C>
where
    B: Backend,
    S: KeyValueStore,
    C: Clock,
{
    pub(crate) fn state(&self) -> &AppState<C> {
        &self.state
    }

    pub(crate) fn repository(&self) -> &PreferencesRepository<S> {
        &self.repository
    }

    pub(crate) fn handle_event_test(&mut self, event: Event) -> bool {
        self.handle_event(event)
    }

    pub(crate) fn tick_test(&mut self) -> bool {
        self.state.tick()
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

#[cfg(test)]
#[path = "tui_app_tests.rs"]
mod tests;
