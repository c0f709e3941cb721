//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::events::Event as WorkerEvent;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crate::workers::{DataFetcher, spawn_fetches};
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{broadcast, mpsc};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    pub base_url: String,
}

impl UIConfig {
    pub fn new(with_background_color: bool, base_url: String) -> Self {
        Self {
            with_background_color,
            base_url,
        }
    }
}

/// The different screens in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Splash screen shown at the start of the application.
    Splash,
    /// Dashboard screen displaying the tokenomics figures.
    Dashboard,
}

/// Application state
pub struct App {
    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Dashboard state. Fed while the splash screen is still showing.
    dashboard: DashboardState,

    /// Receives events from the fetch tasks.
    event_receiver: mpsc::Receiver<WorkerEvent>,

    /// Broadcasts shutdown signal to the fetch tasks.
    shutdown_sender: broadcast::Sender<()>,

    /// Issues the fetches again on refresh.
    fetcher: Arc<DataFetcher>,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        event_receiver: mpsc::Receiver<WorkerEvent>,
        shutdown_sender: broadcast::Sender<()>,
        fetcher: Arc<DataFetcher>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            current_screen: Screen::Splash,
            dashboard: DashboardState::new(Instant::now(), ui_config),
            event_receiver,
            shutdown_sender,
            fetcher,
        }
    }

    /// Re-issue all three fetches. Each one replaces its slice when it lands.
    pub fn refresh(&self) {
        // Outstanding tasks end on their own or on the shutdown broadcast.
        let _ = spawn_fetches(self.fetcher.clone(), &self.shutdown_sender);
    }

    /// Move queued fetch events into the dashboard.
    fn drain_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.dashboard.add_event(event);
        }
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
pub async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> std::io::Result<()> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_secs(2);

    // UI event loop
    loop {
        app.drain_events();
        app.dashboard.update();

        terminal.draw(|f| render(f, app.current_screen, &app.dashboard))?;

        // Handle splash-to-dashboard transition
        if app.current_screen == Screen::Splash && splash_start.elapsed() >= splash_duration {
            app.current_screen = Screen::Dashboard;
            continue;
        }

        // Poll for key events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Skip events that are not KeyEventKind::Press
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                // Handle exit events
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    let _ = app.shutdown_sender.send(());
                    return Ok(());
                }

                match app.current_screen {
                    // Any key press will skip the splash screen
                    Screen::Splash => app.current_screen = Screen::Dashboard,
                    Screen::Dashboard => {
                        if matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R')) {
                            app.refresh();
                        }
                    }
                }
            }
        }

        // Let the fetch tasks make progress between frames.
        tokio::task::yield_now().await;
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: Screen, dashboard: &DashboardState) {
    match screen {
        Screen::Splash => render_splash(f),
        Screen::Dashboard => render_dashboard(f, dashboard),
    }
}
