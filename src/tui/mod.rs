//! Minimal terminal UI for the dashboard.
//!
//! Renders the project table, trend chart and alert strip from engine
//! snapshots, and wires the start/stop, export and selection controls.
//! Pure reader: every frame re-reads the engine state and never mutates it.

mod keybindings;
mod project_list;
mod trends;

use crate::core::{Config, DashError, HistorySample, ProjectMetrics, Result, Theme};
use crate::engine::{Engine, SimulationRunner};
use crate::export::{ExportFormat, SnapshotExporter, DEFAULT_EXPORT_FILE};
use crossterm::{
    event::{self, Event},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// View mode
#[derive(Debug, Clone, Copy, PartialEq)]
enum View {
    Projects,
    Trends,
}

/// Accent colors resolved from the configured theme.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Palette {
    pub(crate) border: Color,
    pub(crate) text: Color,
    pub(crate) selection_bg: Color,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Palette {
                border: Color::Cyan,
                text: Color::White,
                selection_bg: Color::DarkGray,
            },
            Theme::Light => Palette {
                border: Color::Blue,
                text: Color::Black,
                selection_bg: Color::Gray,
            },
        }
    }
}

/// TUI application state
pub struct App {
    view: View,
    should_quit: bool,
    projects: Vec<ProjectMetrics>,
    history: Vec<HistorySample>,
    alerts: Vec<String>,
    tick_count: u64,
    selected_project: Option<usize>,
    status: Option<String>,
    engine: Arc<RwLock<Engine>>,
    runner: SimulationRunner,
    vim_mode: bool,
    palette: Palette,
    last_refresh: Instant,
    force_refresh: bool,
}

impl App {
    /// Create new TUI app around the shared engine and its runner.
    pub fn new(engine: Arc<RwLock<Engine>>, runner: SimulationRunner, config: &Config) -> Self {
        Self {
            view: View::Projects,
            should_quit: false,
            projects: Vec::new(),
            history: Vec::new(),
            alerts: Vec::new(),
            tick_count: 0,
            selected_project: Some(0),
            status: None,
            engine,
            runner,
            vim_mode: config.ui.vim_mode,
            palette: Palette::for_theme(config.ui.theme),
            last_refresh: Instant::now(),
            force_refresh: false,
        }
    }

    /// Refresh snapshots from the engine.
    async fn refresh(&mut self) {
        let engine = self.engine.read().await;
        self.projects = engine.store().snapshot();
        self.history = engine.history().snapshot();
        self.alerts = engine.alerts().snapshot();
        self.tick_count = engine.tick_count();
        self.last_refresh = Instant::now();
        self.force_refresh = false;
    }

    /// Handle keyboard input.
    fn handle_input(&mut self, key: crossterm::event::KeyEvent) {
        use keybindings::{handle_key, Action};

        match handle_key(key, self.vim_mode) {
            Action::Quit => self.should_quit = true,
            Action::ToggleSimulation => {
                let running = self.runner.toggle();
                self.status = Some(if running {
                    "simulation running".to_string()
                } else {
                    "simulation stopped".to_string()
                });
            },
            Action::Export => {
                self.status = Some(match self.export_snapshot(Path::new(DEFAULT_EXPORT_FILE)) {
                    Ok(count) => format!("exported {} projects to {}", count, DEFAULT_EXPORT_FILE),
                    Err(e) => format!("export failed: {}", e),
                });
            },
            Action::ToggleView => {
                self.view = match self.view {
                    View::Projects => View::Trends,
                    View::Trends => View::Projects,
                };
            },
            Action::MoveUp => {
                if let Some(idx) = &mut self.selected_project {
                    if *idx > 0 {
                        *idx -= 1;
                    }
                }
            },
            Action::MoveDown => {
                if let Some(idx) = &mut self.selected_project {
                    if *idx < self.projects.len().saturating_sub(1) {
                        *idx += 1;
                    }
                }
            },
            Action::SelectItem => {
                self.status = self
                    .selected_project
                    .and_then(|i| self.projects.get(i))
                    .map(|p| format!("selected {}", p.name));
            },
            Action::Refresh => self.force_refresh = true,
            Action::None => {},
        }
    }

    /// Write the current snapshot to the export file; returns the row count.
    fn export_snapshot(&self, path: &Path) -> Result<usize> {
        let exporter = SnapshotExporter::new(&self.projects);
        let content = exporter.export(ExportFormat::Csv)?;
        exporter.write_output(&content, Some(path))?;
        Ok(self.projects.len())
    }

    /// Draw the UI.
    fn draw(&mut self, frame: &mut Frame) {
        let alert_height = if self.alerts.is_empty() {
            0
        } else {
            self.alerts.len() as u16 + 2
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),            // Header
                Constraint::Length(alert_height), // Alerts
                Constraint::Min(0),               // Content
                Constraint::Length(2),            // Footer
            ])
            .split(frame.area());

        self.draw_header(frame, chunks[0]);
        if alert_height > 0 {
            self.draw_alerts(frame, chunks[1]);
        }

        match self.view {
            View::Projects => {
                let halves = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
                    .split(chunks[2]);

                project_list::draw_project_table(
                    frame,
                    halves[0],
                    &self.projects,
                    self.selected_project,
                    self.palette,
                );
                let selected = self.selected_project.and_then(|i| self.projects.get(i));
                project_list::draw_project_detail(frame, halves[1], selected, self.palette);
            },
            View::Trends => {
                trends::draw_trend_chart(frame, chunks[2], &self.history);
            },
        }

        self.draw_footer(frame, chunks[3]);
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let title = format!(
            " Resource Dashboard - {} | {} projects | tick {} | {} ",
            match self.view {
                View::Projects => "Projects",
                View::Trends => "Trends",
            },
            self.projects.len(),
            self.tick_count,
            if self.runner.is_running() {
                "RUNNING"
            } else {
                "STOPPED"
            }
        );

        let header = Paragraph::new(title)
            .style(Style::default().fg(self.palette.text))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.palette.border)),
            );

        frame.render_widget(header, area);
    }

    fn draw_alerts(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .alerts
            .iter()
            .map(|a| ListItem::new(a.as_str()).style(Style::default().fg(Color::Yellow)))
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Alerts ")
                .border_style(Style::default().fg(Color::Yellow)),
        );

        frame.render_widget(list, area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let help = match &self.status {
            Some(status) => format!(
                " [q]uit [space]start/stop [e]xport [Tab]view [↑↓]select | {} ",
                status
            ),
            None => " [q]uit [space]start/stop [e]xport [Tab]view [↑↓]select ".to_string(),
        };

        let footer = Paragraph::new(help)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::TOP));

        frame.render_widget(footer, area);
    }
}


/// Run the TUI until the user quits.
pub async fn run_tui(
    engine: Arc<RwLock<Engine>>,
    runner: SimulationRunner,
    config: Config,
) -> Result<()> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| DashError::terminal(format!("Failed to enable raw mode: {}", e)))?;
    let mut stdout = io::stdout();
    stdout
        .execute(EnterAlternateScreen)
        .map_err(|e| DashError::terminal(format!("Failed to enter alternate screen: {}", e)))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| DashError::terminal(format!("Failed to create terminal: {}", e)))?;

    let refresh_rate = config.ui.refresh_rate;
    let mut app = App::new(engine, runner, &config);

    // Initial data load
    app.refresh().await;

    // Main loop
    let poll_timeout = Duration::from_millis(50);
    loop {
        terminal
            .draw(|f| app.draw(f))
            .map_err(|e| DashError::render(format!("Failed to draw: {}", e)))?;

        if event::poll(poll_timeout)
            .map_err(|e| DashError::render(format!("Failed to poll events: {}", e)))?
        {
            if let Event::Key(key) = event::read()
                .map_err(|e| DashError::render(format!("Failed to read event: {}", e)))?
            {
                app.handle_input(key);
                if app.should_quit {
                    break;
                }
            }
        }

        if app.force_refresh || app.last_refresh.elapsed() >= refresh_rate {
            app.refresh().await;
        }
    }

    // Cleanup
    disable_raw_mode()
        .map_err(|e| DashError::terminal(format!("Failed to disable raw mode: {}", e)))?;
    terminal
        .backend_mut()
        .execute(LeaveAlternateScreen)
        .map_err(|e| DashError::terminal(format!("Failed to leave alternate screen: {}", e)))?;
    terminal
        .show_cursor()
        .map_err(|e| DashError::terminal(format!("Failed to show cursor: {}", e)))?;

    Ok(())
}
