use std::{io, sync::Arc, time::Duration};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    widgets::TableState,
};
use tokio::sync::mpsc;
use tokio_stream::StreamExt;

use crate::app::{
    ui,
    view_model::{HoldingsState, HoldingsViewModel},
};

const TICK: Duration = Duration::from_millis(100);

/// Forwards terminal events from a blocking reader thread.
///
/// The reader stops once the receiver is dropped.
fn spawn_input() -> mpsc::UnboundedReceiver<Event> {
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            match event::poll(TICK) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if tx.send(event).is_err() {
                            break;
                        }
                    }
                    Err(_) => break,
                },
                Ok(false) => {}
                Err(_) => break,
            }
        }
    });
    rx
}

pub struct App {
    view_model: Arc<HoldingsViewModel>,
    state: HoldingsState,
    table_state: TableState,
    summary_expanded: bool,
    tick: usize,
}

impl App {
    pub fn new(view_model: Arc<HoldingsViewModel>) -> Self {
        let state = view_model.state();
        Self {
            view_model,
            state,
            table_state: TableState::default(),
            summary_expanded: false,
            tick: 0,
        }
    }

    fn load(&self) {
        let view_model = Arc::clone(&self.view_model);
        tokio::spawn(async move { view_model.load().await });
    }

    fn retry(&self) {
        if let HoldingsState::Failed { retry, .. } = &self.state {
            let retry = retry.clone();
            tokio::spawn(async move { retry.run().await });
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_app(&mut terminal).await;

        self.view_model.cancel();

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn clamp_selection(&mut self) {
        let row_count = self.state.holdings().len();
        if row_count == 0 {
            self.table_state.select(None);
        } else if self.table_state.selected().is_some_and(|i| i >= row_count) {
            self.table_state.select(Some(row_count - 1));
        }
    }

    /// Returns `false` when the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return true;
        }

        let row_count = self.state.holdings().len();
        match key.code {
            KeyCode::Char('q') => return false,
            KeyCode::Char('r') | KeyCode::F(5) => {
                if matches!(self.state, HoldingsState::Failed { .. }) {
                    self.retry()
                } else {
                    self.load()
                }
            }
            KeyCode::Enter => self.retry(),
            KeyCode::Char('s') => self.summary_expanded = !self.summary_expanded,
            KeyCode::Esc => self.table_state.select(None),
            KeyCode::Down if row_count > 0 => {
                let i = match self.table_state.selected() {
                    Some(i) if i + 1 < row_count => i + 1,
                    _ => 0,
                };
                self.table_state.select(Some(i));
            }
            KeyCode::Up if row_count > 0 => {
                let i = match self.table_state.selected() {
                    Some(0) | None => row_count - 1,
                    Some(i) => i - 1,
                };
                self.table_state.select(Some(i));
            }
            _ => {}
        }
        true
    }

    async fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let mut changes = self.view_model.changes();
        let mut input = spawn_input();
        let mut ticker = tokio::time::interval(TICK);

        self.load();

        loop {
            self.clamp_selection();
            terminal.draw(|frame| {
                ui::render(
                    frame,
                    &self.state,
                    &mut self.table_state,
                    self.summary_expanded,
                    self.tick,
                )
            })?;

            tokio::select! {
                Some(state) = changes.next() => self.state = state,
                _ = ticker.tick() => self.tick = self.tick.wrapping_add(1),
                event = input.recv() => match event {
                    Some(Event::Key(key)) => {
                        if !self.handle_key(key) {
                            return Ok(());
                        }
                    }
                    Some(_) => {}
                    None => return Ok(()),
                },
            }
        }
    }
}
