use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    widgets::TableState,
};

use crate::{
    app::{
        HoldingsStore, chart_range::ChartRange, form::AddHoldingForm, seed, simulator::PriceSimulator,
        ui,
    },
    models::{ChartPoint, MarketIndex},
    storage::KeyValueStore,
};

pub struct App<S: KeyValueStore, P: PriceSimulator> {
    store: HoldingsStore<S, P>,
    indices: Vec<MarketIndex>,
    chart: Vec<ChartPoint>,
    chart_range: ChartRange,
    table_state: TableState,
    form: Option<AddHoldingForm>,
    status: Option<String>,
}

impl<S: KeyValueStore, P: PriceSimulator> App<S, P> {
    pub fn new(store: HoldingsStore<S, P>) -> Self {
        Self {
            store,
            indices: seed::market_indices(),
            chart: seed::performance_chart(),
            chart_range: ChartRange::default(),
            table_state: TableState::default(),
            form: None,
            status: None,
        }
    }

    pub fn store(&self) -> &HoldingsStore<S, P> {
        &self.store
    }

    pub fn form(&self) -> Option<&AddHoldingForm> {
        self.form.as_ref()
    }

    pub fn chart_range(&self) -> ChartRange {
        self.chart_range
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_app(&mut terminal);

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let summary = self.store.summary();
        terminal.draw(|frame| {
            ui::render(
                frame,
                self.store.holdings(),
                &summary,
                &self.indices,
                &self.chart,
                self.chart_range,
                &mut self.table_state,
                self.form.as_ref(),
                &self.status,
            )
        })?;

        Ok(())
    }

    fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            self.draw(terminal)?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if !self.handle_key(key)? {
                    return Ok(());
                }
            }
        }
    }

    /// Applies one key press. Returns `false` when the app should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        if self.form.is_some() {
            self.handle_form_key(key)?;
            return Ok(true);
        }

        self.status = None;
        match key.code {
            KeyCode::Char('q') => return Ok(false),
            KeyCode::Char('a') => {
                self.table_state.select(None);
                self.form = Some(AddHoldingForm::new());
            }
            KeyCode::Esc => self.table_state.select(None),
            KeyCode::Left => self.chart_range = self.chart_range.previous(),
            KeyCode::Right => self.chart_range = self.chart_range.next(),
            KeyCode::Down => {
                let len = self.store.holdings().len();
                if len > 0 {
                    let i = match self.table_state.selected() {
                        Some(i) => {
                            if i >= len - 1 {
                                0
                            } else {
                                i + 1
                            }
                        }
                        None => 0,
                    };
                    self.table_state.select(Some(i));
                }
            }
            KeyCode::Up => {
                let len = self.store.holdings().len();
                if len > 0 {
                    let i = match self.table_state.selected() {
                        Some(i) => {
                            if i == 0 {
                                len - 1
                            } else {
                                i - 1
                            }
                        }
                        None => 0,
                    };
                    self.table_state.select(Some(i));
                }
            }
            _ => {}
        }

        Ok(true)
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let Some(form) = self.form.as_mut() else {
            return Ok(());
        };

        match key.code {
            KeyCode::Esc => self.form = None,
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.previous_field(),
            KeyCode::Backspace => form.pop(),
            KeyCode::Char(ch) => form.push(ch),
            KeyCode::Enter => {
                let input = form.to_new_holding();
                match self.store.add(input.clone())? {
                    Some(holding) => {
                        self.status = Some(format!("Added {} to portfolio", holding.ticker()));
                        self.form = None;
                    }
                    None => {
                        let message = input
                            .validate()
                            .err()
                            .map(|reason| reason.to_string())
                            .unwrap_or_else(|| String::from("Holding was not added"));
                        form.set_error(message);
                    }
                }
            }
            _ => {}
        }

        Ok(())
    }
}
