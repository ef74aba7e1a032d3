use crate::github::{SearchClient, SearchResponse};
use crate::logging;
use crate::pager::Pager;
use crate::tui::debounce::Debouncer;
use crate::tui::input::InputState;
use crate::tui::list::ListState;
use crate::tui::ui;
use crate::{format_count, AppConfig, Repository};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

const IDLE_HINT: &str = "Type to search GitHub repositories";

/// Messages from background fetch threads
pub enum WorkerMessage {
    SearchFinished {
        seq: u64,
        result: crate::Result<SearchResponse>,
    },
}

/// Fetch lifecycle. Loading carries the sequence number of the request it
/// belongs to, so a reply from an older request can never clear it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPhase {
    /// No active search: empty query, or the last one matched nothing
    Idle,
    /// The fetch tagged `seq` is the newest in flight
    Loading { seq: u64 },
    /// Results on screen belong to the latest dispatched (query, page)
    Loaded,
    /// The latest fetch failed; whatever was on screen stays
    Errored(String),
}

pub struct App {
    // Search state
    pub input: InputState,
    pub debouncer: Debouncer,
    pub results: Vec<Repository>,
    pub pager: Pager,
    pub phase: SearchPhase,
    pub total_count: u32,

    // Sub-states
    pub list: ListState,

    pub status_message: String,

    // Request tagging: a response is applied only if its seq matches
    // the last one handed out
    next_seq: u64,
    latest_seq: u64,

    // Channel shared by all fetch threads
    rx: Receiver<WorkerMessage>,
    tx: Sender<WorkerMessage>,

    client: Arc<SearchClient>,
    tick_rate: Duration,

    pub should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> crate::Result<Self> {
        let client = SearchClient::with_base_url(&config.base_url)?
            .with_token(config.token.clone());
        let (tx, rx) = channel();

        Ok(Self {
            input: InputState::default(),
            debouncer: Debouncer::with_delay(config.debounce),
            results: Vec::new(),
            pager: Pager::new(),
            phase: SearchPhase::Idle,
            total_count: 0,
            list: ListState::default(),
            status_message: IDLE_HINT.to_string(),
            next_seq: 0,
            latest_seq: 0,
            rx,
            tx,
            client: Arc::new(client),
            tick_rate: config.tick,
            should_quit: false,
        })
    }

    pub fn run(&mut self, terminal: &mut Terminal<impl Backend<Error = std::io::Error>>) -> crate::Result<()> {
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|frame| ui::draw(frame, self))?;

            let timeout = self.tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout).unwrap_or(false) {
                if let Ok(Event::Key(key)) = event::read() {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            if last_tick.elapsed() >= self.tick_rate {
                self.process_messages();
                if let Some((query, page)) = self.debouncer.take_ready() {
                    self.dispatch_search(query, page);
                }
                last_tick = Instant::now();
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SearchPhase::Loading { .. })
    }

    /// Every query edit lands the pager back on page 1, then the edited
    /// pair waits out the quiet period like any other change.
    fn on_query_changed(&mut self) {
        self.pager.reset_to_first();
        self.debouncer
            .schedule(self.input.query.clone(), self.pager.page());
    }

    /// Page flips ride the same debounced path as query edits
    fn on_page_changed(&mut self) {
        self.debouncer
            .schedule(self.input.query.clone(), self.pager.page());
    }

    fn dispatch_search(&mut self, query: String, page: u32) {
        self.next_seq += 1;
        let seq = self.next_seq;
        self.latest_seq = seq;
        self.phase = SearchPhase::Loading { seq };

        if query.is_empty() {
            // Cleared input settles locally; the network never hears about it
            self.results.clear();
            self.total_count = 0;
            self.pager.clear();
            self.list.reset(0);
            self.phase = SearchPhase::Idle;
            self.status_message = IDLE_HINT.to_string();
            return;
        }

        logging::debug(
            "FETCH",
            &format!("dispatch seq={} query='{}' page={}", seq, query, page),
        );

        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = client.search(&query, page);
            let _ = tx.send(WorkerMessage::SearchFinished { seq, result });
        });
    }

    fn process_messages(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                WorkerMessage::SearchFinished { seq, result } => {
                    if seq != self.latest_seq {
                        logging::debug(
                            "FETCH",
                            &format!(
                                "dropping stale response seq={} (latest is {})",
                                seq, self.latest_seq
                            ),
                        );
                        continue;
                    }
                    match result {
                        Ok(response) => self.apply_response(response),
                        Err(e) => {
                            logging::error("FETCH", &e.to_string());
                            self.phase = SearchPhase::Errored(e.to_string());
                            self.status_message = e.to_string();
                        }
                    }
                }
            }
        }
    }

    fn apply_response(&mut self, response: SearchResponse) {
        self.total_count = response.total_count;
        self.pager
            .apply_total(response.total_count, response.items.is_empty());
        self.results = response.items;
        self.list.reset(self.results.len());
        self.phase = SearchPhase::Loaded;

        self.status_message = if self.results.is_empty() {
            "No repositories found".to_string()
        } else {
            let mut message = format!(
                "{} repositories, page {} of {}",
                format_count(self.total_count),
                self.pager.page(),
                self.pager.total_pages()
            );
            if response.incomplete_results {
                message.push_str(" (results may be incomplete)");
            }
            message
        };
    }

    fn open_selected(&mut self) {
        let selected = match self.list.selected {
            Some(i) => i,
            None => return,
        };
        let repo = match self.results.get(selected) {
            Some(repo) => repo,
            None => return,
        };

        match open::that(&repo.html_url) {
            Ok(()) => {
                self.status_message = format!("Opened {}", repo.full_name);
            }
            Err(e) => {
                logging::error("OPEN", &format!("{}: {}", repo.html_url, e));
                self.status_message = format!("Failed to open browser: {}", e);
            }
        }
    }

    // --- Key handling ---

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global keys
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                if self.input.focused && !self.input.query.is_empty() {
                    self.input.clear();
                    self.on_query_changed();
                } else if self.input.focused {
                    self.input.focused = false;
                } else {
                    self.should_quit = true;
                }
                return;
            }
            _ => {}
        }

        if self.input.focused {
            self.handle_input_key(key);
        } else {
            self.handle_list_key(key);
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => {
                self.input.insert(c);
                self.on_query_changed();
            }
            KeyCode::Backspace => {
                if self.input.backspace() {
                    self.on_query_changed();
                }
            }
            KeyCode::Delete => {
                if self.input.delete() {
                    self.on_query_changed();
                }
            }
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => {
                self.input.focused = false;
            }
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        let total = self.results.len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.list.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.list.select_next(total),
            KeyCode::PageUp => self.list.page_up(),
            KeyCode::PageDown => self.list.page_down(total),
            KeyCode::Home => self.list.select_first(),
            KeyCode::End => self.list.select_last(total),

            // Pagination; no-op at the window edges
            KeyCode::Left | KeyCode::Char('p') => {
                if self.pager.prev() {
                    self.on_page_changed();
                }
            }
            KeyCode::Right | KeyCode::Char('n') => {
                if self.pager.next() {
                    self.on_page_changed();
                }
            }

            KeyCode::Enter => self.open_selected(),

            KeyCode::Tab | KeyCode::Char('/') => {
                self.input.focused = true;
            }

            // Any other printable char focuses search and types it
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.input.focused = true;
                self.input.append(c);
                self.on_query_changed();
            }

            _ => {}
        }
    }
}
