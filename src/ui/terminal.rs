use {
    crate::{
        activity::WalletActivity,
        address::parse_address,
        client::{ActivitySource, FetchError},
        view::SearchState,
    },
    crossterm::event::{KeyCode, KeyEventKind},
    ratatui::{backend::CrosstermBackend, Terminal},
    std::{io::Stdout, sync::Arc, time::Duration},
    tokio::{sync::mpsc, task::JoinHandle},
};

/// Key poll interval; also bounds how long a finished fetch waits to be drawn
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Result of a fetch task, tagged with the request it answers
#[derive(Debug)]
pub struct FetchMessage {
    pub request_id: u64,
    pub result: Result<Vec<WalletActivity>, FetchError>,
}

/// What the event loop should do after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    None,
    Search(String),
    Quit,
}

/// UI state: the address being typed plus the current search
pub struct App {
    input: String,
    search: SearchState,
}

impl App {
    pub fn new(search: SearchState) -> Self {
        Self {
            input: String::new(),
            search,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn search_mut(&mut self) -> &mut SearchState {
        &mut self.search
    }

    pub fn handle_key(&mut self, code: KeyCode) -> AppAction {
        match code {
            KeyCode::Esc => AppAction::Quit,
            KeyCode::Char('q') if self.input.is_empty() => AppAction::Quit,
            KeyCode::Char(c) => {
                self.input.push(c);
                AppAction::None
            }
            KeyCode::Backspace => {
                self.input.pop();
                AppAction::None
            }
            KeyCode::Enter => self.submit(),
            _ => AppAction::None,
        }
    }

    /// Validate the typed address; invalid input never reaches the fetch
    pub fn submit(&mut self) -> AppAction {
        match parse_address(&self.input) {
            Ok(address) => {
                self.input = address.clone();
                AppAction::Search(address)
            }
            Err(e) => {
                self.search.reject(e.to_string());
                AppAction::None
            }
        }
    }
}

/// Spawn a fetch for `address`, aborting the one in flight (if any)
fn start_search<S: ActivitySource + 'static>(
    app: &mut App,
    address: String,
    source: &Arc<S>,
    tx: &mpsc::Sender<FetchMessage>,
    in_flight: &mut Option<JoinHandle<()>>,
) {
    if let Some(handle) = in_flight.take() {
        handle.abort();
    }

    let request_id = app.search_mut().begin(&address);
    log::info!("🔎 Searching wallet {} (request {})", address, request_id);

    let source = source.clone();
    let tx = tx.clone();
    *in_flight = Some(tokio::spawn(async move {
        let result = source.fetch_activities(&address).await;
        if tx.send(FetchMessage { request_id, result }).await.is_err() {
            log::debug!("UI closed before request {} finished", request_id);
        }
    }));
}

/// Run the TUI event loop
///
/// Handles keyboard input and applies fetch results as they arrive.
pub async fn run_ui<S: ActivitySource + 'static>(
    source: Arc<S>,
    search: SearchState,
    initial_address: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal
    let stdout = std::io::stdout();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    crossterm::terminal::enable_raw_mode()?;

    // Alternate screen isolates the UI from stderr logs
    crossterm::execute!(
        std::io::stdout(),
        crossterm::terminal::EnterAlternateScreen,
        crossterm::cursor::Hide
    )?;
    terminal.clear()?;

    let mut app = App::new(search);
    let result = event_loop(&mut terminal, &mut app, source, initial_address).await;

    // Restore terminal state even when the loop failed
    crossterm::execute!(
        std::io::stdout(),
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::cursor::Show
    )?;
    crossterm::terminal::disable_raw_mode()?;

    result
}

async fn event_loop<S: ActivitySource + 'static>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    source: Arc<S>,
    initial_address: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let (tx, mut rx) = mpsc::channel::<FetchMessage>(16);
    let mut in_flight: Option<JoinHandle<()>> = None;

    if let Some(address) = initial_address {
        app.input = address;
        if let AppAction::Search(address) = app.submit() {
            start_search(app, address, &source, &tx, &mut in_flight);
        }
    }

    loop {
        while let Ok(message) = rx.try_recv() {
            app.search_mut().complete(message.request_id, message.result);
        }

        let area = terminal.size()?;
        terminal.draw(|f| super::layout::render_layout(f, area, app))?;

        // Check for keyboard input (non-blocking)
        if crossterm::event::poll(POLL_INTERVAL)? {
            if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match app.handle_key(key.code) {
                    AppAction::Quit => break,
                    AppAction::Search(address) => {
                        start_search(app, address, &source, &tx, &mut in_flight);
                    }
                    AppAction::None => {}
                }
            }
        }
    }

    if let Some(handle) = in_flight.take() {
        handle.abort();
    }
    Ok(())
}
