use crate::loader::CountryClient;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::mpsc;
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;

/// Run the interactive directory until the user quits.
///
/// The country list is requested once, in the background, as soon as the
/// screen is up. Quitting before it arrives aborts the request.
pub fn run(client: CountryClient) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = App::new();
    let events = EventHandler::new(tick_rate);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    let load = spawn_load(&runtime, client, events.sender());

    let result = event_loop(&mut terminal, &mut app, &events, tick_rate);

    if !load.is_finished() {
        tracing::info!("Aborting country load still in flight");
        load.abort();
    }
    drop(guard);
    runtime.shutdown_background();
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    events: &EventHandler,
    tick_rate: Duration,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, app))?;
        if app.should_quit() {
            return Ok(());
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(app, key),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Loaded(result)) => app.on_load_result(result),
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => return Ok(()),
        }
    }
}

fn spawn_load(
    runtime: &Runtime,
    client: CountryClient,
    sender: mpsc::Sender<AppEvent>,
) -> JoinHandle<()> {
    runtime.spawn(async move {
        let result = client.fetch_all().await;
        if sender.send(AppEvent::Loaded(result)).is_err() {
            tracing::debug!("Country load finished after the UI closed");
        }
    })
}
