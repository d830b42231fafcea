use pulse::adapters::{FilePreferenceStore, InMemoryPreferences, ReqwestHttpClient};
use pulse::app::{App, AppMessage};
use pulse::logging;
use pulse::terminal::{setup_panic_hook, TerminalManager};
use pulse::traits::PreferenceStore;
use pulse::ui;
use pulse::users::UserClient;

use color_eyre::Result;
use crossterm::event::{
    Event, EventStream, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    logging::init()?;

    // Install the panic hook before the terminal is put into raw mode so a
    // panic anywhere below leaves the shell usable.
    setup_panic_hook();

    let user_client = UserClient::new(Arc::new(ReqwestHttpClient::new()));
    let preferences: Box<dyn PreferenceStore> = match FilePreferenceStore::new() {
        Some(store) => Box::new(store),
        None => {
            // No home directory: the preference lives for this session only.
            tracing::warn!("no home directory found, dark mode will not persist");
            Box::new(InMemoryPreferences::new())
        }
    };

    let mut app = App::new(user_client, preferences);

    let mut term_manager = TerminalManager::new()?;
    app.mount_all(Instant::now());

    let result = run_app(term_manager.terminal(), &mut app).await;

    tracing::info!("pulse exiting");
    result
}

/// Run the main event loop.
///
/// Polls three sources with `tokio::select!`:
/// - a 16 ms frame tick, so pending deadlines fire promptly,
/// - the crossterm event stream (keys, mouse, resize),
/// - the message channel fed by spawned fetch tasks.
///
/// After every wakeup, pending effects are drained: the idle deadline is
/// polled and the activity count-change log is emitted.
async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        // Draw the UI only when something changed
        if app.needs_redraw {
            terminal.draw(|frame| {
                ui::render(frame, &mut *app);
            })?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            // Frame tick: nothing to do here directly; the effect drain
            // below picks up expired deadlines.
            _ = timeout => {}

            // Terminal events
            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            // Every key press is qualifying input for the
                            // idle detector.
                            app.on_qualifying_input(Instant::now());
                            app.mark_dirty();

                            match key.code {
                                KeyCode::Char('c')
                                    if key.modifiers.contains(KeyModifiers::CONTROL) =>
                                {
                                    app.quit();
                                }
                                KeyCode::Char('q') => {
                                    app.quit();
                                }
                                KeyCode::Char('d') => {
                                    app.toggle_dark_mode();
                                }
                                KeyCode::Char('1') => {
                                    app.toggle_user_card();
                                }
                                KeyCode::Char('2') => {
                                    app.toggle_pointer();
                                }
                                KeyCode::Char('3') => {
                                    app.toggle_idle(Instant::now());
                                }
                                KeyCode::Char('4') => {
                                    app.toggle_activity();
                                }
                                _ => {}
                            }
                        }
                        Event::Mouse(mouse_event) => {
                            match mouse_event.kind {
                                MouseEventKind::Moved => {
                                    app.on_mouse_moved(
                                        Instant::now(),
                                        mouse_event.column,
                                        mouse_event.row,
                                    );
                                }
                                MouseEventKind::Down(MouseButton::Left) => {
                                    app.on_click(mouse_event.column, mouse_event.row);
                                }
                                // Scroll and drag have no meaning here
                                _ => {}
                            }
                        }
                        Event::Resize(_, _) => {
                            app.mark_dirty();
                        }
                        _ => {
                            // Ignore focus and paste events
                        }
                    }
                }
            }

            // Completions from spawned fetch tasks
            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        app.run_effects(Instant::now());

        if app.should_quit {
            return Ok(());
        }
    }
}
