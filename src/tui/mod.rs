//! TUI (Text User Interface) rendering the analysis page in the terminal.

mod app;
mod constants;
mod draw;
mod handlers;
mod shortcuts;

use crossterm::event::{self, Event};
use crossterm::execute;
use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, TryRecvError};
use std::time::{Duration, Instant};

use tokio::runtime::Runtime;

use crate::core::api::{ApiError, HttpApi};
use crate::core::config::Config;

use app::{App, HealthStatus};
use draw::draw;
use handlers::{
    HandleKeyContext, HandleResult, PendingAnalysis, handle_key, handle_paste, spawn_health_check,
    spawn_models_fetch,
};

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = execute!(
            std::io::stdout(),
            crossterm::event::PopKeyboardEnhancementFlags
        );
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), crossterm::event::DisableBracketedPaste);
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}

/// Apply finished analyses; a dropped sender still clears the loading state.
fn poll_analyses(app: &mut App, pending: &mut Vec<PendingAnalysis>) {
    pending.retain(|rx| match rx.try_recv() {
        Ok(result) => {
            let outcome = app.controller.finish_submit(result);
            log::debug!("analysis finished: {:?}", outcome);
            false
        }
        Err(TryRecvError::Empty) => true,
        Err(TryRecvError::Disconnected) => {
            app.controller
                .finish_submit(Err(ApiError::Transport(Box::new(io::Error::other(
                    "analysis worker exited without a reply",
                )))));
            false
        }
    });
}

/// Run the TUI loop. Uses a dedicated Tokio runtime for backend calls.
pub fn run(config: Arc<Config>) -> io::Result<()> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    let _guard = TerminalGuard;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    execute!(stdout, crossterm::event::EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Kitty keyboard protocol: Shift+Enter and Alt+key arrive with their modifiers.
    let _ = execute!(
        io::stdout(),
        crossterm::event::PushKeyboardEnhancementFlags(
            crossterm::event::KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                | crossterm::event::KeyboardEnhancementFlags::REPORT_ALTERNATE_KEYS
        )
    );

    let rt = Arc::new(
        Runtime::new().map_err(|e| io::Error::other(format!("Failed to create runtime: {}", e)))?,
    );
    let api = Arc::new(HttpApi::new(&config.api_base_url));

    let mut app = App::new(&config.default_model, &config.api_base_url);
    let mut pending_analyses: Vec<PendingAnalysis> = Vec::new();
    let mut pending_models = app
        .controller
        .begin_load_models()
        .then(|| spawn_models_fetch(&rt, Arc::clone(&api)));
    let mut pending_health: Option<mpsc::Receiver<_>> =
        Some(spawn_health_check(&rt, Arc::clone(&api)));

    loop {
        if let Some(ref models_rx) = pending_models
            && let Ok(result) = models_rx.try_recv()
        {
            app.controller.apply_models(result);
            pending_models = None;
        }

        if let Some(ref health_rx) = pending_health
            && let Ok(result) = health_rx.try_recv()
        {
            app.health = HealthStatus::from(result);
            pending_health = None;
        }

        poll_analyses(&mut app, &mut pending_analyses);
        app.controller.tick(Instant::now());

        terminal.draw(|f| draw(f, &mut app, f.area()))?;

        if event::poll(Duration::from_millis(constants::EVENT_POLL_TIMEOUT_MS))? {
            match event::read()? {
                Event::Key(key) => {
                    let result = handle_key(
                        key,
                        HandleKeyContext {
                            app: &mut app,
                            api: &api,
                            pending_analyses: &mut pending_analyses,
                            rt: &rt,
                        },
                    );
                    if result == HandleResult::Break {
                        break;
                    }
                }
                Event::Paste(text) => handle_paste(&text, &mut app),
                _ => {}
            }
        }
    }

    terminal.show_cursor()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::{AnalysisResult, AnalyzeReply};

    fn loading_app() -> App {
        let mut app = App::new("m", "http://localhost:8000");
        app.controller.set_input("hello");
        app.controller.begin_submit().expect("valid submission");
        app
    }

    #[test]
    fn dropped_worker_clears_loading_with_connection_error() {
        let mut app = loading_app();
        let (tx, rx) = mpsc::channel::<Result<AnalyzeReply, ApiError>>();
        drop(tx);
        let mut pending = vec![rx];
        poll_analyses(&mut app, &mut pending);
        assert!(pending.is_empty());
        assert!(!app.page().is_loading_visible());
        assert!(!app.page().is_submit_disabled());
        assert!(
            app.page()
                .visible_error()
                .is_some_and(|e| e.starts_with("Failed to connect"))
        );
    }

    #[test]
    fn pending_analysis_stays_until_reply() {
        let mut app = loading_app();
        let (tx, rx) = mpsc::channel();
        let mut pending = vec![rx];
        poll_analyses(&mut app, &mut pending);
        assert_eq!(pending.len(), 1);
        assert!(app.page().is_loading_visible());

        tx.send(Ok(AnalyzeReply {
            status: 200,
            body: AnalysisResult {
                summary: Some("S".to_string()),
                ..Default::default()
            },
        }))
        .unwrap();
        poll_analyses(&mut app, &mut pending);
        assert!(pending.is_empty());
        assert!(app.page().is_results_visible());
    }
}
