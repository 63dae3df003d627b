//! Terminal setup and the main event loop.

use crate::app::App;
use crate::audio::TerminalBell;
use crate::config::GameConfig;
use crate::ui;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{Duration, sleep};
use tracing::{debug, error, info, instrument};
use xo_core::{Epoch, GameSession, IntervalTicks};

/// Runs the game in the terminal until the user quits.
///
/// Must be called from within a tokio runtime; the clock runs as a spawned
/// interval task.
#[instrument(skip(config))]
pub async fn run(config: &GameConfig) -> Result<()> {
    info!(
        time_limit = *config.time_limit_secs(),
        tick_millis = *config.tick_millis(),
        "Starting game"
    );

    let (ticks, mut tick_rx) = IntervalTicks::new(config.tick_period());
    debug!(period = ?ticks.period(), "Tick source ready");
    let session = GameSession::new(
        *config.time_limit_secs(),
        ticks,
        TerminalBell::stdout(*config.sound()),
    );
    let mut app = App::new(session);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, &mut tick_rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    info!("Game closed");
    res
}

/// Draws, delivers pending ticks and handles input until quit.
#[instrument(skip_all)]
pub async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    ticks: &mut UnboundedReceiver<Epoch>,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        while let Ok(epoch) = ticks.try_recv() {
            app.on_tick(epoch);
        }

        terminal.draw(|f| ui::draw(f, app))?;

        if app.should_quit() {
            return Ok(());
        }

        // Poll for input with short timeout to keep the clock display live.
        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            app.handle_key(key);
        }

        sleep(Duration::from_millis(10)).await;
    }
}
