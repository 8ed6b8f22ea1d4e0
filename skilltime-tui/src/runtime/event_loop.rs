use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use super::action_queue::channel;
use super::actions::run_action;
use super::ticker::Ticker;
use super::views::handle_view_key;

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let (action_tx, mut action_rx) = channel();
    let mut ticker = Ticker::new(action_tx.clone());

    // A timer persisted as running resumes ticking immediately.
    ticker.sync(app.timer_phase());

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_view_key(key, app, &action_tx);
                }
            }
        }

        // Let the tick task run between polls.
        tokio::task::yield_now().await;

        while let Ok(action) = action_rx.try_recv() {
            run_action(action, app);
        }
        ticker.sync(app.timer_phase());

        if !app.running {
            break;
        }
    }

    Ok(())
}
