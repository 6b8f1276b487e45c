//! Terminal match-three runner (default binary).
//!
//! Fixed-tick game loop: render, poll input until the next tick, apply
//! commands, advance the session state. All timing (deal-in, cascade
//! pacing, swap revert) lives inside `GameState::tick`.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_match_three::core::GameState;
use tui_match_three::input::{handle_key_event, should_quit, Cursor, UiCommand};
use tui_match_three::term::{GameView, TerminalRenderer, Viewport};
use tui_match_three::types::{Config, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn seed_from_clock() -> u32 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new(Config::default(), seed_from_clock());
    let view = GameView::default();
    let mut cursor = Cursor::default();
    let mut grabbing = false;

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&game, cursor, Viewport::new(w, h));
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }

                    if let Some(command) = handle_key_event(key) {
                        match command {
                            UiCommand::MoveUp => cursor.shift(0, -1, game.columns(), game.rows()),
                            UiCommand::MoveDown => cursor.shift(0, 1, game.columns(), game.rows()),
                            UiCommand::MoveLeft => cursor.shift(-1, 0, game.columns(), game.rows()),
                            UiCommand::MoveRight => cursor.shift(1, 0, game.columns(), game.rows()),
                            UiCommand::Toggle => {
                                if grabbing {
                                    game.drop(cursor.coord());
                                    grabbing = false;
                                } else {
                                    game.grab(cursor.coord());
                                    grabbing = game.grabbed().is_some();
                                }
                            }
                            UiCommand::Restart => {
                                game.restart();
                                cursor = Cursor::default();
                                grabbing = false;
                            }
                        }
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(TICK_MS);
        }
    }
}
