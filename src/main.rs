//! Terminal runner.
//!
//! Owns the event loop: polls keyboard input with a frame timeout, feeds
//! commands and elapsed time into the core, and redraws whenever the core
//! reports a change. All game rules live in `gridfall::core`.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use gridfall::core::{Game, GameEvent};
use gridfall::input::{map_key_event, should_quit};
use gridfall::term::{GameView, TerminalRenderer, Viewport};
use gridfall::types::FRAME_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut game = Game::new(seed);

    let view = GameView::default();
    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last_advance = Instant::now();
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let fb = view.render(&game, Viewport::new(w, h));
            term.draw(&fb)?;
            needs_redraw = false;
        }

        if event::poll(frame)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = map_key_event(key) {
                        game.apply(command);
                    }
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }

        let elapsed = last_advance.elapsed().as_millis() as u32;
        if elapsed > 0 {
            last_advance = Instant::now();
            game.advance(elapsed);
        }

        for event in game.take_events() {
            match event {
                GameEvent::BoardChanged | GameEvent::ScoreChanged { .. } => {
                    needs_redraw = true;
                }
                // The view draws the game-over overlay from the phase.
                GameEvent::GameOver => {
                    needs_redraw = true;
                }
            }
        }
    }
}
