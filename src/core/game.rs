//! Game controller - state machine and tick pipeline
//!
//! Owns every mutable piece of a session: board, active piece, RNG, score,
//! level, phase, and the drop timer. The host feeds it commands and elapsed
//! time; it answers with drained notification events. No process-wide state:
//! independent sessions can coexist.

use arrayvec::ArrayVec;

use crate::core::board::Board;
use crate::core::collision::collides;
use crate::core::piece::ActivePiece;
use crate::core::rng::SimpleRng;
use crate::core::scoring::{drop_interval_ms, level_after_clear, line_clear_score};
use crate::core::shapes::random_kind;
use crate::core::timer::DropTimer;
use crate::types::GameCommand;

/// Controller states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Before the first start, or after a game-over was reset.
    Idle,
    Running,
    GameOver,
}

/// Notifications for the presentation layer, drained via
/// [`Game::take_events`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Something visible changed; redraw the grid and active piece.
    BoardChanged,
    /// New label values. Carries both since a clear can change either.
    ScoreChanged { score: u32, level: u32 },
    /// Emitted exactly once per game-over transition.
    GameOver,
}

const EVENT_QUEUE_CAP: usize = 8;

/// One game session.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active: Option<ActivePiece>,
    rng: SimpleRng,
    score: u32,
    level: u32,
    phase: Phase,
    timer: DropTimer,
    events: ArrayVec<GameEvent, EVENT_QUEUE_CAP>,
}

impl Game {
    /// Create an idle session with the given RNG seed.
    pub fn new(seed: u32) -> Self {
        Self {
            board: Board::new(),
            active: None,
            rng: SimpleRng::new(seed),
            score: 0,
            level: 1,
            phase: Phase::Idle,
            timer: DropTimer::new(),
            events: ArrayVec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Apply a command from the host. Commands that do not apply in the
    /// current phase are ignored with no state change.
    pub fn apply(&mut self, command: GameCommand) {
        match command {
            GameCommand::Start => self.start(),
            GameCommand::Reset => self.reset(),
            GameCommand::MoveLeft => self.shift(-1),
            GameCommand::MoveRight => self.shift(1),
            GameCommand::SoftDrop => {
                if self.phase == Phase::Running {
                    self.step_down();
                }
            }
            GameCommand::RotateCw => self.rotate_cw(),
        }
    }

    /// Feed elapsed wall time. Each timer fire runs one fall step, then the
    /// next period is scheduled at the current level's interval; a pending
    /// period always completes at the interval it was scheduled with.
    pub fn advance(&mut self, elapsed_ms: u32) {
        if self.phase != Phase::Running {
            return;
        }
        self.timer.accumulate(elapsed_ms);
        while self.timer.fire() {
            self.step_down();
            self.timer.reschedule(drop_interval_ms(self.level));
        }
    }

    /// Drain pending notifications in emission order.
    pub fn take_events(&mut self) -> ArrayVec<GameEvent, EVENT_QUEUE_CAP> {
        std::mem::take(&mut self.events)
    }

    fn start(&mut self) {
        // Running: no second timer, no re-reset. GameOver: reset comes first.
        if self.phase != Phase::Idle {
            return;
        }
        self.board.reset();
        self.score = 0;
        self.level = 1;
        self.spawn();
        self.timer.arm(drop_interval_ms(self.level));
        self.phase = Phase::Running;
        self.push(GameEvent::BoardChanged);
        self.push(GameEvent::ScoreChanged {
            score: self.score,
            level: self.level,
        });
    }

    /// Return to idle from any phase. Safe to repeat.
    fn reset(&mut self) {
        // Cancel before touching state so no queued fire lands afterwards.
        self.timer.cancel();
        self.board.reset();
        self.active = None;
        self.score = 0;
        self.level = 1;
        self.phase = Phase::Idle;
        self.push(GameEvent::BoardChanged);
        self.push(GameEvent::ScoreChanged {
            score: self.score,
            level: self.level,
        });
    }

    fn shift(&mut self, dx: i8) {
        if self.phase != Phase::Running {
            return;
        }
        let Some(piece) = self.active else {
            return;
        };
        let moved = piece.translated(dx, 0);
        if !collides(&self.board, &moved) {
            self.active = Some(moved);
            self.push(GameEvent::BoardChanged);
        }
    }

    fn rotate_cw(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        let Some(piece) = self.active else {
            return;
        };
        let rotated = piece.rotated();
        if !collides(&self.board, &rotated) {
            self.active = Some(rotated);
            self.push(GameEvent::BoardChanged);
        }
    }

    /// One fall step: descend, or land (merge, clear, score, respawn).
    ///
    /// Soft drops and timer fires share this path, so a soft drop can also
    /// lock a piece and end the game.
    fn step_down(&mut self) {
        let Some(piece) = self.active else {
            return;
        };

        let dropped = piece.translated(0, 1);
        if !collides(&self.board, &dropped) {
            self.active = Some(dropped);
            self.push(GameEvent::BoardChanged);
            return;
        }

        // Landed: the vertical move is discarded and the piece settles.
        self.board.merge(&piece);
        let cleared = self.board.clear_full_lines();
        if cleared > 0 {
            self.score += line_clear_score(cleared, self.level);
            self.level = level_after_clear(self.score, self.level);
            self.push(GameEvent::ScoreChanged {
                score: self.score,
                level: self.level,
            });
        }

        if !self.spawn() {
            self.phase = Phase::GameOver;
            self.timer.cancel();
            self.push(GameEvent::BoardChanged);
            self.push(GameEvent::GameOver);
            return;
        }
        self.push(GameEvent::BoardChanged);
    }

    /// Draw a random kind and place it at the spawn position. Returns false
    /// when the spawn collides (board full near the top); the colliding
    /// piece is discarded.
    fn spawn(&mut self) -> bool {
        let kind = random_kind(&mut self.rng);
        let piece = ActivePiece::spawn(kind);
        if collides(&self.board, &piece) {
            self.active = None;
            return false;
        }
        self.active = Some(piece);
        true
    }

    /// Queue a notification. `BoardChanged` coalesces to a single pending
    /// instance and `ScoreChanged` keeps only the newest values, so the
    /// queue stays bounded no matter how many fall steps run between drains.
    fn push(&mut self, event: GameEvent) {
        match event {
            GameEvent::BoardChanged => {
                if self.events.contains(&GameEvent::BoardChanged) {
                    return;
                }
            }
            GameEvent::ScoreChanged { .. } => {
                if let Some(slot) = self
                    .events
                    .iter_mut()
                    .find(|e| matches!(e, GameEvent::ScoreChanged { .. }))
                {
                    *slot = event;
                    return;
                }
            }
            GameEvent::GameOver => {}
        }
        let _ = self.events.try_push(event);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(1)
    }
}
