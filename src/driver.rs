//! Session driver: one loop iteration per tick.
//!
//! The driver owns no game rules. It checks the terminal conditions, feeds at
//! most one queued action into [`Game::tick`], presents the frame (blocking for
//! the speed delay), then lets [`Game::resolve`] merge and clear.
//!
//! Rendering and input sit behind [`Renderer`] and [`InputSource`] so sessions
//! can be run headless in tests.

use std::io::Write;
use std::time::Duration;

use anyhow::Result;

use crate::core::{Game, GameSnapshot};
use crate::event_log::{EventLog, LogEvent};
use crate::input::TerminalInput;
use crate::term::{FrameBuffer, GameView, MenuScreen, MenuView, TerminalRenderer, Viewport};
use crate::types::{GameAction, GameStatus};

/// Draws a game frame and holds it on screen for `wait`.
pub trait Renderer {
    fn present(&mut self, snapshot: &GameSnapshot, wait: Duration) -> Result<()>;
}

/// Queue of player actions filled from some event source.
pub trait InputSource {
    /// Collect events that arrived within `timeout`.
    fn pump(&mut self, timeout: Duration) -> Result<()>;
    fn has_pending(&self) -> bool;
    fn next_action(&mut self) -> Option<GameAction>;
    fn clear(&mut self);
}

impl InputSource for TerminalInput {
    fn pump(&mut self, timeout: Duration) -> Result<()> {
        TerminalInput::pump(self, timeout)?;
        Ok(())
    }

    fn has_pending(&self) -> bool {
        self.queue().has_pending()
    }

    fn next_action(&mut self) -> Option<GameAction> {
        self.queue_mut().next_action()
    }

    fn clear(&mut self) {
        self.queue_mut().clear();
    }
}

/// Why [`run_session`] handed control back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionExit {
    /// Victory or game over; the score is final.
    Ended { status: GameStatus, score: u32 },
    /// The player paused. The game is frozen until resumed.
    Paused,
    /// The player asked to leave.
    Quit,
}

/// Take one action and drop whatever else queued up during the frame.
pub fn take_action<I: InputSource + ?Sized>(input: &mut I) -> Option<GameAction> {
    if !input.has_pending() {
        return None;
    }
    let action = input.next_action();
    input.clear();
    action
}

/// Run ticks until the game ends, pauses or the player quits.
///
/// A paused game is resumed first, so calling this again after a pause
/// continues where the player left off.
pub fn run_session<R, I, W>(
    game: &mut Game,
    renderer: &mut R,
    input: &mut I,
    log: &mut EventLog<W>,
) -> Result<SessionExit>
where
    R: Renderer + ?Sized,
    I: InputSource + ?Sized,
    W: Write,
{
    if game.paused() {
        game.apply_action(GameAction::Pause);
    }

    let wait = Duration::from_millis(game.config().speed.frame_ms());
    let mut snapshot = GameSnapshot::default();

    loop {
        let status = game.status();
        if status.is_terminal() {
            return Ok(SessionExit::Ended {
                status,
                score: game.score(),
            });
        }

        input.pump(Duration::ZERO)?;
        let action = take_action(input);
        match action {
            Some(GameAction::Quit) => return Ok(SessionExit::Quit),
            Some(GameAction::Pause) => {
                game.apply_action(GameAction::Pause);
                return Ok(SessionExit::Paused);
            }
            Some(GameAction::Restart) => {
                game.restart();
                log.record(0, &LogEvent::session_start(game.config(), game.seed()));
                continue;
            }
            _ => {}
        }

        game.tick(action);
        game.snapshot_into(&mut snapshot);
        renderer.present(&snapshot, wait)?;
        game.resolve();

        let events = game.drain_events();
        log.record_core(game.ticks(), &events);
    }
}

/// The real terminal: framebuffer views over a diffing renderer.
pub struct TerminalScreen {
    renderer: TerminalRenderer,
    view: GameView,
    menu: MenuView,
    fb: FrameBuffer,
}

impl Default for TerminalScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalScreen {
    pub fn new() -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            view: GameView::default(),
            menu: MenuView,
            fb: FrameBuffer::new(0, 0),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    fn viewport(&self) -> Viewport {
        let (w, h) = self.renderer.size();
        Viewport::new(w, h)
    }

    /// Draw a menu screen without waiting; menus poll input themselves.
    pub fn show_menu(&mut self, screen: &MenuScreen<'_>) -> Result<()> {
        let viewport = self.viewport();
        self.menu.render_into(screen, viewport, &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}

impl Renderer for TerminalScreen {
    fn present(&mut self, snapshot: &GameSnapshot, wait: Duration) -> Result<()> {
        let viewport = self.viewport();
        self.view.render_into(snapshot, viewport, &mut self.fb);
        self.renderer.present(&mut self.fb, wait)
    }
}
