//! Pending-action queue and the crossterm event pump that fills it.
//!
//! The game consumes at most one action per tick and then drops the rest, so a
//! burst of key presses between frames never turns into a burst of moves.

use std::io;
use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::map::handle_key_event;
use crate::types::GameAction;

/// Upper bound on actions buffered between two ticks.
pub const QUEUE_CAPACITY: usize = 16;

/// Bounded FIFO of player actions.
#[derive(Debug, Clone, Default)]
pub struct ActionQueue {
    pending: ArrayVec<GameAction, QUEUE_CAPACITY>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue an action. Returns false (dropping it) when the queue is full.
    pub fn push(&mut self, action: GameAction) -> bool {
        self.pending.try_push(action).is_ok()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take the oldest pending action.
    pub fn next_action(&mut self) -> Option<GameAction> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }

    /// Drop every pending action.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

/// Reads crossterm key events into an [`ActionQueue`].
#[derive(Debug, Default)]
pub struct TerminalInput {
    queue: ActionQueue,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue(&self) -> &ActionQueue {
        &self.queue
    }

    pub fn queue_mut(&mut self) -> &mut ActionQueue {
        &mut self.queue
    }

    /// Feed one key event into the queue. Repeats and releases are ignored.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if let Some(action) = handle_key_event(key) {
            self.queue.push(action);
        }
    }

    /// Collect key events until `wait` has elapsed and nothing more is buffered.
    ///
    /// `Duration::ZERO` drains whatever the terminal already delivered.
    pub fn pump(&mut self, wait: Duration) -> io::Result<()> {
        let deadline = Instant::now() + wait;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining)? {
                return Ok(());
            }
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
    }

    /// Block until a key press arrives (menus) or `wait` elapses.
    pub fn wait_key(&mut self, wait: Duration) -> io::Result<Option<KeyEvent>> {
        if !event::poll(wait)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
            _ => Ok(None),
        }
    }
}
