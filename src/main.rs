//! Terminal Tetris 2048 runner (default binary).
//!
//! Start menu, play sessions with pause and ending screens, and the high-score
//! table. Uses crossterm for input and the framebuffer renderer for output.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use tetris_2048::config::Cli;
use tetris_2048::core::{Game, PieceGenerator};
use tetris_2048::driver::{run_session, SessionExit, TerminalScreen};
use tetris_2048::event_log::{EventLog, LogEvent};
use tetris_2048::high_scores::HighScores;
use tetris_2048::input::{handle_menu_key, MenuKey, TerminalInput};
use tetris_2048::term::MenuScreen;
use tetris_2048::types::{GameConfig, Speed, MENU_FRAME_MS};

/// What the player picked on a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Play,
    Restart,
    Quit,
}

struct App {
    screen: TerminalScreen,
    input: TerminalInput,
    log: EventLog,
    scores: HighScores,
    /// Score of the most recently finished (and saved) game.
    last_score: Option<u32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = cli.game_config()?;
    let scores = HighScores::load(&cli.scores_file)?;
    let log_path = cli.log_path();

    let mut app = App {
        screen: TerminalScreen::new(),
        input: TerminalInput::new(),
        log: EventLog::open(log_path.as_deref()),
        scores,
        last_score: None,
    };

    app.screen.enter()?;
    let result = app.run(&cli, &mut config);

    // Always try to restore terminal state.
    let _ = app.screen.exit();
    app.log.flush();

    if let Some(score) = app.last_score {
        println!("[tetris-2048] final score {score}");
        println!("[tetris-2048] high scores saved to {}", app.scores.path().display());
    }
    if let Some(path) = &log_path {
        if !app.log.is_enabled() {
            println!("[tetris-2048] event log {} could not be written", path.display());
        }
    }
    result
}

impl App {
    fn run(&mut self, cli: &Cli, config: &mut GameConfig) -> Result<()> {
        if !cli.skip_menu && self.start_menu(&mut config.speed)? == Choice::Quit {
            return Ok(());
        }

        let generator = match cli.seed {
            Some(seed) => PieceGenerator::new(seed),
            None => PieceGenerator::from_entropy(),
        };
        let mut game = Game::with_generator(*config, generator);
        self.log
            .record(0, &LogEvent::session_start(game.config(), game.seed()));

        loop {
            let exit = run_session(&mut game, &mut self.screen, &mut self.input, &mut self.log)?;
            let choice = match exit {
                SessionExit::Quit => Choice::Quit,
                SessionExit::Paused => self.pause_menu(game.score())?,
                SessionExit::Ended { status, score } => {
                    let rank = self.scores.insert(score);
                    self.scores.save()?;
                    self.last_score = Some(score);
                    self.log
                        .record(game.ticks(), &LogEvent::HighScore { score, rank });
                    self.ending_menu(MenuScreen::Ending { status, score })?
                }
            };

            match choice {
                Choice::Play => {}
                Choice::Restart => {
                    // Back through the start menu so a new speed can be picked.
                    if !cli.skip_menu {
                        let mut speed = game.config().speed;
                        if self.start_menu(&mut speed)? == Choice::Quit {
                            return Ok(());
                        }
                        game.set_speed(speed);
                    }
                    game.restart();
                    self.log
                        .record(0, &LogEvent::session_start(game.config(), game.seed()));
                }
                Choice::Quit => return Ok(()),
            }
        }
    }

    /// Block until a menu key arrives, redrawing `screen` every frame.
    fn menu_key(&mut self, screen: &MenuScreen<'_>) -> Result<MenuKey> {
        loop {
            self.screen.show_menu(screen)?;
            if let Some(key) = self.input.wait_key(Duration::from_millis(MENU_FRAME_MS))? {
                if let Some(menu_key) = handle_menu_key(key) {
                    return Ok(menu_key);
                }
            }
        }
    }

    fn start_menu(&mut self, speed: &mut Speed) -> Result<Choice> {
        loop {
            match self.menu_key(&MenuScreen::Start { speed: *speed })? {
                MenuKey::Confirm => return Ok(Choice::Play),
                MenuKey::Option(n) => {
                    if let Some(picked) = Speed::ALL.get(usize::from(n).wrapping_sub(1)) {
                        *speed = *picked;
                    }
                }
                MenuKey::HighScores => self.high_score_table()?,
                MenuKey::Quit => return Ok(Choice::Quit),
                MenuKey::Restart => {}
            }
        }
    }

    fn pause_menu(&mut self, score: u32) -> Result<Choice> {
        loop {
            match self.menu_key(&MenuScreen::Pause { score })? {
                MenuKey::Confirm => return Ok(Choice::Play),
                MenuKey::Restart => return Ok(Choice::Restart),
                MenuKey::Quit => return Ok(Choice::Quit),
                MenuKey::Option(_) | MenuKey::HighScores => {}
            }
        }
    }

    fn ending_menu(&mut self, screen: MenuScreen<'_>) -> Result<Choice> {
        loop {
            match self.menu_key(&screen)? {
                MenuKey::Restart => return Ok(Choice::Restart),
                MenuKey::Quit => return Ok(Choice::Quit),
                MenuKey::HighScores => self.high_score_table()?,
                MenuKey::Confirm | MenuKey::Option(_) => {}
            }
        }
    }

    /// Show the table until any key is pressed.
    fn high_score_table(&mut self) -> Result<()> {
        let frame = Duration::from_millis(MENU_FRAME_MS);
        loop {
            let screen = MenuScreen::HighScores {
                scores: self.scores.top(),
            };
            self.screen.show_menu(&screen)?;
            if self.input.wait_key(frame)?.is_some() {
                return Ok(());
            }
        }
    }
}
