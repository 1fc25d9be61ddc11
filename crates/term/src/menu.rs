//! Menu screens drawn around a session: start, pause, ending and high scores.
//!
//! Like [`crate::game_view`], these are pure framebuffer writers.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::Viewport;
use crate::types::{GameStatus, Speed, HIGH_SCORE_DISPLAY_LIMIT};

pub const TITLE: &str = "TETRIS 2048";

/// Which menu to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuScreen<'a> {
    /// Title screen; shows the currently selected speed.
    Start { speed: Speed },
    /// Game frozen by the pause action.
    Pause { score: u32 },
    /// Session over, score already recorded.
    Ending { status: GameStatus, score: u32 },
    /// Stored scores, best first.
    HighScores { scores: &'a [u32] },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Heading,
    Body,
    Selected,
    Hint,
}

fn style_for(kind: LineKind) -> CellStyle {
    let black = Rgb::new(0, 0, 0);
    match kind {
        LineKind::Heading => CellStyle::new(Rgb::new(237, 198, 67), black).bold(),
        LineKind::Body => CellStyle::new(Rgb::new(220, 220, 220), black),
        LineKind::Selected => CellStyle::new(black, Rgb::new(238, 228, 218)).bold(),
        LineKind::Hint => CellStyle {
            dim: true,
            ..CellStyle::new(Rgb::new(180, 180, 180), black)
        },
    }
}

impl MenuScreen<'_> {
    fn lines(&self) -> Vec<(String, LineKind)> {
        let mut out = Vec::new();
        match *self {
            MenuScreen::Start { speed } => {
                out.push((TITLE.to_string(), LineKind::Heading));
                out.push((String::new(), LineKind::Body));
                out.push(("Enter  start".to_string(), LineKind::Body));
                out.push((String::new(), LineKind::Body));
                out.push(("Speed".to_string(), LineKind::Body));
                for (i, option) in Speed::ALL.iter().enumerate() {
                    let text = format!("{}  {}", i + 1, option.label());
                    let kind = if *option == speed {
                        LineKind::Selected
                    } else {
                        LineKind::Body
                    };
                    out.push((text, kind));
                }
                out.push((String::new(), LineKind::Body));
                out.push(("H  high scores    Q  quit".to_string(), LineKind::Hint));
            }
            MenuScreen::Pause { score } => {
                out.push((GameStatus::Paused.heading().to_string(), LineKind::Heading));
                out.push((format!("Score {score}"), LineKind::Body));
                out.push((String::new(), LineKind::Body));
                out.push(("P  continue".to_string(), LineKind::Body));
                out.push(("R  restart".to_string(), LineKind::Body));
                out.push(("Q  quit".to_string(), LineKind::Hint));
            }
            MenuScreen::Ending { status, score } => {
                out.push((status.heading().to_string(), LineKind::Heading));
                out.push((format!("Score {score}"), LineKind::Body));
                out.push(("Your score has been saved.".to_string(), LineKind::Hint));
                out.push((String::new(), LineKind::Body));
                out.push(("R  restart".to_string(), LineKind::Body));
                out.push(("H  high scores".to_string(), LineKind::Body));
                out.push(("Q  exit".to_string(), LineKind::Body));
            }
            MenuScreen::HighScores { scores } => {
                out.push(("HIGH SCORES".to_string(), LineKind::Heading));
                out.push((String::new(), LineKind::Body));
                if scores.is_empty() {
                    out.push(("no scores yet".to_string(), LineKind::Hint));
                }
                for (rank, score) in scores.iter().take(HIGH_SCORE_DISPLAY_LIMIT).enumerate() {
                    out.push((format!("{:>2}. {:>8}", rank + 1, score), LineKind::Body));
                }
                out.push((String::new(), LineKind::Body));
                out.push(("any key  back".to_string(), LineKind::Hint));
            }
        }
        out
    }
}

/// Draws [`MenuScreen`]s centered in the viewport.
#[derive(Debug, Default, Clone, Copy)]
pub struct MenuView;

impl MenuView {
    pub fn render_into(&self, screen: &MenuScreen<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let lines = screen.lines();
        let block_h = lines.len() as u16;
        let block_w = lines
            .iter()
            .map(|(text, _)| text.chars().count() as u16)
            .max()
            .unwrap_or(0)
            + 4;
        let x = viewport.width.saturating_sub(block_w) / 2;
        let mut y = viewport.height.saturating_sub(block_h) / 2;

        for (text, kind) in &lines {
            if *kind == LineKind::Selected {
                fb.fill_rect(x, y, block_w, 1, ' ', style_for(*kind));
            }
            fb.put_str_centered(x, block_w, y, text, style_for(*kind));
            y = y.saturating_add(1);
        }
    }

    pub fn render(&self, screen: &MenuScreen<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(screen, viewport, &mut fb);
        fb
    }
}
