use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{backend::Backend, Terminal};

use super::sound::{SoundKind, SoundPlayer};
use crate::config::{AppConfig, UiConfig};
use crate::error::{ConfigError, MoveError};
use crate::game::{GameEvent, GameSession, Outcome, Phase, Player, TurnReport};

/// The interactive game screen. Owns the session and drives it from keyboard
/// input; the engine stays synchronous while the app paces the AI's turn and
/// the flip highlight on its own clock.
pub struct App {
    session: GameSession,
    ui: UiConfig,
    cursor: (usize, usize),
    message: Option<String>,
    sound: SoundPlayer,
    rng: StdRng,
    /// When to invoke the computer's turn, set after the human moves.
    ai_due: Option<Instant>,
    /// Cells flipped by the last placement, highlighted until `flip_until`.
    last_flipped: Vec<(usize, usize)>,
    flip_until: Option<Instant>,
    should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, ConfigError> {
        let session = GameSession::new(&config.game)?;
        let cursor = (config.game.height / 2, config.game.width / 2);
        Ok(App {
            session,
            ui: config.ui.clone(),
            cursor,
            message: None,
            sound: SoundPlayer::new(config.ui.muted),
            rng: StdRng::from_os_rng(),
            ai_due: None,
            last_flipped: Vec::new(),
            flip_until: None,
            should_quit: false,
        })
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.tick();
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Timer-driven work: expire the flip highlight and run the AI's move
    /// once its pacing delay has elapsed.
    fn tick(&mut self) {
        let now = Instant::now();
        if self.flip_until.is_some_and(|t| now >= t) {
            self.flip_until = None;
            self.last_flipped.clear();
        }
        if self.ai_due.is_some_and(|t| now >= t) {
            self.ai_due = None;
            if self.session.phase() == Phase::ComputerToMove {
                match self.session.computer_turn() {
                    Ok(report) => self.absorb(report),
                    Err(err) => self.message = Some(err.to_string()),
                }
            }
        }
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Up => {
                self.cursor.0 = self.cursor.0.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.cursor.0 + 1 < self.session.board().height() {
                    self.cursor.0 += 1;
                }
            }
            KeyCode::Left => {
                self.cursor.1 = self.cursor.1.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.cursor.1 + 1 < self.session.board().width() {
                    self.cursor.1 += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.place_at_cursor();
            }
            KeyCode::Char('r') => {
                self.reset();
            }
            KeyCode::Char('m') => {
                let muted = self.sound.toggle_muted();
                self.message = Some(if muted { "Muted." } else { "Unmuted." }.to_string());
            }
            _ => {}
        }
    }

    /// Attempt the human's placement at the cursor.
    fn place_at_cursor(&mut self) {
        let (row, col) = self.cursor;
        match self.session.place_disc(row, col) {
            Ok(report) => {
                self.message = None;
                self.sound.play(SoundKind::Place);
                self.absorb(report);
            }
            Err(MoveError::IllegalMove { .. }) => {
                self.message = Some("You can't play there.".to_string());
            }
            Err(MoveError::NotYourTurn) => {
                self.message = Some("Wait for the AI's move.".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' for a new game.".to_string());
            }
            Err(err @ MoveError::OutOfBounds { .. }) => {
                // The cursor is clamped to the board, so this is unreachable
                // through normal input.
                self.message = Some(err.to_string());
            }
        }
    }

    /// Fold a turn report into the UI state: flip highlight, messages,
    /// sounds, and the AI pacing timer.
    fn absorb(&mut self, report: TurnReport) {
        if !report.captured.is_empty() {
            self.sound.play(SoundKind::Flip);
            self.last_flipped = report.captured.clone();
            self.flip_until =
                Some(Instant::now() + Duration::from_millis(self.ui.flip_highlight_ms));
        }
        if let Some((row, col, Player::White)) = report.placed {
            self.message = Some(format!("AI played ({}, {}).", row + 1, col + 1));
        }

        for event in &report.events {
            if let Some(kind) = SoundKind::for_event(event) {
                self.sound.play(kind);
            }
            match event {
                GameEvent::Passed { by } => {
                    self.message = Some(match by {
                        Player::Black => "You have no legal move. You pass.".to_string(),
                        Player::White => "The AI has no legal move. It passes.".to_string(),
                    });
                }
                GameEvent::GameEnded { outcome, score } => {
                    self.message = Some(match outcome {
                        Outcome::Winner(Player::Black) => {
                            format!("You win {} to {}!", score.black, score.white)
                        }
                        Outcome::Winner(Player::White) => {
                            format!("The AI wins {} to {}.", score.white, score.black)
                        }
                        Outcome::Draw => {
                            format!("A draw, {} to {}.", score.black, score.white)
                        }
                    });
                }
                GameEvent::TurnChanged { .. } => {}
            }
        }

        if self.session.phase() == Phase::ComputerToMove {
            self.schedule_ai();
        }
    }

    /// Arm the AI timer with a random pacing delay.
    fn schedule_ai(&mut self) {
        let delay = self
            .rng
            .random_range(self.ui.ai_delay_min_ms..=self.ui.ai_delay_max_ms);
        self.ai_due = Some(Instant::now() + Duration::from_millis(delay));
    }

    fn reset(&mut self) {
        self.session.reset();
        self.ai_due = None;
        self.last_flipped.clear();
        self.flip_until = None;
        self.message = Some("New game started!".to_string());
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.session,
            self.cursor,
            &self.last_flipped,
            &self.message,
            self.sound.is_muted(),
        );
    }
}
