use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cmp::Ordering;

use super::board::{Board, Score};
use super::player::Player;
use super::rules;
use crate::ai::{self, Difficulty};
use crate::config::GameConfig;
use crate::error::{ConfigError, MoveError};

/// Final result of a finished game, decided purely by disc counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

/// Whose action the session is waiting for. `GameOver` is terminal; no
/// further placements are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    HumanToMove,
    ComputerToMove,
    GameOver(Outcome),
}

/// State transitions produced by a single operation, in the order they
/// occurred. A forced pass and the following turn change (or game end) arrive
/// together in one report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    TurnChanged { active: Player },
    Passed { by: Player },
    GameEnded { outcome: Outcome, score: Score },
}

/// Notification payload returned by every mutating session operation: a full
/// board snapshot for rendering, the placed disc and flipped coordinates for
/// animation, and the event sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub board: Board,
    pub placed: Option<(usize, usize, Player)>,
    pub captured: Vec<(usize, usize)>,
    pub score: Score,
    pub events: Vec<GameEvent>,
}

/// A single human-vs-computer game. The session exclusively owns the board
/// and drives all mutation; the human plays Black, the computer plays White.
///
/// Every operation is synchronous and atomic: a placement either fully
/// applies or is rejected without touching any state. Pacing between the
/// human's move and [`computer_turn`](Self::computer_turn) is the caller's
/// concern.
#[derive(Debug)]
pub struct GameSession {
    width: usize,
    height: usize,
    difficulty: Difficulty,
    board: Board,
    phase: Phase,
    rng: StdRng,
}

fn phase_for(player: Player) -> Phase {
    match player {
        Player::Black => Phase::HumanToMove,
        Player::White => Phase::ComputerToMove,
    }
}

impl GameSession {
    /// Create a session at the opening position, Black to move.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let board = Board::opening(config.width, config.height)?;
        Ok(GameSession {
            width: config.width,
            height: config.height,
            difficulty: config.difficulty,
            board,
            phase: Phase::HumanToMove,
            rng: StdRng::from_os_rng(),
        })
    }

    /// Replace the configuration and restart at the new opening.
    pub fn configure(
        &mut self,
        width: usize,
        height: usize,
        difficulty: Difficulty,
    ) -> Result<TurnReport, ConfigError> {
        super::board::validate_dimensions(width, height)?;
        self.width = width;
        self.height = height;
        self.difficulty = difficulty;
        Ok(self.start())
    }

    /// Reset to the opening for the current configuration, Black to move.
    pub fn start(&mut self) -> TurnReport {
        self.board = Board::opening(self.width, self.height)
            .expect("session dimensions were validated at construction");
        self.phase = Phase::HumanToMove;
        self.report(
            None,
            Vec::new(),
            vec![GameEvent::TurnChanged {
                active: Player::Black,
            }],
        )
    }

    /// Alias for [`start`](Self::start), matching the reset button.
    pub fn reset(&mut self) -> TurnReport {
        self.start()
    }

    /// Human placement at `(row, col)`. Rejected without mutation unless it
    /// is the human's turn and the placement captures at least one disc.
    pub fn place_disc(&mut self, row: usize, col: usize) -> Result<TurnReport, MoveError> {
        match self.phase {
            Phase::GameOver(_) => Err(MoveError::GameOver),
            Phase::ComputerToMove => Err(MoveError::NotYourTurn),
            Phase::HumanToMove => {
                if !self.board.contains(row, col) {
                    return Err(MoveError::OutOfBounds { row, col });
                }
                self.play(row, col, Player::Black)
            }
        }
    }

    /// Let the AI pick and apply its move. Only valid in `ComputerToMove`;
    /// the session never enters that phase without a legal move available.
    pub fn computer_turn(&mut self) -> Result<TurnReport, MoveError> {
        match self.phase {
            Phase::GameOver(_) => Err(MoveError::GameOver),
            Phase::HumanToMove => Err(MoveError::NotYourTurn),
            Phase::ComputerToMove => {
                let moves = rules::legal_moves(&self.board, Player::White);
                let mv = ai::select_move(&self.board, &moves, self.difficulty, &mut self.rng);
                self.play(mv.row, mv.col, Player::White)
            }
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn score(&self) -> Score {
        self.board.score()
    }

    /// The player whose turn it is, or `None` once the game is over.
    pub fn current_player(&self) -> Option<Player> {
        match self.phase {
            Phase::HumanToMove => Some(Player::Black),
            Phase::ComputerToMove => Some(Player::White),
            Phase::GameOver(_) => None,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    fn play(&mut self, row: usize, col: usize, player: Player) -> Result<TurnReport, MoveError> {
        let captured = rules::apply_move(&mut self.board, row, col, player);
        if captured.is_empty() {
            return Err(MoveError::IllegalMove { row, col });
        }
        let mut events = Vec::new();
        self.advance(player, &mut events);
        Ok(self.report(Some((row, col, player)), captured, events))
    }

    /// Advance the turn after `mover` placed a disc: hand the turn over,
    /// inserting a pass when the next player is stuck, and end the game when
    /// neither player has a legal move. That single condition is the
    /// authoritative game-over check; a full board implies it.
    fn advance(&mut self, mover: Player, events: &mut Vec<GameEvent>) {
        let next = mover.other();
        if !rules::legal_moves(&self.board, next).is_empty() {
            self.phase = phase_for(next);
            events.push(GameEvent::TurnChanged { active: next });
            return;
        }
        if !self.board.is_full() {
            events.push(GameEvent::Passed { by: next });
            if !rules::legal_moves(&self.board, mover).is_empty() {
                self.phase = phase_for(mover);
                events.push(GameEvent::TurnChanged { active: mover });
                return;
            }
        }
        let score = self.board.score();
        let outcome = match score.black.cmp(&score.white) {
            Ordering::Greater => Outcome::Winner(Player::Black),
            Ordering::Less => Outcome::Winner(Player::White),
            Ordering::Equal => Outcome::Draw,
        };
        self.phase = Phase::GameOver(outcome);
        events.push(GameEvent::GameEnded { outcome, score });
    }

    fn report(
        &self,
        placed: Option<(usize, usize, Player)>,
        captured: Vec<(usize, usize)>,
        events: Vec<GameEvent>,
    ) -> TurnReport {
        TurnReport {
            board: self.board.clone(),
            placed,
            captured,
            score: self.board.score(),
            events,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::board::Cell;
    use super::*;

    fn session(width: usize, height: usize, difficulty: Difficulty) -> GameSession {
        GameSession::new(&GameConfig {
            width,
            height,
            difficulty,
        })
        .unwrap()
    }

    #[test]
    fn test_new_session_starts_at_opening() {
        let session = session(8, 8, Difficulty::Normal);
        assert_eq!(session.phase(), Phase::HumanToMove);
        assert_eq!(session.current_player(), Some(Player::Black));
        assert_eq!(session.score(), Score { black: 2, white: 2 });
    }

    #[test]
    fn test_new_session_rejects_invalid_dimensions() {
        let result = GameSession::new(&GameConfig {
            width: 7,
            height: 8,
            difficulty: Difficulty::Normal,
        });
        assert!(matches!(
            result,
            Err(ConfigError::InvalidDimensions { width: 7, height: 8 })
        ));
    }

    #[test]
    fn test_configure_rejects_odd_width() {
        let mut session = session(8, 8, Difficulty::Normal);
        assert!(session.configure(7, 8, Difficulty::Normal).is_err());
        // The running game is untouched by the failed configure.
        assert_eq!(session.board().width(), 8);
    }

    #[test]
    fn test_opening_scenario_black_plays_2_3() {
        let mut session = session(8, 8, Difficulty::Normal);
        let report = session.place_disc(2, 3).unwrap();

        assert_eq!(report.placed, Some((2, 3, Player::Black)));
        assert_eq!(report.captured, vec![(3, 3)]);
        assert_eq!(report.score, Score { black: 4, white: 1 });
        assert_eq!(
            report.events,
            vec![GameEvent::TurnChanged {
                active: Player::White
            }]
        );
        assert_eq!(session.phase(), Phase::ComputerToMove);
    }

    #[test]
    fn test_computer_turn_normal_difficulty_is_deterministic() {
        let mut session = session(8, 8, Difficulty::Normal);
        session.place_disc(2, 3).unwrap();
        let report = session.computer_turn().unwrap();

        // All white replies capture one disc, so the first in row-major
        // order wins: (2, 2), flipping (3, 3) back.
        assert_eq!(report.placed, Some((2, 2, Player::White)));
        assert_eq!(report.captured, vec![(3, 3)]);
        assert_eq!(report.score, Score { black: 3, white: 3 });
        assert_eq!(session.phase(), Phase::HumanToMove);
    }

    #[test]
    fn test_place_rejected_when_not_humans_turn() {
        let mut session = session(8, 8, Difficulty::Normal);
        session.place_disc(2, 3).unwrap();
        assert_eq!(session.place_disc(2, 2), Err(MoveError::NotYourTurn));
        assert_eq!(session.computer_turn().unwrap().placed.unwrap().2, Player::White);
    }

    #[test]
    fn test_computer_turn_rejected_when_humans_turn() {
        let mut session = session(8, 8, Difficulty::Normal);
        assert_eq!(session.computer_turn(), Err(MoveError::NotYourTurn));
    }

    #[test]
    fn test_zero_capture_placement_rejected_without_mutation() {
        let mut session = session(8, 8, Difficulty::Normal);
        let before = session.board().clone();
        assert_eq!(
            session.place_disc(0, 0),
            Err(MoveError::IllegalMove { row: 0, col: 0 })
        );
        assert_eq!(
            session.place_disc(3, 3),
            Err(MoveError::IllegalMove { row: 3, col: 3 })
        );
        assert_eq!(session.board(), &before);
        assert_eq!(session.phase(), Phase::HumanToMove);
    }

    #[test]
    fn test_out_of_bounds_placement_rejected() {
        let mut session = session(8, 8, Difficulty::Normal);
        assert_eq!(
            session.place_disc(8, 0),
            Err(MoveError::OutOfBounds { row: 8, col: 0 })
        );
    }

    #[test]
    fn test_reset_restores_opening_after_progress() {
        let mut session = session(8, 8, Difficulty::Normal);
        let opening = session.board().clone();
        session.place_disc(2, 3).unwrap();
        session.computer_turn().unwrap();

        let report = session.reset();
        assert_eq!(session.board(), &opening);
        assert_eq!(session.phase(), Phase::HumanToMove);
        assert_eq!(report.score, Score { black: 2, white: 2 });
        assert!(report.placed.is_none());
        assert!(report.captured.is_empty());
    }

    /// Clear the board, leaving only the caller's discs.
    fn clear(session: &mut GameSession) {
        for row in 0..session.board.height() {
            for col in 0..session.board.width() {
                session.board.set(row, col, Cell::Empty);
            }
        }
    }

    #[test]
    fn test_forced_pass_skips_back_to_opponent() {
        let mut session = session(6, 6, Difficulty::Normal);
        clear(&mut session);
        // Black captures (0, 1), after which White has no reply anywhere but
        // Black can still take (3, 0) over the white disc at (4, 0).
        session.board.set(0, 0, Cell::Black);
        session.board.set(0, 1, Cell::White);
        session.board.set(4, 0, Cell::White);
        session.board.set(5, 0, Cell::Black);

        let report = session.place_disc(0, 2).unwrap();
        assert_eq!(report.captured, vec![(0, 1)]);
        assert_eq!(
            report.events,
            vec![
                GameEvent::Passed { by: Player::White },
                GameEvent::TurnChanged {
                    active: Player::Black
                },
            ]
        );
        assert_eq!(session.phase(), Phase::HumanToMove);

        let report = session.place_disc(3, 0).unwrap();
        assert_eq!(report.captured, vec![(4, 0)]);
    }

    #[test]
    fn test_double_pass_ends_the_game() {
        let mut session = session(6, 6, Difficulty::Normal);
        clear(&mut session);
        // After Black captures the only white disc, neither side has a move.
        session.board.set(0, 0, Cell::Black);
        session.board.set(0, 1, Cell::White);

        let report = session.place_disc(0, 2).unwrap();
        let score = Score { black: 3, white: 0 };
        assert_eq!(
            report.events,
            vec![
                GameEvent::Passed { by: Player::White },
                GameEvent::GameEnded {
                    outcome: Outcome::Winner(Player::Black),
                    score,
                },
            ]
        );
        assert_eq!(session.phase(), Phase::GameOver(Outcome::Winner(Player::Black)));
        assert!(session.is_over());
        assert_eq!(session.current_player(), None);
    }

    #[test]
    fn test_game_over_rejects_everything() {
        let mut session = session(6, 6, Difficulty::Normal);
        clear(&mut session);
        session.board.set(0, 0, Cell::Black);
        session.board.set(0, 1, Cell::White);
        session.place_disc(0, 2).unwrap();

        assert_eq!(session.place_disc(0, 3), Err(MoveError::GameOver));
        assert_eq!(session.computer_turn(), Err(MoveError::GameOver));
    }

    #[test]
    fn test_equal_scores_draw() {
        let mut session = session(6, 6, Difficulty::Normal);
        clear(&mut session);
        // Black's capture leaves three discs each and no further moves: the
        // bottom-row whites are isolated, so neither side can bracket again.
        session.board.set(0, 0, Cell::Black);
        session.board.set(0, 1, Cell::White);
        session.board.set(5, 1, Cell::White);
        session.board.set(5, 3, Cell::White);
        session.board.set(5, 5, Cell::White);

        let report = session.place_disc(0, 2).unwrap();
        match report.events.last().unwrap() {
            GameEvent::GameEnded { outcome, score } => {
                assert_eq!(*outcome, Outcome::Draw);
                assert_eq!(*score, Score { black: 3, white: 3 });
            }
            other => panic!("expected GameEnded, got {other:?}"),
        }
    }

    #[test]
    fn test_full_game_terminates_on_every_difficulty() {
        for difficulty in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            let mut session = session(6, 6, difficulty);
            let max_placements = 6 * 6;
            for _ in 0..max_placements {
                match session.phase() {
                    Phase::HumanToMove => {
                        let mv = rules::legal_moves(session.board(), Player::Black)[0];
                        session.place_disc(mv.row, mv.col).unwrap();
                    }
                    Phase::ComputerToMove => {
                        session.computer_turn().unwrap();
                    }
                    Phase::GameOver(_) => break,
                }
            }
            assert!(session.is_over(), "{difficulty} game did not terminate");
            let score = session.score();
            assert!(score.black + score.white <= 36);
        }
    }
}
