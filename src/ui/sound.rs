use std::io::{self, Write};

use crate::game::{GameEvent, Outcome, Player};

/// The notification kinds the audio collaborator reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundKind {
    Place,
    Flip,
    Pass,
    Win,
    Lose,
    Draw,
}

impl SoundKind {
    /// Map a game event to its sound, from the human's perspective.
    pub fn for_event(event: &GameEvent) -> Option<SoundKind> {
        match event {
            GameEvent::Passed { .. } => Some(SoundKind::Pass),
            GameEvent::GameEnded { outcome, .. } => Some(match outcome {
                Outcome::Winner(Player::Black) => SoundKind::Win,
                Outcome::Winner(Player::White) => SoundKind::Lose,
                Outcome::Draw => SoundKind::Draw,
            }),
            GameEvent::TurnChanged { .. } => None,
        }
    }
}

/// Plays sound effects, honoring a mute flag. A terminal has one sound, so
/// every kind maps to the BEL character.
#[derive(Debug)]
pub struct SoundPlayer {
    muted: bool,
}

impl SoundPlayer {
    pub fn new(muted: bool) -> Self {
        SoundPlayer { muted }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn toggle_muted(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Emit the effect for `kind` unless muted. Output errors are ignored;
    /// sound is best-effort.
    pub fn play(&self, _kind: SoundKind) {
        if self.muted {
            return;
        }
        let mut stdout = io::stdout();
        let _ = stdout.write_all(b"\x07");
        let _ = stdout.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Score;

    #[test]
    fn test_event_sound_mapping() {
        assert_eq!(
            SoundKind::for_event(&GameEvent::Passed { by: Player::White }),
            Some(SoundKind::Pass)
        );
        assert_eq!(
            SoundKind::for_event(&GameEvent::TurnChanged {
                active: Player::Black
            }),
            None
        );
        let ended = |outcome| GameEvent::GameEnded {
            outcome,
            score: Score::default(),
        };
        assert_eq!(
            SoundKind::for_event(&ended(Outcome::Winner(Player::Black))),
            Some(SoundKind::Win)
        );
        assert_eq!(
            SoundKind::for_event(&ended(Outcome::Winner(Player::White))),
            Some(SoundKind::Lose)
        );
        assert_eq!(
            SoundKind::for_event(&ended(Outcome::Draw)),
            Some(SoundKind::Draw)
        );
    }

    #[test]
    fn test_toggle_muted() {
        let mut player = SoundPlayer::new(false);
        assert!(!player.is_muted());
        assert!(player.toggle_muted());
        assert!(!player.toggle_muted());
    }
}
