//! Score keeping and the terminal capture transition.

use crate::domain::sprite::Sprite;

/// Text pushed to the score display.
pub fn score_label(score: u32) -> String {
    format!("Score: {}", score)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    score: u32,
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self { score: 0 }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn label(&self) -> String {
        score_label(self.score)
    }

    /// Take `sprite` out of play and count it.
    ///
    /// Returns the new score, or `None` if the sprite was already captured
    /// (the score is left untouched).
    pub fn capture(&mut self, sprite: &mut Sprite) -> Option<u32> {
        if sprite.is_captured {
            return None;
        }
        sprite.is_captured = true;
        sprite.is_dragging = false;
        self.score = self.score.saturating_add(1);
        Some(self.score)
    }
}
