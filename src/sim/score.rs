//! Score counters and the win condition

use super::rect::Rect;
use super::state::Side;

/// Running score for one match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTracker {
    pub player: u32,
    pub opponent: u32,
    /// First side to reach this wins
    pub winning_score: u32,
}

impl ScoreTracker {
    pub fn new(winning_score: u32) -> Self {
        Self {
            player: 0,
            opponent: 0,
            winning_score,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }

    /// Give `side` a point. Counters are frozen once the match is decided.
    pub fn award(&mut self, side: Side) {
        if self.winner().is_some() {
            return;
        }
        match side {
            Side::Player => self.player += 1,
            Side::Opponent => self.opponent += 1,
        }
    }

    /// Player is checked first
    pub fn winner(&self) -> Option<Side> {
        if self.player >= self.winning_score {
            Some(Side::Player)
        } else if self.opponent >= self.winning_score {
            Some(Side::Opponent)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.player = 0;
        self.opponent = 0;
    }
}

/// Side that earns a point when the ball leaves the court, if any.
///
/// Leaving on the left scores for the opponent, on the right for the player.
/// The left edge is checked first.
pub fn scoring_side(ball: &Rect, screen_width: f32) -> Option<Side> {
    if ball.left() <= 0.0 {
        Some(Side::Opponent)
    } else if ball.right() >= screen_width {
        Some(Side::Player)
    } else {
        None
    }
}
