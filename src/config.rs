//! Built-in game configuration
//!
//! Sizes, speeds and rules of the match. Built in at compile time and never
//! read from disk.

use serde::{Deserialize, Serialize};

/// Immutable configuration owned by the game loop
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Window title
    pub title: String,

    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Target frames per second
    pub fps: u32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Player paddle speed (pixels/frame)
    pub paddle_speed: i32,
    /// Gap between a paddle and its side wall
    pub paddle_margin: f32,
    /// Speed the opponent gives up relative to the player
    pub ai_handicap: i32,

    // === Ball ===
    pub ball_size: f32,
    pub ball_speed_x: f32,
    pub ball_speed_y: f32,
    /// Vertical velocity added per unit of normalized hit offset
    pub deflection: f32,

    // === Match ===
    pub winning_score: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "Pong Game".to_string(),

            screen_width: 800.0,
            screen_height: 600.0,
            fps: 60,

            paddle_width: 15.0,
            paddle_height: 100.0,
            paddle_speed: 7,
            paddle_margin: 30.0,
            ai_handicap: 1,

            ball_size: 15.0,
            ball_speed_x: 5.0,
            ball_speed_y: 5.0,
            deflection: 2.0,

            winning_score: 7,
        }
    }
}

impl GameConfig {
    /// Opponent paddle speed magnitude
    pub fn opponent_speed(&self) -> i32 {
        self.paddle_speed - self.ai_handicap
    }

    /// Top edge that vertically centers a paddle
    pub fn paddle_start_y(&self) -> f32 {
        self.screen_height / 2.0 - self.paddle_height / 2.0
    }

    /// Starting x of the player (left) paddle
    pub fn player_paddle_x(&self) -> f32 {
        self.paddle_margin
    }

    /// Starting x of the opponent (right) paddle
    pub fn opponent_paddle_x(&self) -> f32 {
        self.screen_width - self.paddle_margin - self.paddle_width
    }
}
