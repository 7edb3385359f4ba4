//! Game state and core simulation types
//!
//! Everything one match needs lives in [`GameState`], owned by the game loop.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::rect::Rect;
use super::score::ScoreTracker;
use crate::config::GameConfig;
use crate::theme::Theme;

/// Which paddle a thing belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Human, left paddle
    Player,
    /// Computer, right paddle
    Opponent,
}

impl Side {
    /// Display name used in the winner banner
    pub fn name(&self) -> &'static str {
        match self {
            Side::Player => "Player",
            Side::Opponent => "Computer",
        }
    }

    /// Horizontal direction pointing away from this side's paddle
    pub fn away_sign(&self) -> f32 {
        match self {
            Side::Player => 1.0,
            Side::Opponent => -1.0,
        }
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    Playing,
    /// Frozen until restart
    GameOver { winner: Side },
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Ball touched the top or bottom wall
    WallBounce,
    /// Ball overlapped a paddle
    PaddleHit(Side),
    /// A point was awarded
    Scored { side: Side, player: u32, opponent: u32 },
    /// Threshold reached
    MatchWon(Side),
}

/// A vertically moving paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    pub rect: Rect,
    /// Vertical speed in pixels per frame (negative is up)
    pub speed: i32,
}

impl Paddle {
    pub fn new(x: f32, y: f32, config: &GameConfig) -> Self {
        Self {
            rect: Rect::new(x, y, config.paddle_width, config.paddle_height),
            speed: 0,
        }
    }

    pub fn set_speed(&mut self, speed: i32) {
        self.speed = speed;
    }

    /// Apply speed, then clamp to the screen
    pub fn advance(&mut self, screen_height: f32) {
        self.rect.pos.y += self.speed as f32;
        if self.rect.top() < 0.0 {
            self.rect.set_top(0.0);
        }
        if self.rect.bottom() > screen_height {
            self.rect.set_bottom(screen_height);
        }
    }
}

/// The ball. Its rect is the bounding box of the drawn ellipse.
#[derive(Debug, Clone)]
pub struct Ball {
    pub rect: Rect,
    /// Pixels per frame
    pub vel: Vec2,
}

impl Ball {
    /// A centered ball with a random direction
    pub fn new(config: &GameConfig, rng: &mut impl Rng) -> Self {
        let mut ball = Self {
            rect: Rect::new(0.0, 0.0, config.ball_size, config.ball_size),
            vel: Vec2::ZERO,
        };
        ball.reset(config, rng);
        ball
    }

    /// Apply velocity and bounce off the top/bottom walls.
    ///
    /// The position is not pushed back inside, so a fast ball may overlap a
    /// wall for a frame. Returns true when the vertical velocity flipped.
    pub fn advance(&mut self, screen_height: f32) -> bool {
        self.rect.pos += self.vel;

        if self.rect.top() <= 0.0 || self.rect.bottom() >= screen_height {
            self.vel.y = -self.vel.y;
            return true;
        }
        false
    }

    /// Recenter and pick one of the four diagonal directions
    pub fn reset(&mut self, config: &GameConfig, rng: &mut impl Rng) {
        self.rect.set_center(Vec2::new(
            config.screen_width / 2.0,
            config.screen_height / 2.0,
        ));
        self.vel = Vec2::new(
            config.ball_speed_x * random_sign(rng),
            config.ball_speed_y * random_sign(rng),
        );
    }
}

fn random_sign(rng: &mut impl Rng) -> f32 {
    if rng.random_bool(0.5) { 1.0 } else { -1.0 }
}

/// Complete match state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    pub score: ScoreTracker,
    pub phase: MatchState,
    pub theme: Theme,
    /// Ticks simulated while playing
    pub time_ticks: u64,
    rng: Pcg32,
}

impl GameState {
    /// Create a fresh match with the given RNG seed
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let start_y = config.paddle_start_y();

        Self {
            player: Paddle::new(config.player_paddle_x(), start_y, &config),
            opponent: Paddle::new(config.opponent_paddle_x(), start_y, &config),
            ball: Ball::new(&config, &mut rng),
            score: ScoreTracker::new(config.winning_score),
            phase: MatchState::Playing,
            theme: Theme::default(),
            time_ticks: 0,
            config,
            rng,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase == MatchState::Playing
    }

    /// Winner of a finished match
    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            MatchState::GameOver { winner } => Some(winner),
            MatchState::Playing => None,
        }
    }

    /// Recenter the ball with a fresh random direction
    pub fn reset_ball(&mut self) {
        self.ball.reset(&self.config, &mut self.rng);
    }

    /// Back to 0-0 with the initial layout. The theme is kept.
    pub fn restart(&mut self) {
        self.score.reset();
        self.phase = MatchState::Playing;
        self.reset_ball();

        let start_y = self.config.paddle_start_y();
        self.player.rect.set_top(start_y);
        self.opponent.rect.set_top(start_y);
        self.player.speed = 0;
        self.opponent.speed = 0;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }
}
