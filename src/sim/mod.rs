//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed step per frame, no wall-clock time
//! - Seeded RNG only
//! - No rendering, platform or logging dependencies

pub mod collision;
pub mod rect;
pub mod score;
pub mod state;
pub mod tick;

pub use collision::{check_collisions, paddle_deflection, resolve_paddle_hit};
pub use rect::Rect;
pub use score::{ScoreTracker, scoring_side};
pub use state::{Ball, GameEvent, GameState, MatchState, Paddle, Side};
pub use tick::{TickInput, check_game_over, check_scoring, opponent_speed, player_speed, tick};
