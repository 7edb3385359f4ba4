//! Classic Pong - two paddles, one ball, first to seven
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, scoring)
//! - `game`: Per-frame orchestration of input, simulation and drawing
//! - `renderer`: Draw commands and the wgpu backend
//! - `platform`: Native window, input events and frame pacing
//! - `config`: Game constants
//! - `theme`: Color palettes

pub mod config;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod theme;

pub use config::GameConfig;
pub use game::GameLoop;
pub use theme::{Color, Palette, Theme};
