//! Classic Pong entry point

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use env_logger::Env;
use glam::Vec2;

use classic_pong::platform::{FrameClock, NativePlatform};
use classic_pong::renderer::WgpuRenderer;
use classic_pong::{GameConfig, GameLoop};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    log::info!("Classic Pong starting...");

    let config = GameConfig::default();
    log::debug!("Config: {}", serde_json::to_string(&config)?);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    log::debug!("Seed: {}", seed);

    let mut platform = NativePlatform::new(&config)?;
    let window = platform.window().context("No window to render into")?;
    let screen = Vec2::new(config.screen_width, config.screen_height);
    let mut renderer = pollster::block_on(WgpuRenderer::new(window, screen))?;

    let mut game = GameLoop::new(config, seed);
    game.run(&mut renderer, &mut platform, &mut FrameClock::new())?;

    log::info!("Goodbye");
    Ok(())
}
