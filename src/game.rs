//! Game loop orchestration
//!
//! One [`GameLoop::frame`] is one tick: drain commands, step the simulation,
//! draw. [`GameLoop::run`] repeats it under the frame clock until quit.

use glam::Vec2;

use crate::config::GameConfig;
use crate::platform::{Clock, InputEvent, InputSource, Key};
use crate::renderer::Renderer;
use crate::sim::{GameEvent, GameState, Rect, TickInput, tick};

/// Font size of scores and the winner banner
const LARGE_FONT: f32 = 74.0;
/// Font size of the restart hint
const SMALL_FONT: f32 = 36.0;
/// Center line dash geometry
const DASH_WIDTH: f32 = 4.0;
const DASH_HEIGHT: f32 = 20.0;
const DASH_SPACING: f32 = 40.0;

/// Owns the match for the life of the process
pub struct GameLoop {
    pub state: GameState,
    running: bool,
}

impl GameLoop {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            state: GameState::new(config, seed),
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Apply one discrete command
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => self.running = false,
            InputEvent::KeyDown(Key::T) => {
                self.state.toggle_theme();
                log::info!("Theme: {}", self.state.theme.as_str());
            }
            InputEvent::KeyDown(Key::R) if !self.state.is_playing() => {
                self.state.restart();
                log::info!("Match restarted");
            }
            InputEvent::KeyDown(Key::Q) if !self.state.is_playing() => {
                self.running = false;
            }
            InputEvent::KeyDown(_) => {}
        }
    }

    /// Run a single tick and draw it
    pub fn frame<R: Renderer, I: InputSource>(
        &mut self,
        renderer: &mut R,
        input: &mut I,
    ) -> anyhow::Result<()> {
        for event in input.poll_events() {
            self.handle_event(event);
        }
        if !self.running {
            return Ok(());
        }

        let tick_input = TickInput {
            up: input.is_key_held(Key::Up),
            down: input.is_key_held(Key::Down),
        };
        let events = tick(&mut self.state, &tick_input);
        self.log_events(&events);

        draw(&self.state, renderer)
    }

    /// Loop until quit. Render failures end the loop with an error.
    pub fn run<R: Renderer, I: InputSource, C: Clock>(
        &mut self,
        renderer: &mut R,
        input: &mut I,
        clock: &mut C,
    ) -> anyhow::Result<()> {
        let fps = self.state.config.fps;
        while self.running {
            self.frame(renderer, input)?;
            clock.tick(fps);
        }
        log::info!(
            "Quitting at {}-{}",
            self.state.score.player,
            self.state.score.opponent
        );
        Ok(())
    }

    fn log_events(&self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::WallBounce => log::debug!("Wall bounce"),
                GameEvent::PaddleHit(side) => {
                    log::debug!("{} paddle hit, ball velocity {:?}", side.name(), self.state.ball.vel)
                }
                GameEvent::Scored {
                    side,
                    player,
                    opponent,
                } => log::info!("{} scores ({}-{})", side.name(), player, opponent),
                GameEvent::MatchWon(side) => log::info!("{} wins!", side.name()),
            }
        }
    }
}

/// Draw one frame of `state` with its active theme
pub fn draw(state: &GameState, renderer: &mut impl Renderer) -> anyhow::Result<()> {
    let config = &state.config;
    let palette = state.theme.palette();
    let (width, height) = (config.screen_width, config.screen_height);

    renderer.clear(palette.background);

    // Center line
    let mut y = 0.0;
    while y < height {
        renderer.fill_rect(
            Rect::new(width / 2.0 - DASH_WIDTH / 2.0, y, DASH_WIDTH, DASH_HEIGHT),
            palette.foreground,
        );
        y += DASH_SPACING;
    }

    renderer.fill_rect(state.player.rect, palette.foreground);
    renderer.fill_rect(state.opponent.rect, palette.foreground);
    renderer.fill_ellipse(state.ball.rect, palette.accent);

    let player_text = renderer.draw_text(&state.score.player.to_string(), LARGE_FONT, palette.foreground);
    let opponent_text =
        renderer.draw_text(&state.score.opponent.to_string(), LARGE_FONT, palette.foreground);
    renderer.blit(&player_text, Vec2::new(width / 4.0, 30.0));
    renderer.blit(
        &opponent_text,
        Vec2::new(3.0 * width / 4.0 - opponent_text.width(), 30.0),
    );

    if let Some(winner) = state.winner() {
        let banner = renderer.draw_text(&format!("{} Wins!", winner.name()), LARGE_FONT, palette.accent);
        let hint = renderer.draw_text("Press R to Restart or Q to Quit", SMALL_FONT, palette.foreground);
        renderer.blit(
            &banner,
            Vec2::new(width / 2.0 - banner.width() / 2.0, height / 2.0 - 50.0),
        );
        renderer.blit(
            &hint,
            Vec2::new(width / 2.0 - hint.width() / 2.0, height / 2.0 + 50.0),
        );
    }

    renderer.present()
}
