//! Ball/paddle collision detection and response
//!
//! Both paddles are tested every frame, player first. A hit does not reflect
//! the horizontal velocity; it forces the sign away from the paddle, so a ball
//! that stays inside a paddle for several frames keeps heading out.

use super::rect::Rect;
use super::state::{Ball, GameEvent, GameState, Paddle, Side};

/// Vertical velocity added for a hit.
///
/// The offset between centers is normalized by the paddle height (roughly
/// -0.5..0.5) and scaled by `factor`.
pub fn paddle_deflection(ball: &Rect, paddle: &Rect, factor: f32) -> f32 {
    let hit_pos = (ball.center_y() - paddle.center_y()) / paddle.height();
    hit_pos * factor
}

/// Apply a hit if the ball overlaps `paddle`. Returns whether it did.
///
/// The deflection is added to the current vertical velocity, so repeated
/// grazing contacts accumulate without bound.
pub fn resolve_paddle_hit(ball: &mut Ball, paddle: &Paddle, side: Side, factor: f32) -> bool {
    if !ball.rect.intersects(&paddle.rect) {
        return false;
    }

    ball.vel.x = ball.vel.x.abs() * side.away_sign();
    ball.vel.y += paddle_deflection(&ball.rect, &paddle.rect, factor);
    true
}

/// Test the ball against both paddles
pub fn check_collisions(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let factor = state.config.deflection;

    if resolve_paddle_hit(&mut state.ball, &state.player, Side::Player, factor) {
        events.push(GameEvent::PaddleHit(Side::Player));
    }
    if resolve_paddle_hit(&mut state.ball, &state.opponent, Side::Opponent, factor) {
        events.push(GameEvent::PaddleHit(Side::Opponent));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use glam::Vec2;

    fn state() -> GameState {
        GameState::new(GameConfig::default(), 1234)
    }

    /// Put the ball's left edge just inside the player paddle, centers aligned
    fn touch_player(state: &mut GameState, vel: Vec2) {
        let paddle = state.player.rect;
        state.ball.rect.set_left(paddle.right() - 2.0);
        state.ball.rect.pos.y = paddle.center_y() - state.ball.rect.height() / 2.0;
        state.ball.vel = vel;
    }

    #[test]
    fn test_player_hit_sends_ball_right() {
        let mut state = state();
        touch_player(&mut state, Vec2::new(-5.0, 5.0));

        let mut events = Vec::new();
        check_collisions(&mut state, &mut events);

        assert_eq!(state.ball.vel.x, 5.0);
        assert_eq!(events, vec![GameEvent::PaddleHit(Side::Player)]);
    }

    #[test]
    fn test_sign_assignment_is_idempotent() {
        let mut state = state();
        touch_player(&mut state, Vec2::new(5.0, 0.0));

        let mut events = Vec::new();
        check_collisions(&mut state, &mut events);
        check_collisions(&mut state, &mut events);

        // Still overlapping; no double negation
        assert_eq!(state.ball.vel.x, 5.0);
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_opponent_hit_sends_ball_left() {
        let mut state = state();
        let paddle = state.opponent.rect;
        state.ball.rect.set_right(paddle.left() + 2.0);
        state.ball.rect.pos.y = paddle.top();
        state.ball.vel = Vec2::new(5.0, -5.0);

        let mut events = Vec::new();
        check_collisions(&mut state, &mut events);

        assert_eq!(state.ball.vel.x, -5.0);
        assert_eq!(events, vec![GameEvent::PaddleHit(Side::Opponent)]);
    }

    #[test]
    fn test_deflection_is_added_not_replaced() {
        let mut state = state();
        let paddle = state.player.rect;
        state.ball.rect.set_left(paddle.right() - 2.0);
        // Ball center 25px below paddle center -> offset 0.25 -> +0.5
        state.ball.rect.set_center(Vec2::new(
            state.ball.rect.center().x,
            paddle.center_y() + 25.0,
        ));
        state.ball.vel = Vec2::new(-5.0, 5.0);

        let mut events = Vec::new();
        check_collisions(&mut state, &mut events);
        assert!((state.ball.vel.y - 5.5).abs() < 1e-5);

        // Still grazing next frame: keeps accumulating
        check_collisions(&mut state, &mut events);
        assert!((state.ball.vel.y - 6.0).abs() < 1e-5);
    }

    #[test]
    fn test_deflection_sign_follows_offset() {
        let paddle = Rect::new(30.0, 250.0, 15.0, 100.0);
        let above = Rect::new(40.0, 250.0, 15.0, 15.0);
        let below = Rect::new(40.0, 335.0, 15.0, 15.0);
        assert!(paddle_deflection(&above, &paddle, 2.0) < 0.0);
        assert!(paddle_deflection(&below, &paddle, 2.0) > 0.0);
        let centered = Rect::new(40.0, 292.5, 15.0, 15.0);
        assert_eq!(paddle_deflection(&centered, &paddle, 2.0), 0.0);
    }

    #[test]
    fn test_no_overlap_no_change() {
        let mut state = state();
        let vel = state.ball.vel;
        let mut events = Vec::new();
        check_collisions(&mut state, &mut events);
        assert_eq!(state.ball.vel, vel);
        assert!(events.is_empty());
    }

    #[test]
    fn test_both_paddles_apply_in_order() {
        // Degenerate layout: both paddles stacked on the ball
        let mut state = state();
        state.opponent.rect = state.player.rect;
        touch_player(&mut state, Vec2::new(-5.0, 0.0));

        let mut events = Vec::new();
        check_collisions(&mut state, &mut events);

        // Opponent is applied last and wins the sign
        assert_eq!(state.ball.vel.x, -5.0);
        assert_eq!(
            events,
            vec![
                GameEvent::PaddleHit(Side::Player),
                GameEvent::PaddleHit(Side::Opponent)
            ]
        );
    }
}
