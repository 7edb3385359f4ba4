//! Per-frame simulation tick
//!
//! Order within a tick: player input, opponent AI, movement, collisions,
//! scoring. Nothing here runs once the match is over.

use super::collision::check_collisions;
use super::score::scoring_side;
use super::state::{GameEvent, GameState, MatchState, Side};

/// Direction keys held during this tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
}

/// Player paddle speed from held keys. Up wins when both are held.
pub fn player_speed(input: &TickInput, speed: i32) -> i32 {
    if input.up {
        -speed
    } else if input.down {
        speed
    } else {
        0
    }
}

/// Reactive opponent: chase the ball's vertical center at `speed`.
pub fn opponent_speed(paddle_center_y: f32, ball_center_y: f32, speed: i32) -> i32 {
    if paddle_center_y < ball_center_y {
        speed
    } else if paddle_center_y > ball_center_y {
        -speed
    } else {
        0
    }
}

/// Award a point if the ball has left the court, then run the win check
pub fn check_scoring(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let Some(side) = scoring_side(&state.ball.rect, state.config.screen_width) else {
        return;
    };

    state.score.award(side);
    state.reset_ball();
    events.push(GameEvent::Scored {
        side,
        player: state.score.player,
        opponent: state.score.opponent,
    });

    if let Some(winner) = check_game_over(state) {
        events.push(GameEvent::MatchWon(winner));
    }
}

/// End the match if either side reached the winning score
pub fn check_game_over(state: &mut GameState) -> Option<Side> {
    let winner = state.score.winner()?;
    state.phase = MatchState::GameOver { winner };
    Some(winner)
}

/// Advance the match by one frame
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !state.is_playing() {
        return events;
    }

    state.time_ticks += 1;

    let speed = player_speed(input, state.config.paddle_speed);
    state.player.set_speed(speed);

    let ai = opponent_speed(
        state.opponent.rect.center_y(),
        state.ball.rect.center_y(),
        state.config.opponent_speed(),
    );
    state.opponent.set_speed(ai);

    let height = state.config.screen_height;
    state.player.advance(height);
    state.opponent.advance(height);
    if state.ball.advance(height) {
        events.push(GameEvent::WallBounce);
    }

    check_collisions(state, &mut events);
    check_scoring(state, &mut events);

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use glam::Vec2;

    fn state() -> GameState {
        GameState::new(GameConfig::default(), 12345)
    }

    #[test]
    fn test_player_speed_from_keys() {
        let up = TickInput { up: true, down: false };
        let down = TickInput { up: false, down: true };
        let both = TickInput { up: true, down: true };
        assert_eq!(player_speed(&up, 7), -7);
        assert_eq!(player_speed(&down, 7), 7);
        assert_eq!(player_speed(&TickInput::default(), 7), 0);
        assert_eq!(player_speed(&both, 7), -7);
    }

    #[test]
    fn test_opponent_follows_ball() {
        // Paddle above ball (smaller y) moves down
        assert_eq!(opponent_speed(100.0, 300.0, 6), 6);
        assert_eq!(opponent_speed(500.0, 300.0, 6), -6);
        assert_eq!(opponent_speed(300.0, 300.0, 6), 0);
    }

    #[test]
    fn test_tick_moves_paddles_and_ball() {
        let mut state = state();
        state.ball.vel = Vec2::new(5.0, 5.0);
        let ball_before = state.ball.rect.pos;

        tick(&mut state, &TickInput { up: true, down: false });

        assert_eq!(state.player.rect.top(), 243.0);
        // AI reads the ball before it moves; both start level
        assert_eq!(state.opponent.speed, 0);
        assert_eq!(state.ball.rect.pos, ball_before + Vec2::new(5.0, 5.0));
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_tick_ai_is_handicapped() {
        let mut state = state();
        state.ball.rect.pos.y = 500.0;
        state.ball.vel = Vec2::new(-5.0, 0.0);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.opponent.speed, 6);
        assert_eq!(state.opponent.rect.top(), 256.0);
    }

    #[test]
    fn test_player_scores_on_right_exit() {
        let mut state = state();
        state.ball.rect.set_right(state.config.screen_width + 10.0);

        let mut events = Vec::new();
        check_scoring(&mut state, &mut events);

        assert_eq!(state.score.player, 1);
        assert_eq!(state.score.opponent, 0);
        assert_eq!(state.ball.rect.center(), Vec2::new(400.0, 300.0));
        assert!(state.is_playing());
        assert_eq!(
            events,
            vec![GameEvent::Scored {
                side: Side::Player,
                player: 1,
                opponent: 0
            }]
        );
    }

    #[test]
    fn test_opponent_scores_on_left_exit() {
        let mut state = state();
        state.ball.rect.set_left(-10.0);

        let mut events = Vec::new();
        check_scoring(&mut state, &mut events);

        assert_eq!(state.score.player, 0);
        assert_eq!(state.score.opponent, 1);
        assert_eq!(state.ball.rect.center(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_no_score_inside_court() {
        let mut state = state();
        let mut events = Vec::new();
        check_scoring(&mut state, &mut events);
        assert_eq!((state.score.player, state.score.opponent), (0, 0));
        assert!(events.is_empty());
    }

    #[test]
    fn test_match_point_ends_game() {
        let mut state = state();
        state.score.player = state.config.winning_score - 1;
        state.ball.rect.set_right(state.config.screen_width + 1.0);

        let mut events = Vec::new();
        check_scoring(&mut state, &mut events);

        assert_eq!(
            state.phase,
            MatchState::GameOver {
                winner: Side::Player
            }
        );
        assert_eq!(events.last(), Some(&GameEvent::MatchWon(Side::Player)));
    }

    #[test]
    fn test_game_over_freezes_everything() {
        let mut state = state();
        state.score.player = 7;
        assert_eq!(check_game_over(&mut state), Some(Side::Player));

        // Out of the court, would score if the match were still running
        state.ball.rect.set_left(-50.0);
        let ball = state.ball.rect;
        let vel = state.ball.vel;
        let player = state.player.rect;
        let opponent = state.opponent.rect;

        for _ in 0..10 {
            let events = tick(&mut state, &TickInput { up: true, down: false });
            assert!(events.is_empty());
        }

        assert_eq!(state.ball.rect, ball);
        assert_eq!(state.ball.vel, vel);
        assert_eq!(state.player.rect, player);
        assert_eq!(state.opponent.rect, opponent);
        assert_eq!((state.score.player, state.score.opponent), (7, 0));
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_computer_win_detection() {
        let mut state = state();
        state.score.opponent = state.config.winning_score;
        assert_eq!(check_game_over(&mut state), Some(Side::Opponent));
        assert_eq!(state.winner(), Some(Side::Opponent));
    }

    #[test]
    fn test_win_check_does_not_fire_early() {
        let mut state = state();
        state.score.player = 6;
        state.score.opponent = 6;
        assert_eq!(check_game_over(&mut state), None);
        assert!(state.is_playing());
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::new(GameConfig::default(), 99999);
        let mut b = GameState::new(GameConfig::default(), 99999);
        let inputs = [
            TickInput { up: true, down: false },
            TickInput::default(),
            TickInput { up: false, down: true },
        ];

        for _ in 0..300 {
            for input in &inputs {
                tick(&mut a, input);
                tick(&mut b, input);
            }
        }

        assert_eq!(a.ball.rect, b.ball.rect);
        assert_eq!(a.score, b.score);
        assert_eq!(a.player.rect, b.player.rect);
    }
}
