use crate::world_data::{GameState, Side};

/// Scripted right paddle: chase the ball's vertical centre at a fixed speed,
/// holding still while within the deadband.
pub fn move_opponent(state: &mut GameState) {
    let config = &state.config;
    let target = state.ball.center_y();
    let paddle = &mut state.paddles[Side::Right.index()];
    let center = paddle.center_y();

    if center < target - config.opponent_deadband {
        paddle.position.y += config.opponent_speed;
    } else if center > target + config.opponent_deadband {
        paddle.position.y -= config.opponent_speed;
    }

    paddle.position.y = config.clamp_paddle_y(paddle.position.y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GameConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn setup_state(ball_center_y: f32, paddle_y: f32) -> GameState {
        let mut rng = StdRng::seed_from_u64(11);
        let mut state = GameState::new(GameConfig::default(), &mut rng);
        state.ball.position.y = ball_center_y - state.ball.size / 2.0;
        state.paddle_mut(Side::Right).position.y = paddle_y;
        state
    }

    #[test]
    fn test_moves_down_toward_lower_ball() {
        // Paddle centre 140, ball centre 300.
        let mut state = setup_state(300.0, 100.0);

        move_opponent(&mut state);

        assert_eq!(state.paddle(Side::Right).position.y, 103.0);
    }

    #[test]
    fn test_moves_up_toward_higher_ball() {
        let mut state = setup_state(50.0, 100.0);

        move_opponent(&mut state);

        assert_eq!(state.paddle(Side::Right).position.y, 97.0);
    }

    #[test]
    fn test_holds_inside_deadband() {
        let mut state = setup_state(150.0, 100.0);
        move_opponent(&mut state);
        assert_eq!(state.paddle(Side::Right).position.y, 100.0);

        // Exactly on the edge of the deadband still holds.
        let mut state = setup_state(130.0, 100.0);
        move_opponent(&mut state);
        assert_eq!(state.paddle(Side::Right).position.y, 100.0);
    }

    #[test]
    fn test_clamped_at_bottom() {
        let mut state = setup_state(495.0, 419.0);

        move_opponent(&mut state);

        assert_eq!(state.paddle(Side::Right).position.y, 420.0);
    }

    #[test]
    fn test_clamped_at_top() {
        let mut state = setup_state(2.0, 1.0);

        move_opponent(&mut state);

        assert_eq!(state.paddle(Side::Right).position.y, 0.0);
    }
}
