use crate::input::{apply_input, InputState};
use crate::opponent::move_opponent;
use crate::world_data::{GameState, GameStatus, Paddle, Side};
use log::{debug, info};
use rand::Rng;

/// What happened during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepEvents {
    pub wall_bounce: bool,
    /// Last paddle to touch the ball this frame.
    pub paddle_hit: Option<Side>,
    pub point: Option<Side>,
    /// Set only on the frame the game ends.
    pub winner: Option<Side>,
}

/// Advances the game by one frame. Does nothing once the game is over.
pub fn step(state: &mut GameState, input: &mut InputState, rng: &mut impl Rng) -> StepEvents {
    let mut events = StepEvents::default();

    if state.is_over() {
        return events;
    }

    apply_input(state, input);

    let ball = &mut state.ball;
    ball.position += ball.velocity;

    events.wall_bounce = bounce_off_walls(state);

    // Right is evaluated after left and overwrites it when both match.
    for side in [Side::Left, Side::Right] {
        if bounce_off_paddle(state, side) {
            events.paddle_hit = Some(side);
        }
    }

    if let Some(scorer) = scoring_side(state) {
        events.point = Some(scorer);
        events.winner = award_point(state, scorer, rng);
    }

    move_opponent(state);

    events
}

fn bounce_off_walls(state: &mut GameState) -> bool {
    let config = &state.config;
    let ball = &mut state.ball;

    if ball.top() <= 0.0 || ball.bottom() >= config.world_height {
        ball.velocity.y = -ball.velocity.y;
        ball.position.y = config.clamp_ball_y(ball.position.y);
        return true;
    }

    false
}

fn is_touching(state: &GameState, paddle: &Paddle) -> bool {
    let ball = &state.ball;
    let reached = match paddle.side {
        Side::Left => ball.left() <= paddle.position.x + paddle.width,
        Side::Right => ball.right() >= paddle.position.x,
    };

    reached && ball.overlaps_vertically(paddle)
}

fn bounce_off_paddle(state: &mut GameState, side: Side) -> bool {
    let paddle = state.paddle(side);
    if !is_touching(state, paddle) {
        return false;
    }

    let offset = state.ball.center_y() - paddle.center_y();
    let spin = offset * state.config.spin_factor;
    let ball = &mut state.ball;

    ball.velocity.x = match side {
        Side::Left => ball.velocity.x.abs(),
        Side::Right => -ball.velocity.x.abs(),
    };
    ball.velocity.y = spin;

    debug!("Ball hit the {} paddle, spin {:.2}", side, spin);
    true
}

fn scoring_side(state: &GameState) -> Option<Side> {
    let ball = &state.ball;

    if ball.left() < 0.0 {
        Some(Side::Right)
    } else if ball.right() > state.config.world_width {
        Some(Side::Left)
    } else {
        None
    }
}

/// Returns the winner if this point ended the game.
fn award_point(state: &mut GameState, scorer: Side, rng: &mut impl Rng) -> Option<Side> {
    let points = state.score.increment(scorer);
    info!(
        "Point to {}: {} - {}",
        scorer, state.score.left, state.score.right
    );

    let winner = if points >= state.config.win_score {
        state.status = GameStatus::Over { winner: scorer };
        info!("Game over, {} side wins", scorer);
        Some(scorer)
    } else {
        None
    };

    state.ball.serve(&state.config, rng);
    winner
}
