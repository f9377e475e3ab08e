use crate::constants::GameConfig;
use cgmath::Vector2;
use log::debug;
use rand::Rng;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// `position` is the top-left corner. Only `position.y` changes during play.
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub position: Vector2<f32>,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn new(side: Side, config: &GameConfig) -> Self {
        let x = match side {
            Side::Left => config.paddle_inset,
            Side::Right => config.world_width - config.paddle_width - config.paddle_inset,
        };
        let y = config.clamp_paddle_y(config.world_height / 2.0 - config.paddle_height / 2.0);

        Paddle {
            side,
            position: Vector2::new(x, y),
            width: config.paddle_width,
            height: config.paddle_height,
        }
    }

    pub fn top(&self) -> f32 {
        self.position.y
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.height
    }

    pub fn center_y(&self) -> f32 {
        self.position.y + self.height / 2.0
    }
}

/// `position` is the top-left corner of the ball's bounding square.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub position: Vector2<f32>,
    pub velocity: Vector2<f32>,
    pub size: f32,
}

impl Ball {
    pub fn new(config: &GameConfig, rng: &mut impl Rng) -> Self {
        let mut ball = Ball {
            position: Vector2::new(0.0, 0.0),
            velocity: Vector2::new(0.0, 0.0),
            size: config.ball_size,
        };
        ball.serve(config, rng);
        ball
    }

    /// Puts the ball back in the middle of the field and picks a new direction:
    /// random horizontal sign at full speed, vertical speed in
    /// `[-ball_speed, ball_speed)`.
    pub fn serve(&mut self, config: &GameConfig, rng: &mut impl Rng) {
        self.position = Vector2::new(
            config.world_width / 2.0 - self.size / 2.0,
            config.world_height / 2.0 - self.size / 2.0,
        );

        let direction = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        let vertical = if config.ball_speed > 0.0 {
            rng.gen_range(-config.ball_speed..config.ball_speed)
        } else {
            0.0
        };
        self.velocity = Vector2::new(config.ball_speed * direction, vertical);

        debug!(
            "Ball served with velocity ({:.2}, {:.2})",
            self.velocity.x, self.velocity.y
        );
    }

    pub fn left(&self) -> f32 {
        self.position.x
    }

    pub fn right(&self) -> f32 {
        self.position.x + self.size
    }

    pub fn top(&self) -> f32 {
        self.position.y
    }

    pub fn bottom(&self) -> f32 {
        self.position.y + self.size
    }

    pub fn center_y(&self) -> f32 {
        self.position.y + self.size / 2.0
    }

    pub fn overlaps_vertically(&self, paddle: &Paddle) -> bool {
        self.bottom() >= paddle.top() && self.top() <= paddle.bottom()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn increment(&mut self, side: Side) -> u32 {
        let counter = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        *counter += 1;
        *counter
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Over { winner: Side },
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub paddles: [Paddle; 2],
    pub ball: Ball,
    pub score: Score,
    pub status: GameStatus,
}

impl GameState {
    pub fn new(config: GameConfig, rng: &mut impl Rng) -> Self {
        let paddles = [
            Paddle::new(Side::Left, &config),
            Paddle::new(Side::Right, &config),
        ];
        let ball = Ball::new(&config, rng);

        GameState {
            config,
            paddles,
            ball,
            score: Score::default(),
            status: GameStatus::Active,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        &self.paddles[side.index()]
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        &mut self.paddles[side.index()]
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Over { .. })
    }

    pub fn winner(&self) -> Option<Side> {
        match self.status {
            GameStatus::Over { winner } => Some(winner),
            GameStatus::Active => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_state_places_paddles_at_their_sides() {
        let mut rng = StdRng::seed_from_u64(7);
        let state = GameState::new(GameConfig::default(), &mut rng);

        assert_eq!(state.paddle(Side::Left).position, Vector2::new(10.0, 210.0));
        assert_eq!(state.paddle(Side::Right).position, Vector2::new(780.0, 210.0));
        assert_eq!(state.score, Score::default());
        assert_eq!(state.status, GameStatus::Active);
    }

    #[test]
    fn test_serve_centers_ball_and_respects_speed_range() {
        let config = GameConfig::default();
        let mut rng = StdRng::seed_from_u64(42);
        let mut ball = Ball::new(&config, &mut rng);

        for _ in 0..200 {
            ball.position = Vector2::new(-30.0, 3.0);
            ball.serve(&config, &mut rng);

            assert_eq!(ball.position, Vector2::new(394.0, 244.0));
            assert_eq!(ball.velocity.x.abs(), config.ball_speed);
            assert!(ball.velocity.y >= -config.ball_speed);
            assert!(ball.velocity.y < config.ball_speed);
        }
    }

    #[test]
    fn test_serve_with_zero_speed_does_not_panic() {
        let config = GameConfig {
            ball_speed: 0.0,
            ..GameConfig::default()
        };
        let mut rng = StdRng::seed_from_u64(1);
        let ball = Ball::new(&config, &mut rng);

        assert_eq!(ball.velocity.y, 0.0);
    }

    #[test]
    fn test_score_increment_returns_new_value() {
        let mut score = Score::default();

        assert_eq!(score.increment(Side::Right), 1);
        assert_eq!(score.increment(Side::Right), 2);
        assert_eq!(score.get(Side::Left), 0);
        assert_eq!(score.get(Side::Right), 2);
    }
}
