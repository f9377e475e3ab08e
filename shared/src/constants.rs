pub const WORLD_WIDTH: usize = 800;
pub const WORLD_HEIGHT: usize = 500;

pub const PADDLE_WIDTH: usize = 10;
pub const PADDLE_HEIGHT: usize = 80;
/// Gap between a paddle and its side of the field.
pub const PADDLE_INSET: usize = 10;

pub const BALL_SIZE: usize = 12;

pub const PADDLE_SPEED: f32 = 5.0;
pub const OPPONENT_SPEED: f32 = 3.0;
pub const BALL_SPEED: f32 = 5.0;

pub const WIN_SCORE: u32 = 5;

pub const OPPONENT_DEADBAND: f32 = 10.0;
pub const SPIN_FACTOR: f32 = 0.2;

pub const GAME_LOOP_TIMESTEP_SECONDS: f32 = 1.0 / 60.0;

/// Field geometry and tuning the simulation runs with.
///
/// The game itself always uses [`GameConfig::default`], which is built from the
/// constants above. Other geometries exist for tests and tooling.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub world_width: f32,
    pub world_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub ball_size: f32,
    pub paddle_speed: f32,
    pub opponent_speed: f32,
    pub ball_speed: f32,
    pub win_score: u32,
    pub opponent_deadband: f32,
    pub spin_factor: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            world_width: WORLD_WIDTH as f32,
            world_height: WORLD_HEIGHT as f32,
            paddle_width: PADDLE_WIDTH as f32,
            paddle_height: PADDLE_HEIGHT as f32,
            paddle_inset: PADDLE_INSET as f32,
            ball_size: BALL_SIZE as f32,
            paddle_speed: PADDLE_SPEED,
            opponent_speed: OPPONENT_SPEED,
            ball_speed: BALL_SPEED,
            win_score: WIN_SCORE,
            opponent_deadband: OPPONENT_DEADBAND,
            spin_factor: SPIN_FACTOR,
        }
    }
}

impl GameConfig {
    /// Lowest valid top edge for a paddle. Never negative, so a paddle taller
    /// than the field is pinned at 0.
    pub fn max_paddle_y(&self) -> f32 {
        (self.world_height - self.paddle_height).max(0.0)
    }

    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.max_paddle_y())
    }

    pub fn clamp_ball_y(&self, y: f32) -> f32 {
        y.clamp(0.0, (self.world_height - self.ball_size).max(0.0))
    }
}
