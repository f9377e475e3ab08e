use crate::world_data::{GameState, Side};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Player input recorded between frames and sampled once per frame by the
/// rules step. Writers only assign fields.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    up_held: bool,
    down_held: bool,
    pending_pointer_y: Option<f32>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// `y` is relative to the top of the playing surface.
    pub fn pointer_moved(&mut self, y: f32) {
        self.pending_pointer_y = Some(y);
    }

    pub fn press(&mut self, direction: Direction) {
        self.set_held(direction, true);
    }

    pub fn release(&mut self, direction: Direction) {
        self.set_held(direction, false);
    }

    fn set_held(&mut self, direction: Direction, held: bool) {
        match direction {
            Direction::Up => self.up_held = held,
            Direction::Down => self.down_held = held,
        }
    }

    pub fn is_held(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up_held,
            Direction::Down => self.down_held,
        }
    }

    pub fn keyboard_active(&self) -> bool {
        self.up_held || self.down_held
    }

    /// Per-frame keyboard velocity for the given paddle speed.
    pub fn keyboard_velocity(&self, paddle_speed: f32) -> f32 {
        let mut velocity = 0.0;
        if self.up_held {
            velocity -= paddle_speed;
        }
        if self.down_held {
            velocity += paddle_speed;
        }
        velocity
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Moves the left paddle from the recorded input. Held keys win over the
/// pointer; a pointer move seen while a key is held is dropped.
pub fn apply_input(state: &mut GameState, input: &mut InputState) {
    let pointer_y = input.pending_pointer_y.take();

    if state.is_over() {
        return;
    }

    let config = &state.config;
    let paddle = &mut state.paddles[Side::Left.index()];

    if input.keyboard_active() {
        let velocity = input.keyboard_velocity(config.paddle_speed);
        paddle.position.y = config.clamp_paddle_y(paddle.position.y + velocity);
    } else if let Some(y) = pointer_y {
        paddle.position.y = config.clamp_paddle_y(y - paddle.height / 2.0);
    }
}
