use crate::world_data::GameState;
use cgmath::Vector2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

pub const BACKGROUND_COLOR: Rgb = Rgb::new(0x00, 0x00, 0x00);
pub const NET_COLOR: Rgb = Rgb::new(0x55, 0x55, 0x55);
pub const FOREGROUND_COLOR: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

pub const NET_DASH: f32 = 6.0;
pub const NET_GAP: f32 = 10.0;

/// The drawing primitives the game needs from a host.
pub trait Surface {
    fn clear(&mut self, color: Rgb);

    fn fill_rect(&mut self, position: Vector2<f32>, size: Vector2<f32>, color: Rgb);

    fn fill_circle(&mut self, center: Vector2<f32>, radius: f32, color: Rgb);

    fn stroke_line(&mut self, from: Vector2<f32>, to: Vector2<f32>, color: Rgb);
}

/// Repaints the whole scene. Reads the state only.
pub fn render(state: &GameState, surface: &mut impl Surface) {
    surface.clear(BACKGROUND_COLOR);

    draw_net(state, surface);

    for paddle in &state.paddles {
        surface.fill_rect(
            paddle.position,
            Vector2::new(paddle.width, paddle.height),
            FOREGROUND_COLOR,
        );
    }

    let ball = &state.ball;
    let radius = ball.size / 2.0;
    surface.fill_circle(
        ball.position + Vector2::new(radius, radius),
        radius,
        FOREGROUND_COLOR,
    );
}

fn draw_net(state: &GameState, surface: &mut impl Surface) {
    let x = state.config.world_width / 2.0;
    let height = state.config.world_height;

    let mut y = 0.0;
    while y < height {
        let end = (y + NET_DASH).min(height);
        surface.stroke_line(Vector2::new(x, y), Vector2::new(x, end), NET_COLOR);
        y += NET_DASH + NET_GAP;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::GameConfig;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Debug, PartialEq)]
    enum Call {
        Clear(Rgb),
        Rect(Vector2<f32>, Vector2<f32>),
        Circle(Vector2<f32>, f32),
        Line(Vector2<f32>, Vector2<f32>),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl Surface for Recorder {
        fn clear(&mut self, color: Rgb) {
            self.calls.push(Call::Clear(color));
        }

        fn fill_rect(&mut self, position: Vector2<f32>, size: Vector2<f32>, _color: Rgb) {
            self.calls.push(Call::Rect(position, size));
        }

        fn fill_circle(&mut self, center: Vector2<f32>, radius: f32, _color: Rgb) {
            self.calls.push(Call::Circle(center, radius));
        }

        fn stroke_line(&mut self, from: Vector2<f32>, to: Vector2<f32>, _color: Rgb) {
            self.calls.push(Call::Line(from, to));
        }
    }

    #[test]
    fn test_render_draws_scene_in_order() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut state = GameState::new(GameConfig::default(), &mut rng);
        state.ball.position = Vector2::new(100.0, 50.0);
        let mut recorder = Recorder::default();

        render(&state, &mut recorder);

        assert_eq!(recorder.calls.first(), Some(&Call::Clear(BACKGROUND_COLOR)));

        let lines: Vec<&Call> = recorder
            .calls
            .iter()
            .filter(|c| matches!(c, Call::Line(..)))
            .collect();
        // 500 / 16 rounded up.
        assert_eq!(lines.len(), 32);
        assert_eq!(
            lines[0],
            &Call::Line(Vector2::new(400.0, 0.0), Vector2::new(400.0, 6.0))
        );
        assert_eq!(
            lines[31],
            &Call::Line(Vector2::new(400.0, 496.0), Vector2::new(400.0, 500.0))
        );

        let tail = &recorder.calls[recorder.calls.len() - 3..];
        assert_eq!(
            tail,
            &[
                Call::Rect(Vector2::new(10.0, 210.0), Vector2::new(10.0, 80.0)),
                Call::Rect(Vector2::new(780.0, 210.0), Vector2::new(10.0, 80.0)),
                Call::Circle(Vector2::new(106.0, 56.0), 6.0),
            ]
        );
    }
}
