use cgmath::Vector2;
use log::info;
use raylib::color::Color;
use raylib::consts::{KeyboardKey, MouseButton};
use raylib::drawing::{RaylibDraw, RaylibDrawHandle};
use raylib::init;
use shared::constants::{GameConfig, WORLD_HEIGHT, WORLD_WIDTH};
use shared::game_loop::{GameLoop, ScoreDisplay};
use shared::input::Direction;
use shared::logging::init_logging;
use shared::render::{Rgb, Surface};
use shared::world_data::{Score, Side};
use tracing::info_span;

const UP_KEYS: [KeyboardKey; 2] = [KeyboardKey::KEY_UP, KeyboardKey::KEY_W];
const DOWN_KEYS: [KeyboardKey; 2] = [KeyboardKey::KEY_DOWN, KeyboardKey::KEY_S];
const RESTART_KEYS: [KeyboardKey; 2] = [KeyboardKey::KEY_SPACE, KeyboardKey::KEY_ENTER];

const SCORE_FONT_SIZE: i32 = 40;
const BANNER_FONT_SIZE: i32 = 30;
const HINT_FONT_SIZE: i32 = 20;

struct Canvas<'a, 'b> {
    draw_handle: &'a mut RaylibDrawHandle<'b>,
}

fn to_color(rgb: Rgb) -> Color {
    Color::new(rgb.r, rgb.g, rgb.b, 255)
}

impl Surface for Canvas<'_, '_> {
    fn clear(&mut self, color: Rgb) {
        self.draw_handle.clear_background(to_color(color));
    }

    fn fill_rect(&mut self, position: Vector2<f32>, size: Vector2<f32>, color: Rgb) {
        self.draw_handle.draw_rectangle(
            position.x.round() as i32,
            position.y.round() as i32,
            size.x.round() as i32,
            size.y.round() as i32,
            to_color(color),
        );
    }

    fn fill_circle(&mut self, center: Vector2<f32>, radius: f32, color: Rgb) {
        self.draw_handle.draw_circle(
            center.x.round() as i32,
            center.y.round() as i32,
            radius,
            to_color(color),
        );
    }

    fn stroke_line(&mut self, from: Vector2<f32>, to: Vector2<f32>, color: Rgb) {
        self.draw_handle.draw_line(
            from.x.round() as i32,
            from.y.round() as i32,
            to.x.round() as i32,
            to.y.round() as i32,
            to_color(color),
        );
    }
}

/// Score labels drawn above the field.
struct ScoreBoard {
    left: String,
    right: String,
}

impl ScoreBoard {
    fn new() -> Self {
        ScoreBoard {
            left: "0".to_string(),
            right: "0".to_string(),
        }
    }

    fn draw(&self, draw_handle: &mut RaylibDrawHandle) {
        let center = WORLD_WIDTH as i32 / 2;
        draw_handle.draw_text(&self.left, center - 80, 20, SCORE_FONT_SIZE, Color::WHITE);
        draw_handle.draw_text(&self.right, center + 60, 20, SCORE_FONT_SIZE, Color::WHITE);
    }
}

impl ScoreDisplay for ScoreBoard {
    fn show(&mut self, score: &Score) {
        self.left = score.left.to_string();
        self.right = score.right.to_string();
    }
}

fn draw_winner_banner(draw_handle: &mut RaylibDrawHandle, winner: Side) {
    let message = match winner {
        Side::Left => "You win!",
        Side::Right => "The computer wins!",
    };
    let center_x = WORLD_WIDTH as i32 / 2;
    let center_y = WORLD_HEIGHT as i32 / 2;

    draw_handle.draw_rectangle(
        center_x - 200,
        center_y - 50,
        400,
        100,
        Color::new(0, 0, 0, 200),
    );
    draw_handle.draw_text(
        message,
        center_x - 180,
        center_y - 35,
        BANNER_FONT_SIZE,
        Color::WHITE,
    );
    draw_handle.draw_text(
        "Press Space or click to play again",
        center_x - 180,
        center_y + 10,
        HINT_FONT_SIZE,
        Color::GRAY,
    );
}

fn main() {
    init_logging();
    let _span = info_span!("client").entered();

    let (mut handle, thread) = init()
        .size(WORLD_WIDTH as i32, WORLD_HEIGHT as i32)
        .title("Pong")
        .vsync()
        .build();

    let mut game = GameLoop::new(GameConfig::default());
    let mut score_board = ScoreBoard::new();
    let mut last_pointer_y: Option<i32> = None;
    let mut winner: Option<Side> = None;

    info!("Window ready, game started");

    while !handle.window_should_close() {
        if let Some(side) = winner {
            let restart = RESTART_KEYS.iter().any(|key| handle.is_key_pressed(*key))
                || handle.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT);

            if restart {
                info!("Restarting after {} side won", side);
                game.restart(&mut score_board);
                winner = None;
            }
        }

        let input = game.input_mut();

        for (direction, keys) in [(Direction::Up, UP_KEYS), (Direction::Down, DOWN_KEYS)] {
            let held = keys.iter().any(|key| handle.is_key_down(*key));
            if held != input.is_held(direction) {
                if held {
                    input.press(direction);
                } else {
                    input.release(direction);
                }
            }
        }

        let pointer_y = handle.get_mouse_y();
        if last_pointer_y != Some(pointer_y) {
            input.pointer_moved(pointer_y as f32);
            last_pointer_y = Some(pointer_y);
        }

        let mut draw_handle = handle.begin_drawing(&thread);

        let mut canvas = Canvas {
            draw_handle: &mut draw_handle,
        };
        if let Some(side) = game.frame(&mut canvas, &mut score_board) {
            winner = Some(side);
        }

        score_board.draw(&mut draw_handle);

        if let Some(side) = winner {
            draw_winner_banner(&mut draw_handle, side);
        }
    }
}
