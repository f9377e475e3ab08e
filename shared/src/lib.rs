pub mod constants;
pub mod game_loop;
pub mod input;
pub mod logging;
pub mod opponent;
pub mod render;
pub mod rules;
pub mod world_data;
