use cgmath::Vector2;
use clap::Parser;
use log::info;
use shared::constants::{GameConfig, GAME_LOOP_TIMESTEP_SECONDS};
use shared::game_loop::{GameLoop, ScoreDisplay};
use shared::logging::init_logging;
use shared::render::{Rgb, Surface};
use shared::world_data::{Score, Side};
use std::time::Duration;
use tracing::info_span;
use tracing::Instrument;

/// Plays a match without a window. The left paddle follows the ball with the
/// pointer, as a player glued to it would.
#[derive(Parser, Debug)]
#[command(name = "headless")]
struct Args {
    /// Stop after this many frames even if nobody has won.
    #[arg(long, default_value_t = 36_000)]
    frames: u64,

    /// Seed for the serve directions. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Pace frames at 60 per second instead of running flat out.
    #[arg(long)]
    realtime: bool,
}

struct NullSurface;

impl Surface for NullSurface {
    fn clear(&mut self, _color: Rgb) {}

    fn fill_rect(&mut self, _position: Vector2<f32>, _size: Vector2<f32>, _color: Rgb) {}

    fn fill_circle(&mut self, _center: Vector2<f32>, _radius: f32, _color: Rgb) {}

    fn stroke_line(&mut self, _from: Vector2<f32>, _to: Vector2<f32>, _color: Rgb) {}
}

struct LogScoreBoard;

impl ScoreDisplay for LogScoreBoard {
    fn show(&mut self, score: &Score) {
        info!("Score {} - {}", score.left, score.right);
    }
}

#[derive(Debug, Default)]
struct MatchStats {
    frames: u64,
    paddle_hits: u64,
    wall_bounces: u64,
    winner: Option<Side>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_logging();

    let args = Args::parse();
    let mut game = match args.seed {
        Some(seed) => GameLoop::with_seed(GameConfig::default(), seed),
        None => GameLoop::new(GameConfig::default()),
    };

    let stats = play_match(&mut game, &args)
        .instrument(info_span!("match", seed = ?args.seed))
        .await;

    info!(
        "Finished after {} frames: {} paddle hits, {} wall bounces",
        stats.frames, stats.paddle_hits, stats.wall_bounces
    );
    match stats.winner {
        Some(side) => info!(
            "Winner: {} side with {} points",
            side,
            game.state().score.get(side)
        ),
        None => info!("No winner within {} frames", args.frames),
    }
}

async fn play_match(game: &mut GameLoop, args: &Args) -> MatchStats {
    let mut surface = NullSurface;
    let mut score_board = LogScoreBoard;
    let mut stats = MatchStats::default();

    let mut ticker = if args.realtime {
        Some(tokio::time::interval(Duration::from_secs_f32(
            GAME_LOOP_TIMESTEP_SECONDS,
        )))
    } else {
        None
    };

    info!("Match started");

    while stats.frames < args.frames {
        if let Some(ticker) = ticker.as_mut() {
            ticker.tick().await;
        }

        let ball_center_y = game.state().ball.center_y();
        game.input_mut().pointer_moved(ball_center_y);

        let winner = game.frame(&mut surface, &mut score_board);

        let events = game.last_events();
        stats.frames += 1;
        stats.wall_bounces += events.wall_bounce as u64;
        stats.paddle_hits += events.paddle_hit.is_some() as u64;

        if winner.is_some() {
            stats.winner = winner;
            break;
        }
    }

    stats
}
