use crate::constants::GameConfig;
use crate::input::InputState;
use crate::render::{render, Surface};
use crate::rules::{step, StepEvents};
use crate::world_data::{GameState, Score, Side};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Receives the score every time it changes.
pub trait ScoreDisplay {
    fn show(&mut self, score: &Score);
}

/// Owns the game and drives it one frame at a time: step, report, paint.
///
/// Physics advances a fixed amount per frame, so the host decides the pace by
/// how often it calls [`GameLoop::frame`].
pub struct GameLoop {
    state: GameState,
    input: InputState,
    rng: StdRng,
    last_events: StepEvents,
}

impl GameLoop {
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let state = GameState::new(config, &mut rng);

        GameLoop {
            state,
            input: InputState::new(),
            rng,
            last_events: StepEvents::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn last_events(&self) -> StepEvents {
        self.last_events
    }

    /// Runs one frame and returns the winner on the frame the game ends.
    pub fn frame(
        &mut self,
        surface: &mut impl Surface,
        score_display: &mut impl ScoreDisplay,
    ) -> Option<Side> {
        let events = step(&mut self.state, &mut self.input, &mut self.rng);

        if events.point.is_some() {
            score_display.show(&self.state.score);
        }

        render(&self.state, surface);

        self.last_events = events;
        events.winner
    }

    /// Runs at most `frames` frames, stopping early when someone wins.
    pub fn run(
        &mut self,
        frames: u64,
        surface: &mut impl Surface,
        score_display: &mut impl ScoreDisplay,
    ) -> Option<Side> {
        for _ in 0..frames {
            if let Some(winner) = self.frame(surface, score_display) {
                return Some(winner);
            }
        }

        None
    }

    /// Starts a fresh game with the same configuration.
    pub fn restart(&mut self, score_display: &mut impl ScoreDisplay) {
        let config = self.state.config.clone();
        self.state = GameState::new(config, &mut self.rng);
        self.input.clear();
        self.last_events = StepEvents::default();

        info!("New game started");
        score_display.show(&self.state.score);
    }
}
