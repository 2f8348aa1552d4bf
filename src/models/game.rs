//! Bubble tapping mini-game.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const GAME_DURATION_SECS: u32 = 30;
pub const WINNING_SCORE: u32 = 15;

/// Keys a bubble can be labelled with.
pub const BUBBLE_KEYS: [char; 9] = ['a', 's', 'd', 'f', 'g', 'h', 'j', 'k', 'l'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    pub duration_secs: u32,
    pub winning_score: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            duration_secs: GAME_DURATION_SECS,
            winning_score: WINNING_SCORE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    Over,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Won,
    Lost,
}

/// Bubble position as fractions of the play area, each in `[0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bubble {
    pub x: f32,
    pub y: f32,
    pub key: char,
}

pub struct BubbleGame {
    rules: GameRules,
    score: u32,
    time_left: u32,
    phase: GamePhase,
    bubble: Bubble,
    rng: StdRng,
}

impl BubbleGame {
    pub fn new(rules: GameRules) -> Self {
        Self::with_rng(rules, StdRng::from_entropy())
    }

    pub fn with_seed(rules: GameRules, seed: u64) -> Self {
        Self::with_rng(rules, StdRng::seed_from_u64(seed))
    }

    fn with_rng(rules: GameRules, mut rng: StdRng) -> Self {
        let bubble = random_bubble(&mut rng);
        let phase = if rules.duration_secs == 0 {
            GamePhase::Over
        } else {
            GamePhase::Playing
        };
        Self {
            rules,
            score: 0,
            time_left: rules.duration_secs,
            phase,
            bubble,
            rng,
        }
    }

    pub fn rules(&self) -> GameRules {
        self.rules
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn bubble(&self) -> Bubble {
        self.bubble
    }

    /// One second of the countdown.
    pub fn tick(&mut self) -> GamePhase {
        if self.phase == GamePhase::Playing {
            if self.time_left <= 1 {
                self.time_left = 0;
                self.phase = GamePhase::Over;
            } else {
                self.time_left -= 1;
            }
        }
        self.phase
    }

    /// Returns true when `key` hit the bubble.
    pub fn tap(&mut self, key: char) -> bool {
        if self.phase != GamePhase::Playing || key != self.bubble.key {
            return false;
        }
        self.score += 1;
        self.bubble = random_bubble(&mut self.rng);
        true
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.phase {
            GamePhase::Playing => None,
            GamePhase::Over if self.score >= self.rules.winning_score => Some(GameOutcome::Won),
            GamePhase::Over => Some(GameOutcome::Lost),
        }
    }
}

fn random_bubble(rng: &mut StdRng) -> Bubble {
    Bubble {
        x: rng.gen_range(0.0..1.0),
        y: rng.gen_range(0.0..1.0),
        key: BUBBLE_KEYS[rng.gen_range(0..BUBBLE_KEYS.len())],
    }
}
