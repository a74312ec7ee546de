//! Balloon Words data structures.
//!
//! Balloons carrying vocabulary words drift up the canvas; the player pops
//! the one whose word matches the displayed definition.

use super::surface::{Rgb, Surface};
use crate::core::config::GameConfig;
use crate::core::constants::BALLOON_STRING_LENGTH;
use rand::Rng;

/// A word and the definition shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabularyEntry {
    pub word: &'static str,
    pub definition: &'static str,
}

/// The word list; one balloon is spawned per entry.
pub const VOCABULARY: [VocabularyEntry; 8] = [
    VocabularyEntry {
        word: "Happy",
        definition: "Feeling or showing pleasure and contentment",
    },
    VocabularyEntry {
        word: "Big",
        definition: "Of considerable size or extent",
    },
    VocabularyEntry {
        word: "Fast",
        definition: "Moving or capable of moving at high speed",
    },
    VocabularyEntry {
        word: "Quiet",
        definition: "Making little or no noise",
    },
    VocabularyEntry {
        word: "Bright",
        definition: "Giving out or reflecting much light",
    },
    VocabularyEntry {
        word: "Cold",
        definition: "Of or at a low temperature",
    },
    VocabularyEntry {
        word: "Soft",
        definition: "Easy to mold, cut, or compress",
    },
    VocabularyEntry {
        word: "Sweet",
        definition: "Having a taste like sugar",
    },
];

/// Balloon colors, assigned by spawn index modulo the palette length.
pub const PALETTE: [Rgb; 8] = [
    Rgb::from_hex(0xFF6B6B),
    Rgb::from_hex(0x4ECDC4),
    Rgb::from_hex(0x45B7D1),
    Rgb::from_hex(0x96CEB4),
    Rgb::from_hex(0xFFEEAD),
    Rgb::from_hex(0xD4A5A5),
    Rgb::from_hex(0x9B59B6),
    Rgb::from_hex(0xE74C3C),
];

/// A single drifting, clickable balloon.
#[derive(Debug, Clone, PartialEq)]
pub struct Balloon {
    /// Center, in canvas units (y grows downward).
    pub x: f64,
    pub y: f64,
    pub word: &'static str,
    pub color: Rgb,
    pub radius: f64,
    /// Upward drift per tick. Fixed for the balloon's lifetime.
    pub speed: f64,
    /// Once set, never cleared.
    pub popped: bool,
}

impl Balloon {
    pub fn new(x: f64, y: f64, word: &'static str, color: Rgb, radius: f64, speed: f64) -> Self {
        Self {
            x,
            y,
            word,
            color,
            radius,
            speed,
            popped: false,
        }
    }

    /// Create a balloon whose speed is drawn from `[min_speed, max_speed)`.
    pub fn spawn<R: Rng>(
        x: f64,
        y: f64,
        word: &'static str,
        color: Rgb,
        config: &GameConfig,
        rng: &mut R,
    ) -> Self {
        let speed = rng.gen_range(config.min_speed..config.max_speed);
        Self::new(x, y, word, color, config.balloon_radius, speed)
    }

    /// Drift up one tick. A balloon that clears the top edge re-enters just
    /// below the bottom edge.
    pub fn update(&mut self, canvas_height: f64) {
        if self.popped {
            return;
        }
        self.y -= self.speed;
        if self.y < -self.radius {
            self.y = canvas_height + self.radius;
        }
    }

    /// True if `(px, py)` lies strictly inside the balloon. Popped balloons
    /// never register hits.
    pub fn is_clicked(&self, px: f64, py: f64) -> bool {
        if self.popped {
            return false;
        }
        let dx = px - self.x;
        let dy = py - self.y;
        (dx * dx + dy * dy).sqrt() < self.radius
    }

    /// Draw body, outline, string and label.
    pub fn draw(&self, surface: &mut dyn Surface) {
        if self.popped {
            return;
        }

        surface.fill_circle(self.x, self.y, self.radius, self.color);
        surface.stroke_circle(self.x, self.y, self.radius, Rgb::BLACK);

        let string_top = self.y + self.radius;
        surface.line(
            self.x,
            string_top,
            self.x,
            string_top + BALLOON_STRING_LENGTH,
            Rgb::BLACK,
        );

        surface.text(self.x, self.y, self.word, Rgb::BLACK);
    }
}

/// Where the current round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// A target is shown and balloons are clickable.
    Active,
    /// A click is being applied. Only seen from inside `handle_click`.
    Resolving,
    /// The last game ended and its notice is pending. The next game is
    /// already spawned but ignores clicks until the notice is acknowledged.
    Over,
}

/// Shown to the player when a game ends; the next game is already running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverNotice {
    pub final_score: u32,
    /// 1-based number of the game that just ended.
    pub game_number: u32,
}

/// Something a click did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickEvent {
    /// The target balloon was popped.
    Popped { word: &'static str, score: u32 },
    /// A balloon with the wrong word was hit.
    Missed {
        word: &'static str,
        target: &'static str,
        score: u32,
    },
    /// The last matching balloon is gone; a new game has started.
    GameOver(GameOverNotice),
}

/// Round state for one play session. Owned by the caller; every change goes
/// through the functions in [`super::logic`].
#[derive(Debug, Clone)]
pub struct BalloonGame {
    pub config: GameConfig,
    pub vocabulary: &'static [VocabularyEntry],
    pub balloons: Vec<Balloon>,
    pub target: VocabularyEntry,
    pub phase: RoundPhase,
    pub score: u32,
    /// Highest final score this session.
    pub best_score: u32,
    /// Games finished this session.
    pub games_played: u32,
    /// Set on game-over until the player acknowledges it.
    pub pending_notice: Option<GameOverNotice>,
}

impl BalloonGame {
    /// Start a game over the built-in vocabulary.
    pub fn new<R: Rng>(config: GameConfig, rng: &mut R) -> Self {
        let mut game = Self::empty(config, &VOCABULARY, VOCABULARY[0]);
        super::logic::init_game(&mut game, rng);
        game
    }

    /// Start a game over a custom word list. `None` if the list is empty.
    pub fn with_vocabulary<R: Rng>(
        config: GameConfig,
        vocabulary: &'static [VocabularyEntry],
        rng: &mut R,
    ) -> Option<Self> {
        let target = *vocabulary.first()?;
        let mut game = Self::empty(config, vocabulary, target);
        super::logic::init_game(&mut game, rng);
        Some(game)
    }

    fn empty(
        config: GameConfig,
        vocabulary: &'static [VocabularyEntry],
        target: VocabularyEntry,
    ) -> Self {
        Self {
            config,
            vocabulary,
            balloons: Vec::new(),
            target,
            phase: RoundPhase::Active,
            score: 0,
            best_score: 0,
            games_played: 0,
            pending_notice: None,
        }
    }

    /// Balloons still floating.
    pub fn remaining(&self) -> usize {
        self.balloons.iter().filter(|b| !b.popped).count()
    }
}
