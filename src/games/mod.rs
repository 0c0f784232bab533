// src/games/mod.rs

//! Minigame families known to the engine.
//!
//! The app shell identifies minigames by camelCase string ids. The engine
//! maps the ids it knows onto [`GameKind`]; every other id still works and
//! simply takes the fallback timing and parameter bundle.

pub mod params;
pub use params::*;

/// Closed set of minigame families with dedicated timing and tuning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameKind {
    SwipeDirection,
    SpeedMath,
    MemorySequence,
    ColorMatch,
    OddOneOut,
    QuickTap,
    CountItems,
    PatternGrid,
}

/// Active game after construction and after `reset`.
pub const DEFAULT_GAME: GameKind = GameKind::SpeedMath;

impl GameKind {
    pub const ALL: [GameKind; 8] = [
        GameKind::SwipeDirection,
        GameKind::SpeedMath,
        GameKind::MemorySequence,
        GameKind::ColorMatch,
        GameKind::OddOneOut,
        GameKind::QuickTap,
        GameKind::CountItems,
        GameKind::PatternGrid,
    ];

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.id() == id)
    }

    pub fn id(self) -> &'static str {
        match self {
            GameKind::SwipeDirection => "swipeDirection",
            GameKind::SpeedMath => "speedMath",
            GameKind::MemorySequence => "memorySequence",
            GameKind::ColorMatch => "colorMatch",
            GameKind::OddOneOut => "oddOneOut",
            GameKind::QuickTap => "quickTap",
            GameKind::CountItems => "countItems",
            GameKind::PatternGrid => "patternGrid",
        }
    }

    /// Thinking-time budget at speed 1.0.
    pub fn base_time_ms(self) -> u32 {
        match self {
            GameKind::SwipeDirection => 3_000,
            GameKind::SpeedMath => 10_000,
            GameKind::MemorySequence => 8_000,
            GameKind::ColorMatch => 4_000,
            GameKind::OddOneOut => 6_000,
            GameKind::QuickTap => 2_500,
            GameKind::CountItems => 7_000,
            GameKind::PatternGrid => 9_000,
        }
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}
