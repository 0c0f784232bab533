// src/games/params.rs

//! Per-minigame parameter deriver.
//!
//! Every knob is a pure function of `(phase, difficulty)`; no RNG, no hidden
//! state. Bundles serialize to plain camelCase objects for the app bridge,
//! and the fallback bundle serializes to exactly `{"difficulty": n}`.

use serde::Serialize;

use super::GameKind;
use crate::mechanics::classify::{MAX_DIFFICULTY, MIN_DIFFICULTY, Phase};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeParams {
    pub difficulty: u8,
    pub arrow_count: u8,
    /// Chance the prompt asks for the opposite direction.
    pub reverse_chance: f64,
    pub decoy_arrows: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MathOp {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "×")]
    Mul,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeedMathParams {
    pub difficulty: u8,
    pub max_operand: u32,
    pub operand_count: u8,
    pub operators: Vec<MathOp>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryParams {
    pub difficulty: u8,
    pub sequence_length: u8,
    pub reveal_ms: u32,
    pub grid_size: u8,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorMatchParams {
    pub difficulty: u8,
    pub palette_size: u8,
    /// Chance the word and ink color disagree.
    pub mismatch_chance: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OddOneOutParams {
    pub difficulty: u8,
    pub grid_size: u8,
    /// 0 = odd item obvious, 1 = identical.
    pub similarity: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickTapParams {
    pub difficulty: u8,
    pub target_count: u8,
    pub decoy_chance: f64,
    pub target_lifetime_ms: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountItemsParams {
    pub difficulty: u8,
    pub min_items: u8,
    pub max_items: u8,
    pub flash_ms: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternGridParams {
    pub difficulty: u8,
    pub grid_size: u8,
    pub lit_cells: u8,
    pub rotate: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FallbackParams {
    pub difficulty: u8,
}

/// Tuning bundle for the next question, shaped per minigame family.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GameParams {
    SwipeDirection(SwipeParams),
    SpeedMath(SpeedMathParams),
    MemorySequence(MemoryParams),
    ColorMatch(ColorMatchParams),
    OddOneOut(OddOneOutParams),
    QuickTap(QuickTapParams),
    CountItems(CountItemsParams),
    PatternGrid(PatternGridParams),
    Fallback(FallbackParams),
}

impl GameParams {
    /// Difficulty the bundle was derived at; present in every shape.
    pub fn difficulty(&self) -> u8 {
        match self {
            GameParams::SwipeDirection(p) => p.difficulty,
            GameParams::SpeedMath(p) => p.difficulty,
            GameParams::MemorySequence(p) => p.difficulty,
            GameParams::ColorMatch(p) => p.difficulty,
            GameParams::OddOneOut(p) => p.difficulty,
            GameParams::QuickTap(p) => p.difficulty,
            GameParams::CountItems(p) => p.difficulty,
            GameParams::PatternGrid(p) => p.difficulty,
            GameParams::Fallback(p) => p.difficulty,
        }
    }
}

/// Derive the bundle for `game_id`. Unknown ids get [`GameParams::Fallback`].
pub fn game_params(game_id: &str, phase: Phase, difficulty: u8) -> GameParams {
    let d = difficulty.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY);
    match GameKind::from_id(game_id) {
        Some(kind) => params_for(kind, phase, d),
        None => GameParams::Fallback(FallbackParams { difficulty: d }),
    }
}

/// Same as [`game_params`] for an already-resolved family.
pub fn params_for(kind: GameKind, phase: Phase, difficulty: u8) -> GameParams {
    let d = difficulty.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY);
    // Small-number helpers; d <= 10 so none of these can overflow.
    let d32 = d as u32;
    let by_phase = |warm: f64, ramp: f64, over: f64| match phase {
        Phase::Warmup => warm,
        Phase::Ramping => ramp,
        Phase::Overdrive => over,
    };

    match kind {
        GameKind::SwipeDirection => GameParams::SwipeDirection(SwipeParams {
            difficulty: d,
            arrow_count: 1 + u8::from(d >= 5) + u8::from(d >= 8),
            reverse_chance: by_phase(0.0, 0.2, 0.35),
            decoy_arrows: phase == Phase::Overdrive,
        }),
        GameKind::SpeedMath => {
            let mut operators = vec![MathOp::Add];
            if phase >= Phase::Ramping {
                operators.push(MathOp::Sub);
            }
            if phase == Phase::Overdrive {
                operators.push(MathOp::Mul);
            }
            GameParams::SpeedMath(SpeedMathParams {
                difficulty: d,
                max_operand: 5 + 3 * d32,
                operand_count: if phase == Phase::Overdrive && d >= 9 { 3 } else { 2 },
                operators,
            })
        }
        GameKind::MemorySequence => GameParams::MemorySequence(MemoryParams {
            difficulty: d,
            sequence_length: (2 + d / 2 + phase.bonus() as u8).clamp(3, 9),
            reveal_ms: 900u32.saturating_sub(60 * d32).max(250),
            grid_size: if phase == Phase::Overdrive { 4 } else { 3 },
        }),
        GameKind::ColorMatch => GameParams::ColorMatch(ColorMatchParams {
            difficulty: d,
            palette_size: (3 + d / 2).min(8),
            mismatch_chance: by_phase(0.1, 0.3, 0.45),
        }),
        GameKind::OddOneOut => GameParams::OddOneOut(OddOneOutParams {
            difficulty: d,
            grid_size: (3 + d / 3).min(6),
            similarity: (0.5 + 0.045 * d as f64).min(0.95),
        }),
        GameKind::QuickTap => GameParams::QuickTap(QuickTapParams {
            difficulty: d,
            target_count: 1 + d / 3,
            decoy_chance: by_phase(0.0, 0.15, 0.3),
            target_lifetime_ms: 1_500u32.saturating_sub(100 * d32).max(400),
        }),
        GameKind::CountItems => GameParams::CountItems(CountItemsParams {
            difficulty: d,
            min_items: 2 + d / 2,
            max_items: 5 + d,
            flash_ms: 2_000u32.saturating_sub(150 * d32).max(500),
        }),
        GameKind::PatternGrid => GameParams::PatternGrid(PatternGridParams {
            difficulty: d,
            grid_size: 3 + u8::from(d >= 4) + u8::from(d >= 8),
            lit_cells: 3 + d / 2,
            rotate: phase != Phase::Warmup,
        }),
    }
}
