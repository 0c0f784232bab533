// tests/sim.rs
#![cfg(feature = "sim")]

use reflex_pace::sim::{SettleBand, SyntheticPlayer, play_until_settled};
use reflex_pace::{AdaptiveConfig, AdaptiveEngine, GameKind, Phase};

fn engine_on(kind: GameKind) -> AdaptiveEngine {
    let mut e = AdaptiveEngine::default();
    e.set_current_game(kind.id());
    e
}

/* ──────────────────────────────────────────────────────────────────────────
1) Steady players — fully deterministic traces
────────────────────────────────────────────────────────────────────────── */

#[test]
fn fast_player_climbs_to_the_ceiling() {
    let mut e = engine_on(GameKind::SpeedMath);
    let out = play_until_settled(&mut e, &SyntheticPlayer::steady(1_000.0), SettleBand::default(), 200);

    assert!(out.settled, "trace: {:?}", out.trace);
    assert_eq!(out.state.game_speed, 2.2);
    assert_eq!(out.state.phase, Phase::Overdrive);
    assert_eq!(out.state.difficulty, 10);
    assert!(out.trace.windows(2).all(|w| w[1] >= w[0]), "not monotone: {:?}", out.trace);
    assert_eq!(out.questions, out.trace.len());
    assert_eq!(out.state, e.state());
}

#[test]
fn comfortable_player_sits_in_the_dead_zone() {
    // 6000 ms against a 10000 ms budget is ratio 0.6: hold from the first answer.
    let mut e = engine_on(GameKind::SpeedMath);
    let out = play_until_settled(&mut e, &SyntheticPlayer::steady(6_000.0), SettleBand::default(), 200);

    assert!(out.settled);
    assert_eq!(out.questions, 10);
    assert!(out.trace.iter().all(|&s| s == 1.0));
    assert_eq!(out.state.questions_answered, 10);
}

#[test]
fn overwhelmed_player_is_eased_back_into_range() {
    // 12 s is over the 10 s budget: timeouts first, then slow correct answers
    // until the budget is roomy enough to land in the dead zone.
    let mut e = engine_on(GameKind::SpeedMath);
    let out = play_until_settled(&mut e, &SyntheticPlayer::steady(12_000.0), SettleBand::default(), 200);

    assert!(out.settled, "trace: {:?}", out.trace);
    assert!(out.state.game_speed > 0.5 && out.state.game_speed < 0.6, "{}", out.state.game_speed);
    assert!(out.state.peak_game_speed == 1.0);
    assert!(e.allowed_time() > 12_000);
}

#[test]
fn faster_players_settle_higher() {
    let band = SettleBand { window: 15, tolerance: 1e-9 };
    let settled_speed = |latency: f64| {
        let mut e = engine_on(GameKind::ColorMatch);
        play_until_settled(&mut e, &SyntheticPlayer::steady(latency), band, 500).state.game_speed
    };

    let speeds: Vec<f64> = [3_000.0, 2_000.0, 1_200.0, 500.0].into_iter().map(settled_speed).collect();
    assert!(speeds.windows(2).all(|w| w[1] >= w[0]), "{speeds:?}");
    assert!(speeds[3] > speeds[0]);
}

/* ──────────────────────────────────────────────────────────────────────────
2) Noisy players — seeded and reproducible
────────────────────────────────────────────────────────────────────────── */

#[test]
fn same_seed_same_session() {
    let band = SettleBand { window: 20, tolerance: 0.2 };
    let run = || {
        let mut e = engine_on(GameKind::QuickTap);
        let p = SyntheticPlayer::new(900.0, 0.3, 0.85, 42);
        play_until_settled(&mut e, &p, band, 300).trace
    };
    assert_eq!(run(), run());
}

#[test]
fn noisy_session_respects_bounds() {
    let cfg = AdaptiveConfig::default();
    for seed in 0..8 {
        let mut e = engine_on(GameKind::MemorySequence);
        let p = SyntheticPlayer::new(2_500.0, 0.5, 0.75, seed);
        let out = play_until_settled(&mut e, &p, SettleBand { window: 0, tolerance: 0.0 }, 250);

        assert!(!out.settled);
        assert_eq!(out.questions, 250);
        assert_eq!(out.state.questions_answered, 250);
        assert!(out.trace.iter().all(|&s| (cfg.min_speed..=cfg.max_speed).contains(&s)));
        let peak = out.trace.iter().copied().fold(1.0, f64::max);
        assert_eq!(out.state.peak_game_speed, peak);
    }
}
