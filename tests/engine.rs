// tests/engine.rs
use std::time::{Duration, Instant};

use reflex_pace::{
    Adjustment, AdaptiveConfig, AdaptiveEngine, AdaptiveState, GameKind, Phase, next_speed,
};

const EPS: f64 = 1e-12;

fn speed_math() -> AdaptiveEngine {
    let mut e = AdaptiveEngine::default();
    e.set_current_game("speedMath");
    e
}

/* ──────────────────────────────────────────────────────────────────────────
1) Control law
────────────────────────────────────────────────────────────────────────── */

#[test]
fn fast_correct_then_wrong() {
    let mut e = speed_math();
    assert_eq!(e.allowed_time(), 10_000);

    let s1 = e.process_answer(true, 1_000.0);
    assert!((s1.game_speed - 1.06).abs() < EPS, "{}", s1.game_speed);
    assert_eq!(s1.phase, Phase::Warmup);
    assert_eq!(s1.difficulty, 4);
    assert_eq!(s1.questions_answered, 1);

    let s2 = e.process_answer(false, 1_000.0);
    assert!((s2.game_speed - 0.9752).abs() < EPS, "{}", s2.game_speed);
    assert_eq!(s2.phase, Phase::Warmup);
    assert_eq!(s2.difficulty, 3);
    assert_eq!(s2.questions_answered, 2);
    assert!((s2.peak_game_speed - 1.06).abs() < EPS);
}

#[test]
fn dead_zone_holds_speed() {
    let mut e = speed_math();
    let s = e.process_answer(true, 5_000.0);
    assert_eq!(s.game_speed, 1.0);
    assert_eq!(s.questions_answered, 1);
}

#[test]
fn thresholds_are_exclusive() {
    // ratio exactly 0.25 and exactly 0.7 both hold.
    let mut e = speed_math();
    assert_eq!(e.process_answer(true, 2_500.0).game_speed, 1.0);
    assert_eq!(e.process_answer(true, 7_000.0).game_speed, 1.0);
}

#[test]
fn slow_correct_slows_down() {
    let mut e = speed_math();
    let s = e.process_answer(true, 8_000.0);
    assert!((s.game_speed - 0.94).abs() < EPS);
    assert!((s.peak_game_speed - 1.0).abs() < EPS);
}

#[test]
fn ratio_uses_budget_at_previous_speed() {
    let cfg = AdaptiveConfig::default();
    // At speed 2.0 the speedMath budget is 5000 ms; 2000 ms is ratio 0.4 -> hold.
    let step = next_speed(&cfg, 2.0, GameKind::SpeedMath.base_time_ms(), true, 2_000.0);
    assert_eq!(step.adjustment, Adjustment::Hold);
    assert_eq!(step.allowed_ms, 5_000.0);
    assert_eq!(step.ratio, Some(0.4));
    assert_eq!(step.speed, 2.0);

    // Same latency at speed 1.0 would be a speed-up.
    let step = next_speed(&cfg, 1.0, GameKind::SpeedMath.base_time_ms(), true, 2_000.0);
    assert_eq!(step.adjustment, Adjustment::SpeedUp);
}

#[test]
fn wrong_answer_ignores_response_time() {
    let cfg = AdaptiveConfig::default();
    for rt in [0.0, 10.0, 9_999.0, 1e9, -50.0] {
        let step = next_speed(&cfg, 1.5, 10_000, false, rt);
        assert_eq!(step.adjustment, Adjustment::Penalty);
        assert_eq!(step.ratio, None);
        assert_eq!(step.speed, (1.5 * 0.92f64).max(0.4));
    }
}

#[test]
fn speed_is_clamped_at_both_ends() {
    let mut e = speed_math();
    for _ in 0..40 {
        let _ = e.process_answer(true, 10.0);
    }
    let s = e.state();
    assert_eq!(s.game_speed, 2.2);
    assert_eq!(s.phase, Phase::Overdrive);
    assert_eq!(s.difficulty, 10);
    assert_eq!(s.peak_game_speed, 2.2);

    for _ in 0..40 {
        let _ = e.process_answer(false, 10.0);
    }
    let s = e.state();
    assert_eq!(s.game_speed, 0.4);
    assert_eq!(s.phase, Phase::Warmup);
    assert_eq!(s.difficulty, 1);
    assert_eq!(s.peak_game_speed, 2.2);
    assert_eq!(s.questions_answered, 80);
}

#[test]
fn negative_response_time_is_a_speed_up() {
    let mut e = speed_math();
    let s = e.process_answer(true, -500.0);
    assert!((s.game_speed - 1.06).abs() < EPS);
}

#[test]
fn unknown_game_uses_fallback_budget() {
    let mut e = AdaptiveEngine::default();
    e.set_current_game("doesNotExist");
    assert_eq!(e.current_game(), "doesNotExist");
    assert_eq!(e.allowed_time(), 5_000);
    // 1000 / 5000 = 0.2 -> speed-up
    let s = e.process_answer(true, 1_000.0);
    assert!((s.game_speed - 1.06).abs() < EPS);
}

/* ──────────────────────────────────────────────────────────────────────────
2) Allowed time, timeouts, history
────────────────────────────────────────────────────────────────────────── */

#[test]
fn allowed_time_tracks_speed_and_game() {
    let mut e = speed_math();
    let _ = e.process_answer(true, 100.0);
    assert_eq!(e.allowed_time(), 9_433); // floor(10000 / 1.06)

    e.set_current_game(GameKind::QuickTap.id());
    assert_eq!(e.allowed_time(), 2_358); // floor(2500 / 1.06)
}

#[test]
fn timeout_is_a_wrong_answer_over_the_full_budget() {
    let mut e = speed_math();
    let _ = e.process_answer(true, 100.0);
    let before: Vec<f64> = e.recent_response_times().collect();

    let s = e.process_timeout();
    assert!((s.game_speed - 1.06 * 0.92).abs() < EPS);
    assert_eq!(s.questions_answered, 2);
    let after: Vec<f64> = e.recent_response_times().collect();
    assert_eq!(before, after);
}

#[test]
fn history_keeps_last_five_correct_latencies() {
    let mut e = speed_math();
    for rt in [100.0, 200.0, 300.0] {
        let _ = e.process_answer(true, rt);
    }
    let _ = e.process_answer(false, 999.0);
    for rt in [400.0, 500.0, 600.0, 700.0] {
        let _ = e.process_answer(true, rt);
    }
    let hist: Vec<f64> = e.recent_response_times().collect();
    assert_eq!(hist, vec![300.0, 400.0, 500.0, 600.0, 700.0]);
    assert_eq!(e.mean_response_time_ms(), Some(500.0));
}

#[test]
fn history_does_not_feed_back_into_speed() {
    // Same answer from the same speed gives the same step whatever came before.
    let mut a = speed_math();
    let mut b = speed_math();
    for _ in 0..3 {
        let _ = a.process_answer(true, 5_000.0);
        let _ = b.process_answer(true, 6_000.0);
    }
    assert_eq!(a.state().game_speed, b.state().game_speed);
    let sa = a.process_answer(true, 5_500.0);
    let sb = b.process_answer(true, 5_500.0);
    assert_eq!(sa.game_speed, sb.game_speed);
}

/* ──────────────────────────────────────────────────────────────────────────
3) Reset and session clock
────────────────────────────────────────────────────────────────────────── */

#[test]
fn reset_restores_initial_state() {
    let mut e = speed_math();
    e.set_current_game("colorMatch");
    for i in 0..12 {
        let _ = e.process_answer(i % 3 != 0, 300.0);
    }

    let t0 = Instant::now();
    e.reset_at(t0);
    let s = e.state();
    assert_eq!(s, AdaptiveState::initial(1.0, t0));
    assert_eq!(s.game_speed, 1.0);
    assert_eq!(s.phase, Phase::Warmup);
    assert_eq!(s.difficulty, 1);
    assert_eq!(s.questions_answered, 0);
    assert_eq!(s.peak_game_speed, 1.0);
    assert_eq!(e.current_game(), "speedMath");
    assert_eq!(e.recent_response_times().count(), 0);
    assert_eq!(e.mean_response_time_ms(), None);

    e.reset_at(t0);
    assert_eq!(e.state(), s);
}

#[test]
fn session_seconds_are_whole_and_saturating() {
    let mut e = AdaptiveEngine::default();
    let t0 = Instant::now();
    e.reset_at(t0);
    assert_eq!(e.session_seconds_at(t0 + Duration::from_millis(90_500)), 90);
    assert_eq!(e.session_seconds_at(t0), 0);
    assert!(e.session_seconds() < 60);
}

#[test]
fn initial_speed_respects_configured_bounds() {
    let cfg = AdaptiveConfig { min_speed: 1.3, ..AdaptiveConfig::default() };
    let e = AdaptiveEngine::new(cfg);
    let s = e.state();
    assert_eq!(s.game_speed, 1.3);
    assert_eq!(s.phase, Phase::Ramping);
    assert_eq!(s.difficulty, 1);
    assert_eq!(s.peak_game_speed, 1.3);
}

#[test]
fn report_serializes_for_the_bridge() {
    let mut e = speed_math();
    let _ = e.process_answer(true, 1_000.0);
    let _ = e.process_answer(true, 3_000.0);

    let v = serde_json::to_value(e.session_report()).unwrap();
    assert_eq!(v["questionsAnswered"], 2);
    assert_eq!(v["phase"], "warmup");
    assert_eq!(v["difficulty"], 4);
    assert_eq!(v["meanResponseTimeMs"], 2_000.0);
    assert!(v["sessionSeconds"].is_u64());
}

#[test]
fn game_params_follow_engine_state() {
    let mut e = speed_math();
    let p = e.game_params("swipeDirection");
    assert_eq!(p.difficulty(), 1);

    for _ in 0..10 {
        let _ = e.process_answer(true, 10.0);
    }
    let s = e.state();
    assert_eq!(s.phase, Phase::Overdrive);
    assert_eq!(e.game_params("swipeDirection").difficulty(), s.difficulty);
    assert_eq!(e.game_params("unknown").difficulty(), s.difficulty);
}

#[test]
fn first_question_of_a_session_is_the_easiest() {
    let mut e = speed_math();
    assert_eq!(e.state().difficulty, 1);
    match e.game_params("speedMath") {
        reflex_pace::GameParams::SpeedMath(p) => {
            assert_eq!(p.difficulty, 1);
            assert_eq!(p.max_operand, 8);
        }
        other => panic!("wrong shape: {other:?}"),
    }

    // The first answer reclassifies from speed, even on a hold.
    let s = e.process_answer(true, 5_000.0);
    assert_eq!(s.game_speed, 1.0);
    assert_eq!(s.difficulty, 4);

    e.reset();
    assert_eq!(e.state().difficulty, 1);
    assert_eq!(e.game_params("speedMath").difficulty(), 1);
}
