// demos/session.rs
// Run with:
//   cargo run --example session

use reflex_pace::sim::{SettleBand, SyntheticPlayer, play_until_settled};
use reflex_pace::{AdaptiveConfigOverride, AdaptiveEngine, GameKind};

fn main() -> Result<(), reflex_pace::ConfigError> {
    // Slightly more forgiving than the defaults.
    let ov = AdaptiveConfigOverride {
        error_penalty: Some(0.95),
        ..Default::default()
    };

    // (label, mean latency ms, jitter, accuracy, seed)
    let players = [
        ("careful", 4_500.0, 0.15, 0.97, 1),
        ("average", 2_500.0, 0.25, 0.90, 2),
        ("twitchy", 1_200.0, 0.35, 0.80, 3),
    ];

    for kind in [GameKind::SpeedMath, GameKind::ColorMatch, GameKind::QuickTap] {
        println!("== {} (base {} ms) ==", kind, kind.base_time_ms());
        for (label, latency, jitter, accuracy, seed) in players {
            let mut engine = AdaptiveEngine::try_with_overrides(ov)?;
            engine.set_current_game(kind.id());

            let player = SyntheticPlayer::new(latency, jitter, accuracy, seed);
            let band = SettleBand { window: 12, tolerance: 0.15 };
            let out = play_until_settled(&mut engine, &player, band, 400);

            println!(
                "{label:>8}: speed {:.3} (peak {:.3}) {} d={} after {} q, settled={}, budget {} ms",
                out.state.game_speed,
                out.state.peak_game_speed,
                out.state.phase,
                out.state.difficulty,
                out.questions,
                out.settled,
                engine.allowed_time(),
            );
            println!("          params: {:?}", engine.game_params(kind.id()));
        }
    }
    Ok(())
}
