use chrono::{Duration, TimeZone, Utc};
use zonetrix::config::EngineConfig;
use zonetrix::logging::init_logging;
use zonetrix::models::Bar;
use zonetrix::signals::SignalEngine;

fn main() {
    init_logging();

    let config = EngineConfig::default();

    let scenarios = [
        ("steady uptrend", build_uptrend(90)),
        ("steady downtrend", build_downtrend(90)),
        ("dip with accumulation", build_dip_with_volume(90)),
    ];

    for (name, bars) in &scenarios {
        println!("{name}:");
        match SignalEngine::evaluate(bars, &config) {
            Some(analysis) => print_analysis(&analysis),
            None => println!("  insufficient data"),
        }
        println!();
    }
}

fn print_analysis(analysis: &zonetrix::signals::Analysis) {
    let snapshot = &analysis.snapshot;
    let signal = &analysis.signal;

    println!("  Price: ${:.2}", snapshot.price);
    println!(
        "  Tracker stop: ${:.2} (gap {:+.1}%)",
        snapshot.tracker.stop, snapshot.tracker.gap_percent
    );
    println!(
        "  Oscillator: RSI {:.1}, {:?} ({}d)",
        snapshot.oscillator.rsi, snapshot.oscillator.trend, snapshot.oscillator.days_since_flip
    );
    println!(
        "  Scores: trend {}, timing {}, momentum {}",
        snapshot.trend_score.score, snapshot.timing_score.score, snapshot.momentum.score
    );
    println!("  Zone: {} ({}%)", signal.zone.display(), signal.confidence);
    println!("  Grade: {}", signal.entry.display());
    println!("  Entry allowed: {}", signal.entry_allowed);
    println!("  Action: {}", signal.zone.action);
    for warning in &signal.warnings {
        println!("  ! {} {}", warning.kind.emoji(), warning.message);
    }
}

fn build_uptrend(count: usize) -> Vec<Bar> {
    let start = Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            let base = 100.0 + i as f64 * 0.3;
            Bar::new(
                base,
                base + 0.4,
                base - 0.2,
                base + 0.2,
                1_000_000.0 + i as f64 * 5_000.0,
                start + Duration::days(i as i64),
            )
        })
        .collect()
}

fn build_downtrend(count: usize) -> Vec<Bar> {
    let start = Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            let base = 150.0 - i as f64 * 0.4;
            Bar::new(
                base,
                base + 0.2,
                base - 0.4,
                base - 0.2,
                1_200_000.0 + i as f64 * 4_000.0,
                start + Duration::days(i as i64),
            )
        })
        .collect()
}

fn build_dip_with_volume(count: usize) -> Vec<Bar> {
    let start = Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap();
    let turn = count * 2 / 3;
    (0..count)
        .map(|i| {
            let base = if i < turn {
                120.0 + i as f64 * 0.2
            } else {
                120.0 + turn as f64 * 0.2 - (i - turn) as f64 * 0.5
            };
            // Heavy up-bar volume into the dip reads as accumulation.
            let volume = if i >= turn && i % 2 == 0 {
                3_000_000.0
            } else {
                900_000.0
            };
            Bar::new(
                base,
                base + 0.3,
                base - 0.3,
                if i >= turn && i % 2 == 0 { base + 0.1 } else { base - 0.1 },
                volume,
                start + Duration::days(i as i64),
            )
        })
        .collect()
}
