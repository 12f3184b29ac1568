//! Integration test: the headless simulator

use cashflow::simulator::{run_simulation, SimConfig};

#[test]
fn test_quick_simulation_completes() {
    let config = SimConfig::quick(42);
    let report = run_simulation(&config);

    assert_eq!(report.num_runs, config.num_runs);
    assert_eq!(report.run_stats.len(), config.num_runs as usize);
    for run in &report.run_stats {
        assert!(run.total_ticks <= config.max_ticks_per_run);
        assert!(run.purchases > 0);
        assert!(run.min_balance <= run.peak_balance);
        assert!(run.final_level >= 1);
    }
    assert!(report.to_text().contains("SIMULATION REPORT"));
}

#[test]
fn test_seeded_simulation_is_reproducible() {
    let a = run_simulation(&SimConfig::quick(9));
    let b = run_simulation(&SimConfig::quick(9));
    assert_eq!(a.run_stats, b.run_stats);
}

#[test]
fn test_cash_only_never_finances() {
    let report = run_simulation(&SimConfig::quick(3).cash_only());
    assert!(report
        .run_stats
        .iter()
        .all(|run| run.financed_purchases == 0));
}
