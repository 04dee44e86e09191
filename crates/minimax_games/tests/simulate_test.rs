//! Tests for AI vs random self-play.

use minimax_games::{SimulationReport, run_simulation};

#[test]
fn test_ai_never_loses_a_simulation() {
    let report = run_simulation(25, 3).unwrap();
    assert_eq!(report.games, 25);
    assert_eq!(report.ai_losses, 0);
    assert_eq!(report.ai_wins + report.draws, 25);
}

#[test]
fn test_simulation_is_reproducible() {
    assert_eq!(run_simulation(10, 99).unwrap(), run_simulation(10, 99).unwrap());
}

#[test]
fn test_report_json() {
    let report = SimulationReport {
        games: 2,
        ai_wins: 1,
        draws: 1,
        ai_losses: 0,
    };
    let json = serde_json::to_value(report).unwrap();
    assert_eq!(json["games"], 2);
    assert_eq!(json["ai_losses"], 0);
}
