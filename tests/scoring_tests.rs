//! End-to-end scoring scenarios over full games.

use bank_heist::core::{GameState, RoundId, RoundUpdate, ScoringConfig, TeamId};
use bank_heist::scoring::ScoreEngine;

fn set(state: GameState, round: usize, update: RoundUpdate) -> GameState {
    state.with_update(RoundId::new(round), update)
}

fn correct(team: usize) -> RoundUpdate {
    RoundUpdate::SetCorrect { team: TeamId::new(team), value: true }
}

fn time(team: usize, seconds: f64) -> RoundUpdate {
    RoundUpdate::SetTime { team: TeamId::new(team), seconds }
}

fn blitz(team: usize) -> RoundUpdate {
    RoundUpdate::SetBlitz { team: TeamId::new(team), value: true }
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_first_round_fastest_team_wins() {
    let engine = ScoreEngine::default();
    let mut state = GameState::new();
    for (team, seconds) in [(0, 10.0), (1, 5.0), (2, 20.0)] {
        state = set(state, 0, time(team, seconds));
        state = set(state, 0, correct(team));
    }

    let placement = engine.placement_points(state.round(RoundId::new(0)));
    assert_eq!(placement.as_array(), &[75, 100, 50]);

    let scores: Vec<_> = TeamId::all()
        .map(|t| engine.round_score(&state, RoundId::new(0), t))
        .collect();
    assert_eq!(scores, vec![75, 100, 50]);
}

#[test]
fn test_final_round_unfinished_team_scores_nothing() {
    let engine = ScoreEngine::default();
    let state = set(GameState::new(), 4, correct(0));
    let state = set(state, 4, time(1, 30.0));

    let plain = engine.round_score(&state, RoundId::new(4), TeamId::new(0));
    let with_blitz = engine.round_score(&set(state.clone(), 4, blitz(0)), RoundId::new(4), TeamId::new(0));

    assert_eq!(engine.placement_points(state.round(RoundId::new(4)))[TeamId::new(0)], 0);
    assert_eq!(plain, 0);
    assert_eq!(with_blitz, 0);
}

#[test]
fn test_perfect_game_hits_maximum() {
    let engine = ScoreEngine::default();
    let mut state = GameState::new();
    for round in 0..5 {
        state = set(state, round, correct(2));
        state = set(state, round, time(2, 1.0));
        state = set(state, round, time(0, 2.0));
        state = set(state, round, time(1, 3.0));
    }

    // (1 + 1 + 2 + 2 + 3) x 100
    assert_eq!(engine.total_score(&state, TeamId::new(2)), 900);
    assert_eq!(engine.total_score(&state, TeamId::new(0)), 0);

    let board = engine.leaderboard(&state);
    assert_eq!(board[0].team, TeamId::new(2));
    assert_eq!(board[0].name, "Team Charlie");
    assert_eq!(board[0].position, 1);
}

#[test]
fn test_full_game_leaderboard() {
    let engine = ScoreEngine::default();
    let mut state = GameState::new();

    // Round 1 (x1): Bravo fastest, everyone correct.
    for (team, seconds) in [(0, 10.0), (1, 5.0), (2, 20.0)] {
        state = set(state, 0, time(team, seconds));
        state = set(state, 0, correct(team));
    }
    // Round 3 (x2): Alpha fastest but wrong; Charlie second and correct.
    state = set(state, 2, time(0, 4.0));
    state = set(state, 2, time(2, 6.0));
    state = set(state, 2, correct(2));
    // Round 5 (x3): Alpha alone finishes and is correct, with blitz.
    state = set(state, 4, time(0, 60.0));
    state = set(state, 4, correct(0));
    state = set(state, 4, blitz(0));

    let totals = engine.totals(&state);
    assert_eq!(totals[TeamId::new(0)], 75 + 300);
    assert_eq!(totals[TeamId::new(1)], 100);
    assert_eq!(totals[TeamId::new(2)], 50 + 150);

    let board = engine.leaderboard(&state);
    let order: Vec<_> = board.iter().map(|s| (s.position, s.name.as_str(), s.score)).collect();
    assert_eq!(
        order,
        vec![(1, "Team Alpha", 375), (2, "Team Charlie", 200), (3, "Team Bravo", 100)]
    );
}

#[test]
fn test_total_equals_sum_of_round_summaries() {
    let engine = ScoreEngine::default();
    let mut state = GameState::new();
    state = set(state, 1, time(1, 8.0));
    state = set(state, 1, correct(1));
    state = set(state, 3, time(1, 2.0));
    state = set(state, 3, time(0, 1.0));
    state = set(state, 3, correct(1));

    for team in TeamId::all() {
        let from_summaries: u32 = RoundId::all()
            .map(|r| engine.round_summary(&state, r).scores[team])
            .sum();
        assert_eq!(engine.total_score(&state, team), from_summaries);
    }
}

#[test]
fn test_custom_team_names_flow_into_leaderboard() {
    let engine = ScoreEngine::new(ScoringConfig::default().with_team_names(["Vault", "Safe", "Lock"]));
    let state = set(set(GameState::new(), 0, time(1, 3.0)), 0, correct(1));

    let board = engine.leaderboard(&state);
    assert_eq!(board[0].name, "Safe");
    assert_eq!(board[1].name, "Vault");
    assert_eq!(board[2].name, "Lock");
}
