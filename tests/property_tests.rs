//! Property tests for the scoring rules and persistence.

use proptest::prelude::*;

use bank_heist::core::{GameState, RoundId, RoundRecord, RoundUpdate, TeamId, TeamMap, ROUND_COUNT};
use bank_heist::scoring::ScoreEngine;
use bank_heist::store::{GameStateStore, LoadOutcome, MemoryStorage};

/// Times including plenty of "did not finish" zeros and exact ties.
fn time_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        (1u32..6).prop_map(f64::from),
        0.1f64..600.0,
    ]
}

fn record_strategy() -> impl Strategy<Value = RoundRecord> {
    (
        any::<[bool; 3]>(),
        any::<[bool; 3]>(),
        [time_strategy(), time_strategy(), time_strategy()],
    )
        .prop_map(|(correct, blitz, times)| RoundRecord {
            correct: TeamMap::from_array(correct),
            blitz: TeamMap::from_array(blitz),
            times: TeamMap::from_array(times),
        })
}

fn state_strategy() -> impl Strategy<Value = GameState> {
    prop::collection::vec(record_strategy(), ROUND_COUNT).prop_map(|records| {
        records
            .into_iter()
            .zip(RoundId::all())
            .fold(GameState::new(), |state, (record, round)| {
                TeamId::all().fold(state, |state, team| {
                    state
                        .with_update(round, RoundUpdate::SetCorrect { team, value: record.is_correct(team) })
                        .with_update(round, RoundUpdate::SetBlitz { team, value: record.is_blitz(team) })
                        .with_update(round, RoundUpdate::SetTime { team, seconds: record.time(team) })
                })
            })
    })
}

proptest! {
    #[test]
    fn prop_first_place_awarded_iff_someone_finished(record in record_strategy()) {
        let engine = ScoreEngine::default();
        let points = engine.placement_points(&record);

        let winners = points.iter().filter(|(_, &p)| p == 100).count();
        let anyone_finished = TeamId::all().any(|t| record.time(t) > 0.0);
        prop_assert_eq!(winners, usize::from(anyone_finished));

        for team in TeamId::all() {
            if record.time(team) <= 0.0 {
                prop_assert_eq!(points[team], 0);
            }
        }
    }

    #[test]
    fn prop_placement_sum_bounded(record in record_strategy()) {
        let engine = ScoreEngine::default();
        let points = engine.placement_points(&record);

        let total: u32 = points.as_array().iter().sum();
        prop_assert!(total <= 225);

        let finishers = TeamId::all().filter(|&t| record.finished(t)).count();
        let mut awarded: Vec<u32> = points.as_array().iter().copied().filter(|&p| p > 0).collect();
        awarded.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(awarded, [100, 75, 50][..finishers].to_vec());
    }

    #[test]
    fn prop_faster_team_never_places_lower(record in record_strategy()) {
        let engine = ScoreEngine::default();
        let points = engine.placement_points(&record);

        for a in TeamId::all() {
            for b in TeamId::all() {
                if record.finished(a) && record.finished(b) && record.time(a) < record.time(b) {
                    prop_assert!(points[a] > points[b]);
                }
            }
        }
    }

    #[test]
    fn prop_incorrect_scores_zero(state in state_strategy()) {
        let engine = ScoreEngine::default();

        for (round, record) in state.rounds() {
            for team in TeamId::all() {
                if !record.is_correct(team) {
                    prop_assert_eq!(engine.round_score(&state, round, team), 0);
                }
            }
        }
    }

    #[test]
    fn prop_blitz_has_no_effect(state in state_strategy()) {
        let engine = ScoreEngine::default();

        for round in RoundId::all() {
            for team in TeamId::all() {
                let flipped = state.with_update(
                    round,
                    RoundUpdate::SetBlitz { team, value: !state.round(round).is_blitz(team) },
                );
                prop_assert_eq!(
                    engine.round_score(&state, round, team),
                    engine.round_score(&flipped, round, team)
                );
            }
        }
    }

    #[test]
    fn prop_total_is_sum_of_rounds(state in state_strategy()) {
        let engine = ScoreEngine::default();

        for team in TeamId::all() {
            let sum: u32 = RoundId::all().map(|r| engine.round_score(&state, r, team)).sum();
            prop_assert_eq!(engine.total_score(&state, team), sum);
            prop_assert!(sum <= 1500);
        }
    }

    #[test]
    fn prop_leaderboard_sorted_descending(state in state_strategy()) {
        let engine = ScoreEngine::default();
        let board = engine.leaderboard(&state);

        prop_assert_eq!(board.len(), 3);
        for pair in board.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].team < pair[1].team);
            }
        }
        for (i, standing) in board.iter().enumerate() {
            prop_assert_eq!(standing.position, i + 1);
            prop_assert_eq!(standing.score, engine.total_score(&state, standing.team));
        }
    }

    #[test]
    fn prop_persist_then_load_is_identity(state in state_strategy()) {
        let (mut store, _) = GameStateStore::open(MemoryStorage::new(), "bankHeist").unwrap();
        for (round, record) in state.rounds() {
            for team in TeamId::all() {
                store.update_field(round, RoundUpdate::SetCorrect { team, value: record.is_correct(team) }).unwrap();
                store.update_field(round, RoundUpdate::SetBlitz { team, value: record.is_blitz(team) }).unwrap();
                store.update_field(round, RoundUpdate::SetTime { team, seconds: record.time(team) }).unwrap();
            }
        }
        prop_assert_eq!(store.state(), &state);

        let (loaded, outcome) = GameStateStore::load(store.storage(), "bankHeist").unwrap();
        prop_assert_eq!(outcome, LoadOutcome::Restored);
        prop_assert_eq!(loaded, state);
    }

    #[test]
    fn prop_update_changes_only_its_cell(
        state in state_strategy(),
        round in 0..ROUND_COUNT,
        team in 0..3usize,
        seconds in time_strategy(),
    ) {
        let round = RoundId::new(round);
        let team = TeamId::new(team);
        let updated = state.with_update(round, RoundUpdate::SetTime { team, seconds });

        for (r, record) in updated.rounds() {
            let before = state.round(r);
            prop_assert_eq!(&record.correct, &before.correct);
            prop_assert_eq!(&record.blitz, &before.blitz);
            for t in TeamId::all() {
                let expected = if (r, t) == (round, team) { seconds } else { before.time(t) };
                prop_assert_eq!(record.time(t), expected);
            }
        }
    }
}
