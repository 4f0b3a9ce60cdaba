//! `bank-heist`: terminal scoreboard for the Bank Heist of Hypotheses quiz.
//!
//! ```text
//! bank-heist [--data-dir DIR] <command>
//!
//!   show                     leaderboard and every round
//!   round N                  one round in detail
//!   correct R T on|off       mark team T's answer in round R
//!   blitz R T on|off         mark team T's blitz answer in round R
//!   time R T SECONDS         record team T's time in round R (0 clears it)
//!   rules                    print the scoring rules
//!   reset [--yes]            discard all results
//! ```
//!
//! Rounds and teams are numbered from 1. The save directory defaults to
//! `$BANK_HEIST_DATA_DIR`, then `./.bank-heist`.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use log::info;

use bank_heist::core::{parse_time, RoundId, RoundUpdate, ScoringConfig, TeamId, ROUND_COUNT, TEAM_COUNT};
use bank_heist::scoring::ScoreEngine;
use bank_heist::store::{FileStorage, GameStateStore, LoadOutcome};
use bank_heist::GameState;

const DATA_DIR_ENV: &str = "BANK_HEIST_DATA_DIR";
const DEFAULT_DATA_DIR: &str = ".bank-heist";

const USAGE: &str = "usage: bank-heist [--data-dir DIR] \
<show | round N | correct R T on|off | blitz R T on|off | time R T SECONDS | rules | reset [--yes]>";

pub fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let data_dir = take_data_dir(&mut args)?;

    let config = ScoringConfig::default();
    let engine = ScoreEngine::new(config.clone());

    if args.first().map(String::as_str) == Some("rules") {
        println!("{}", config.rules_summary());
        return Ok(());
    }

    let storage = FileStorage::new(&data_dir);
    let (mut store, outcome) = GameStateStore::open(storage, config.storage_key.clone())
        .with_context(|| format!("opening game in {}", data_dir.display()))?;
    if let LoadOutcome::Recovered(reason) = &outcome {
        eprintln!("warning: saved game was unreadable ({reason}); started a new game");
    }

    let words: Vec<&str> = args.iter().map(String::as_str).collect();
    match words.as_slice() {
        [] | ["show"] => print_game(&engine, store.state()),
        ["round", n] => print_round(&engine, store.state(), parse_round(n)?),
        ["correct", r, t, flag] => {
            let (round, team) = (parse_round(r)?, parse_team(t)?);
            let state = store.update_field(round, RoundUpdate::SetCorrect { team, value: parse_flag(flag)? })?;
            print_round(&engine, state, round);
        }
        ["blitz", r, t, flag] => {
            let (round, team) = (parse_round(r)?, parse_team(t)?);
            let state = store.update_field(round, RoundUpdate::SetBlitz { team, value: parse_flag(flag)? })?;
            print_round(&engine, state, round);
        }
        ["time", r, t, seconds] => {
            let (round, team) = (parse_round(r)?, parse_team(t)?);
            let state = store.update_field(round, RoundUpdate::SetTime { team, seconds: parse_time(seconds) })?;
            print_round(&engine, state, round);
        }
        ["reset", rest @ ..] => {
            let confirmed = rest == ["--yes"] || confirm("Reset all game data?")?;
            if confirmed {
                let state = store.reset()?;
                info!("Game reset");
                print_game(&engine, state);
            } else {
                println!("Reset cancelled.");
            }
        }
        _ => bail!("{USAGE}"),
    }

    Ok(())
}

fn take_data_dir(args: &mut Vec<String>) -> Result<PathBuf> {
    if let Some(pos) = args.iter().position(|a| a == "--data-dir") {
        if pos + 1 >= args.len() {
            bail!("--data-dir needs a directory");
        }
        let dir = args.remove(pos + 1);
        args.remove(pos);
        return Ok(PathBuf::from(dir));
    }

    Ok(std::env::var_os(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)))
}

fn parse_round(arg: &str) -> Result<RoundId> {
    arg.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| RoundId::try_from(i).ok())
        .with_context(|| format!("round must be 1-{ROUND_COUNT}, got {arg:?}"))
}

fn parse_team(arg: &str) -> Result<TeamId> {
    arg.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| TeamId::try_from(i).ok())
        .with_context(|| format!("team must be 1-{TEAM_COUNT}, got {arg:?}"))
}

fn parse_flag(arg: &str) -> Result<bool> {
    match arg {
        "on" | "yes" | "true" | "1" => Ok(true),
        "off" | "no" | "false" | "0" => Ok(false),
        _ => bail!("expected on or off, got {arg:?}"),
    }
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

fn print_game(engine: &ScoreEngine, state: &GameState) {
    println!("LEADERBOARD");
    for standing in engine.leaderboard(state) {
        println!("  #{} {:<14} {:>5}", standing.position, standing.name, standing.score);
    }

    for round in RoundId::all() {
        println!();
        print_round(engine, state, round);
    }
}

fn print_round(engine: &ScoreEngine, state: &GameState, round: RoundId) {
    let summary = engine.round_summary(state, round);
    let record = state.round(round);

    println!("{} (x{})", round, summary.coefficient);
    for team in TeamId::all() {
        let time = if record.finished(team) {
            format!("{}s", record.time(team))
        } else {
            "-".to_string()
        };
        let placed = summary
            .placed(team)
            .map(|p| format!("place pts {p}"))
            .unwrap_or_default();

        println!(
            "  {:<14} correct:{:<3} blitz:{:<3} time:{:<8} {:<14} score {}",
            engine.config().team_name(team),
            if record.is_correct(team) { "yes" } else { "no" },
            if record.is_blitz(team) { "yes" } else { "no" },
            time,
            placed,
            summary.scores[team],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_parse_round_is_one_based() {
        assert_eq!(parse_round("1").unwrap(), RoundId::new(0));
        assert_eq!(parse_round("5").unwrap(), RoundId::new(4));
    }

    #[test]
    fn test_parse_round_rejects_out_of_range() {
        assert!(parse_round("0").is_err());
        assert!(parse_round("6").is_err());
        assert!(parse_round("-1").is_err());
        assert!(parse_round("two").is_err());
    }

    #[test]
    fn test_parse_team() {
        assert_eq!(parse_team("1").unwrap(), TeamId::new(0));
        assert_eq!(parse_team("3").unwrap(), TeamId::new(2));
        assert!(parse_team("0").is_err());
        assert!(parse_team("4").is_err());
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("on").unwrap());
        assert!(parse_flag("yes").unwrap());
        assert!(!parse_flag("off").unwrap());
        assert!(!parse_flag("0").unwrap());
        assert!(parse_flag("maybe").is_err());
    }

    #[test]
    fn test_take_data_dir_removes_flag_and_value() {
        let mut words = args(&["time", "--data-dir", "/tmp/quiz", "1", "2", "30"]);

        let dir = take_data_dir(&mut words).unwrap();

        assert_eq!(dir, PathBuf::from("/tmp/quiz"));
        assert_eq!(words, args(&["time", "1", "2", "30"]));
    }

    #[test]
    fn test_take_data_dir_needs_value() {
        let mut words = args(&["show", "--data-dir"]);
        assert!(take_data_dir(&mut words).is_err());
    }
}
