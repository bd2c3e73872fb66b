use crate::config::{self, Config, ConfigError};
use crate::game::{Game, GameError};
use crate::resources::{self, ResourceError};
use log::{debug, info};

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Resource(#[from] ResourceError),
    #[error("line {line}: {source}")]
    Game { line: usize, source: GameError },
}

pub fn run() -> Result<(), AppError> {
    let cfg = config::load()?;
    let lines = resources::extract_lines(&cfg.resource)?;
    let games = parse_games(&lines)?;
    let total = total_power(&games);
    info!("summed power of {} games", games.len());
    println!("{}", answer_line(&cfg, total));
    Ok(())
}

/// Parses every line; the first bad line aborts the whole batch.
pub fn parse_games(lines: &[String]) -> Result<Vec<Game>, AppError> {
    lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            line.parse::<Game>().map_err(|source| AppError::Game {
                line: idx + 1,
                source,
            })
        })
        .collect()
}

pub fn total_power(games: &[Game]) -> u64 {
    games
        .iter()
        .map(|game| {
            let power = game.power();
            debug!(
                "game {} ({} rounds): power {power}",
                game.id(),
                game.withdrawal_combinations().len()
            );
            power
        })
        .fold(0u64, u64::wrapping_add)
}

pub fn answer_line(cfg: &Config, total: u64) -> String {
    format!("{} {total}", cfg.answer_prefix)
}

#[cfg(test)]
mod tests {
    use super::{AppError, answer_line, parse_games, total_power};
    use crate::config::Config;
    use crate::game::GameError;
    use crate::resources;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|line| line.to_string()).collect()
    }

    #[test]
    fn sums_powers_in_order() {
        let games = parse_games(&lines(&[
            "Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green",
            "Game 2: 1 blue, 2 green",
        ]))
        .unwrap();
        assert_eq!(games.iter().map(|g| g.id()).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(total_power(&games), 48);
    }

    #[test]
    fn empty_input_sums_to_zero() {
        assert_eq!(total_power(&parse_games(&[]).unwrap()), 0);
    }

    #[test]
    fn bad_line_aborts_with_its_number() {
        let err = parse_games(&lines(&["Game 1: 1 red", "Game 2: 1 orange"])).unwrap_err();
        match err {
            AppError::Game { line, source } => {
                assert_eq!(line, 2);
                assert!(matches!(source, GameError::Combination { game_id: 2, .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bundled_input_total() {
        let games = parse_games(&resources::extract_lines("input").unwrap()).unwrap();
        assert_eq!(total_power(&games), 2286);
    }

    #[test]
    fn answer_line_format() {
        assert_eq!(
            answer_line(&Config::default(), 48),
            "A-ha! The answer to your little game is: 48"
        );
    }

    #[test]
    fn resource_error_keeps_the_elf_message() {
        let err: AppError = resources::extract_lines("nope").unwrap_err().into();
        assert_eq!(err.to_string(), resources::WRONG_INPUT_MESSAGE);
    }
}
