use crate::cubes::{CubeColor, CubeError, CubeWithdrawalCombination};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

static HEADER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^Game (\d+)$").unwrap());

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("missing \": \" between header and draws in {0:?}")]
    MissingSeparator(String),
    #[error("expected \"Game <id>\", got {0:?}")]
    MalformedHeader(String),
    #[error("invalid game id in {header:?}: {source}")]
    Id {
        header: String,
        source: ParseIntError,
    },
    #[error("game {game_id}: {source}")]
    Combination { game_id: u32, source: CubeError },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    id: u32,
    withdrawal_combinations: Vec<CubeWithdrawalCombination>,
}

impl Game {
    pub fn new(id: u32, withdrawal_combinations: Vec<CubeWithdrawalCombination>) -> Self {
        Self {
            id,
            withdrawal_combinations,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn withdrawal_combinations(&self) -> &[CubeWithdrawalCombination] {
        &self.withdrawal_combinations
    }

    /// Smallest cube count per color that explains every draw of this game.
    pub fn minimum_cubes(&self) -> MinimumCubes {
        let mut minimums = MinimumCubes::default();
        for combination in &self.withdrawal_combinations {
            for withdrawal in combination.withdrawals() {
                minimums.raise(withdrawal.color(), withdrawal.amount());
            }
        }
        minimums
    }

    pub fn power(&self) -> u64 {
        self.minimum_cubes().power()
    }
}

impl FromStr for Game {
    type Err = GameError;

    // Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (header, body) = line
            .split_once(": ")
            .ok_or_else(|| GameError::MissingSeparator(line.to_string()))?;
        let id = parse_id(header)?;
        let withdrawal_combinations = body
            .split("; ")
            .map(str::parse)
            .collect::<Result<Vec<CubeWithdrawalCombination>, _>>()
            .map_err(|source| GameError::Combination { game_id: id, source })?;
        Ok(Self::new(id, withdrawal_combinations))
    }
}

fn parse_id(header: &str) -> Result<u32, GameError> {
    let caps = HEADER_RE
        .captures(header)
        .ok_or_else(|| GameError::MalformedHeader(header.to_string()))?;
    caps[1].parse().map_err(|source| GameError::Id {
        header: header.to_string(),
        source,
    })
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Game {}: ", self.id)?;
        for (i, combination) in self.withdrawal_combinations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{combination}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimumCubes {
    by_color: HashMap<CubeColor, u32>,
}

impl Default for MinimumCubes {
    fn default() -> Self {
        Self {
            by_color: HashMap::from([
                (CubeColor::Red, 0),
                (CubeColor::Green, 0),
                (CubeColor::Blue, 0),
            ]),
        }
    }
}

impl MinimumCubes {
    pub fn get(&self, color: CubeColor) -> u32 {
        self.by_color.get(&color).copied().unwrap_or(0)
    }

    fn raise(&mut self, color: CubeColor, amount: u32) {
        let current = self.by_color.entry(color).or_insert(0);
        if amount > *current {
            *current = amount;
        }
    }

    /// Product of the three minimums; zero when any color never showed up.
    /// Wraps on overflow.
    pub fn power(&self) -> u64 {
        CubeColor::ALL
            .iter()
            .map(|color| u64::from(self.get(*color)))
            .fold(1u64, u64::wrapping_mul)
    }
}
