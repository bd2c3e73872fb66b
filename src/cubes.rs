use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CubeColor {
    Red,
    Green,
    Blue,
}

impl CubeColor {
    pub const ALL: [CubeColor; 3] = [CubeColor::Red, CubeColor::Green, CubeColor::Blue];

    pub fn name(self) -> &'static str {
        match self {
            CubeColor::Red => "red",
            CubeColor::Green => "green",
            CubeColor::Blue => "blue",
        }
    }
}

impl fmt::Display for CubeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CubeError {
    #[error("unknown cube color {0:?}")]
    UnknownColor(String),
    #[error("expected \"<amount> <color>\", got {0:?}")]
    MalformedWithdrawal(String),
    #[error("invalid cube amount in {token:?}: {source}")]
    Amount {
        token: String,
        source: ParseIntError,
    },
}

impl FromStr for CubeColor {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" => Ok(CubeColor::Red),
            "green" => Ok(CubeColor::Green),
            "blue" => Ok(CubeColor::Blue),
            _ => Err(CubeError::UnknownColor(s.to_string())),
        }
    }
}

/// A single draw: some amount of cubes of one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubeWithdrawal {
    color: CubeColor,
    amount: u32,
}

impl CubeWithdrawal {
    pub fn new(color: CubeColor, amount: u32) -> Self {
        Self { color, amount }
    }

    pub fn color(&self) -> CubeColor {
        self.color
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }
}

impl FromStr for CubeWithdrawal {
    type Err = CubeError;

    // "3 blue"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (amount, color) = s
            .split_once(' ')
            .ok_or_else(|| CubeError::MalformedWithdrawal(s.to_string()))?;
        let amount = amount.parse().map_err(|source| CubeError::Amount {
            token: s.to_string(),
            source,
        })?;
        Ok(Self::new(color.parse()?, amount))
    }
}

impl fmt::Display for CubeWithdrawal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.color)
    }
}

/// One round of draws, in the order they were written down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeWithdrawalCombination {
    withdrawals: Vec<CubeWithdrawal>,
}

impl CubeWithdrawalCombination {
    pub fn new(withdrawals: Vec<CubeWithdrawal>) -> Self {
        Self { withdrawals }
    }

    pub fn withdrawals(&self) -> &[CubeWithdrawal] {
        &self.withdrawals
    }
}

impl FromStr for CubeWithdrawalCombination {
    type Err = CubeError;

    // "3 blue, 4 red"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let withdrawals = s
            .split(", ")
            .map(str::parse)
            .collect::<Result<Vec<CubeWithdrawal>, _>>()?;
        Ok(Self::new(withdrawals))
    }
}

impl fmt::Display for CubeWithdrawalCombination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, withdrawal) in self.withdrawals.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{withdrawal}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{CubeColor, CubeError, CubeWithdrawal, CubeWithdrawalCombination};

    #[test]
    fn colors_parse_case_insensitively() {
        assert_eq!("red".parse::<CubeColor>().unwrap(), CubeColor::Red);
        assert_eq!("GREEN".parse::<CubeColor>().unwrap(), CubeColor::Green);
        assert_eq!("Blue".parse::<CubeColor>().unwrap(), CubeColor::Blue);
    }

    #[test]
    fn unknown_color_is_rejected() {
        let err = "2 purple".parse::<CubeWithdrawal>().unwrap_err();
        assert_eq!(err, CubeError::UnknownColor("purple".to_string()));
    }

    #[test]
    fn withdrawal_needs_amount_and_color() {
        assert_eq!(
            "blue".parse::<CubeWithdrawal>().unwrap_err(),
            CubeError::MalformedWithdrawal("blue".to_string())
        );
        assert!(matches!(
            "-1 blue".parse::<CubeWithdrawal>(),
            Err(CubeError::Amount { .. })
        ));
        assert!(matches!(
            "two blue".parse::<CubeWithdrawal>(),
            Err(CubeError::Amount { .. })
        ));
    }

    #[test]
    fn combination_keeps_written_order() {
        let combination: CubeWithdrawalCombination = "3 blue, 4 Red".parse().unwrap();
        assert_eq!(
            combination.withdrawals(),
            &[
                CubeWithdrawal::new(CubeColor::Blue, 3),
                CubeWithdrawal::new(CubeColor::Red, 4),
            ]
        );
        assert_eq!(combination.to_string(), "3 blue, 4 red");
    }

    #[test]
    fn single_withdrawal_combination() {
        let combination: CubeWithdrawalCombination = "2 green".parse().unwrap();
        assert_eq!(combination.withdrawals().len(), 1);
        assert_eq!(combination.withdrawals()[0].color(), CubeColor::Green);
        assert_eq!(combination.withdrawals()[0].amount(), 2);
    }
}
