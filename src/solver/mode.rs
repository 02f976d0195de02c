//! Mode selection
//!
//! A `Mode` is what the user asked for; an `Approach` is what actually runs
//! once AUTO has looked at the target.

use super::SolverConfig;
use std::fmt;
use std::str::FromStr;

/// Requested unscrambling mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Generate permutations and look each up (selector `0`)
    Permute,
    /// Test every dictionary word against the target (selector `1`)
    Scan,
    /// Pick by target length (selector `2`)
    #[default]
    Auto,
}

/// Algorithm that a run resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Approach {
    Permute,
    Scan,
}

/// Error for an unrecognized mode selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeError {
    Unrecognized(String),
}

impl fmt::Display for ModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrecognized(value) => write!(
                f,
                "Invalid mode '{value}' (expected 0/permute, 1/scan or 2/auto)"
            ),
        }
    }
}

impl std::error::Error for ModeError {}

impl Mode {
    pub const ALL: [Self; 3] = [Self::Permute, Self::Scan, Self::Auto];

    /// Parse a mode selector
    ///
    /// Accepts the integers `0`, `1`, `2` and the names `permute`, `scan`,
    /// `auto` (any case).
    ///
    /// # Errors
    ///
    /// Returns `ModeError::Unrecognized` for anything else.
    ///
    /// # Examples
    /// ```
    /// use unscrambler::solver::Mode;
    ///
    /// assert_eq!(Mode::from_selector("0").unwrap(), Mode::Permute);
    /// assert_eq!(Mode::from_selector("scan").unwrap(), Mode::Scan);
    /// assert!(Mode::from_selector("7").is_err());
    /// ```
    pub fn from_selector(selector: &str) -> Result<Self, ModeError> {
        match selector.trim().to_ascii_lowercase().as_str() {
            "0" | "permute" | "perm" => Ok(Self::Permute),
            "1" | "scan" => Ok(Self::Scan),
            "2" | "auto" => Ok(Self::Auto),
            _ => Err(ModeError::Unrecognized(selector.to_string())),
        }
    }

    /// Parse a mode selector, falling back to AUTO with a warning
    #[must_use]
    pub fn parse_or_auto(selector: &str) -> Self {
        Self::from_selector(selector).unwrap_or_else(|err| {
            log::warn!("{err}; defaulting to auto");
            Self::Auto
        })
    }

    /// Decide which algorithm runs for a target of `target_len` letters
    ///
    /// AUTO permutes below `config.threshold` and scans otherwise. It never
    /// picks the unpruned permutation path for a target past the length guard.
    ///
    /// # Examples
    /// ```
    /// use unscrambler::solver::{Approach, Mode, SolverConfig};
    ///
    /// let config = SolverConfig::default();
    /// assert_eq!(Mode::Auto.resolve(3, &config), Approach::Permute);
    /// assert_eq!(Mode::Auto.resolve(9, &config), Approach::Scan);
    /// ```
    #[must_use]
    pub fn resolve(self, target_len: usize, config: &SolverConfig) -> Approach {
        match self {
            Self::Permute => Approach::Permute,
            Self::Scan => Approach::Scan,
            Self::Auto if target_len >= config.threshold => Approach::Scan,
            Self::Auto if !config.prune && target_len > config.max_permutation_len => {
                log::debug!(
                    "Target length {target_len} is past the permutation limit {}; scanning",
                    config.max_permutation_len
                );
                Approach::Scan
            }
            Self::Auto => Approach::Permute,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Permute => "permute",
            Self::Scan => "scan",
            Self::Auto => "auto",
        }
    }
}

impl FromStr for Mode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_selector(s)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Approach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Permute => f.write_str("permute"),
            Self::Scan => f.write_str("scan"),
        }
    }
}
