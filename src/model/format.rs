use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four supported match-play formats.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Format {
    Singles,
    TwoManBestBall,
    TwoManShamble,
    TwoManScramble,
}

impl Format {
    pub const ALL: [Format; 4] = [
        Format::Singles,
        Format::TwoManBestBall,
        Format::TwoManShamble,
        Format::TwoManScramble,
    ];

    /// Players per side.
    #[must_use]
    pub fn team_size(self) -> usize {
        match self {
            Self::Singles => 1,
            Self::TwoManBestBall | Self::TwoManShamble | Self::TwoManScramble => 2,
        }
    }

    /// Whether handicap strokes apply to hole scores.
    #[must_use]
    pub fn uses_net(self) -> bool {
        matches!(self, Self::Singles | Self::TwoManBestBall)
    }

    #[must_use]
    pub fn is_team_format(self) -> bool {
        self.team_size() > 1
    }

    /// Best-ball and shamble record one score per teammate.
    #[must_use]
    pub fn has_individual_team_scores(self) -> bool {
        matches!(self, Self::TwoManBestBall | Self::TwoManShamble)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Singles => "singles",
            Self::TwoManBestBall => "twoManBestBall",
            Self::TwoManShamble => "twoManShamble",
            Self::TwoManScramble => "twoManScramble",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown match format '{s}'"))
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    #[serde(rename = "teamA")]
    TeamA,
    #[serde(rename = "teamB")]
    TeamB,
}

impl Side {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TeamA => "teamA",
            Self::TeamB => "teamB",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of a single hole, or of a whole match once it closes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    #[serde(rename = "teamA")]
    TeamA,
    #[serde(rename = "teamB")]
    TeamB,
    #[serde(rename = "AS")]
    AllSquare,
}

impl Outcome {
    /// Lower score wins; equal scores halve.
    #[must_use]
    pub fn from_scores(team_a: i32, team_b: i32) -> Self {
        match team_a.cmp(&team_b) {
            std::cmp::Ordering::Less => Self::TeamA,
            std::cmp::Ordering::Greater => Self::TeamB,
            std::cmp::Ordering::Equal => Self::AllSquare,
        }
    }
}

impl From<Side> for Outcome {
    fn from(side: Side) -> Self {
        match side {
            Side::TeamA => Self::TeamA,
            Side::TeamB => Self::TeamB,
        }
    }
}
