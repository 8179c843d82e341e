use serde::{Deserialize, Serialize};

use super::HOLES_PER_ROUND;

/// One stroke flag (0 or 1) per hole, index = hole number - 1.
pub type StrokeTable = [u8; HOLES_PER_ROUND];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInMatch {
    pub player_id: String,
    pub strokes_received: StrokeTable,
}

impl PlayerInMatch {
    #[must_use]
    pub fn new(player_id: impl Into<String>, strokes_received: StrokeTable) -> Self {
        Self {
            player_id: player_id.into(),
            strokes_received,
        }
    }

    /// Empty slot used to pad a side up to the format's team size.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::new("", [0; HOLES_PER_ROUND])
    }

    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.player_id.is_empty()
    }

    /// Strokes received on `hole` (1-18); 0 for anything out of range.
    #[must_use]
    pub fn strokes_on(&self, hole: u8) -> u8 {
        hole.checked_sub(1)
            .and_then(|idx| self.strokes_received.get(usize::from(idx)))
            .copied()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn total_strokes(&self) -> u32 {
        self.strokes_received.iter().map(|&s| u32::from(s)).sum()
    }
}

/// Pads with placeholders or truncates so a side has exactly `size` players.
#[must_use]
pub fn normalize_team(mut players: Vec<PlayerInMatch>, size: usize) -> Vec<PlayerInMatch> {
    players.truncate(size);
    players.resize_with(size, PlayerInMatch::placeholder);
    players
}
