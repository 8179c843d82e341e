use serde::Serialize;

use super::format::Side;
use super::player::PlayerInMatch;
use super::HOLES_PER_ROUND;

/// Raw scores for one hole. The variant fixes which fields exist, so a
/// singles hole can never carry team arrays and vice versa.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(untagged, rename_all_fields = "camelCase")]
pub enum HoleInput {
    Singles {
        team_a_player_gross: Option<u8>,
        team_b_player_gross: Option<u8>,
    },
    Scramble {
        team_a_gross: Option<u8>,
        team_b_gross: Option<u8>,
        /// Which teammate (0 or 1) hit the drive that was used.
        #[serde(skip_serializing_if = "Option::is_none")]
        team_a_drive: Option<u8>,
        #[serde(skip_serializing_if = "Option::is_none")]
        team_b_drive: Option<u8>,
    },
    /// Best-ball and shamble: one gross per teammate.
    TeamPlayers {
        team_a_players_gross: [Option<u8>; 2],
        team_b_players_gross: [Option<u8>; 2],
    },
}

impl HoleInput {
    #[must_use]
    pub fn singles(team_a: u8, team_b: u8) -> Self {
        Self::Singles {
            team_a_player_gross: Some(team_a),
            team_b_player_gross: Some(team_b),
        }
    }

    #[must_use]
    pub fn scramble(team_a: u8, team_b: u8) -> Self {
        Self::Scramble {
            team_a_gross: Some(team_a),
            team_b_gross: Some(team_b),
            team_a_drive: None,
            team_b_drive: None,
        }
    }

    #[must_use]
    pub fn team_players(team_a: [u8; 2], team_b: [u8; 2]) -> Self {
        Self::TeamPlayers {
            team_a_players_gross: team_a.map(Some),
            team_b_players_gross: team_b.map(Some),
        }
    }

    /// Per-teammate gross scores for `side`, when this hole records them.
    #[must_use]
    pub fn players_gross(&self, side: Side) -> Option<[Option<u8>; 2]> {
        match (self, side) {
            (Self::TeamPlayers { team_a_players_gross, .. }, Side::TeamA) => {
                Some(*team_a_players_gross)
            }
            (Self::TeamPlayers { team_b_players_gross, .. }, Side::TeamB) => {
                Some(*team_b_players_gross)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn to_document(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// Hole inputs for a round, index = hole number - 1.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoleCard {
    holes: [Option<HoleInput>; HOLES_PER_ROUND],
}

impl HoleCard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Input for hole `number` (1-18). Out-of-range numbers have no input.
    #[must_use]
    pub fn get(&self, number: u8) -> Option<&HoleInput> {
        let idx = usize::from(number.checked_sub(1)?);
        self.holes.get(idx)?.as_ref()
    }

    /// Stores `input` for hole `number`; ignored when `number` is not 1-18.
    pub fn set(&mut self, number: u8, input: Option<HoleInput>) {
        if let Some(slot) = number
            .checked_sub(1)
            .and_then(|idx| self.holes.get_mut(usize::from(idx)))
        {
            *slot = input;
        }
    }

    /// `(hole number, input)` pairs for holes that have any input.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &HoleInput)> {
        (1u8..).zip(self.holes.iter()).filter_map(|(n, h)| h.as_ref().map(|h| (n, h)))
    }
}

impl FromIterator<(u8, HoleInput)> for HoleCard {
    fn from_iter<T: IntoIterator<Item = (u8, HoleInput)>>(iter: T) -> Self {
        let mut card = HoleCard::new();
        for (number, input) in iter {
            card.set(number, Some(input));
        }
        card
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchData {
    pub team_a_players: Vec<PlayerInMatch>,
    pub team_b_players: Vec<PlayerInMatch>,
    pub holes: HoleCard,
}

impl MatchData {
    #[must_use]
    pub fn new(
        team_a_players: Vec<PlayerInMatch>,
        team_b_players: Vec<PlayerInMatch>,
        holes: HoleCard,
    ) -> Self {
        Self {
            team_a_players,
            team_b_players,
            holes,
        }
    }

    #[must_use]
    pub fn team(&self, side: Side) -> &[PlayerInMatch] {
        match side {
            Side::TeamA => &self.team_a_players,
            Side::TeamB => &self.team_b_players,
        }
    }

    /// Strokes the `slot`-th player of `side` receives on `hole`. Missing
    /// players receive none.
    #[must_use]
    pub fn strokes_on(&self, side: Side, slot: usize, hole: u8) -> u8 {
        self.team(side)
            .get(slot)
            .map_or(0, |player| player.strokes_on(hole))
    }
}
