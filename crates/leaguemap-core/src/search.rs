// crates/leaguemap-core/src/search.rs

use crate::builder::LeagueMap;
use crate::model::{CityLayer, Player};
use crate::text::equals_folded;
use crate::traits::NameMatch;

/// Lookup operations over a built map.
///
/// These mirror the in-page search control (substring on `Name`) so the same
/// query can be checked from the terminal.
pub trait PlayerSearch {
    /// Players whose name contains `query` (accent- and case-insensitive).
    fn find_players(&self, query: &str) -> Vec<&Player>;

    /// City layers whose name contains `query`.
    fn find_cities(&self, query: &str) -> Vec<&CityLayer>;

    /// Players playing for exactly `team` (accent- and case-insensitive).
    fn players_of_team(&self, team: &str) -> Vec<&Player>;
}

impl PlayerSearch for LeagueMap {
    fn find_players(&self, query: &str) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| p.name_contains(query))
            .collect()
    }

    fn find_cities(&self, query: &str) -> Vec<&CityLayer> {
        self.cities
            .iter()
            .filter(|c| c.name_contains(query))
            .collect()
    }

    fn players_of_team(&self, team: &str) -> Vec<&Player> {
        let team = team.trim();
        self.players
            .iter()
            .filter(|p| !team.is_empty() && equals_folded(p.team.trim(), team))
            .collect()
    }
}
