use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for a built map.
///
/// Returned by [`LeagueMap::stats`](crate::LeagueMap::stats). `features`
/// counts everything in the input collection, `markers` only the points that
/// were placed, `skipped` the non-point features left to the overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapStats {
    pub features: usize,
    pub markers: usize,
    pub cities: usize,
    pub skipped: usize,
}
