use crate::domain::{Listing, ListingStore, PlacedSquare, PlacementBoard};
use serde::Serialize;

/// Ranking-cycle bookkeeping.
///
/// Every board change bumps `generation`; only a response carrying the
/// latest generation may replace the displayed order.
#[derive(Debug, Default)]
pub struct RankingState {
    pub generation: u64,
    pub in_flight: usize,
}

impl RankingState {
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }
}

#[derive(Debug, Default)]
pub struct AppState {
    pub store: ListingStore,
    pub board: PlacementBoard,
    pub ranking: RankingState,
}

impl AppState {
    /// A listing by url, wherever it currently lives.
    pub fn find_listing(&self, url: &str) -> Option<&Listing> {
        self.store
            .find(url)
            .or_else(|| self.board.find_listing(url))
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            loading: self.ranking.is_loading(),
            generation: self.ranking.generation,
            squares: self.board.squares().to_vec(),
            ordered: self.store.ordered().to_vec(),
        }
    }
}

/// Everything the page needs to render, detached from the lock.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub loading: bool,
    pub generation: u64,
    pub squares: Vec<PlacedSquare>,
    pub ordered: Vec<Listing>,
}
