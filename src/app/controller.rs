// src/app/controller.rs
use crate::app::state::{AppState, Snapshot};
use crate::domain::{ContainerRect, DropPoint, Listing, ListingStore, SquareId};
use crate::ranking::{build_request, match_addresses, parse_addresses, Ranker, RankingError, RankingRequest};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum BoardError {
    #[error("no listing with url {0}")]
    UnknownListing(String),

    #[error("no square with id {0}")]
    UnknownSquare(SquareId),
}

/// Where the external ranking call runs once a cycle has begun.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingDispatch {
    /// Spawn a thread per cycle; the request handler returns immediately.
    Background,
    /// Run the call on the caller's thread before returning.
    Inline,
}

/// One outstanding ranking cycle.
#[derive(Debug, Clone)]
pub struct RankingTicket {
    pub generation: u64,
    pub request: RankingRequest,
}

/// Sole owner of the application state. Every mutation goes through here,
/// and every board change starts a new ranking cycle.
#[derive(Clone)]
pub struct AppController {
    state: Arc<Mutex<AppState>>,
    ranker: Arc<dyn Ranker>,
    max_tokens: u32,
    dispatch: RankingDispatch,
}

impl AppController {
    pub fn new(
        store: ListingStore,
        ranker: Arc<dyn Ranker>,
        max_tokens: u32,
        dispatch: RankingDispatch,
    ) -> Self {
        let state = AppState {
            store,
            ..AppState::default()
        };

        Self {
            state: Arc::new(Mutex::new(state)),
            ranker,
            max_tokens,
            dispatch,
        }
    }

    fn state(&self) -> MutexGuard<'_, AppState> {
        // State stays consistent across a panicking reader; keep serving.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state().snapshot()
    }

    pub fn listing(&self, url: &str) -> Option<Listing> {
        self.state().find_listing(url).cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.state().ranking.is_loading()
    }

    /// Drop of a catalog listing onto the board. Ok(None) means the listing
    /// already has a square and nothing changed.
    pub fn place_listing(
        &self,
        url: &str,
        drop: DropPoint,
        container: ContainerRect,
    ) -> Result<Option<SquareId>, BoardError> {
        let id = {
            let mut st = self.state();
            if st.board.contains_listing(url) {
                return Ok(None);
            }

            let listing = st
                .store
                .remove(url)
                .ok_or_else(|| BoardError::UnknownListing(url.to_string()))?;

            st.board.place_new(listing, drop, container)
        };

        tracing::info!(url, square = ?id, "listing placed");
        self.refresh_ranking();
        Ok(id)
    }

    pub fn move_square(
        &self,
        id: SquareId,
        drop: DropPoint,
        container: ContainerRect,
    ) -> Result<(), BoardError> {
        if !self.state().board.move_existing(id, drop, container) {
            return Err(BoardError::UnknownSquare(id));
        }

        tracing::debug!(square = id, "square moved");
        self.refresh_ranking();
        Ok(())
    }

    pub fn remove_square(&self, id: SquareId) -> Result<(), BoardError> {
        {
            let mut st = self.state();
            let listing = st
                .board
                .remove(id)
                .ok_or(BoardError::UnknownSquare(id))?;
            st.store.restore(listing);
        }

        tracing::info!(square = id, "square removed");
        self.refresh_ranking();
        Ok(())
    }

    /// Starts a ranking cycle for the current board and dispatches it.
    pub fn refresh_ranking(&self) {
        let Some(ticket) = self.begin_ranking() else {
            return;
        };

        match self.dispatch {
            RankingDispatch::Inline => self.run_ticket(ticket),
            RankingDispatch::Background => {
                let this = self.clone();
                std::thread::spawn(move || this.run_ticket(ticket));
            }
        }
    }

    /// Bumps the generation so any outstanding response goes stale. With an
    /// empty board the raw catalog is shown and no request is needed.
    pub fn begin_ranking(&self) -> Option<RankingTicket> {
        let mut st = self.state();
        st.ranking.generation += 1;

        if st.board.is_empty() {
            st.store.show_catalog_order();
            return None;
        }

        st.ranking.in_flight += 1;
        Some(RankingTicket {
            generation: st.ranking.generation,
            request: build_request(st.store.unplaced(), self.max_tokens),
        })
    }

    pub fn run_ticket(&self, ticket: RankingTicket) {
        let started = std::time::Instant::now();
        let result = self.ranker.complete(&ticket.request);
        tracing::debug!(generation = ticket.generation, elapsed = ?started.elapsed(), "ranking call returned");
        self.complete_ranking(&ticket, result);
    }

    /// Applies a finished cycle. Failures and stale responses leave the
    /// displayed order alone; the loading flag drops either way.
    pub fn complete_ranking(&self, ticket: &RankingTicket, result: Result<String, RankingError>) {
        let mut st = self.state();
        st.ranking.in_flight = st.ranking.in_flight.saturating_sub(1);

        let text = match result {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(generation = ticket.generation, error = %e, "ranking call failed");
                return;
            }
        };

        if ticket.generation != st.ranking.generation {
            tracing::warn!(
                generation = ticket.generation,
                latest = st.ranking.generation,
                "discarding superseded ranking response"
            );
            return;
        }

        let tokens = parse_addresses(&text);
        let ordered = match_addresses(&tokens, st.store.unplaced());
        tracing::info!(
            generation = ticket.generation,
            returned = tokens.len(),
            matched = ordered.len(),
            "ranking applied"
        );
        st.store.set_order(ordered);
    }
}
