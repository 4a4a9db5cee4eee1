mod controller;
mod state;

pub use controller::{AppController, BoardError, RankingDispatch, RankingTicket};
pub use state::{AppState, RankingState, Snapshot};
