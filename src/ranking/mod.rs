mod client;
mod models;
mod parse;
mod prompt;
mod ranking_error;

pub use client::{OpenAiRanker, Ranker};
pub use models::RankingRequest;
pub use parse::{match_addresses, parse_addresses};
pub use prompt::{build_request, SYSTEM_INSTRUCTION};
pub use ranking_error::RankingError;
