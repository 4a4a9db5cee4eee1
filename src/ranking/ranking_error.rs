#[derive(Debug, thiserror::Error)]
pub enum RankingError {
    #[error("Ranking config error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Completions API error: {status} - {body}")]
    Api { status: u16, body: String },

    #[error("Unexpected response format: {0}")]
    MalformedResponse(String),
}
