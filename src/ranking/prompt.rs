use crate::domain::Listing;
use crate::ranking::RankingRequest;

pub const SYSTEM_INSTRUCTION: &str = "Order the following homes from best to worst based on the likability and likelihood of the other homes. If a home is more similar to a home with a high likelyhood and likability, rank it higher. ONLY INCLUDE A LIST OF ADDRESSES SEPARATED BY A SEMICOLON, NOTHING ELSE:";

const CONTENT_SUFFIX: &str = ". If none have likability ratings, order them in the same order.";

/// One line per unplaced listing, in catalog order, then the fallback hint.
pub fn build_request(unplaced: &[Listing], max_tokens: u32) -> RankingRequest {
    let lines: Vec<String> = unplaced
        .iter()
        .map(|l| {
            format!(
                "Address: {}, Likability: {}, Apply Likelihood: {}",
                l.address,
                score(l.likability),
                score(l.apply_likelihood)
            )
        })
        .collect();

    RankingRequest {
        system: SYSTEM_INSTRUCTION.to_string(),
        user: lines.join("\n") + CONTENT_SUFFIX,
        max_tokens,
    }
}

fn score(v: Option<f64>) -> String {
    match v {
        Some(n) => n.to_string(),
        None => "undefined".to_string(),
    }
}
