use serde::{Deserialize, Serialize};
use std::fmt;

/// One rental listing as it appears in the catalog document.
///
/// `url` is the identity. `likability` and `apply_likelihood` are the only
/// fields that change after load; they hold the listing's last board position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub url: String,
    pub address: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub bedrooms: Option<Quantity>,
    #[serde(default)]
    pub bathrooms: Option<Quantity>,
    #[serde(default)]
    pub price: Option<Quantity>,
    #[serde(default)]
    pub neighborhood: String,

    #[serde(default)]
    pub likability: Option<f64>,
    #[serde(default, rename = "applyLikelihood")]
    pub apply_likelihood: Option<f64>,
}

/// Catalog documents are hand-written, so counts and prices show up as
/// integers, decimals or strings ("2.5", "$1,800").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Int(n) => write!(f, "{n}"),
            Quantity::Float(n) => write!(f, "{n}"),
            Quantity::Text(s) => write!(f, "{s}"),
        }
    }
}

impl Listing {
    /// Overwrites the two preference scores from a board position.
    pub fn set_scores(&mut self, likability: f64, apply_likelihood: f64) {
        self.likability = Some(likability);
        self.apply_likelihood = Some(apply_likelihood);
    }

    /// "3 beds, 2 baths, $2400 a month in Fremont"
    pub fn summary_line(&self) -> String {
        format!(
            "{} beds, {} baths, ${} a month in {}",
            display_or_blank(&self.bedrooms),
            display_or_blank(&self.bathrooms),
            display_or_blank(&self.price),
            self.neighborhood
        )
    }

    pub fn description_lines(&self) -> impl Iterator<Item = &str> {
        self.description.lines()
    }
}

fn display_or_blank(q: &Option<Quantity>) -> String {
    q.as_ref().map(ToString::to_string).unwrap_or_default()
}

#[cfg(test)]
pub(crate) fn sample(url: &str, address: &str) -> Listing {
    Listing {
        url: url.to_string(),
        address: address.to_string(),
        description: format!("Sunny unit at {address}"),
        image_url: Some(format!("{url}/photo.jpg")),
        bedrooms: Some(Quantity::Int(2)),
        bathrooms: Some(Quantity::Float(1.5)),
        price: Some(Quantity::Int(2100)),
        neighborhood: "Ballard".to_string(),
        likability: None,
        apply_likelihood: None,
    }
}
