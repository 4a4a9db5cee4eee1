use crate::domain::Listing;
use std::fs;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {msg}")]
    Io { path: String, msg: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Catalog JSON parse error: {0}")]
    JsonParse(String),
}

/// Unplaced listings plus the order they are currently displayed in.
///
/// The displayed order always holds exactly the unplaced listings the last
/// ranking cycle could match (or the raw catalog when the board is empty).
/// A placed listing never appears in either sequence.
#[derive(Debug, Default)]
pub struct ListingStore {
    catalog: Vec<Listing>,
    ordered: Vec<Listing>,
}

impl ListingStore {
    pub fn from_listings(listings: Vec<Listing>) -> Self {
        Self {
            ordered: listings.clone(),
            catalog: listings,
        }
    }

    /// Loads the catalog once. A failed load is logged and yields an empty
    /// store; there is no retry.
    pub fn load(source: &str) -> Self {
        match fetch_catalog(source) {
            Ok(listings) => {
                tracing::info!(count = listings.len(), source, "listing catalog loaded");
                Self::from_listings(listings)
            }
            Err(e) => {
                tracing::error!(source, error = %e, "error fetching listings");
                Self::default()
            }
        }
    }

    pub fn unplaced(&self) -> &[Listing] {
        &self.catalog
    }

    pub fn ordered(&self) -> &[Listing] {
        &self.ordered
    }

    pub fn find(&self, url: &str) -> Option<&Listing> {
        self.catalog.iter().find(|l| l.url == url)
    }

    /// Takes a listing out of the unplaced catalog (it is being placed).
    pub fn remove(&mut self, url: &str) -> Option<Listing> {
        let idx = self.catalog.iter().position(|l| l.url == url)?;
        self.ordered.retain(|l| l.url != url);
        Some(self.catalog.remove(idx))
    }

    /// Puts a listing back at the end of the catalog and the displayed order.
    /// It stays there until the next ranking cycle reorders it.
    pub fn restore(&mut self, listing: Listing) {
        if self.find(&listing.url).is_some() {
            return;
        }
        self.ordered.push(listing.clone());
        self.catalog.push(listing);
    }

    pub fn set_order(&mut self, sequence: Vec<Listing>) {
        self.ordered = sequence;
    }

    /// Displays the raw catalog, unranked.
    pub fn show_catalog_order(&mut self) {
        self.ordered = self.catalog.clone();
    }
}

/// Reads the catalog document from a local path or an http(s) URL.
pub fn fetch_catalog(source: &str) -> Result<Vec<Listing>, CatalogError> {
    let text = if source.starts_with("http://") || source.starts_with("https://") {
        let resp = reqwest::blocking::get(source)
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CatalogError::Network(format!("HTTP {status} for {source}")));
        }

        resp.text()
            .map_err(|e| CatalogError::Network(e.to_string()))?
    } else {
        fs::read_to_string(source).map_err(|e| CatalogError::Io {
            path: source.to_string(),
            msg: e.to_string(),
        })?
    };

    serde_json::from_str(&text).map_err(|e| CatalogError::JsonParse(e.to_string()))
}
