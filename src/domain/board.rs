use crate::domain::geometry::{ContainerRect, DropPoint, Placement};
use crate::domain::Listing;
use serde::Serialize;

pub type SquareId = u64;

/// A listing the user has positioned on the preference plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedSquare {
    pub id: SquareId,
    pub top: f64,
    pub left: f64,
    pub listing: Listing,
}

/// Placed squares, keyed by a monotonic id that is never reused.
///
/// At most one square references a given listing url.
#[derive(Debug)]
pub struct PlacementBoard {
    squares: Vec<PlacedSquare>,
    next_id: SquareId,
}

impl Default for PlacementBoard {
    fn default() -> Self {
        Self {
            squares: Vec::new(),
            next_id: 1,
        }
    }
}

impl PlacementBoard {
    pub fn squares(&self) -> &[PlacedSquare] {
        &self.squares
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    pub fn contains_listing(&self, url: &str) -> bool {
        self.squares.iter().any(|s| s.listing.url == url)
    }

    pub fn find_listing(&self, url: &str) -> Option<&Listing> {
        self.squares
            .iter()
            .map(|s| &s.listing)
            .find(|l| l.url == url)
    }

    pub fn get(&self, id: SquareId) -> Option<&PlacedSquare> {
        self.squares.iter().find(|s| s.id == id)
    }

    /// Places a listing dropped from the catalog. Returns None (and changes
    /// nothing) when a square already references the listing.
    pub fn place_new(
        &mut self,
        mut listing: Listing,
        drop: DropPoint,
        container: ContainerRect,
    ) -> Option<SquareId> {
        if self.contains_listing(&listing.url) {
            return None;
        }

        let p = Placement::from_drop(drop, container);
        listing.set_scores(p.likability, p.apply_likelihood);

        let id = self.next_id;
        self.next_id += 1;

        self.squares.push(PlacedSquare {
            id,
            top: p.top,
            left: p.left,
            listing,
        });

        Some(id)
    }

    /// Repositions an existing square and recomputes its listing's scores.
    /// Returns false when no square has this id.
    pub fn move_existing(
        &mut self,
        id: SquareId,
        drop: DropPoint,
        container: ContainerRect,
    ) -> bool {
        let Some(square) = self.squares.iter_mut().find(|s| s.id == id) else {
            return false;
        };

        let p = Placement::from_drop(drop, container);
        square.top = p.top;
        square.left = p.left;
        square.listing.set_scores(p.likability, p.apply_likelihood);
        true
    }

    /// Deletes a square and hands back its listing so it can be restored
    /// to the catalog.
    pub fn remove(&mut self, id: SquareId) -> Option<Listing> {
        let idx = self.squares.iter().position(|s| s.id == id)?;
        Some(self.squares.remove(idx).listing)
    }
}
