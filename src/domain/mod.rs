pub mod board;
pub mod geometry;
pub mod listing;
pub mod store;

pub use board::{PlacedSquare, PlacementBoard, SquareId};
pub use geometry::{ContainerRect, DropPoint};
pub use listing::Listing;
pub use store::{CatalogError, ListingStore};
