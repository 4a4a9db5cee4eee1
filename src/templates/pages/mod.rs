pub mod board;

pub use board::{board_page, BoardVm};
