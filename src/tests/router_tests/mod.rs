mod board_tests;
mod page_tests;
