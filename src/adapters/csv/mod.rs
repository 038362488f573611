//! Delimited text files
//!
//! Reads the user mapping table and writes the board export.

pub mod board;
pub mod users;

pub use board::write_board;
pub use users::read_user_mapping;
