pub mod body;
pub mod error;
pub mod line;
pub mod title;
