pub mod affix;
pub mod capabilities;
pub mod encoder;
pub mod error;
pub mod generation;
pub mod packets;
