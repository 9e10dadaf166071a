mod animation;
pub mod error;
mod highlight;
mod scroll;

pub use animation::Animation;
