pub mod chat_color;
pub mod component;
pub mod legacy;
pub mod renderable;
