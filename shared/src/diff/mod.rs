mod body_diff;
mod board_op;

pub use body_diff::BodyDiff;
pub use board_op::BoardOp;
