/// One row-level wire operation, addressed by score.
///
/// `Create`/`Update`/`Remove` act on the row's team, the score entries act
/// on the row token's score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoardOp {
    Create(usize),
    Update(usize),
    Remove(usize),
    AddScoreEntry(usize),
    RemoveScoreEntry(usize),
}

impl BoardOp {
    pub fn score(&self) -> usize {
        match self {
            BoardOp::Create(score)
            | BoardOp::Update(score)
            | BoardOp::Remove(score)
            | BoardOp::AddScoreEntry(score)
            | BoardOp::RemoveScoreEntry(score) => *score,
        }
    }

    /// Whether this operation changes the set of visible rows
    pub fn is_structural(&self) -> bool {
        !matches!(self, BoardOp::Update(_))
    }
}
