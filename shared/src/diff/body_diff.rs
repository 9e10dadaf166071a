use crate::{board::body::Body, text::renderable::RenderableText};

use super::BoardOp;

/// The ordered operations that move a viewer's rows from one body to the
/// next.
///
/// Contents are never compared: every surviving row is re-sent with
/// `Update`, so a dropped packet is repaired by the following refresh.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BodyDiff {
    ops: Vec<BoardOp>,
}

impl BodyDiff {
    pub fn between<T: RenderableText>(old: &Body<T>, new: &Body<T>) -> Self {
        Self::resize(old.size(), new.size())
    }

    /// Diff between bodies of `old_size` and `new_size` rows
    pub fn resize(old_size: usize, new_size: usize) -> Self {
        let mut ops = Vec::new();

        // rows retire from the highest score down, since the remaining rows
        // keep scores 0..new_size
        let mut visible = old_size;
        while visible > new_size {
            let score = visible - 1;
            ops.push(BoardOp::Remove(score));
            ops.push(BoardOp::RemoveScoreEntry(score));
            visible -= 1;
        }
        while visible < new_size {
            let score = visible;
            ops.push(BoardOp::AddScoreEntry(score));
            ops.push(BoardOp::Create(score));
            visible += 1;
        }

        ops.extend((0..new_size).map(BoardOp::Update));

        Self { ops }
    }

    pub fn ops(&self) -> &[BoardOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<BoardOp> {
        self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn created(&self) -> usize {
        self.count(|op| matches!(op, BoardOp::Create(_)))
    }

    pub fn removed(&self) -> usize {
        self.count(|op| matches!(op, BoardOp::Remove(_)))
    }

    pub fn updated(&self) -> usize {
        self.count(|op| matches!(op, BoardOp::Update(_)))
    }

    fn count(&self, filter: impl Fn(&BoardOp) -> bool) -> usize {
        self.ops.iter().filter(|op| filter(op)).count()
    }
}

impl IntoIterator for BodyDiff {
    type Item = BoardOp;
    type IntoIter = std::vec::IntoIter<BoardOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}
