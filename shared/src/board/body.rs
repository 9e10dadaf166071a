use std::slice::Iter;

use crate::{
    animation::Animation,
    text::{legacy::colorize, renderable::RenderableText},
};

use super::{
    error::ContractError,
    line::{Line, MAX_LINES},
};

/// The ordered rows of a board.
///
/// Line indices are always contiguous `0..size()` and the size never
/// exceeds [`MAX_LINES`]. Rows are shown top to bottom with descending
/// scores: `score = size - index - 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct Body<T> {
    lines: Vec<Line<T>>,
}

/// A board's body is its whole row model
pub type ScoreboardModel<T> = Body<T>;

impl<T: RenderableText> Body<T> {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Builds a body from row contents, top first. Contents past
    /// [`MAX_LINES`] are dropped.
    pub fn of<I: IntoIterator<Item = T>>(contents: I) -> Self {
        let mut body = Self::new();
        for content in contents {
            body.push(content);
        }
        body
    }

    pub fn get(&self, index: usize) -> Option<&Line<T>> {
        self.lines.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Line<T>> {
        self.lines.get_mut(index)
    }

    pub fn score_of(&self, index: usize) -> Option<usize> {
        (index < self.size()).then(|| self.size() - index - 1)
    }

    pub fn line_by_score(&self, score: usize) -> Option<&Line<T>> {
        let index = self.size().checked_sub(score + 1)?;
        self.get(index)
    }

    /// Inserts `line` at its own index (clamped to the end). Does nothing
    /// and returns false when the body is full.
    pub fn add_line(&mut self, mut line: Line<T>) -> bool {
        if self.lines.len() >= MAX_LINES {
            return false;
        }
        let index = line.index().min(self.lines.len());
        line.set_index(index);
        self.lines.insert(index, line);
        self.reindex(index + 1);
        true
    }

    /// Appends a row, returns false when the body is full
    pub fn push(&mut self, content: T) -> bool {
        let index = self.lines.len();
        self.add_line(Line::at(content, index))
    }

    pub fn push_animated(&mut self, animation: Animation<T>) -> bool {
        let index = self.lines.len();
        let line = Line::at(animation.original().clone(), index).with_animation(animation);
        self.add_line(line)
    }

    /// Removes the row at `index`; rows below it move up
    pub fn remove_line(&mut self, index: usize) -> Option<Line<T>> {
        if index >= self.lines.len() {
            return None;
        }
        let line = self.lines.remove(index);
        self.reindex(index);
        Some(line)
    }

    /// Replaces a row's content. The row loses any animation it had.
    pub fn update_line_content(&mut self, index: usize, content: T) -> Result<(), ContractError> {
        let size = self.size();
        let Some(line) = self.lines.get_mut(index) else {
            return Err(ContractError::LineOutOfRange { line: index, size });
        };
        *line = Line::at(content, index);
        Ok(())
    }

    pub fn set_line(&mut self, index: usize, mut line: Line<T>) -> Result<(), ContractError> {
        let size = self.size();
        let Some(slot) = self.lines.get_mut(index) else {
            return Err(ContractError::LineOutOfRange { line: index, size });
        };
        line.set_index(index);
        *slot = line;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn size(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Line<T>> {
        self.lines.iter()
    }

    /// Independent deep copy, animation cursors included
    pub fn snapshot(&self) -> Self {
        self.clone()
    }

    /// Carries running animations from this (old) body over to `new_body`.
    ///
    /// Only applies when both bodies have the same size. A row keeps the old
    /// row's animation when the regenerated row has none, or has one with
    /// the same sequence, so an adapter rebuilding its lines every tick
    /// does not restart their animations.
    pub fn copy_line_contents(&self, mut new_body: Body<T>) -> Body<T> {
        if self.size() != new_body.size() {
            return new_body;
        }

        for (old_line, new_line) in self.lines.iter().zip(new_body.lines.iter_mut()) {
            let Some(running) = old_line.animation() else {
                continue;
            };
            let keep = match new_line.animation() {
                None => true,
                Some(supplied) => supplied.same_sequence(running),
            };
            if keep {
                new_line.set_animation(Some(running.clone()));
            }
        }

        new_body
    }

    fn reindex(&mut self, from: usize) {
        for (index, line) in self.lines.iter_mut().enumerate().skip(from) {
            line.set_index(index);
        }
    }
}

impl Body<String> {
    /// Body from text lines with `&` color codes
    pub fn legacy<S: AsRef<str>>(lines: &[S]) -> Self {
        Self::of(lines.iter().map(|line| colorize('&', line.as_ref())))
    }
}

impl<T: RenderableText> Default for Body<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a Body<T> {
    type Item = &'a Line<T>;
    type IntoIter = Iter<'a, Line<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
