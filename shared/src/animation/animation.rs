use super::error::AnimationError;

/// A cyclic sequence of frames for a title or row.
///
/// Advancing only moves the cursor; frames are never mutated. Each session
/// owns its animations, so there is no internal synchronization.
#[derive(Clone, Debug, PartialEq)]
pub struct Animation<T> {
    original: T,
    frames: Vec<T>,
    cursor: isize,
}

impl<T: Clone> Animation<T> {
    pub fn new(original: T, frames: Vec<T>) -> Result<Self, AnimationError> {
        if frames.is_empty() {
            return Err(AnimationError::EmptySequence);
        }
        Ok(Self {
            original,
            frames,
            cursor: 0,
        })
    }

    /// Returns the frame under the cursor, then advances it, wrapping to
    /// the first frame past the end
    pub fn next_frame(&mut self) -> T {
        if self.cursor < 0 || self.cursor >= self.len() as isize {
            self.cursor = 0;
        }
        let frame = self.frames[self.cursor as usize].clone();
        self.cursor += 1;
        frame
    }

    /// Steps the cursor back first, wrapping to the last frame before the
    /// start, then returns the frame under it
    pub fn previous_frame(&mut self) -> T {
        self.cursor -= 1;
        if self.cursor < 0 || self.cursor >= self.len() as isize {
            self.cursor = self.len() as isize - 1;
        }
        self.frames[self.cursor as usize].clone()
    }

    /// The frame the next call to `next_frame` would return
    pub fn peek(&self) -> &T {
        if self.cursor < 0 || self.cursor >= self.len() as isize {
            return &self.frames[0];
        }
        &self.frames[self.cursor as usize]
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

impl<T> Animation<T> {
    pub fn original(&self) -> &T {
        &self.original
    }

    pub fn frames(&self) -> &[T] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn cursor(&self) -> isize {
        self.cursor
    }
}

impl<T: PartialEq> Animation<T> {
    /// Same original and frames, whatever the cursor position
    pub fn same_sequence(&self, other: &Animation<T>) -> bool {
        self.original == other.original && self.frames == other.frames
    }
}
