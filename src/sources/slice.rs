use crate::cursor::Cursor;
use crate::sequence::Sequence;
use crate::step::Step;
use std::convert::Infallible;

/// Restartable sequence over a borrowed slice
///
/// Values are cloned out of the slice as the cursor advances; the sequence can
/// be traversed any number of times and cursors never interfere with each
/// other.
pub struct SliceSequence<'a, T> {
    data: &'a [T],
}

impl<'a, T> SliceSequence<'a, T> {
    pub fn new(data: &'a [T]) -> Self {
        SliceSequence { data }
    }
}

impl<'a, T: Clone> Sequence for SliceSequence<'a, T> {
    type Item = T;
    type Error = Infallible;
    type Cursor = SliceCursor<'a, T>;

    fn cursor(&self) -> Self::Cursor {
        SliceCursor {
            data: self.data,
            position: 0,
        }
    }
}

/// Cursor for [`SliceSequence`]
pub struct SliceCursor<'a, T> {
    data: &'a [T],
    position: usize,
}

impl<'a, T: Clone> Cursor for SliceCursor<'a, T> {
    type Item = T;
    type Error = Infallible;

    fn advance(&mut self) -> Result<Step<T>, Infallible> {
        match self.data.get(self.position) {
            Some(value) => {
                self.position += 1;
                Ok(Step::Value(value.clone()))
            }
            None => Ok(Step::Done),
        }
    }
}

/// Convenience function to wrap a slice as a sequence
pub fn from_slice<T>(data: &[T]) -> SliceSequence<'_, T> {
    SliceSequence::new(data)
}
