use crate::cursor::Cursor;
use crate::sequence::Sequence;
use crate::step::Step;
use std::error::Error;

/// Sequence over an iterator of `Result` values
///
/// This is the source-side error channel made concrete: `Ok` items flow
/// through as values, an `Err` item surfaces from `advance()` and ends the
/// traversal. Sources that read from fallible inputs (parsed records, line
/// readers) fit this shape.
pub struct TryIterSequence<I> {
    inner: I,
}

impl<I> TryIterSequence<I> {
    pub fn new(inner: I) -> Self {
        TryIterSequence { inner }
    }
}

impl<I, T, E> Sequence for TryIterSequence<I>
where
    I: IntoIterator<Item = Result<T, E>> + Clone,
    E: Error,
{
    type Item = T;
    type Error = E;
    type Cursor = TryIterCursor<I::IntoIter>;

    fn cursor(&self) -> Self::Cursor {
        TryIterCursor {
            iter: self.inner.clone().into_iter(),
            done: false,
        }
    }
}

/// Cursor for [`TryIterSequence`]
pub struct TryIterCursor<I> {
    iter: I,
    done: bool,
}

impl<I, T, E> Cursor for TryIterCursor<I>
where
    I: Iterator<Item = Result<T, E>>,
    E: Error,
{
    type Item = T;
    type Error = E;

    fn advance(&mut self) -> Result<Step<T>, E> {
        if self.done {
            return Ok(Step::Done);
        }

        match self.iter.next() {
            Some(Ok(value)) => Ok(Step::Value(value)),
            Some(Err(error)) => {
                self.done = true;
                Err(error)
            }
            None => {
                self.done = true;
                Ok(Step::Done)
            }
        }
    }
}

/// Convenience function to wrap an iterator of `Result` values as a sequence
pub fn from_try_iter<I, T, E>(inner: I) -> TryIterSequence<I>
where
    I: IntoIterator<Item = Result<T, E>> + Clone,
    E: Error,
{
    TryIterSequence::new(inner)
}
