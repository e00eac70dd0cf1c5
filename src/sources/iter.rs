use crate::cursor::Cursor;
use crate::sequence::Sequence;
use crate::step::Step;
use std::convert::Infallible;

/// Restartable sequence over any cloneable `IntoIterator`
///
/// Each cursor clones the underlying collection and owns its traversal, so
/// vectors, ranges, and other standard containers drop straight into a
/// pipeline.
pub struct IterSequence<I> {
    inner: I,
}

impl<I> IterSequence<I> {
    pub fn new(inner: I) -> Self {
        IterSequence { inner }
    }
}

impl<I> Sequence for IterSequence<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;
    type Error = Infallible;
    type Cursor = IterCursor<I::IntoIter>;

    fn cursor(&self) -> Self::Cursor {
        IterCursor {
            iter: self.inner.clone().into_iter(),
            done: false,
        }
    }
}

/// Cursor for [`IterSequence`]
///
/// Iterators are not required to be fused; the `done` latch keeps exhaustion
/// sticky even over an iterator that would yield again after `None`.
pub struct IterCursor<I> {
    iter: I,
    done: bool,
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;
    type Error = Infallible;

    fn advance(&mut self) -> Result<Step<I::Item>, Infallible> {
        if self.done {
            return Ok(Step::Done);
        }

        match self.iter.next() {
            Some(value) => Ok(Step::Value(value)),
            None => {
                self.done = true;
                Ok(Step::Done)
            }
        }
    }
}

/// Convenience function to wrap a cloneable `IntoIterator` as a sequence
pub fn from_iter<I>(inner: I) -> IterSequence<I>
where
    I: IntoIterator + Clone,
{
    IterSequence::new(inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::collect;

    #[test]
    fn test_iter_sequence_over_vec() {
        let sequence = from_iter(vec![1, 2, 3]);

        assert_eq!(collect(&sequence).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_iter_sequence_over_range() {
        let sequence = from_iter(0..4);

        assert_eq!(collect(&sequence).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_iter_sequence_restarts() {
        let sequence = from_iter(vec![1, 2]);

        assert_eq!(collect(&sequence).unwrap(), vec![1, 2]);
        assert_eq!(collect(&sequence).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_iter_sequence_cursors_are_independent() {
        let sequence = from_iter(vec![1, 2, 3]);

        let mut first = sequence.cursor();
        let mut second = sequence.cursor();

        assert_eq!(first.advance().unwrap(), Step::Value(1));
        assert_eq!(second.advance().unwrap(), Step::Value(1));
        assert_eq!(first.advance().unwrap(), Step::Value(2));
        assert_eq!(second.advance().unwrap(), Step::Value(2));
    }

    #[test]
    fn test_iter_cursor_is_fused_over_non_fused_iterator() {
        // Yields Some again after its first None
        #[derive(Clone)]
        struct Flicker {
            calls: u32,
        }

        impl Iterator for Flicker {
            type Item = u32;

            fn next(&mut self) -> Option<u32> {
                self.calls += 1;
                match self.calls {
                    1 => Some(1),
                    2 => None,
                    _ => Some(99),
                }
            }
        }

        #[derive(Clone)]
        struct FlickerSource;

        impl IntoIterator for FlickerSource {
            type Item = u32;
            type IntoIter = Flicker;

            fn into_iter(self) -> Flicker {
                Flicker { calls: 0 }
            }
        }

        let sequence = from_iter(FlickerSource);
        let mut cursor = sequence.cursor();

        assert_eq!(cursor.advance().unwrap(), Step::Value(1));
        assert_eq!(cursor.advance().unwrap(), Step::Done);
        // The underlying iterator would yield 99 here; the cursor must not
        assert_eq!(cursor.advance().unwrap(), Step::Done);
    }
}
