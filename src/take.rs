use crate::cursor::Cursor;
use crate::sequence::Sequence;
use crate::step::Step;

/// Sequence adapter that yields at most the first `count` values of its source
pub struct Take<S> {
    source: S,
    count: usize,
}

impl<S> Take<S> {
    pub fn new(source: S, count: usize) -> Self {
        Take { source, count }
    }
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;
    type Error = S::Error;
    type Cursor = TakeCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        TakeCursor {
            source: self.source.cursor(),
            remaining: self.count,
        }
    }
}

/// Cursor for [`Take`]
///
/// `remaining == 0` doubles as the exhaustion latch: once the budget is spent
/// (or the source ends early) the source is never pulled again.
pub struct TakeCursor<C> {
    source: C,
    remaining: usize,
}

impl<C: Cursor> Cursor for TakeCursor<C> {
    type Item = C::Item;
    type Error = C::Error;

    fn advance(&mut self) -> Result<Step<C::Item>, C::Error> {
        if self.remaining == 0 {
            return Ok(Step::Done);
        }

        match self.source.advance() {
            Ok(Step::Value(value)) => {
                self.remaining -= 1;
                Ok(Step::Value(value))
            }
            Ok(Step::Done) => {
                self.remaining = 0;
                Ok(Step::Done)
            }
            Err(error) => {
                self.remaining = 0;
                Err(error)
            }
        }
    }
}

/// Operator form of [`Take`] for use with [`pipe`](crate::pipe::pipe)
pub fn take<S: Sequence>(count: usize) -> impl FnOnce(S) -> Take<S> {
    move |source| Take::new(source, count)
}

/// Extension trait to add .take() method support for sequences
pub trait TakeExt: Sequence + Sized {
    fn take(self, count: usize) -> Take<Self> {
        Take::new(self, count)
    }
}

/// Implement TakeExt for all sequences
impl<S: Sequence> TakeExt for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{counter, from_iter, from_try_iter};
    use crate::testing::{Probe, SourceFailure, collect};

    #[test]
    fn test_take_fewer_than_source() {
        let sequence = from_iter(vec![1, 2, 3, 4, 5]).take(3);

        assert_eq!(collect(&sequence).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_take_more_than_source() {
        let sequence = from_iter(vec![1, 2, 3]).take(5);

        assert_eq!(collect(&sequence).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_take_zero_never_pulls_source() {
        let (probe, pulls) = Probe::new(from_iter(vec![1, 2, 3]));
        let sequence = probe.take(0);

        assert_eq!(collect(&sequence).unwrap(), Vec::<i32>::new());
        assert_eq!(pulls.get(), 0);
    }

    #[test]
    fn test_take_empty_source() {
        let sequence = from_iter(Vec::<i32>::new()).take(3);

        assert_eq!(collect(&sequence).unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn test_take_sticky_exhaustion() {
        let (probe, pulls) = Probe::new(from_iter(vec![1, 2, 3, 4, 5]));
        let sequence = probe.take(2);

        let mut cursor = sequence.cursor();
        assert_eq!(cursor.advance().unwrap(), Step::Value(1));
        assert_eq!(cursor.advance().unwrap(), Step::Value(2));

        // n + 5 further advances all report exhaustion without pulling
        for _ in 0..5 {
            assert_eq!(cursor.advance().unwrap(), Step::Done);
        }
        assert_eq!(pulls.get(), 2);
    }

    #[test]
    fn test_take_from_infinite_source() {
        let sequence = counter(0).take(3);

        assert_eq!(collect(&sequence).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_take_with_strings() {
        let sequence = from_iter(vec!["hello", "world", "foo", "bar"]).take(2);

        assert_eq!(collect(&sequence).unwrap(), vec!["hello", "world"]);
    }

    #[test]
    fn test_take_restarts_from_fresh_cursor() {
        let sequence = from_iter(vec![1, 2, 3]).take(2);

        assert_eq!(collect(&sequence).unwrap(), vec![1, 2]);
        assert_eq!(collect(&sequence).unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_take_propagates_source_error() {
        let sequence = from_try_iter(vec![Ok(1), Err(SourceFailure), Ok(3)]).take(3);

        let mut cursor = sequence.cursor();
        assert_eq!(cursor.advance().unwrap(), Step::Value(1));
        assert_eq!(cursor.advance(), Err(SourceFailure));
        assert_eq!(cursor.advance(), Ok(Step::Done));
    }
}
