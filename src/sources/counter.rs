use crate::cursor::Cursor;
use crate::sequence::Sequence;
use crate::step::Step;
use std::convert::Infallible;

/// Infinite sequence counting up from a starting value
///
/// Never reports exhaustion; always pair it with a bounding operator such as
/// `take` or `take_while` before draining.
pub struct Counter {
    start: u64,
}

impl Counter {
    pub fn new(start: u64) -> Self {
        Counter { start }
    }
}

impl Sequence for Counter {
    type Item = u64;
    type Error = Infallible;
    type Cursor = CounterCursor;

    fn cursor(&self) -> Self::Cursor {
        CounterCursor { next: self.start }
    }
}

/// Cursor for [`Counter`]
pub struct CounterCursor {
    next: u64,
}

impl Cursor for CounterCursor {
    type Item = u64;
    type Error = Infallible;

    fn advance(&mut self) -> Result<Step<u64>, Infallible> {
        let value = self.next;
        self.next += 1;
        Ok(Step::Value(value))
    }
}

/// Convenience function to create an infinite counting sequence
pub fn counter(start: u64) -> Counter {
    Counter::new(start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::take::TakeExt;
    use crate::testing::collect;

    #[test]
    fn test_counter_counts_from_start() {
        let sequence = counter(5).take(4);

        assert_eq!(collect(&sequence).unwrap(), vec![5, 6, 7, 8]);
    }

    #[test]
    fn test_counter_restarts() {
        let base = counter(0);

        let mut first = base.cursor();
        assert_eq!(first.advance().unwrap(), Step::Value(0));
        assert_eq!(first.advance().unwrap(), Step::Value(1));

        let mut second = base.cursor();
        assert_eq!(second.advance().unwrap(), Step::Value(0));
    }

    #[test]
    fn test_counter_cursors_do_not_interfere() {
        let base = counter(10);

        let mut first = base.cursor();
        let mut second = base.cursor();

        assert_eq!(first.advance().unwrap(), Step::Value(10));
        assert_eq!(first.advance().unwrap(), Step::Value(11));
        assert_eq!(second.advance().unwrap(), Step::Value(10));
    }
}
