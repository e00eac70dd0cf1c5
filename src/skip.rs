use crate::cursor::Cursor;
use crate::sequence::Sequence;
use crate::step::Step;

/// Sequence adapter that discards the first `count` values of its source and
/// passes everything after through unchanged
pub struct Skip<S> {
    source: S,
    count: usize,
}

impl<S> Skip<S> {
    pub fn new(source: S, count: usize) -> Self {
        Skip { source, count }
    }
}

impl<S: Sequence> Sequence for Skip<S> {
    type Item = S::Item;
    type Error = S::Error;
    type Cursor = SkipCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        SkipCursor {
            source: self.source.cursor(),
            remaining: self.count,
            done: false,
        }
    }
}

/// Cursor for [`Skip`]
pub struct SkipCursor<C> {
    source: C,
    remaining: usize,
    done: bool,
}

impl<C: Cursor> Cursor for SkipCursor<C> {
    type Item = C::Item;
    type Error = C::Error;

    fn advance(&mut self) -> Result<Step<C::Item>, C::Error> {
        if self.done {
            return Ok(Step::Done);
        }

        // Discard the skip budget on the first pull; if the source ends
        // inside the budget, exhaustion is reported immediately.
        while self.remaining > 0 {
            match self.source.advance() {
                Ok(Step::Value(_)) => self.remaining -= 1,
                Ok(Step::Done) => {
                    self.remaining = 0;
                    self.done = true;
                    return Ok(Step::Done);
                }
                Err(error) => {
                    self.remaining = 0;
                    self.done = true;
                    return Err(error);
                }
            }
        }

        match self.source.advance() {
            Ok(Step::Value(value)) => Ok(Step::Value(value)),
            Ok(Step::Done) => {
                self.done = true;
                Ok(Step::Done)
            }
            Err(error) => {
                self.done = true;
                Err(error)
            }
        }
    }
}

/// Operator form of [`Skip`] for use with [`pipe`](crate::pipe::pipe)
pub fn skip<S: Sequence>(count: usize) -> impl FnOnce(S) -> Skip<S> {
    move |source| Skip::new(source, count)
}

/// Extension trait to add .skip() method support for sequences
pub trait SkipExt: Sequence + Sized {
    fn skip(self, count: usize) -> Skip<Self> {
        Skip::new(self, count)
    }
}

/// Implement SkipExt for all sequences
impl<S: Sequence> SkipExt for S {}
