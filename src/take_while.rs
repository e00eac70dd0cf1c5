use crate::cursor::Cursor;
use crate::sequence::Sequence;
use crate::step::Step;

/// Sequence adapter that yields values while a predicate holds, then ends
///
/// The first value failing the predicate terminates the traversal for good:
/// the cursor latches and never pulls its source again, even if later values
/// would satisfy the predicate.
pub struct TakeWhile<S, F> {
    source: S,
    predicate: F,
}

impl<S, F> TakeWhile<S, F> {
    pub fn new(source: S, predicate: F) -> Self {
        TakeWhile { source, predicate }
    }
}

impl<S, F> Sequence for TakeWhile<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) -> bool + Clone,
{
    type Item = S::Item;
    type Error = S::Error;
    type Cursor = TakeWhileCursor<S::Cursor, F>;

    fn cursor(&self) -> Self::Cursor {
        TakeWhileCursor {
            source: self.source.cursor(),
            predicate: self.predicate.clone(),
            stopped: false,
        }
    }
}

/// Cursor for [`TakeWhile`]
///
/// Two states: running (`stopped == false`) and stopped. Stopped is terminal;
/// a stopped cursor reports exhaustion without touching the source.
pub struct TakeWhileCursor<C, F> {
    source: C,
    predicate: F,
    stopped: bool,
}

impl<C, F> Cursor for TakeWhileCursor<C, F>
where
    C: Cursor,
    F: Fn(&C::Item) -> bool,
{
    type Item = C::Item;
    type Error = C::Error;

    fn advance(&mut self) -> Result<Step<C::Item>, C::Error> {
        if self.stopped {
            return Ok(Step::Done);
        }

        match self.source.advance() {
            Ok(Step::Value(value)) => {
                if (self.predicate)(&value) {
                    Ok(Step::Value(value))
                } else {
                    self.stopped = true;
                    Ok(Step::Done)
                }
            }
            Ok(Step::Done) => {
                self.stopped = true;
                Ok(Step::Done)
            }
            Err(error) => {
                self.stopped = true;
                Err(error)
            }
        }
    }
}

/// Operator form of [`TakeWhile`] for use with [`pipe`](crate::pipe::pipe)
pub fn take_while<S, F>(predicate: F) -> impl FnOnce(S) -> TakeWhile<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) -> bool + Clone,
{
    move |source| TakeWhile::new(source, predicate)
}

/// Extension trait to add .take_while() method support for sequences
pub trait TakeWhileExt: Sequence + Sized {
    fn take_while<F>(self, predicate: F) -> TakeWhile<Self, F>
    where
        F: Fn(&Self::Item) -> bool + Clone,
    {
        TakeWhile::new(self, predicate)
    }
}

/// Implement TakeWhileExt for all sequences
impl<S: Sequence> TakeWhileExt for S {}
