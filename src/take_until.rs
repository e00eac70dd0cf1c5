use crate::cursor::Cursor;
use crate::sequence::Sequence;
use crate::step::Step;

/// Sequence adapter that yields values until a predicate first holds, then ends
///
/// The predicate-negated dual of [`TakeWhile`](crate::take_while::TakeWhile):
/// the first value satisfying the predicate terminates the traversal for good.
/// That value is consumed from the source but never emitted.
pub struct TakeUntil<S, F> {
    source: S,
    predicate: F,
}

impl<S, F> TakeUntil<S, F> {
    pub fn new(source: S, predicate: F) -> Self {
        TakeUntil { source, predicate }
    }
}

impl<S, F> Sequence for TakeUntil<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) -> bool + Clone,
{
    type Item = S::Item;
    type Error = S::Error;
    type Cursor = TakeUntilCursor<S::Cursor, F>;

    fn cursor(&self) -> Self::Cursor {
        TakeUntilCursor {
            source: self.source.cursor(),
            predicate: self.predicate.clone(),
            stopped: false,
        }
    }
}

/// Cursor for [`TakeUntil`]
pub struct TakeUntilCursor<C, F> {
    source: C,
    predicate: F,
    stopped: bool,
}

impl<C, F> Cursor for TakeUntilCursor<C, F>
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
                    self.stopped = true;
                    Ok(Step::Done)
                } else {
                    Ok(Step::Value(value))
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

/// Operator form of [`TakeUntil`] for use with [`pipe`](crate::pipe::pipe)
pub fn take_until<S, F>(predicate: F) -> impl FnOnce(S) -> TakeUntil<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) -> bool + Clone,
{
    move |source| TakeUntil::new(source, predicate)
}

/// Extension trait to add .take_until() method support for sequences
pub trait TakeUntilExt: Sequence + Sized {
    fn take_until<F>(self, predicate: F) -> TakeUntil<Self, F>
    where
        F: Fn(&Self::Item) -> bool + Clone,
    {
        TakeUntil::new(self, predicate)
    }
}

/// Implement TakeUntilExt for all sequences
impl<S: Sequence> TakeUntilExt for S {}
