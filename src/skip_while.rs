use crate::cursor::Cursor;
use crate::sequence::Sequence;
use crate::step::Step;

/// Sequence adapter that discards values while a predicate holds, then passes
/// every later value through unchanged
///
/// The transition out of the skipping phase latches on the first value that
/// fails the predicate: from then on the predicate is never consulted again,
/// so later values that would have been skipped still pass through.
pub struct SkipWhile<S, F> {
    source: S,
    predicate: F,
}

impl<S, F> SkipWhile<S, F> {
    pub fn new(source: S, predicate: F) -> Self {
        SkipWhile { source, predicate }
    }
}

impl<S, F> Sequence for SkipWhile<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) -> bool + Clone,
{
    type Item = S::Item;
    type Error = S::Error;
    type Cursor = SkipWhileCursor<S::Cursor, F>;

    fn cursor(&self) -> Self::Cursor {
        SkipWhileCursor {
            source: self.source.cursor(),
            predicate: self.predicate.clone(),
            skipping: true,
            done: false,
        }
    }
}

/// Cursor for [`SkipWhile`]
///
/// Two states: skipping and passing (`skipping == false`). Unlike the
/// take-side operators neither state is terminal by itself; `done` latches
/// only on source exhaustion or error.
pub struct SkipWhileCursor<C, F> {
    source: C,
    predicate: F,
    skipping: bool,
    done: bool,
}

impl<C, F> Cursor for SkipWhileCursor<C, F>
where
    C: Cursor,
    F: Fn(&C::Item) -> bool,
{
    type Item = C::Item;
    type Error = C::Error;

    fn advance(&mut self) -> Result<Step<C::Item>, C::Error> {
        if self.done {
            return Ok(Step::Done);
        }

        if self.skipping {
            loop {
                match self.source.advance() {
                    Ok(Step::Value(value)) => {
                        if !(self.predicate)(&value) {
                            self.skipping = false;
                            return Ok(Step::Value(value));
                        }
                    }
                    Ok(Step::Done) => {
                        self.done = true;
                        return Ok(Step::Done);
                    }
                    Err(error) => {
                        self.done = true;
                        return Err(error);
                    }
                }
            }
        }

        // Passing: plain pass-through, predicate not consulted
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

/// Operator form of [`SkipWhile`] for use with [`pipe`](crate::pipe::pipe)
pub fn skip_while<S, F>(predicate: F) -> impl FnOnce(S) -> SkipWhile<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) -> bool + Clone,
{
    move |source| SkipWhile::new(source, predicate)
}

/// Extension trait to add .skip_while() method support for sequences
pub trait SkipWhileExt: Sequence + Sized {
    fn skip_while<F>(self, predicate: F) -> SkipWhile<Self, F>
    where
        F: Fn(&Self::Item) -> bool + Clone,
    {
        SkipWhile::new(self, predicate)
    }
}

/// Implement SkipWhileExt for all sequences
impl<S: Sequence> SkipWhileExt for S {}
