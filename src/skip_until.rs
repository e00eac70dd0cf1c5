use crate::cursor::Cursor;
use crate::sequence::Sequence;
use crate::step::Step;

/// Sequence adapter that discards values until a predicate first holds, then
/// passes every later value through unchanged
///
/// The predicate-negated dual of [`SkipWhile`](crate::skip_while::SkipWhile):
/// skipping ends on the first value satisfying the predicate, and that value
/// is the first one emitted. The transition latches; the predicate is never
/// consulted again afterwards.
pub struct SkipUntil<S, F> {
    source: S,
    predicate: F,
}

impl<S, F> SkipUntil<S, F> {
    pub fn new(source: S, predicate: F) -> Self {
        SkipUntil { source, predicate }
    }
}

impl<S, F> Sequence for SkipUntil<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) -> bool + Clone,
{
    type Item = S::Item;
    type Error = S::Error;
    type Cursor = SkipUntilCursor<S::Cursor, F>;

    fn cursor(&self) -> Self::Cursor {
        SkipUntilCursor {
            source: self.source.cursor(),
            predicate: self.predicate.clone(),
            skipping: true,
            done: false,
        }
    }
}

/// Cursor for [`SkipUntil`]
pub struct SkipUntilCursor<C, F> {
    source: C,
    predicate: F,
    skipping: bool,
    done: bool,
}

impl<C, F> Cursor for SkipUntilCursor<C, F>
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
                        if (self.predicate)(&value) {
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

/// Operator form of [`SkipUntil`] for use with [`pipe`](crate::pipe::pipe)
pub fn skip_until<S, F>(predicate: F) -> impl FnOnce(S) -> SkipUntil<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) -> bool + Clone,
{
    move |source| SkipUntil::new(source, predicate)
}

/// Extension trait to add .skip_until() method support for sequences
pub trait SkipUntilExt: Sequence + Sized {
    fn skip_until<F>(self, predicate: F) -> SkipUntil<Self, F>
    where
        F: Fn(&Self::Item) -> bool + Clone,
    {
        SkipUntil::new(self, predicate)
    }
}

/// Implement SkipUntilExt for all sequences
impl<S: Sequence> SkipUntilExt for S {}
