use crate::cursor::Cursor;
use crate::sequence::Sequence;
use crate::step::Step;

/// Sequence adapter that keeps only the values satisfying a predicate
pub struct Filter<S, F> {
    source: S,
    predicate: F,
}

impl<S, F> Filter<S, F> {
    pub fn new(source: S, predicate: F) -> Self {
        Filter { source, predicate }
    }
}

impl<S, F> Sequence for Filter<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) -> bool + Clone,
{
    type Item = S::Item;
    type Error = S::Error;
    type Cursor = FilterCursor<S::Cursor, F>;

    fn cursor(&self) -> Self::Cursor {
        FilterCursor {
            source: self.source.cursor(),
            predicate: self.predicate.clone(),
            done: false,
        }
    }
}

/// Cursor for [`Filter`]
pub struct FilterCursor<C, F> {
    source: C,
    predicate: F,
    done: bool,
}

impl<C, F> Cursor for FilterCursor<C, F>
where
    C: Cursor,
    F: Fn(&C::Item) -> bool,
{
    type Item = C::Item;
    type Error = C::Error;

    /// Pulls the source until a value satisfies the predicate or the source
    /// is exhausted. Over an infinite source with no satisfying values this
    /// call does not return; bounding it is the caller's responsibility.
    fn advance(&mut self) -> Result<Step<C::Item>, C::Error> {
        if self.done {
            return Ok(Step::Done);
        }

        loop {
            match self.source.advance() {
                Ok(Step::Value(value)) => {
                    if (self.predicate)(&value) {
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
}

/// Operator form of [`Filter`] for use with [`pipe`](crate::pipe::pipe)
pub fn filter<S, F>(predicate: F) -> impl FnOnce(S) -> Filter<S, F>
where
    S: Sequence,
    F: Fn(&S::Item) -> bool + Clone,
{
    move |source| Filter::new(source, predicate)
}

/// Extension trait to add .filter() method support for sequences
pub trait FilterExt: Sequence + Sized {
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        F: Fn(&Self::Item) -> bool + Clone,
    {
        Filter::new(self, predicate)
    }
}

/// Implement FilterExt for all sequences
impl<S: Sequence> FilterExt for S {}
