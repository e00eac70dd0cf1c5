use crate::cursor::Cursor;
use crate::sequence::Sequence;
use crate::step::Step;

/// Sequence adapter that applies a mapping function to every value
pub struct Map<S, F> {
    source: S,
    mapper: F,
}

impl<S, F> Map<S, F> {
    pub fn new(source: S, mapper: F) -> Self {
        Map { source, mapper }
    }
}

impl<S, F, U> Sequence for Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> U + Clone,
{
    type Item = U;
    type Error = S::Error;
    type Cursor = MapCursor<S::Cursor, F>;

    fn cursor(&self) -> Self::Cursor {
        MapCursor {
            source: self.source.cursor(),
            mapper: self.mapper.clone(),
            done: false,
        }
    }
}

/// Cursor for [`Map`]
pub struct MapCursor<C, F> {
    source: C,
    mapper: F,
    done: bool,
}

impl<C, F, U> Cursor for MapCursor<C, F>
where
    C: Cursor,
    F: Fn(C::Item) -> U,
{
    type Item = U;
    type Error = C::Error;

    fn advance(&mut self) -> Result<Step<U>, C::Error> {
        if self.done {
            return Ok(Step::Done);
        }

        match self.source.advance() {
            Ok(Step::Value(value)) => Ok(Step::Value((self.mapper)(value))),
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

/// Operator form of [`Map`] for use with [`pipe`](crate::pipe::pipe)
pub fn map<S, F, U>(mapper: F) -> impl FnOnce(S) -> Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> U + Clone,
{
    move |source| Map::new(source, mapper)
}

/// Extension trait to add .map() method support for sequences
pub trait MapExt: Sequence + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Item) -> U + Clone,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all sequences
impl<S: Sequence> MapExt for S {}
