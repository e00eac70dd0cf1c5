use crate::cursor::Cursor;
use crate::sequence::Sequence;
use crate::step::Step;

/// Sequence adapter that maps every value to a sub-sequence and flattens the
/// results into one sequence
pub struct FlatMap<S, F> {
    source: S,
    mapper: F,
}

impl<S, F> FlatMap<S, F> {
    pub fn new(source: S, mapper: F) -> Self {
        FlatMap { source, mapper }
    }
}

impl<S, F, Sub> Sequence for FlatMap<S, F>
where
    S: Sequence,
    Sub: Sequence<Error = S::Error>,
    F: Fn(S::Item) -> Sub + Clone,
{
    type Item = Sub::Item;
    type Error = S::Error;
    type Cursor = FlatMapCursor<S::Cursor, F, Sub>;

    fn cursor(&self) -> Self::Cursor {
        FlatMapCursor {
            outer: self.source.cursor(),
            mapper: self.mapper.clone(),
            inner: None,
            done: false,
        }
    }
}

/// Cursor for [`FlatMap`]
///
/// Holds the outer cursor plus the cursor of the sub-sequence currently being
/// drained; `inner` is absent before the first pull and between sub-sequences.
pub struct FlatMapCursor<C, F, Sub: Sequence> {
    outer: C,
    mapper: F,
    inner: Option<Sub::Cursor>,
    done: bool,
}

impl<C, F, Sub> Cursor for FlatMapCursor<C, F, Sub>
where
    C: Cursor,
    Sub: Sequence<Error = C::Error>,
    F: Fn(C::Item) -> Sub,
{
    type Item = Sub::Item;
    type Error = C::Error;

    fn advance(&mut self) -> Result<Step<Sub::Item>, C::Error> {
        if self.done {
            return Ok(Step::Done);
        }

        loop {
            if let Some(inner) = self.inner.as_mut() {
                match inner.advance() {
                    Ok(Step::Value(value)) => return Ok(Step::Value(value)),
                    // Sub-sequence drained; discard it and pull the outer
                    // cursor again. Empty sub-sequences fall through here
                    // without the caller ever observing them.
                    Ok(Step::Done) => self.inner = None,
                    Err(error) => {
                        self.done = true;
                        return Err(error);
                    }
                }
            } else {
                match self.outer.advance() {
                    Ok(Step::Value(value)) => {
                        self.inner = Some((self.mapper)(value).cursor());
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
}

/// Operator form of [`FlatMap`] for use with [`pipe`](crate::pipe::pipe)
pub fn flat_map<S, F, Sub>(mapper: F) -> impl FnOnce(S) -> FlatMap<S, F>
where
    S: Sequence,
    Sub: Sequence<Error = S::Error>,
    F: Fn(S::Item) -> Sub + Clone,
{
    move |source| FlatMap::new(source, mapper)
}

/// Extension trait to add .flat_map() method support for sequences
pub trait FlatMapExt: Sequence + Sized {
    fn flat_map<F, Sub>(self, mapper: F) -> FlatMap<Self, F>
    where
        Sub: Sequence<Error = Self::Error>,
        F: Fn(Self::Item) -> Sub + Clone,
    {
        FlatMap::new(self, mapper)
    }
}

/// Implement FlatMapExt for all sequences
impl<S: Sequence> FlatMapExt for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{IterSequence, from_iter, from_try_iter};
    use crate::testing::{Probe, SourceFailure, collect};

    #[test]
    fn test_flat_map_expands_each_value() {
        let sequence = from_iter(vec![1, 2, 3]).flat_map(|x| from_iter(vec![x, x * 2]));

        assert_eq!(collect(&sequence).unwrap(), vec![1, 2, 2, 4, 3, 6]);
    }

    #[test]
    fn test_flat_map_skips_empty_subsequences() {
        let nested = vec![vec![1, 2], vec![], vec![5, 6]];
        let sequence = from_iter(nested).flat_map(from_iter);

        assert_eq!(collect(&sequence).unwrap(), vec![1, 2, 5, 6]);
    }

    #[test]
    fn test_flat_map_all_subsequences_empty() {
        let sequence = from_iter(vec![1, 2, 3]).flat_map(|_| from_iter(Vec::<i32>::new()));

        assert_eq!(collect(&sequence).unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn test_flat_map_empty_outer_source() {
        let sequence =
            from_iter(Vec::<i32>::new()).flat_map(|x| from_iter(vec![x]));

        assert_eq!(collect(&sequence).unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn test_flat_map_leading_and_trailing_empties() {
        let nested: Vec<Vec<i32>> = vec![vec![], vec![7], vec![]];
        let sequence = from_iter(nested).flat_map(from_iter);

        assert_eq!(collect(&sequence).unwrap(), vec![7]);
    }

    #[test]
    fn test_flat_map_restarts_from_fresh_cursor() {
        let sequence = from_iter(vec![1, 2]).flat_map(|x| from_iter(vec![x, x]));

        assert_eq!(collect(&sequence).unwrap(), vec![1, 1, 2, 2]);
        assert_eq!(collect(&sequence).unwrap(), vec![1, 1, 2, 2]);
    }

    #[test]
    fn test_flat_map_pulls_outer_lazily() {
        let (probe, pulls) = Probe::new(from_iter(vec![1, 2]));
        let sequence = probe.flat_map(|x| from_iter(vec![x, x * 10]));

        let mut cursor = sequence.cursor();
        assert_eq!(pulls.get(), 0);

        // Draining one sub-sequence requires exactly one outer pull
        assert_eq!(cursor.advance().unwrap(), Step::Value(1));
        assert_eq!(cursor.advance().unwrap(), Step::Value(10));
        assert_eq!(pulls.get(), 1);
    }

    #[test]
    fn test_flat_map_propagates_outer_error() {
        let sequence = from_try_iter(vec![Ok(1), Err(SourceFailure)])
            .flat_map(|x: i32| from_try_iter(vec![Ok(x)]));

        let mut cursor = sequence.cursor();
        assert_eq!(cursor.advance().unwrap(), Step::Value(1));
        assert_eq!(cursor.advance(), Err(SourceFailure));
        assert_eq!(cursor.advance(), Ok(Step::Done));
    }

    #[test]
    fn test_flat_map_propagates_inner_error() {
        let sequence = from_try_iter(vec![Ok(1), Ok(2)]).flat_map(|x: i32| {
            if x == 2 {
                from_try_iter(vec![Err(SourceFailure)])
            } else {
                from_try_iter(vec![Ok(x)])
            }
        });

        let mut cursor = sequence.cursor();
        assert_eq!(cursor.advance().unwrap(), Step::Value(1));
        assert_eq!(cursor.advance(), Err(SourceFailure));
        assert_eq!(cursor.advance(), Ok(Step::Done));
    }

    #[test]
    fn test_flat_map_sub_sequence_type_is_explicit() {
        // The mapper may return any sequence type with a matching error type
        let sequence: FlatMap<_, fn(i32) -> IterSequence<Vec<i32>>> =
            FlatMap::new(from_iter(vec![1, 2]), |x| from_iter(vec![x]));

        assert_eq!(collect(&sequence).unwrap(), vec![1, 2]);
    }
}
