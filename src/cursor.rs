use crate::step::Step;
use std::error::Error;

/// Pull handle over a sequence
///
/// A cursor holds the mutable traversal state for one pass over a sequence and
/// exposes a single operation: [`advance`](Cursor::advance). This abstraction
/// lets every operator work against the same contract regardless of what
/// ultimately produces the values (slices, iterators, generated counters).
///
/// Implementations must uphold sticky exhaustion: once `advance()` has
/// returned [`Step::Done`], every subsequent call returns `Done` again without
/// consulting whatever the cursor wraps. This holds even when the wrapped
/// source has values left, so a terminated stage can never resume consuming
/// its source.
///
/// Errors returned by `advance()` are terminal: the cursor latches into the
/// exhausted state before the error is returned. A panic escaping a
/// user-supplied mapper or predicate likewise ends the traversal; advancing
/// such a cursor again is not supported.
pub trait Cursor {
    /// The type of values this cursor yields
    type Item;

    /// Error type surfaced when the underlying source fails
    type Error: Error;

    /// Pull the next step of the traversal
    ///
    /// Returns `Ok(Step::Value(v))` with the next value, `Ok(Step::Done)` when
    /// the sequence is exhausted, or `Err` if the underlying source failed.
    fn advance(&mut self) -> Result<Step<Self::Item>, Self::Error>;
}
