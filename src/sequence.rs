use crate::cursor::Cursor;
use std::error::Error;

/// Core trait for lazy sequences
///
/// A sequence is a producer of cursors: each call to [`cursor`](Sequence::cursor)
/// starts a fresh, independent traversal over the underlying values. Nothing is
/// evaluated when a sequence is constructed or when operators are stacked on
/// top of it; work happens only when a cursor is advanced.
///
/// Restartability is a property of the underlying source, not of the operator
/// layer: a slice-backed sequence can be traversed any number of times, while a
/// sequence over a one-shot resource hands out cursors that all observe the
/// same, progressively consumed traversal.
pub trait Sequence {
    /// The type of values this sequence yields
    type Item;

    /// Error type surfaced by cursors over this sequence
    type Error: Error;

    /// The cursor type that traverses this sequence
    type Cursor: Cursor<Item = Self::Item, Error = Self::Error>;

    /// Begin a new traversal
    ///
    /// The returned cursor owns its traversal state outright; cursors obtained
    /// from separate calls never share mutable state.
    fn cursor(&self) -> Self::Cursor;
}
