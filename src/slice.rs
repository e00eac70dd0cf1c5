use crate::sequence::Sequence;
use crate::skip::Skip;
use crate::take::Take;

/// Contiguous window over a sequence: drop `skip_count` values, then yield at
/// most `take_count`
///
/// Slice carries no state of its own; it is literally the composition of
/// [`Skip`] and [`Take`].
pub type Slice<S> = Take<Skip<S>>;

/// Operator form of [`Slice`] for use with [`pipe`](crate::pipe::pipe)
pub fn slice<S: Sequence>(skip_count: usize, take_count: usize) -> impl FnOnce(S) -> Slice<S> {
    move |source| Take::new(Skip::new(source, skip_count), take_count)
}

/// Extension trait to add .slice() method support for sequences
pub trait SliceExt: Sequence + Sized {
    fn slice(self, skip_count: usize, take_count: usize) -> Slice<Self> {
        Take::new(Skip::new(self, skip_count), take_count)
    }
}

/// Implement SliceExt for all sequences
impl<S: Sequence> SliceExt for S {}
