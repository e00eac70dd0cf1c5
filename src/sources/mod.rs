pub mod counter;
pub mod iter;
pub mod single_pass;
pub mod slice;
pub mod try_iter;

pub use counter::{Counter, CounterCursor, counter};
pub use iter::{IterCursor, IterSequence, from_iter};
pub use single_pass::{SinglePassCursor, SinglePassSequence, single_pass};
pub use slice::{SliceCursor, SliceSequence, from_slice};
pub use try_iter::{TryIterCursor, TryIterSequence, from_try_iter};
