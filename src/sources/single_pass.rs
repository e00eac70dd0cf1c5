use crate::cursor::Cursor;
use crate::sequence::Sequence;
use crate::step::Step;
use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

/// Sequence over a one-shot iterator
///
/// All cursors share the single underlying traversal: a cursor obtained after
/// another has pulled values observes the already-partially-consumed source.
/// That is a property of the source, not of the operator layer; evaluation is
/// single-threaded and pull-based, so the shared state needs no locking.
pub struct SinglePassSequence<I> {
    inner: Rc<RefCell<I>>,
}

impl<I> SinglePassSequence<I> {
    pub fn new(iter: I) -> Self {
        SinglePassSequence {
            inner: Rc::new(RefCell::new(iter)),
        }
    }
}

impl<I: Iterator> Sequence for SinglePassSequence<I> {
    type Item = I::Item;
    type Error = Infallible;
    type Cursor = SinglePassCursor<I>;

    fn cursor(&self) -> Self::Cursor {
        SinglePassCursor {
            inner: Rc::clone(&self.inner),
            done: false,
        }
    }
}

/// Cursor for [`SinglePassSequence`]
///
/// The `done` latch is per-cursor: a cursor that has seen the end stays
/// exhausted even if the shared iterator were refilled.
pub struct SinglePassCursor<I> {
    inner: Rc<RefCell<I>>,
    done: bool,
}

impl<I: Iterator> Cursor for SinglePassCursor<I> {
    type Item = I::Item;
    type Error = Infallible;

    fn advance(&mut self) -> Result<Step<I::Item>, Infallible> {
        if self.done {
            return Ok(Step::Done);
        }

        match self.inner.borrow_mut().next() {
            Some(value) => Ok(Step::Value(value)),
            None => {
                self.done = true;
                Ok(Step::Done)
            }
        }
    }
}

/// Convenience function to wrap a one-shot iterator as a sequence
pub fn single_pass<I: Iterator>(iter: I) -> SinglePassSequence<I> {
    SinglePassSequence::new(iter)
}
