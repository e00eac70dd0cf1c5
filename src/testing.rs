//! Shared fixtures for the in-module test suites

use crate::cursor::Cursor;
use crate::sequence::Sequence;
use crate::step::Step;
use std::cell::Cell;
use std::rc::Rc;
use thiserror::Error;

/// Failure injected by test sources to exercise error propagation
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("underlying source failed")]
pub(crate) struct SourceFailure;

/// Pull a sequence to exhaustion and collect its values
pub(crate) fn collect<S: Sequence>(sequence: &S) -> Result<Vec<S::Item>, S::Error> {
    let mut cursor = sequence.cursor();
    let mut values = Vec::new();
    loop {
        match cursor.advance()? {
            Step::Value(value) => values.push(value),
            Step::Done => return Ok(values),
        }
    }
}

/// Sequence wrapper that counts how often its cursors are pulled
///
/// Used to assert laziness ("nothing pulled before the first advance") and
/// sticky exhaustion ("no pulls after the stop condition").
pub(crate) struct Probe<S> {
    source: S,
    pulls: Rc<Cell<usize>>,
}

impl<S> Probe<S> {
    pub(crate) fn new(source: S) -> (Self, Rc<Cell<usize>>) {
        let pulls = Rc::new(Cell::new(0));
        let probe = Probe {
            source,
            pulls: Rc::clone(&pulls),
        };
        (probe, pulls)
    }
}

impl<S: Sequence> Sequence for Probe<S> {
    type Item = S::Item;
    type Error = S::Error;
    type Cursor = ProbeCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        ProbeCursor {
            source: self.source.cursor(),
            pulls: Rc::clone(&self.pulls),
        }
    }
}

pub(crate) struct ProbeCursor<C> {
    source: C,
    pulls: Rc<Cell<usize>>,
}

impl<C: Cursor> Cursor for ProbeCursor<C> {
    type Item = C::Item;
    type Error = C::Error;

    fn advance(&mut self) -> Result<Step<C::Item>, C::Error> {
        self.pulls.set(self.pulls.get() + 1);
        self.source.advance()
    }
}
