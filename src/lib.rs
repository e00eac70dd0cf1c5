//! # LazyPipe - Lazy Sequence Pipeline Library
//!
//! A library of composable, lazily-evaluated sequence transformations unified
//! by a `pipe` combinator that threads a source sequence through an ordered
//! list of operators.
//!
//! LazyPipe provides pull-based sequences that do no work until a consumer
//! asks for the next value. The library emphasizes:
//!
//! - **Zero panics**: Source failures travel through `Result` types; no
//!   operator unwraps or catches
//! - **Laziness end to end**: Constructing a pipeline evaluates nothing;
//!   every value is computed by exactly one pull
//! - **Composability**: Small operators stack into arbitrary pipelines via
//!   [`pipe`] or the per-operator extension traits
//! - **Sticky exhaustion**: A cursor that has reported end-of-data never
//!   touches its source again, so terminated stages cannot resume consumption

pub mod cursor;
pub mod filter;
pub mod flat_map;
pub mod map;
pub mod operator;
pub mod pipe;
pub mod sequence;
pub mod skip;
pub mod skip_until;
pub mod skip_while;
pub mod slice;
pub mod sources;
pub mod step;
pub mod take;
pub mod take_until;
pub mod take_while;

#[cfg(test)]
pub(crate) mod testing;

pub use cursor::Cursor;
pub use operator::Operator;
pub use pipe::{OperatorChain, pipe};
pub use sequence::Sequence;
pub use sources::{Counter, IterSequence, SinglePassSequence, SliceSequence, TryIterSequence};
pub use step::Step;
