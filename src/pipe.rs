use crate::operator::Operator;
use crate::sequence::Sequence;

/// Thread a source sequence through an ordered tuple of operators
///
/// Operators are applied left to right: `pipe(s, (a, b, c))` builds
/// `c(b(a(s)))`. Nothing is evaluated here — the result is a lazy sequence
/// and the source is only pulled once a cursor over it is advanced. An empty
/// tuple returns the source unchanged.
///
/// Chains of up to eight differently-typed stages are supported, matching the
/// [`OperatorChain`] impls; longer pipelines compose by nesting `pipe` calls
/// or by chaining the per-operator extension traits.
pub fn pipe<S, Ops>(source: S, operators: Ops) -> Ops::Output
where
    S: Sequence,
    Ops: OperatorChain<S>,
{
    operators.apply_chain(source)
}

/// Ordered list of pipeline stages applicable to a source sequence
///
/// Implemented for tuples of [`Operator`]s from arity 0 to 8, each stage's
/// input type being the previous stage's output type.
pub trait OperatorChain<S: Sequence> {
    /// The sequence type produced by the final stage
    type Output: Sequence;

    /// Apply every stage, left to right
    fn apply_chain(self, source: S) -> Self::Output;
}

impl<S: Sequence> OperatorChain<S> for () {
    type Output = S;

    fn apply_chain(self, source: S) -> S {
        source
    }
}

impl<S, P1> OperatorChain<S> for (P1,)
where
    S: Sequence,
    P1: Operator<S>,
{
    type Output = P1::Output;

    fn apply_chain(self, source: S) -> Self::Output {
        self.0.apply(source)
    }
}

impl<S, P1, P2> OperatorChain<S> for (P1, P2)
where
    S: Sequence,
    P1: Operator<S>,
    P2: Operator<P1::Output>,
{
    type Output = P2::Output;

    fn apply_chain(self, source: S) -> Self::Output {
        let (p1, p2) = self;
        p2.apply(p1.apply(source))
    }
}

impl<S, P1, P2, P3> OperatorChain<S> for (P1, P2, P3)
where
    S: Sequence,
    P1: Operator<S>,
    P2: Operator<P1::Output>,
    P3: Operator<P2::Output>,
{
    type Output = P3::Output;

    fn apply_chain(self, source: S) -> Self::Output {
        let (p1, p2, p3) = self;
        p3.apply(p2.apply(p1.apply(source)))
    }
}

impl<S, P1, P2, P3, P4> OperatorChain<S> for (P1, P2, P3, P4)
where
    S: Sequence,
    P1: Operator<S>,
    P2: Operator<P1::Output>,
    P3: Operator<P2::Output>,
    P4: Operator<P3::Output>,
{
    type Output = P4::Output;

    fn apply_chain(self, source: S) -> Self::Output {
        let (p1, p2, p3, p4) = self;
        p4.apply(p3.apply(p2.apply(p1.apply(source))))
    }
}

impl<S, P1, P2, P3, P4, P5> OperatorChain<S> for (P1, P2, P3, P4, P5)
where
    S: Sequence,
    P1: Operator<S>,
    P2: Operator<P1::Output>,
    P3: Operator<P2::Output>,
    P4: Operator<P3::Output>,
    P5: Operator<P4::Output>,
{
    type Output = P5::Output;

    fn apply_chain(self, source: S) -> Self::Output {
        let (p1, p2, p3, p4, p5) = self;
        p5.apply(p4.apply(p3.apply(p2.apply(p1.apply(source)))))
    }
}

impl<S, P1, P2, P3, P4, P5, P6> OperatorChain<S> for (P1, P2, P3, P4, P5, P6)
where
    S: Sequence,
    P1: Operator<S>,
    P2: Operator<P1::Output>,
    P3: Operator<P2::Output>,
    P4: Operator<P3::Output>,
    P5: Operator<P4::Output>,
    P6: Operator<P5::Output>,
{
    type Output = P6::Output;

    fn apply_chain(self, source: S) -> Self::Output {
        let (p1, p2, p3, p4, p5, p6) = self;
        p6.apply(p5.apply(p4.apply(p3.apply(p2.apply(p1.apply(source))))))
    }
}

impl<S, P1, P2, P3, P4, P5, P6, P7> OperatorChain<S> for (P1, P2, P3, P4, P5, P6, P7)
where
    S: Sequence,
    P1: Operator<S>,
    P2: Operator<P1::Output>,
    P3: Operator<P2::Output>,
    P4: Operator<P3::Output>,
    P5: Operator<P4::Output>,
    P6: Operator<P5::Output>,
    P7: Operator<P6::Output>,
{
    type Output = P7::Output;

    fn apply_chain(self, source: S) -> Self::Output {
        let (p1, p2, p3, p4, p5, p6, p7) = self;
        p7.apply(p6.apply(p5.apply(p4.apply(p3.apply(p2.apply(p1.apply(source)))))))
    }
}

impl<S, P1, P2, P3, P4, P5, P6, P7, P8> OperatorChain<S> for (P1, P2, P3, P4, P5, P6, P7, P8)
where
    S: Sequence,
    P1: Operator<S>,
    P2: Operator<P1::Output>,
    P3: Operator<P2::Output>,
    P4: Operator<P3::Output>,
    P5: Operator<P4::Output>,
    P6: Operator<P5::Output>,
    P7: Operator<P6::Output>,
    P8: Operator<P7::Output>,
{
    type Output = P8::Output;

    fn apply_chain(self, source: S) -> Self::Output {
        let (p1, p2, p3, p4, p5, p6, p7, p8) = self;
        p8.apply(p7.apply(p6.apply(p5.apply(p4.apply(p3.apply(p2.apply(p1.apply(source))))))))
    }
}
