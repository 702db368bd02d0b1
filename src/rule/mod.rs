// RIBBON
pub mod elementary;
pub mod lifted;
pub use elementary::ElementaryRule;
pub use lifted::LiftedRule;
use crate::cell::Cell;

/// Local transition function of a one-dimensional automaton: computes the next
/// state of a cell from its own state and the states of its two neighbors.
pub trait Rule<C: Cell> {
    fn apply(&self, left: C, mid: C, right: C) -> C;
}

impl<C: Cell, F: Fn(C, C, C) -> C> Rule<C> for F {
    #[inline]
    fn apply(&self, left: C, mid: C, right: C) -> C {
        self(left, mid, right)
    }
}
