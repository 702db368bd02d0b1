// Standard library
use std::marker::PhantomData;

// RIBBON
use super::{ElementaryRule, Rule};
use crate::cell::BitCell;

/// LiftedRule
///
/// Extends an elementary rule to cells made of several bits. The bits of the
/// three input cells are laid side by side and the elementary rule is run on
/// them for as many generations as there are bits per cell, each generation
/// one cell narrower at both ends. The bits left in the middle form the new
/// cell.

pub struct LiftedRule<C: BitCell> {
    elementary: ElementaryRule,
    _marker: PhantomData<C>,
}

impl<C: BitCell> LiftedRule<C> {
    pub fn new(elementary: ElementaryRule) -> Self {
        Self {
            elementary,
            _marker: PhantomData,
        }
    }

    pub fn from_number(number: u32) -> Self {
        Self::new(ElementaryRule::new(number))
    }

    #[inline]
    pub fn elementary(&self) -> &ElementaryRule {
        &self.elementary
    }

    /// Runs the triangular reduction, returning every generation from the
    /// flattened input bits down to the surviving center bits.
    pub fn reduction(&self, left: C, mid: C, right: C) -> Vec<Vec<bool>> {
        let mut generations = Vec::with_capacity(C::BITS + 1);
        let mut bits = flatten(&[left, mid, right]);
        for _ in 0..C::BITS {
            let next = self.narrow(&bits);
            generations.push(std::mem::replace(&mut bits, next));
        }
        generations.push(bits);
        generations
    }

    fn narrow(&self, bits: &[bool]) -> Vec<bool> {
        bits.windows(3)
            .map(|w| self.elementary.next_state(w[0], w[1], w[2]))
            .collect()
    }
}

fn flatten<C: BitCell>(cells: &[C]) -> Vec<bool> {
    cells
        .iter()
        .flat_map(|cell| (0..C::BITS).map(move |idx| cell.bit(idx)))
        .collect()
}

impl<C: BitCell> Rule<C> for LiftedRule<C> {
    fn apply(&self, left: C, mid: C, right: C) -> C {
        let mut bits = flatten(&[left, mid, right]);
        for _ in 0..C::BITS {
            bits = self.narrow(&bits);
        }
        C::from_bits(&bits)
    }
}

impl<C: BitCell> Clone for LiftedRule<C> {
    fn clone(&self) -> Self {
        Self::new(self.elementary)
    }
}

impl<C: BitCell> Copy for LiftedRule<C> {}

impl<C: BitCell> std::fmt::Debug for LiftedRule<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LiftedRule")
            .field("elementary", &self.elementary)
            .field("bits", &C::BITS)
            .finish()
    }
}
