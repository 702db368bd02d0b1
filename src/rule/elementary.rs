// RIBBON
use super::Rule;
use crate::cell::BinaryCell;

/// ElementaryRule
///
/// Rule over single-bit cells selected by an integer rule number. The bit of
/// the rule number that decides the new state is picked by starting from a
/// mask of 1 and shifting it left by 1 if the left cell is alive, then by 2
/// if the middle cell is alive, then by 4 if the right cell is alive. Rule
/// numbers are not range-checked: bits above the eighth are simply never
/// selected.

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ElementaryRule {
    number: u32,
}

impl ElementaryRule {
    pub fn new(number: u32) -> Self {
        Self { number }
    }

    #[inline]
    pub fn number(&self) -> u32 {
        self.number
    }

    #[inline]
    pub fn next_state(&self, left: bool, mid: bool, right: bool) -> bool {
        let mut mask: u32 = 1;
        if left {
            mask <<= 1;
        }
        if mid {
            mask <<= 2;
        }
        if right {
            mask <<= 4;
        }
        self.number & mask != 0
    }
}

impl Rule<BinaryCell> for ElementaryRule {
    #[inline]
    fn apply(&self, left: BinaryCell, mid: BinaryCell, right: BinaryCell) -> BinaryCell {
        BinaryCell::new(self.next_state(left.state, mid.state, right.state))
    }
}
