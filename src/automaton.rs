// External libraries
use rand::Rng;

// RIBBON
use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::rule::Rule;
use crate::terminal::StyledRow;

/// Automaton
///
/// A one-dimensional automaton of fixed width running for a fixed number of
/// generations. The first row is drawn from `random_cell`, every following row
/// is obtained by applying `rule` to each cell and its two neighbors, the row
/// wrapping around at both ends. The automaton itself holds no generation
/// state: it is consumed by the iterator that simulates it.

pub struct Automaton<C: Cell, R: Rule<C>> {
    cols: usize,
    rows: usize,
    random_cell: Box<dyn FnMut() -> C + Send>,
    rule: R,
}

impl<C: Cell, R: Rule<C>> Automaton<C, R> {
    pub fn new<F>(cols: usize, rows: usize, random_cell: F, rule: R) -> Result<Self>
    where
        F: FnMut() -> C + Send + 'static,
    {
        if cols == 0 {
            return Err(Error::EmptyRow);
        }
        Ok(Self {
            cols,
            rows,
            random_cell: Box::new(random_cell),
            rule,
        })
    }

    /// Seeds the first row with cells drawn from `rng`.
    pub fn with_rng<G>(cols: usize, rows: usize, mut rng: G, rule: R) -> Result<Self>
    where
        G: Rng + Send + 'static,
    {
        Self::new(cols, rows, move || C::random(&mut rng), rule)
    }

    /// Uses `first_row` as the first generation.
    pub fn with_first_row(first_row: Vec<C>, rows: usize, rule: R) -> Result<Self> {
        let cols = first_row.len();
        let mut idx = 0;
        let next_cell = move || {
            let cell = first_row[idx % cols];
            idx += 1;
            cell
        };
        Self::new(cols, rows, next_cell, rule)
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Iterates over the generations as rows of cells.
    pub fn generations(self) -> Generations<C, R> {
        Generations {
            automaton: self,
            state: GenerationState::Uninitialized,
        }
    }

    /// Simulates every generation and returns the rendered rows, each one
    /// followed by a line break.
    pub fn into_text(self) -> String {
        let mut text = String::new();
        for line in self {
            text.push_str(&line);
            text.push('\n');
        }
        text
    }
}

impl<C: Cell, R: Rule<C>> IntoIterator for Automaton<C, R> {
    type Item = String;
    type IntoIter = RenderedRows<C, R>;

    fn into_iter(self) -> Self::IntoIter {
        RenderedRows {
            generations: self.generations(),
        }
    }
}

/// Computes the generation following `row`. Cells at both ends of the row are
/// each other's neighbors.
pub fn step<C: Cell, R: Rule<C> + ?Sized>(row: &[C], rule: &R) -> Vec<C> {
    let cols = row.len();
    (0..cols)
        .map(|i| {
            let left = row[(cols + i - 1) % cols];
            let right = row[(i + 1) % cols];
            rule.apply(left, row[i], right)
        })
        .collect()
}

enum GenerationState<C: Cell> {
    Uninitialized,
    Running { row: Vec<C>, emitted: usize },
    Done,
}

/// Generations

pub struct Generations<C: Cell, R: Rule<C>> {
    automaton: Automaton<C, R>,
    state: GenerationState<C>,
}

impl<C: Cell, R: Rule<C>> Generations<C, R> {
    fn remaining(&self) -> usize {
        match &self.state {
            GenerationState::Uninitialized => self.automaton.rows,
            GenerationState::Running { emitted, .. } => self.automaton.rows - emitted,
            GenerationState::Done => 0,
        }
    }
}

impl<C: Cell, R: Rule<C>> Iterator for Generations<C, R> {
    type Item = Vec<C>;

    fn next(&mut self) -> Option<Self::Item> {
        let rows = self.automaton.rows;
        let state = std::mem::replace(&mut self.state, GenerationState::Done);
        let (row, emitted) = match state {
            GenerationState::Done => return None,
            GenerationState::Uninitialized if rows == 0 => return None,
            GenerationState::Uninitialized => {
                let cols = self.automaton.cols;
                let random_cell = &mut *self.automaton.random_cell;
                let row: Vec<C> = (0..cols).map(|_| random_cell()).collect();
                (row, 1)
            }
            GenerationState::Running { row, emitted } => {
                (step(&row, &self.automaton.rule), emitted + 1)
            }
        };
        if emitted < rows {
            self.state = GenerationState::Running {
                row: row.clone(),
                emitted,
            };
        }
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<C: Cell, R: Rule<C>> ExactSizeIterator for Generations<C, R> {}

impl<C: Cell, R: Rule<C>> std::iter::FusedIterator for Generations<C, R> {}

/// RenderedRows

pub struct RenderedRows<C: Cell, R: Rule<C>> {
    generations: Generations<C, R>,
}

impl<C: Cell, R: Rule<C>> Iterator for RenderedRows<C, R> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.generations
            .next()
            .map(|row| StyledRow::new(&row).to_string())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.generations.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{BinaryCell, BitCell, QuadCell, RgbCell};
    use crate::rule::{ElementaryRule, LiftedRule};
    use crate::terminal;
    use cascade::cascade;
    use rand::{rngs::StdRng, SeedableRng};

    fn glider_row() -> Vec<BinaryCell> {
        let row = cascade!(
            vec![BinaryCell::DEAD; 5];
            ..push(BinaryCell::ALIVE);
            ..push(BinaryCell::DEAD);
            ..push(BinaryCell::ALIVE);
        );
        row
    }

    #[test]
    fn glider_row_fixture() {
        let row = glider_row();
        let states: Vec<bool> = row.iter().map(|c| c.state).collect();
        assert_eq!(
            states,
            vec![false, false, false, false, false, true, false, true]
        );
    }

    #[test]
    fn yields_exactly_rows_rows_of_cols_cells() {
        let rng = StdRng::seed_from_u64(1);
        let automaton =
            Automaton::with_rng(17, 9, rng, LiftedRule::<RgbCell>::from_number(30)).unwrap();
        let mut generations = automaton.generations();
        assert_eq!(generations.len(), 9);
        let mut count = 0;
        while let Some(row) = generations.next() {
            assert_eq!(row.len(), 17);
            count += 1;
        }
        assert_eq!(count, 9);
        assert_eq!(generations.len(), 0);
        assert!(generations.next().is_none());
    }

    #[test]
    fn zero_rows_yields_nothing() {
        let automaton = Automaton::with_first_row(glider_row(), 0, ElementaryRule::new(90)).unwrap();
        assert_eq!(automaton.generations().count(), 0);
    }

    #[test]
    fn zero_columns_is_rejected() {
        let automaton = Automaton::new(0, 10, || BinaryCell::DEAD, ElementaryRule::new(90));
        assert!(matches!(automaton, Err(Error::EmptyRow)));
    }

    #[test]
    fn first_row_comes_from_random_cell() {
        let row = glider_row();
        let automaton = Automaton::with_first_row(row.clone(), 1, ElementaryRule::new(0)).unwrap();
        assert_eq!(automaton.generations().collect::<Vec<_>>(), vec![row]);
    }

    #[test]
    fn random_cell_called_once_per_column() {
        let mut calls = 0;
        let counting = move || {
            calls += 1;
            BinaryCell::new(calls % 2 == 0)
        };
        let automaton = Automaton::new(4, 1, counting, ElementaryRule::new(0)).unwrap();
        let first = automaton.generations().next().unwrap();
        let states: Vec<bool> = first.iter().map(|c| c.state).collect();
        assert_eq!(states, vec![false, true, false, true]);
    }

    #[test]
    fn neighbors_wrap_around() {
        let take_left = |l: BinaryCell, _: BinaryCell, _: BinaryCell| l;
        let take_right = |_: BinaryCell, _: BinaryCell, r: BinaryCell| r;
        let row = cascade! {
            vec![BinaryCell::DEAD; 4];
            ..push(BinaryCell::ALIVE);
        };

        // Last cell's right neighbor is the first cell
        let shifted = step(&row, &take_left);
        assert_eq!(shifted[0], BinaryCell::ALIVE);
        assert_eq!(shifted.iter().filter(|c| c.state).count(), 1);

        // First cell's left neighbor is the last cell
        let mut row = vec![BinaryCell::DEAD; 5];
        row[0] = BinaryCell::ALIVE;
        let shifted = step(&row, &take_right);
        assert_eq!(shifted[4], BinaryCell::ALIVE);
        assert_eq!(shifted.iter().filter(|c| c.state).count(), 1);
    }

    #[test]
    fn single_cell_row_is_its_own_neighbor() {
        let seen = |l: BinaryCell, m: BinaryCell, r: BinaryCell| {
            BinaryCell::new(l == m && m == r)
        };
        assert_eq!(step(&[BinaryCell::DEAD], &seen), vec![BinaryCell::ALIVE]);
    }

    #[test]
    fn rows_follow_the_rule() {
        let rule = ElementaryRule::new(90);
        let first = glider_row();
        let automaton = Automaton::with_first_row(first.clone(), 3, rule).unwrap();
        let rows: Vec<_> = automaton.generations().collect();
        assert_eq!(rows[0], first);
        assert_eq!(rows[1], step(&first, &rule));
        assert_eq!(rows[2], step(&rows[1], &rule));
    }

    #[test]
    fn quad_step_over_three_columns() {
        let rule: LiftedRule<QuadCell> = LiftedRule::from_number(102);
        let row = vec![
            QuadCell::new(true, false),
            QuadCell::new(false, false),
            QuadCell::new(true, true),
        ];
        let next = step(&row, &rule);
        assert_eq!(next.len(), 3);
        for i in 0..3 {
            let (l, m, r) = (row[(i + 2) % 3], row[i], row[(i + 1) % 3]);
            let gens = rule.reduction(l, m, r);
            let widths: Vec<usize> = gens.iter().map(Vec::len).collect();
            assert_eq!(widths, vec![6, 4, 2]);
            assert_eq!(next[i], QuadCell::from_bits(&gens[2]));
        }
    }

    #[test]
    fn rendered_rows_match_cell_rows() {
        let rule = ElementaryRule::new(30);
        let cells: Vec<_> = Automaton::with_first_row(glider_row(), 4, rule)
            .unwrap()
            .generations()
            .collect();
        let lines: Vec<_> = Automaton::with_first_row(glider_row(), 4, rule)
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(lines.len(), 4);
        for (row, line) in cells.iter().zip(lines.iter()) {
            let expected: String = row.iter().map(terminal::render).collect();
            assert_eq!(line, &expected);
        }
    }

    #[test]
    fn text_ends_every_row_with_a_line_break() {
        let automaton = Automaton::with_first_row(glider_row(), 5, ElementaryRule::new(110)).unwrap();
        let text = automaton.into_text();
        assert_eq!(text.lines().count(), 5);
        assert!(text.ends_with('\n'));
        assert_eq!(text.matches('\n').count(), 5);
    }
}
