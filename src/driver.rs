// Standard library
use std::io::Write;
use std::ops::RangeInclusive;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::{thread, time::Duration};

// External libraries
use crossterm::{queue, style::Print};
use log::{debug, info};
use rand::{rngs::StdRng, Rng, SeedableRng};

// RIBBON
use crate::automaton::Automaton;
use crate::cell::{Alphabet, BinaryCell, QuadCell, RgbCell};
use crate::error::Result;
use crate::rule::{ElementaryRule, LiftedRule};
use crate::terminal::StyledRow;

pub const COLS: usize = 200;
pub const ROWS: usize = 100;
pub const PAUSE: Duration = Duration::from_secs(1);
pub const RULE_NUMBERS: RangeInclusive<u32> = 0..=256;

#[derive(Clone, Debug)]
pub struct DriverConfig {
    pub cols: usize,
    pub rows: usize,
    pub pause: Duration,
    pub rule_numbers: RangeInclusive<u32>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            cols: COLS,
            rows: ROWS,
            pause: PAUSE,
            rule_numbers: RULE_NUMBERS,
        }
    }
}

/// StopToken
///
/// Shared flag asking a running driver to stop. Clones share the same flag.

#[derive(Clone, Default)]
pub struct StopToken {
    stopped: Arc<AtomicBool>,
}

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

/// AnyAutomaton

pub enum AnyAutomaton {
    Binary(Automaton<BinaryCell, ElementaryRule>),
    Quad(Automaton<QuadCell, LiftedRule<QuadCell>>),
    Rgb(Automaton<RgbCell, LiftedRule<RgbCell>>),
}

impl AnyAutomaton {
    pub fn new<G>(
        alphabet: Alphabet,
        rule_number: u32,
        cols: usize,
        rows: usize,
        rng: G,
    ) -> Result<Self>
    where
        G: Rng + Send + 'static,
    {
        let elementary = ElementaryRule::new(rule_number);
        Ok(match alphabet {
            Alphabet::Binary => {
                AnyAutomaton::Binary(Automaton::with_rng(cols, rows, rng, elementary)?)
            }
            Alphabet::Quad => AnyAutomaton::Quad(Automaton::with_rng(
                cols,
                rows,
                rng,
                LiftedRule::new(elementary),
            )?),
            Alphabet::Rgb => AnyAutomaton::Rgb(Automaton::with_rng(
                cols,
                rows,
                rng,
                LiftedRule::new(elementary),
            )?),
        })
    }

    pub fn alphabet(&self) -> Alphabet {
        match self {
            AnyAutomaton::Binary(_) => Alphabet::Binary,
            AnyAutomaton::Quad(_) => Alphabet::Quad,
            AnyAutomaton::Rgb(_) => Alphabet::Rgb,
        }
    }

    pub fn rule_number(&self) -> u32 {
        match self {
            AnyAutomaton::Binary(a) => a.rule().number(),
            AnyAutomaton::Quad(a) => a.rule().elementary().number(),
            AnyAutomaton::Rgb(a) => a.rule().elementary().number(),
        }
    }

    /// Columns and rows.
    pub fn size(&self) -> (usize, usize) {
        match self {
            AnyAutomaton::Binary(a) => (a.cols(), a.rows()),
            AnyAutomaton::Quad(a) => (a.cols(), a.rows()),
            AnyAutomaton::Rgb(a) => (a.cols(), a.rows()),
        }
    }

    /// Styled rows, first generation first.
    pub fn into_rows(self) -> Box<dyn Iterator<Item = StyledRow>> {
        match self {
            AnyAutomaton::Binary(a) => Box::new(a.generations().map(|row| StyledRow::new(&row))),
            AnyAutomaton::Quad(a) => Box::new(a.generations().map(|row| StyledRow::new(&row))),
            AnyAutomaton::Rgb(a) => Box::new(a.generations().map(|row| StyledRow::new(&row))),
        }
    }
}

/// Driver
///
/// Endlessly simulates automata with a random alphabet and rule number,
/// writing each one out in full before pausing and starting the next.

pub struct Driver<G: Rng> {
    config: DriverConfig,
    rng: G,
}

impl<G: Rng> Driver<G> {
    pub fn new(config: DriverConfig, rng: G) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn random_automaton(&mut self) -> Result<AnyAutomaton> {
        let alphabet = Alphabet::choose(&mut self.rng);
        let rule_number = self.rng.random_range(self.config.rule_numbers.clone());
        let cell_rng = StdRng::seed_from_u64(self.rng.random());
        AnyAutomaton::new(
            alphabet,
            rule_number,
            self.config.cols,
            self.config.rows,
            cell_rng,
        )
    }

    /// Simulates one random automaton, writes every row and flushes.
    pub fn run_once<W: Write>(&mut self, out: &mut W) -> Result<(Alphabet, u32)> {
        let automaton = self.random_automaton()?;
        let picked = (automaton.alphabet(), automaton.rule_number());
        let (cols, rows) = automaton.size();
        info!(
            "Running {}x{} {} automaton ({} bits per cell) with rule {}",
            cols,
            rows,
            picked.0,
            picked.0.bits(),
            picked.1
        );
        for row in automaton.into_rows() {
            row.draw(out)?;
            queue!(out, Print('\n'))?;
        }
        out.flush()?;
        Ok(picked)
    }

    /// Runs automata one after the other until `stop` is raised. Returns the
    /// number of automata written.
    pub fn run<W: Write>(&mut self, out: &mut W, stop: &StopToken) -> Result<usize> {
        let mut nb_automata = 0;
        while !stop.is_stopped() {
            self.run_once(out)?;
            nb_automata += 1;
            if stop.is_stopped() {
                break;
            }
            debug!("Pausing for {:?}", self.config.pause);
            thread::sleep(self.config.pause);
        }
        info!("Stopped after {} automata", nb_automata);
        Ok(nb_automata)
    }
}
