// RIBBON
pub mod automaton;
pub mod cell;
pub mod color;
pub mod driver;
pub mod error;
pub mod rule;
pub mod terminal;

pub use automaton::{step, Automaton, Generations, RenderedRows};
pub use cell::{Alphabet, BinaryCell, BitCell, Cell, QuadCell, RgbCell};
pub use color::Color;
pub use driver::{AnyAutomaton, Driver, DriverConfig, StopToken};
pub use error::{Error, Result};
pub use rule::{ElementaryRule, LiftedRule, Rule};
