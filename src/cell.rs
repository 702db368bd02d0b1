// External libraries
use rand::Rng;

// RIBBON
use crate::color::Color;

pub trait Cell: Copy + std::fmt::Debug + Eq + PartialEq + Send + Sync + 'static {
    fn color(&self) -> Color;

    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

/// A cell made of a fixed number of independent bits. Rule lifting flattens
/// cells into their bits and reassembles bits into cells through this trait.
pub trait BitCell: Cell {
    const BITS: usize;

    fn bit(&self, idx: usize) -> bool;

    fn from_bits(bits: &[bool]) -> Self;
}

/// BinaryCell

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct BinaryCell {
    pub state: bool,
}

impl BinaryCell {
    pub const DEAD: BinaryCell = BinaryCell { state: false };
    pub const ALIVE: BinaryCell = BinaryCell { state: true };

    #[inline]
    pub fn new(state: bool) -> Self {
        Self { state }
    }
}

impl Cell for BinaryCell {
    fn color(&self) -> Color {
        if self.state {
            Color::White
        } else {
            Color::Black
        }
    }

    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.random())
    }
}

impl BitCell for BinaryCell {
    const BITS: usize = 1;

    fn bit(&self, idx: usize) -> bool {
        match idx {
            0 => self.state,
            _ => panic!("{}", ERR_BIT_INDEX),
        }
    }

    fn from_bits(bits: &[bool]) -> Self {
        match bits {
            [state] => Self::new(*state),
            _ => panic!("{}", ERR_BIT_COUNT),
        }
    }
}

/// QuadCell

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct QuadCell {
    pub g: bool,
    pub rb: bool,
}

impl QuadCell {
    #[inline]
    pub fn new(g: bool, rb: bool) -> Self {
        Self { g, rb }
    }
}

impl Cell for QuadCell {
    fn color(&self) -> Color {
        match (self.g, self.rb) {
            (false, false) => Color::Blue,
            (false, true) => Color::Red,
            (true, false) => Color::Green,
            (true, true) => Color::Yellow,
        }
    }

    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.random(), rng.random())
    }
}

impl BitCell for QuadCell {
    const BITS: usize = 2;

    fn bit(&self, idx: usize) -> bool {
        match idx {
            0 => self.g,
            1 => self.rb,
            _ => panic!("{}", ERR_BIT_INDEX),
        }
    }

    fn from_bits(bits: &[bool]) -> Self {
        match bits {
            [g, rb] => Self::new(*g, *rb),
            _ => panic!("{}", ERR_BIT_COUNT),
        }
    }
}

/// RgbCell

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct RgbCell {
    pub r: bool,
    pub g: bool,
    pub b: bool,
}

impl RgbCell {
    #[inline]
    pub fn new(r: bool, g: bool, b: bool) -> Self {
        Self { r, g, b }
    }
}

impl Cell for RgbCell {
    // Same table as indexing by 4r + 2g + b
    fn color(&self) -> Color {
        match (self.r, self.g, self.b) {
            (false, false, false) => Color::Black,
            (false, false, true) => Color::Blue,
            (false, true, false) => Color::Green,
            (false, true, true) => Color::Cyan,
            (true, false, false) => Color::Red,
            (true, false, true) => Color::Magenta,
            (true, true, false) => Color::Yellow,
            (true, true, true) => Color::White,
        }
    }

    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.random(), rng.random(), rng.random())
    }
}

impl BitCell for RgbCell {
    const BITS: usize = 3;

    fn bit(&self, idx: usize) -> bool {
        match idx {
            0 => self.r,
            1 => self.g,
            2 => self.b,
            _ => panic!("{}", ERR_BIT_INDEX),
        }
    }

    fn from_bits(bits: &[bool]) -> Self {
        match bits {
            [r, g, b] => Self::new(*r, *g, *b),
            _ => panic!("{}", ERR_BIT_COUNT),
        }
    }
}

/// Alphabet

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Alphabet {
    Binary,
    Quad,
    Rgb,
}

impl Alphabet {
    pub const ALL: [Alphabet; 3] = [Alphabet::Binary, Alphabet::Quad, Alphabet::Rgb];

    /// Picks one of the alphabets uniformly at random.
    pub fn choose<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn bits(&self) -> usize {
        match self {
            Alphabet::Binary => BinaryCell::BITS,
            Alphabet::Quad => QuadCell::BITS,
            Alphabet::Rgb => RgbCell::BITS,
        }
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Alphabet::Binary => f.write_str("binary"),
            Alphabet::Quad => f.write_str("quad"),
            Alphabet::Rgb => f.write_str("rgb"),
        }
    }
}

const ERR_BIT_INDEX: &str = "Bit index out of the cell's range.";
const ERR_BIT_COUNT: &str = "Wrong number of bits for this cell type.";
