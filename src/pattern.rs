use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use clap::ValueEnum;
use thiserror::Error;

/// A cell coordinate, written `x,y`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<Coord> for (usize, usize) {
    fn from(c: Coord) -> Self {
        (c.x, c.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("Expected a coordinate like \"x,y\", got \"{got}\"")]
    MissingComma { got: String },

    #[error("Failed to parse x coordinate: {0}")]
    ParseX(#[source] ParseIntError),

    #[error("Failed to parse y coordinate: {0}")]
    ParseY(#[source] ParseIntError),
}

impl FromStr for Coord {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((x, y)) = s.split_once(',') else {
            return Err(PatternError::MissingComma { got: s.to_string() });
        };

        let x = x.trim().parse().map_err(PatternError::ParseX)?;
        let y = y.trim().parse().map_err(PatternError::ParseY)?;

        Ok(Self { x, y })
    }
}

/// A few well known starting patterns.
///
/// See: https://conwaylife.com/wiki/
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// 5 cell spaceship, travelling up and to the right
    Glider,

    /// Period 2 oscillator, three cells in a row
    Blinker,

    /// 2x2 still life
    Block,

    /// No cells at all
    Empty,
}

// ##.
// .##
// #..
const GLIDER: &[(usize, usize)] = &[(0, 0), (1, 0), (1, 1), (2, 1), (0, 2)];
const BLINKER: &[(usize, usize)] = &[(0, 0), (1, 0), (2, 0)];
const BLOCK: &[(usize, usize)] = &[(0, 0), (1, 0), (0, 1), (1, 1)];
const EMPTY: &[(usize, usize)] = &[];

impl Preset {
    /// Cells of the pattern, relative to its top left corner
    pub fn cells(self) -> &'static [(usize, usize)] {
        match self {
            Preset::Glider => GLIDER,
            Preset::Blinker => BLINKER,
            Preset::Block => BLOCK,
            Preset::Empty => EMPTY,
        }
    }

    /// Cells of the pattern with its top left corner placed at `origin`
    pub fn cells_at(self, origin: Coord) -> Vec<Coord> {
        self.cells()
            .iter()
            .map(|&(dx, dy)| Coord::new(origin.x.saturating_add(dx), origin.y.saturating_add(dy)))
            .collect()
    }
}
