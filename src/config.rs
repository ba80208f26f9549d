use std::time::Duration;

use clap::Parser;

use crate::pattern::Coord;
use crate::pattern::Preset;

/// Conway's Game of Life on a bounded grid
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct Config {
    /// Number of columns
    #[arg(long, default_value_t = 40)]
    pub width: usize,

    /// Number of rows
    #[arg(long, default_value_t = 20)]
    pub height: usize,

    /// A live cell at startup, as `x,y`. May be repeated
    #[arg(short, long = "cell", value_name = "X,Y")]
    pub cells: Vec<Coord>,

    /// A preset pattern to start with
    #[arg(short, long, value_enum, default_value_t = Preset::Glider)]
    pub pattern: Preset,

    /// Where the top left corner of `--pattern` goes
    #[arg(long, value_name = "X,Y", default_value = "10,8")]
    pub origin: Coord,

    /// Milliseconds between generations
    #[arg(long, default_value_t = 250)]
    pub interval_ms: u64,

    /// Side length of a cell, in braille dots. A terminal character is 2x4 dots, so anything
    /// smaller than 4 would leave cell rows that can't be clicked
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(4..))]
    pub cell_size: u16,

    /// Print generations as text instead of running the terminal UI
    #[arg(long)]
    pub headless: bool,

    /// Number of generations to print in headless mode
    #[arg(long, default_value_t = 10)]
    pub generations: u64,
}

impl Config {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Every cell to bring to life at startup: the preset followed by the single cells
    pub fn seed(&self) -> Vec<Coord> {
        let mut seed = self.pattern.cells_at(self.origin);

        seed.extend_from_slice(&self.cells);
        seed
    }
}

#[cfg(test)]
mod test {
    use clap::CommandFactory;
    use clap::Parser;

    use super::Config;
    use crate::pattern::Coord;
    use crate::pattern::Preset;

    #[test]
    fn verify_cli() {
        Config::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["gridlife"]).unwrap();

        assert_eq!((config.width, config.height), (40, 20));
        assert_eq!(config.interval_ms, 250);
        assert_eq!(config.cell_size, 4);
        assert!(!config.headless);
        assert_eq!(config.pattern, Preset::Glider);
        assert_eq!(
            config.seed(),
            vec![
                Coord::new(10, 8),
                Coord::new(11, 8),
                Coord::new(11, 9),
                Coord::new(12, 9),
                Coord::new(10, 10),
            ]
        );
    }

    #[test]
    fn empty_pattern() {
        let config = Config::try_parse_from(["gridlife", "--pattern", "empty"]).unwrap();
        assert!(config.seed().is_empty());

        let config = Config::try_parse_from(["gridlife", "-p", "empty", "-c", "3,4"]).unwrap();
        assert_eq!(config.seed(), vec![Coord::new(3, 4)]);
    }

    #[test]
    fn seed_from_cells_and_pattern() {
        let config = Config::try_parse_from([
            "gridlife",
            "--pattern",
            "blinker",
            "--origin",
            "1,2",
            "--cell",
            "0,0",
            "-c",
            "7,8",
        ])
        .unwrap();

        assert_eq!(config.pattern, Preset::Blinker);
        assert_eq!(
            config.seed(),
            vec![
                Coord::new(1, 2),
                Coord::new(2, 2),
                Coord::new(3, 2),
                Coord::new(0, 0),
                Coord::new(7, 8),
            ]
        );
    }

    #[test]
    fn rejects_bad_input() {
        assert!(Config::try_parse_from(["gridlife", "--cell", "1"]).is_err());
        for size in ["0", "1", "2", "3"] {
            assert!(Config::try_parse_from(["gridlife", "--cell-size", size]).is_err());
        }
        assert!(Config::try_parse_from(["gridlife", "--cell-size", "5"]).is_ok());
        assert!(Config::try_parse_from(["gridlife", "--pattern", "pulsar"]).is_err());
    }

    #[test]
    fn headless_generations() {
        let config =
            Config::try_parse_from(["gridlife", "--headless", "--generations", "3"]).unwrap();

        assert!(config.headless);
        assert_eq!(config.generations, 3);
    }
}
