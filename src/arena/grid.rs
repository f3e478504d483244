//! # GridMaze
//!
//! A headless maze on a square grid, parsed from ASCII art:
//!
//! | glyph     | tile                                  |
//! |-----------|---------------------------------------|
//! | `#`       | wall, eliminates an agent entering it |
//! | `X`       | obstruction, same as a wall           |
//! | `S`       | start, an unscored floor tile         |
//! | `.`       | unscored floor                        |
//! | `0`–`9`   | floor scoring 0 to 9                  |
//! | `A`–`Z`   | floor scoring 10 to 35                |
//!
//! Leaving the grid counts as hitting a wall. Every agent starts on `S`, moves
//! one cell per move action and reports the score of each scored tile it
//! enters. With the default target score of 19, `J` is the goal.
//!
//! ## Example
//!
//! ```rust
//! use wayfinder::arena::GridMaze;
//!
//! let maze: GridMaze = "#####\n#S12#\n#####".parse().unwrap();
//! assert_eq!(maze.width(), 5);
//! assert_eq!(maze.start(), (1, 1));
//! ```

use std::{path::Path, str::FromStr};

use rayon::prelude::*;

use super::{AgentHost, Arena};
use crate::{
    error::{GeneticError, Result},
    genome::Action,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Obstruction,
    Floor { score: Option<u32> },
}

impl Tile {
    fn from_glyph(glyph: char) -> Option<Self> {
        let tile = match glyph {
            '#' => Tile::Wall,
            'X' => Tile::Obstruction,
            '.' | 'S' => Tile::Floor { score: None },
            '0'..='9' => Tile::Floor {
                score: glyph.to_digit(10),
            },
            'A'..='Z' => Tile::Floor {
                score: Some(glyph as u32 - 'A' as u32 + 10),
            },
            _ => return None,
        };
        Some(tile)
    }

    pub fn is_blocking(self) -> bool {
        matches!(self, Tile::Wall | Tile::Obstruction)
    }
}

type Cell = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Stay,
    Moved { to: Cell, score: Option<u32> },
    Eliminated,
}

#[derive(Debug, Clone)]
pub struct GridMaze {
    tiles: Vec<Tile>,
    width: usize,
    height: usize,
    start: Cell,
    positions: Vec<Cell>,
    /// Live agent count from which moves are resolved on the rayon pool.
    parallel_threshold: usize,
    finished: bool,
}

impl GridMaze {
    pub fn parse(text: &str) -> Result<Self> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect();

        let width = rows
            .first()
            .map(|row| row.chars().count())
            .ok_or_else(|| GeneticError::MazeParse("maze is empty".to_string()))?;

        let mut tiles = Vec::with_capacity(width * rows.len());
        let mut start = None;

        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() != width {
                return Err(GeneticError::MazeParse(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    line.chars().count(),
                    width
                )));
            }

            for (col, glyph) in line.chars().enumerate() {
                let tile = Tile::from_glyph(glyph).ok_or_else(|| {
                    GeneticError::MazeParse(format!(
                        "unknown glyph '{}' at row {}, column {}",
                        glyph, row, col
                    ))
                })?;

                if glyph == 'S' {
                    if start.is_some() {
                        return Err(GeneticError::MazeParse(
                            "maze has more than one start".to_string(),
                        ));
                    }
                    start = Some((row, col));
                }
                tiles.push(tile);
            }
        }

        let start =
            start.ok_or_else(|| GeneticError::MazeParse("maze has no start".to_string()))?;

        Ok(Self {
            tiles,
            width,
            height: rows.len(),
            start,
            positions: Vec::new(),
            parallel_threshold: 1000,
            finished: false,
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn tile(&self, (row, col): Cell) -> Option<Tile> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.tiles[row * self.width + col])
    }

    /// Current cell of agent `index`, `None` before the first reset.
    pub fn position(&self, index: usize) -> Option<Cell> {
        self.positions.get(index).copied()
    }

    fn resolve(&self, from: Cell, action: Action) -> Outcome {
        let Action::Move(heading) = action else {
            return Outcome::Stay;
        };

        let (d_row, d_col) = heading.offset();
        let target = from
            .0
            .checked_add_signed(d_row)
            .zip(from.1.checked_add_signed(d_col));

        match target.and_then(|cell| self.tile(cell).map(|tile| (cell, tile))) {
            Some((_, tile)) if tile.is_blocking() => Outcome::Eliminated,
            Some((to, Tile::Floor { score })) => Outcome::Moved { to, score },
            Some(_) | None => Outcome::Eliminated,
        }
    }
}

impl FromStr for GridMaze {
    type Err = GeneticError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Arena for GridMaze {
    fn reset(&mut self, host: &dyn AgentHost) -> Result<()> {
        self.positions = vec![self.start; host.agent_count()];
        self.finished = false;
        Ok(())
    }

    fn step(&mut self, host: &mut dyn AgentHost) -> Result<()> {
        if self.positions.len() != host.agent_count() {
            self.reset(&*host)?;
        }

        let mut intents = Vec::new();
        let mut exhausted = true;
        for index in 0..host.agent_count() {
            if !host.is_alive(index) {
                continue;
            }
            if let Some(action) = host.action_for(index)? {
                exhausted = false;
                intents.push((index, action));
            }
        }
        self.finished = exhausted;

        let outcomes: Vec<(usize, Outcome)> = if intents.len() >= self.parallel_threshold {
            intents
                .par_iter()
                .map(|&(index, action)| (index, self.resolve(self.positions[index], action)))
                .collect()
        } else {
            intents
                .iter()
                .map(|&(index, action)| (index, self.resolve(self.positions[index], action)))
                .collect()
        };

        for (index, outcome) in outcomes {
            match outcome {
                Outcome::Stay => {}
                Outcome::Eliminated => host.report_elimination(index)?,
                Outcome::Moved { to, score } => {
                    self.positions[index] = to;
                    if let Some(score) = score {
                        host.report_score(index, score)?;
                    }
                }
            }
        }

        Ok(())
    }

    fn round_finished(&self) -> bool {
        self.finished
    }
}
