//! Text layouts for the grid game.
//!
//! ```text
//! %%%%%%%%%%
//! %. P    G%
//! %%%%%%%%%%
//! ```
//!
//! `%` wall, `.` food, `o` capsule, `P` controlled agent, `G` adversary.
//! Adversaries are numbered 1.. in reading order.

use std::path::Path;
use std::str::FromStr;

use crate::error::LayoutError;
use crate::types::Pos;

#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    width: usize,
    height: usize,
    walls: Vec<bool>,
    food: Vec<bool>,
    capsules: Vec<Pos>,
    controlled_start: Pos,
    adversary_starts: Vec<Pos>,
}

impl Layout {
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = text
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .filter(|l| !l.is_empty())
            .collect();
        if rows.is_empty() {
            return Err(LayoutError::Empty);
        }

        let width = rows[0].chars().count();
        let height = rows.len();
        let mut walls = vec![false; width * height];
        let mut food = vec![false; width * height];
        let mut capsules = Vec::new();
        let mut controlled_start = None;
        let mut adversary_starts = Vec::new();

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(LayoutError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let pos = Pos::new(col as i32, row as i32);
                let idx = row * width + col;
                match ch {
                    '%' => walls[idx] = true,
                    '.' => food[idx] = true,
                    'o' => capsules.push(pos),
                    'P' => {
                        if controlled_start.replace(pos).is_some() {
                            return Err(LayoutError::DuplicateControlled);
                        }
                    }
                    'G' => adversary_starts.push(pos),
                    ' ' => {}
                    _ => return Err(LayoutError::UnknownCell { ch, row, col }),
                }
            }
        }

        let controlled_start = controlled_start.ok_or(LayoutError::MissingControlled)?;

        Ok(Self {
            width,
            height,
            walls,
            food,
            capsules,
            controlled_start,
            adversary_starts,
        })
    }

    /// Load a layout from a `.lay` text file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LayoutError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| LayoutError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse(&text)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell index for in-bounds positions.
    pub fn index(&self, pos: Pos) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        let (x, y) = (pos.x as usize, pos.y as usize);
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Out-of-bounds cells count as walls.
    pub fn is_wall(&self, pos: Pos) -> bool {
        self.index(pos).is_none_or(|i| self.walls[i])
    }

    pub fn initial_food(&self) -> &[bool] {
        &self.food
    }

    pub fn capsules(&self) -> &[Pos] {
        &self.capsules
    }

    pub fn controlled_start(&self) -> Pos {
        self.controlled_start
    }

    pub fn adversary_starts(&self) -> &[Pos] {
        &self.adversary_starts
    }

    /// Total agents: the controlled agent plus every adversary.
    pub fn num_agents(&self) -> usize {
        1 + self.adversary_starts.len()
    }
}

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod layout_tests;
