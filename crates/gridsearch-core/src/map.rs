//! Grids built from text.
//!
//! A [`TextMap`] parses an ASCII map into an [`OccupancyGrid`] plus optional
//! start and goal markers:
//!
//! | Char | Meaning |
//! |---|---|
//! | `.` | free cell |
//! | `#` | blocked cell |
//! | `S` | start (free) |
//! | `G` | goal (free) |
//!
//! Lines are separated by `'\n'` and must all have the same width.

use std::fmt;

use crate::geom::Position;
use crate::grid::{Cell, OccupancyGrid};

pub const FREE: char = '.';
pub const BLOCKED: char = '#';
pub const START: char = 'S';
pub const GOAL: char = 'G';

/// A parsed text map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMap {
    pub grid: OccupancyGrid,
    pub start: Option<Position>,
    pub goal: Option<Position>,
}

impl TextMap {
    /// Parse a map.
    ///
    /// Surrounding whitespace of the whole string is trimmed, as is a
    /// trailing `'\r'` on each line. Spaces inside a line are not allowed.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MapError::Empty);
        }

        let lines: Vec<&str> = s.lines().map(|l| l.trim_end_matches('\r')).collect();
        let width = lines[0].chars().count();
        for (row, line) in lines.iter().enumerate() {
            let w = line.chars().count();
            if w != width {
                return Err(MapError::InconsistentWidth {
                    row,
                    expected: width,
                    found: w,
                });
            }
        }

        let mut grid = OccupancyGrid::new(lines.len() as i32, width as i32);
        let mut start = None;
        let mut goal = None;

        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let p = Position::new(row as i32, col as i32);
                match ch {
                    FREE => {}
                    BLOCKED => {
                        grid.set(p, Cell::Blocked);
                    }
                    START => {
                        if start.replace(p).is_some() {
                            return Err(MapError::DuplicateMarker { ch, pos: p });
                        }
                    }
                    GOAL => {
                        if goal.replace(p).is_some() {
                            return Err(MapError::DuplicateMarker { ch, pos: p });
                        }
                    }
                    _ => return Err(MapError::InvalidChar { ch, pos: p }),
                }
            }
        }

        Ok(Self { grid, start, goal })
    }

    /// Start marker, or an error if the map has none.
    pub fn require_start(&self) -> Result<Position, MapError> {
        self.start.ok_or(MapError::MissingMarker(START))
    }

    /// Goal marker, or an error if the map has none.
    pub fn require_goal(&self) -> Result<Position, MapError> {
        self.goal.ok_or(MapError::MissingMarker(GOAL))
    }
}

impl fmt::Display for TextMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.grid.rows() {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.grid.cols() {
                let p = Position::new(row, col);
                let ch = if Some(p) == self.start {
                    START
                } else if Some(p) == self.goal {
                    GOAL
                } else if self.grid.is_traversable(p) {
                    FREE
                } else {
                    BLOCKED
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a text map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The map has no lines.
    Empty,
    /// A line's width differs from the first line's.
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the map alphabet.
    InvalidChar { ch: char, pos: Position },
    /// A start or goal marker appears more than once.
    DuplicateMarker { ch: char, pos: Position },
    /// A required start or goal marker is absent.
    MissingMarker(char),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map: empty"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "map: row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "map: invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::DuplicateMarker { ch, pos } => {
                write!(f, "map: duplicate \u{201c}{ch}\u{201d} marker at {pos}")
            }
            Self::MissingMarker(ch) => write!(f, "map: no \u{201c}{ch}\u{201d} marker"),
        }
    }
}

impl std::error::Error for MapError {}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
S...
.##.
...G";

    #[test]
    fn parse_markers_and_walls() {
        let m = TextMap::parse(ROOM).unwrap();
        assert_eq!(m.grid.rows(), 3);
        assert_eq!(m.grid.cols(), 4);
        assert_eq!(m.start, Some(Position::new(0, 0)));
        assert_eq!(m.goal, Some(Position::new(2, 3)));
        assert_eq!(m.grid.count(Cell::Blocked), 2);
        assert!(m.grid.is_traversable(Position::new(0, 0)));
        assert!(!m.grid.is_traversable(Position::new(1, 2)));
    }

    #[test]
    fn display_round_trips() {
        let m = TextMap::parse(ROOM).unwrap();
        assert_eq!(m.to_string(), ROOM);
    }

    #[test]
    fn surrounding_whitespace_and_crlf() {
        let m = TextMap::parse("\n\n.#\r\n#.\r\n\n").unwrap();
        assert_eq!(m.grid.rows(), 2);
        assert_eq!(m.grid.cols(), 2);
        assert_eq!(m.start, None);
    }

    #[test]
    fn inconsistent_width() {
        let err = TextMap::parse("...\n..\n...").unwrap_err();
        assert_eq!(
            err,
            MapError::InconsistentWidth {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn invalid_char() {
        let err = TextMap::parse("..\n.x").unwrap_err();
        assert_eq!(
            err,
            MapError::InvalidChar {
                ch: 'x',
                pos: Position::new(1, 1)
            }
        );
    }

    #[test]
    fn duplicate_start() {
        let err = TextMap::parse("S.\n.S").unwrap_err();
        assert!(matches!(err, MapError::DuplicateMarker { ch: 'S', .. }));
    }

    #[test]
    fn missing_goal() {
        let m = TextMap::parse("S.").unwrap();
        assert_eq!(m.require_start(), Ok(Position::ZERO));
        assert_eq!(m.require_goal(), Err(MapError::MissingMarker('G')));
    }

    #[test]
    fn empty_map() {
        assert_eq!(TextMap::parse("  \n "), Err(MapError::Empty));
    }
}
