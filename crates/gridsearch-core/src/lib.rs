//! Grid model for uninformed and informed search.
//!
//! This crate provides the types every search shares: `(row, col)`
//! positions, the occupancy grid the algorithms read, a text map format,
//! and seeded random obstacle placement.

pub mod geom;
pub mod grid;
pub mod map;
pub mod mapgen;

pub use geom::{Bounds, Position};
pub use grid::{Cell, OccupancyGrid};
pub use map::{MapError, TextMap};
pub use mapgen::ObstacleGen;
