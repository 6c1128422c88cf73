//! Terminal drawing of a grid with search overlays.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor, execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use gridsearch_core::{Bounds, Position};
use gridsearch_paths::{Observer, Progress, VisitedSet};

use crate::scenario::Scenario;

/// What a single cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Free,
    Blocked,
    Frontier,
    Explored,
    Path,
    Start,
    Goal,
}

impl Tile {
    pub fn glyph(self) -> char {
        match self {
            Tile::Free => '.',
            Tile::Blocked => '#',
            Tile::Frontier => '+',
            Tile::Explored => 'o',
            Tile::Path => '*',
            Tile::Start => 'S',
            Tile::Goal => 'G',
        }
    }

    pub fn color(self) -> Color {
        match self {
            Tile::Free => Color::White,
            Tile::Blocked => Color::DarkGrey,
            Tile::Frontier => Color::Blue,
            Tile::Explored => Color::Cyan,
            Tile::Path => Color::Yellow,
            Tile::Start => Color::Green,
            Tile::Goal => Color::Red,
        }
    }
}

/// Cells a search has touched, collected from its [`Progress`] events.
///
/// An iterative deepening restart clears what was seen so far, so the
/// overlay always shows the current depth iteration.
#[derive(Debug, Clone)]
pub struct Overlay {
    bounds: Bounds,
    explored: VisitedSet,
    frontier: VisitedSet,
    path: VisitedSet,
    events: usize,
}

impl Overlay {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            explored: VisitedSet::new(bounds),
            frontier: VisitedSet::new(bounds),
            path: VisitedSet::new(bounds),
            events: 0,
        }
    }

    /// Mark the cells of a found path.
    pub fn set_path(&mut self, path: &[Position]) {
        for &p in path {
            self.path.insert(p);
        }
    }

    /// Number of events received.
    pub fn events(&self) -> usize {
        self.events
    }

    /// Tile for `p`. Endpoints win over the path, the path over search
    /// marks.
    pub fn tile(&self, scenario: &Scenario, p: Position) -> Tile {
        if p == scenario.start {
            Tile::Start
        } else if p == scenario.goal {
            Tile::Goal
        } else if !scenario.grid.is_traversable(p) {
            Tile::Blocked
        } else if self.path.contains(p) {
            Tile::Path
        } else if self.explored.contains(p) {
            Tile::Explored
        } else if self.frontier.contains(p) {
            Tile::Frontier
        } else {
            Tile::Free
        }
    }
}

impl Observer for Overlay {
    fn observe(&mut self, progress: Progress<'_>) {
        self.events += 1;
        match progress {
            Progress::Expanded(n) => {
                self.explored.insert(n.pos);
            }
            Progress::Discovered(n) => {
                self.frontier.insert(n.pos);
            }
            Progress::Restart { .. } => {
                self.explored = VisitedSet::new(self.bounds);
                self.frontier = VisitedSet::new(self.bounds);
            }
        }
    }
}

/// The grid as plain text, one line per row.
pub fn render_plain(scenario: &Scenario, overlay: &Overlay) -> String {
    let grid = &scenario.grid;
    let mut s = String::with_capacity(grid.bounds().len() + grid.rows() as usize);
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            s.push(overlay.tile(scenario, Position::new(row, col)).glyph());
        }
        s.push('\n');
    }
    s
}

/// Draw the grid in colour.
pub fn render<W: Write>(w: &mut W, scenario: &Scenario, overlay: &Overlay) -> io::Result<()> {
    let grid = &scenario.grid;
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let tile = overlay.tile(scenario, Position::new(row, col));
            queue!(w, SetForegroundColor(tile.color()), Print(tile.glyph()))?;
        }
        queue!(w, ResetColor, Print('\n'))?;
    }
    w.flush()
}

/// Colour key for [`render`].
pub fn legend<W: Write>(w: &mut W) -> io::Result<()> {
    let entries = [
        (Tile::Start, "start"),
        (Tile::Goal, "goal"),
        (Tile::Path, "path"),
        (Tile::Explored, "explored"),
        (Tile::Frontier, "frontier"),
        (Tile::Blocked, "blocked"),
    ];
    for (tile, name) in entries {
        queue!(
            w,
            SetForegroundColor(tile.color()),
            Print(tile.glyph()),
            ResetColor,
            Print(format!(" {name}  "))
        )?;
    }
    queue!(w, Print('\n'))?;
    w.flush()
}

/// Observer that redraws the grid in place on every event.
///
/// Drawing errors cannot be returned from [`Observer::observe`]; the first
/// one stops further drawing and is handed back by [`finish`](Self::finish).
pub struct Animator<'a, W: Write> {
    scenario: &'a Scenario,
    overlay: Overlay,
    out: W,
    delay: Duration,
    error: Option<io::Error>,
}

impl<'a, W: Write> Animator<'a, W> {
    pub fn new(scenario: &'a Scenario, mut out: W, delay: Duration) -> io::Result<Self> {
        execute!(out, terminal::Clear(ClearType::All), cursor::Hide)?;
        Ok(Self {
            scenario,
            overlay: Overlay::new(scenario.grid.bounds()),
            out,
            delay,
            error: None,
        })
    }

    fn draw(&mut self) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(0, 0))?;
        render(&mut self.out, self.scenario, &self.overlay)
    }

    /// Restore the cursor and return the collected overlay.
    pub fn finish(mut self) -> io::Result<Overlay> {
        if let Some(e) = self.error.take() {
            let _ = execute!(self.out, cursor::Show);
            return Err(e);
        }
        self.draw()?;
        execute!(self.out, cursor::Show)?;
        Ok(self.overlay)
    }
}

impl<W: Write> Observer for Animator<'_, W> {
    fn observe(&mut self, progress: Progress<'_>) {
        self.overlay.observe(progress);
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.draw() {
            self.error = Some(e);
            return;
        }
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}
