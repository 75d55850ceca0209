//! Walkable maps parsed from ASCII art.
//!
//! A map is a block of equally wide lines. `#` is a wall, `.` is floor, and
//! the marker glyphs `@` (agent), `E` (adversary) and `>` (destination) are
//! floor cells that also record a starting position.

use crate::geom::Point;

pub const WALL: char = '#';
pub const FLOOR: char = '.';
pub const AGENT: char = '@';
pub const ADVERSARY: char = 'E';
pub const DESTINATION: char = '>';

/// Errors that can occur when parsing or editing a map.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    /// The text holds no cells.
    #[error("map is empty")]
    Empty,
    /// A line's width differs from the first line's.
    #[error("map line {line} has width {got}, expected {expected}")]
    InconsistentWidth {
        line: usize,
        got: usize,
        expected: usize,
    },
    /// A character that is neither terrain nor a marker.
    #[error("map contains invalid glyph \u{201c}{ch}\u{201d} at {pos}")]
    InvalidGlyph { ch: char, pos: Point },
    /// A required marker does not appear.
    #[error("map has no \u{201c}{0}\u{201d} marker")]
    MissingMarker(char),
    /// A marker appears more than once.
    #[error("map has marker \u{201c}{ch}\u{201d} at both {first} and {second}")]
    DuplicateMarker { ch: char, first: Point, second: Point },
    /// A point lies outside the map.
    #[error("point {0} is outside the map")]
    OutOfBounds(Point),
}

/// Map rows with leading and trailing blank lines dropped. Handles `\r\n`.
fn rows(s: &str) -> std::str::Lines<'_> {
    s.trim_matches(|c: char| c == '\n' || c == '\r').lines()
}

/// A rectangular map of walkable and blocked cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    width: i32,
    height: i32,
    passable: Vec<bool>,
}

impl GridMap {
    /// Create a fully walkable map.
    pub fn open(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            passable: vec![true; (width * height) as usize],
        }
    }

    /// Parse a map from text.
    ///
    /// Leading and trailing blank lines are ignored, but every remaining line
    /// must have the same width.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let lines: Vec<&str> = rows(s).collect();
        let expected = lines.first().map_or(0, |l| l.chars().count());
        if expected == 0 {
            return Err(MapError::Empty);
        }

        let mut passable = Vec::with_capacity(expected * lines.len());
        for (y, line) in lines.iter().enumerate() {
            let got = line.chars().count();
            if got != expected {
                return Err(MapError::InconsistentWidth {
                    line: y,
                    got,
                    expected,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                let open = match ch {
                    WALL => false,
                    FLOOR | AGENT | ADVERSARY | DESTINATION => true,
                    _ => {
                        return Err(MapError::InvalidGlyph {
                            ch,
                            pos: Point::new(x as i32, y as i32),
                        });
                    }
                };
                passable.push(open);
            }
        }

        Ok(Self {
            width: expected as i32,
            height: lines.len() as i32,
            passable,
        })
    }

    /// Return the (width, height) size of the map in cells.
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        self.contains(p).then(|| (p.y * self.width + p.x) as usize)
    }

    /// Whether `p` is inside the map and walkable.
    #[inline]
    pub fn passable(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.passable[i])
    }

    /// Open or block a cell, e.g. for a door or a dropped obstacle.
    pub fn set_passable(&mut self, p: Point, open: bool) -> Result<(), MapError> {
        let i = self.idx(p).ok_or(MapError::OutOfBounds(p))?;
        self.passable[i] = open;
        Ok(())
    }

    /// All walkable points in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| Point::new(x, y)))
            .filter(|&p| self.passable(p))
    }

    /// Draw the map as text, overlaying `marks` in order (later marks win).
    pub fn render(&self, marks: &[(Point, char)]) -> String {
        let mut out = String::with_capacity(((self.width + 1) * self.height) as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                let p = Point::new(x, y);
                let ch = marks
                    .iter()
                    .rev()
                    .find(|(mp, _)| *mp == p)
                    .map(|&(_, c)| c)
                    .unwrap_or(if self.passable(p) { FLOOR } else { WALL });
                out.push(ch);
            }
            if y + 1 < self.height {
                out.push('\n');
            }
        }
        out
    }
}

/// Starting positions recorded in a map's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Markers {
    pub agent: Point,
    pub adversary: Point,
    pub destination: Point,
}

impl Markers {
    /// Locate the agent, adversary and destination markers in map text.
    ///
    /// Each must appear exactly once. Coordinates match [`GridMap::parse`].
    pub fn find(s: &str) -> Result<Self, MapError> {
        let mut found: [Option<Point>; 3] = [None; 3];
        let glyphs = [AGENT, ADVERSARY, DESTINATION];

        for (y, line) in rows(s).enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let Some(k) = glyphs.iter().position(|&g| g == ch) else {
                    continue;
                };
                let p = Point::new(x as i32, y as i32);
                if let Some(first) = found[k] {
                    return Err(MapError::DuplicateMarker {
                        ch,
                        first,
                        second: p,
                    });
                }
                found[k] = Some(p);
            }
        }

        let get = |k: usize| found[k].ok_or(MapError::MissingMarker(glyphs[k]));
        Ok(Self {
            agent: get(0)?,
            adversary: get(1)?,
            destination: get(2)?,
        })
    }
}
