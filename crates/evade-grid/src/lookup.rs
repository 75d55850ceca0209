use evade_paths::NeighborLookup;

use crate::geom::Point;
use crate::map::GridMap;

/// Which cells count as adjacent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Adjacency {
    /// Cardinal moves only.
    #[default]
    Four,
    /// Cardinal and diagonal moves.
    Eight,
}

/// A [`NeighborLookup`] over the walkable cells of a [`GridMap`].
///
/// The lookup borrows the map, so edits made between queries (through a
/// fresh lookup) are always seen.
#[derive(Debug, Clone, Copy)]
pub struct GridLookup<'a> {
    map: &'a GridMap,
    adjacency: Adjacency,
}

impl<'a> GridLookup<'a> {
    pub fn new(map: &'a GridMap, adjacency: Adjacency) -> Self {
        Self { map, adjacency }
    }

    #[inline]
    pub fn map(&self) -> &'a GridMap {
        self.map
    }

    #[inline]
    pub fn adjacency(&self) -> Adjacency {
        self.adjacency
    }
}

impl NeighborLookup<Point> for GridLookup<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        let keep = |n: &Point| self.map.passable(*n);
        match self.adjacency {
            Adjacency::Four => buf.extend(p.neighbors_4().into_iter().filter(keep)),
            Adjacency::Eight => buf.extend(p.neighbors_8().into_iter().filter(keep)),
        }
    }
}

impl GridMap {
    /// Borrow the map as a neighbor lookup.
    pub fn lookup(&self, adjacency: Adjacency) -> GridLookup<'_> {
        GridLookup::new(self, adjacency)
    }
}
