use itertools::Itertools;
use std::fmt;

use crate::cells::{Cartesian2DCoordinate, CoordinateSmallVec};
use crate::config::MazeConfig;
use crate::disjoint_set::DisjointSet;
use crate::generators::{self, GenerationError};
use crate::grid::{Grid, GridError};
use crate::random::{self, RandomSource};
use crate::units::{ComponentsCount, GridSize};

pub type CoordinateKeyFn = fn(&Cartesian2DCoordinate) -> Cartesian2DCoordinate;

/// Connectivity of carved cells, every grid cell is an element keyed by its own coordinate.
pub type CoordinateSets = DisjointSet<Cartesian2DCoordinate, Cartesian2DCoordinate, CoordinateKeyFn>;

fn coordinate_key(coord: &Cartesian2DCoordinate) -> Cartesian2DCoordinate {
    *coord
}

/// A square maze: which cells are carved, how the carved cells connect, and where the
/// path starts and ends.
///
/// Carving a cell through `set_point_at` joins it to every carved neighbour, so the
/// connectivity groups always match carved adjacency. Clearing a cell leaves the groups alone,
/// only pruning clears cells and it only removes cells outside the start's group.
#[derive(Debug)]
pub struct Maze {
    grid: Grid,
    connectivity: CoordinateSets,
    start: Option<Cartesian2DCoordinate>,
    end: Option<Cartesian2DCoordinate>,
    pair_sequence: Vec<Cartesian2DCoordinate>,
}

impl Maze {
    /// A blank maze, nothing carved, with a freshly shuffled pair sequence.
    pub fn new<R: RandomSource>(size: GridSize, rng: &mut R) -> Maze {
        let mut maze = Maze {
            grid: Grid::new(size),
            connectivity: DisjointSet::new(coordinate_key as CoordinateKeyFn),
            start: None,
            end: None,
            pair_sequence: Vec::new(),
        };
        maze.reset(rng);
        maze
    }

    /// Generates a maze: random walk passes are retried until one leaves enough components,
    /// then every carved cell not connected to the start is cleared.
    pub fn create<R: RandomSource>(config: &MazeConfig, rng: &mut R) -> Result<Maze, GenerationError> {
        generators::generate(config, rng)
    }

    /// Back to blank: rebuilds the grid and the connectivity groups from scratch, forgets the
    /// start and end, and reshuffles the pair sequence.
    pub fn reset<R: RandomSource>(&mut self, rng: &mut R) {
        let size = self.size();
        self.grid = Grid::new(size);
        self.connectivity = DisjointSet::with_capacity(size.cells_count(),
                                                       coordinate_key as CoordinateKeyFn);
        self.start = None;
        self.end = None;

        let mut pair_sequence = self.grid.iter().collect::<Vec<_>>();
        for coord in &pair_sequence {
            self.connectivity.add(coord);
        }
        random::shuffle(&mut pair_sequence, rng);
        self.pair_sequence = pair_sequence;
    }

    #[inline]
    pub fn size(&self) -> GridSize {
        self.grid.size()
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn start(&self) -> Option<Cartesian2DCoordinate> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Cartesian2DCoordinate> {
        self.end
    }

    /// Every grid coordinate exactly once, in the randomized order carving and pruning visit them.
    #[inline]
    pub fn pair_sequence(&self) -> &[Cartesian2DCoordinate] {
        &self.pair_sequence
    }

    #[inline]
    pub fn is_in_bounds(&self, coord: Cartesian2DCoordinate) -> bool {
        self.grid.is_in_bounds(coord)
    }

    pub fn point_at(&self, coord: Cartesian2DCoordinate) -> Result<bool, GridError> {
        self.grid.is_carved(coord)
    }

    /// Carve a cell and join it to the groups of its already carved neighbours.
    pub fn set_point_at(&mut self, coord: Cartesian2DCoordinate) -> Result<(), GridError> {
        self.grid.carve(coord)?;

        for neighbour in self.grid.adjacent_points(coord) {
            if self.grid.is_carved(neighbour)? {
                self.connectivity.merge(&coord, &neighbour);
            }
        }
        Ok(())
    }

    pub fn clear_point_at(&mut self, coord: Cartesian2DCoordinate) -> Result<(), GridError> {
        self.grid.clear(coord)
    }

    #[inline]
    pub fn adjacent_points(&self, coord: Cartesian2DCoordinate) -> CoordinateSmallVec {
        self.grid.adjacent_points(coord)
    }

    /// Number of connectivity groups over all cells, each uncarved cell counts as its own group.
    pub fn component_count(&self) -> ComponentsCount {
        ComponentsCount(self.connectivity.component_count())
    }

    pub fn has_same_group(&mut self, a: Cartesian2DCoordinate, b: Cartesian2DCoordinate) -> bool {
        self.connectivity.has_same_group(&a, &b)
    }

    /// Read only connectivity check against the start, false while there is no start.
    pub fn is_connected_to_start(&self, coord: Cartesian2DCoordinate) -> bool {
        let start_root = self.start.and_then(|start| self.connectivity.root_key(&start));
        start_root.is_some() && start_root == self.connectivity.root_key(&coord)
    }

    pub fn carved_cells<'a>(&'a self) -> impl Iterator<Item = Cartesian2DCoordinate> + 'a {
        self.grid.iter_carved()
    }

    #[inline]
    pub fn carved_count(&self) -> usize {
        self.grid.carved_count()
    }

    pub(crate) fn set_endpoints(&mut self,
                                start: Cartesian2DCoordinate,
                                end: Cartesian2DCoordinate) {
        self.start = Some(start);
        self.end = Some(end);
    }

    fn glyph_at(&self, coord: Cartesian2DCoordinate) -> char {
        if self.start == Some(coord) {
            'S'
        } else if self.end == Some(coord) {
            'E'
        } else {
            match self.grid.is_carved(coord) {
                Ok(true) => '.',
                Ok(false) | Err(GridError::OutOfBounds(_)) => '#',
            }
        }
    }
}

/// One text line per row: `S` start, `E` end, `.` carved and `#` solid.
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let side = self.size().0 as u32;
        let rows = (0..side).map(|y| {
            (0..side)
                .map(|x| self.glyph_at(Cartesian2DCoordinate::new(x, y)))
                .collect::<String>()
        });
        write!(f, "{}", rows.format("\n"))
    }
}
