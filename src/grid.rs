use bit_set::BitSet;
use std::error::Error;
use std::fmt;

use crate::cells::{Cartesian2DCoordinate, CoordinateSmallVec, COMPASS_ORDER};
use crate::grid_iterators::CellIter;
use crate::units::GridSize;

/// A square field of cells that are either carved (walkable) or not.
///
/// Cell `carved[x][y]` is bit `x * size + y`.
#[derive(Clone)]
pub struct Grid {
    size: GridSize,
    carved: BitSet,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum GridError {
    OutOfBounds(Cartesian2DCoordinate),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GridError::OutOfBounds(coord) => {
                write!(f, "Maze coordinate ({}, {}) is invalid or out-of-bounds.", coord.x, coord.y)
            }
        }
    }
}

impl Error for GridError {}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: size: {:?}, carved: {:?}", self.size, self.carved_count())
    }
}

impl Grid {
    pub fn new(size: GridSize) -> Grid {
        Grid {
            size,
            carved: BitSet::with_capacity(size.cells_count()),
        }
    }

    #[inline]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Is the grid coordinate valid for this grid - within [0, size) on both axes.
    #[inline]
    pub fn is_in_bounds(&self, coord: Cartesian2DCoordinate) -> bool {
        let GridSize(side) = self.size;
        (coord.x as usize) < side && (coord.y as usize) < side
    }

    pub fn is_carved(&self, coord: Cartesian2DCoordinate) -> Result<bool, GridError> {
        let index = self.bit_index(coord)?;
        Ok(self.carved.contains(index))
    }

    pub fn carve(&mut self, coord: Cartesian2DCoordinate) -> Result<(), GridError> {
        let index = self.bit_index(coord)?;
        self.carved.insert(index);
        Ok(())
    }

    pub fn clear(&mut self, coord: Cartesian2DCoordinate) -> Result<(), GridError> {
        let index = self.bit_index(coord)?;
        self.carved.remove(index);
        Ok(())
    }

    /// The in bounds orthogonal neighbours of `coord`, ordered up, down, left, right.
    pub fn adjacent_points(&self, coord: Cartesian2DCoordinate) -> CoordinateSmallVec {
        COMPASS_ORDER.iter()
            .filter_map(|&dir| coord.offset(dir, self.size))
            .collect()
    }

    #[inline]
    pub fn carved_count(&self) -> usize {
        self.carved.len()
    }

    /// All coordinates, x-major: (0, 0), (0, 1) ... (1, 0) ...
    #[inline]
    pub fn iter(&self) -> CellIter {
        CellIter::new(self.size)
    }

    pub fn iter_carved<'a>(&'a self) -> impl Iterator<Item = Cartesian2DCoordinate> + 'a {
        let size = self.size;
        self.carved.iter().map(move |index| Cartesian2DCoordinate::from_x_major_index(index, size))
    }

    #[inline]
    fn bit_index(&self, coord: Cartesian2DCoordinate) -> Result<usize, GridError> {
        if self.is_in_bounds(coord) {
            Ok(coord.x as usize * self.size.0 + coord.y as usize)
        } else {
            Err(GridError::OutOfBounds(coord))
        }
    }
}

#[cfg(test)]
mod tests {

    use itertools::Itertools;

    use super::*;

    fn gc(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x, y)
    }

    #[test]
    fn neighbour_cells() {
        let g = Grid::new(GridSize(10));

        let check_expected_neighbours = |coord, expected_neighbours: &[Cartesian2DCoordinate]| {
            let neighbours = g.adjacent_points(coord).iter().cloned().sorted().collect::<Vec<_>>();
            let expected = expected_neighbours.iter().cloned().sorted().collect::<Vec<_>>();
            assert_eq!(neighbours, expected);
        };

        // corners
        check_expected_neighbours(gc(0, 0), &[gc(1, 0), gc(0, 1)]);
        check_expected_neighbours(gc(9, 0), &[gc(8, 0), gc(9, 1)]);
        check_expected_neighbours(gc(0, 9), &[gc(0, 8), gc(1, 9)]);
        check_expected_neighbours(gc(9, 9), &[gc(9, 8), gc(8, 9)]);

        // side element examples
        check_expected_neighbours(gc(1, 0), &[gc(0, 0), gc(1, 1), gc(2, 0)]);
        check_expected_neighbours(gc(0, 8), &[gc(1, 8), gc(0, 7), gc(0, 9)]);

        // Some place with 4 neighbours inside the grid
        check_expected_neighbours(gc(1, 1), &[gc(0, 1), gc(1, 0), gc(2, 1), gc(1, 2)]);
    }

    #[test]
    fn neighbours_are_up_down_left_right() {
        let g = Grid::new(GridSize(3));
        assert_eq!(&*g.adjacent_points(gc(1, 1)), &[gc(1, 0), gc(1, 2), gc(0, 1), gc(2, 1)]);
        assert_eq!(&*g.adjacent_points(gc(0, 2)), &[gc(0, 1), gc(1, 2)]);
    }

    #[test]
    fn single_cell_grid_has_no_neighbours() {
        let g = Grid::new(GridSize(1));
        assert!(g.adjacent_points(gc(0, 0)).is_empty());
    }

    #[test]
    fn carve_and_clear_reflect_last_write() {
        let mut g = Grid::new(GridSize(4));
        assert_eq!(g.is_carved(gc(2, 3)), Ok(false));

        g.carve(gc(2, 3)).unwrap();
        assert_eq!(g.is_carved(gc(2, 3)), Ok(true));
        assert_eq!(g.is_carved(gc(3, 2)), Ok(false));

        g.carve(gc(2, 3)).unwrap();
        assert_eq!(g.carved_count(), 1);

        g.clear(gc(2, 3)).unwrap();
        assert_eq!(g.is_carved(gc(2, 3)), Ok(false));
        assert_eq!(g.carved_count(), 0);
    }

    #[test]
    fn out_of_bounds_access_fails() {
        let mut g = Grid::new(GridSize(4));
        for &coord in &[gc(4, 0), gc(0, 4), gc(4, 4), gc(u32::MAX, u32::MAX)] {
            assert!(!g.is_in_bounds(coord));
            assert_eq!(g.is_carved(coord), Err(GridError::OutOfBounds(coord)));
            assert_eq!(g.carve(coord), Err(GridError::OutOfBounds(coord)));
            assert_eq!(g.clear(coord), Err(GridError::OutOfBounds(coord)));
        }
        assert_eq!(g.carved_count(), 0);
    }

    #[test]
    fn out_of_bounds_message_names_coordinate() {
        let err = GridError::OutOfBounds(gc(5, 12));
        assert_eq!(err.to_string(), "Maze coordinate (5, 12) is invalid or out-of-bounds.");
    }

    #[test]
    fn iter_carved_lists_carved_cells() {
        let mut g = Grid::new(GridSize(3));
        g.carve(gc(2, 0)).unwrap();
        g.carve(gc(0, 1)).unwrap();
        assert_eq!(g.iter_carved().collect::<Vec<_>>(), vec![gc(0, 1), gc(2, 0)]);
    }
}
