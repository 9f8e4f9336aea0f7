use std::fmt;

use crate::cells::Cartesian2DCoordinate;
use crate::units::GridSize;

/// Visits every coordinate of a square grid x-major, all of column 0 top to bottom then column 1...
#[derive(Clone)]
pub struct CellIter {
    size: GridSize,
    current_cell_number: usize,
    cells_count: usize,
}

impl CellIter {
    pub fn new(size: GridSize) -> CellIter {
        CellIter {
            size,
            current_cell_number: 0,
            cells_count: size.cells_count(),
        }
    }
}

impl fmt::Debug for CellIter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "CellIter :: current_cell_number: {:?}, cells_count: {:?}",
               self.current_cell_number,
               self.cells_count)
    }
}

impl ExactSizeIterator for CellIter {} // default impl using size_hint()
impl Iterator for CellIter {
    type Item = Cartesian2DCoordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = Cartesian2DCoordinate::from_x_major_index(self.current_cell_number,
                                                                  self.size);
            self.current_cell_number += 1;
            Some(coord)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cells_count - self.current_cell_number;
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_iter_is_x_major() {
        let gc = |x, y| Cartesian2DCoordinate::new(x, y);
        assert_eq!(CellIter::new(GridSize(2)).collect::<Vec<_>>(),
                   &[gc(0, 0), gc(0, 1), gc(1, 0), gc(1, 1)]);
    }

    #[test]
    fn cell_iter_exact_size() {
        let mut iter = CellIter::new(GridSize(3));
        assert_eq!(iter.len(), 9);
        iter.next();
        assert_eq!(iter.len(), 8);
        assert_eq!(CellIter::new(GridSize(0)).count(), 0);
    }
}
