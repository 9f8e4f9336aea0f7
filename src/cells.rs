use smallvec::SmallVec;
use std::fmt;

use crate::units::GridSize;

/// Up to one neighbour per compass direction, no heap allocation needed.
pub type CoordinateSmallVec = SmallVec<[Cartesian2DCoordinate; 4]>;

/// A cell position, `x` is the column and `y` the row, (0, 0) is the top left.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cartesian2DCoordinate {
    pub x: u32,
    pub y: u32,
}

/// The four orthogonal steps a walk or neighbour lookup can take.
/// North is up (y - 1), South is down (y + 1), West is left (x - 1), East is right (x + 1).
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    South,
    West,
    East,
}

/// Neighbour order used everywhere adjacency matters: up, down, left, right.
pub const COMPASS_ORDER: [CompassPrimary; 4] = [CompassPrimary::North,
                                                CompassPrimary::South,
                                                CompassPrimary::West,
                                                CompassPrimary::East];

impl CompassPrimary {
    /// Map a uniform sample in [0, 1) to a direction, a quarter of the range each.
    pub fn from_unit(sample: f64) -> CompassPrimary {
        if sample < 0.25 {
            CompassPrimary::North
        } else if sample < 0.5 {
            CompassPrimary::South
        } else if sample < 0.75 {
            CompassPrimary::West
        } else {
            CompassPrimary::East
        }
    }
}

impl Cartesian2DCoordinate {
    pub fn new(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate { x, y }
    }

    /// Converts an x-major index (`x * size + y`) back into a coordinate.
    #[inline]
    pub fn from_x_major_index(index: usize, size: GridSize) -> Cartesian2DCoordinate {
        let GridSize(side) = size;
        Cartesian2DCoordinate::new((index / side) as u32, (index % side) as u32)
    }

    /// Creates a new coordinate offset 1 cell away in the given direction.
    /// Returns None if the step would leave a grid of the given size.
    pub fn offset(&self, dir: CompassPrimary, size: GridSize) -> Option<Cartesian2DCoordinate> {
        let (x, y) = (self.x, self.y);
        let GridSize(side) = size;
        match dir {
            CompassPrimary::North => {
                if y > 0 {
                    Some(Cartesian2DCoordinate::new(x, y - 1))
                } else {
                    None
                }
            }
            CompassPrimary::South => {
                if (y as usize) + 1 < side {
                    Some(Cartesian2DCoordinate::new(x, y + 1))
                } else {
                    None
                }
            }
            CompassPrimary::West => {
                if x > 0 {
                    Some(Cartesian2DCoordinate::new(x - 1, y))
                } else {
                    None
                }
            }
            CompassPrimary::East => {
                if (x as usize) + 1 < side {
                    Some(Cartesian2DCoordinate::new(x + 1, y))
                } else {
                    None
                }
            }
        }
    }
}

impl fmt::Display for Cartesian2DCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_from_unit_quarters() {
        assert_eq!(CompassPrimary::from_unit(0.0), CompassPrimary::North);
        assert_eq!(CompassPrimary::from_unit(0.2499), CompassPrimary::North);
        assert_eq!(CompassPrimary::from_unit(0.25), CompassPrimary::South);
        assert_eq!(CompassPrimary::from_unit(0.5), CompassPrimary::West);
        assert_eq!(CompassPrimary::from_unit(0.74), CompassPrimary::West);
        assert_eq!(CompassPrimary::from_unit(0.75), CompassPrimary::East);
        assert_eq!(CompassPrimary::from_unit(0.9999), CompassPrimary::East);
    }

    #[test]
    fn offsets_clip_at_boundaries() {
        let size = GridSize(3);
        let gc = |x, y| Cartesian2DCoordinate::new(x, y);

        assert_eq!(gc(0, 0).offset(CompassPrimary::North, size), None);
        assert_eq!(gc(0, 0).offset(CompassPrimary::West, size), None);
        assert_eq!(gc(0, 0).offset(CompassPrimary::South, size), Some(gc(0, 1)));
        assert_eq!(gc(0, 0).offset(CompassPrimary::East, size), Some(gc(1, 0)));

        assert_eq!(gc(2, 2).offset(CompassPrimary::South, size), None);
        assert_eq!(gc(2, 2).offset(CompassPrimary::East, size), None);
        assert_eq!(gc(2, 2).offset(CompassPrimary::North, size), Some(gc(2, 1)));
        assert_eq!(gc(2, 2).offset(CompassPrimary::West, size), Some(gc(1, 2)));
    }

    #[test]
    fn x_major_index_round_trip() {
        let size = GridSize(4);
        assert_eq!(Cartesian2DCoordinate::from_x_major_index(0, size),
                   Cartesian2DCoordinate::new(0, 0));
        assert_eq!(Cartesian2DCoordinate::from_x_major_index(1, size),
                   Cartesian2DCoordinate::new(0, 1));
        assert_eq!(Cartesian2DCoordinate::from_x_major_index(4, size),
                   Cartesian2DCoordinate::new(1, 0));
        assert_eq!(Cartesian2DCoordinate::from_x_major_index(15, size),
                   Cartesian2DCoordinate::new(3, 3));
    }

    #[test]
    fn display_coordinate() {
        assert_eq!(format!("{}", Cartesian2DCoordinate::new(3, 7)), "(3, 7)");
    }
}
