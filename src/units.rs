/// Side length of a square maze grid, the grid holds `GridSize * GridSize` cells.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct GridSize(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct ComponentsCount(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Attempts(pub usize);

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct WalkLength(pub usize);

impl GridSize {
    #[inline]
    pub fn cells_count(&self) -> usize {
        self.0 * self.0
    }

    /// The start/end separation and the longest random walk are both a third of the side.
    #[inline]
    pub fn third(&self) -> usize {
        self.0 / 3
    }
}
