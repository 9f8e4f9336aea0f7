use crate::units::{Attempts, ComponentsCount, GridSize};

pub const DEFAULT_GRID_SIZE: GridSize = GridSize(30);
pub const DEFAULT_MAX_ATTEMPTS: Attempts = Attempts(10_000);

/// Knobs for `Maze::create`.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct MazeConfig {
    size: GridSize,
    min_components: ComponentsCount,
    max_attempts: Option<Attempts>,
}

/// The fewest components (carved regions plus uncarved singleton cells) a generation pass
/// must leave behind to be kept: 11/18ths of the cells, 550 on a 30x30 grid.
pub fn default_min_components(size: GridSize) -> ComponentsCount {
    ComponentsCount(size.cells_count() * 11 / 18)
}

impl MazeConfig {
    pub fn new(size: GridSize) -> MazeConfig {
        MazeConfig {
            size,
            min_components: default_min_components(size),
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
        }
    }

    #[inline]
    pub fn size(&self) -> GridSize {
        self.size
    }

    #[inline]
    pub fn min_components(&self) -> ComponentsCount {
        self.min_components
    }

    /// None means retry until a pass is accepted, however long that takes.
    #[inline]
    pub fn max_attempts(&self) -> Option<Attempts> {
        self.max_attempts
    }
}

impl Default for MazeConfig {
    fn default() -> MazeConfig {
        MazeConfig::new(DEFAULT_GRID_SIZE)
    }
}

/// Chainable construction of a `MazeConfig`, the component threshold follows the
/// grid size unless set explicitly.
#[derive(Debug, Clone, Default)]
pub struct MazeConfigBuilder {
    size: Option<GridSize>,
    min_components: Option<ComponentsCount>,
    max_attempts: Option<Option<Attempts>>,
}

impl MazeConfigBuilder {
    pub fn new() -> MazeConfigBuilder {
        MazeConfigBuilder::default()
    }

    pub fn size(mut self, size: GridSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn min_components(mut self, min_components: ComponentsCount) -> Self {
        self.min_components = Some(min_components);
        self
    }

    pub fn max_attempts(mut self, max_attempts: Attempts) -> Self {
        self.max_attempts = Some(Some(max_attempts));
        self
    }

    pub fn unbounded_attempts(mut self) -> Self {
        self.max_attempts = Some(None);
        self
    }

    pub fn build(self) -> MazeConfig {
        let size = self.size.unwrap_or(DEFAULT_GRID_SIZE);
        MazeConfig {
            size,
            min_components: self.min_components.unwrap_or_else(|| default_min_components(size)),
            max_attempts: self.max_attempts.unwrap_or(Some(DEFAULT_MAX_ATTEMPTS)),
        }
    }
}
