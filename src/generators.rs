use log::{debug, info, trace, warn};
use std::cmp;
use std::error::Error;
use std::fmt;

use crate::cells::{Cartesian2DCoordinate, CompassPrimary};
use crate::config::MazeConfig;
use crate::grid::GridError;
use crate::maze::Maze;
use crate::random::RandomSource;
use crate::units::{Attempts, GridSize, WalkLength};

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum GenerationError {
    EmptyGrid,
    AttemptsExhausted(Attempts),
    Grid(GridError),
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GenerationError::EmptyGrid => write!(f, "A maze needs a grid size of at least 1."),
            GenerationError::AttemptsExhausted(Attempts(n)) => {
                write!(f, "No acceptable maze after {} generation attempts.", n)
            }
            GenerationError::Grid(ref err) => write!(f, "{}", err),
        }
    }
}

impl Error for GenerationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            GenerationError::Grid(ref err) => Some(err),
            _ => None,
        }
    }
}

impl From<GridError> for GenerationError {
    fn from(err: GridError) -> GenerationError {
        GenerationError::Grid(err)
    }
}

/// Random walk carving with whole-pass retries.
///
/// A single pass picks well separated start and end points then, visiting cells in the
/// maze's pair sequence order, shoots short straight walks out of every uncarved cell until
/// the start and end join up. Passes that leave too few components (one big blob of carved
/// cells) are thrown away and retried on a reset maze. Finally all carved cells that are not
/// connected to the start are cleared.
pub fn generate<R: RandomSource>(config: &MazeConfig, rng: &mut R) -> Result<Maze, GenerationError> {
    let size = config.size();
    if size.0 == 0 {
        return Err(GenerationError::EmptyGrid);
    }

    let mut maze = Maze::new(size, rng);
    carve_random_walks(&mut maze, config.max_attempts(), rng)?;
    let mut attempts = Attempts(1);
    debug!("Generation attempt {} left {} components", attempts.0, maze.component_count().0);

    while maze.component_count() < config.min_components() {
        if let Some(max_attempts) = config.max_attempts() {
            if attempts >= max_attempts {
                warn!("Giving up on a {}x{} maze after {} attempts, needed {} components",
                      size.0, size.0, attempts.0, config.min_components().0);
                return Err(GenerationError::AttemptsExhausted(attempts));
            }
        }

        maze.reset(rng);
        carve_random_walks(&mut maze, config.max_attempts(), rng)?;
        attempts.0 += 1;
        debug!("Generation attempt {} left {} components", attempts.0, maze.component_count().0);
    }

    let pruned = prune_unreachable(&mut maze)?;
    info!("Generated a {}x{} maze in {} attempts: {} components, {} carved cells, {} pruned",
          size.0, size.0, attempts.0, maze.component_count().0, maze.carved_count(), pruned);

    Ok(maze)
}

/// One generation pass over a blank maze.
/// `max_end_rolls` bounds the draws spent looking for an end cell far enough from the start.
pub fn carve_random_walks<R: RandomSource>(maze: &mut Maze,
                                           max_end_rolls: Option<Attempts>,
                                           rng: &mut R)
                                           -> Result<(), GenerationError> {
    let size = maze.size();
    let (start, end) = pick_start_and_end(size, max_end_rolls, rng)?;
    maze.set_endpoints(start, end);
    maze.set_point_at(start)?;
    maze.set_point_at(end)?;

    let longest_walk = cmp::max(1, size.third());

    for i in 0..maze.pair_sequence().len() {
        let seed = maze.pair_sequence()[i];
        if maze.point_at(seed)? {
            continue;
        }

        let direction = CompassPrimary::from_unit(rng.next_unit());
        let length = WalkLength(1 + rng.below(longest_walk));
        draw_walk(maze, seed, direction, length)?;

        if maze.has_same_group(start, end) {
            trace!("Start {} joined end {} after walking from seed {} of {}",
                   start, end, i + 1, maze.pair_sequence().len());
            break;
        }
    }

    Ok(())
}

/// Picks the start uniformly, then rerolls the end until it is at least a third of the grid
/// side away from the start on both axes.
///
/// Fails with `AttemptsExhausted` once `max_end_rolls` end cells have been drawn and rejected.
pub fn pick_start_and_end<R: RandomSource>(size: GridSize,
                                           max_end_rolls: Option<Attempts>,
                                           rng: &mut R)
                                           -> Result<(Cartesian2DCoordinate, Cartesian2DCoordinate),
                                                     GenerationError> {
    let start = random_cell(size, rng);
    let min_distance = size.third() as u32;
    let mut rolls = Attempts(0);

    loop {
        let end = random_cell(size, rng);
        if axis_distance(start.x, end.x) >= min_distance &&
           axis_distance(start.y, end.y) >= min_distance {
            return Ok((start, end));
        }

        rolls.0 += 1;
        if let Some(max_rolls) = max_end_rolls {
            if rolls >= max_rolls {
                warn!("No end cell at least {} away from start {} after {} draws",
                      min_distance, start, rolls.0);
                return Err(GenerationError::AttemptsExhausted(rolls));
            }
        }
    }
}

/// Carves `from` and then up to `length` more cells in `direction`.
/// Stops before stepping off the grid or onto an already carved cell, returns how many cells
/// were carved.
pub fn draw_walk(maze: &mut Maze,
                 from: Cartesian2DCoordinate,
                 direction: CompassPrimary,
                 length: WalkLength)
                 -> Result<usize, GridError> {
    let WalkLength(steps) = length;
    let size = maze.size();
    let mut carved = 0;
    let mut current = Some(from);

    while let Some(coord) = current {
        if carved > steps || maze.point_at(coord)? {
            break;
        }
        maze.set_point_at(coord)?;
        carved += 1;
        current = coord.offset(direction, size);
    }

    trace!("Walked {:?} from {} carving {} cells", direction, from, carved);
    Ok(carved)
}

/// Clears every carved cell outside the start's group, visiting cells in pair sequence order.
/// A maze without a start has nothing reachable and is cleared entirely.
/// Returns the number of cleared cells.
pub fn prune_unreachable(maze: &mut Maze) -> Result<usize, GridError> {
    let start = maze.start();
    let mut pruned = 0;

    for i in 0..maze.pair_sequence().len() {
        let coord = maze.pair_sequence()[i];
        if !maze.point_at(coord)? {
            continue;
        }

        let reachable = match start {
            Some(start) => maze.has_same_group(start, coord),
            None => false,
        };
        if !reachable {
            maze.clear_point_at(coord)?;
            pruned += 1;
        }
    }

    Ok(pruned)
}

fn random_cell<R: RandomSource>(size: GridSize, rng: &mut R) -> Cartesian2DCoordinate {
    let x = rng.below(size.0) as u32;
    let y = rng.below(size.0) as u32;
    Cartesian2DCoordinate::new(x, y)
}

#[inline]
fn axis_distance(a: u32, b: u32) -> u32 {
    if a > b { a - b } else { b - a }
}
