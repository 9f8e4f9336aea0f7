use carved_mazes::{
    cells::Cartesian2DCoordinate,
    units::{Attempts, ComponentsCount, GridSize},
    Maze,
    MazeConfigBuilder,
};
use docopt::Docopt;
use itertools::Itertools;
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use serde_derive::Deserialize;
use std::{
    fs::File,
    io,
    io::prelude::*,
};

const USAGE: &str = "Carved Mazes

Usage:
    carved_mazes_driver -h | --help
    carved_mazes_driver [--size=<n>] [--seed=<n>] [--min-components=<n>] [(--max-attempts=<n>|--unbounded)] [--text-out=<path>] [--show-sequence]

Options:
    -h --help                Show this screen.
    --size=<n>               The grid is n * n cells [default: 30].
    --seed=<n>               Seed for the random number generator, the same seed gives the same maze.
    --min-components=<n>     Retry generation until a pass leaves at least this many components. Defaults to 11/18ths of the cell count.
    --max-attempts=<n>       Give up after this many generation passes [default: 10000].
    --unbounded              Never give up retrying generation passes.
    --text-out=<path>        Output file path for a textual rendering of the maze, printed to stdout if not given.
    --show-sequence          Also print the randomized cell visiting order used to carve the maze.
";

#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_size: usize,
    flag_seed: Option<u64>,
    flag_min_components: Option<usize>,
    flag_max_attempts: usize,
    flag_unbounded: bool,
    flag_text_out: String,
    flag_show_sequence: bool,
}

mod errors {
    use error_chain::*;
    error_chain! {

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
            Generation(::carved_mazes::generators::GenerationError);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {
    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let mut builder = MazeConfigBuilder::new().size(GridSize(args.flag_size));
    if let Some(min_components) = args.flag_min_components {
        builder = builder.min_components(ComponentsCount(min_components));
    }
    builder = if args.flag_unbounded {
        builder.unbounded_attempts()
    } else {
        builder.max_attempts(Attempts(args.flag_max_attempts))
    };
    let config = builder.build();
    info!("Maze configuration {:?}", config);

    let maze = if let Some(seed) = args.flag_seed {
        Maze::create(&config, &mut StdRng::seed_from_u64(seed))?
    } else {
        Maze::create(&config, &mut rand::thread_rng())?
    };

    let mut report = format!("{}\n", maze);
    report.push_str(&format!("start: {}\n", describe_point(maze.start())));
    report.push_str(&format!("end: {}\n", describe_point(maze.end())));
    if args.flag_show_sequence {
        report.push_str(&format!("sequence: {}\n", maze.pair_sequence().iter().join(" ")));
    }

    if args.flag_text_out.is_empty() {
        print!("{}", report);
    } else {
        write_text_to_file(&report, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    Ok(())
}

fn describe_point(point: Option<Cartesian2DCoordinate>) -> String {
    point.map_or_else(|| String::from("none"), |coord| coord.to_string())
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
