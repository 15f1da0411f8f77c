use std::env;
use std::fs;
use std::process;

use anyhow::{bail, Context, Result};
use crossterm::style::{style, Stylize};
use rand::{rngs::StdRng, SeedableRng};

use fifteen_solver::input::parse_board;
use fifteen_solver::{solve_bounded, Puzzle, SolveError, SIZE};

enum Source {
    Random,
    Tiles(String),
    File(String),
}

struct Options {
    source: Source,
    seed: Option<u64>,
    max_states: Option<usize>,
    replay: bool,
    verbose: bool,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut source = Source::Random;
        let mut seed = None;
        let mut max_states = None;
        let mut replay = false;
        let mut verbose = false;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                process::exit(0);
            } else if arg == "--random" {
                source = Source::Random;
            } else if arg == "--replay" {
                replay = true;
            } else if arg == "--verbose" || arg == "-v" {
                verbose = true;
            } else if let Some(value) = arg.strip_prefix("--tiles=") {
                source = Source::Tiles(value.to_string());
            } else if arg == "--tiles" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --tiles".to_string())?;
                source = Source::Tiles(value.into());
            } else if let Some(value) = arg.strip_prefix("--file=") {
                source = Source::File(value.to_string());
            } else if arg == "--file" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --file".to_string())?;
                source = Source::File(value.into());
            } else if let Some(value) = arg.strip_prefix("--seed=") {
                seed = Some(parse_seed(value)?);
            } else if arg == "--seed" {
                let value: String = args
                    .next()
                    .ok_or_else(|| "missing value after --seed".to_string())?
                    .into();
                seed = Some(parse_seed(&value)?);
            } else if let Some(value) = arg.strip_prefix("--max-states=") {
                max_states = Some(parse_max_states(value)?);
            } else if arg == "--max-states" {
                let value: String = args
                    .next()
                    .ok_or_else(|| "missing value after --max-states".to_string())?
                    .into();
                max_states = Some(parse_max_states(&value)?);
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            source,
            seed,
            max_states,
            replay,
            verbose,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: fifteen [options]

Options:
  --tiles <values>   Board as 16 values in row-major order, 0 for the blank
  --file <path>      Read the board from a file (4 rows of 4 values)
  --random           Generate a random board (default)
  --seed <u64>       Seed for --random
  --max-states <n>   Give up after recording n board states (default: no limit)
  --replay           Print every board along the solution
  -v, --verbose      Debug logging (RUST_LOG overrides)
  -h, --help         Show this message

Random boards often lie 50+ moves from the goal; without --max-states the
search may run for a long time and use several GB of memory."
        );
    }
}

fn parse_seed(value: &str) -> Result<u64, String> {
    value
        .parse::<u64>()
        .map_err(|_| "seed must be a non-negative integer".to_string())
}

fn parse_max_states(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err("max states must be a positive integer".to_string()),
    }
}

fn load_board(options: &Options) -> Result<Puzzle> {
    let puzzle = match &options.source {
        Source::Random => {
            println!("Generating a random board:");
            match options.seed {
                Some(seed) => Puzzle::random_with(&mut StdRng::seed_from_u64(seed)),
                None => Puzzle::random(),
            }
        }
        Source::Tiles(text) => parse_board(text).context("invalid --tiles value")?,
        Source::File(path) => {
            let text = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
            parse_board(&text).with_context(|| format!("invalid board in {path}"))?
        }
    };
    if !puzzle.is_valid() {
        bail!(SolveError::InvalidPermutation);
    }
    Ok(puzzle)
}

/// Prints `board` one row per line, highlighting the tile at `moved`.
fn print_board(board: &Puzzle, moved: Option<usize>) {
    for (row, tiles) in board.tiles().chunks(SIZE).enumerate() {
        let line: Vec<String> = tiles
            .iter()
            .enumerate()
            .map(|(col, &tile)| {
                let cell = format!("{tile:2}");
                if moved == Some(row * SIZE + col) {
                    style(cell).bold().yellow().to_string()
                } else {
                    cell
                }
            })
            .collect();
        println!("{}", line.join(" "));
    }
}

fn run(options: &Options) -> Result<i32> {
    let start = load_board(options)?;
    print_board(&start, None);

    let solution = match solve_bounded(&start, options.max_states) {
        Ok(solution) => solution,
        Err(SolveError::Unsolvable) => {
            println!("Impossible to solve board");
            return Ok(1);
        }
        Err(err @ SolveError::StateLimit { .. }) => {
            println!("No solution within the state limit: {err}");
            return Ok(1);
        }
        Err(err @ SolveError::ExhaustedFrontier { .. }) => {
            eprintln!("Could not solve board: {err}");
            return Ok(1);
        }
        Err(err) => return Err(err.into()),
    };

    let labels: Vec<String> = solution.moves.iter().map(|m| m.to_string()).collect();
    println!(
        "Solved in {} moves: [{}]",
        solution.moves.len(),
        labels.join(" ")
    );

    if options.replay {
        let boards = solution.replay(&start);
        let steps = solution.moves.iter().zip(boards.iter().skip(1));
        for (step, (dir, board)) in steps.enumerate() {
            println!("\n{} {}", step + 1, style(dir).bold());
            // the tile that moved now sits where the blank came from
            let moved = (board.space_index() as isize - dir.offset()) as usize;
            print_board(board, Some(moved));
        }
    }
    Ok(0)
}

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("fifteen: {err}");
            Options::print_help();
            process::exit(2);
        }
    };

    let default_level = if options.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match run(&options) {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("fifteen: {err:#}");
            process::exit(2);
        }
    }
}
