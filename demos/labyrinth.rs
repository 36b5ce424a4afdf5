//! Terminal maze demo: generate, solve with every search, draw one path.
//!
//! Run: cargo run --bin labyrinth -- --width 30 --height 12 --seed 7
//! Set `RUST_LOG=debug` to see generation and search details.

use clap::Parser;
use labyrinth_demos::{Algorithm, Args, grid_size, render, summary};
use labyrinth_gen::{GenerateError, MazeGen};
use labyrinth_paths::PathFinder;

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), GenerateError> {
    let size = grid_size(args);
    let maze = match args.seed {
        Some(seed) => MazeGen::seeded(seed).generate(size.width, size.height)?,
        None => labyrinth_gen::generate(size.width, size.height)?,
    };
    log::info!("maze {size} ready");

    let (start, goal) = (size.entrance(), size.exit());
    let mut pf = PathFinder::new();
    let mut drawn = None;

    for alg in Algorithm::ALL {
        let outcome = alg.run(&mut pf, &maze, start, goal);
        println!("{}", summary(alg, &outcome));
        if args.trace {
            println!("  trace: {:?}", outcome.trace);
        }
        if alg == args.algorithm {
            drawn = outcome.path;
        }
    }

    println!();
    print!("{}", render(&maze, drawn.as_deref().unwrap_or_default()));
    Ok(())
}
