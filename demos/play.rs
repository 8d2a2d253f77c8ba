//! Generate a puzzle and play it on the terminal.
//!
//! **Usage**:
//! ```bash
//! cargo run --example play -- --vars 4 --seed 42
//! cargo run --example play -- --seed 7 --show
//! ```
//!
//! Commands: a variable letter toggles it, `submit` checks the selection,
//! and `N` values such as `TFFT` set all variables at once.

use std::io::{self, BufRead, Write};

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use superlogic::command::{Command, Outcome, Selection};
use superlogic::layout::fit_scale;
use superlogic::puzzle::{PuzzleBuilder, PuzzleConfig, DEFAULT_MAX_ATTEMPTS};

#[derive(Debug, Parser)]
#[command(name = "superlogic")]
#[command(about = "Self-referential boolean logic puzzle", long_about = None)]
struct Cli {
    /// Number of variables (3 or 4)
    #[arg(short, long, default_value = "3")]
    vars: usize,

    /// RNG seed (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Give up after this many attempts
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Print the solution right away
    #[arg(long)]
    show: bool,

    /// Width available for the widest expression, in characters
    #[arg(long, default_value = "12")]
    width: f32,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let config = PuzzleConfig::default()
        .with_num_vars(args.vars)
        .with_max_attempts(Some(args.max_attempts));
    let builder = PuzzleBuilder::new(config)?;
    let puzzle = builder.build(&mut rng)?;
    let n = puzzle.num_vars();

    println!("seed = {}", seed);
    println!();
    print!("{}", puzzle);

    // Monospace layout: every token is one column wide.
    let widest = puzzle
        .expressions()
        .iter()
        .map(|e| e.measure(false, |_| 1.0))
        .fold(0.0, f32::max);
    println!();
    println!("scale = {:.2}", fit_scale(widest, args.width));

    if args.show {
        println!("solution = {}", puzzle.solution().to_tf_string(n));
    }

    let mut selection = Selection::new(n);
    let stdin = io::stdin();
    loop {
        print!("[{}] > ", selection);
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line, n) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };
        match selection.apply(&command, &puzzle)? {
            Outcome::Toggled { var, value } => println!("{} is now {}", var, value),
            Outcome::Set => println!("set {}", selection),
            Outcome::Submitted { correct: true } => {
                println!("Solved!");
                break;
            }
            Outcome::Submitted { correct: false } => {
                println!("Wrong: submitted {}", selection);
            }
        }
    }

    Ok(())
}
