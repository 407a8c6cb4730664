//! PCB Placer CLI
//!
//! Usage:
//!   pcb-placer [OPTIONS] [FILE]
//!
//! Reads a TOML problem description from FILE (or stdin when piped),
//! runs the phased solve and prints the board, the placement summary
//! and the constraint verification report. Without any input it runs
//! the built-in five-component demo.

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use pcb_placer::{report, solve, Problem};

#[derive(Parser)]
#[command(name = "pcb-placer")]
#[command(about = "Constraint-aware component placement on a bounded board")]
struct Cli {
    /// Problem file in TOML format (stdin when piped, built-in demo otherwise)
    input: Option<PathBuf>,

    /// Skip the character-grid board rendering
    #[arg(long)]
    no_grid: bool,

    /// Print the built-in demo problem TOML and exit
    #[arg(long)]
    demo_problem: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.demo_problem {
        print!("{}", pcb_placer::problem::DEMO_PROBLEM);
        return;
    }

    let problem = match load_problem(&cli) {
        Ok(problem) => problem,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let outcome = match solve(&problem) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!("{}", report::phase_summary(&outcome).trim_end());

    if !cli.no_grid {
        println!();
        println!("{}", report::board_grid(&outcome.placer).trim_end());
    }

    println!();
    println!("{}", report::placement_summary(&outcome.placer).trim_end());

    let verification = report::verify(&outcome);
    println!();
    println!("{}", verification.text.trim_end());

    println!();
    println!("{}", report::metrics(&outcome.placer).trim_end());

    if !outcome.success() || !verification.all_valid {
        std::process::exit(1);
    }
}

fn load_problem(cli: &Cli) -> Result<Problem, pcb_placer::ProblemError> {
    match &cli.input {
        Some(path) => Problem::from_file(path),
        None => {
            if io::stdin().is_terminal() {
                Ok(Problem::demo())
            } else {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                Problem::from_toml(&buffer)
            }
        }
    }
}
