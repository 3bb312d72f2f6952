//! `jl`: evaluate a JsonLogic document.
//!
//! Usage:
//!   echo '{"+":[1,{"var":"x"}]} {"x":2}' | jl
//!
//! Reads the logic document and an optional data document from stdin and
//! prints the result as JSON.

use json_logic::cli;
use std::io::{self, Write};

fn main() {
    let registry = cli::registry();
    match cli::run(&registry, io::stdin().lock()) {
        Ok(result) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = writeln!(stdout, "{result}") {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
