//! `suffix-tree-dot`: print the suffix tree of a text as Graphviz DOT.
//!
//! Usage:
//!   suffix-tree-dot [--json] [--terminator C] [TEXT]
//!
//! The text is the first positional argument, or stdin when absent. Pipe the
//! output through `dot -Tsvg` to draw it.

use std::io::{self, Write};

use suffix_tree_dot::cli::{run, CliArgs, CliError, USAGE};

fn main() {
    env_logger::init();

    let args = match CliArgs::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            if matches!(e, CliError::Usage(_)) {
                eprintln!("{USAGE}");
            }
            std::process::exit(1);
        }
    };

    match run(&args, io::stdin().lock()) {
        Ok(out) => {
            if let Err(e) = io::stdout().write_all(out.as_bytes()) {
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
