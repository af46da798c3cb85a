use std::{fs, process};

use clap::Parser;
use marmoset::{get_result, interpreter::value::core::Object, tokenize};

/// marmoset is a small programming language with closures, hashes and macros.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells marmoset to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Prints the token stream instead of running the program.
    #[arg(short, long)]
    tokens: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            process::exit(1);
        })
    } else {
        args.contents
    };

    if args.tokens {
        for token in tokenize(&script) {
            println!("{token}");
        }
        return;
    }

    match get_result(&script) {
        Ok(Object::Null) => {},
        Ok(value) => println!("{value}"),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        },
    }
}
